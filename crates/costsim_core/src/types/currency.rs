//! Currency types for cost reporting.
//!
//! The risk register records cost impacts in one of four currencies. The
//! simulation engine itself is currency-agnostic; currencies only matter when
//! results are rendered at the boundary.
//!
//! # Examples
//!
//! ```
//! use costsim_core::types::currency::Currency;
//!
//! let gbp = Currency::GBP;
//! assert_eq!(gbp.code(), "GBP");
//! assert_eq!(gbp.symbol(), "£");
//! assert_eq!(gbp.decimal_places(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes supported by the risk register.
///
/// # Variants
/// - `USD`: United States Dollar ($)
/// - `GBP`: British Pound Sterling (£)
/// - `EUR`: Euro (€)
/// - `INR`: Indian Rupee (₹)
///
/// # Examples
///
/// ```
/// use costsim_core::types::currency::Currency;
///
/// assert_eq!(Currency::default(), Currency::USD);
///
/// // Parse from string (case-insensitive)
/// let inr: Currency = "inr".parse().unwrap();
/// assert_eq!(inr, Currency::INR);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,

    /// British Pound Sterling
    GBP,

    /// Euro
    EUR,

    /// Indian Rupee
    INR,
}

impl Currency {
    /// All supported currencies, in register display order.
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::GBP, Currency::EUR, Currency::INR];

    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::INR => "INR",
        }
    }

    /// Returns the display symbol prefixed to formatted amounts.
    ///
    /// # Examples
    ///
    /// ```
    /// use costsim_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.symbol(), "$");
    /// assert_eq!(Currency::EUR.symbol(), "€");
    /// assert_eq!(Currency::INR.symbol(), "₹");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::GBP => "£",
            Currency::EUR => "€",
            Currency::INR => "₹",
        }
    }

    /// Returns the number of decimal places used when formatting amounts.
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::USD | Currency::GBP | Currency::EUR | Currency::INR => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "GBP" => Ok(Currency::GBP),
            "EUR" => Ok(Currency::EUR),
            "INR" => Ok(Currency::INR),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
