//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths
//! and via the crate-root re-exports.

/// Test that the register boundary is accessible via absolute path.
#[test]
fn test_register_module_exports() {
    use costsim_core::register::{
        active_profiles, clamp_trial_count, RiskRecord, RiskStatus, DEFAULT_TRIALS, MAX_TRIALS,
        MIN_TRIALS,
    };

    let records = vec![RiskRecord::new("r", RiskStatus::Open, 50.0, 1.0, 2.0, 3.0)];
    assert_eq!(active_profiles(&records).len(), 1);
    assert_eq!(clamp_trial_count(DEFAULT_TRIALS as i64), DEFAULT_TRIALS);
    assert!(MIN_TRIALS < MAX_TRIALS);
}

/// Test that currency types and formatting are accessible via absolute path.
#[test]
fn test_currency_module_exports() {
    use costsim_core::format::format_currency;
    use costsim_core::types::currency::Currency;
    use costsim_core::types::error::CurrencyError;

    assert_eq!(format_currency(1234.56, Currency::USD), "$1,234.56");
    let err: Result<Currency, CurrencyError> = "XYZ".parse();
    assert!(err.is_err());
}

/// Test crate-root re-exports.
#[test]
fn test_root_reexports() {
    use costsim_core::{
        active_profiles, clamp_trial_count, format_currency, Currency, RiskCostProfile,
        RiskRecord, RiskStatus,
    };

    let record = RiskRecord::new("root", RiskStatus::Open, 100.0, 10.0, 10.0, 10.0);
    let profiles: Vec<RiskCostProfile> = active_profiles(&[record]);
    assert_eq!(profiles[0].most_likely_cost, 10.0);
    assert_eq!(clamp_trial_count(-1), 100);
    assert_eq!(format_currency(10.0, Currency::INR), "₹10.00");
}
