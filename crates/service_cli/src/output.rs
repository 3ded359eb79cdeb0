//! Rendering of simulation results
//!
//! All renderers write to a caller-supplied [`Write`] so they can be
//! tested against in-memory buffers.

use std::io::Write;
use std::str::FromStr;

use costsim_core::{format_currency, Currency};
use costsim_engine::SimulationRun;

use crate::{CliError, Result};

/// Width of the longest histogram bar in table output
const BAR_WIDTH: usize = 40;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown output format: {}. Supported: table, json, csv",
                other
            ))),
        }
    }
}

/// Write `run` to `out` in the requested format
pub fn render<W: Write>(
    out: &mut W,
    run: &SimulationRun,
    format: OutputFormat,
    currency: Currency,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(out, run, currency),
        OutputFormat::Json => render_json(out, run),
        OutputFormat::Csv => render_csv(out, run),
    }
}

/// Human-readable summary with a text histogram
pub fn render_table<W: Write>(out: &mut W, run: &SimulationRun, currency: Currency) -> Result<()> {
    writeln!(out, "Monte Carlo cost-risk simulation")?;
    writeln!(out, "  Trials:        {}", run.trial_count)?;
    writeln!(out, "  Active risks:  {}", run.num_active_risks)?;
    writeln!(out, "  Seed:          {}", run.seed)?;
    if run.fallback_substitutions > 0 {
        writeln!(out, "  Fallbacks:     {}", run.fallback_substitutions)?;
    }
    writeln!(out)?;

    if run.is_empty() {
        writeln!(out, "No open risks to simulate.")?;
        return Ok(());
    }

    let s = &run.statistics;
    let rows = [
        ("Mean", s.mean),
        ("Median", s.median),
        ("Std dev", s.std_dev),
        ("Min", s.min),
        ("P10", s.p10),
        ("P25", s.p25),
        ("P75", s.p75),
        ("P90", s.p90),
        ("P95", s.p95),
        ("Max", s.max),
    ];
    let formatted: Vec<(&str, String)> = rows
        .iter()
        .map(|(label, value)| (*label, format_currency(*value, currency)))
        .collect();
    let value_width = formatted.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);

    let rule = format!("+{}+{}+", "-".repeat(10), "-".repeat(value_width + 2));
    writeln!(out, "{}", rule)?;
    writeln!(out, "| {:<8} | {:>width$} |", "Metric", "Value", width = value_width)?;
    writeln!(out, "{}", rule)?;
    for (label, value) in &formatted {
        writeln!(out, "| {:<8} | {:>width$} |", label, value, width = value_width)?;
    }
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    writeln!(out, "Distribution")?;
    let labels: Vec<String> = run
        .histogram
        .bin_midpoints
        .iter()
        .map(|m| format_currency(*m, currency))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let peak = run.histogram.frequencies.iter().copied().max().unwrap_or(0);
    for (label, count) in labels.iter().zip(&run.histogram.frequencies) {
        let bar_len = if peak == 0 { 0 } else { count * BAR_WIDTH / peak };
        writeln!(
            out,
            "  {:>width$} | {:<bar$} {}",
            label,
            "#".repeat(bar_len),
            count,
            width = label_width,
            bar = BAR_WIDTH
        )?;
    }
    Ok(())
}

/// Full [`SimulationRun`] as pretty-printed JSON
pub fn render_json<W: Write>(out: &mut W, run: &SimulationRun) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, run)?;
    writeln!(out)?;
    Ok(())
}

/// One `trial,total` row per trial
pub fn render_csv<W: Write>(out: &mut W, run: &SimulationRun) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["trial", "total"])?;
    for (idx, total) in run.trial_totals.iter().enumerate() {
        writer.write_record([(idx + 1).to_string(), format!("{:.2}", total)])?;
    }
    writer.flush()?;
    Ok(())
}
