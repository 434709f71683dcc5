use std::time::Duration;

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

use crate::runner::BenchmarkResult;

/// Fixed first row of every report.
pub const HEADER: [&str; 6] = [
    "Name",
    "Level",
    "Rate",
    "Compress",
    "Decompress",
    "Compress+Decompress",
];

/// Rendered report rows, one per benchmark result, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<[String; 6]>,
}

impl Report {
    pub fn from_results(results: &[BenchmarkResult]) -> Self {
        let rows = results
            .iter()
            .map(|r| {
                [
                    r.name.to_string(),
                    r.level.to_string(),
                    format_ratio(r.ratio),
                    format_duration(r.compress_avg),
                    format_duration(r.decompress_avg),
                    format_duration(r.combined_avg),
                ]
            })
            .collect();
        Self { rows }
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[[String; 6]] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header plus data rows as a boxed text table.
    pub fn to_table(&self) -> String {
        let header = HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        let data = std::iter::once(header).chain(self.rows.iter().map(|r| r.to_vec()));

        Table::from_iter(data)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()
    }
}

/// Human-readable duration with a unit suffix: `812ns`, `12.3µs`, `1.2ms`, `1.0s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        format!("{:.1}µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.1}ms", nanos as f64 / 1e6)
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// Percentage with three significant digits, trailing zeros dropped.
///
/// `45.26` → `"45.3%"`, `100.0` → `"100%"`, `0.5123` → `"0.512%"`,
/// `1234.5` → `"1230%"`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{}%", significant(ratio, 3))
}

fn significant(value: f64, digits: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let excess = magnitude - (digits - 1);
    if excess > 0 {
        // Integer part alone has more digits than allowed: zero the tail.
        let scale = 10f64.powi(excess);
        return format!("{:.0}", (value / scale).round() * scale);
    }
    let decimals = (-excess) as usize;
    let mut s = format!("{value:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
