use std::num::NonZeroU32;

use tracing::info;
use zbench_core::{BenchError, CodecConfig, Report, Runner};

use crate::fetch::fetch_payload;
use crate::view::ReportView;

/// Settings for one benchmark run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub url: String,
    pub count: NonZeroU32,
}

/// Fetch, benchmark every config in order, then hand the report to `view`.
///
/// All-or-nothing: the first error from any stage is returned and `view` is
/// never shown a partial report.
pub fn run(
    opts: &RunOptions,
    registry: &[CodecConfig],
    view: &mut dyn ReportView,
) -> Result<Report, BenchError> {
    let payload = fetch_payload(&opts.url)?;
    let results = Runner::new(opts.count).run_all(&payload, registry)?;
    let report = Report::from_results(&results);
    info!(rows = report.rows().len(), "benchmark complete");
    view.show(&report)?;
    Ok(report)
}
