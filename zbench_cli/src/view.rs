use std::io::Write;

use zbench_core::{BenchError, Report};

/// Where a finished report goes.
pub trait ReportView {
    /// Display `report`. Interactive views return once the user quits.
    fn show(&mut self, report: &Report) -> Result<(), BenchError>;
}

/// Writes the table once and returns immediately.
pub struct PlainView<W: Write> {
    out: W,
}

impl<W: Write> PlainView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportView for PlainView<W> {
    fn show(&mut self, report: &Report) -> Result<(), BenchError> {
        writeln!(self.out, "{}", report.to_table())?;
        self.out.flush()?;
        Ok(())
    }
}
