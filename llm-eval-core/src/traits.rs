use crate::domain::{FailureRow, SummaryRow};
use crate::error::Result;

pub trait MetricCalculator {
    type Input;
    type Output;

    fn calculate(&self, input: Self::Input) -> Result<Self::Output>;
}

/// Receives one row per evaluated record.
pub trait SummarySink {
    fn write_summary(&mut self, row: &SummaryRow) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Receives one row per classified failure.
pub trait FailureSink {
    fn write_failure(&mut self, row: &FailureRow) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl SummarySink for Vec<SummaryRow> {
    fn write_summary(&mut self, row: &SummaryRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }
}

impl FailureSink for Vec<FailureRow> {
    fn write_failure(&mut self, row: &FailureRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }
}

impl<S: SummarySink + ?Sized> SummarySink for &mut S {
    fn write_summary(&mut self, row: &SummaryRow) -> Result<()> {
        (**self).write_summary(row)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: FailureSink + ?Sized> FailureSink for &mut S {
    fn write_failure(&mut self, row: &FailureRow) -> Result<()> {
        (**self).write_failure(row)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
