// src/models/run_summary.rs
use crate::models::{FileFailure, FileReport};

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
            failures: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn files_processed(&self) -> u64 {
        u64::try_from(self.reports.len()).unwrap_or(u64::MAX)
    }

    #[inline]
    #[must_use]
    pub fn total_replaced(&self) -> u64 {
        self.reports
            .iter()
            .fold(0_u64, |acc, report| acc.saturating_add(report.replaced))
    }

    #[inline]
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
