//! Distribution statistics and reporting.

pub mod histogram;
pub mod report;
pub mod summary;

pub use histogram::{Bucket, BucketWidth, Histogram};
pub use report::{ReportSummary, Reporter, DEFAULT_SAMPLE_SIZE};
pub use summary::DistributionSummary;
