#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the analysis module.
pub mod error;

/// physical-unit metrics aggregation module.
pub mod metrics;

/// threshold compliance evaluation module.
pub mod compliance;

/// overlay rendering for analysis results.
pub mod render;

/// the end-to-end measurement pipeline.
pub mod pipeline;

pub use crate::compliance::{ComplianceThresholds, Verdict};
pub use crate::error::AnalysisError;
pub use crate::metrics::CrackMetrics;
pub use crate::pipeline::{analyze_gray, analyze_rgb, AnalysisOutput, AnalyzeParams};
