//! perfmon-stats-core (engine-agnostic)
//!
//! Periodic sampling of frame rate, draw time and memory usage with running
//! average/min/max per reporting window. Hosts drive the sampler once per
//! rendered frame and supply raw counters through [`MetricSource`]; formatted
//! reports are pushed to a [`TextSink`].

pub mod accumulate;
pub mod config;
pub mod error;
pub mod metric;
pub mod monitor;
pub mod report;
pub mod sampler;
pub mod sink;
pub mod units;

// Re-exports for consumers (adapters)
pub use accumulate::MetricAccumulator;
pub use config::{ExtremaScope, SamplerConfig};
pub use error::ConfigError;
pub use metric::{MetricKind, MetricSource};
pub use monitor::PerformanceMonitor;
pub use report::{MetricSnapshot, Report, ReportStats};
pub use sampler::{FrameStatsSampler, TickOutcome};
pub use sink::TextSink;
