//! High-level operations: whole-graph analytics.

pub mod analytics;

pub use analytics::{AnalyticsEngine, ComponentSummary};
