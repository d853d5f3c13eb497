//! Statistical timing harness
//!
//! Each test times two input classes for the same operation and compares
//! the samples with Welch's t-test. An implementation passes when the
//! combined score stays under the configured threshold.
pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{generate_test_insights, TimingAnalysis, TimingTester};
