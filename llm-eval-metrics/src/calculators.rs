pub mod overlap;
pub mod verdict;
pub mod latency;

pub use overlap::*;
pub use verdict::*;
pub use latency::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricInput {
    pub reference: String,
    pub output: String,
}

impl MetricInput {
    pub fn new(reference: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricOutput {
    pub score: f64,
    pub metadata: serde_json::Value,
}
