use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatencyMetrics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub p95: f64,
    pub std_dev: f64,
    /// Output tokens per second of total latency
    pub tokens_per_second: Option<f64>,
    /// Total output tokens generated
    pub total_tokens: u64,
}

impl LatencyMetrics {
    /// Calculate latency metrics from per-record latencies (seconds) and
    /// output token counts.
    pub fn from_measurements(latencies: &[f64], output_tokens: &[u64]) -> Self {
        let total_tokens: u64 = output_tokens.iter().sum();

        if latencies.is_empty() {
            return Self::empty(total_tokens);
        }

        let mut sorted = latencies.to_vec();
        sorted.sort_by(f64::total_cmp);

        let total_latency: f64 = latencies.iter().sum();
        let mean = total_latency / latencies.len() as f64;

        let variance = latencies
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>() / latencies.len() as f64;

        let tokens_per_second = if total_latency > 0.0 {
            Some(total_tokens as f64 / total_latency)
        } else {
            None
        };

        Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean,
            median: percentile(&sorted, 50.0),
            p90: percentile(&sorted, 90.0),
            p95: percentile(&sorted, 95.0),
            std_dev: variance.sqrt(),
            tokens_per_second,
            total_tokens,
        }
    }

    fn empty(total_tokens: u64) -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            median: 0.0,
            p90: 0.0,
            p95: 0.0,
            std_dev: 0.0,
            tokens_per_second: None,
            total_tokens,
        }
    }
}

/// Nearest-rank percentile over sorted values
pub fn percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }
    let index = (percentile / 100.0 * (sorted_values.len() - 1) as f64).round() as usize;
    sorted_values[index.min(sorted_values.len() - 1)]
}
