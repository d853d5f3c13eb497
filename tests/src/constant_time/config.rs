// src/constant_time/config.rs

/// Thresholds and sample sizes for one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_min: f64,
    pub mean_ratio_max: f64,
    pub std_dev_threshold: f64,        // Diagnostics only
    pub t_stat_threshold: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_min: 0.80,
            mean_ratio_max: 1.25,
            std_dev_threshold: 0.20,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 100,
            num_samples: 25,
            num_iterations: 100,
        }
    }
}

impl TestConfig {
    pub fn with_mean_ratio_range(mut self, min: f64, max: f64) -> Self {
        self.mean_ratio_min = min;
        self.mean_ratio_max = max;
        self
    }

    pub fn with_std_dev_threshold(mut self, threshold: f64) -> Self {
        self.std_dev_threshold = threshold;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Presets per operation class. Group and pairing operations are slow in
// unoptimized builds, so their sample counts are small.
impl TestConfig {
    pub fn for_field() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.3)
            .with_warmup(20)
            .with_samples_and_iterations(25, 20)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    pub fn for_comparison() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.5)
            .with_warmup(1000)
            .with_samples_and_iterations(25, 1000)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.2)
    }

    pub fn for_scalar_mul() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.3)
            .with_std_dev_threshold(0.30)
            .with_warmup(5)
            .with_samples_and_iterations(15, 4)
            .with_t_stat_threshold(2.2)
            .with_combined_score_threshold(2.2)
    }

    pub fn for_pairing() -> Self {
        Self::default()
            .with_mean_ratio_range(0.75, 1.33)
            .with_std_dev_threshold(0.40)
            .with_warmup(2)
            .with_samples_and_iterations(10, 2)
            .with_t_stat_threshold(2.5)
            .with_combined_score_threshold(2.5)
    }
}
