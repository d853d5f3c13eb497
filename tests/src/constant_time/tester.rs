// src/constant_time/tester.rs
use super::config::TestConfig;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Result of comparing two timing samples
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
    pub cohens_d: f64,
    pub effect_size_interpretation: String,
    pub confidence_interval: (f64, f64),
}

impl TimingAnalysis {
    pub fn print(&self, name: &str) {
        println!("{} Timing Analysis:", name);
        println!("  Mean times: {:.2} ns vs {:.2} ns", self.mean_a, self.mean_b);
        println!("  Mean ratio: {:.3}", self.mean_ratio);
        println!("  t-statistic: {:.3} (df {:.1})", self.t_statistic, self.degrees_of_freedom);
        println!("  p-value: {:.4}", self.p_value);
        println!(
            "  Effect size (Cohen's d): {:.3} - {}",
            self.cohens_d, self.effect_size_interpretation
        );
        println!(
            "  95% CI for mean difference: ({:.2}, {:.2}) ns",
            self.confidence_interval.0, self.confidence_interval.1
        );
        println!("  Combined score: {:.3}", self.combined_score);
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let iterations = self.num_iterations.max(1) as u128;
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations.max(1) {
                f();
            }
            times.push(start.elapsed().as_nanos() / iterations);
        }
        times
    }

    /// Interleaves the two closures sample by sample so that drift in
    /// machine load hits both classes equally.
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let single = Self::new(1, self.num_iterations);
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.extend(single.measure(&mut a));
            times_b.extend(single.measure(&mut b));
        }
        (times_a, times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drops samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    /// Welch's t-statistic
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let se = (var_a / n_a + var_b / n_b).sqrt();
        if se == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / se
    }

    /// Two-tailed p-value from Student's t distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return Self::fallback_p_value(t_stat);
        }

        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => Self::fallback_p_value(t_stat),
        }
    }

    fn fallback_p_value(t_stat: f64) -> f64 {
        match t_stat.abs() {
            t if t < 0.5 => 0.68,
            t if t < 1.0 => 0.45,
            t if t < 1.5 => 0.25,
            t if t < 2.0 => 0.12,
            t if t < 2.5 => 0.05,
            t if t < 3.0 => 0.02,
            _ => 0.01,
        }
    }

    /// Welch-Satterthwaite degrees of freedom
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let term_a = Self::variance(times_a, mean_a) / n_a;
        let term_b = Self::variance(times_b, mean_b) / n_b;

        (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0))
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        if pooled == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / pooled
    }

    pub fn interpret_effect_size(d: f64) -> String {
        match d {
            d if d < 0.2 => "Negligible effect".to_string(),
            d if d < 0.5 => "Small effect".to_string(),
            d if d < 0.8 => "Medium effect".to_string(),
            d if d < 1.2 => "Large effect".to_string(),
            _ => "Very large effect".to_string(),
        }
    }

    pub fn t_critical_value(df: f64, confidence_level: f64) -> f64 {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0),
            Err(_) => match confidence_level {
                c if c >= 0.99 => 2.58,
                c if c >= 0.95 => 1.96,
                c if c >= 0.90 => 1.64,
                _ => 1.28,
            },
        }
    }

    /// Weighted blend of the mean ratio, the t-statistic and the worst
    /// relative standard deviation. Never below 1.
    pub fn combined_score(
        &self,
        mean_ratio: f64,
        t_stat: f64,
        rel_std_dev_a: f64,
        rel_std_dev_b: f64,
    ) -> f64 {
        let max_rel_std_dev = f64::max(rel_std_dev_a, rel_std_dev_b);
        let score = 1.0
            + (mean_ratio - 1.0) * 0.5
            + (t_stat / 10.0) * 0.2
            + max_rel_std_dev * 0.3;

        if !score.is_finite() || score < 1.0 {
            mean_ratio
        } else {
            score
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);

        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("After outlier removal, not enough data points remain".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        if mean_a == 0.0 || mean_b == 0.0 {
            return Err("Timer resolution too coarse for this operation".to_string());
        }
        let var_a = Self::variance(&clean_a, mean_a);
        let var_b = Self::variance(&clean_b, mean_b);
        let std_dev_a = var_a.sqrt();
        let std_dev_b = var_b.sqrt();

        let mean_ratio = if mean_a > mean_b {
            mean_a / mean_b
        } else {
            mean_b / mean_a
        };

        let t_stat = Self::t_statistic(&clean_a, &clean_b);
        let df = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_stat, df);
        let combined_score =
            self.combined_score(mean_ratio, t_stat, std_dev_a / mean_a, std_dev_b / mean_b);

        let cohens_d = Self::cohens_d(&clean_a, &clean_b);
        let effect_size_interpretation = Self::interpret_effect_size(cohens_d);

        let standard_error = (var_a / clean_a.len() as f64 + var_b / clean_b.len() as f64).sqrt();
        let margin = Self::t_critical_value(df, 0.95) * standard_error;
        let mean_diff = (mean_a - mean_b).abs();
        let confidence_interval = ((mean_diff - margin).max(0.0), mean_diff + margin);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic: t_stat,
            degrees_of_freedom: df,
            p_value,
            combined_score,
            is_constant_time: combined_score <= config.combined_score_threshold,
            cohens_d,
            effect_size_interpretation,
            confidence_interval,
        })
    }
}

/// Summarizes a timing comparison and the patterns it resembles
pub fn generate_test_insights(
    analysis: &TimingAnalysis,
    config: &TestConfig,
    operation: &str,
) -> String {
    if analysis.is_constant_time {
        return format!("PASS: {} appears to be constant-time.\n", operation);
    }

    let mean_diff = (analysis.mean_a - analysis.mean_b).abs();
    let diff_percent = mean_diff / f64::min(analysis.mean_a, analysis.mean_b) * 100.0;
    let rel_std_dev_a = analysis.std_dev_a / analysis.mean_a;
    let rel_std_dev_b = analysis.std_dev_b / analysis.mean_b;

    let mut insights = format!("FAIL: {} timing difference detected.\n\n", operation);
    insights.push_str("METRICS:\n");
    insights.push_str(&format!(
        "  Mean: {:.0} ns vs {:.0} ns (diff: {:.1}%)\n",
        analysis.mean_a, analysis.mean_b, diff_percent
    ));
    insights.push_str(&format!(
        "  Stats: t={:.1}, p={:.2e}, d={:.1}, score={:.2} (limit {:.2})\n\n",
        analysis.t_statistic,
        analysis.p_value,
        analysis.cohens_d,
        analysis.combined_score,
        config.combined_score_threshold
    ));

    insights.push_str("PATTERNS:\n");
    let mut detected = false;

    if analysis.mean_ratio > config.mean_ratio_max && analysis.t_statistic > 15.0 {
        detected = true;
        insights.push_str("  Input-dependent execution path: a branch or early exit on a secret bit\n");
    }

    let spread = f64::max(rel_std_dev_a, rel_std_dev_b) / f64::min(rel_std_dev_a, rel_std_dev_b);
    if spread > 4.0 && (rel_std_dev_a > 0.1 || rel_std_dev_b > 0.1) {
        detected = true;
        insights.push_str("  Input-dependent iteration count in a loop\n");
    }

    if analysis.t_statistic > 15.0 && analysis.cohens_d > 0.8 && analysis.cohens_d < 1.5 {
        detected = true;
        insights.push_str("  Small but consistent difference: check compiler or CPU effects\n");
    }

    if f64::max(rel_std_dev_a, rel_std_dev_b) > config.std_dev_threshold {
        detected = true;
        insights.push_str("  Noisy samples: rerun on an idle machine before drawing conclusions\n");
    }

    if !detected {
        insights.push_str("  No known signature, review the operation for data-dependent work\n");
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_score_one() {
        let tester = TimingTester::new(8, 1);
        let times = vec![100u128, 101, 99, 100, 100, 102, 98, 100];
        let analysis = tester
            .analyze_constant_time(&times, &times, &TestConfig::default())
            .unwrap();
        assert_eq!(analysis.mean_ratio, 1.0);
        assert_eq!(analysis.t_statistic, 0.0);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn test_separated_samples_fail() {
        let tester = TimingTester::new(8, 1);
        let fast = vec![100u128, 101, 99, 100, 100, 102, 98, 100];
        let slow: Vec<u128> = fast.iter().map(|t| t * 3).collect();
        let analysis = tester
            .analyze_constant_time(&fast, &slow, &TestConfig::default())
            .unwrap();
        assert!(!analysis.is_constant_time);
        assert!(analysis.p_value < 0.01);
        let insights = generate_test_insights(&analysis, &TestConfig::default(), "op");
        assert!(insights.starts_with("FAIL"));
    }

    #[test]
    fn test_remove_outliers() {
        let times = vec![10u128, 11, 10, 12, 11, 10, 1000];
        let clean = TimingTester::remove_outliers(&times);
        assert!(!clean.contains(&1000));
        assert_eq!(clean.len(), 6);
    }
}
