// tests/constant_time/mod.rs

pub mod field_tests;
pub mod group_tests;
pub mod pairing_tests;

pub use bls381_tests::constant_time::{generate_test_insights, TestConfig, TimingTester};

/// Warms up, times both input classes and asserts the comparison passes.
pub fn assert_constant_time<A, B>(name: &str, config: &TestConfig, mut a: A, mut b: B)
where
    A: FnMut(),
    B: FnMut(),
{
    for _ in 0..config.num_warmup {
        a();
        b();
    }

    let tester = TimingTester::from_config(config);
    let (t1, t2) = tester.measure_pair(&mut a, &mut b);

    let analysis = match tester.analyze_constant_time(&t1, &t2, config) {
        Ok(result) => result,
        Err(e) => panic!("Analysis error: {}", e),
    };

    analysis.print(name);
    println!("\n{}", generate_test_insights(&analysis, config, name));

    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold: {:.3})",
        name,
        analysis.combined_score,
        config.combined_score_threshold
    );
}
