// tests/constant_time_tests.rs
// Entry point for the timing tests under tests/constant_time/

mod constant_time;
