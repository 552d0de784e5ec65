/// Installs an `env_logger` that writes through the test harness, so the
/// library's `log` output shows up for failing tests. Filtering follows
/// `RUST_LOG`. Safe to call from every test: only the first call installs
/// the logger.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
