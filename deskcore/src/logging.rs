//! Logger setup. Output goes to stderr so stdout stays free for program output.

use env_logger::Env;

/// Install the logger for `app`. Defaults to `info`; `RUST_LOG` overrides.
/// Safe to call more than once.
pub fn init(app: &str) {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
    if result.is_ok() {
        log::info!("{app} {} starting", env!("CARGO_PKG_VERSION"));
    }
}
