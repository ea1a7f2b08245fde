use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Variable holding the log filter directives, e.g. `IDDS_ENV_LOG=debug`.
pub const LOG_ENV: &str = "IDDS_ENV_LOG";

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the script printed on stdout.
pub fn init_logger(default: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .init();
}
