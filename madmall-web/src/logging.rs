/// Process-wide logger setup.
use env_logger::Env;
use log::SetLoggerError;

/// Environment variable holding the log filter, e.g. `madmall=debug`.
pub const LOG_FILTER_ENV: &str = "MADMALL_LOG";

pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_FILTER_ENV, "info"))
        .format_timestamp_millis()
        .try_init()
}
