//! File logging. The terminal belongs to the UI, so nothing goes to stdout.

use color_eyre::eyre::{Result, WrapErr};
use flexi_logger::{Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming};
use passing_stars_config::Config;

/// Level used until the config has been read.
pub const STARTUP_LEVEL: &str = "info";

/// Start the logger at [`STARTUP_LEVEL`]. Keep the handle alive for the
/// program's lifetime or buffered records are lost.
pub fn init() -> Result<LoggerHandle> {
    let directory = Config::project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| "logs".into());

    let handle = Logger::with(level_spec(STARTUP_LEVEL)?)
        .log_to_file(
            FileSpec::default()
                .directory(directory)
                .basename("passing-stars"),
        )
        .rotate(
            Criterion::Size(1024 * 1024), // 1MB
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;
    Ok(handle)
}

/// Switch a running logger to the configured `level`.
pub fn apply_level(handle: &LoggerHandle, level: &str) -> Result<()> {
    handle.set_new_spec(level_spec(level)?);
    Ok(())
}

/// Parse a log filter such as `"debug"` or `"info,passing_stars_field=trace"`.
fn level_spec(level: &str) -> Result<LogSpecification> {
    LogSpecification::parse(level).wrap_err_with(|| format!("invalid log_level {level:?}"))
}
