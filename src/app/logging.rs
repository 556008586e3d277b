use std::io;
use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Installs the global subscriber, writing to `log_file` when given and to stderr otherwise.
///
/// The returned guard flushes the file writer on drop, so it must live as long as the program.
pub fn init(level: Level, log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let Some(path) = log_file else {
        builder.with_writer(io::stderr).init();
        return Ok(None);
    };

    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log file path {} has no file name", path.display()),
        )
    })?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        directory, file_name,
    ));
    builder.with_ansi(false).with_writer(writer).init();
    Ok(Some(guard))
}
