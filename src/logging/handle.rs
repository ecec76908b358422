use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle для управления lifecycle логирования.
///
/// Пока handle жив, фоновый писатель файлового лога работает; при drop
/// буфер сбрасывается на диск.
pub struct LoggingHandle {
    _file_guard: Option<WorkerGuard>,
    file_dir: Option<PathBuf>,
}

impl LoggingHandle {
    pub fn new(
        file_guard: Option<WorkerGuard>,
        file_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            _file_guard: file_guard,
            file_dir,
        }
    }

    /// Handle без файлового вывода.
    pub fn console_only() -> Self {
        Self::new(None, None)
    }

    pub fn has_file_sink(&self) -> bool {
        self._file_guard.is_some()
    }

    /// Каталог файлового лога, если он включён.
    pub fn file_dir(&self) -> Option<&PathBuf> {
        self.file_dir.as_ref()
    }
}
