//! Console backend rendering one marker-prefixed line per record.

use std::io::{self, Write};

use parking_lot::Mutex;

use super::{Backend, Record};

/// Backend writing `"{marker}[{component}->{function}:{line}] {message}"`
/// lines to a writer (stderr unless configured otherwise).
///
/// Write failures are ignored.
pub struct ConsoleBackend {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleBackend {
    /// Create a console backend that writes to stderr.
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a console backend that writes to `writer`.
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Render a record the way this backend prints it.
    pub fn format_line(record: &Record<'_>) -> String {
        format!(
            "{}[{}->{}:{}] {}",
            record.level.marker(),
            record.component,
            record.call_site.function,
            record.call_site.line,
            record.message
        )
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleBackend").finish_non_exhaustive()
    }
}

impl Backend for ConsoleBackend {
    fn log(&self, record: &Record<'_>) {
        let line = Self::format_line(record);
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}
