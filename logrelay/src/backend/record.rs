//! Records handed to a backend.

use crate::level::LogLevel;

/// Source location of a log call.
///
/// The values come from the caller's instrumentation (usually the
/// [`call_site!`](crate::call_site) macro) and are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    /// Source file path
    pub file: &'a str,
    /// Enclosing function path
    pub function: &'a str,
    /// Line number
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from its parts.
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// A fully-specified message that passed filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Severity of the message
    pub level: LogLevel,
    /// Component on whose behalf the message was emitted
    pub component: &'a str,
    /// Rendered message text
    pub message: &'a str,
    /// Where the call was made
    pub call_site: CallSite<'a>,
}

impl<'a> Record<'a> {
    /// Creates a record.
    pub fn new(
        level: LogLevel,
        component: &'a str,
        message: &'a str,
        call_site: CallSite<'a>,
    ) -> Self {
        Self {
            level,
            component,
            message,
            call_site,
        }
    }

    /// Copies the record into an owned form.
    pub fn to_owned_record(&self) -> OwnedRecord {
        OwnedRecord {
            level: self.level,
            component: self.component.to_string(),
            message: self.message.to_string(),
            file: self.call_site.file.to_string(),
            function: self.call_site.function.to_string(),
            line: self.call_site.line,
        }
    }
}

/// Owned copy of a [`Record`], as kept by [`MemoryBackend`](super::MemoryBackend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRecord {
    pub level: LogLevel,
    pub component: String,
    pub message: String,
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl OwnedRecord {
    /// Borrows the owned record as a [`Record`].
    pub fn as_record(&self) -> Record<'_> {
        Record::new(
            self.level,
            &self.component,
            &self.message,
            CallSite::new(&self.file, &self.function, self.line),
        )
    }
}
