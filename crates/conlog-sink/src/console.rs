//! crates/conlog-sink/src/console.rs
//! The console-like host API and its backends.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::value::Value;

/// Identifies a console entry point.
///
/// The string form returned by [`Method::as_str`] doubles as the
/// per-method rule key used by the façade's activation rules
/// (e.g. `"request.group_collapsed"`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// Plain output.
    Log,
    /// Warning output.
    Warn,
    /// Trace output.
    Trace,
    /// Error output.
    Error,
    /// Tabular output.
    Table,
    /// Object inspection.
    Dir,
    /// Markup inspection.
    Dirxml,
    /// Opens an output group.
    Group,
    /// Opens a collapsed output group.
    GroupCollapsed,
    /// Closes the current output group.
    GroupEnd,
    /// Labelled call counter.
    Count,
    /// Starts a labelled timer.
    Time,
    /// Stops a labelled timer.
    TimeEnd,
    /// Timeline marker.
    TimeStamp,
    /// Starts a profile capture.
    Profile,
    /// Stops a profile capture.
    ProfileEnd,
    /// Conditional output.
    Assert,
    /// Clears the console.
    Clear,
}

impl Method {
    /// Every console method, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Log,
        Self::Warn,
        Self::Trace,
        Self::Error,
        Self::Table,
        Self::Dir,
        Self::Dirxml,
        Self::Group,
        Self::GroupCollapsed,
        Self::GroupEnd,
        Self::Count,
        Self::Time,
        Self::TimeEnd,
        Self::TimeStamp,
        Self::Profile,
        Self::ProfileEnd,
        Self::Assert,
        Self::Clear,
    ];

    /// Returns the method's rule-key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Trace => "trace",
            Self::Error => "error",
            Self::Table => "table",
            Self::Dir => "dir",
            Self::Dirxml => "dirxml",
            Self::Group => "group",
            Self::GroupCollapsed => "group_collapsed",
            Self::GroupEnd => "group_end",
            Self::Count => "count",
            Self::Time => "time",
            Self::TimeEnd => "time_end",
            Self::TimeStamp => "time_stamp",
            Self::Profile => "profile",
            Self::ProfileEnd => "profile_end",
            Self::Assert => "assert",
            Self::Clear => "clear",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A console-like diagnostic API.
///
/// This is the seam between the façade and the host: the façade decides
/// whether a call is activated, then forwards the method identity and the
/// argument list through [`call`](Self::call). Backends never filter.
pub trait Console {
    /// Handles one console call.
    fn call(&self, method: Method, args: &[Value]);
}

/// Controls whether a [`WriterConsole`] appends a trailing newline per call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered call.
    WithNewline,
    /// Emit the rendered call without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

struct WriterState<W> {
    writer: W,
    line_mode: LineMode,
    depth: usize,
}

/// Line-oriented console backend over an [`io::Write`] implementor.
///
/// Each call renders its arguments space-joined on one line, indented two
/// spaces per open group. [`Method::GroupEnd`] and [`Method::Clear`] emit
/// nothing; group-opening calls emit their arguments before indenting.
/// Writer errors are swallowed: the console surface models no I/O failure
/// path.
///
/// # Examples
///
/// ```
/// use conlog_sink::{Console, Method, WriterConsole, values};
///
/// let console = WriterConsole::new(Vec::new());
/// console.call(Method::Log, &values!["ready"]);
/// console.call(Method::Group, &values!["batch"]);
/// console.call(Method::Log, &values!["item"]);
///
/// let output = String::from_utf8(console.into_inner()).unwrap();
/// assert_eq!(output, "ready\nbatch\n  item\n");
/// ```
pub struct WriterConsole<W> {
    state: Mutex<WriterState<W>>,
}

impl<W> WriterConsole<W> {
    /// Creates a console that appends a newline after each call.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a console with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(WriterState {
                writer,
                line_mode,
                depth: 0,
            }),
        }
    }

    /// Consumes the console and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, WriterState<W>> {
        // A poisoned guard still holds consistent state; recover it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterConsole<io::Stderr> {
    /// Creates a console writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn call(&self, method: Method, args: &[Value]) {
        let mut state = self.lock();
        match method {
            Method::GroupEnd => {
                state.depth = state.depth.saturating_sub(1);
            }
            Method::Clear => {
                state.depth = 0;
            }
            Method::Group | Method::GroupCollapsed => {
                write_line(&mut state, args);
                state.depth += 1;
            }
            _ => write_line(&mut state, args),
        }
    }
}

fn write_line<W: Write>(state: &mut WriterState<W>, args: &[Value]) {
    if args.is_empty() {
        return;
    }
    let indent = "  ".repeat(state.depth);
    let rendered = Value::join(args);
    let result = if state.line_mode.append_newline() {
        writeln!(state.writer, "{indent}{rendered}")
    } else {
        write!(state.writer, "{indent}{rendered}")
    };
    let _ = result;
}

/// One captured console call.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    /// The console entry point that was invoked.
    pub method: Method,
    /// The forwarded arguments.
    pub args: Vec<Value>,
}

/// Console backend that records every call for inspection.
///
/// Used by tests to assert on exactly what the façade forwarded.
/// [`take`](Self::take) drains the captured calls in invocation order.
#[derive(Default)]
pub struct RecordingConsole {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingConsole {
    /// Drains all captured calls, clearing the internal buffer.
    #[must_use]
    pub fn take(&self) -> Vec<RecordedCall> {
        std::mem::take(
            &mut *self.calls.lock().unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Returns the number of captured calls without draining them.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether no calls have been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Console for RecordingConsole {
    fn call(&self, method: Method, args: &[Value]) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                method,
                args: args.to_vec(),
            });
    }
}

/// Console backend that discards every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullConsole;

impl Console for NullConsole {
    fn call(&self, _method: Method, _args: &[Value]) {}
}
