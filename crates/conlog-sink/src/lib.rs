#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `conlog-sink` provides the host-console abstraction consumed by the
//! `conlog` façade: the [`Console`] trait modelling a console-like diagnostic
//! API, the [`Value`] argument model passed through it, and ready-made
//! implementations for terminals ([`WriterConsole`]) and tests
//! ([`RecordingConsole`]).
//!
//! # Design
//!
//! The crate keeps the host surface behind a single seam. [`Console::call`]
//! receives a [`Method`] identifying which console entry point was invoked
//! together with the argument list, so backends implement one function
//! instead of eighteen near-identical ones. [`WriterConsole`] renders calls
//! line-oriented into any [`std::io::Write`] implementor, honouring a
//! [`LineMode`] and tracking group indentation. [`RecordingConsole`] captures
//! every call so higher layers can assert on exactly what was forwarded.
//!
//! # Invariants
//!
//! - Backends never interpret activation rules; filtering happens entirely in
//!   the façade before [`Console::call`] is reached.
//! - [`Value`] rendering is stable: the same value always produces the same
//!   text, and [`Value::join`] space-joins arguments in order.
//! - [`LineMode::WithNewline`] is the default, matching line-oriented
//!   terminal diagnostics.
//!
//! # Errors
//!
//! Backends are best-effort: [`WriterConsole`] swallows writer errors because
//! the façade models no I/O failure path on the console surface.
//!
//! # Examples
//!
//! Capture forwarded calls with a [`RecordingConsole`]:
//!
//! ```
//! use conlog_sink::{Console, Method, RecordingConsole, values};
//!
//! let console = RecordingConsole::default();
//! console.call(Method::Log, &values!["ready", 3]);
//!
//! let calls = console.take();
//! assert_eq!(calls.len(), 1);
//! assert_eq!(calls[0].method, Method::Log);
//! ```

mod console;
mod style;
mod value;

pub use console::{
    Console, LineMode, Method, NullConsole, RecordedCall, RecordingConsole, WriterConsole,
};
pub use style::Color;
pub use value::{Element, Value, ValueKind};
