#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `conlog` is a namespaced logging façade over a console-like host API.
//! A [`Logger`] carries a namespace name and an instance debug flag; a
//! shared [`Registry`] carries the process-wide state: activation rules,
//! the dev-mode flag, default options, and the console backend. Every call
//! re-resolves activation against the current registry state, so rule
//! changes take effect immediately.
//!
//! # Design
//!
//! Activation for a call under method key `m` on namespace `n` resolves as
//! `rule(n.m) ?? rule(n) ?? enabled`: the most specific configured rule
//! wins, absence means enabled. Two hard gates sit around the rules: the
//! dev-mode flag (when off, nothing is ever emitted) and the instance
//! `debug` flag (an enabled rule never overrides a disabled instance,
//! while an explicit `false` rule always beats an enabled one).
//!
//! Rules come from two layers: programmatic [`Registry::config_rules`]
//! calls (merged, new entries win) and an environment-supplied override
//! map ([`RULES_ENV`]) that takes final precedence key by key, even over
//! programmatic calls made later.
//!
//! Two methods override their default console semantics: [`Logger::error`]
//! always raises a [`ConsoleError`] instead of forwarding, and
//! [`Logger::table`] forwards tabular data under the same activation
//! gating as the other pass-throughs.
//!
//! # Invariants
//!
//! - Dev-mode off means no output, regardless of any rule configuration.
//! - Activation is a pure function of (dev-mode, rules, instance debug,
//!   method key); nothing is cached or latched between calls.
//! - `error` never returns successfully and never reaches the console.
//! - Backends receive only activated calls; they never filter.
//!
//! # Errors
//!
//! [`ConsoleError`] is the only failure: the deliberate halt-on-error-level
//! signal from [`Logger::error`]. Malformed configuration never fails:
//! bad rule tokens are skipped and unknown keys simply never match.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use conlog::{Logger, RecordingConsole, Registry, RuleMap, values};
//!
//! let console = Arc::new(RecordingConsole::default());
//! let registry = Registry::builder().console_shared(console.clone()).build();
//! registry.config_rules(RuleMap::parse_spec("request,-request.warn"));
//!
//! let logger = Logger::new(&registry, "request");
//! logger.log(&values!["accepted", 200]);
//! logger.warn(&values!["dropped by rule"]);
//!
//! let calls = console.take();
//! assert_eq!(calls.len(), 1);
//!
//! // Error-level calls interrupt control flow instead of printing.
//! let err = logger.error(&values!["upstream", "unreachable"]).unwrap_err();
//! assert_eq!(err.message(), "upstream unreachable");
//! ```
//!
//! # See also
//!
//! - [`conlog_sink`] for the [`Console`] trait, backends, and the [`Value`]
//!   argument model.
//! - The `tracing` feature for routing `tracing` events through the same
//!   activation rules.

mod env;
mod error;
mod logger;
mod options;
mod registry;
mod rules;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
mod bridge;

pub use env::{DEV_MODE_ENV, RULES_ENV, dev_mode_from_env, rules_from_env};
pub use error::ConsoleError;
pub use logger::{Logger, ScopedLog};
pub use options::{LoggerOptions, LoggerSpec, OptionsPatch};
pub use registry::{Registry, RegistryBuilder};
pub use rules::RuleMap;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use bridge::{ConlogLayer, init_tracing, init_tracing_with_filter};

pub use conlog_sink::{
    Color, Console, Element, LineMode, Method, NullConsole, RecordedCall, RecordingConsole,
    Value, ValueKind, WriterConsole, values,
};
