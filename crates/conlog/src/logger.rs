//! crates/conlog/src/logger.rs
//! The namespaced façade over the host console.

use std::slice;
use std::sync::Arc;

use conlog_sink::{Color, Console, Method, Value};

use super::error::ConsoleError;
use super::options::LoggerSpec;
use super::registry::Registry;

pub(crate) const LOG_COLOR: Color = Color::Blue;
pub(crate) const WARN_COLOR: Color = Color::Yellow;
pub(crate) const TRACE_COLOR: Color = Color::Green;
#[cfg(feature = "tracing")]
pub(crate) const ERROR_COLOR: Color = Color::Red;

/// Namespaced logger gating calls to the shared console.
///
/// Every output call re-evaluates activation against the registry: the
/// dev-mode flag is a hard cutoff, then the most specific configured rule
/// for the call's method key applies, then the instance `debug` flag. An
/// explicit `false` rule always beats an enabled instance flag, and an
/// enabled rule never overrides a disabled instance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use conlog::{Logger, RecordingConsole, Registry, RuleMap, values};
///
/// let console = Arc::new(RecordingConsole::default());
/// let registry = Registry::builder().console_shared(console.clone()).build();
/// registry.config_rules(RuleMap::parse_spec("request,-request.warn"));
///
/// let logger = Logger::new(&registry, "request");
/// logger.log(&values!["accepted", 200]).warn(&values!["dropped"]);
///
/// let calls = console.take();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].args[1].to_string(), "accepted");
/// ```
///
/// Error-level calls never reach the console; they raise instead:
///
/// ```
/// use conlog::{Logger, Registry, values};
///
/// let registry = Registry::builder().build();
/// let logger = Logger::new(&registry, "request");
///
/// let err = logger.error(&values!["bad gateway", 502]).unwrap_err();
/// assert_eq!(err.message(), "bad gateway 502");
/// ```
#[derive(Clone)]
pub struct Logger {
    name: String,
    debug: bool,
    registry: Arc<Registry>,
}

impl Logger {
    /// Creates an instance from a bare namespace or an options patch.
    ///
    /// A namespace string sets the name and leaves the other options at the
    /// registry defaults; an [`OptionsPatch`](crate::OptionsPatch) is merged
    /// over those defaults.
    #[must_use]
    pub fn new(registry: &Arc<Registry>, spec: impl Into<LoggerSpec>) -> Self {
        let mut options = registry.defaults();
        match spec.into() {
            LoggerSpec::Namespace(name) => options.name = name,
            LoggerSpec::Options(patch) => options.apply(patch),
        }
        Self {
            name: options.name,
            debug: options.debug,
            registry: Arc::clone(registry),
        }
    }

    /// Returns the namespace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instance debug flag.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Decides whether a call under `method` would reach the console.
    ///
    /// 1. dev-mode off is a hard cutoff;
    /// 2. the rule for the namespace applies, unless a rule for
    ///    `"{namespace}.{method}"` overrides it;
    /// 3. an explicit `false` rule deactivates;
    /// 4. a disabled instance `debug` flag deactivates;
    /// 5. otherwise the call is activated.
    #[must_use]
    pub fn is_activated(&self, method: Option<&str>) -> bool {
        if !self.registry.dev_mode() {
            return false;
        }
        if self.registry.resolve(&self.name, method) == Some(false) {
            return false;
        }
        self.debug
    }

    /// Plain output with the namespace prefix.
    pub fn log(&self, args: &[Value]) -> &Self {
        self.output(Method::Log, LOG_COLOR, args)
    }

    /// Alias of [`log`](Self::log): same color, same activation key.
    pub fn info(&self, args: &[Value]) -> &Self {
        self.log(args)
    }

    /// Alias of [`log`](Self::log): same color, same activation key.
    pub fn debug(&self, args: &[Value]) -> &Self {
        self.log(args)
    }

    /// Warning output with the namespace prefix.
    pub fn warn(&self, args: &[Value]) -> &Self {
        self.output(Method::Warn, WARN_COLOR, args)
    }

    /// Trace output with the namespace prefix.
    pub fn trace(&self, args: &[Value]) -> &Self {
        self.output(Method::Trace, TRACE_COLOR, args)
    }

    /// Raises a [`ConsoleError`] carrying the space-joined arguments.
    ///
    /// This never consults activation and never forwards to the console:
    /// an error-level call unconditionally interrupts control flow, so the
    /// caller propagates it with `?`.
    ///
    /// # Errors
    ///
    /// Always returns `Err`.
    pub fn error(&self, args: &[Value]) -> Result<(), ConsoleError> {
        Err(ConsoleError::new(Value::join(args)))
    }

    /// Forwards tabular data to the console, gated like a pass-through.
    pub fn table(&self, data: &Value) -> &Self {
        self.passthrough(Method::Table, slice::from_ref(data))
    }

    /// Object inspection pass-through.
    pub fn dir(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Dir, args)
    }

    /// Markup inspection pass-through.
    pub fn dirxml(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Dirxml, args)
    }

    /// Opens an output group.
    pub fn group(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Group, args)
    }

    /// Opens a collapsed output group.
    pub fn group_collapsed(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::GroupCollapsed, args)
    }

    /// Closes the current output group.
    pub fn group_end(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::GroupEnd, args)
    }

    /// Labelled call counter pass-through.
    pub fn count(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Count, args)
    }

    /// Starts a labelled timer.
    pub fn time(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Time, args)
    }

    /// Stops a labelled timer.
    pub fn time_end(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::TimeEnd, args)
    }

    /// Timeline marker pass-through.
    pub fn time_stamp(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::TimeStamp, args)
    }

    /// Starts a profile capture.
    pub fn profile(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Profile, args)
    }

    /// Stops a profile capture.
    pub fn profile_end(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::ProfileEnd, args)
    }

    /// Conditional output pass-through.
    pub fn assert(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Assert, args)
    }

    /// Clears the console.
    pub fn clear(&self, args: &[Value]) -> &Self {
        self.passthrough(Method::Clear, args)
    }

    /// Returns a log-style handle bound to `color`.
    ///
    /// The handle behaves exactly like [`log`](Self::log), with the same
    /// activation key and element wrapping, but renders the prefix in the
    /// supplied color instead of the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use conlog::{Color, Logger, RecordingConsole, Registry, values};
    ///
    /// let console = Arc::new(RecordingConsole::default());
    /// let registry = Registry::builder().console_shared(console.clone()).build();
    /// let logger = Logger::new(&registry, "request");
    ///
    /// logger.color(Color::Magenta).log(&values!["tinted"]);
    ///
    /// let calls = console.take();
    /// assert!(calls[0].args[0].to_string().starts_with("\x1b[35m"));
    /// ```
    #[must_use]
    pub fn color(&self, color: Color) -> ScopedLog<'_> {
        ScopedLog {
            logger: self,
            color,
        }
    }

    /// Turns the instance debug flag on.
    pub fn enable(&mut self) -> &mut Self {
        self.debug = true;
        self
    }

    /// Turns the instance debug flag off.
    pub fn disable(&mut self) -> &mut Self {
        self.debug = false;
        self
    }

    pub(crate) fn styled_prefix(&self, color: Color) -> Value {
        Value::Text(color.paint(&format!("[{}]:", self.name)))
    }

    fn output(&self, method: Method, color: Color, args: &[Value]) -> &Self {
        if self.is_activated(Some(method.as_str())) {
            let mut forwarded = Vec::with_capacity(args.len() + 1);
            forwarded.push(self.styled_prefix(color));
            forwarded.extend(args.iter().map(wrap_renderable));
            self.registry.console().call(method, &forwarded);
        }
        self
    }

    fn passthrough(&self, method: Method, args: &[Value]) -> &Self {
        if self.is_activated(Some(method.as_str())) {
            self.registry.console().call(method, args);
        }
        self
    }
}

/// Log-style handle bound to a fixed prefix color, returned by
/// [`Logger::color`].
#[must_use]
pub struct ScopedLog<'a> {
    logger: &'a Logger,
    color: Color,
}

impl ScopedLog<'_> {
    /// Plain output with the bound color's prefix.
    pub fn log(&self, args: &[Value]) -> &Self {
        self.logger.output(Method::Log, self.color, args);
        self
    }
}

/// Element references are forwarded inside a single-element list so the
/// console treats them as inspectable data rather than coercing to text.
fn wrap_renderable(arg: &Value) -> Value {
    if arg.is_element() {
        Value::List(vec![arg.clone()])
    } else {
        arg.clone()
    }
}
