//! crates/conlog/src/registry.rs
//! Shared process-wide state: rules, dev-mode, defaults, console handle.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use conlog_sink::{Console, WriterConsole};

use super::env;
use super::options::{LoggerOptions, OptionsPatch};
use super::rules::RuleMap;

struct State {
    rules: RuleMap,
    overrides: RuleMap,
    dev_mode: bool,
    defaults: LoggerOptions,
}

/// Shared configuration consulted by every [`Logger`](crate::Logger) call.
///
/// A registry owns the activation state the original design kept in ambient
/// globals: programmatic rules, the environment-supplied override rules
/// (which always win at resolution time), the process dev-mode flag, the
/// default instance options, and the console handle calls are forwarded to.
/// Instances share it through [`Arc`]; activation is re-resolved against the
/// current state on every call, never cached.
///
/// # Examples
///
/// ```
/// use conlog::{Registry, RuleMap};
///
/// let registry = Registry::builder().build();
/// registry.config_rules(RuleMap::from([("request", true)]));
///
/// assert!(registry.dev_mode());
/// assert_eq!(registry.resolve("request", None), Some(true));
/// assert_eq!(registry.resolve("other", None), None);
/// ```
pub struct Registry {
    state: RwLock<State>,
    console: Arc<dyn Console + Send + Sync>,
}

impl Registry {
    /// Creates a registry configured from the process environment.
    ///
    /// Dev-mode comes from [`env::DEV_MODE_ENV`], override rules from
    /// [`env::RULES_ENV`]; output goes to standard error.
    #[must_use]
    pub fn from_env() -> Arc<Self> {
        Self::builder()
            .dev_mode(env::dev_mode_from_env())
            .env_overrides(env::rules_from_env())
            .build()
    }

    /// Returns a builder for programmatic construction.
    ///
    /// Builder defaults: dev-mode on, no rules, stderr console.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Merges `patch` into the programmatic rules; new entries win.
    ///
    /// Environment overrides still take precedence at resolution time, so
    /// they win even over rules configured after them.
    pub fn config_rules(&self, patch: RuleMap) -> &Self {
        self.write().rules.merge(patch);
        self
    }

    /// Merges `patch` into the default options used for new instances.
    pub fn config(&self, patch: OptionsPatch) -> &Self {
        self.write().defaults.apply(patch);
        self
    }

    /// Resolves the configured rule for a namespace and optional method.
    ///
    /// The most specific key wins: a `"{namespace}.{method}"` entry
    /// overrides a bare `"{namespace}"` entry. For each key the
    /// environment-override layer is consulted before the programmatic one.
    /// `None` means no rule is configured, which activation treats as
    /// enabled.
    #[must_use]
    pub fn resolve(&self, namespace: &str, method: Option<&str>) -> Option<bool> {
        let state = self.read();
        let layered = |key: &str| state.overrides.get(key).or_else(|| state.rules.get(key));

        let mut status = layered(namespace);
        if let Some(method) = method {
            let sub = format!("{namespace}.{method}");
            if let Some(value) = layered(&sub) {
                status = Some(value);
            }
        }
        status
    }

    /// Returns the process dev-mode flag.
    #[must_use]
    pub fn dev_mode(&self) -> bool {
        self.read().dev_mode
    }

    /// Returns a copy of the default instance options.
    #[must_use]
    pub fn defaults(&self) -> LoggerOptions {
        self.read().defaults.clone()
    }

    /// Re-reads dev-mode and override rules from the environment.
    ///
    /// Programmatic rules and defaults are left untouched.
    pub fn reload_env(&self) -> &Self {
        let dev_mode = env::dev_mode_from_env();
        let overrides = env::rules_from_env();
        let mut state = self.write();
        state.dev_mode = dev_mode;
        state.overrides = overrides;
        self
    }

    /// Restores the pristine programmatic state for test isolation.
    ///
    /// Clears all rules and overrides, restores default options, and turns
    /// dev-mode back on (the builder default). The console handle is kept.
    pub fn reset(&self) -> &Self {
        let mut state = self.write();
        state.rules.clear();
        state.overrides.clear();
        state.defaults = LoggerOptions::default();
        state.dev_mode = true;
        self
    }

    /// Returns the console handle calls are forwarded to.
    #[must_use]
    pub fn console(&self) -> &Arc<dyn Console + Send + Sync> {
        &self.console
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        // A poisoned guard still holds consistent state; recover it.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder for [`Registry`].
pub struct RegistryBuilder {
    dev_mode: bool,
    rules: RuleMap,
    overrides: RuleMap,
    defaults: LoggerOptions,
    console: Option<Arc<dyn Console + Send + Sync>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            dev_mode: true,
            rules: RuleMap::new(),
            overrides: RuleMap::new(),
            defaults: LoggerOptions::default(),
            console: None,
        }
    }
}

impl RegistryBuilder {
    /// Sets the dev-mode flag.
    #[must_use]
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Seeds the programmatic rules.
    #[must_use]
    pub fn rules(mut self, rules: RuleMap) -> Self {
        self.rules = rules;
        self
    }

    /// Seeds the environment-override rules.
    ///
    /// These take precedence over programmatic rules, key by key, for the
    /// lifetime of the registry (until [`Registry::reload_env`] or
    /// [`Registry::reset`]).
    #[must_use]
    pub fn env_overrides(mut self, overrides: RuleMap) -> Self {
        self.overrides = overrides;
        self
    }

    /// Applies a patch over the default instance options.
    #[must_use]
    pub fn defaults(mut self, patch: OptionsPatch) -> Self {
        self.defaults.apply(patch);
        self
    }

    /// Sets the console backend, taking ownership.
    #[must_use]
    pub fn console(mut self, console: impl Console + Send + Sync + 'static) -> Self {
        self.console = Some(Arc::new(console));
        self
    }

    /// Sets the console backend from a shared handle.
    ///
    /// Use this when the caller needs to keep inspecting the backend, e.g. a
    /// [`RecordingConsole`](conlog_sink::RecordingConsole) in tests.
    #[must_use]
    pub fn console_shared(mut self, console: Arc<dyn Console + Send + Sync>) -> Self {
        self.console = Some(console);
        self
    }

    /// Builds the registry; output defaults to standard error.
    #[must_use]
    pub fn build(self) -> Arc<Registry> {
        let console = self
            .console
            .unwrap_or_else(|| Arc::new(WriterConsole::stderr()));
        Arc::new(Registry {
            state: RwLock::new(State {
                rules: self.rules,
                overrides: self.overrides,
                dev_mode: self.dev_mode,
                defaults: self.defaults,
            }),
            console,
        })
    }
}
