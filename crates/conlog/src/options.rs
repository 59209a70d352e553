//! crates/conlog/src/options.rs
//! Per-instance logger options and construction specs.

/// Resolved per-instance options.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerOptions {
    /// Namespace name; the unit of coarse-grained rule control.
    pub name: String,
    /// Instance-level output switch, toggled by
    /// [`enable`](crate::Logger::enable)/[`disable`](crate::Logger::disable).
    pub debug: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            name: "logger".to_owned(),
            debug: true,
        }
    }
}

impl LoggerOptions {
    /// Merges `patch` over these options; set fields win.
    pub fn apply(&mut self, patch: OptionsPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(debug) = patch.debug {
            self.debug = debug;
        }
    }
}

/// Partial options merged over defaults.
///
/// # Examples
///
/// ```
/// use conlog::{LoggerOptions, OptionsPatch};
///
/// let mut options = LoggerOptions::default();
/// options.apply(OptionsPatch::new().name("request"));
/// assert_eq!(options.name, "request");
/// assert!(options.debug);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionsPatch {
    /// Namespace override, if set.
    pub name: Option<String>,
    /// Debug-flag override, if set.
    pub debug: Option<bool>,
}

impl OptionsPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the debug flag.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }
}

/// Constructor argument for [`Logger`](crate::Logger): either a bare
/// namespace or an options patch merged over the registry defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoggerSpec {
    /// Bare namespace; other options stay at their defaults.
    Namespace(String),
    /// Partial options merged over the defaults.
    Options(OptionsPatch),
}

impl From<&str> for LoggerSpec {
    fn from(name: &str) -> Self {
        Self::Namespace(name.to_owned())
    }
}

impl From<String> for LoggerSpec {
    fn from(name: String) -> Self {
        Self::Namespace(name)
    }
}

impl From<OptionsPatch> for LoggerSpec {
    fn from(patch: OptionsPatch) -> Self {
        Self::Options(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let options = LoggerOptions::default();
        assert_eq!(options.name, "logger");
        assert!(options.debug);
    }

    #[test]
    fn apply_merges_only_set_fields() {
        let mut options = LoggerOptions::default();
        options.apply(OptionsPatch::new().debug(false));
        assert_eq!(options.name, "logger");
        assert!(!options.debug);

        options.apply(OptionsPatch::new().name("worker"));
        assert_eq!(options.name, "worker");
        assert!(!options.debug);
    }

    #[test]
    fn spec_conversions() {
        assert_eq!(
            LoggerSpec::from("request"),
            LoggerSpec::Namespace("request".to_owned())
        );
        let patch = OptionsPatch::new().name("x").debug(false);
        assert_eq!(LoggerSpec::from(patch.clone()), LoggerSpec::Options(patch));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn options_round_trip_through_json() {
            let options = LoggerOptions {
                name: "request".to_owned(),
                debug: false,
            };
            let json = serde_json::to_string(&options).expect("serialize");
            let decoded: LoggerOptions = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(options, decoded);
        }

        #[test]
        fn patch_round_trips_through_json() {
            let patch = OptionsPatch::new().debug(true);
            let json = serde_json::to_string(&patch).expect("serialize");
            let decoded: OptionsPatch = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(patch, decoded);
        }
    }
}
