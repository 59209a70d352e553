//! crates/conlog/src/env.rs
//! Environment sources for dev-mode and rule overrides.

use std::env;

use super::rules::RuleMap;

/// Environment variable selecting dev-mode (`"development"` or `"dev"`).
pub const DEV_MODE_ENV: &str = "CONLOG_ENV";

/// Environment variable holding override rule tokens (see
/// [`RuleMap::parse_spec`]).
pub const RULES_ENV: &str = "CONLOG_RULES";

/// Reads the dev-mode flag from [`DEV_MODE_ENV`].
///
/// Unset or unrecognised values mean dev-mode is off: nothing is ever
/// emitted in that state, which keeps production processes quiet by
/// default.
#[must_use]
pub fn dev_mode_from_env() -> bool {
    env::var(DEV_MODE_ENV)
        .map(|value| interpret_dev_mode(&value))
        .unwrap_or(false)
}

/// Reads the override rule map from [`RULES_ENV`].
///
/// Unset yields an empty map; malformed tokens are skipped.
#[must_use]
pub fn rules_from_env() -> RuleMap {
    env::var(RULES_ENV)
        .map(|value| RuleMap::parse_spec(&value))
        .unwrap_or_default()
}

fn interpret_dev_mode(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("development") || value.eq_ignore_ascii_case("dev")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_mode_values() {
        assert!(interpret_dev_mode("development"));
        assert!(interpret_dev_mode("DEVELOPMENT"));
        assert!(interpret_dev_mode(" dev "));
        assert!(!interpret_dev_mode("production"));
        assert!(!interpret_dev_mode(""));
        assert!(!interpret_dev_mode("1"));
    }
}
