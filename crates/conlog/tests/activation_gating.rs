//! Integration tests for the activation decision.
//!
//! These tests verify the resolution order between the process dev-mode
//! flag, namespace and namespace.method rules, and the instance debug
//! flag: the most specific rule wins, dev-mode is a hard cutoff, and an
//! enabled rule never overrides a disabled instance.

use std::sync::Arc;

use conlog::{Logger, OptionsPatch, RecordingConsole, Registry, RuleMap, values};

fn recording_registry() -> (Arc<RecordingConsole>, Arc<Registry>) {
    let console = Arc::new(RecordingConsole::default());
    let registry = Registry::builder().console_shared(console.clone()).build();
    (console, registry)
}

// ============================================================================
// Dev-Mode Cutoff
// ============================================================================

/// Verifies dev-mode off deactivates everything regardless of rules.
#[test]
fn dev_mode_off_is_a_hard_cutoff() {
    let console = Arc::new(RecordingConsole::default());
    let registry = Registry::builder()
        .dev_mode(false)
        .console_shared(console.clone())
        .build();
    registry.config_rules(RuleMap::from([("request", true), ("request.log", true)]));

    let logger = Logger::new(&registry, "request");
    assert!(!logger.is_activated(None));
    assert!(!logger.is_activated(Some("log")));

    logger.log(&values!["silent"]).warn(&values!["silent"]);
    logger.dir(&values!["silent"]);
    assert!(console.is_empty());
}

/// Verifies dev-mode on with no rules defaults to activated.
#[test]
fn absence_of_rules_defaults_to_activated() {
    let (console, registry) = recording_registry();
    let logger = Logger::new(&registry, "request");

    assert!(logger.is_activated(None));
    assert!(logger.is_activated(Some("log")));

    logger.log(&values!["emitted"]);
    assert_eq!(console.take().len(), 1);
}

// ============================================================================
// Rule Specificity
// ============================================================================

/// Verifies a false method rule disables that method despite an enabled
/// namespace rule and an enabled instance.
#[test]
fn method_rule_false_beats_namespace_rule_true() {
    let (console, registry) = recording_registry();
    registry.config_rules(RuleMap::from([("request", true), ("request.warn", false)]));

    let logger = Logger::new(&registry, "request");
    assert!(logger.is_activated(Some("log")));
    assert!(!logger.is_activated(Some("warn")));

    logger.warn(&values!["blocked"]);
    assert!(console.is_empty());
    logger.log(&values!["passes"]);
    assert_eq!(console.take().len(), 1);
}

/// Verifies a true method rule enables that method despite a disabled
/// namespace rule.
#[test]
fn method_rule_true_beats_namespace_rule_false() {
    let (console, registry) = recording_registry();
    registry.config_rules(RuleMap::from([("request", false), ("request.trace", true)]));

    let logger = Logger::new(&registry, "request");
    assert!(!logger.is_activated(None));
    assert!(!logger.is_activated(Some("log")));
    assert!(logger.is_activated(Some("trace")));

    logger.log(&values!["blocked"]);
    logger.trace(&values!["passes"]);
    assert_eq!(console.take().len(), 1);
}

/// Verifies rules on one namespace leave other namespaces untouched.
#[test]
fn rules_are_scoped_to_their_namespace() {
    let (console, registry) = recording_registry();
    registry.config_rules(RuleMap::from([("request", false)]));

    Logger::new(&registry, "request").log(&values!["blocked"]);
    Logger::new(&registry, "worker").log(&values!["passes"]);

    assert_eq!(console.take().len(), 1);
}

// ============================================================================
// Instance Debug Flag
// ============================================================================

/// Verifies disable() silences output methods and enable() restores them.
#[test]
fn disable_then_enable_round_trips() {
    let (console, registry) = recording_registry();
    let mut logger = Logger::new(&registry, "request");

    logger.disable();
    logger
        .log(&values!["silent"])
        .warn(&values!["silent"])
        .trace(&values!["silent"]);
    logger.group(&values!["silent"]).count(&values!["silent"]);
    assert!(console.is_empty());

    logger.enable();
    logger.log(&values!["back"]);
    assert_eq!(console.take().len(), 1);
}

/// Verifies an enabled rule never overrides a disabled instance.
#[test]
fn enabled_rule_does_not_override_disabled_instance() {
    let (console, registry) = recording_registry();
    registry.config_rules(RuleMap::from([("request", true), ("request.log", true)]));

    let logger = Logger::new(&registry, OptionsPatch::new().name("request").debug(false));
    assert!(!logger.is_activated(Some("log")));

    logger.log(&values!["silent"]);
    assert!(console.is_empty());
}

/// Verifies an explicit false rule beats an enabled instance flag.
#[test]
fn false_rule_beats_enabled_instance() {
    let (console, registry) = recording_registry();
    registry.config_rules(RuleMap::from([("request", false)]));

    let logger = Logger::new(&registry, "request");
    assert!(logger.is_debug());
    assert!(!logger.is_activated(Some("log")));

    logger.log(&values!["silent"]);
    assert!(console.is_empty());
}

/// Verifies debug defaults configured on the registry apply to new
/// instances constructed from a bare namespace.
#[test]
fn registry_default_debug_applies_to_new_instances() {
    let (console, registry) = recording_registry();
    registry.config(OptionsPatch::new().debug(false));

    let logger = Logger::new(&registry, "request");
    assert!(!logger.is_debug());
    logger.log(&values!["silent"]);
    assert!(console.is_empty());
}
