//! crates/conlog/src/bridge.rs
//! Bridge between the tracing crate and the façade's activation rules.
//!
//! This module provides a tracing-subscriber layer that routes tracing
//! events through a [`Registry`]: the event target's trailing path segment
//! becomes the namespace, the event level selects the console method, and
//! the usual activation rules decide whether the event reaches the console.
//!
//! # Usage
//!
//! ```rust,ignore
//! use conlog::{Registry, RuleMap, init_tracing};
//!
//! let registry = Registry::builder().build();
//! registry.config_rules(RuleMap::parse_spec("request,-request.trace"));
//! init_tracing(registry.clone());
//!
//! tracing::info!(target: "app::request", "accepted");
//! tracing::trace!(target: "app::request", "dropped by rule");
//! ```

use std::sync::Arc;

use conlog_sink::{Console, Method, Value};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use super::logger::{ERROR_COLOR, Logger};
use super::registry::Registry;

/// A tracing layer that forwards events through a [`Registry`].
///
/// Events whose namespace/method resolution deactivates them are dropped.
/// Error-level events are forwarded to the console's `error` method (the
/// raising semantics of [`Logger::error`] apply only to direct façade
/// calls, not to infrastructure routing).
pub struct ConlogLayer {
    registry: Arc<Registry>,
}

impl ConlogLayer {
    /// Creates a layer routing through the given registry.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Maps a tracing target to a namespace: the trailing `::` segment.
    fn namespace_of(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Maps a tracing level to the console method it is forwarded as.
    const fn method_for_level(level: &Level) -> Method {
        match *level {
            Level::ERROR => Method::Error,
            Level::WARN => Method::Warn,
            Level::TRACE => Method::Trace,
            _ => Method::Log,
        }
    }
}

impl<S> Layer<S> for ConlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let namespace = Self::namespace_of(metadata.target());
        let method = Self::method_for_level(metadata.level());

        let logger = Logger::new(&self.registry, namespace);
        if !logger.is_activated(Some(method.as_str())) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };
        let args = [Value::Text(message)];

        match method {
            Method::Error => {
                let forwarded = [logger.styled_prefix(ERROR_COLOR), args[0].clone()];
                self.registry.console().call(Method::Error, &forwarded);
            }
            Method::Warn => {
                logger.warn(&args);
            }
            Method::Trace => {
                logger.trace(&args);
            }
            _ => {
                logger.log(&args);
            }
        }
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber routing tracing events through `registry`.
pub fn init_tracing(registry: Arc<Registry>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ConlogLayer::new(registry))
        .init();
}

/// Installs a global subscriber combining `registry` routing with an
/// additional filter layer.
pub fn init_tracing_with_filter<F>(registry: Arc<Registry>, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(ConlogLayer::new(registry))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_is_the_trailing_segment() {
        assert_eq!(ConlogLayer::namespace_of("app::request"), "request");
        assert_eq!(ConlogLayer::namespace_of("a::b::worker"), "worker");
        assert_eq!(ConlogLayer::namespace_of("bare"), "bare");
    }

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConlogLayer::method_for_level(&Level::ERROR), Method::Error);
        assert_eq!(ConlogLayer::method_for_level(&Level::WARN), Method::Warn);
        assert_eq!(ConlogLayer::method_for_level(&Level::INFO), Method::Log);
        assert_eq!(ConlogLayer::method_for_level(&Level::DEBUG), Method::Log);
        assert_eq!(ConlogLayer::method_for_level(&Level::TRACE), Method::Trace);
    }

    #[test]
    fn events_route_through_activation_rules() {
        use crate::rules::RuleMap;
        use conlog_sink::RecordingConsole;
        use tracing_subscriber::layer::SubscriberExt;

        let console = Arc::new(RecordingConsole::default());
        let registry = Registry::builder().console_shared(console.clone()).build();
        registry.config_rules(RuleMap::parse_spec("request,-request.trace"));

        let subscriber =
            tracing_subscriber::registry().with(ConlogLayer::new(registry));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "app::request", "accepted");
            tracing::trace!(target: "app::request", "dropped");
            tracing::warn!(target: "app::request", "slow");
        });

        let calls = console.take();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Log);
        assert_eq!(calls[0].args[1].to_string(), "accepted");
        assert_eq!(calls[1].method, Method::Warn);
    }

    #[test]
    fn error_events_forward_to_the_console_error_method() {
        use conlog_sink::RecordingConsole;
        use tracing_subscriber::layer::SubscriberExt;

        let console = Arc::new(RecordingConsole::default());
        let registry = Registry::builder().console_shared(console.clone()).build();

        let subscriber =
            tracing_subscriber::registry().with(ConlogLayer::new(registry));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "app::request", "boom");
        });

        let calls = console.take();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Error);
        assert!(calls[0].args[0].to_string().starts_with("\x1b[31m"));
        assert_eq!(calls[0].args[1].to_string(), "boom");
    }
}
