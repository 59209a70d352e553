//! Routes tracing events through the façade's activation rules.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example tracing_demo --features tracing
//! ```

use conlog::{Registry, RuleMap, init_tracing};

fn main() {
    let registry = Registry::builder().build();
    registry.config_rules(RuleMap::parse_spec("request,-request.trace,worker"));
    init_tracing(registry);

    tracing::info!(target: "app::request", "accepted GET /health");
    tracing::warn!(target: "app::request", "slow upstream: 1200ms");
    tracing::trace!(target: "app::request", "dropped by rule");
    tracing::info!(target: "app::worker", "queue drained");
    tracing::error!(target: "app::worker", "job 42 failed");
}
