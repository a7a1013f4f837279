use crate::config::Config;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_LOG_FILTER: &str = "storefront=debug,tower_http=debug";

/// Counter names recorded by the application layer
pub mod counters {
    pub const TAGS_APPLIED: &str = "storefront_tags_applied_total";
    pub const TAGS_REMOVED: &str = "storefront_tags_removed_total";
    pub const INVENTORY_CLEARED: &str = "storefront_inventory_cleared_total";
    pub const DELETES_REJECTED: &str = "storefront_deletes_rejected_total";
}

/// Flushes pending spans when dropped at the end of `main`
pub struct ObservabilityGuard;

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        shutdown();
    }
}

pub fn init(config: &Config) -> Result<ObservabilityGuard, Box<dyn std::error::Error>> {
    init_tracing(config)?;
    init_metrics(config)?;
    Ok(ObservabilityGuard)
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    match &config.otel_exporter_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint);

            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(exporter)
                .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
                    KeyValue::new("service.name", config.service_name.clone()),
                ])))
                .install_batch(runtime::Tokio)?;

            Registry::default()
                .with(env_filter)
                .with(fmt_layer)
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .init();
            tracing::info!("Exporting traces to {}", endpoint);
        }
        None => Registry::default().with(env_filter).with(fmt_layer).init(),
    }

    Ok(())
}

fn init_metrics(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .install()?;

    metrics::describe_counter!(counters::TAGS_APPLIED, "Tags attached to store objects");
    metrics::describe_counter!(counters::TAGS_REMOVED, "Tags detached from store objects");
    metrics::describe_counter!(
        counters::INVENTORY_CLEARED,
        "Products whose inventory was cleared by the admin action"
    );
    metrics::describe_counter!(
        counters::DELETES_REJECTED,
        "Deletes refused because other rows still reference the target"
    );

    tracing::info!(
        "Metrics exporter (Prometheus) started on port {}",
        config.metrics_port
    );
    Ok(())
}

pub fn shutdown() {
    global::shutdown_tracer_provider();
}
