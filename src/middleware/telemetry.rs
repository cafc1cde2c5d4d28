use anyhow::Error;
use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use std::str::FromStr;
use tonic::metadata::{MetadataKey, MetadataMap};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::Settings;

/// Install the global `tracing` subscriber. Spans always go to the console;
/// when a receiver URL is configured they are also exported over OTLP in
/// batches - the recommended setup for a production application.
pub fn init_tracer(settings: &Settings) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &settings.telemetry.receiver_url {
        Some(receiver_url) => {
            let otlp_exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_metadata(headers(settings))
                .with_endpoint(receiver_url);

            global::set_text_map_propagator(TraceContextPropagator::new());
            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(otlp_exporter)
                .install_batch(opentelemetry_sdk::runtime::Tokio)?;

            let subscriber = Registry::default()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .with(tracing_opentelemetry::layer().with_tracer(tracer));

            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = Registry::default()
                .with(filter)
                .with(tracing_subscriber::fmt::layer());

            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

fn headers(settings: &Settings) -> MetadataMap {
    let mut metadata = MetadataMap::new();

    if let Some(api_key) = &settings.telemetry.api_key {
        metadata.insert(
            MetadataKey::from_str("x-honeycomb-team").unwrap(),
            api_key.parse().unwrap(),
        );
    }

    metadata
}
