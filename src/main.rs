//! Aries Companion server binary.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use aries_companion::adapters::{
    build_router, AssistantAppState, AssistantPorts, FileConversationLog, HttpSpeechConfig,
    HttpSpeechSynthesizer, MarkupPriceSource, MarkupSourceConfig, OllamaConfig, OllamaProvider,
    OverpassConfig, OverpassSource,
};
use aries_companion::config::{AppConfig, LogFormat, PricingConfig, ServerConfig};
use aries_companion::ports::PriceSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let ports = build_ports(&config)?;
    let state = AssistantAppState::from_ports(ports, &config);
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.llm.model,
        assistant = %config.persona.assistant_name,
        "Aries Companion listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let _ = match server.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

fn build_ports(config: &AppConfig) -> Result<AssistantPorts, Box<dyn Error + Send + Sync>> {
    let language_model = OllamaProvider::new(
        OllamaConfig::new(&config.llm.base_url)
            .with_model(&config.llm.model)
            .with_timeout(config.llm.timeout()),
    )?;

    let speech = HttpSpeechSynthesizer::new(
        HttpSpeechConfig::new(&config.speech.base_url)
            .with_model(&config.speech.model)
            .with_voice(&config.speech.voice)
            .with_format(&config.speech.format)
            .with_timeout(config.speech.timeout()),
    )?;

    let poi_source = OverpassSource::new(
        OverpassConfig::new(&config.geo.overpass_url).with_timeout(config.geo.timeout()),
    )?;

    let conversation_log = FileConversationLog::new(
        &config.storage.memory_file,
        config.storage.max_entries,
    );

    Ok(AssistantPorts {
        language_model: Arc::new(language_model),
        speech: Arc::new(speech),
        poi_source: Arc::new(poi_source),
        price_sources: price_sources(&config.pricing)?,
        conversation_log: Arc::new(conversation_log),
    })
}

fn price_sources(
    pricing: &PricingConfig,
) -> Result<Vec<Arc<dyn PriceSource>>, Box<dyn Error + Send + Sync>> {
    let mut sources: Vec<Arc<dyn PriceSource>> = Vec::new();
    for retail in pricing.sources() {
        let source = MarkupPriceSource::new(MarkupSourceConfig {
            label: retail.label.clone(),
            search_url: retail.search_url.clone(),
            query_param: retail.query_param.clone(),
            link_base: retail.link_base.clone(),
            user_agent: pricing.user_agent.clone(),
            timeout: pricing.timeout(),
            cap: pricing.per_source_cap,
        })?;
        sources.push(Arc::new(source));
    }
    Ok(sources)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
