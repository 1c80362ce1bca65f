use cs_page_config::LogLevel;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

fn to_level(level: &LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Routes `tracing` events to the devtools console.
pub fn init(level: &LogLevel) {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(to_level(level))
        .set_report_logs_in_timings(false)
        .build();
    let subscriber = tracing_subscriber::registry().with(WASMLayer::new(config));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
