//! Console logging
//!
//! Routes `tracing` events to the browser console through `tracing-wasm`.

use hospital_dashboard::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the console subscriber; later calls are no-ops
pub fn init(config: &LoggingConfig) {
    let layer_config = WASMLayerConfigBuilder::new()
        .set_max_level(config.level())
        .build();

    let _ = tracing_subscriber::registry()
        .with(WASMLayer::new(layer_config))
        .try_init();
}
