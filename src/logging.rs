use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Routes `tracing` events to the browser console. Call once, from `main`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let config = WASMLayerConfigBuilder::new().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);
}
