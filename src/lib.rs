use wasm_bindgen::prelude::*;

pub mod animate;
pub mod config;
pub mod geometry;
mod renderer;
mod scene;
mod utils;

use crate::config::SceneConfig;

#[wasm_bindgen(start)]
pub fn dummy_main() {}

/// Entry point for the page. `config_json` may override any subset of
/// [`SceneConfig`]; a malformed config logs and falls back to the defaults.
#[wasm_bindgen]
pub async fn run(config_json: Option<String>) {
    utils::set_panic_hook();

    let config = match config_json {
        Some(json) => match SceneConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                crate::log!("run(): invalid config ({}), using defaults.", e);
                SceneConfig::default()
            }
        },
        None => SceneConfig::default(),
    };

    renderer::main(config).await;
}
