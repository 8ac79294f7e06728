#[macro_use]
mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod effects;
pub mod exclusion;
pub mod message;
pub mod particle;
pub mod surface;
pub mod web;

pub use animator::{Animator, Clock};
pub use config::{EffectsConfig, PageConfig};
pub use web::Effects;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
