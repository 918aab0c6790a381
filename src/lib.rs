pub mod form;
pub mod language;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
