//! Canvas-2D rendering module
//!
//! Strictly a read-only consumer of the sim state: it paints, it never
//! mutates gameplay.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
