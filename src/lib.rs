//! Mobile UI components for yew: badge, image preview with pinch zoom, notice bar.
//! Component logic lives in `state` as plain Rust so it can be tested natively.

pub mod components;
pub mod config;
pub mod state;
pub mod util;

pub use components::{App, Badge, ImagePreview, NoticeBar};
pub use config::{ConfigError, GestureConfig};
pub use state::{GestureAction, GestureTracker, ScaleStyle, TouchPoint};
