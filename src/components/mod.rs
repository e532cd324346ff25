pub mod app;
pub mod badge;
pub mod image_preview;
pub mod noticebar;

pub use app::App;
pub use badge::{Badge, BadgeProps};
pub use image_preview::{ImagePreview, ImagePreviewProps};
pub use noticebar::{NoticeBar, NoticeBarProps};
