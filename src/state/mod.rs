pub mod badge;
pub mod gesture;
pub mod noticebar;
pub mod preview;
pub mod touch;

pub use badge::{format_value, BadgeText, BadgeValue};
pub use gesture::{GestureAction, GestureTracker, ScaleStyle};
pub use noticebar::Marquee;
pub use preview::{PreviewState, VisibilityChange};
pub use touch::{distance, points_from_touch_list, Contact, ContactId, PointSet, TouchPoint};
