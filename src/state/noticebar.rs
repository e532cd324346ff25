// Notice bar derived state: class lists and marquee timing

use crate::util::{class_if, class_names};

/// Animation duration used until the marquee text has been measured.
pub const DEFAULT_MARQUEE_SECS: f64 = 15.0;
/// Default marquee speed in px per second.
pub const DEFAULT_MARQUEE_SPEED: f64 = 100.0;
/// Delay before measuring the marquee text after mount.
pub const MEASURE_DELAY_MS: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub enabled: bool,
    pub duration_secs: f64,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_secs: DEFAULT_MARQUEE_SECS,
        }
    }
}

impl Marquee {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    /// Updates the duration from the measured text width. A non-positive or
    /// non-finite speed keeps the current duration.
    pub fn measure(&mut self, width_px: f64, speed: f64) -> bool {
        if !speed.is_finite() || speed <= 0.0 || !width_px.is_finite() || width_px < 0.0 {
            return false;
        }
        self.duration_secs = width_px / speed;
        true
    }

    /// Inline style for the scrolling element; empty when the marquee is off.
    pub fn style(&self) -> String {
        if self.enabled {
            format!("animation-duration: {}s", self.duration_secs)
        } else {
            String::new()
        }
    }
}

pub fn root_classes(marquee: bool, single: bool, extra: &str) -> String {
    class_names([
        "at-noticebar",
        class_if(marquee, "at-noticebar--marquee"),
        class_if(!marquee && single, "at-noticebar--single"),
        extra,
    ])
}

pub fn icon_classes(icon: &str) -> String {
    let named = if icon.is_empty() {
        String::new()
    } else {
        format!("at-icon-{icon}")
    };
    class_names(["at-icon", named.as_str()])
}

pub fn inner_classes(marquee: bool, anim_id: &str) -> String {
    class_names(["at-noticebar__content-inner", class_if(marquee, anim_id)])
}

/// Element id for the marquee animation, built from a random seed in `[0, 1)`.
pub fn anim_element_id(seed: f64) -> String {
    let n = (seed.clamp(0.0, 1.0) * 10e5).ceil() as u64;
    format!("swift_{}", to_base36(n))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}
