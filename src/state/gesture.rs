//! Pinch-to-zoom tracking for the image preview.
//!
//! Two point sets are kept: the *anchor* set, captured when a second finger lands,
//! and the *live* set, updated as fingers move. The ratio of the live finger
//! distance to the anchor distance becomes the zoom scale, clamped into the
//! configured bounds. Small distance changes below the jitter threshold are ignored.

use std::fmt;
use std::rc::Rc;

use yew::Reducible;

use super::touch::{ContactId, PointSet, TouchPoint};
use crate::config::{ConfigError, GestureConfig};
use crate::util::clog;

/// Input delivered by the host to the tracker.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureAction {
    /// All currently active contacts (`targetTouches`).
    TouchStart(Vec<TouchPoint>),
    /// Contacts that moved (`changedTouches`).
    TouchMove(Vec<TouchPoint>),
    /// Contacts that were lifted or cancelled.
    TouchEnd(Vec<TouchPoint>),
    DoubleTap,
    /// Drop all contacts and return to the minimum scale.
    Reset,
}

/// `scale(s, s)` transform derived from the tracker's scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleStyle {
    pub sx: f64,
    pub sy: f64,
}

impl ScaleStyle {
    pub fn uniform(s: f64) -> Self {
        Self { sx: s, sy: s }
    }

    /// Inline CSS declaration, e.g. `transform: scale(1.5, 1.5)`.
    pub fn css(&self) -> String {
        format!("transform: {self}")
    }
}

impl fmt::Display for ScaleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale({}, {})", self.sx, self.sy)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureTracker {
    config: GestureConfig,
    anchor: PointSet,
    live: PointSet,
    scale: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::from_valid_config(GestureConfig::default())
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GestureConfig) -> Self {
        Self {
            anchor: PointSet::with_capacity(config.max_contacts),
            live: PointSet::with_capacity(config.max_contacts),
            scale: config.min_scale,
            config,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn anchor(&self) -> &[TouchPoint] {
        self.anchor.points()
    }

    pub fn live(&self) -> &[TouchPoint] {
        self.live.points()
    }

    pub fn style(&self) -> ScaleStyle {
        ScaleStyle::uniform(self.scale)
    }

    pub fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::TouchStart(active) => {
                self.touch_start(&active);
            }
            GestureAction::TouchMove(changed) => {
                self.touch_move(&changed);
            }
            GestureAction::TouchEnd(released) => {
                for p in &released {
                    self.release(p.id);
                }
            }
            GestureAction::DoubleTap => self.double_tap(),
            GestureAction::Reset => self.reset(),
        }
    }

    /// Captures the anchor when more than one finger is down. Returns whether a
    /// gesture started; single-finger starts leave the state untouched.
    pub fn touch_start(&mut self, active: &[TouchPoint]) -> bool {
        if active.len() <= 1 {
            return false;
        }
        self.anchor.replace(active);
        self.live = self.anchor.clone();
        clog(&format!(
            "pinch start: {} contacts, anchor span {:?}",
            active.len(),
            self.anchor.span()
        ));
        true
    }

    /// Folds moved contacts into the live set and recomputes the scale.
    /// Returns whether the scale changed.
    pub fn touch_move(&mut self, changed: &[TouchPoint]) -> bool {
        for p in changed {
            // Contacts beyond capacity (a third finger) are dropped here.
            self.live.upsert_by_identity(*p);
        }
        if self.live.len() < 2 {
            return false;
        }
        let before = self.scale;
        self.recompute();
        self.scale != before
    }

    fn recompute(&mut self) {
        let (Some(start), Some(end)) = (self.anchor.span(), self.live.span()) else {
            return;
        };
        if !start.is_finite() || start <= 0.0 || !end.is_finite() {
            return;
        }
        if (start - end).abs() > self.config.jitter_threshold {
            self.scale = self.config.clamp_scale(end / start);
        }
    }

    /// Forgets a lifted contact. The scale is kept as-is.
    pub fn release(&mut self, id: ContactId) {
        let from_anchor = self.anchor.remove_by_identity(id).is_some();
        let from_live = self.live.remove_by_identity(id).is_some();
        if from_anchor || from_live {
            clog(&format!("pinch release: contact {id}"));
        }
    }

    pub fn double_tap(&mut self) {
        self.scale = if self.scale > self.config.min_scale {
            self.config.min_scale
        } else {
            self.config.double_tap_scale
        };
    }

    pub fn reset(&mut self) {
        self.anchor.clear();
        self.live.clear();
        self.scale = self.config.min_scale;
    }
}

impl Reducible for GestureTracker {
    type Action = GestureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        if new == *self { self } else { Rc::new(new) }
    }
}
