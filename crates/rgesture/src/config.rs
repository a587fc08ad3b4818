#![forbid(unsafe_code)]

//! Gesture tuning.
//!
//! Both configs are plain values with platform-typical defaults and `with_*`
//! builders. With the `serde` feature they load from configuration files,
//! using kebab-case keys and durations in milliseconds; missing keys take
//! their defaults.
//!
//! ```
//! use rgesture::{DragConfig, SwipeConfig};
//! use rgesture::swipe::DismissDirection;
//! use rgesture_core::Axis;
//!
//! let drag = DragConfig::default().with_axis(Axis::Horizontal).with_scroll_step(24.0);
//! assert!(drag.validate().is_ok());
//!
//! let swipe = SwipeConfig::default().with_direction(DismissDirection::Right);
//! assert_eq!(swipe.min_fling, 200.0);
//! ```

use std::time::Duration;

use rgesture_core::Axis;

use crate::error::{ConfigError, Result, check_non_negative};
use crate::swipe::DismissDirection;

/// Settings for [`DragReorderController`](crate::drag::DragReorderController).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct DragConfig {
    /// Orientation of the list.
    pub axis: Axis,
    /// Hold time before a press picks the row up.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub long_press: Duration,
    /// Pointer travel that cancels a pending long press, and that an armed
    /// drag needs before it starts tracking.
    pub touch_slop: f32,
    /// Slide of a displaced row into its new slot.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub swap_duration: Duration,
    /// Overlay settling onto its final slot.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub drop_duration: Duration,
    /// Pixels scrolled per auto-scroll tick.
    pub scroll_step: f32,
    /// Distance from a viewport edge at which auto-scroll starts.
    pub edge_zone: f32,
    /// Opacity of the floating copy.
    pub overlay_alpha: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            long_press: Duration::from_millis(500),
            touch_slop: 8.0,
            swap_duration: Duration::from_millis(150),
            drop_duration: Duration::from_millis(150),
            scroll_step: 16.0,
            edge_zone: 0.0,
            overlay_alpha: 0.8,
        }
    }
}

impl DragConfig {
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_long_press(mut self, long_press: Duration) -> Self {
        self.long_press = long_press;
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    #[must_use]
    pub fn with_swap_duration(mut self, duration: Duration) -> Self {
        self.swap_duration = duration;
        self
    }

    #[must_use]
    pub fn with_drop_duration(mut self, duration: Duration) -> Self {
        self.drop_duration = duration;
        self
    }

    #[must_use]
    pub fn with_scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    #[must_use]
    pub fn with_edge_zone(mut self, zone: f32) -> Self {
        self.edge_zone = zone;
        self
    }

    #[must_use]
    pub fn with_overlay_alpha(mut self, alpha: f32) -> Self {
        self.overlay_alpha = alpha;
        self
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("touch_slop", self.touch_slop)?;
        check_non_negative("edge_zone", self.edge_zone)?;
        if !(self.scroll_step.is_finite() && self.scroll_step > 0.0) {
            return Err(ConfigError::InvalidThreshold {
                name: "scroll_step",
                value: self.scroll_step,
            });
        }
        if !(0.0..=1.0).contains(&self.overlay_alpha) {
            return Err(ConfigError::InvalidThreshold {
                name: "overlay_alpha",
                value: self.overlay_alpha,
            });
        }
        Ok(())
    }
}

/// Settings for [`SwipeDismissController`](crate::swipe::SwipeDismissController).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct SwipeConfig {
    /// Direction used when no per-position policy is installed.
    pub direction: DismissDirection,
    /// Main-axis travel before a swipe is recognized.
    pub touch_slop: f32,
    /// Slowest release that counts as a fling, in px/s.
    pub min_fling: f32,
    /// Fastest release that counts as a fling, in px/s.
    pub max_fling: f32,
    /// Dismiss and snap-back animation length.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub animation: Duration,
    /// Extra wait after the dismiss animation before the item is removed.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub commit_grace: Duration,
    /// Window the release velocity is fitted over.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub velocity_window: Duration,
    /// Fill the gap under a swiped row with a backdrop surface.
    pub backdrop: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            direction: DismissDirection::Horizontal,
            touch_slop: 8.0,
            min_fling: 200.0,
            max_fling: 8000.0,
            animation: Duration::from_millis(200),
            commit_grace: Duration::from_millis(100),
            velocity_window: rgesture_core::velocity::DEFAULT_WINDOW,
            backdrop: false,
        }
    }
}

impl SwipeConfig {
    #[must_use]
    pub fn with_direction(mut self, direction: DismissDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Fling velocity range in px/s.
    #[must_use]
    pub fn with_fling(mut self, min: f32, max: f32) -> Self {
        self.min_fling = min;
        self.max_fling = max;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    #[must_use]
    pub fn with_commit_grace(mut self, grace: Duration) -> Self {
        self.commit_grace = grace;
        self
    }

    #[must_use]
    pub fn with_velocity_window(mut self, window: Duration) -> Self {
        self.velocity_window = window;
        self
    }

    #[must_use]
    pub fn with_backdrop(mut self, backdrop: bool) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("touch_slop", self.touch_slop)?;
        check_non_negative("min_fling", self.min_fling)?;
        check_non_negative("max_fling", self.max_fling)?;
        if self.max_fling < self.min_fling {
            return Err(ConfigError::InvalidThreshold {
                name: "max_fling",
                value: self.max_fling,
            });
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
