//! Discrete fade tiers of the draft pad.

use std::time::Duration;

/// How often the pad recomputes its fade level.
pub const FADE_TICK: Duration = Duration::from_millis(500);

/// Idle time up to which the draft stays fully visible.
pub const FADE_START_MS: i64 = 3_000;

/// Idle time after which the draft is nearly invisible.
pub const NEAR_INVISIBLE_MS: i64 = 7_000;

/// Opacity below which the "Keep Moving" overlay appears.
pub const KEEP_MOVING_OPACITY: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeLevel {
    #[default]
    Full,
    Fading,
    NearInvisible,
}

impl FadeLevel {
    pub fn opacity(&self) -> f32 {
        match self {
            FadeLevel::Full => 1.0,
            FadeLevel::Fading => 0.5,
            FadeLevel::NearInvisible => 0.1,
        }
    }
}

/// Fade level for a buffer that has been idle for `elapsed_ms`.
///
/// An empty buffer is always fully visible.
pub fn fade_level(non_empty: bool, elapsed_ms: i64) -> FadeLevel {
    if !non_empty {
        return FadeLevel::Full;
    }
    if elapsed_ms > NEAR_INVISIBLE_MS {
        FadeLevel::NearInvisible
    } else if elapsed_ms > FADE_START_MS {
        FadeLevel::Fading
    } else {
        FadeLevel::Full
    }
}
