//! Day/night controller
//!
//! Day and night alternate, each lasting `length_ms`. Progress through the
//! current phase places the sun (by day) or moon (by night) on an arc across
//! the sky.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

/// Which body is in the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CelestialKind {
    Sun,
    Moon,
}

/// Position and size of the sun or moon for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Celestial {
    pub kind: CelestialKind,
    pub center: Vec2,
    pub radius: f32,
}

/// Highest point (smallest y) either body may reach
const SKY_CEILING: f32 = 40.0;
/// Horizontal inset of the arc from the viewport edges
const ARC_INSET: f32 = 60.0;

/// Two-phase timer alternating day and night
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayNight {
    /// Time spent in the current phase (ms)
    pub timer_ms: f32,
    pub is_day: bool,
    /// Length of each phase (ms)
    pub length_ms: f32,
}

impl Default for DayNight {
    fn default() -> Self {
        Self::new(DAY_LENGTH_MS)
    }
}

impl DayNight {
    /// Start at the beginning of a day
    pub fn new(length_ms: f32) -> Self {
        Self {
            timer_ms: 0.0,
            is_day: true,
            length_ms: if length_ms > 0.0 { length_ms } else { DAY_LENGTH_MS },
        }
    }

    /// Accumulate `dt_ms`; flips the phase and resets the timer once the phase
    /// length is reached. Returns true on a flip.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.timer_ms += dt_ms;
        if self.timer_ms >= self.length_ms {
            self.is_day = !self.is_day;
            self.timer_ms = 0.0;
            log::debug!("{} begins", if self.is_day { "day" } else { "night" });
            return true;
        }
        false
    }

    /// Progress through the current phase, 0..1
    pub fn ratio(&self) -> f32 {
        (self.timer_ms / self.length_ms).clamp(0.0, 1.0)
    }

    /// Where the sun or moon sits right now
    ///
    /// The sun travels left to right, the moon right to left; both rise on a
    /// sine arc that peaks halfway through the phase.
    pub fn celestial(&self) -> Celestial {
        let t = self.ratio();
        let arc = (t * PI).sin();
        let (kind, x, y, radius) = if self.is_day {
            (
                CelestialKind::Sun,
                lerp(ARC_INSET, VIEW_WIDTH - ARC_INSET, t),
                lerp(160.0, 60.0, arc),
                16.0,
            )
        } else {
            (
                CelestialKind::Moon,
                lerp(VIEW_WIDTH - ARC_INSET, ARC_INSET, t),
                lerp(160.0, 70.0, arc),
                14.0,
            )
        };
        Celestial {
            kind,
            center: Vec2::new(x.trunc(), y.trunc().max(SKY_CEILING)),
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flips_after_full_phase() {
        let mut cycle = DayNight::default();
        assert!(cycle.is_day);
        let mut elapsed = 0.0;
        while elapsed + 1000.0 < DAY_LENGTH_MS {
            assert!(!cycle.advance(1000.0));
            elapsed += 1000.0;
        }
        assert!(cycle.is_day);
        assert!(cycle.advance(1000.0));
        assert!(!cycle.is_day);
        assert_eq!(cycle.timer_ms, 0.0);
    }

    #[test]
    fn test_overshoot_is_discarded() {
        let mut cycle = DayNight::new(1000.0);
        cycle.advance(999.0);
        assert!(cycle.advance(50.0));
        assert_eq!(cycle.timer_ms, 0.0);
        // Night to day
        assert!(cycle.advance(1000.0));
        assert!(cycle.is_day);
    }

    #[test]
    fn test_sun_arc() {
        let mut cycle = DayNight::new(1000.0);
        let start = cycle.celestial();
        assert_eq!(start.kind, CelestialKind::Sun);
        assert_eq!(start.center, Vec2::new(60.0, 160.0));

        cycle.timer_ms = 500.0;
        let noon = cycle.celestial();
        assert_eq!(noon.center, Vec2::new(450.0, 60.0));
    }

    #[test]
    fn test_moon_travels_right_to_left() {
        let mut cycle = DayNight::new(1000.0);
        cycle.is_day = false;
        let rise = cycle.celestial();
        assert_eq!(rise.kind, CelestialKind::Moon);
        assert_eq!(rise.center.x, VIEW_WIDTH - 60.0);

        cycle.timer_ms = 500.0;
        let mid = cycle.celestial();
        assert!(mid.center.x < rise.center.x);
        assert!(mid.center.y < rise.center.y);
        assert!(mid.center.y >= SKY_CEILING);
    }

    #[test]
    fn test_non_positive_length_falls_back() {
        let cycle = DayNight::new(0.0);
        assert_eq!(cycle.length_ms, DAY_LENGTH_MS);
    }
}
