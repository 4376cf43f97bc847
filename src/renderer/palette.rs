//! Day and night color palettes

use serde::{Deserialize, Serialize};

use super::Rgb;

/// Colors for one phase of the day/night cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub sky: Rgb,
    pub ground: Rgb,
    /// Ninja robe, arms and legs
    pub figure: Rgb,
    /// Headband
    pub accent: Rgb,
    pub eye: Rgb,
    pub obstacle: Rgb,
    /// HUD text
    pub text: Rgb,
    /// Sun or moon
    pub celestial: Rgb,
    pub star: Rgb,
    pub cloud: Rgb,
}

const DAY_BG: Rgb = Rgb(245, 249, 255);
const NIGHT_BG: Rgb = Rgb(15, 18, 28);
const INK: Rgb = Rgb(40, 40, 40);
const CHALK: Rgb = Rgb(230, 230, 230);
const ACCENT: Rgb = Rgb(220, 20, 60);
const STAR: Rgb = Rgb(220, 220, 255);
const CLOUD: Rgb = Rgb(200, 205, 210);

impl Palette {
    pub const fn day() -> Self {
        Self {
            sky: DAY_BG,
            ground: INK,
            figure: Rgb(20, 20, 20),
            accent: ACCENT,
            eye: Rgb(235, 235, 235),
            obstacle: Rgb(30, 30, 30),
            text: INK,
            celestial: Rgb(255, 204, 0),
            star: STAR,
            cloud: CLOUD,
        }
    }

    pub const fn night() -> Self {
        Self {
            sky: NIGHT_BG,
            ground: CHALK,
            figure: CHALK,
            accent: ACCENT,
            eye: Rgb(250, 250, 250),
            obstacle: CHALK,
            text: CHALK,
            celestial: Rgb(230, 230, 255),
            star: STAR,
            cloud: CLOUD,
        }
    }

    pub const fn for_cycle(is_day: bool) -> Self {
        if is_day { Self::day() } else { Self::night() }
    }
}
