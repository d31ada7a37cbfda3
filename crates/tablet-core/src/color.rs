//! Color assignment for new tablets.
//!
//! Colors are drawn from a light/pastel band of HSL space so every tablet
//! stays readable, then checked against the colors already on the canvas.
//! The first candidate that is dissimilar enough wins. If the attempt budget
//! runs out, the least similar candidate seen is used instead.

use crate::model::Color;
use rand::Rng;

// ─── Config ───────────────────────────────────────────────────────────────

/// Tuning for [`pick_distinct_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConfig {
    /// Random draws before settling for the best candidate. Default: **100**.
    pub max_attempts: u32,
    /// A candidate is accepted when its highest similarity to any used
    /// color is strictly below this value. Default: **0.25**.
    pub min_similarity_threshold: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            min_similarity_threshold: 0.25,
        }
    }
}

// ─── HSL ──────────────────────────────────────────────────────────────────

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn to_color(self) -> Color {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(to_u8(r1), to_u8(g1), to_u8(b1))
    }
}

impl Color {
    pub fn to_hsl(&self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };

        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

/// Uniform draw from the light band: hue 0–359, saturation 40–79,
/// lightness 70–89 (whole numbers).
pub fn random_light_hsl<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl {
        h: rng.gen_range(0..360) as f32,
        s: rng.gen_range(40..80) as f32,
        l: rng.gen_range(70..90) as f32,
    }
}

// ─── Similarity ───────────────────────────────────────────────────────────

const HUE_WEIGHT: f32 = 0.6;
const SATURATION_WEIGHT: f32 = 0.2;
const LIGHTNESS_WEIGHT: f32 = 0.2;

/// Weighted similarity in `[0, 1]`; 1.0 means identical.
pub fn similarity(a: Hsl, b: Hsl) -> f32 {
    let raw = (a.h - b.h).abs().rem_euclid(360.0);
    let hue_dist = raw.min(360.0 - raw) / 180.0;
    let sat_dist = (a.s - b.s).abs() / 100.0;
    let light_dist = (a.l - b.l).abs() / 100.0;

    HUE_WEIGHT * (1.0 - hue_dist)
        + SATURATION_WEIGHT * (1.0 - sat_dist)
        + LIGHTNESS_WEIGHT * (1.0 - light_dist)
}

/// Highest similarity between `candidate` and any of `used`.
fn max_similarity(candidate: Hsl, used: &[Hsl]) -> f32 {
    used.iter()
        .map(|u| similarity(candidate, *u))
        .fold(0.0, f32::max)
}

/// Pick a light color that stands apart from every color in `used`.
pub fn pick_distinct_color<R: Rng + ?Sized>(
    used: &[Color],
    config: &ColorConfig,
    rng: &mut R,
) -> Color {
    if used.is_empty() {
        return random_light_hsl(rng).to_color();
    }

    let used: Vec<Hsl> = used.iter().map(Color::to_hsl).collect();
    let mut best: Option<(Color, f32)> = None;

    for _ in 0..config.max_attempts.max(1) {
        let candidate = random_light_hsl(rng).to_color();
        // Score the quantized color, which is what ends up on the canvas.
        let score = max_similarity(candidate.to_hsl(), &used);
        if score < config.min_similarity_threshold {
            return candidate;
        }
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((color, score)) => {
            log::debug!(
                "no color under similarity {} after {} draws; using {} ({score:.3})",
                config.min_similarity_threshold,
                config.max_attempts,
                color.to_hex()
            );
            color
        }
        None => random_light_hsl(rng).to_color(),
    }
}
