// File: src/generator.rs
//! Prompt-based palette generation.
//!
//! A prompt is matched against the theme catalog to choose a pool of base
//! colors, every color is shifted by the requested temperature, and slots
//! beyond the end of the pool get a small random HSL variation so cycling
//! does not produce exact duplicates.
//!
//! The variation is the only non-deterministic step. It is drawn from a
//! [`Jitter`] so callers (and tests) decide where the randomness comes from.
use crate::color_utils::{Hsl, Rgb, wrap_hue};
use crate::error::PaletteError;
use crate::model::{Color, Palette};
use crate::temperature::{Temperature, adjust_color_temperature};
use crate::theme::{ColorTheme, match_theme};
use log::debug;
use rand::Rng;

/// Pool used when neither a theme nor a temperature applies.
pub const NEUTRAL_FALLBACK: [&str; 5] = ["#4285f4", "#34a853", "#ea4335", "#fbbc04", "#9aa0a6"];

/// Name prefix for palettes that did not match a theme.
pub const GENERATED_PREFIX: &str = "generated";

pub const HUE_VARIATION: f64 = 30.0;
pub const SATURATION_VARIATION: f64 = 10.0;
pub const LIGHTNESS_VARIATION: f64 = 15.0;
pub const SATURATION_BOUNDS: (f64, f64) = (15.0, 90.0);
pub const LIGHTNESS_BOUNDS: (f64, f64) = (15.0, 85.0);

/// HSL deltas applied to a wrapped-around slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Variation {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Source of variations for slots past the end of the pool.
pub trait Jitter {
    fn next_variation(&mut self) -> Variation;
}

/// Uniform deltas within ±30° hue, ±10 saturation and ±15 lightness.
#[derive(Debug, Clone)]
pub struct RandomJitter<R> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn next_variation(&mut self) -> Variation {
        Variation {
            hue: self.rng.gen_range(-HUE_VARIATION..HUE_VARIATION),
            saturation: self.rng.gen_range(-SATURATION_VARIATION..SATURATION_VARIATION),
            lightness: self.rng.gen_range(-LIGHTNESS_VARIATION..LIGHTNESS_VARIATION),
        }
    }
}

/// Always returns the same variation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub Variation);

impl Jitter for FixedJitter {
    fn next_variation(&mut self) -> Variation {
        self.0
    }
}

/// The candidate colors for a prompt, plus the theme that produced them.
#[derive(Debug, Clone, Copy)]
pub struct ColorPool {
    pub theme: Option<&'static ColorTheme>,
    colors: PoolColors,
}

#[derive(Debug, Clone, Copy)]
enum PoolColors {
    Theme(&'static ColorTheme),
    Fixed(&'static [&'static str]),
}

impl ColorPool {
    pub fn select(theme: Option<&'static ColorTheme>, temperature: Temperature) -> Self {
        let colors = match (theme, temperature.fallback_colors()) {
            (Some(theme), _) => PoolColors::Theme(theme),
            (None, Some(fallback)) => PoolColors::Fixed(fallback),
            (None, None) => PoolColors::Fixed(&NEUTRAL_FALLBACK),
        };
        Self { theme, colors }
    }

    pub fn len(&self) -> usize {
        match self.colors {
            PoolColors::Theme(t) => t.base_colors.len() + t.variations.len(),
            PoolColors::Fixed(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cyclic access: `index` wraps around the pool.
    pub fn get(&self, index: usize) -> &'static str {
        let i = index % self.len();
        match self.colors {
            PoolColors::Theme(t) if i < t.base_colors.len() => t.base_colors[i],
            PoolColors::Theme(t) => t.variations[i - t.base_colors.len()],
            PoolColors::Fixed(c) => c[i],
        }
    }

    pub fn name_prefix(&self) -> &'static str {
        self.theme.map(|t| t.name).unwrap_or(GENERATED_PREFIX)
    }
}

/// Applies a variation to a color, keeping saturation and lightness within
/// the bounds used for wrapped-around slots.
pub fn vary_color(hex: &str, variation: Variation) -> Result<String, PaletteError> {
    let hsl = Rgb::from_hex(hex)?.to_hsl();
    let varied = Hsl {
        h: wrap_hue(hsl.h + variation.hue),
        s: (hsl.s + variation.saturation).clamp(SATURATION_BOUNDS.0, SATURATION_BOUNDS.1),
        l: (hsl.l + variation.lightness).clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1),
    };
    Ok(varied.to_hex())
}

/// Generates `num_colors` colors for a prompt, using the thread-local RNG
/// for wrapped-around slots.
pub fn generate(prompt: &str, num_colors: usize, temperature: Temperature) -> Result<Palette, PaletteError> {
    let mut jitter = RandomJitter::new(rand::thread_rng());
    generate_with(prompt, num_colors, temperature, &mut jitter)
}

pub fn generate_with<J: Jitter + ?Sized>(
    prompt: &str,
    num_colors: usize,
    temperature: Temperature,
    jitter: &mut J,
) -> Result<Palette, PaletteError> {
    if num_colors == 0 {
        return Err(PaletteError::InvalidColorCount(num_colors));
    }

    let pool = ColorPool::select(match_theme(prompt), temperature);
    debug!(
        "generating {} colors from a {}-color '{}' pool ({})",
        num_colors,
        pool.len(),
        pool.name_prefix(),
        temperature
    );

    let mut palette = Vec::with_capacity(num_colors);
    for i in 0..num_colors {
        let base = pool.get(i);
        let mut hex = adjust_color_temperature(base, temperature)?;
        if i >= pool.len() {
            hex = vary_color(&hex, jitter.next_variation())?;
        }
        palette.push(Color::named(hex, format!("{}-{}", pool.name_prefix(), i + 1)));
    }
    Ok(palette)
}

/// Independent uniform RGB colors in uppercase hex, without names.
pub fn random_palette<R: Rng>(num_colors: usize, rng: &mut R) -> Result<Palette, PaletteError> {
    if num_colors == 0 {
        return Err(PaletteError::InvalidColorCount(num_colors));
    }
    Ok((0..num_colors)
        .map(|_| Color::new(Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()).to_hex_upper()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::COOL_FALLBACK;
    use crate::theme::find_theme;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pool_prefers_theme_then_temperature_then_neutral() {
        let ocean = find_theme("ocean");
        let pool = ColorPool::select(ocean, Temperature::Warm);
        assert_eq!(pool.len(), 10);
        assert_eq!(pool.get(0), "#0077be");
        assert_eq!(pool.get(5), "#e0f6ff");
        assert_eq!(pool.get(10), "#0077be");

        let warm = ColorPool::select(None, Temperature::Warm);
        assert_eq!(warm.len(), 5);
        assert_eq!(warm.get(0), "#ff4500");
        assert_eq!(warm.name_prefix(), GENERATED_PREFIX);

        let cool = ColorPool::select(None, Temperature::Cool);
        assert_eq!(cool.len(), COOL_FALLBACK.len());
        for (i, hex) in COOL_FALLBACK.iter().enumerate() {
            assert_eq!(cool.get(i), *hex);
        }

        let neutral = ColorPool::select(None, Temperature::Neutral);
        assert_eq!(neutral.get(4), "#9aa0a6");
        assert!(!neutral.is_empty());
    }

    #[test]
    fn zero_colors_is_rejected() {
        assert_eq!(
            generate("ocean", 0, Temperature::Neutral),
            Err(PaletteError::InvalidColorCount(0))
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_palette(0, &mut rng).is_err());
    }

    #[test]
    fn names_use_theme_and_one_based_index() {
        let palette = generate("autumn leaves", 3, Temperature::Neutral).unwrap();
        let names: Vec<_> = palette.iter().map(|c| c.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["autumn-1", "autumn-2", "autumn-3"]);

        let palette = generate("", 2, Temperature::Neutral).unwrap();
        assert_eq!(palette[1].name.as_deref(), Some("generated-2"));
    }

    #[test]
    fn zero_variation_reproduces_clamped_base() {
        // With a zero variation only the clamping to [15,90]/[15,85] applies.
        let mut jitter = FixedJitter::default();
        let palette = generate_with("", 6, Temperature::Neutral, &mut jitter).unwrap();
        assert_eq!(palette[5].hex, vary_color("#4285f4", Variation::default()).unwrap());
    }

    #[test]
    fn fixed_variation_is_applied_only_past_the_pool() {
        let variation = Variation {
            hue: 20.0,
            saturation: -5.0,
            lightness: 5.0,
        };
        let mut jitter = FixedJitter(variation);
        let palette = generate_with("", 7, Temperature::Neutral, &mut jitter).unwrap();
        assert_eq!(palette[0].hex, "#4285f4");
        assert_eq!(palette[4].hex, "#9aa0a6");
        assert_eq!(palette[5].hex, vary_color("#4285f4", variation).unwrap());
        assert_eq!(palette[6].hex, vary_color("#34a853", variation).unwrap());
    }

    #[test]
    fn variation_respects_bounds() {
        let extreme = Variation {
            hue: -29.9,
            saturation: 10.0,
            lightness: -15.0,
        };
        // Pure black has l = 0; the floor lifts it to 15.
        let hsl = Rgb::from_hex(&vary_color("#000000", extreme).unwrap()).unwrap().to_hsl();
        assert!((hsl.l - 15.0).abs() <= 0.5, "lightness {}", hsl.l);
        // Fully saturated red is capped at 90.
        let hsl = Rgb::from_hex(&vary_color("#ff0000", extreme).unwrap()).unwrap().to_hsl();
        assert!(hsl.s <= 91.0, "saturation {}", hsl.s);
    }

    #[test]
    fn random_jitter_stays_in_range() {
        let mut jitter = RandomJitter::new(StdRng::seed_from_u64(42));
        for _ in 0..1000 {
            let v = jitter.next_variation();
            assert!(v.hue.abs() <= HUE_VARIATION);
            assert!(v.saturation.abs() <= SATURATION_VARIATION);
            assert!(v.lightness.abs() <= LIGHTNESS_VARIATION);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_with("sunset", 14, Temperature::Warm, &mut RandomJitter::new(StdRng::seed_from_u64(9))).unwrap();
        let b = generate_with("sunset", 14, Temperature::Warm, &mut RandomJitter::new(StdRng::seed_from_u64(9))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_palette_is_uppercase_and_unnamed() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = random_palette(6, &mut rng).unwrap();
        assert_eq!(palette.len(), 6);
        for color in &palette {
            assert!(color.name.is_none());
            assert_eq!(color.hex, color.hex.to_uppercase());
            assert!(Rgb::from_hex(&color.hex).is_ok());
        }
    }
}
