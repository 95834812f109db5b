// File: src/theme.rs
//! Built-in theme catalog and the keyword matcher that maps prompts onto it.
//!
//! The catalog is a read-only `static` table. Its declaration order is part of
//! the matching behavior: when two themes score the same, the one declared
//! first wins.
use log::debug;
use rand::Rng;

/// Color returned for lookups against a theme name that does not exist.
pub const UNKNOWN_THEME_COLOR: &str = "#666666";

#[derive(Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub base_colors: &'static [&'static str],
    pub variations: &'static [&'static str],
}

pub static COLOR_THEMES: [ColorTheme; 10] = [
    // Ocean/Water
    ColorTheme {
        name: "ocean",
        keywords: &[
            "ocean", "sea", "wave", "water", "marine", "aquatic", "deep", "blue", "teal",
            "turquoise",
        ],
        base_colors: &["#0077be", "#20b2aa", "#4682b4", "#5f9ea0", "#008b8b"],
        variations: &["#e0f6ff", "#87ceeb", "#4169e1", "#191970", "#2e8b57"],
    },
    // Sunset/Warm
    ColorTheme {
        name: "sunset",
        keywords: &[
            "sunset", "sunrise", "warm", "golden", "orange", "pink", "coral", "amber",
        ],
        base_colors: &["#ff6b35", "#f7931e", "#ffb347", "#ff69b4", "#ff7f50"],
        variations: &["#fff8dc", "#ffa500", "#ff4500", "#dc143c", "#b22222"],
    },
    // Forest/Nature
    ColorTheme {
        name: "forest",
        keywords: &[
            "forest", "tree", "nature", "green", "leaf", "plant", "earth", "moss", "sage",
        ],
        base_colors: &["#228b22", "#32cd32", "#90ee90", "#556b2f", "#6b8e23"],
        variations: &["#f0fff0", "#98fb98", "#8fbc8f", "#2e8b57", "#006400"],
    },
    ColorTheme {
        name: "autumn",
        keywords: &[
            "autumn", "fall", "leaf", "harvest", "russet", "amber", "copper", "bronze",
        ],
        base_colors: &["#d2691e", "#cd853f", "#daa520", "#b22222", "#a0522d"],
        variations: &["#fff8dc", "#f4a460", "#d2b48c", "#8b4513", "#654321"],
    },
    // Tech/Cyberpunk
    ColorTheme {
        name: "tech",
        keywords: &[
            "cyber", "tech", "digital", "neon", "electric", "matrix", "futuristic", "ai", "robot",
        ],
        base_colors: &["#00ffff", "#ff00ff", "#00ff00", "#8a2be2", "#4169e1"],
        variations: &["#e6e6fa", "#7fffd4", "#da70d6", "#9370db", "#191970"],
    },
    // Coffee/Brown
    ColorTheme {
        name: "coffee",
        keywords: &[
            "coffee", "cafe", "brown", "mocha", "espresso", "chocolate", "cocoa", "caramel",
        ],
        base_colors: &["#8b4513", "#a0522d", "#d2691e", "#cd853f", "#deb887"],
        variations: &["#f5f5dc", "#d2b48c", "#bc8f8f", "#696969", "#2f4f4f"],
    },
    ColorTheme {
        name: "spring",
        keywords: &[
            "spring", "bloom", "flower", "pastel", "fresh", "mint", "lavender", "peach",
        ],
        base_colors: &["#ffb6c1", "#98fb98", "#f0e68c", "#dda0dd", "#87ceeb"],
        variations: &["#fffacd", "#f5fffa", "#fff0f5", "#e6e6fa", "#f0f8ff"],
    },
    // Night/Dark
    ColorTheme {
        name: "night",
        keywords: &[
            "night", "midnight", "dark", "moon", "star", "shadow", "deep", "black",
        ],
        base_colors: &["#191970", "#2f4f4f", "#483d8b", "#663399", "#4b0082"],
        variations: &["#e6e6fa", "#708090", "#8b8b8b", "#2e2e2e", "#000000"],
    },
    // Corporate/Professional
    ColorTheme {
        name: "corporate",
        keywords: &[
            "corporate", "business", "professional", "trust", "clean", "minimal", "office",
        ],
        base_colors: &["#003366", "#336699", "#6699cc", "#999999", "#cccccc"],
        variations: &["#f8f9fa", "#e9ecef", "#6c757d", "#495057", "#212529"],
    },
    ColorTheme {
        name: "tropical",
        keywords: &[
            "tropical", "beach", "paradise", "bright", "vibrant", "lime", "aqua", "coral",
        ],
        base_colors: &["#00ced1", "#ff7f50", "#32cd32", "#ffd700", "#ff69b4"],
        variations: &["#f0ffff", "#7fffd4", "#98fb98", "#ffffe0", "#ffe4e1"],
    },
];

impl ColorTheme {
    /// Sum of the lengths of every keyword contained in the (already
    /// lower-cased) prompt. Containment is substring-based, not token-based.
    pub fn score(&self, normalized_prompt: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| normalized_prompt.contains(*keyword))
            .map(|keyword| keyword.len())
            .sum()
    }

    /// Base colors followed by variations.
    pub fn colors(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.base_colors.iter().chain(self.variations.iter()).copied()
    }
}

/// Picks the best-scoring theme for a prompt, or `None` when no keyword occurs.
pub fn match_theme(prompt: &str) -> Option<&'static ColorTheme> {
    let normalized = prompt.to_lowercase();
    let mut best: Option<&'static ColorTheme> = None;
    let mut best_score = 0;

    for theme in COLOR_THEMES.iter() {
        let score = theme.score(&normalized);
        // Strictly greater: ties keep the earlier theme.
        if score > best_score {
            best_score = score;
            best = Some(theme);
        }
    }

    match best {
        Some(theme) => debug!("prompt {:?} matched theme '{}' (score {})", prompt, theme.name, best_score),
        None => debug!("prompt {:?} matched no theme", prompt),
    }
    best
}

pub fn find_theme(name: &str) -> Option<&'static ColorTheme> {
    COLOR_THEMES.iter().find(|t| t.name == name)
}

/// A uniformly chosen color from the named theme.
pub fn random_color_from_theme<R: Rng>(name: &str, rng: &mut R) -> &'static str {
    let Some(theme) = find_theme(name) else {
        return UNKNOWN_THEME_COLOR;
    };
    let count = theme.base_colors.len() + theme.variations.len();
    theme.colors().nth(rng.gen_range(0..count)).unwrap_or(UNKNOWN_THEME_COLOR)
}
