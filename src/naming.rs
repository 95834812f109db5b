// File: src/naming.rs
// Approximate human-readable names for arbitrary colors.
use crate::color_utils::Rgb;
use crate::error::ColorError;

const EXACT_NAMES: [(Rgb, &str); 9] = [
    (Rgb::new(0xff, 0x00, 0x00), "Red"),
    (Rgb::new(0x00, 0xff, 0x00), "Green"),
    (Rgb::new(0x00, 0x00, 0xff), "Blue"),
    (Rgb::new(0xff, 0xff, 0x00), "Yellow"),
    (Rgb::new(0xff, 0x00, 0xff), "Magenta"),
    (Rgb::new(0x00, 0xff, 0xff), "Cyan"),
    (Rgb::new(0x00, 0x00, 0x00), "Black"),
    (Rgb::new(0xff, 0xff, 0xff), "White"),
    (Rgb::new(0x80, 0x80, 0x80), "Gray"),
];

/// A primary name on exact match, a gray shade for near-achromatic colors,
/// otherwise the family of the dominant channel.
pub fn color_name(hex: &str) -> Result<&'static str, ColorError> {
    let rgb = Rgb::from_hex(hex)?;
    if let Some((_, name)) = EXACT_NAMES.iter().find(|(c, _)| *c == rgb) {
        return Ok(name);
    }

    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max - min < 30 {
        return Ok(if max < 85 {
            "Dark Gray"
        } else if max < 170 {
            "Gray"
        } else {
            "Light Gray"
        });
    }

    let name = if r == max && g >= b {
        "Red-Orange"
    } else if r == max {
        "Red-Pink"
    } else if g == max && r >= b {
        "Yellow-Green"
    } else if g == max {
        "Green"
    } else if r >= g {
        "Purple"
    } else {
        "Blue"
    };
    Ok(name)
}

/// The base name prefixed with lightness and saturation descriptors,
/// e.g. "Deep Vibrant Blue".
pub fn descriptive_color_name(hex: &str) -> Result<String, ColorError> {
    let hsl = Rgb::from_hex(hex)?.to_hsl();
    let lightness = hsl.l / 100.0;
    let saturation = hsl.s / 100.0;

    let mut descriptor = String::new();
    if lightness < 0.3 {
        descriptor.push_str("Deep ");
    } else if lightness > 0.8 {
        descriptor.push_str("Light ");
    } else if lightness > 0.6 {
        descriptor.push_str("Pale ");
    }

    if saturation < 0.3 {
        descriptor.push_str("Muted ");
    } else if saturation > 0.8 {
        descriptor.push_str("Vibrant ");
    }

    Ok(format!("{}{}", descriptor, color_name(hex)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_ignore_case() {
        assert_eq!(color_name("#ff0000").unwrap(), "Red");
        assert_eq!(color_name("#FFFFFF").unwrap(), "White");
        assert_eq!(color_name("#808080").unwrap(), "Gray");
    }

    #[test]
    fn grays_by_brightness() {
        assert_eq!(color_name("#202020").unwrap(), "Dark Gray");
        assert_eq!(color_name("#707a70").unwrap(), "Gray");
        assert_eq!(color_name("#d0d0d8").unwrap(), "Light Gray");
    }

    #[test]
    fn dominant_channel_families() {
        assert_eq!(color_name("#ff6b35").unwrap(), "Red-Orange");
        assert_eq!(color_name("#ff69b4").unwrap(), "Red-Pink");
        assert_eq!(color_name("#9acd32").unwrap(), "Yellow-Green");
        assert_eq!(color_name("#20b2aa").unwrap(), "Green");
        assert_eq!(color_name("#8a2be2").unwrap(), "Purple");
        assert_eq!(color_name("#0077be").unwrap(), "Blue");
    }

    #[test]
    fn descriptors() {
        assert_eq!(descriptive_color_name("#191970").unwrap(), "Deep Purple");
        assert_eq!(descriptive_color_name("#003366").unwrap(), "Deep Vibrant Blue");
        assert_eq!(descriptive_color_name("#ff0000").unwrap(), "Vibrant Red");
        assert_eq!(descriptive_color_name("#e0f6ff").unwrap(), "Light Vibrant Blue");
        assert_eq!(descriptive_color_name("#000000").unwrap(), "Deep Muted Black");
    }
}
