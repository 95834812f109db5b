// File: src/extract.rs
//! Dominant-color extraction from image bytes.
//!
//! Pixels are bucketed on the top four bits of each channel. The most
//! populated buckets become the palette, each represented by the mean of the
//! pixels that fell into it.
use crate::color_utils::Rgb;
use crate::error::ExtractError;
use crate::model::{Color, Palette};
use image::GenericImageView;
use log::debug;

pub const MAX_EXTRACT_COLORS: usize = 20;
pub const DEFAULT_EXTRACT_COLORS: usize = 6;
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
/// Longest edge after downsampling.
pub const SAMPLE_EDGE: u32 = 256;

const BUCKET_BITS: u8 = 4;
const BUCKET_COUNT: usize = 1 << (3 * BUCKET_BITS);

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    count: u64,
    r: u64,
    g: u64,
    b: u64,
}

impl Bucket {
    fn mean(&self) -> Rgb {
        let avg = |sum: u64| ((sum as f64 / self.count as f64).round()).clamp(0.0, 255.0) as u8;
        Rgb::new(avg(self.r), avg(self.g), avg(self.b))
    }
}

fn bucket_index(r: u8, g: u8, b: u8) -> usize {
    let shift = 8 - BUCKET_BITS;
    (((r >> shift) as usize) << (2 * BUCKET_BITS)) | (((g >> shift) as usize) << BUCKET_BITS) | (b >> shift) as usize
}

/// Extracts up to `num_colors` dominant colors, most common first. Fewer
/// colors are returned when the image does not contain that many distinct
/// buckets.
pub fn extract_palette(bytes: &[u8], num_colors: usize) -> Result<Palette, ExtractError> {
    if num_colors == 0 || num_colors > MAX_EXTRACT_COLORS {
        return Err(ExtractError::InvalidColorCount {
            requested: num_colors,
            max: MAX_EXTRACT_COLORS,
        });
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ExtractError::TooLarge {
            size: bytes.len(),
            max: MAX_IMAGE_BYTES,
        });
    }

    let mut img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width > SAMPLE_EDGE || height > SAMPLE_EDGE {
        img = img.thumbnail(SAMPLE_EDGE, SAMPLE_EDGE);
    }
    let rgb = img.to_rgb8();
    debug!(
        "extracting {} colors from {}x{} image (sampled at {}x{})",
        num_colors,
        width,
        height,
        rgb.width(),
        rgb.height()
    );

    let mut buckets = vec![Bucket::default(); BUCKET_COUNT];
    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        let bucket = &mut buckets[bucket_index(r, g, b)];
        bucket.count += 1;
        bucket.r += r as u64;
        bucket.g += g as u64;
        bucket.b += b as u64;
    }

    let mut ranked: Vec<(usize, Bucket)> = buckets
        .into_iter()
        .enumerate()
        .filter(|(_, b)| b.count > 0)
        .collect();
    if ranked.is_empty() {
        return Err(ExtractError::NoColors);
    }
    // Most populated first; ties by bucket index keep the order stable.
    ranked.sort_by(|(ia, a), (ib, b)| b.count.cmp(&a.count).then(ia.cmp(ib)));

    Ok(ranked
        .into_iter()
        .take(num_colors)
        .map(|(_, bucket)| Color::new(bucket.mean().to_hex_upper()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, Rgb as Pixel, RgbImage};
    use std::io::Cursor;

    fn png(img: RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn ranks_colors_by_area() {
        // 3/4 blue, 1/4 orange
        let img = RgbImage::from_fn(40, 40, |x, _| {
            if x < 30 {
                Pixel([0x00, 0x77, 0xbe])
            } else {
                Pixel([0xff, 0x6b, 0x35])
            }
        });
        let palette = extract_palette(&png(img), 5).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].hex, "#0077BE");
        assert_eq!(palette[1].hex, "#FF6B35");
        assert!(palette.iter().all(|c| c.name.is_none()));
    }

    #[test]
    fn bucket_mean_blends_nearby_shades() {
        // #100000 and #1e0000 share the top nibble of every channel
        let img = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Pixel([0x10, 0, 0]) } else { Pixel([0x1e, 0, 0]) });
        let palette = extract_palette(&png(img), 3).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].hex, "#170000");
    }

    #[test]
    fn truncates_to_requested_count() {
        let img = RgbImage::from_fn(64, 1, |x, _| Pixel([(x * 4) as u8, 0, 255 - (x * 4) as u8]));
        let palette = extract_palette(&png(img), 3).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn validates_inputs() {
        assert!(matches!(
            extract_palette(&[], 0),
            Err(ExtractError::InvalidColorCount { requested: 0, .. })
        ));
        assert!(matches!(
            extract_palette(&[], 21),
            Err(ExtractError::InvalidColorCount { requested: 21, .. })
        ));
        assert!(matches!(
            extract_palette(b"definitely not an image", 6),
            Err(ExtractError::Decode(_))
        ));
        let oversized = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(matches!(
            extract_palette(&oversized, 6),
            Err(ExtractError::TooLarge { .. })
        ));
    }

    #[test]
    fn large_images_are_downsampled() {
        let img = RgbImage::from_pixel(600, 300, Pixel([0x22, 0x8b, 0x22]));
        let palette = extract_palette(&png(img), 2).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].hex, "#228B22");
    }
}
