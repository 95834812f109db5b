// File: src/bin/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorbuddy::config::Config;
use colorbuddy::contrast::{accessibility_report, calculate_contrast, readable_text_color};
use colorbuddy::export::{ExportFormat, render};
use colorbuddy::extract::extract_palette;
use colorbuddy::generator::{RandomJitter, generate_with, random_palette};
use colorbuddy::harmony::analyze_harmony;
use colorbuddy::naming::descriptive_color_name;
use colorbuddy::theme::COLOR_THEMES;
use colorbuddy::{Color, Palette, Temperature};
use log::{LevelFilter, debug};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "colorbuddy", version, about = "Generate, extract and check color palettes")]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Palette from a text prompt
    Generate {
        prompt: String,
        #[arg(short = 'n', long = "num-colors")]
        num_colors: Option<usize>,
        #[arg(short, long)]
        temperature: Option<Temperature>,
        /// Seed for the variation of wrapped-around colors
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },
    /// Uniformly random colors
    Random {
        #[arg(short = 'n', long = "num-colors")]
        num_colors: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },
    /// Dominant colors of an image
    Extract {
        image: PathBuf,
        #[arg(short = 'n', long = "num-colors")]
        num_colors: Option<usize>,
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },
    /// WCAG contrast of a text color on a background
    Contrast { foreground: String, background: String },
    /// Harmony, names and accessibility of a set of colors
    Analyze {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// List the theme catalog
    Themes,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_palette(palette: &Palette, format: ExportFormat) -> Result<()> {
    println!("{}", render(palette, format)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    debug!("loaded config: {:?}", config);

    match cli.command {
        Command::Generate {
            prompt,
            num_colors,
            temperature,
            seed,
            format,
        } => {
            let mut jitter = RandomJitter::new(rng_for(seed));
            let palette = generate_with(
                &prompt,
                num_colors.unwrap_or(config.num_colors),
                temperature.unwrap_or(config.temperature),
                &mut jitter,
            )?;
            print_palette(&palette, format.unwrap_or(config.format))?;
        }
        Command::Random {
            num_colors,
            seed,
            format,
        } => {
            let mut rng = rng_for(seed);
            let palette = random_palette(num_colors.unwrap_or(config.num_colors), &mut rng)?;
            print_palette(&palette, format.unwrap_or(config.format))?;
        }
        Command::Extract {
            image,
            num_colors,
            format,
        } => {
            let bytes = fs::read(&image).with_context(|| format!("Failed to read {}", image.display()))?;
            let palette = extract_palette(&bytes, num_colors.unwrap_or(config.extract_colors))
                .with_context(|| format!("Could not extract colors from {}", image.display()))?;
            print_palette(&palette, format.unwrap_or(config.format))?;
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let info = calculate_contrast(&foreground, &background)?;
            println!("Ratio:       {:.2}:1", info.ratio);
            println!("Level:       {}", info.level);
            println!("Normal text: {}", if info.is_accessible_small { "pass" } else { "fail" });
            println!("Large text:  {}", if info.is_accessible_large { "pass" } else { "fail" });
            println!("Best text on {}: {}", background, readable_text_color(&background)?);
        }
        Command::Analyze { colors } => {
            let palette: Palette = colors.into_iter().map(Color::new).collect();
            for color in &palette {
                println!("{}  {}", color.hex, descriptive_color_name(&color.hex)?);
            }

            let harmony = analyze_harmony(&palette)?;
            println!();
            println!("Harmony:     {}", harmony.harmony_type);
            println!("             {}", harmony.description);
            println!("Temperature: {:?}", harmony.temperature);

            let report = accessibility_report(&palette)?;
            if !report.is_empty() {
                println!();
                for pair in report {
                    println!(
                        "{} on {}: {:.2}:1 {}",
                        pair.text, pair.background, pair.info.ratio, pair.info.level
                    );
                }
            }
        }
        Command::Themes => {
            for theme in COLOR_THEMES.iter() {
                println!("{:<10} {}", theme.name, theme.keywords.join(", "));
            }
        }
    }
    Ok(())
}
