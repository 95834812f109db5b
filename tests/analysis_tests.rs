use colorbuddy::contrast::{ContrastLevel, accessibility_report, calculate_contrast};
use colorbuddy::export::{ExportFormat, render};
use colorbuddy::harmony::analyze_harmony;
use colorbuddy::history::{PaletteHistory, PaletteSource};
use colorbuddy::model::PaletteResponse;
use colorbuddy::{Temperature, generate};

#[test]
fn black_on_white_is_maximal_and_symmetric() {
    let forward = calculate_contrast("#000000", "#ffffff").unwrap();
    let backward = calculate_contrast("#FFFFFF", "000000").unwrap();
    assert!((forward.ratio - 21.0).abs() < 1e-9);
    assert_eq!(forward, backward);
    assert_eq!(forward.level, ContrastLevel::Aaa);
    assert!(calculate_contrast("#12345", "#ffffff").is_err());
}

#[test]
fn generated_palette_flows_through_analysis_and_export() {
    let palette = generate("forest moss", 5, Temperature::Neutral).unwrap();

    let report = accessibility_report(&palette).unwrap();
    assert_eq!(report.len(), 5);
    assert!(analyze_harmony(&palette).is_ok());

    let json = render(&palette, ExportFormat::Json).unwrap();
    assert_eq!(PaletteResponse::from_json(&json).unwrap().into_palette(), palette);

    let css = render(&palette, ExportFormat::Css).unwrap();
    assert!(css.contains("--brand-color-5:"));

    let mut history = PaletteHistory::new();
    let id = history.save(&palette, PaletteSource::Ai, None).unwrap();
    assert!(history.get(&id).unwrap().name.starts_with("AI Generated (5 colors)"));
}
