// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use cropguide_core::colour::parse_hex_colour;
use cropguide_core::{ConfigError, GridMode, GuideVariant, OverlayConfig, Style};
use rune_cfg::RuneConfig;

/// Load the overlay config; a missing file means defaults.
pub fn load(path: &Path) -> Result<OverlayConfig, String> {
    if !path.exists() {
        return Ok(OverlayConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    let cfg = parse_config(&rc)?;
    cfg.validate().map_err(|e| format!("config error: {e}"))?;
    Ok(cfg)
}

fn get_str(rc: &RuneConfig, key: &str) -> Result<Option<String>, String> {
    rc.get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn get_number(rc: &RuneConfig, key: &str) -> Result<Option<f64>, String> {
    rc.get_optional::<f64>(key)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn get_flag(rc: &RuneConfig, key: &str) -> Result<Option<bool>, String> {
    rc.get_optional::<bool>(key)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn at(key: &str) -> impl Fn(ConfigError) -> String + '_ {
    move |e| format!("config error at {key}: {e}")
}

fn parse_config(rc: &RuneConfig) -> Result<OverlayConfig, String> {
    let mut cfg = OverlayConfig::default();

    if !rc.has("cropguide") {
        return Ok(cfg);
    }

    // modes
    if let Some(v) = get_str(rc, "cropguide.style")? {
        cfg.style = parse_style(&v).map_err(at("cropguide.style"))?;
    }

    if let Some(v) = get_str(rc, "cropguide.grid_mode")? {
        cfg.grid_mode = parse_grid_mode(&v).map_err(at("cropguide.grid_mode"))?;
    }

    if let Some(v) = get_str(rc, "cropguide.guide_variant")? {
        cfg.guide_variant = parse_guide_variant(&v).map_err(at("cropguide.guide_variant"))?;
    }

    // metrics and flags are bare rune values; validate() checks the range
    if let Some(v) = get_number(rc, "cropguide.hot_area_unit")? {
        cfg.hot_area_unit = v;
    }

    if let Some(v) = get_flag(rc, "cropguide.show_guide")? {
        cfg.show_guide = v;
    }

    if let Some(v) = get_flag(rc, "cropguide.disable_deformation")? {
        cfg.disable_deformation = v;
    }

    // colours
    let colours = &mut cfg.colours;
    for (key, slot) in [
        ("cropguide.border_colour", &mut colours.border),
        ("cropguide.hint_colour", &mut colours.border_hint),
        ("cropguide.corner_handle_colour", &mut colours.corner_handle),
        ("cropguide.edge_handle_colour", &mut colours.edge_handle),
        ("cropguide.grid_main_colour", &mut colours.grid_main),
        ("cropguide.grid_secondary_colour", &mut colours.grid_secondary),
        ("cropguide.guide_colour", &mut colours.guide),
    ] {
        if let Some(v) = get_str(rc, key)? {
            *slot = parse_hex_colour(&v).map_err(at(key))?;
        }
    }

    Ok(cfg)
}

fn unknown(expected: &'static str, got: &str) -> ConfigError {
    ConfigError::UnknownVariant {
        expected,
        got: got.to_string(),
    }
}

pub fn parse_style(s: &str) -> Result<Style, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "normal" => Ok(Style::Normal),
        "transparent" => Ok(Style::Transparent),
        other => Err(unknown("normal|transparent", other)),
    }
}

pub fn parse_grid_mode(s: &str) -> Result<GridMode, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "crop" => Ok(GridMode::Crop),
        "rotate" => Ok(GridMode::Rotate),
        "thirds" => Ok(GridMode::Thirds),
        "circle" => Ok(GridMode::Circle),
        other => Err(unknown("crop|rotate|thirds|circle", other)),
    }
}

pub fn parse_guide_variant(s: &str) -> Result<GuideVariant, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "portrait" => Ok(GuideVariant::Portrait),
        "centered" | "centred" => Ok(GuideVariant::Centered),
        other => Err(unknown("portrait|centered", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(&dir.path().join("nope.rune")).unwrap();
        assert_eq!(cfg, OverlayConfig::default());
    }

    #[test]
    fn enum_values_are_case_insensitive() {
        assert_eq!(parse_style(" Transparent "), Ok(Style::Transparent));
        assert_eq!(parse_grid_mode("ROTATE"), Ok(GridMode::Rotate));
        assert_eq!(parse_guide_variant("centred"), Ok(GuideVariant::Centered));
    }

    #[test]
    fn unknown_values_name_the_choices() {
        let err = parse_grid_mode("hex").unwrap_err();
        assert_eq!(err.to_string(), "expected one of crop|rotate|thirds|circle, got \"hex\"");
    }

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("cropguide.rune");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn rune_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r##"cropguide:
  style "transparent"
  grid_mode "thirds"
  hot_area_unit 48
  show_guide false
  border_colour "#FF0000"
  guide_colour "#80FFFFFF"
end
"##,
        );

        let cfg = load(&path).unwrap();
        let defaults = OverlayConfig::default();

        assert_eq!(cfg.style, Style::Transparent);
        assert_eq!(cfg.grid_mode, GridMode::Thirds);
        assert_eq!(cfg.hot_area_unit, 48.0);
        assert!(!cfg.show_guide);
        assert_eq!(cfg.colours.border, 0xFFFF_0000);
        assert_eq!(cfg.colours.guide, 0x80FF_FFFF);

        // untouched keys keep their defaults
        assert_eq!(cfg.guide_variant, defaults.guide_variant);
        assert_eq!(cfg.disable_deformation, defaults.disable_deformation);
        assert_eq!(cfg.colours.grid_secondary, defaults.colours.grid_secondary);
    }

    #[test]
    fn rune_file_with_zero_hot_unit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "cropguide:\n  hot_area_unit 0\nend\n");

        let err = load(&path).unwrap_err();
        assert!(err.contains("hot_area_unit"), "{err}");
    }

    #[test]
    fn rune_file_with_bad_colour_names_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "cropguide:\n  border_colour \"red\"\nend\n");

        let err = load(&path).unwrap_err();
        assert!(err.contains("cropguide.border_colour"), "{err}");
    }
}
