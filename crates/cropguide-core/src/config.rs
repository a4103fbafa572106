// Author: Dustin Pilgrim
// License: MIT

use crate::colour::{self, LIGHT_GREY, WHITE};
use crate::error::ConfigError;
use crate::mode::{GridMode, GuideVariant, Style};

pub const HANDLE_THICKNESS: f64 = 3.0;
pub const CORNER_HANDLE_LENGTH: f64 = 20.0;
pub const EDGE_HANDLE_LENGTH: f64 = 30.0;
pub const BORDER_THICKNESS: f64 = 1.0;
pub const HINT_LINE_THICKNESS: f64 = 2.0;
pub const HOT_AREA_UNIT: f64 = 42.0;

/// Fixed sizes of the visible overlay pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMetrics {
    pub thickness: f64,
    pub corner_length: f64,
    pub edge_length: f64,
    pub border_thickness: f64,
    pub hint_thickness: f64,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self {
            thickness: HANDLE_THICKNESS,
            corner_length: CORNER_HANDLE_LENGTH,
            edge_length: EDGE_HANDLE_LENGTH,
            border_thickness: BORDER_THICKNESS,
            hint_thickness: HINT_LINE_THICKNESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayColours {
    pub border: u32,         // ARGB
    pub border_hint: u32,    // ARGB
    pub corner_handle: u32,  // ARGB
    pub edge_handle: u32,    // ARGB
    pub grid_main: u32,      // ARGB
    pub grid_secondary: u32, // ARGB
    pub guide: u32,          // ARGB
}

impl Default for OverlayColours {
    fn default() -> Self {
        Self {
            border: WHITE,
            border_hint: WHITE,
            corner_handle: WHITE,
            edge_handle: WHITE,
            grid_main: WHITE,
            grid_secondary: LIGHT_GREY,
            guide: colour::with_alpha(WHITE, 0xE6),
        }
    }
}

/// Construction-time configuration of an overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub style: Style,
    pub grid_mode: GridMode,
    pub hot_area_unit: f64,
    pub show_guide: bool,
    pub guide_variant: GuideVariant,
    /// Lay out only the border: no handles, no hot zones.
    pub disable_deformation: bool,
    pub metrics: HandleMetrics,
    pub colours: OverlayColours,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            grid_mode: GridMode::Crop,
            hot_area_unit: HOT_AREA_UNIT,
            show_guide: true,
            guide_variant: GuideVariant::Portrait,
            disable_deformation: false,
            metrics: HandleMetrics::default(),
            colours: OverlayColours::default(),
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.metrics;
        let fields = [
            ("hot_area_unit", self.hot_area_unit),
            ("thickness", m.thickness),
            ("corner_length", m.corner_length),
            ("edge_length", m.edge_length),
            ("border_thickness", m.border_thickness),
            ("hint_thickness", m.hint_thickness),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMetric { field, value });
            }
        }

        // hot zones must stay strictly larger than their handles
        if self.hot_area_unit <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "hot_area_unit",
                value: self.hot_area_unit,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(OverlayConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_metric_is_rejected() {
        let mut cfg = OverlayConfig::default();
        cfg.metrics.corner_length = -1.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidMetric {
                field: "corner_length",
                value: -1.0
            })
        );
    }

    #[test]
    fn non_finite_hot_unit_is_rejected() {
        let cfg = OverlayConfig {
            hot_area_unit: f64::INFINITY,
            ..OverlayConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_hot_unit_is_rejected() {
        let cfg = OverlayConfig {
            hot_area_unit: 0.0,
            ..OverlayConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "hot_area_unit",
                value: 0.0
            })
        );
    }
}
