// Author: Dustin Pilgrim
// License: MIT
//
// ARGB helpers shared by the config layer and the drawing routines.
// Format: 0xAARRGGBB

use crate::error::ConfigError;

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const LIGHT_GREY: u32 = 0xFFAA_AAAA;

#[inline]
pub fn a(argb: u32) -> u8 { ((argb >> 24) & 0xFF) as u8 }
#[inline]
pub fn r(argb: u32) -> u8 { ((argb >> 16) & 0xFF) as u8 }
#[inline]
pub fn g(argb: u32) -> u8 { ((argb >> 8) & 0xFF) as u8 }
#[inline]
pub fn b(argb: u32) -> u8 { (argb & 0xFF) as u8 }

#[inline]
pub fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Keeps RGB, swaps alpha.
#[inline]
pub const fn with_alpha(colour: u32, alpha: u8) -> u32 {
    (colour & 0x00FF_FFFF) | ((alpha as u32) << 24)
}

/// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
pub fn parse_hex_colour(s: &str) -> Result<u32, ConfigError> {
    let s = s.trim();

    let hex = s.strip_prefix('#').ok_or(ConfigError::ColourPrefix)?;

    if hex.len() != 6 && hex.len() != 8 {
        return Err(ConfigError::ColourLength);
    }

    let v = u32::from_str_radix(hex, 16).map_err(|_| ConfigError::ColourDigits)?;

    if hex.len() == 6 { Ok(0xFF00_0000 | v) } else { Ok(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_as_opaque() {
        assert_eq!(parse_hex_colour("#0A84FF"), Ok(0xFF0A_84FF));
        assert_eq!(parse_hex_colour("  #ffffff "), Ok(WHITE));
    }

    #[test]
    fn parses_argb() {
        assert_eq!(parse_hex_colour("#E6FFFFFF"), Ok(0xE6FF_FFFF));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_hex_colour("FFFFFF"), Err(ConfigError::ColourPrefix));
        assert_eq!(parse_hex_colour("#FFF"), Err(ConfigError::ColourLength));
        assert_eq!(parse_hex_colour("#GGGGGG"), Err(ConfigError::ColourDigits));
    }

    #[test]
    fn channel_accessors() {
        let c = argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!((a(c), r(c), g(c), b(c)), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(with_alpha(c, 0xFF), 0xFF34_5678);
    }
}
