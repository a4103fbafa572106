// Author: Dustin Pilgrim
// License: MIT

#[cfg(feature = "clap")]
use clap::ValueEnum;

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Normal,
    /// Handles stay hit-testable but nothing but the hot zones is painted.
    Transparent,
}

/// Grid line emphasis; maps to the main or secondary grid colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Main,
    Secondary,
}

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GridMode {
    #[default]
    Crop,
    Rotate,
    Thirds,
    Circle,
}

impl GridMode {
    /// Major lines per axis.
    pub fn line_count(self) -> usize {
        match self {
            GridMode::Crop => 2,
            GridMode::Rotate => 8,
            GridMode::Thirds => 2,
            // Quarters, so the middle line doubles as a centre mark.
            GridMode::Circle => 3,
        }
    }

    /// Emphasis of line `index` (1-indexed).
    pub fn emphasis(self, index: usize) -> Emphasis {
        match self {
            GridMode::Rotate if index % 3 != 0 => Emphasis::Secondary,
            _ => Emphasis::Main,
        }
    }
}

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuideVariant {
    /// Head oval sized by aspect-ratio bucket, with eyes and a chin arc.
    #[default]
    Portrait,
    /// Fixed-fraction face centred in the box, with nose and mouth.
    Centered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_emphasises_every_third_line() {
        let m = GridMode::Rotate;
        let main: Vec<usize> = (1..=m.line_count())
            .filter(|&i| m.emphasis(i) == Emphasis::Main)
            .collect();
        assert_eq!(main, vec![3, 6]);
    }

    #[test]
    fn other_modes_are_uniform() {
        for m in [GridMode::Crop, GridMode::Thirds, GridMode::Circle] {
            assert!((1..=m.line_count()).all(|i| m.emphasis(i) == Emphasis::Main));
        }
    }
}
