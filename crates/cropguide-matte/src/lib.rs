// Author: Dustin Pilgrim
// License: MIT

//! Background flattening for portrait crops.
//!
//! Subject segmentation is owned by whatever platform capability the caller
//! has; this crate only defines that seam ([`ForegroundMasker`]) and
//! composites the image over a solid fill using the returned mask.

pub mod error;

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GrayImage, Rgba, RgbaImage};

pub use error::{MatteError, Result};

/// Opaque white, the usual passport-photo backdrop.
pub const WHITE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Produces a foreground mask (255 = subject, 0 = background).
pub trait ForegroundMasker {
    fn foreground_mask(&self, image: &RgbaImage) -> Result<GrayImage>;
}

/// A mask computed ahead of time, scaled to the image on demand.
#[derive(Debug, Clone)]
pub struct PrecomputedMask {
    mask: GrayImage,
}

impl PrecomputedMask {
    pub fn new(mask: GrayImage) -> Self {
        Self { mask }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let mask = image::open(path)?.to_luma8();
        Ok(Self { mask })
    }
}

impl ForegroundMasker for PrecomputedMask {
    fn foreground_mask(&self, image: &RgbaImage) -> Result<GrayImage> {
        let (w, h) = image.dimensions();
        let (mw, mh) = self.mask.dimensions();

        if mw == 0 || mh == 0 {
            return Err(MatteError::MaskExtraction("mask is empty".into()));
        }

        if (mw, mh) == (w, h) {
            return Ok(self.mask.clone());
        }

        Ok(imageops::resize(&self.mask, w, h, FilterType::Triangle))
    }
}

/// Stand-in for platforms without a segmentation capability.
#[derive(Debug, Clone)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl ForegroundMasker for Unavailable {
    fn foreground_mask(&self, _image: &RgbaImage) -> Result<GrayImage> {
        Err(MatteError::Unavailable(self.reason.clone()))
    }
}

/// Replace everything outside the subject with `fill`.
pub fn remove_background(image: &RgbaImage, masker: &dyn ForegroundMasker, fill: Rgba<u8>) -> Result<RgbaImage> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(MatteError::InvalidImage);
    }

    let mask = masker.foreground_mask(image)?;

    if mask.dimensions() != (w, h) {
        return Err(MatteError::MaskExtraction(format!(
            "mask is {}x{}, image is {w}x{h}",
            mask.width(),
            mask.height()
        )));
    }

    if mask.pixels().all(|p| p.0[0] == 0) {
        return Err(MatteError::MaskExtraction("no foreground found".into()));
    }

    let mut out = RgbaImage::new(w, h);
    for ((dst, src), m) in out.pixels_mut().zip(image.pixels()).zip(mask.pixels()) {
        *dst = blend(*src, fill, m.0[0]);
    }

    Ok(out)
}

fn blend(src: Rgba<u8>, fill: Rgba<u8>, mask: u8) -> Rgba<u8> {
    let m = mask as u32;
    let inv = 255 - m;
    let mut px = [0u8; 4];
    for (i, c) in px.iter_mut().enumerate() {
        *c = ((src.0[i] as u32 * m + fill.0[i] as u32 * inv + 127) / 255) as u8;
    }
    Rgba(px)
}

#[cfg(test)]
mod tests {
    use image::Luma;

    use super::*;

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, _| {
            if x % 2 == 0 { Rgba([200, 10, 10, 255]) } else { Rgba([10, 200, 10, 255]) }
        })
    }

    /// Left half foreground, right half background.
    fn half_mask(w: u32, h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, _| if x < w / 2 { Luma([255]) } else { Luma([0]) })
    }

    #[test]
    fn keeps_subject_and_fills_background() {
        let img = checker(8, 4);
        let out = remove_background(&img, &PrecomputedMask::new(half_mask(8, 4)), WHITE_FILL).unwrap();
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(0, 0));
        assert_eq!(out.get_pixel(3, 2), img.get_pixel(3, 2));
        assert_eq!(*out.get_pixel(6, 1), WHITE_FILL);
    }

    #[test]
    fn partial_mask_blends() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let mask = GrayImage::from_pixel(2, 2, Luma([128]));
        let out = remove_background(&img, &PrecomputedMask::new(mask), WHITE_FILL).unwrap();
        // 255 * 127 / 255, rounded
        assert_eq!(*out.get_pixel(1, 1), Rgba([127, 127, 127, 255]));
    }

    #[test]
    fn mask_is_scaled_to_the_image() {
        let img = checker(16, 8);
        let masker = PrecomputedMask::new(GrayImage::from_pixel(4, 2, Luma([255])));
        let out = remove_background(&img, &masker, WHITE_FILL).unwrap();
        assert_eq!(out.dimensions(), (16, 8));
        assert_eq!(out.get_pixel(5, 5), img.get_pixel(5, 5));
    }

    #[test]
    fn unavailable_capability_is_reported() {
        let img = checker(2, 2);
        let err = remove_background(&img, &Unavailable::new("no segmentation backend"), WHITE_FILL).unwrap_err();
        assert!(matches!(err, MatteError::Unavailable(ref r) if r == "no segmentation backend"));
    }

    #[test]
    fn empty_image_is_invalid() {
        let img = RgbaImage::new(0, 0);
        let err = remove_background(&img, &PrecomputedMask::new(half_mask(2, 2)), WHITE_FILL).unwrap_err();
        assert!(matches!(err, MatteError::InvalidImage));
    }

    #[test]
    fn blank_mask_fails_extraction() {
        let img = checker(4, 4);
        let mask = GrayImage::new(4, 4);
        let err = remove_background(&img, &PrecomputedMask::new(mask), WHITE_FILL).unwrap_err();
        assert!(matches!(err, MatteError::MaskExtraction(_)));
    }
}
