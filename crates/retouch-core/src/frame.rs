//! Tagged 8-bit pixel buffers carried through the correction stages.
//!
//! A [`Frame`] is either a single-channel luminance buffer or a three-channel
//! RGB buffer. Stages decide whether they apply by matching on the variant
//! rather than inspecting channel counts at runtime.

use image::{DynamicImage, GrayImage, RgbImage};

use crate::color::rgb_to_luma;
use crate::error::{EnhanceError, Result};

/// An image in one of the two layouts the pipeline understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Single luminance sample per pixel
    Mono(GrayImage),
    /// Interleaved red/green/blue samples
    Color(RgbImage),
}

impl Frame {
    /// Build a frame from raw interleaved samples.
    ///
    /// `channels` must be 1 or 3 and `data` must hold exactly
    /// `width * height * channels` samples.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        let actual = data.len();
        if actual != expected {
            return Err(EnhanceError::BufferMismatch { expected, actual });
        }

        let frame = match channels {
            1 => GrayImage::from_raw(width, height, data).map(Frame::Mono),
            3 => RgbImage::from_raw(width, height, data).map(Frame::Color),
            other => return Err(EnhanceError::UnsupportedChannels(other)),
        }
        .ok_or(EnhanceError::BufferMismatch { expected, actual })?;

        frame.ensure_non_empty()?;
        Ok(frame)
    }

    /// Normalize a decoded image into one of the supported layouts.
    ///
    /// 8-bit luminance stays monochrome; every other layout (alpha variants,
    /// 16-bit and float buffers included) is converted to 8-bit RGB.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(gray) => Frame::Mono(gray),
            DynamicImage::ImageRgb8(rgb) => Frame::Color(rgb),
            other => Frame::Color(other.to_rgb8()),
        }
    }

    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            Frame::Mono(gray) => DynamicImage::ImageLuma8(gray),
            Frame::Color(rgb) => DynamicImage::ImageRgb8(rgb),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Frame::Mono(img) => img.width(),
            Frame::Color(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Frame::Mono(img) => img.height(),
            Frame::Color(img) => img.height(),
        }
    }

    pub fn channels(&self) -> u8 {
        match self {
            Frame::Mono(_) => 1,
            Frame::Color(_) => 3,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Frame::Color(_))
    }

    /// Interleaved samples in row-major order.
    pub fn samples(&self) -> &[u8] {
        match self {
            Frame::Mono(img) => img.as_raw().as_slice(),
            Frame::Color(img) => img.as_raw().as_slice(),
        }
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        match self {
            Frame::Mono(img) => &mut **img,
            Frame::Color(img) => &mut **img,
        }
    }

    /// Reject frames with zero pixels; statistics are undefined for them.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.pixel_count() == 0 {
            return Err(EnhanceError::EmptyImage {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Luminance view of the frame (Rec.601 weights for color frames).
    pub fn to_luma(&self) -> GrayImage {
        match self {
            Frame::Mono(gray) => gray.clone(),
            Frame::Color(rgb) => rgb_to_luma(rgb),
        }
    }
}

/// Round a floating-point sample back into the 8-bit range.
#[inline]
pub(crate) fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
