#![allow(dead_code)]

use std::cell::Cell;

use sift_scale_space::filter::LowPassFilter;
use sift_scale_space::image::scaling::{DownScaler, UpScaler};
use sift_scale_space::{Error, Float, Image, Result};

/// Unknown images start with this blur.
pub const DEFAULT_SIGMA: Float = 0.5;

/// Test images are constant; the constant is their nominal blur.
pub fn sigma_image(width: usize, height: usize, sigma: Float) -> Image {
    Image::from_element(width, height, sigma)
}

pub fn sigma_of(image: &Image) -> Float {
    image.buffer[(0,0)]
}

/// Grows both dimensions by one and doubles the blur.
#[derive(Default)]
pub struct StubUpScaler {
    pub calls: Cell<usize>
}

impl UpScaler for StubUpScaler {
    fn up_scale(&self, image: &Image) -> Result<Image> {
        self.calls.set(self.calls.get() + 1);
        Ok(sigma_image(image.width() + 1, image.height() + 1, sigma_of(image)*2.0))
    }
}

/// Shrinks both dimensions by one and halves the blur.
#[derive(Default)]
pub struct StubDownScaler {
    pub calls: Cell<usize>
}

impl DownScaler for StubDownScaler {
    fn down_scale(&self, image: &Image) -> Result<Image> {
        self.calls.set(self.calls.get() + 1);
        Ok(sigma_image(image.width().saturating_sub(1), image.height().saturating_sub(1), sigma_of(image)/2.0))
    }
}

/// Adds blur linearly, keeping the image size.
#[derive(Default)]
pub struct StubFilter {
    pub filter_calls: Cell<usize>,
    pub difference_calls: Cell<usize>
}

impl LowPassFilter for StubFilter {
    fn filter(&self, image: &Image, sigma: Float) -> Result<Image> {
        self.filter_calls.set(self.filter_calls.get() + 1);
        Ok(sigma_image(image.width(), image.height(), sigma_of(image) + sigma))
    }

    fn sigma_difference(&self, from: Float, to: Float) -> Result<Float> {
        self.difference_calls.set(self.difference_calls.get() + 1);
        Ok(to - from)
    }
}

/// Fails on the n-th call to `filter`.
pub struct FailingFilter {
    pub fail_on: usize,
    pub calls: Cell<usize>
}

impl FailingFilter {
    pub fn new(fail_on: usize) -> FailingFilter {
        FailingFilter{ fail_on, calls: Cell::new(0) }
    }
}

impl LowPassFilter for FailingFilter {
    fn filter(&self, image: &Image, sigma: Float) -> Result<Image> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call == self.fail_on {
            return Err(Error::InvalidSigma(-sigma));
        }
        Ok(sigma_image(image.width(), image.height(), sigma_of(image) + sigma))
    }

    fn sigma_difference(&self, from: Float, to: Float) -> Result<Float> {
        Ok(to - from)
    }
}

/// Changes the image size on every call.
pub struct ShrinkingFilter;

impl LowPassFilter for ShrinkingFilter {
    fn filter(&self, image: &Image, sigma: Float) -> Result<Image> {
        Ok(sigma_image(image.width(), image.height().saturating_sub(1).max(1), sigma_of(image) + sigma))
    }

    fn sigma_difference(&self, from: Float, to: Float) -> Result<Float> {
        Ok(to - from)
    }
}

pub fn assert_close(actual: Float, expected: Float) {
    assert!((actual - expected).abs() < 1e-6, "expected {}, got {}", expected, actual);
}
