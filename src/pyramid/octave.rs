use crate::image::Image;
use crate::{Float, Error, Result};

/// Scale interval of the scale space over which the blur doubles.
///
/// All scale images and DoG images of an octave share one width and height.
/// Scale image `i` has a nominal blur of `base_scale*2^(i/s)` and DoG image `i`,
/// the difference of scale images `i+1` and `i`, one of `base_scale*2^((i+0.5)/s)`
/// where `s` is [`Octave::scales_per_octave`].
#[derive(Debug,Clone,PartialEq)]
pub struct Octave {
    base_scale: Float,
    scale_images: Vec<Image>,
    difference_of_gaussians: Vec<Image>
}

impl Octave {

    /// Validates and freezes one octave.
    ///
    /// Fails if `base_scale` is not strictly positive, if there are fewer than four
    /// scale images, if there is not exactly one DoG image less than scale images or
    /// if any image differs in size from the first scale image.
    pub fn new(base_scale: Float, scale_images: Vec<Image>, difference_of_gaussians: Vec<Image>) -> Result<Octave> {
        if !(base_scale > 0.0) {
            return Err(Error::BaseScale(base_scale));
        }
        if scale_images.len() < 4 {
            return Err(Error::TooFewScaleImages(scale_images.len()));
        }
        if difference_of_gaussians.len() != scale_images.len() - 1 {
            return Err(Error::DifferenceOfGaussiansCount {
                scale_images: scale_images.len(),
                dogs: difference_of_gaussians.len()
            });
        }

        let expected = scale_images[0].dimensions();
        if let Some((index, image)) = scale_images.iter().enumerate().find(|(_, image)| image.dimensions() != expected) {
            return Err(Error::ScaleImageSize { index, expected, actual: image.dimensions() });
        }
        if let Some((index, image)) = difference_of_gaussians.iter().enumerate().find(|(_, image)| image.dimensions() != expected) {
            return Err(Error::DifferenceOfGaussiansSize { index, expected, actual: image.dimensions() });
        }

        Ok(Octave {base_scale, scale_images, difference_of_gaussians})
    }

    /// Nominal blur of the first scale image.
    pub fn base_scale(&self) -> Float {
        self.base_scale
    }

    pub fn scales_per_octave(&self) -> usize {
        self.scale_images.len() - 3
    }

    pub fn scale_images(&self) -> &[Image] {
        &self.scale_images
    }

    pub fn difference_of_gaussians(&self) -> &[Image] {
        &self.difference_of_gaussians
    }

    pub fn width(&self) -> usize {
        self.scale_images[0].width()
    }

    pub fn height(&self) -> usize {
        self.scale_images[0].height()
    }

    pub fn scale_image_sigma(&self, index: usize) -> Float {
        self.base_scale*Octave::generate_k(index as Float, self.scales_per_octave() as Float)
    }

    pub fn difference_of_gaussian_sigma(&self, index: usize) -> Float {
        self.base_scale*Octave::generate_k(index as Float + 0.5, self.scales_per_octave() as Float)
    }

    pub(crate) fn generate_k(n: Float, s: Float) -> Float {
        (n/s).exp2()
    }
}

/// Builds octaves from their raw parts.
pub trait OctaveFactory {
    fn create_octave(&self, base_scale: Float, scale_images: Vec<Image>, difference_of_gaussians: Vec<Image>) -> Result<Octave>;
}

#[derive(Debug,Copy,Clone,Default)]
pub struct DefaultOctaveFactory;

impl OctaveFactory for DefaultOctaveFactory {
    fn create_octave(&self, base_scale: Float, scale_images: Vec<Image>, difference_of_gaussians: Vec<Image>) -> Result<Octave> {
        Octave::new(base_scale, scale_images, difference_of_gaussians)
    }
}
