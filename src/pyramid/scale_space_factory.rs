use log::{debug, trace};

use crate::image::{Image, scaling::{UpScaler, DownScaler}};
use crate::filter::LowPassFilter;
use crate::pyramid::{octave::{Octave, OctaveFactory}, scale_space::ScaleSpace};
use crate::{Float, Error, Result};

/// Builds a [`ScaleSpace`] from a single image. Holds no state between calls.
#[derive(Debug,Copy,Clone,Default)]
pub struct ScaleSpaceFactory;

impl ScaleSpaceFactory {

    pub fn new() -> ScaleSpaceFactory {
        ScaleSpaceFactory
    }

    /// Builds the Gaussian pyramid and its DoG images.
    ///
    /// `initial_blur` is the blur already present in `image`. The image is up-scaled
    /// once, which doubles that blur, so `target_blur`, the blur of the first scale
    /// image of every octave, has to be greater than `2*initial_blur`.
    ///
    /// Octaves are added until the down-scaler returns an image with zero width or height.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &self,
        image: &Image,
        scales_per_octave: usize,
        initial_blur: Float,
        target_blur: Float,
        up_scaler: &dyn UpScaler,
        down_scaler: &dyn DownScaler,
        filter: &dyn LowPassFilter,
        octave_factory: &dyn OctaveFactory
    ) -> Result<ScaleSpace> {
        if image.is_empty() {
            return Err(Error::EmptyImage { width: image.width(), height: image.height() });
        }
        if scales_per_octave < 1 {
            return Err(Error::ScalesPerOctave(scales_per_octave));
        }
        if !(initial_blur > 0.0 && initial_blur.is_finite()) {
            return Err(Error::InitialBlur(initial_blur));
        }
        if !(target_blur > 2.0*initial_blur && target_blur.is_finite()) {
            return Err(Error::TargetBlur { target: target_blur, initial: initial_blur });
        }

        let upsampled = up_scaler.up_scale(image)?;
        let extra_blur = filter.sigma_difference(2.0*initial_blur, target_blur)?;
        let mut octave_image = filter.filter(&upsampled, extra_blur)?;

        let mut octaves: Vec<Octave> = Vec::new();
        loop {
            let octave = Self::build_octave(octave_image, scales_per_octave, target_blur, filter, octave_factory)?;
            debug!("octave {} built: {}x{}, base scale {}", octaves.len(), octave.width(), octave.height(), octave.base_scale());

            // Scale image s carries twice the base blur; halving it lands back on the base blur.
            let seed_image = octave.scale_images().get(scales_per_octave).ok_or_else(|| Error::TooFewScaleImages(octave.scale_images().len()))?;
            let next_image = down_scaler.down_scale(seed_image)?;
            octaves.push(octave);

            if next_image.width() == 0 || next_image.height() == 0 {
                debug!("scale space complete with {} octaves, next octave would be {}x{}", octaves.len(), next_image.width(), next_image.height());
                break;
            }
            octave_image = next_image;
        }

        Ok(ScaleSpace::new(octaves))
    }

    fn build_octave(
        base_image: Image,
        scales_per_octave: usize,
        base_scale: Float,
        filter: &dyn LowPassFilter,
        octave_factory: &dyn OctaveFactory
    ) -> Result<Octave> {
        let image_count = scales_per_octave + 3;
        let s = scales_per_octave as Float;

        let mut scale_images: Vec<Image> = Vec::with_capacity(image_count);
        scale_images.push(base_image);
        let mut sigma = base_scale;
        for i in 1..image_count {
            let next_sigma = base_scale*Octave::generate_k(i as Float, s);
            let extra_blur = filter.sigma_difference(sigma, next_sigma)?;
            let next_image = filter.filter(&scale_images[i-1], extra_blur)?;
            trace!("scale image {}: sigma {} (+{})", i, next_sigma, extra_blur);
            scale_images.push(next_image);
            sigma = next_sigma;
        }

        let mut difference_of_gaussians: Vec<Image> = Vec::with_capacity(image_count-1);
        for i in 0..scale_images.len()-1 {
            difference_of_gaussians.push(scale_images[i+1].difference(&scale_images[i])?);
        }

        octave_factory.create_octave(base_scale, scale_images, difference_of_gaussians)
    }
}
