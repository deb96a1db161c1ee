use crate::image::Image;
use crate::{Float, Error, Result};
use self::{kernel::Kernel, gauss_kernel::GaussKernel1D};

pub mod gauss_kernel;
pub mod kernel;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum FilterDirection {
    HORIZONTAL,
    VERTICAL
}

/// Gaussian smoothing expressed in pixel-space sigma.
pub trait LowPassFilter {
    /// Blurs `image` with a Gaussian of standard deviation `sigma`.
    fn filter(&self, image: &Image, sigma: Float) -> Result<Image>;
    /// Sigma to pass to [`LowPassFilter::filter`] so that an image blurred with `from`
    /// ends up blurred with `to`.
    fn sigma_difference(&self, from: Float, to: Float) -> Result<Float>;
}

#[derive(Debug,Copy,Clone)]
pub struct GaussianFilter {
    blur_half_factor: Float
}

impl GaussianFilter {
    /// `blur_half_factor` is the kernel radius in multiples of sigma and has to be finite and positive.
    pub fn new(blur_half_factor: Float) -> Result<GaussianFilter> {
        if !(blur_half_factor > 0.0 && blur_half_factor.is_finite()) {
            return Err(Error::BlurHalfFactor(blur_half_factor));
        }
        Ok(GaussianFilter{ blur_half_factor })
    }

    pub fn blur_half_factor(&self) -> Float {
        self.blur_half_factor
    }
}

impl Default for GaussianFilter {
    fn default() -> GaussianFilter {
        GaussianFilter{ blur_half_factor: 3.0 }
    }
}

impl LowPassFilter for GaussianFilter {
    fn filter(&self, image: &Image, sigma: Float) -> Result<Image> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(Error::InvalidSigma(sigma));
        }
        let radius = GaussKernel1D::radius_for(self.blur_half_factor, sigma, image.width().max(image.height()));
        let kernel = GaussKernel1D::new(0.0, sigma, radius);
        Ok(gaussian_2_d_convolution(image, &kernel))
    }

    // Gaussian blurs compose in quadrature: from^2 + result^2 = to^2
    fn sigma_difference(&self, from: Float, to: Float) -> Result<Float> {
        if !(from >= 0.0 && to > from && to.is_finite()) {
            return Err(Error::SigmaDifference { from, to });
        }
        let ratio = from/to;
        Ok(to*(1.0 - ratio*ratio).sqrt())
    }
}

pub fn filter_1d_convolution(source: &Image, filter_direction: FilterDirection, filter_kernel: &dyn Kernel) -> Image {
    let kernel = filter_kernel.kernel();
    let kernel_radius_signed = filter_kernel.radius() as isize;
    let normalizing_constant = filter_kernel.normalizing_constant();

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();
    let mut target = Image::from_element(width, height, 0.0);
    target.original_encoding = source.original_encoding;

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for kernel_idx in -kernel_radius_signed..kernel_radius_signed+1 {
                let sample_value = match filter_direction {
                    FilterDirection::HORIZONTAL => {
                        let sample_idx = ((x as isize)+kernel_idx).clamp(0, width as isize - 1);
                        buffer[(y, sample_idx as usize)]
                    },
                    FilterDirection::VERTICAL => {
                        let sample_idx = ((y as isize)+kernel_idx).clamp(0, height as isize - 1);
                        buffer[(sample_idx as usize, x)]
                    }
                };

                let kernel_value = kernel[(kernel_idx + kernel_radius_signed) as usize];
                acc += sample_value*kernel_value;
            }

            target.buffer[(y,x)] = acc/normalizing_constant;
        }
    }

    target
}

pub fn gaussian_2_d_convolution(image: &Image, filter_kernel: &GaussKernel1D) -> Image {
    let blur_hor = filter_1d_convolution(image, FilterDirection::HORIZONTAL, filter_kernel);
    filter_1d_convolution(&blur_hor, FilterDirection::VERTICAL, filter_kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_image_is_unchanged() {
        let image = Image::from_element(5, 4, 7.0);
        let blurred = GaussianFilter::default().filter(&image, 1.3).unwrap();

        assert_eq!(blurred.dimensions(), (5,4));
        for value in blurred.buffer.iter() {
            assert!((value - 7.0).abs() < 1e-9);
        }
    }

    #[test]
    fn impulse_spreads_and_keeps_mass() {
        let mut image = Image::from_element(21, 21, 0.0);
        image.buffer[(10,10)] = 1.0;
        let blurred = GaussianFilter::new(4.0).unwrap().filter(&image, 1.5).unwrap();

        let total: Float = blurred.buffer.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(blurred.buffer[(10,10)] < 1.0);
        assert!(blurred.buffer[(10,11)] > 0.0);
        assert!((blurred.buffer[(10,11)] - blurred.buffer[(11,10)]).abs() < 1e-12);
    }

    #[test]
    fn huge_sigma_is_bounded_by_image_extent() {
        let mut image = Image::from_element(4, 4, 0.0);
        image.buffer[(1,2)] = 16.0;

        for &sigma in &[1e8, 1e20, 1e300] {
            let blurred = GaussianFilter::default().filter(&image, sigma).unwrap();
            assert_eq!(blurred.dimensions(), (4,4));
            assert!(blurred.buffer.iter().all(|value| value.is_finite() && *value >= 0.0));
        }
    }

    #[test]
    fn huge_blur_half_factor_is_bounded_by_image_extent() {
        let image = Image::from_element(4, 4, 1.0);
        let filter = GaussianFilter::new(1e30).unwrap();
        assert_eq!(filter.blur_half_factor(), 1e30);

        let blurred = filter.filter(&image, 1.0).unwrap();
        for value in blurred.buffer.iter() {
            assert!((value - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn blur_half_factor_must_be_positive_and_finite() {
        for &factor in &[0.0, -1.0, Float::NAN, Float::INFINITY] {
            assert!(matches!(GaussianFilter::new(factor), Err(Error::BlurHalfFactor(_))));
        }
        assert_eq!(GaussianFilter::default().blur_half_factor(), 3.0);
    }

    #[test]
    fn filter_rejects_non_positive_sigma() {
        let image = Image::from_element(3, 3, 1.0);
        assert!(matches!(GaussianFilter::default().filter(&image, 0.0), Err(Error::InvalidSigma(_))));
        assert!(matches!(GaussianFilter::default().filter(&image, Float::NAN), Err(Error::InvalidSigma(_))));
    }

    #[test]
    fn sigma_difference_composes_in_quadrature() {
        let filter = GaussianFilter::default();
        let from = 1.0;
        let to = 1.6;
        let extra = filter.sigma_difference(from, to).unwrap();

        assert!(((from*from + extra*extra).sqrt() - to).abs() < 1e-12);
        assert!(matches!(filter.sigma_difference(1.6, 1.6), Err(Error::SigmaDifference { .. })));
        assert!(matches!(filter.sigma_difference(2.0, 1.0), Err(Error::SigmaDifference { .. })));

        let extra = filter.sigma_difference(1.0, 1e200).unwrap();
        assert!(extra.is_finite());
        assert!((extra/1e200 - 1.0).abs() < 1e-12);
    }
}
