use crate::Float;
use super::kernel::Kernel;

#[derive(Debug,Clone)]
pub struct GaussKernel1D {
    kernel: Vec<Float>,
    normalizing_constant: Float
}

impl GaussKernel1D {
    // Unscaled density, the kernel is normalized by the sum of its samples
    fn sample(mean: Float, std: Float, x:Float) -> Float {
        (-0.5*((x-mean)/std).powi(2)).exp()
    }

    pub fn new(mean: Float, std: Float, radius: usize) -> GaussKernel1D {
        let radius_signed = radius.min(isize::MAX as usize / 2) as isize;
        let kernel: Vec<Float> = (-radius_signed..radius_signed+1).map(|x| GaussKernel1D::sample(mean,std,x as Float)).collect();
        let normalizing_constant = kernel.iter().sum();
        GaussKernel1D {
            kernel,
            normalizing_constant
        }
    }

    /// Radius covering `blur_half_factor` standard deviations, between one and `max_radius` pixels.
    ///
    /// Border samples are clamped, so taps beyond the image extent add nothing.
    pub fn radius_for(blur_half_factor: Float, sigma: Float, max_radius: usize) -> usize {
        let max_radius = max_radius.max(1);
        let radius = (blur_half_factor*sigma).ceil();
        if radius.is_nan() || radius <= 1.0 {
            1
        } else if radius >= max_radius as Float {
            max_radius
        } else {
            radius as usize
        }
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &Vec<Float> {
        &self.kernel
    }

    fn normalizing_constant(&self) -> Float{
        self.normalizing_constant
    }
}
