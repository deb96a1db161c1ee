use crate::image::{Image, scaling::{BilinearUpScaler, HalvingDownScaler}};
use crate::filter::GaussianFilter;
use crate::{Error, Result};
use self::{
    octave::DefaultOctaveFactory,
    scale_space::ScaleSpace,
    scale_space_factory::ScaleSpaceFactory,
    runtime_params::ScaleSpaceRuntimeParams
};

pub mod octave;
pub mod scale_space;
pub mod scale_space_factory;
pub mod runtime_params;

/// Builds a scale space with bilinear up-scaling, decimating down-scaling and Gaussian blurring.
///
/// Fails if `blur_half_factor` is not finite and positive or `min_image_dimension` is 0.
pub fn build_sift_scale_space(base_image: &Image, runtime_params: &ScaleSpaceRuntimeParams) -> Result<ScaleSpace> {
    if runtime_params.min_image_dimension < 1 {
        return Err(Error::MinImageDimension(runtime_params.min_image_dimension));
    }
    let up_scaler = BilinearUpScaler;
    let down_scaler = HalvingDownScaler::new(runtime_params.min_image_dimension);
    let filter = GaussianFilter::new(runtime_params.blur_half_factor)?;
    let octave_factory = DefaultOctaveFactory;

    ScaleSpaceFactory::new().create(
        base_image,
        runtime_params.scales_per_octave,
        runtime_params.initial_blur,
        runtime_params.target_blur,
        &up_scaler,
        &down_scaler,
        &filter,
        &octave_factory
    )
}
