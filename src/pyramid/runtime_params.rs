use std::{fs, path::Path};

use serde::{Serialize, Deserialize};

use crate::{Float, Result};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ScaleSpaceRuntimeParams {
    pub scales_per_octave: usize,
    /// Blur assumed to be present in the input image.
    pub initial_blur: Float,
    /// Blur of the first scale image of every octave.
    pub target_blur: Float,
    /// Gaussian kernel radius in multiples of sigma.
    pub blur_half_factor: Float,
    pub min_image_dimension: usize
}

impl Default for ScaleSpaceRuntimeParams {
    fn default() -> ScaleSpaceRuntimeParams {
        ScaleSpaceRuntimeParams {
            scales_per_octave: 3,
            initial_blur: 0.5,
            target_blur: 1.6,
            blur_half_factor: 3.0,
            min_image_dimension: 1
        }
    }
}

impl ScaleSpaceRuntimeParams {
    pub fn from_yaml_str(yaml: &str) -> Result<ScaleSpaceRuntimeParams> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<ScaleSpaceRuntimeParams> {
        let contents = fs::read_to_string(path)?;
        ScaleSpaceRuntimeParams::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
