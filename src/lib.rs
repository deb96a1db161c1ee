pub mod error;
pub mod image;
pub mod filter;
pub mod pyramid;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use self::error::{Error, ErrorKind, Result};
pub use self::image::Image;
pub use self::pyramid::{
    build_sift_scale_space,
    octave::{DefaultOctaveFactory, Octave, OctaveFactory},
    scale_space::ScaleSpace,
    scale_space_factory::ScaleSpaceFactory,
    runtime_params::ScaleSpaceRuntimeParams
};
