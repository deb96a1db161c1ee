use thiserror::Error;

use crate::Float;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input is absent.
    MissingArgument,
    /// A numeric parameter or a structural property is outside its domain.
    OutOfRange,
    /// Raised by an image, scaler or filter implementation.
    Collaborator,
    /// Loading runtime parameters failed.
    Config
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("image must not be empty, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("scales per octave must be at least 1, got {0}")]
    ScalesPerOctave(usize),
    #[error("initial blur must be greater than 0, got {0}")]
    InitialBlur(Float),
    #[error("target blur {target} must be greater than twice the initial blur {initial}")]
    TargetBlur { target: Float, initial: Float },

    #[error("blur half factor must be finite and greater than 0, got {0}")]
    BlurHalfFactor(Float),
    #[error("minimum image dimension must be at least 1, got {0}")]
    MinImageDimension(usize),

    #[error("base scale must be greater than 0, got {0}")]
    BaseScale(Float),
    #[error("need at least four scale images, got {0}")]
    TooFewScaleImages(usize),
    #[error("need exactly one DoG image less than scale images, got {dogs} DoGs for {scale_images} scale images")]
    DifferenceOfGaussiansCount { scale_images: usize, dogs: usize },
    #[error("scale image {index} is {actual:?} but the first scale image is {expected:?}")]
    ScaleImageSize { index: usize, expected: (usize, usize), actual: (usize, usize) },
    #[error("DoG image {index} is {actual:?} but the first scale image is {expected:?}")]
    DifferenceOfGaussiansSize { index: usize, expected: (usize, usize), actual: (usize, usize) },

    #[error("filter sigma must be finite and greater than 0, got {0}")]
    InvalidSigma(Float),
    #[error("cannot reach blur {to} from blur {from}")]
    SigmaDifference { from: Float, to: Float },
    #[error("image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },

    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error)
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyImage { .. } => ErrorKind::MissingArgument,
            Error::ScalesPerOctave(_)
            | Error::InitialBlur(_)
            | Error::TargetBlur { .. }
            | Error::BlurHalfFactor(_)
            | Error::MinImageDimension(_)
            | Error::BaseScale(_)
            | Error::TooFewScaleImages(_)
            | Error::DifferenceOfGaussiansCount { .. }
            | Error::ScaleImageSize { .. }
            | Error::DifferenceOfGaussiansSize { .. } => ErrorKind::OutOfRange,
            Error::InvalidSigma(_)
            | Error::SigmaDifference { .. }
            | Error::DimensionMismatch { .. } => ErrorKind::Collaborator,
            Error::Io(_) | Error::Yaml(_) => ErrorKind::Config
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingArgument | ErrorKind::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_separate_absent_from_range() {
        assert_eq!(Error::EmptyImage { width: 0, height: 3 }.kind(), ErrorKind::MissingArgument);
        assert_eq!(Error::TargetBlur { target: 1.0, initial: 1.0 }.kind(), ErrorKind::OutOfRange);
        assert_eq!(Error::TooFewScaleImages(3).kind(), ErrorKind::OutOfRange);
        assert_eq!(Error::SigmaDifference { from: 2.0, to: 1.0 }.kind(), ErrorKind::Collaborator);
        assert!(!Error::InvalidSigma(0.0).is_invalid_argument());
        assert!(Error::ScalesPerOctave(0).is_invalid_argument());
    }

    #[test]
    fn messages_name_the_offender() {
        let err = Error::ScaleImageSize { index: 2, expected: (4, 4), actual: (4, 3) };
        assert_eq!(err.to_string(), "scale image 2 is (4, 3) but the first scale image is (4, 4)");
    }
}
