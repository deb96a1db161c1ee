extern crate nalgebra as na;

use na::DMatrix;

use crate::image::Image;
use crate::{Float, Result};

/// Doubles the linear resolution of an image.
pub trait UpScaler {
    fn up_scale(&self, image: &Image) -> Result<Image>;
}

/// Halves the linear resolution of an image.
///
/// A result with zero width or height signals that no further octave can be built.
pub trait DownScaler {
    fn down_scale(&self, image: &Image) -> Result<Image>;
}

#[derive(Debug,Copy,Clone,Default)]
pub struct BilinearUpScaler;

impl UpScaler for BilinearUpScaler {
    fn up_scale(&self, image: &Image) -> Result<Image> {
        let width = image.width();
        let height = image.height();

        let new_width = width*2;
        let new_height = height*2;

        let old_buffer = &image.buffer;
        let mut new_buffer = DMatrix::<Float>::zeros(new_height,new_width);

        for x in 0..new_width {
            for y in 0..new_height {
                let x_prime = x as Float / 2.0;
                let y_prime = y as Float / 2.0;
                let x_0 = x_prime.trunc() as usize;
                let y_0 = y_prime.trunc() as usize;
                let x_1 = (x_0 + 1).min(width - 1);
                let y_1 = (y_0 + 1).min(height - 1);
                let dx = x_prime - x_0 as Float;
                let dy = y_prime - y_0 as Float;

                new_buffer[(y,x)] = dx*dy*old_buffer[(y_1, x_1)] +
                                    (1.0 - dx)*dy*old_buffer[(y_1, x_0)] +
                                    dx*(1.0 - dy)*old_buffer[(y_0, x_1)] +
                                    (1.0 - dx)*(1.0 - dy)*old_buffer[(y_0, x_0)];
            }
        }

        Ok(Image{
            buffer: new_buffer,
            original_encoding: image.original_encoding
        })
    }
}

/// Keeps every second pixel in both directions.
#[derive(Debug,Copy,Clone)]
pub struct HalvingDownScaler {
    min_dimension: usize
}

impl HalvingDownScaler {
    /// A `min_dimension` of 0 is treated as 1.
    pub fn new(min_dimension: usize) -> HalvingDownScaler {
        HalvingDownScaler{ min_dimension: min_dimension.max(1) }
    }

    pub fn min_dimension(&self) -> usize {
        self.min_dimension
    }
}

impl Default for HalvingDownScaler {
    fn default() -> HalvingDownScaler {
        HalvingDownScaler::new(1)
    }
}

impl DownScaler for HalvingDownScaler {
    fn down_scale(&self, image: &Image) -> Result<Image> {
        let new_width = image.width()/2;
        let new_height = image.height()/2;

        if new_height < self.min_dimension || new_width < self.min_dimension {
            return Ok(Image{
                buffer: DMatrix::<Float>::zeros(0,0),
                original_encoding: image.original_encoding
            });
        }

        let new_buffer = DMatrix::<Float>::from_fn(new_height, new_width, |y, x| image.buffer[(2*y,2*x)]);

        Ok(Image{
            buffer: new_buffer,
            original_encoding: image.original_encoding
        })
    }
}
