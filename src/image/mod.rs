extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, DynamicImage, Pixel, Luma};
use na::DMatrix;

use crate::{Float, Error, Result};
use self::image_encoding::ImageEncoding;

pub mod image_encoding;
pub mod scaling;

/// Gray scale pixel grid. Rows of `buffer` are image rows, columns are image columns.
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn dimensions(&self) -> (usize,usize) {
        (self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn from_element(width: usize, height: usize, value: Float) -> Image {
        let buffer = DMatrix::<Float>::from_element(height,width,value);
        Image{ buffer, original_encoding: ImageEncoding::F64}
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, original_encoding: ImageEncoding, normalize: bool) -> Image {
        let mut buffer = matrix.clone();

        if normalize {
            Image::normalize_by_max(&mut buffer);
        }

        Image{ buffer, original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage, normalize: bool) -> Image {
        let mut buffer = Image::image8_to_matrix(image);

        if normalize {
            Image::normalize_by_max(&mut buffer);
        }

        Image{ buffer, original_encoding: ImageEncoding::U8}
    }

    pub fn to_image(&self) -> GrayImage {
        Image::matrix_to_image(&self.buffer, self.original_encoding)
    }

    /// Pixelwise `self - other`.
    pub fn difference(&self, other: &Image) -> Result<Image> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch { left: self.dimensions(), right: other.dimensions() });
        }

        Ok(Image{ buffer: &self.buffer - &other.buffer, original_encoding: ImageEncoding::F64})
    }

    fn normalize_by_max(buffer: &mut DMatrix<Float>) {
        let max = buffer.amax();
        if max > 0.0 {
            for elem in buffer.iter_mut() {
                *elem = *elem/max;
            }
        }
    }

    fn image8_to_matrix(gray_image: &GrayImage) -> DMatrix<Float> {
        let (width, height) = gray_image.dimensions();
        let size = (width * height) as usize;
        let mut vec_column_major: Vec<Float> = Vec::with_capacity(size);
        for x in 0..width {
            for y in 0..height {
                let pixel_value = gray_image.get_pixel(x, y).channels()[0];
                vec_column_major.push(pixel_value as Float);
            }
        }
        DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major)
    }

    fn matrix_to_image(matrix: &DMatrix<Float>, encoding: ImageEncoding) -> GrayImage {
        let (rows, cols) = matrix.shape();

        let mut gray_image = DynamicImage::new_luma8(cols as u32, rows as u32).to_luma8();
        if matrix.is_empty() {
            return gray_image;
        }
        let max = matrix.max();
        let min = matrix.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = *matrix.index((r, c));
                let pixel_value = encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }
}
