use serde::{Serialize, Deserialize};

use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub enum ImageEncoding {
    U8,
    F64
}

impl ImageEncoding {
    // https://en.wikipedia.org/wiki/Normalization_(image_processing)
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        let range = 255 as Float; // 255 - 0
        let spread = max - min;
        if spread <= 0.0 {
            return 0;
        }
        ((value - min) * (range / spread)).round().clamp(0.0, range) as u8
    }
}
