extern crate image as image_rs;
extern crate sift_scale_space;

use std::{env, fs, path::Path};

use color_eyre::eyre::{eyre, Result};
use sift_scale_space::{build_sift_scale_space, Image, ScaleSpaceRuntimeParams};

// Usage: scale_space <image> [runtime_params.yaml] [output_folder]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).ok_or_else(|| eyre!("missing image path"))?;
    let runtime_params = match args.get(2) {
        Some(path) => ScaleSpaceRuntimeParams::load(path)?,
        None => ScaleSpaceRuntimeParams::default()
    };
    let image_out_folder = args.get(3).map(String::as_str).unwrap_or("output");
    let image_format = "png";

    let gray_image = image_rs::open(Path::new(image_path))?.to_luma8();
    let image = Image::from_gray_image(&gray_image, true);

    let scale_space = build_sift_scale_space(&image, &runtime_params)?;
    fs::create_dir_all(image_out_folder)?;

    for (octave_level, octave) in scale_space.iter().enumerate() {
        println!("octave {}: {}x{}", octave_level, octave.width(), octave.height());
        for (dog_level, dog) in octave.difference_of_gaussians().iter().enumerate() {
            let name = format!("dog_{}_{}", octave_level, dog_level);
            let file_path = format!("{}/{}.{}", image_out_folder, name, image_format);
            dog.to_image().save(file_path)?;
        }
    }

    Ok(())
}
