use std::path::{Path, PathBuf};
use std::time::Instant;

use argh::{FromArgValue, FromArgs};

use chroma_image::Image;
use chroma_imgproc::color;
use chroma_io::functional as F;
use chroma_io::{jpeg, png};

const JPEG_QUALITY: u8 = 95;

/// The pixel transform to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// luminance (grayscale) conversion
    Gray,
    /// hue/saturation/value decomposition
    Hsv,
}

impl FromArgValue for Mode {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        match value {
            "gray" => Ok(Mode::Gray),
            "hsv" => Ok(Mode::Hsv),
            _ => Err(format!(
                "unknown mode '{}', expected 'gray' or 'hsv'",
                value
            )),
        }
    }
}

/// The container format of the output images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Png,
    Jpeg,
}

impl Format {
    fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpg",
        }
    }
}

impl FromArgValue for Format {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        match value {
            "png" => Ok(Format::Png),
            "jpeg" | "jpg" => Ok(Format::Jpeg),
            _ => Err(format!(
                "unknown format '{}', expected 'png' or 'jpeg'",
                value
            )),
        }
    }
}

#[derive(FromArgs)]
/// Decompose an image into a grayscale image or the three channels of its HSV decomposition
struct Args {
    /// transform to apply, one of 'gray' or 'hsv'
    #[argh(positional)]
    mode: Mode,

    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the output images are written
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// container format of the output images, 'png' or 'jpeg'
    #[argh(option, short = 'f', default = "Format::Png")]
    format: Format,
}

/// Write one materialized gray image, reporting a failed write without
/// aborting the run; the computation already completed.
fn write_output(file_path: &Path, image: &Image<u8, 3>, format: Format) {
    let res = match format {
        Format::Png => png::write_image_png_rgb8(file_path, image),
        Format::Jpeg => jpeg::write_image_jpeg_rgb8(file_path, image, JPEG_QUALITY),
    };

    match res {
        Ok(()) => println!("wrote {}", file_path.display()),
        Err(e) => log::error!("failed to write {}: {}", file_path.display(), e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let rgb = F::read_image_any_rgb8(&args.image_path)?;

    let ext = args.format.extension();

    match args.mode {
        Mode::Gray => {
            let start = Instant::now();

            let mut gray = Image::<u8, 1>::from_size_val(rgb.size(), 0)?;
            color::gray_from_rgb_u8(&rgb, &mut gray)?;

            // materialize the luminance as a gray RGB image
            let mut gray_rgb = Image::<u8, 3>::from_size_val(gray.size(), 0)?;
            color::rgb_from_gray(&gray, &mut gray_rgb)?;

            let elapsed = start.elapsed();

            write_output(
                &args.output_dir.join(format!("grayscale.{}", ext)),
                &gray_rgb,
                args.format,
            );

            println!("grayscale transform took {:.4} s", elapsed.as_secs_f64());
        }
        Mode::Hsv => {
            let start = Instant::now();

            let mut hsv = Image::<u8, 3>::from_size_val(rgb.size(), 0)?;
            color::hsv_from_rgb_u8(&rgb, &mut hsv)?;

            // materialize each plane as a gray RGB image
            let mut planes_rgb = Vec::with_capacity(3);
            for plane in hsv.split_channels()? {
                let mut plane_rgb = Image::<u8, 3>::from_size_val(plane.size(), 0)?;
                color::rgb_from_gray(&plane, &mut plane_rgb)?;
                planes_rgb.push(plane_rgb);
            }

            let elapsed = start.elapsed();

            for (name, plane_rgb) in ["hue", "saturation", "value"].iter().zip(&planes_rgb) {
                write_output(
                    &args.output_dir.join(format!("{}.{}", name, ext)),
                    plane_rgb,
                    args.format,
                );
            }

            println!("hsv transform took {:.4} s", elapsed.as_secs_f64());
        }
    }

    Ok(())
}
