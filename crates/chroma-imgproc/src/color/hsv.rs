use crate::parallel;
use chroma_image::{Image, ImageError};

/// Convert an RGB8 image to an HSV image with 8-bit quantized channels.
///
/// The input image is assumed to have 3 channels in the order R, G, B.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output HSV image.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in the range [0, 255] (0-360 degrees).
/// * S: The saturation channel in the range [0, 255].
/// * V: The value channel in the range [0, 255].
///
/// Channels are normalized to [0, 1] before conversion and the continuous
/// results are truncated toward zero into [0, 255]. An achromatic pixel
/// (all channels equal) has hue 0, and a fully black pixel has saturation 0.
///
/// Precondition: the input image must have 3 channels.
/// Precondition: the output image must have 3 channels.
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::color::hsv_from_rgb_u8;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// hsv_from_rgb_u8(&image, &mut hsv).unwrap();
///
/// assert_eq!(hsv.num_channels(), 3);
/// assert_eq!(hsv.size().width, 4);
/// assert_eq!(hsv.size().height, 5);
/// ```
pub fn hsv_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        // Normalize the input to the range [0, 1]
        let r = src_pixel[0] as f32 / 255.;
        let g = src_pixel[1] as f32 / 255.;
        let b = src_pixel[2] as f32 / 255.;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        // The branch comparisons must use the computed max itself so that
        // ties resolve R before G before B.
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        // Ensure h is in the range [0, 360)
        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if max == 0.0 {
            0.0
        } else {
            (delta / max) * 255.0
        };

        dst_pixel[0] = ((h / 360.0) * 255.0) as u8;
        dst_pixel[1] = s as u8;
        dst_pixel[2] = (max * 255.0) as u8;
    });

    Ok(())
}
