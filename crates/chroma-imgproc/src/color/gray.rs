use crate::parallel;
use chroma_image::{Image, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Convert an RGB8 image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The luminance is computed in f64 and truncated toward zero, so an all
/// white pixel maps to 254, not 255.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input image must have 3 channels.
/// Precondition: the output image must have 1 channel.
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use chroma_image::{Image, ImageSize};
/// use chroma_imgproc::color::gray_from_rgb_u8;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_rgb_u8(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as f64;
        let g = src_pixel[1] as f64;
        let b = src_pixel[2] as f64;
        dst_pixel[0] = (RW * r + GW * g + BW * b) as u8;
    });

    Ok(())
}

/// Convert a grayscale image to an RGB image by replicating the grayscale value across all three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input image must have 1 channel.
/// Precondition: the output image must have 3 channels.
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_gray<T>(src: &Image<T, 1>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Clone + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0].clone();
        dst_pixel[1] = src_pixel[0].clone();
        dst_pixel[2] = src_pixel[0].clone();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use chroma_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgb_u8_regression() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize {
                width: 1,
                height: 3,
            },
            vec![
                255, 0, 0,
                0, 0, 0,
                255, 255, 255,
            ],
        )?;

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::gray_from_rgb_u8(&image, &mut gray)?;

        // white truncates to 254, the weighted sum lands just below 255
        assert_eq!(gray.as_slice(), &[76, 0, 254]);

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8_one_pixel() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0, 255, 0],
        )?;

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0)?;

        super::gray_from_rgb_u8(&image, &mut gray)?;

        assert_eq!(gray.cols(), 1);
        assert_eq!(gray.rows(), 1);
        assert_eq!(gray.as_slice(), &[149]);

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut gray = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        let res = super::gray_from_rgb_u8(&image, &mut gray);
        assert!(matches!(res, Err(ImageError::InvalidImageSize(2, 2, 3, 2))));

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8_deterministic() -> Result<(), ImageError> {
        use rand::Rng;

        let size = ImageSize {
            width: 17,
            height: 13,
        };

        let mut rng = rand::rng();
        let data: Vec<u8> = (0..size.width * size.height * 3)
            .map(|_| rng.random())
            .collect();
        let image = Image::<u8, 3>::new(size, data)?;

        let mut gray0 = Image::<u8, 1>::from_size_val(size, 0)?;
        let mut gray1 = Image::<u8, 1>::from_size_val(size, 0)?;

        super::gray_from_rgb_u8(&image, &mut gray0)?;
        super::gray_from_rgb_u8(&image, &mut gray1)?;

        assert_eq!(gray0.as_slice(), gray1.as_slice());

        Ok(())
    }

    #[test]
    fn rgb_from_grayscale() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;

        let mut rgb = Image::<u8, 3>::from_size_val(image.size(), 0)?;

        super::rgb_from_gray(&image, &mut rgb)?;

        #[rustfmt::skip]
        let expected: Image<u8, 3> = Image::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                0, 0, 0,
                1, 1, 1,
                2, 2, 2,
                3, 3, 3,
                4, 4, 4,
                5, 5, 5,
            ],
        )?;

        assert_eq!(rgb.as_slice(), expected.as_slice());

        Ok(())
    }
}
