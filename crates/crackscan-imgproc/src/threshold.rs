use num_traits::Zero;
use std::cmp::PartialOrd;

use crackscan_image::{Image, ImageError};

use crate::parallel;

/// Default intensity threshold separating crack material from background.
///
/// A pixel is classified as foreground iff its intensity strictly exceeds
/// this value on the 0-255 scale. Callers may override it per analysis run
/// to probe boundary intensities.
pub const DEFAULT_CRACK_THRESHOLD: u8 = 128;

/// Apply a binary threshold to a grayscale image.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output mask image.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The value assigned when the input strictly exceeds the threshold.
///
/// # Examples
///
/// ```
/// use crackscan_image::{Image, ImageSize};
/// use crackscan_imgproc::threshold::{binarize, DEFAULT_CRACK_THRESHOLD};
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut mask = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// binarize(&image, &mut mask, DEFAULT_CRACK_THRESHOLD, 255).unwrap();
/// assert_eq!(mask.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn binarize<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold {
            max_value
        } else {
            T::zero()
        };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use crackscan_image::{Image, ImageError, ImageSize};

    use super::DEFAULT_CRACK_THRESHOLD;

    #[test]
    fn binarize_boundary_intensities() -> Result<(), ImageError> {
        // strict inequality: 128 itself stays background
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![127, 128, 129],
        )?;

        let mut mask = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::binarize(&image, &mut mask, DEFAULT_CRACK_THRESHOLD, 255)?;

        assert_eq!(mask.as_slice(), &[0, 0, 255]);

        Ok(())
    }

    #[test]
    fn binarize_deterministic() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 200, 130, 90],
        )?;

        let mut first = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        let mut second = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::binarize(&image, &mut first, DEFAULT_CRACK_THRESHOLD, 255)?;
        super::binarize(&image, &mut second, DEFAULT_CRACK_THRESHOLD, 255)?;

        assert_eq!(first.as_slice(), second.as_slice());

        Ok(())
    }

    #[test]
    fn binarize_custom_threshold() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![40, 60],
        )?;

        let mut mask = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::binarize(&image, &mut mask, 50u8, 255)?;

        assert_eq!(mask.as_slice(), &[0, 255]);

        Ok(())
    }
}
