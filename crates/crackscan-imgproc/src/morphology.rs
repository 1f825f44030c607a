use crackscan_image::{Image, ImageError};

/// Erode a binary mask with the elementary 3x3 structuring element.
///
/// A destination pixel is foreground (255) iff the source pixel and all of
/// its 8 neighbors are foreground. Out-of-bounds neighbors count as
/// background, so foreground pixels touching the image border are always
/// eroded. The full 3x3 element matches the 8-neighborhood used by the
/// skeleton topology classifier.
///
/// Any nonzero source value is treated as foreground.
///
/// # Arguments
///
/// * `src` - The input binary mask.
/// * `dst` - The output binary mask (written as 0/255).
pub fn erode(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let width = src.cols() as i64;
    let height = src.rows() as i64;
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in 0..height {
        for x in 0..width {
            let mut keep = src_data[(y * width + x) as usize] != 0;

            if keep {
                'kernel: for dy in -1..=1i64 {
                    for dx in -1..=1i64 {
                        let ny = y + dy;
                        let nx = x + dx;
                        if ny < 0 || ny >= height || nx < 0 || nx >= width {
                            keep = false;
                            break 'kernel;
                        }
                        if src_data[(ny * width + nx) as usize] == 0 {
                            keep = false;
                            break 'kernel;
                        }
                    }
                }
            }

            dst_data[(y * width + x) as usize] = if keep { 255 } else { 0 };
        }
    }

    Ok(())
}
