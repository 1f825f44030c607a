use crackscan_image::{Image, ImageError};

use crate::morphology;

/// Extract the boundary pixels of a binary mask.
///
/// The contour is the mask minus its elementary erosion: the set of
/// foreground pixels adjacent to background (or to the image border).
/// Points are returned as `[row, col]` coordinates in row-major scan order,
/// ready for the width estimator's spatial index.
///
/// An all-background mask yields an empty set. An all-foreground mask yields
/// its border ring, since border pixels always erode under the zero-padded
/// element.
///
/// # Arguments
///
/// * `mask` - The input binary mask. Any nonzero value is foreground.
pub fn contour_points(mask: &Image<u8, 1>) -> Result<Vec<[f32; 2]>, ImageError> {
    let mut eroded = Image::from_size_val(mask.size(), 0u8)?;
    morphology::erode(mask, &mut eroded)?;

    let width = mask.cols();
    let mut points = Vec::new();

    for (idx, (&m, &e)) in mask
        .as_slice()
        .iter()
        .zip(eroded.as_slice().iter())
        .enumerate()
    {
        if m != 0 && e == 0 {
            points.push([(idx / width) as f32, (idx % width) as f32]);
        }
    }

    Ok(points)
}
