use std::num::NonZeroUsize;

use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;
use rayon::prelude::*;

use crackscan_image::{Image, ImageError};

use crate::contour::contour_points;

/// k = 2: the two contour points flanking a skeleton pixel.
const FLANKING_POINTS: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// The two contour points flanking the widest skeleton cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPair {
    /// First contour point as `[row, col]`.
    pub p1: [f32; 2],
    /// Second contour point as `[row, col]`.
    pub p2: [f32; 2],
    /// Euclidean distance between the two points in pixels.
    pub width: f32,
}

struct Candidate {
    width: f32,
    scan_idx: usize,
    p1: [f32; 2],
    p2: [f32; 2],
}

/// Estimate the maximum local crack width over a skeleton.
///
/// Builds a k-d tree over the contour of `binary` and, for every skeleton
/// pixel, queries its two nearest contour points. The mutual distance of
/// those two points approximates the crack width at that cross-section; the
/// global maximum and the defining point pair are returned.
///
/// Skeleton pixels are visited in row-major scan order and ties on the
/// maximal width resolve to the first pixel encountered. The queries run in
/// parallel but the reduction compares `(width, scan index)`, so the result
/// is identical to the serial scan.
///
/// Degenerate inputs (empty skeleton, fewer than two contour points) return
/// `(0.0, None)` and log a warning instead of failing.
///
/// # Arguments
///
/// * `binary` - The binary crack mask.
/// * `skeleton` - The skeleton of the same mask. Must have the same size.
///
/// # Returns
///
/// The maximum width in pixels and the contour point pair that defines it.
pub fn max_crack_width(
    binary: &Image<u8, 1>,
    skeleton: &Image<u8, 1>,
) -> Result<(f32, Option<WidthPair>), ImageError> {
    if binary.size() != skeleton.size() {
        return Err(ImageError::InvalidImageSize(
            binary.cols(),
            binary.rows(),
            skeleton.cols(),
            skeleton.rows(),
        ));
    }

    let contour = contour_points(binary)?;

    let cols = skeleton.cols();
    let skeleton_pts = skeleton
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, &v)| v != 0)
        .map(|(idx, _)| [(idx / cols) as f32, (idx % cols) as f32])
        .collect::<Vec<_>>();

    if contour.len() < 2 || skeleton_pts.is_empty() {
        log::warn!(
            "degenerate width input: {} contour points, {} skeleton points",
            contour.len(),
            skeleton_pts.len()
        );
        return Ok((0.0, None));
    }

    let kdtree: ImmutableKdTree<f32, u32, 2, 32> = ImmutableKdTree::new_from_slice(&contour);

    let best = skeleton_pts
        .par_iter()
        .enumerate()
        .filter_map(|(scan_idx, pt)| {
            let nearest = kdtree.nearest_n::<SquaredEuclidean>(pt, FLANKING_POINTS);
            if nearest.len() < 2 {
                return None;
            }
            let p1 = contour[nearest[0].item as usize];
            let p2 = contour[nearest[1].item as usize];
            let width = ((p1[0] - p2[0]).powi(2) + (p1[1] - p2[1]).powi(2)).sqrt();
            Some(Candidate {
                width,
                scan_idx,
                p1,
                p2,
            })
        })
        .reduce_with(|a, b| {
            if b.width > a.width || (b.width == a.width && b.scan_idx < a.scan_idx) {
                b
            } else {
                a
            }
        });

    Ok(match best {
        Some(c) => (
            c.width,
            Some(WidthPair {
                p1: c.p1,
                p2: c.p2,
                width: c.width,
            }),
        ),
        None => (0.0, None),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crackscan_image::{Image, ImageError, ImageSize};

    /// A filled horizontal bar of the given pixel thickness.
    fn bar(width: usize, height: usize, y0: usize, y1: usize) -> Result<Image<u8, 1>, ImageError> {
        let mut mask = Image::from_size_val(ImageSize { width, height }, 0)?;
        for y in y0..y1 {
            for x in 0..width {
                mask.set_pixel(x, y, 0, 255)?;
            }
        }
        Ok(mask)
    }

    #[test]
    fn width_of_uniform_bar() -> Result<(), ImageError> {
        // 3-px thick bar across the full image width; skeleton runs along
        // the middle row, nearest contour points sit on the two bar edges
        let mask = bar(15, 9, 3, 6)?;
        let mut skeleton = Image::from_size_val(mask.size(), 0)?;
        crate::skeleton::thin(&mask, &mut skeleton)?;

        let (max_width, pair) = super::max_crack_width(&mask, &skeleton)?;

        let pair = pair.expect("a non-degenerate mask must yield a pair");
        assert!(max_width > 0.0);
        assert_relative_eq!(pair.width, max_width);
        // bounded by the raster diagonal
        let diagonal = ((15.0f32).powi(2) + (9.0f32).powi(2)).sqrt();
        assert!(max_width <= diagonal);

        Ok(())
    }

    #[test]
    fn width_of_thick_vertical_bar() -> Result<(), ImageError> {
        // 5-px thick vertical bar: the two flanking contour points of a
        // mid-bar skeleton pixel sit on opposite edges, so the measured
        // width tracks the bar thickness
        let mut mask = Image::from_size_val(
            ImageSize {
                width: 11,
                height: 15,
            },
            0u8,
        )?;
        for y in 0..15 {
            for x in 3..8 {
                mask.set_pixel(x, y, 0, 255)?;
            }
        }
        let mut skeleton = Image::from_size_val(mask.size(), 0)?;
        crate::skeleton::thin(&mask, &mut skeleton)?;

        let (max_width, pair) = super::max_crack_width(&mask, &skeleton)?;

        assert!(pair.is_some());
        assert!(
            (4.0..=6.0).contains(&max_width),
            "expected a width near the bar thickness, got {max_width}"
        );

        Ok(())
    }

    #[test]
    fn width_of_empty_mask() -> Result<(), ImageError> {
        let mask = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 10,
                height: 10,
            },
            0,
        )?;
        let skeleton = Image::from_size_val(mask.size(), 0)?;

        let (max_width, pair) = super::max_crack_width(&mask, &skeleton)?;

        assert_eq!(max_width, 0.0);
        assert!(pair.is_none());

        Ok(())
    }

    #[test]
    fn width_with_empty_skeleton() -> Result<(), ImageError> {
        let mask = bar(8, 8, 2, 6)?;
        let skeleton = Image::from_size_val(mask.size(), 0)?;

        let (max_width, pair) = super::max_crack_width(&mask, &skeleton)?;

        assert_eq!(max_width, 0.0);
        assert!(pair.is_none());

        Ok(())
    }

    #[test]
    fn width_size_mismatch() -> Result<(), ImageError> {
        let mask = bar(8, 8, 2, 6)?;
        let skeleton = Image::from_size_val(
            ImageSize {
                width: 9,
                height: 8,
            },
            0,
        )?;

        assert!(super::max_crack_width(&mask, &skeleton).is_err());

        Ok(())
    }

    #[test]
    fn width_pair_points_are_contour_points() -> Result<(), ImageError> {
        let mask = bar(12, 7, 2, 5)?;
        let mut skeleton = Image::from_size_val(mask.size(), 0)?;
        crate::skeleton::thin(&mask, &mut skeleton)?;

        let contour = crate::contour::contour_points(&mask)?;
        let (_, pair) = super::max_crack_width(&mask, &skeleton)?;
        let pair = pair.expect("pair expected");

        assert!(contour.contains(&pair.p1));
        assert!(contour.contains(&pair.p2));

        Ok(())
    }
}
