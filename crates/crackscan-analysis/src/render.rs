use crackscan_image::{Image, ImageError};
use crackscan_imgproc::color::rgb_from_gray_u8;
use crackscan_imgproc::draw::{draw_filled_circle, draw_line};
use crackscan_imgproc::topology::SkeletonTopology;
use crackscan_imgproc::width::WidthPair;

const ENDPOINT_COLOR: [u8; 3] = [0, 255, 0];
const BRANCH_COLOR: [u8; 3] = [255, 0, 0];
const WIDTH_COLOR: [u8; 3] = [255, 255, 0];
const MARKER_RADIUS: i64 = 1;

/// Render the skeleton with its classified points.
///
/// The skeleton is drawn in grayscale, endpoints as green filled circles and
/// branch points as red filled circles.
pub fn render_topology_overlay(
    skeleton: &Image<u8, 1>,
    topology: &SkeletonTopology,
) -> Result<Image<u8, 3>, ImageError> {
    let mut overlay = Image::from_size_val(skeleton.size(), 0u8)?;
    rgb_from_gray_u8(skeleton, &mut overlay)?;

    for &[row, col] in &topology.endpoints {
        draw_filled_circle(
            &mut overlay,
            (col as i64, row as i64),
            MARKER_RADIUS,
            ENDPOINT_COLOR,
        );
    }
    for &[row, col] in &topology.branch_points {
        draw_filled_circle(
            &mut overlay,
            (col as i64, row as i64),
            MARKER_RADIUS,
            BRANCH_COLOR,
        );
    }

    Ok(overlay)
}

/// Render the binary mask with the maximal width segment.
///
/// Draws a yellow one-pixel line between the two contour points defining the
/// maximum crack width. A degenerate analysis without a width pair renders
/// the plain mask.
pub fn render_width_overlay(
    binary: &Image<u8, 1>,
    pair: Option<&WidthPair>,
) -> Result<Image<u8, 3>, ImageError> {
    let mut overlay = Image::from_size_val(binary.size(), 0u8)?;
    rgb_from_gray_u8(binary, &mut overlay)?;

    if let Some(pair) = pair {
        // width pair coordinates are [row, col]; drawing takes (x, y)
        let p0 = (pair.p1[1] as i64, pair.p1[0] as i64);
        let p1 = (pair.p2[1] as i64, pair.p2[0] as i64);
        draw_line(&mut overlay, p0, p1, WIDTH_COLOR, 1);
    }

    Ok(overlay)
}

#[cfg(test)]
mod tests {
    use crackscan_image::{Image, ImageError, ImageSize};
    use crackscan_imgproc::topology::SkeletonTopology;
    use crackscan_imgproc::width::WidthPair;

    #[test]
    fn topology_overlay_marks_points() -> Result<(), ImageError> {
        let mut skeleton = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 12,
                height: 8,
            },
            0,
        )?;
        for x in 1..11 {
            skeleton.set_pixel(x, 4, 0, 255)?;
        }

        let topology = SkeletonTopology {
            endpoints: vec![[4, 1], [4, 10]],
            branch_points: vec![[4, 5]],
        };

        let overlay = super::render_topology_overlay(&skeleton, &topology)?;

        // endpoint pixel is green
        assert_eq!(overlay.get_pixel(1, 4, 0)?, &0);
        assert_eq!(overlay.get_pixel(1, 4, 1)?, &255);
        // branch pixel is red
        assert_eq!(overlay.get_pixel(5, 4, 0)?, &255);
        assert_eq!(overlay.get_pixel(5, 4, 1)?, &0);
        // a plain skeleton pixel away from the markers stays white
        assert_eq!(overlay.get_pixel(3, 4, 0)?, &255);
        assert_eq!(overlay.get_pixel(3, 4, 1)?, &255);
        assert_eq!(overlay.get_pixel(3, 4, 2)?, &255);

        Ok(())
    }

    #[test]
    fn width_overlay_draws_segment() -> Result<(), ImageError> {
        let binary = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 6,
                height: 6,
            },
            0,
        )?;

        let pair = WidthPair {
            p1: [1.0, 1.0],
            p2: [1.0, 4.0],
            width: 3.0,
        };

        let overlay = super::render_width_overlay(&binary, Some(&pair))?;

        for x in 1..5 {
            assert_eq!(overlay.get_pixel(x, 1, 0)?, &255);
            assert_eq!(overlay.get_pixel(x, 1, 1)?, &255);
            assert_eq!(overlay.get_pixel(x, 1, 2)?, &0);
        }

        Ok(())
    }

    #[test]
    fn width_overlay_without_pair() -> Result<(), ImageError> {
        let mut binary = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        binary.set_pixel(2, 2, 0, 255)?;

        let overlay = super::render_width_overlay(&binary, None)?;

        assert_eq!(overlay.get_pixel(2, 2, 0)?, &255);
        let yellow_only = overlay
            .as_slice()
            .chunks_exact(3)
            .filter(|px| px[0] == 255 && px[1] == 255 && px[2] == 0)
            .count();
        assert_eq!(yellow_only, 0);

        Ok(())
    }
}
