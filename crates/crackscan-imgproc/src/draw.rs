use crackscan_image::Image;

/// Helper function to set a pixel's color, handling bounds checking.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x >= 0 && x < img.cols() as i64 && y >= 0 && y < img.rows() as i64 {
        let start = (y as usize * img.cols() + x as usize) * C;
        img.as_slice_mut()[start..start + C].copy_from_slice(&color);
    }
}

/// Draws a line on an image inplace using Bresenham's line algorithm.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
/// * `thickness` - The thickness of the line (thickness > 1 is approximate).
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;
    let half_thickness = thickness as i64 / 2;

    loop {
        if thickness <= 1 {
            set_pixel(img, x0, y0, color);
        } else {
            for i in -half_thickness..=half_thickness {
                for j in -half_thickness..=half_thickness {
                    set_pixel(img, x0 + i, y0 + j, color);
                }
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a filled circle on an image inplace.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The circle center as a tuple of (x, y).
/// * `radius` - The circle radius in pixels.
/// * `color` - The fill color as an array of `C` elements.
pub fn draw_filled_circle<const C: usize>(
    img: &mut Image<u8, C>,
    center: (i64, i64),
    radius: i64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    let r2 = radius * radius;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                set_pixel(img, cx + dx, cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crackscan_image::{Image, ImageError, ImageSize};

    #[test]
    fn draw_line_horizontal() -> Result<(), ImageError> {
        let mut img = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 5,
                height: 3,
            },
            0,
        )?;

        super::draw_line(&mut img, (0, 1), (4, 1), [255, 255, 0], 1);

        for x in 0..5 {
            assert_eq!(img.get_pixel(x, 1, 0)?, &255);
            assert_eq!(img.get_pixel(x, 1, 1)?, &255);
            assert_eq!(img.get_pixel(x, 1, 2)?, &0);
        }
        assert_eq!(img.get_pixel(2, 0, 0)?, &0);

        Ok(())
    }

    #[test]
    fn draw_line_clips_out_of_bounds() -> Result<(), ImageError> {
        let mut img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;

        super::draw_line(&mut img, (-2, -2), (6, 6), [255], 1);

        // only the in-bounds diagonal is written
        for i in 0..4 {
            assert_eq!(img.get_pixel(i, i, 0)?, &255);
        }

        Ok(())
    }

    #[test]
    fn draw_filled_circle_radius_one() -> Result<(), ImageError> {
        let mut img = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            0,
        )?;

        super::draw_filled_circle(&mut img, (2, 2), 1, [0, 255, 0]);

        assert_eq!(img.get_pixel(2, 2, 1)?, &255);
        assert_eq!(img.get_pixel(1, 2, 1)?, &255);
        assert_eq!(img.get_pixel(3, 2, 1)?, &255);
        assert_eq!(img.get_pixel(2, 1, 1)?, &255);
        assert_eq!(img.get_pixel(2, 3, 1)?, &255);
        // corners of the bounding box stay untouched
        assert_eq!(img.get_pixel(1, 1, 1)?, &0);
        assert_eq!(img.get_pixel(3, 3, 1)?, &0);

        Ok(())
    }
}
