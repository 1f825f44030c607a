use crackscan_image::{Image, ImageError};

/// Gather the 8-neighborhood of (x, y) in Zhang-Suen order.
///
/// Index 0..8 maps to p2..p9: N, NE, E, SE, S, SW, W, NW. Out-of-bounds
/// neighbors read as background.
#[inline]
fn neighborhood(mask: &[bool], width: i64, height: i64, x: i64, y: i64) -> [bool; 8] {
    const OFFSETS: [(i64, i64); 8] = [
        (0, -1),
        (1, -1),
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];

    let mut p = [false; 8];
    for (i, (dx, dy)) in OFFSETS.iter().enumerate() {
        let nx = x + dx;
        let ny = y + dy;
        if nx >= 0 && nx < width && ny >= 0 && ny < height {
            p[i] = mask[(ny * width + nx) as usize];
        }
    }
    p
}

/// Count 0->1 transitions in the circular sequence p2, p3, ..., p9, p2.
#[inline]
fn transitions(p: &[bool; 8]) -> usize {
    (0..8).filter(|&i| !p[i] && p[(i + 1) % 8]).count()
}

/// Thin a binary mask to its one-pixel-wide skeleton.
///
/// Implements Zhang-Suen two-subiteration thinning, iterated until no pixel
/// can be removed. The result is a subset of the input foreground that
/// preserves the connectivity of each foreground component; already-thin
/// structures are a fixed point. Any nonzero source value is treated as
/// foreground and the output is written as 0/255.
///
/// # Arguments
///
/// * `src` - The input binary mask.
/// * `dst` - The output skeleton mask.
///
/// # Examples
///
/// ```
/// use crackscan_image::{Image, ImageSize};
/// use crackscan_imgproc::skeleton::thin;
///
/// let mut mask = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 7, height: 3 }, 0,
/// ).unwrap();
/// for x in 1..6 {
///     mask.set_pixel(x, 1, 0, 255).unwrap();
/// }
///
/// let mut skeleton = Image::<u8, 1>::from_size_val(mask.size(), 0).unwrap();
/// thin(&mask, &mut skeleton).unwrap();
///
/// // a 1-px line is already thin
/// assert_eq!(skeleton.as_slice(), mask.as_slice());
/// ```
pub fn thin(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
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
    let mut mask: Vec<bool> = src.as_slice().iter().map(|&v| v != 0).collect();
    let mut to_clear = Vec::new();

    loop {
        let mut changed = false;

        for step in 0..2 {
            to_clear.clear();

            for y in 0..height {
                for x in 0..width {
                    if !mask[(y * width + x) as usize] {
                        continue;
                    }

                    let p = neighborhood(&mask, width, height, x, y);
                    let b = p.iter().filter(|&&v| v).count();
                    if !(2..=6).contains(&b) {
                        continue;
                    }
                    if transitions(&p) != 1 {
                        continue;
                    }

                    // p indices: 0=N(p2), 2=E(p4), 4=S(p6), 6=W(p8)
                    let removable = if step == 0 {
                        (!p[0] || !p[2] || !p[4]) && (!p[2] || !p[4] || !p[6])
                    } else {
                        (!p[0] || !p[2] || !p[6]) && (!p[0] || !p[4] || !p[6])
                    };

                    if removable {
                        to_clear.push((y * width + x) as usize);
                    }
                }
            }

            if !to_clear.is_empty() {
                changed = true;
                for &idx in &to_clear {
                    mask[idx] = false;
                }
            }
        }

        if !changed {
            break;
        }
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(mask.iter())
        .for_each(|(out, &fg)| *out = if fg { 255 } else { 0 });

    Ok(())
}
