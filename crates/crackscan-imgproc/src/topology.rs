use crackscan_image::Image;

/// Classified skeleton pixels, with coordinates exposed for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkeletonTopology {
    /// Skeleton termini (`[row, col]`): pixels with exactly one skeleton neighbor.
    pub endpoints: Vec<[usize; 2]>,
    /// Junctions (`[row, col]`): pixels with three or more skeleton neighbors.
    pub branch_points: Vec<[usize; 2]>,
}

impl SkeletonTopology {
    /// The number of skeleton endpoints.
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// The number of skeleton branch points.
    pub fn branch_point_count(&self) -> usize {
        self.branch_points.len()
    }
}

/// Classify skeleton pixels as endpoints or branch points.
///
/// For every skeleton pixel the 8-neighborhood is counted with zero padding
/// (out-of-bounds neighbors are background). Exactly one neighbor makes an
/// endpoint, three or more a branch point. Pixels with two neighbors are
/// regular skeleton segments; isolated pixels (zero neighbors) are left
/// unclassified.
///
/// # Arguments
///
/// * `skeleton` - The skeleton mask. Any nonzero value is foreground.
///
/// # Examples
///
/// ```
/// use crackscan_image::{Image, ImageSize};
/// use crackscan_imgproc::topology::classify_skeleton;
///
/// let mut skeleton = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 7, height: 3 }, 0,
/// ).unwrap();
/// for x in 1..6 {
///     skeleton.set_pixel(x, 1, 0, 255).unwrap();
/// }
///
/// let topology = classify_skeleton(&skeleton);
/// assert_eq!(topology.endpoint_count(), 2);
/// assert_eq!(topology.branch_point_count(), 0);
/// ```
pub fn classify_skeleton(skeleton: &Image<u8, 1>) -> SkeletonTopology {
    let width = skeleton.cols() as i64;
    let height = skeleton.rows() as i64;
    let data = skeleton.as_slice();

    let mut topology = SkeletonTopology::default();

    for y in 0..height {
        for x in 0..width {
            if data[(y * width + x) as usize] == 0 {
                continue;
            }

            let mut neighbors = 0;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || nx >= width || ny < 0 || ny >= height {
                        continue;
                    }
                    if data[(ny * width + nx) as usize] != 0 {
                        neighbors += 1;
                    }
                }
            }

            match neighbors {
                1 => topology.endpoints.push([y as usize, x as usize]),
                n if n >= 3 => topology.branch_points.push([y as usize, x as usize]),
                _ => {}
            }
        }
    }

    topology
}
