use serde::Serialize;

use crackscan_image::Image;
use crackscan_imgproc::topology::SkeletonTopology;

use crate::error::AnalysisError;

/// Measured crack geometry in physical units.
///
/// Lengths are expressed in multiples of the pixel size passed to
/// [`compute_metrics`], areas in its square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackMetrics {
    /// Total crack area.
    pub area: f64,
    /// Skeleton length.
    pub length: f64,
    /// Average crack width (area over length).
    pub avg_width: f64,
    /// Maximum crack width.
    pub max_width: f64,
    /// Number of skeleton endpoints.
    pub endpoint_count: usize,
    /// Number of skeleton branch points.
    pub branch_point_count: usize,
    /// Heuristic branch estimate: `branch_point_count` minus one, floored at
    /// zero. Junction clusters overcount by roughly one pixel; this is a
    /// documented rough correction, not a topological count, kept as its own
    /// field so a graph-based replacement can swap in behind it.
    pub estimated_branch_count: usize,
    /// Crack area as a percentage of the total raster area.
    pub area_ratio: f64,
}

/// Aggregate raw pixel counts into physical-unit metrics.
///
/// Pure function: counts foreground and skeleton pixels, scales them by
/// `pixel_size` (physical length per pixel edge) and derives the average
/// width and area ratio. A zero-length skeleton yields an average width of
/// zero rather than a division error.
///
/// # Arguments
///
/// * `binary` - The binary crack mask.
/// * `skeleton` - The skeleton mask of the same raster.
/// * `max_width_px` - Maximum crack width in pixels, from the width estimator.
/// * `pixel_size` - Physical length per pixel edge; must be finite and > 0.
/// * `topology` - Endpoint/branch classification of the skeleton.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidParameter`] if `pixel_size` is not a
/// finite positive number.
pub fn compute_metrics(
    binary: &Image<u8, 1>,
    skeleton: &Image<u8, 1>,
    max_width_px: f64,
    pixel_size: f64,
    topology: &SkeletonTopology,
) -> Result<CrackMetrics, AnalysisError> {
    if !pixel_size.is_finite() || pixel_size <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "pixel_size must be finite and > 0, got {pixel_size}"
        )));
    }

    let foreground_count = binary.as_slice().iter().filter(|&&v| v != 0).count();
    let skeleton_count = skeleton.as_slice().iter().filter(|&&v| v != 0).count();

    let pixel_area = pixel_size * pixel_size;
    let area = foreground_count as f64 * pixel_area;
    let length = skeleton_count as f64 * pixel_size;
    let avg_width = if length > 0.0 { area / length } else { 0.0 };
    let max_width = max_width_px * pixel_size;

    let total_area = (binary.cols() * binary.rows()) as f64 * pixel_area;
    let area_ratio = area / total_area * 100.0;

    Ok(CrackMetrics {
        area,
        length,
        avg_width,
        max_width,
        endpoint_count: topology.endpoint_count(),
        branch_point_count: topology.branch_point_count(),
        estimated_branch_count: topology.branch_point_count().saturating_sub(1),
        area_ratio,
    })
}
