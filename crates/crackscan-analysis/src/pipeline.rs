use crackscan_image::Image;
use crackscan_imgproc::color::gray_from_rgb_u8;
use crackscan_imgproc::skeleton::thin;
use crackscan_imgproc::threshold::{binarize, DEFAULT_CRACK_THRESHOLD};
use crackscan_imgproc::topology::classify_skeleton;
use crackscan_imgproc::width::max_crack_width;

use crate::compliance::{self, ComplianceThresholds, Verdict};
use crate::error::AnalysisError;
use crate::metrics::{compute_metrics, CrackMetrics};
use crate::render::{render_topology_overlay, render_width_overlay};

/// Scalar parameters of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzeParams {
    /// Physical length per pixel edge; must be finite and > 0.
    pub pixel_size: f64,
    /// Intensity above which a pixel counts as crack material.
    pub binary_threshold: u8,
    /// Compliance limits in physical units.
    pub thresholds: ComplianceThresholds,
}

impl Default for AnalyzeParams {
    fn default() -> Self {
        Self {
            pixel_size: 1.0,
            binary_threshold: DEFAULT_CRACK_THRESHOLD,
            thresholds: ComplianceThresholds::default(),
        }
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    /// The binary crack mask, rendered as 0/255 grayscale.
    pub binary_image: Image<u8, 1>,
    /// The skeleton mask, rendered as 0/255 grayscale.
    pub skeleton_image: Image<u8, 1>,
    /// Skeleton with endpoint and branch markers.
    pub topology_overlay: Image<u8, 3>,
    /// Binary mask with the maximal width segment.
    pub width_overlay: Image<u8, 3>,
    /// Measured metrics in physical units.
    pub metrics: CrackMetrics,
    /// The compliance verdict.
    pub verdict: Verdict,
}

/// Run the full measurement pipeline on a grayscale raster.
///
/// Stages run in dependency order: binarization, thinning, contour-based
/// width estimation, topology classification, metric aggregation, compliance
/// evaluation and overlay rendering. Each stage produces a fresh output; the
/// call holds no shared mutable state, so concurrent invocations are safe.
///
/// Degenerate-but-valid inputs (all-background masks, single-pixel cracks)
/// complete with zero-valued metrics. Parameter validation failures surface
/// as [`AnalysisError::InvalidParameter`] before any pixel work.
///
/// # Examples
///
/// ```
/// use crackscan_image::{Image, ImageSize};
/// use crackscan_analysis::{analyze_gray, AnalyzeParams, Verdict};
///
/// let image = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 10, height: 10 }, 0,
/// ).unwrap();
///
/// let output = analyze_gray(&image, &AnalyzeParams::default()).unwrap();
///
/// assert_eq!(output.metrics.area, 0.0);
/// assert_eq!(output.verdict, Verdict::Pass);
/// ```
pub fn analyze_gray(
    image: &Image<u8, 1>,
    params: &AnalyzeParams,
) -> Result<AnalysisOutput, AnalysisError> {
    if !params.pixel_size.is_finite() || params.pixel_size <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "pixel_size must be finite and > 0, got {}",
            params.pixel_size
        )));
    }
    params.thresholds.validate()?;

    let mut binary = Image::from_size_val(image.size(), 0u8)?;
    binarize(image, &mut binary, params.binary_threshold, 255)?;

    let mut skeleton = Image::from_size_val(binary.size(), 0u8)?;
    thin(&binary, &mut skeleton)?;

    let (max_width_px, width_pair) = max_crack_width(&binary, &skeleton)?;
    let topology = classify_skeleton(&skeleton);

    let metrics = compute_metrics(
        &binary,
        &skeleton,
        max_width_px as f64,
        params.pixel_size,
        &topology,
    )?;
    let verdict = compliance::evaluate(&metrics, &params.thresholds);

    log::debug!(
        "analysis complete: area={}, length={}, max_width={}, verdict={}",
        metrics.area,
        metrics.length,
        metrics.max_width,
        verdict
    );

    let topology_overlay = render_topology_overlay(&skeleton, &topology)?;
    let width_overlay = render_width_overlay(&binary, width_pair.as_ref())?;

    Ok(AnalysisOutput {
        binary_image: binary,
        skeleton_image: skeleton,
        topology_overlay,
        width_overlay,
        metrics,
        verdict,
    })
}

/// Run the full measurement pipeline on an RGB raster.
///
/// The image is converted to luminance first; see [`analyze_gray`].
pub fn analyze_rgb(
    image: &Image<u8, 3>,
    params: &AnalyzeParams,
) -> Result<AnalysisOutput, AnalysisError> {
    let mut gray = Image::from_size_val(image.size(), 0u8)?;
    gray_from_rgb_u8(image, &mut gray)?;
    analyze_gray(&gray, params)
}
