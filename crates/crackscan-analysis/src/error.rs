use crackscan_image::ImageError;

/// An error type for the analysis pipeline.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    /// The input cannot be interpreted as a valid raster.
    #[error("Invalid input image")]
    InvalidImage(#[from] ImageError),

    /// A scalar parameter is out of its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
