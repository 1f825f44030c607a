/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Images have different sizes ({0}x{1} != {2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the image has no pixels.
    #[error("Image has zero area ({0}x{1})")]
    ZeroArea(usize, usize),

    /// Error when accessing a pixel out of bounds.
    #[error("Pixel index out of bounds ({0}, {1}, {2})")]
    PixelIndexOutOfBounds(usize, usize, usize),
}
