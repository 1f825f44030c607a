#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use crackscan_image as image;

#[doc(inline)]
pub use crackscan_imgproc as imgproc;

#[doc(inline)]
pub use crackscan_analysis as analysis;
