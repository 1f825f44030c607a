#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// foreground boundary extraction module.
pub mod contour;

/// utilities to draw on images.
pub mod draw;

/// binary morphology module.
pub mod morphology;

/// module containing parallelization utilities.
pub mod parallel;

/// topological thinning module.
pub mod skeleton;

/// operations to threshold images.
pub mod threshold;

/// skeleton topology classification module.
pub mod topology;

/// crack width estimation module.
pub mod width;
