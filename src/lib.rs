//! Hypermarch: a 4D hypersphere renderer
//!
//! Sphere-traces a signed-distance field in 4D Euclidean space, shades
//! hits with headlight diffuse lighting and a checkerboard texture, and
//! writes the frame as plain-text PPM or PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod field;
pub mod marcher;
pub mod output;
pub mod ray;
pub mod shading;
pub mod vec4;
