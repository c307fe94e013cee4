//! Render settings and fixed scene constants.
//!
//! The scene is a closed numeric computation: nothing is read from the
//! command line, the environment, or a file. Everything that tunes the
//! march and the shading lives in [`RenderSettings`]; the frame
//! parameters are module constants.

use crate::vec4::Vec4;

/// Image width in pixels.
pub const IMAGE_WIDTH: u32 = 800;
/// Image height in pixels.
pub const IMAGE_HEIGHT: u32 = 600;
/// Camera position in 4D world space.
pub const CAMERA_POSITION: Vec4 = Vec4::new(0.0, 0.0, 0.0, -5.0);
/// Hypersphere radius.
pub const SPHERE_RADIUS: f32 = 1.0;

/// Tuning parameters shared by the ray marcher and the shader.
///
/// Collected into one structure so the magic numbers of the pipeline are
/// named and passed explicitly rather than scattered through the
/// computation. Read-only for the duration of a run.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Surface convergence threshold: a sample closer to the surface
    /// than this counts as a hit.
    pub hit_epsilon: f32,
    /// Perturbation used by the central-difference normal estimator.
    pub gradient_epsilon: f32,
    /// March iteration cap; bounds execution for rays that never
    /// converge.
    pub max_steps: u32,
    /// Accumulated travel distance past which a ray is considered
    /// escaped.
    pub max_distance: f32,
    /// Checkerboard tile density along each UV axis.
    pub checker_tiles: u32,
    /// Minimum lighting floor added to the diffuse term.
    pub ambient: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            hit_epsilon: 0.001,
            gradient_epsilon: 0.001,
            max_steps: 100,
            max_distance: 100.0,
            checker_tiles: 8,
            ambient: 0.15,
        }
    }
}
