//! Sphere tracing through a signed-distance field.
//!
//! The field value at a point is a safe step size: it can never overshoot
//! the nearest surface, so the march advances by exactly the sampled
//! distance each iteration.

use crate::config::RenderSettings;
use crate::field::DistanceField;
use crate::ray::Ray;

/// March a ray through the field and return the hit distance, if any.
///
/// Maintains an accumulated travel distance starting at zero. Each
/// iteration samples the field at the current point; a sample inside
/// `hit_epsilon` is a hit and yields the accumulated distance (a first
/// sample already within epsilon yields `Some(0.0)`). Otherwise the
/// march advances by the sampled distance. A ray that travels past
/// `max_distance` or exhausts `max_steps` iterations without converging
/// yields `None`; the two outcomes are deliberately not distinguished.
///
/// O(max_steps) field evaluations per call, nothing else bounds it.
pub fn march(ray: &Ray, field: &dyn DistanceField, settings: &RenderSettings) -> Option<f32> {
    let mut depth = 0.0_f32;
    for _ in 0..settings.max_steps {
        let dist = field.distance(ray.at(depth));
        if dist < settings.hit_epsilon {
            return Some(depth);
        }
        depth += dist;
        if depth > settings.max_distance {
            break;
        }
    }
    None
}
