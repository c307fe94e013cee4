//! Surface shading: headlight lighting and checkerboard texturing.
//!
//! The light source is colocated with the camera (headlight model), so
//! every visible point is lit from the viewing direction. The texture is
//! a two-tone checkerboard laid out over an equirectangular projection of
//! the hit point's spatial coordinates.

use crate::config::RenderSettings;
use crate::vec4::Vec4;

use std::f32::consts::PI;

/// Base intensity of even checker tiles.
pub const DARK_TILE: u8 = 40;
/// Base intensity of odd checker tiles.
pub const LIGHT_TILE: u8 = 220;

/// Project the spatial (x, y, z) part of a surface point onto
/// equirectangular UV coordinates, each in [0, 1].
///
/// The t component is ignored: the texture wraps the 3D silhouette of the
/// hypersphere. The latitude term feeds `asin`, whose argument is clamped
/// to [-1, 1] first since floating-point drift at the poles can push the
/// ratio slightly out of domain. A point with zero spatial magnitude has
/// no defined projection and maps to (0.5, 0.5).
pub fn sphere_uv(p: Vec4) -> (f32, f32) {
    let r = p.xyz_length();
    if r <= 0.0 {
        return (0.5, 0.5);
    }
    let u = 0.5 + p.y.atan2(p.x) / (2.0 * PI);
    let v = 0.5 - (p.z / r).clamp(-1.0, 1.0).asin() / PI;
    (u, v)
}

/// Select the checker base intensity for a UV coordinate.
///
/// Tiles the unit square `tiles` times along each axis; adjacent tiles
/// alternate between [`DARK_TILE`] (even parity) and [`LIGHT_TILE`]
/// (odd parity).
pub fn checker_base(u: f32, v: f32, tiles: u32) -> u8 {
    let n = tiles as f32;
    let parity = ((u * n).floor() as i64 + (v * n).floor() as i64) % 2;
    if parity == 1 {
        LIGHT_TILE
    } else {
        DARK_TILE
    }
}

/// Compute the achromatic intensity for a surface hit.
///
/// Lambertian diffuse term against the headlight direction, clamped
/// non-negative, plus the ambient floor; the sum saturates at 1.0 before
/// scaling the checker base color. The result is truncated to an integer
/// channel value, so output lies in [0, base].
///
/// A hit point coincident with the camera has no defined light direction;
/// the diffuse term then falls back to zero and only the ambient floor
/// contributes.
pub fn shade(hit_point: Vec4, normal: Vec4, camera: Vec4, settings: &RenderSettings) -> u8 {
    let diffuse = match (camera - hit_point).try_normalize() {
        Some(light_dir) => normal.dot(light_dir).max(0.0),
        None => 0.0,
    };
    let lighting = (diffuse + settings.ambient).min(1.0);

    let (u, v) = sphere_uv(hit_point);
    let base = checker_base(u, v, settings.checker_tiles);

    (base as f32 * lighting) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_uv_front_pole() {
        // Point facing the camera on the unit sphere: x = 0, y = 0,
        // z = -1 gives v = 1.0 (asin(-1) = -pi/2) and u = 0.5.
        let (u, v) = sphere_uv(Vec4::new(0.0, 0.0, 0.0, -1.0));
        assert!((u - 0.5).abs() < 1e-6);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_uv_in_range() {
        for &p in &[
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, -1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.3, -0.4, 0.5),
            Vec4::new(2.0, 0.0, 0.7, -0.7),
        ] {
            let (u, v) = sphere_uv(p);
            assert!((0.0..=1.0).contains(&u), "u out of range for {:?}", p);
            assert!((0.0..=1.0).contains(&v), "v out of range for {:?}", p);
        }
    }

    #[test]
    fn test_sphere_uv_degenerate_spatial_part() {
        // Zero spatial magnitude has no projection; fixed fallback.
        let (u, v) = sphere_uv(Vec4::new(3.0, 0.0, 0.0, 0.0));
        assert_eq!((u, v), (0.5, 0.5));
    }

    #[test]
    fn test_checker_parity_flips_across_one_tile() {
        // Shifting u by exactly one tile width at fixed v flips the tile.
        let tiles = 8;
        let tile = 1.0 / tiles as f32;
        let (u, v) = (0.3, 0.6);
        let a = checker_base(u, v, tiles);
        let b = checker_base(u + tile, v, tiles);
        assert_ne!(a, b);
        assert!(a == DARK_TILE || a == LIGHT_TILE);
        assert!(b == DARK_TILE || b == LIGHT_TILE);
    }

    #[test]
    fn test_checker_parity_flips_across_one_tile_in_v() {
        let tiles = 8;
        let tile = 1.0 / tiles as f32;
        let a = checker_base(0.1, 0.1, tiles);
        let b = checker_base(0.1, 0.1 + tile, tiles);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shade_facing_camera_saturates() {
        let settings = RenderSettings::default();
        let camera = Vec4::new(0.0, 0.0, 0.0, -5.0);
        let hit = Vec4::new(0.0, 0.0, 0.0, -1.0);
        let normal = -Vec4::Z;
        // Normal points straight at the light: diffuse = 1, so the
        // multiplier saturates and the full base color comes through.
        let intensity = shade(hit, normal, camera, &settings);
        let (u, v) = sphere_uv(hit);
        assert_eq!(intensity, checker_base(u, v, settings.checker_tiles));
    }

    #[test]
    fn test_shade_back_facing_gets_ambient_only() {
        let settings = RenderSettings::default();
        let camera = Vec4::new(0.0, 0.0, 0.0, -5.0);
        let hit = Vec4::new(0.0, 0.0, 0.0, -1.0);
        // Normal pointing away from the light clamps diffuse to zero.
        let intensity = shade(hit, Vec4::Z, camera, &settings);
        let (u, v) = sphere_uv(hit);
        let base = checker_base(u, v, settings.checker_tiles);
        assert_eq!(intensity, (base as f32 * settings.ambient) as u8);
    }

    #[test]
    fn test_shade_bounded_by_base_color() {
        let settings = RenderSettings::default();
        let camera = Vec4::new(0.0, 0.0, 0.0, -5.0);
        let hit = Vec4::new(0.0, 0.6, 0.0, -0.8);
        let normal = hit.try_normalize().unwrap();
        let intensity = shade(hit, normal, camera, &settings);
        assert!(intensity <= LIGHT_TILE);
    }
}
