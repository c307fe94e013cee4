//! Camera for ray generation and frame rendering.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::config::RenderSettings;
use crate::field::DistanceField;
use crate::marcher::march;
use crate::ray::Ray;
use crate::shading::shade;
use crate::vec4::Vec4;

/// Background intensity for rays that miss the field.
const BACKGROUND: u8 = 0;

/// Fixed-position camera driving the per-pixel march.
///
/// Maps each raster coordinate to an image-plane offset, builds the
/// corresponding ray, and runs the march/shade pipeline. The image plane
/// sits one unit in front of the camera along +z; offsets are normalized
/// by the image height so the aspect ratio is preserved.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Camera position in 4D world space
    pub position: Vec4,
}

impl Camera {
    /// Create a camera at the given position for a fixed-size raster.
    pub fn new(image_width: u32, image_height: u32, position: Vec4) -> Self {
        Self {
            image_width,
            image_height,
            position,
        }
    }

    /// Render the field into an 8-bit RGB frame.
    ///
    /// Every pixel is a pure function of its coordinates and the fixed
    /// scene, so the raster is processed in parallel; the buffer indexes
    /// by (x, y) and preserves row-major output order regardless of
    /// completion order. The render is monochrome: one intensity
    /// replicated across the three channels.
    pub fn render(
        &self,
        field: &dyn DistanceField,
        settings: &RenderSettings,
    ) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        let mut image: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Generating image using {} CPU cores...",
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.image_width * self.image_height) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        // Parallel pixel processing using Rayon
        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            let intensity = self.pixel_intensity(x, y, field, settings);
            *pixel = Rgb([intensity, intensity, intensity]);
            pb.inc(1);
        });

        pb.finish();
        let generation_time = generation_start.elapsed();
        info!("Image generated in {:.2?}", generation_time);

        image
    }

    /// Generate the ray through a pixel.
    ///
    /// Pixel coordinates map to image-plane offsets centered on the
    /// raster, with height as the common normalization denominator.
    fn get_ray(&self, x: u32, y: u32) -> Ray {
        let u = (x as f32 - self.image_width as f32 / 2.0) / self.image_height as f32;
        let v = (y as f32 - self.image_height as f32 / 2.0) / self.image_height as f32;

        // The z component is fixed at 1, so the length is at least 1 and
        // the division is always defined.
        let direction = Vec4::new(0.0, u, v, 1.0);
        let direction = direction * (1.0 / direction.length());

        Ray::new(self.position, direction)
    }

    /// Compute the intensity of one pixel.
    ///
    /// Marches the pixel's ray; on a hit, estimates the surface normal
    /// and shades. A miss, or a hit whose gradient degenerates, yields
    /// the background intensity.
    fn pixel_intensity(
        &self,
        x: u32,
        y: u32,
        field: &dyn DistanceField,
        settings: &RenderSettings,
    ) -> u8 {
        let ray = self.get_ray(x, y);
        let Some(depth) = march(&ray, field, settings) else {
            return BACKGROUND;
        };

        let hit_point = ray.at(depth);
        match field.normal(hit_point, settings.gradient_epsilon) {
            Some(normal) => shade(hit_point, normal, self.position, settings),
            None => BACKGROUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CAMERA_POSITION, IMAGE_HEIGHT, IMAGE_WIDTH, SPHERE_RADIUS};
    use crate::field::HyperSphere;

    fn test_camera() -> Camera {
        Camera::new(IMAGE_WIDTH, IMAGE_HEIGHT, CAMERA_POSITION)
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = test_camera();
        let ray = camera.get_ray(IMAGE_WIDTH / 2, IMAGE_HEIGHT / 2);
        assert_eq!(ray.direction, Vec4::Z);
    }

    #[test]
    fn test_ray_directions_are_unit_length() {
        let camera = test_camera();
        for &(x, y) in &[(0, 0), (799, 0), (0, 599), (799, 599), (123, 456)] {
            let ray = camera.get_ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_center_pixel_hits_above_ambient_floor() {
        let camera = test_camera();
        let sphere = HyperSphere::new(Vec4::ZERO, SPHERE_RADIUS);
        let settings = RenderSettings::default();
        let intensity = camera.pixel_intensity(400, 300, &sphere, &settings);
        // The sphere faces the headlight dead-on at the frame center, so
        // the intensity must exceed the ambient floor (0.15 * 255 ~ 38).
        assert!(intensity as f32 > settings.ambient * 255.0);
    }

    #[test]
    fn test_corner_pixel_is_background() {
        let camera = test_camera();
        let sphere = HyperSphere::new(Vec4::ZERO, SPHERE_RADIUS);
        let settings = RenderSettings::default();
        assert_eq!(camera.pixel_intensity(0, 0, &sphere, &settings), BACKGROUND);
    }
}
