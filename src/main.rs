use clap::Parser;
use log::info;

mod camera;
mod cli;
mod config;
mod field;
mod logger;
mod marcher;
mod output;
mod ray;
mod shading;
mod vec4;

use camera::Camera;
use cli::Args;
use config::{RenderSettings, CAMERA_POSITION, IMAGE_HEIGHT, IMAGE_WIDTH, SPHERE_RADIUS};
use field::HyperSphere;
use logger::init_logger;
use output::{output_extension, save_image_as_png, save_image_as_ppm};
use vec4::Vec4;

/// Create the fixed scene: a unit hypersphere at the 4D origin
fn create_scene() -> HyperSphere {
    HyperSphere::new(Vec4::ZERO, SPHERE_RADIUS)
}

/// Create the fixed camera for the single frame this program renders
fn create_camera() -> Camera {
    Camera::new(IMAGE_WIDTH, IMAGE_HEIGHT, CAMERA_POSITION)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Hypermarch - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}", IMAGE_WIDTH, IMAGE_HEIGHT);

    let sphere = create_scene();
    let camera = create_camera();
    let settings = RenderSettings::default();

    let image = camera.render(&sphere, &settings);

    // Save image based on file extension; sink failures are fatal
    let saved = match output_extension(&args.output).as_deref() {
        Some("ppm") => save_image_as_ppm(&image, &args.output).map_err(|e| e.to_string()),
        Some("png") => save_image_as_png(&image, &args.output).map_err(|e| e.to_string()),
        _ => {
            log::error!(
                "Unsupported file extension '{}'. Only .ppm and .png formats are supported.",
                output_extension(&args.output).unwrap_or_default()
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = saved {
        log::error!("Failed to save image to '{}': {}", args.output, e);
        std::process::exit(1);
    }
}
