//! Glint command line renderer.
//!
//! Usage: `glint [config.json|-|quick] [scene] [output_stem]`
//!
//! Writes `<output_stem>.ppm` and `<output_stem>.png`. Pass `-` for the
//! config to use the defaults, or `quick` for the low-sample preset. A config
//! file literally named `quick` has to be given as `./quick`. Log verbosity
//! follows `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_math::{Point3, Vec3};
use glint_renderer::{render, save_png, save_ppm, Camera, RenderConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_OUTPUT_STEM: &str = "output/render";

/// Settings gathered from the command line.
#[derive(Debug)]
struct Options {
    config: RenderConfig,
    scene: Scene,
    output_stem: PathBuf,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let config = match args.first().map(String::as_str) {
        None | Some("-") => RenderConfig::default(),
        Some("quick") => RenderConfig::quick(),
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load render config from {}", path))?,
    };

    let scene = match args.get(1) {
        Some(name) => name.parse::<Scene>()?,
        None => Scene::default(),
    };

    let output_stem = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_STEM));

    if args.len() > 3 {
        log::warn!("Ignoring {} extra argument(s)", args.len() - 3);
    }

    Ok(Options {
        config,
        scene,
        output_stem,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Options {
        config,
        scene,
        output_stem,
    } = parse_args(&args)?;

    log::info!("Glint path tracer");
    log::info!("Scene: {}", scene);

    let world = scene.build();
    let camera = Camera::new(
        Point3::ZERO,
        Point3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        90.0,
        config.aspect_ratio,
    );

    // Single random stream for the whole render
    let mut rng = match config.seed {
        Some(seed) => {
            log::info!("Seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let image = render(&camera, &world, &config, &mut rng);

    if let Some(dir) = output_stem.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let ppm_path = with_extension(&output_stem, "ppm");
    save_ppm(&image, &ppm_path)
        .with_context(|| format!("Failed to write {}", ppm_path.display()))?;

    let png_path = with_extension(&output_stem, "png");
    save_png(&image, &png_path)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;

    log::info!("Render complete");
    Ok(())
}

fn with_extension(stem: &Path, extension: &str) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.config, RenderConfig::default());
        assert_eq!(options.scene, Scene::Demo);
        assert_eq!(options.output_stem, PathBuf::from(DEFAULT_OUTPUT_STEM));
    }

    #[test]
    fn test_quick_preset_and_scene() {
        let options = parse_args(&args(&["quick", "simple", "out/test"])).unwrap();
        assert_eq!(options.config, RenderConfig::quick());
        assert_eq!(options.scene, Scene::Simple);
        assert_eq!(options.output_stem, PathBuf::from("out/test"));
    }

    #[test]
    fn test_unknown_scene_is_an_error() {
        let err = parse_args(&args(&["-", "teapot"])).unwrap_err();
        assert!(err.to_string().contains("teapot"));
    }

    #[test]
    fn test_missing_config_file_has_context() {
        let err = parse_args(&args(&["/nonexistent/glint.json"])).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/glint.json"));
    }

    #[test]
    fn test_quick_path_is_loaded_as_a_file() {
        let err = parse_args(&args(&["./quick"])).unwrap_err();
        assert!(err.to_string().contains("./quick"));
    }

    #[test]
    fn test_with_extension_keeps_dots_in_stem() {
        assert_eq!(
            with_extension(Path::new("out/render.v2"), "png"),
            PathBuf::from("out/render.v2.png")
        );
    }
}
