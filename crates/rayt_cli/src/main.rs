use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayt_core::{write_bmp, RenderSettings, Tonemap};
use rayt_renderer::{render, FilterChain, RenderConfig};

mod scenes;

use scenes::SceneKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TonemapArg {
    Clamp,
    Reinhard,
}

impl From<TonemapArg> for Tonemap {
    fn from(arg: TonemapArg) -> Self {
        match arg {
            TonemapArg::Clamp => Tonemap::Clamp,
            TonemapArg::Reinhard => Tonemap::Reinhard,
        }
    }
}

/// Render a demo scene to a BMP file
#[derive(Debug, Parser)]
#[command(name = "rayt", version, about = "Offline Monte Carlo path tracer")]
struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::TwoSpheres)]
    scene: SceneKind,

    /// JSON settings file, flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Samples per pixel
    #[arg(short, long)]
    samples: Option<u32>,

    /// Maximum scatter depth
    #[arg(long)]
    max_depth: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (default: one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    #[arg(long)]
    gamma: Option<f32>,

    #[arg(long, value_enum)]
    tonemap: Option<TonemapArg>,

    /// Image used by the earth scene
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Output BMP path
    #[arg(short, long, default_value = "render.bmp")]
    output: PathBuf,
}

impl Args {
    /// Defaults, then the settings file, then flags.
    fn settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::from_file(path)?,
            None => RenderSettings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(samples) = self.samples {
            settings.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if self.threads.is_some() {
            settings.threads = self.threads;
        }
        if let Some(gamma) = self.gamma {
            settings.gamma = gamma;
        }
        if let Some(tonemap) = self.tonemap {
            settings.tonemap = tonemap.into();
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!("Starting rayt: scene {:?} -> {}", args.scene, args.output.display());

    let settings = args.settings().context("invalid render settings")?;

    let scene = scenes::build(args.scene, settings.aspect_ratio(), args.texture.as_deref())?;

    let config = RenderConfig::from(&settings);
    let filters = FilterChain::for_display(settings.gamma, settings.tonemap);
    let output = render(&scene, &config, filters)?;

    if !output.stats.failed_rows.is_empty() {
        log::warn!("Rows left black: {:?}", output.stats.failed_rows);
    }

    write_bmp(
        &args.output,
        output.image.width(),
        output.image.height(),
        output.image.pixels(),
    )
    .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "rayt", "--width", "64", "--height", "32", "-s", "8", "--seed", "9", "-j", "3",
            "--tonemap", "reinhard",
        ]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.width, 64);
        assert_eq!(settings.height, 32);
        assert_eq!(settings.samples_per_pixel, 8);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.threads, Some(3));
        assert_eq!(settings.tonemap, Tonemap::Reinhard);
        assert_eq!(settings.max_depth, 50);
        assert_eq!(args.scene, SceneKind::TwoSpheres);
        assert_eq!(args.output, PathBuf::from("render.bmp"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("rayt_cli_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "width": 40, "height": 20, "seed": 5 }"#).unwrap();

        let args = Args::parse_from([
            "rayt",
            "--config",
            path.to_str().unwrap(),
            "--seed",
            "11",
            "--scene",
            "cornell",
        ]);
        let settings = args.settings();
        std::fs::remove_file(&path).ok();
        let settings = settings.unwrap();

        assert_eq!(settings.width, 40);
        assert_eq!(settings.height, 20);
        assert_eq!(settings.seed, 11);
        assert_eq!(args.scene, SceneKind::Cornell);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args::parse_from(["rayt", "--samples", "0"]);
        assert!(args.settings().is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
