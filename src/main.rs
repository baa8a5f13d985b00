use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use fastrand::Rng;
use log::{info, LevelFilter};

use raytrace::{ppm, render_frame, Camera, RenderSettings, Scene};

use crate::cli::Args;

mod cli;

fn init_logger(level: LevelFilter) {
    // stdout may carry the image
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let height = RenderSettings::height_for(args.width, args.aspect_ratio)?;
    let settings = RenderSettings::new(args.width, height, args.samples, args.max_depth, args.seed)?;

    let mut rng = Rng::with_seed(args.seed);
    let scene = Scene::build(args.scene.into(), settings.aspect_ratio(), &mut rng);
    info!(target: "app", "Built {:?} scene with {} primitives", args.scene, scene.world.primitive_count());

    let camera = Camera::new(&scene.camera).context("scene camera")?;
    let sums = render_frame(&camera, &scene.world, &settings);
    let image = ppm::encode(&sums, settings.samples_per_pixel());

    let format = args.format.into();
    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ppm::write(BufWriter::new(file), &image, format)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(target: "app", "Wrote {}", path.display());
        }
        None => {
            ppm::write(BufWriter::new(io::stdout().lock()), &image, format).context("writing to stdout")?;
        }
    }

    info!(target: "app", "Done.");
    Ok(())
}
