//! Headless gallery runner.
//!
//! Loads the catalog of a Firebase Storage bucket, applies a layout, runs
//! the camera animation to rest and prints the resulting scene as JSON.
//!
//! ```text
//! photosphere [bucket] [sphere|grid] [options.toml]
//! ```
//!
//! Arguments may come in any order. Without a bucket argument the
//! `[catalog] bucket` entry of the options file is used.

use std::io::{self, Write};
use std::path::Path;

use glam::Vec3;
use photosphere::catalog::FirebaseStorage;
use photosphere::layout::LayoutKind;
use photosphere::options::GalleryOptions;
use photosphere::scene::{GroupTransform, VisualNode};
use photosphere::{Gallery, GalleryCommand, GalleryError};
use serde::Serialize;

/// Simulated frame length.
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Serialize)]
struct SceneDump<'a> {
    layout: LayoutKind,
    eye: Vec3,
    target: Vec3,
    group: GroupTransform,
    nodes: &'a [VisualNode],
}

#[derive(Debug, Default)]
struct Args {
    bucket: Option<String>,
    layout: LayoutKind,
    options_path: Option<String>,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        for arg in args {
            if let Ok(layout) = arg.parse::<LayoutKind>() {
                parsed.layout = layout;
            } else if arg.ends_with(".toml") {
                parsed.options_path = Some(arg);
            } else if parsed.bucket.is_none() {
                parsed.bucket = Some(arg);
            } else {
                return Err(format!("unexpected argument {arg}"));
            }
        }
        Ok(parsed)
    }
}

fn run(args: Args) -> Result<(), GalleryError> {
    let mut options = match &args.options_path {
        Some(path) => GalleryOptions::load(Path::new(path))?,
        None => GalleryOptions::default(),
    };
    if let Some(bucket) = args.bucket {
        options.catalog.bucket = bucket;
    }
    let storage = FirebaseStorage::from_options(&options.catalog)?;
    let layout = args.layout;

    let mut gallery = Gallery::new(options);
    gallery.mount();
    gallery.load_catalog(&storage);
    if !gallery.state().is_ready() {
        return Err(GalleryError::Fetch(format!(
            "catalog for {} is unavailable",
            storage.bucket()
        )));
    }

    gallery.execute(GalleryCommand::SetLayout { layout });
    let mut frames = 0_u32;
    while gallery.tick(FRAME_DT) {
        frames += 1;
    }
    log::info!("settled after {frames} frames");

    let dump = SceneDump {
        layout: gallery.state().layout,
        eye: gallery.camera().eye,
        target: gallery.camera().target,
        group: gallery.group_transform(),
        nodes: gallery.nodes(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &dump).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: photosphere [bucket] [sphere|grid] [options.toml]"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
