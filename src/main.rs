use std::path::PathBuf;

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;
use fixture_sandbox::{SandboxConfig, SandboxPlugin};

#[derive(Parser, Debug)]
#[command(about = "Add and edit body fixtures against a live rapier world", version)]
struct Args {
    /// RON config; missing or invalid files fall back to defaults.
    #[arg(long, default_value = "assets/config/sandbox.ron")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (cfg, load_error) = SandboxConfig::load_or_default(&args.config);
    if cfg.physics.pixels_per_meter <= 0.0 {
        bail!(
            "{}: physics.pixels_per_meter must be > 0 (got {})",
            args.config.display(),
            cfg.physics.pixels_per_meter
        );
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));
    // logging is only available once DefaultPlugins are in
    if let Some(e) = load_error {
        warn!("{}: {e}; using default config", args.config.display());
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }
    app.insert_resource(cfg).add_plugins(SandboxPlugin);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("sandbox exited with code {code}"),
    }
}
