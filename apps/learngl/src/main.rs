mod app;
mod scene;
mod settings;
mod shaders;
mod tutorials;

use anyhow::Result;
use app::App;
use clap::Parser;
use settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tutorials::Tutorial;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "learngl", about = "Run a LearnOpenGL tutorial program")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Texture directory, overriding the settings file
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Directory of GLSL files that replace the built-in shaders
    #[arg(long)]
    shader_dir: Option<PathBuf>,

    /// Disable vertical sync
    #[arg(long)]
    no_vsync: bool,

    /// Tutorial to run
    #[arg(value_enum)]
    tutorial: Tutorial,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(assets) = &self.assets {
            settings.assets = assets.clone();
        }
        if let Some(dir) = &self.shader_dir {
            settings.shader_dir = Some(dir.clone());
        }
        if self.no_vsync {
            settings.window.vsync = false;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let settings = cli.settings()?;
    tracing::info!(tutorial = ?cli.tutorial, assets = %settings.assets.display(), "learngl starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cli.tutorial, settings);
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
