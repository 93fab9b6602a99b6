use backend::error::log_error;
use backend::presenter::present_and_hold;
use backend::renderer::Renderer;
use backend::scene::Scene;
use backend::system::System;
use clap::Parser;
use std::process::ExitCode;

mod config;

use config::{Cli, SceneConfig};

/// Runs the whole sequence. Every handle is a local, so an early return
/// drops the textures, then the renderer and its window, then SDL itself.
fn run(config: &SceneConfig) -> backend::Result<()> {
    let system = System::init()?;
    let window = system.create_window(&config.window)?;
    let mut renderer = Renderer::new(window)?;
    let texture_creator = renderer.texture_creator();
    let scene = Scene::load(&texture_creator, &config.background, &config.foreground)?;

    let window_size = renderer.window_size();
    let report = scene.compose(&mut renderer, window_size);
    if report.failed > 0 {
        log::warn!("{} of {} draws failed", report.failed, report.draws);
    }
    present_and_hold(&mut renderer, config.hold);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let config = SceneConfig::from(cli);
    log::debug!("{config:?}");
    match run(&config) {
        Ok(()) => {
            log::info!("done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(path) = e.path() {
                log::debug!("failing asset {path:?}");
            }
            log_error(&mut std::io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}
