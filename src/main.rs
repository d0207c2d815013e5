mod app;
mod consts;
mod engine;
mod highscore;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::consts::{HIGH_SCORE_FILE, LOG_FILE};
use crate::engine::GameEngine;
use crate::highscore::FileStore;
use crate::render::Renderer;
use crate::term::TermManager;

fn main() -> Result<()> {
    // Stdout belongs to the game, so logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE).with_context(|| format!("Failed to create {}", LOG_FILE))?,
    )
    .context("Failed to initialize logger")?;

    info!("Starting snake");

    let mut engine = GameEngine::new(FileStore::new(HIGH_SCORE_FILE));
    let mut renderer = Renderer::new(TermManager::new()?)?;

    app::run(&mut engine, &mut renderer)
}
