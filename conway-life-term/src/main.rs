#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod conway;

use anyhow::Context;
use clap::Parser;
use config::Config;
use conway::{population_count, ConwayWorld};
use std::io;
use term_main_support::animate;
use world_grid::Random;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    let population = population_count(config.density, config.width, config.height);
    log::info!(
        "seeding {}x{} world with {} live cells",
        config.width,
        config.height,
        population
    );
    let rand = config.seed.map_or_else(Random::new, Random::from_seed);
    let mut world = ConwayWorld::new(config.width, config.height, population, rand)?;

    let mut stdout = io::stdout().lock();
    animate(&mut world, &config.animate_settings(), &mut stdout)
        .context("failed to draw to stdout")
}
