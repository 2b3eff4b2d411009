mod app;
mod audio;
mod banner;
mod card;
mod cli;
mod commands;
mod config;
mod controller;
mod effects;
mod input;
mod render;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
