use anyhow::Result;
use clap::Parser;

mod cli;
mod flow;

fn main() -> Result<()> {
    cli::init_logging();
    flow::dispatch(cli::App::parse())
}
