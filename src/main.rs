use clap::Parser;
use anyhow::Result;

use gravitation::{scenario, viewer, Settings};

fn main() -> Result<()> {
    let settings = Settings::parse();
    let field = scenario::from_settings(&settings)?;

    viewer::run(settings, field);

    Ok(())
}
