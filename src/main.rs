use anyhow::{bail, Context};
use std::path::PathBuf;

use flowkit::{init_logging, inspect, load_pens, Config, BUILD_DATE, VERSION};

const USAGE: &str = "usage: flowkit <diagram.json> [config.(json|toml)]";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        bail!(USAGE);
    };
    if first == "--version" {
        println!("flowkit {} ({})", VERSION, BUILD_DATE);
        return Ok(());
    }

    let diagram = PathBuf::from(first);
    let config = match args.next() {
        Some(path) => Config::load_from_file(&PathBuf::from(path))?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    if args.next().is_some() {
        bail!(USAGE);
    }

    let pens = load_pens(&diagram)
        .with_context(|| format!("Failed to load diagram {}", diagram.display()))?;
    let report = inspect(&pens, &config);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
