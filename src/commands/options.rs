use anyhow::{Result, bail};

use crate::cli::{Cli, OptionsArgs};
use crate::filter::{Pick, Selection, options_for};
use crate::hierarchy::Level;
use crate::map::read_geojson_file;

pub fn run(cli: &Cli, args: &OptionsArgs) -> Result<()> {
    let Some(level) = Level::from_depth(args.level) else {
        bail!("level must be 1 (unit), 2 (desk) or 3 (analyst)");
    };

    let features = read_geojson_file(&args.input, &args.code_key)?;
    if cli.verbose > 0 {
        eprintln!("[options] {} features from {}", features.len(), args.input.display());
    }

    let mut selection = Selection::default();
    selection.set(Level::Unit, Pick::parse(&args.unit));
    selection.set(Level::Desk, Pick::parse(&args.desk));

    for option in options_for(level, &features, &selection) {
        println!("{option}");
    }
    Ok(())
}
