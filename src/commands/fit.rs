use anyhow::Result;

use crate::cli::{Cli, FitArgs};
use crate::filter::{FitView, Pick, Selection, resolve_active_subset};
use crate::hierarchy::Level;
use crate::map::read_geojson_file;

pub fn run(cli: &Cli, args: &FitArgs) -> Result<()> {
    let features = read_geojson_file(&args.input, &args.code_key)?;

    let mut selection = Selection::default();
    selection.set(Level::Unit, Pick::parse(&args.unit));
    selection.set(Level::Desk, Pick::parse(&args.desk));
    selection.set(Level::Analyst, Pick::parse(&args.analyst));

    let (subset_len, bounds) = match resolve_active_subset(&features, &selection) {
        Ok((subset, bounds)) => (subset.len(), bounds),
        Err(err) => {
            // Fall back to the full extent rather than leaving the caller
            // without a viewport.
            log::warn!("{err}; falling back to the full collection");
            let (subset, bounds) = resolve_active_subset(&features, &Selection::default())?;
            (subset.len(), bounds)
        }
    };

    if cli.verbose > 0 {
        eprintln!("[fit] {} of {} features in view", subset_len, features.len());
    }
    println!("{}", serde_json::to_string_pretty(&FitView::from_bounds(bounds))?);
    Ok(())
}
