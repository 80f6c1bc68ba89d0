use anyhow::Result;

use crate::cli::{Cli, InspectArgs};
use crate::map::read_geojson_file;

pub fn run(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let features = read_geojson_file(&args.input, &args.code_key)?;
    if cli.verbose > 0 {
        eprintln!("[inspect] {} features from {}", features.len(), args.input.display());
    }

    let mut non_canonical = 0usize;
    println!("code\tunit\tdesk\tanalyst");
    for feature in features.iter() {
        let levels = &feature.levels;
        println!(
            "{}\t{}\t{}\t{}",
            feature.code,
            levels.unit,
            levels.desk.as_deref().unwrap_or("-"),
            levels.analyst.as_deref().unwrap_or("-"),
        );
        if !feature.code.is_canonical() {
            non_canonical += 1;
        }
    }

    if non_canonical > 0 {
        eprintln!("{non_canonical} code(s) deeper than 3 levels");
    }
    Ok(())
}
