use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Territory dashboard core (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "territory-map", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List dropdown options for one level under a selection
    Options(OptionsArgs),

    /// Resolve the active subset and print its map-fit view
    Fit(FitArgs),

    /// Decompose every feature's hierarchy code
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Input GeoJSON feature collection
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Level to list options for (1 = unit, 2 = desk, 3 = analyst)
    #[arg(short, long)]
    pub level: u8,

    /// Unit pick ("all" for no restriction)
    #[arg(long, default_value = "all")]
    pub unit: String,

    /// Desk pick ("all" for no restriction)
    #[arg(long, default_value = "all")]
    pub desk: String,

    /// Property key holding the hierarchy code
    #[arg(long, default_value = crate::map::DEFAULT_CODE_KEY)]
    pub code_key: String,
}

#[derive(Args, Debug)]
pub struct FitArgs {
    /// Input GeoJSON feature collection
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Unit pick ("all" for no restriction)
    #[arg(long, default_value = "all")]
    pub unit: String,

    /// Desk pick ("all" for no restriction)
    #[arg(long, default_value = "all")]
    pub desk: String,

    /// Analyst pick ("all" for no restriction)
    #[arg(long, default_value = "all")]
    pub analyst: String,

    /// Property key holding the hierarchy code
    #[arg(long, default_value = crate::map::DEFAULT_CODE_KEY)]
    pub code_key: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input GeoJSON feature collection
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Property key holding the hierarchy code
    #[arg(long, default_value = crate::map::DEFAULT_CODE_KEY)]
    pub code_key: String,
}
