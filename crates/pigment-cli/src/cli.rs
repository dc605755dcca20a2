//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Match colors against a paint catalog and resolve paint sets.
#[derive(Parser, Debug)]
#[command(name = "pigment", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML matcher configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a hex color to CIE L*a*b*
    Lab {
        /// Color as RRGGBB or #RRGGBB
        hex: String,
    },

    /// Perceptual distance and similarity between two colors
    DeltaE { first: String, second: String },

    /// Rank catalog paints against one or more target colors
    Match {
        /// Catalog JSON file (array of paints)
        #[arg(long)]
        catalog: PathBuf,

        /// Target colors
        #[arg(required = true)]
        hex: Vec<String>,

        /// Results per target (overrides config)
        #[arg(short = 'n', long)]
        max: Option<usize>,

        /// Only match paints of this brand (repeatable)
        #[arg(long = "brand", value_name = "BRAND")]
        brands: Vec<String>,

        /// Drop matches farther than this ΔE
        #[arg(long)]
        max_delta_e: Option<f64>,
    },

    /// Match colors tagged with roles, e.g. `#0D407F:base`
    Roles {
        /// Catalog JSON file (array of paints)
        #[arg(long)]
        catalog: PathBuf,

        /// Colors as HEX or HEX:ROLE
        #[arg(required = true)]
        colors: Vec<String>,

        /// Results per color (overrides config)
        #[arg(short = 'n', long)]
        per_color: Option<usize>,
    },

    /// Resolve paint set names to catalog entries
    Resolve {
        /// Catalog JSON file (array of paints)
        #[arg(long)]
        catalog: PathBuf,

        /// Paint set JSON file (one set or an array of sets)
        #[arg(long)]
        set: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_match_with_filters() {
        let args = Args::try_parse_from([
            "pigment", "-v", "match", "--catalog", "paints.json", "#FF0000", "00FF00", "-n", "3",
            "--brand", "Citadel", "--brand", "Vallejo",
        ])
        .unwrap();
        assert_eq!(args.verbose, 1);
        match args.command {
            Command::Match {
                hex, max, brands, ..
            } => {
                assert_eq!(hex, ["#FF0000", "00FF00"]);
                assert_eq!(max, Some(3));
                assert_eq!(brands, ["Citadel", "Vallejo"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_match_requires_a_color() {
        assert!(Args::try_parse_from(["pigment", "match", "--catalog", "paints.json"]).is_err());
    }
}
