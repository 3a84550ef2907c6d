//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::dictionary::Variant;

/// Command-line arguments accepted by the `animal-dictionary` binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "animal-dictionary",
    version,
    about = "Browse, search and edit a dictionary of animal names"
)]
pub struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ANIMAL_DICTIONARY_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub no_config: bool,
    #[arg(
        short = 'v',
        long,
        value_enum,
        help = "Choose how names are added (default: split-panel)"
    )]
    pub variant: Option<VariantArg>,
    #[arg(
        short = 's',
        long,
        value_name = "FILE",
        help = "Read names from a file, one per line (default: builtin list)"
    )]
    pub source: Option<PathBuf>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the heading shown above the search box"
    )]
    pub title: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: logging disabled)"
    )]
    pub log_file: Option<PathBuf>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log filter directive, e.g. `debug` (default: info)"
    )]
    pub log_level: Option<String>,
}

/// `--variant` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Move names into a second panel.
    SplitPanel,
    /// Insert the search text into the single list.
    InlineAdd,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::SplitPanel => Variant::SplitPanel,
            VariantArg::InlineAdd => Variant::InlineAdd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_config_and_variant() {
        let cli = CliArgs::try_parse_from([
            "animal-dictionary",
            "--config",
            "a.toml",
            "-c",
            "b.toml",
            "--variant",
            "inline-add",
            "--log-file",
            "dict.log",
        ])
        .expect("valid arguments");

        assert_eq!(cli.config, vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
        assert_eq!(cli.variant, Some(VariantArg::InlineAdd));
        assert_eq!(cli.log_file, Some(PathBuf::from("dict.log")));
        assert!(!cli.no_config);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(CliArgs::try_parse_from(["animal-dictionary", "--variant", "tabs"]).is_err());
    }
}
