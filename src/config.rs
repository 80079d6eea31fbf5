//! Runtime configuration: environment variables first, then command-line flags.
use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::types::DEFAULT_STRENGTH;

/// Command-line interface of the `treasure-quest` binary.
#[derive(Debug, Parser)]
#[command(name = "treasure-quest")]
#[command(about = "Track down four stolen keys and open the family vault")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Template store file to draw boards from (default: built-in maps)
    #[arg(long, value_name = "PATH")]
    pub maps: Option<PathBuf>,

    /// Starting strength points
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub strength: Option<u32>,

    /// Seed for board generation and bandit attacks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the board without colors
    #[arg(long)]
    pub no_color: bool,

    /// Skip the introduction pages
    #[arg(long)]
    pub skip_intro: bool,

    /// Verbose logging to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the built-in template store to a file
    WriteMaps {
        /// Destination file
        path: PathBuf,
    },
}

/// Settings for a play session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Template store file; `None` uses the built-in set
    pub maps: Option<PathBuf>,
    pub strength: u32,
    /// `None` seeds from entropy
    pub seed: Option<u64>,
    pub color: bool,
    pub skip_intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maps: None,
            strength: DEFAULT_STRENGTH,
            seed: None,
            color: true,
            skip_intro: false,
        }
    }
}

impl GameConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `TREASURE_QUEST_MAPS` - template store file
    /// - `TREASURE_QUEST_STRENGTH` - starting strength (at least 1)
    /// - `TREASURE_QUEST_SEED` - RNG seed
    /// - `NO_COLOR` - any non-empty value disables colors
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] over an arbitrary variable lookup.
    ///
    /// Values that fail to parse are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("TREASURE_QUEST_MAPS").filter(|p| !p.is_empty()) {
            config.maps = Some(PathBuf::from(path));
        }

        if let Some(strength) = parse_var::<u32>(&lookup, "TREASURE_QUEST_STRENGTH") {
            config.strength = strength.max(1);
        }

        if let Some(seed) = parse_var::<u64>(&lookup, "TREASURE_QUEST_SEED") {
            config.seed = Some(seed);
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        config
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.maps {
            self.maps = Some(path.clone());
        }
        if let Some(strength) = cli.strength {
            self.strength = strength;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.no_color {
            self.color = false;
        }
        if cli.skip_intro {
            self.skip_intro = true;
        }
        self
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

/// Log filter directive for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(GameConfig::from_lookup(lookup(&[])), GameConfig::default());
    }

    #[test]
    fn environment_values_are_read() {
        let config = GameConfig::from_lookup(lookup(&[
            ("TREASURE_QUEST_MAPS", "maps.txt"),
            ("TREASURE_QUEST_STRENGTH", "12"),
            ("TREASURE_QUEST_SEED", "99"),
            ("NO_COLOR", "1"),
        ]));
        assert_eq!(config.maps, Some(PathBuf::from("maps.txt")));
        assert_eq!(config.strength, 12);
        assert_eq!(config.seed, Some(99));
        assert!(!config.color);
    }

    #[test]
    fn bad_environment_values_are_ignored() {
        let config = GameConfig::from_lookup(lookup(&[
            ("TREASURE_QUEST_STRENGTH", "lots"),
            ("TREASURE_QUEST_SEED", "-1"),
            ("NO_COLOR", ""),
        ]));
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::from_lookup(lookup(&[("TREASURE_QUEST_STRENGTH", "0")]));
        assert_eq!(config.strength, 1);
    }

    #[test]
    fn flags_override_environment() {
        let env = GameConfig::from_lookup(lookup(&[
            ("TREASURE_QUEST_STRENGTH", "12"),
            ("TREASURE_QUEST_SEED", "99"),
        ]));
        let cli = Cli::try_parse_from([
            "treasure-quest",
            "--strength",
            "40",
            "--no-color",
            "--skip-intro",
        ])
        .unwrap();
        let config = env.with_cli(&cli);
        assert_eq!(config.strength, 40);
        assert_eq!(config.seed, Some(99));
        assert!(!config.color);
        assert!(config.skip_intro);
    }

    #[test]
    fn cli_rejects_zero_strength() {
        assert!(Cli::try_parse_from(["treasure-quest", "--strength", "0"]).is_err());
    }

    #[test]
    fn write_maps_subcommand_and_verbosity() {
        let cli = Cli::try_parse_from(["treasure-quest", "-vv", "write-maps", "out.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::WriteMaps { ref path }) if path == &PathBuf::from("out.txt")));
        assert_eq!(log_level(cli.verbose), "debug");
        assert_eq!(log_level(0), "warn");
    }
}
