//! Command-line options.
//!
//! Everything can also be changed in-game (size presets, regenerate); the
//! options only pick the starting point and make a session reproducible:
//!
//! ```text
//! $ kube_game --variant maze --seed 42 --width 20 --height 12
//! ```
use clap::{Parser, ValueEnum};
use env_logger::Env;

use crate::core::session::Variant;
use crate::core::size::LevelSize;
use crate::error::ConfigError;

/// Command-line name of a game variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Fixed 12x8 board
    Classic,
    /// Generated maze with selectable size
    Maze,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Classic => Variant::Classic,
            VariantArg::Maze => Variant::Maze,
        }
    }
}

/// Roll a die through a maze and reach the finish with the right number on top.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Board to play on
    #[arg(value_enum, long, default_value_t = VariantArg::Maze)]
    pub variant: VariantArg,

    /// Seed for level generation; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial maze width (5-50)
    #[arg(long)]
    pub width: Option<usize>,

    /// Initial maze height (5-40)
    #[arg(long)]
    pub height: Option<usize>,

    /// Disable sound effects
    #[arg(long, default_value_t = false)]
    pub mute: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    pub fn variant(&self) -> Variant {
        self.variant.into()
    }

    /// Starting maze size, falling back to the default for missing dimensions.
    pub fn level_size(&self) -> Result<LevelSize, ConfigError> {
        let default = LevelSize::default();
        LevelSize::new(self.width.unwrap_or(default.width()), self.height.unwrap_or(default.height()))
    }
}

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--debug`.
pub fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["kube_game"]).unwrap();
        assert_eq!(args.variant(), Variant::Maze);
        assert_eq!(args.level_size(), Ok(LevelSize::default()));
        assert!(args.seed.is_none());
        assert!(!args.mute && !args.debug);
    }

    #[test]
    fn test_variant_maps_to_core() {
        let args = Args::try_parse_from(["kube_game", "--variant", "classic", "--seed", "42"]).unwrap();
        assert_eq!(args.variant(), Variant::Classic);
        assert_eq!(args.seed, Some(42));
        assert_eq!(Variant::from(VariantArg::Maze), Variant::Maze);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Args::try_parse_from(["kube_game", "--variant", "hex"]).is_err());
    }

    #[test]
    fn test_out_of_range_size_is_config_error() {
        let args = Args::try_parse_from(["kube_game", "--width", "3"]).unwrap();
        assert!(matches!(args.level_size(), Err(ConfigError::WidthOutOfRange { width: 3, .. })));
        let args = Args::try_parse_from(["kube_game", "--width", "20", "--height", "12"]).unwrap();
        let size = args.level_size().unwrap();
        assert_eq!((size.width(), size.height()), (20, 12));
    }
}
