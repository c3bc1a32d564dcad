use clap::Parser;
use std::time::Duration;
use term_main_support::{AnimateSettings, DEFAULT_GENERATIONS, DEFAULT_TIME_STEP_MILLIS};

const DEFAULT_WIDTH: u32 = 10;
const DEFAULT_HEIGHT: u32 = 10;
const DEFAULT_DENSITY: u32 = 25;

/// Conway's Game of Life on a wrapping grid, drawn in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The width of the board.
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,
    /// The height of the board.
    #[arg(
        long,
        value_name = "CELLS",
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: u32,
    /// The percentage of cells to start as alive.
    #[arg(
        long,
        value_name = "PERCENT",
        default_value_t = DEFAULT_DENSITY,
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub density: u32,
    /// How many milliseconds to wait between generations.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = DEFAULT_TIME_STEP_MILLIS)]
    pub delay: u64,
    /// How many generations to run.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,
    /// Seed for the initial layout. Random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn animate_settings(&self) -> AnimateSettings {
        AnimateSettings {
            generations: self.generations,
            time_step: Duration::from_millis(self.delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("conway-life-term").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
        assert_eq!(config.density, 25);
        assert_eq!(config.delay, 1000);
        assert_eq!(config.generations, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn explicit_values() {
        let config = parse(&[
            "--width", "40", "--height", "20", "--density", "50", "--delay", "0",
            "--generations", "3", "--seed", "42",
        ])
        .unwrap();
        assert_eq!((config.width, config.height), (40, 20));
        assert_eq!(config.density, 50);
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.animate_settings(),
            AnimateSettings {
                generations: 3,
                time_step: Duration::ZERO,
            }
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        let error = parse(&["--width", "0"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
        let error = parse(&["--height", "0"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_density_over_100() {
        let error = parse(&["--density", "101"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
        assert!(parse(&["--density", "100"]).is_ok());
    }

    #[test]
    fn rejects_negative_counts() {
        assert!(parse(&["--generations", "-1"]).is_err());
        assert!(parse(&["--delay", "-5"]).is_err());
    }
}
