use crate::config::{Config, InvalidConfig};
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const HELP: &str = concat!(
    "Usage: gridsnake [<options>]\n",
    "\n",
    "Play Snake on a fixed grid in the terminal\n",
    "\n",
    "Options:\n",
    "  --config <path>            Read configuration from the given file\n",
    "  --width <cells>            Width of the playing field\n",
    "  --height <cells>           Height of the playing field\n",
    "  --speed <ticks/sec>        Initial speed of the snake\n",
    "  --high-score-file <path>   Store the high score in the given file\n",
    "  --log-file <path>          Write log messages to the given file\n",
    "  -v, --verbose              Also log debug messages\n",
    "  -h, --help                 Display this help message and exit\n",
    "  -V, --version              Show the program version and exit\n",
    "\n",
    "Controls: arrow keys or WASD to steer, P to pause, R to restart after a\n",
    "game over, Q or Esc to quit\n",
);

/// What the program was asked to do on the command line
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                Arg::Short('v') | Arg::Long("verbose") => args.verbose = true,
                Arg::Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Arg::Long("width") => args.width = Some(parser.value()?.parse()?),
                Arg::Long("height") => args.height = Some(parser.value()?.parse()?),
                Arg::Long("speed") => args.speed = Some(parser.value()?.parse()?),
                Arg::Long("high-score-file") => {
                    args.high_score_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

/// Options for a game session
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file given with `--config`.  Unlike the default file, it
    /// must exist.
    pub(crate) config: Option<PathBuf>,
    pub(crate) verbose: bool,
    width: Option<u16>,
    height: Option<u16>,
    speed: Option<f64>,
    high_score_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Overwrite values in `config` with those given on the command line and
    /// check that the result is still usable
    pub(crate) fn apply(&self, config: &mut Config) -> Result<(), InvalidConfig> {
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(speed) = self.speed {
            config.speed.initial = speed;
        }
        if let Some(ref p) = self.high_score_file {
            config.files.high_score_file = Some(p.clone());
        }
        if let Some(ref p) = self.log_file {
            config.files.log_file = Some(p.clone());
        }
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Grid;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).ok(), Some(Cli::Run(Arguments::default())));
    }

    #[test]
    fn all_args() {
        let cli = parse(&[
            "--config",
            "/etc/gs.toml",
            "--width=12",
            "--height",
            "9",
            "--speed",
            "7.5",
            "--high-score-file",
            "hs.json",
            "--log-file",
            "gs.log",
            "-v",
        ])
        .expect("arguments should parse");
        assert_eq!(
            cli,
            Cli::Run(Arguments {
                config: Some(PathBuf::from("/etc/gs.toml")),
                verbose: true,
                width: Some(12),
                height: Some(9),
                speed: Some(7.5),
                high_score_file: Some(PathBuf::from("hs.json")),
                log_file: Some(PathBuf::from("gs.log")),
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Cli::Help)]
    #[case(&["--help"], Cli::Help)]
    #[case(&["--width", "10", "--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--version"], Cli::Version)]
    fn info_flags(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).ok(), Some(cli));
    }

    #[rstest]
    #[case(&["--width"])]
    #[case(&["--width", "wide"])]
    #[case(&["--height", "-3"])]
    #[case(&["--speed", "fast"])]
    #[case(&["--frobnicate"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn overrides_apply() {
        let Ok(Cli::Run(args)) = parse(&["--width", "10", "--speed", "2", "--log-file", "x.log"])
        else {
            panic!("arguments should parse");
        };
        let mut config = Config::default();
        assert_eq!(args.apply(&mut config), Ok(()));
        assert_eq!(config.grid, Grid::new(10, 30));
        assert_eq!(config.speed.initial.to_bits(), 2.0f64.to_bits());
        assert_eq!(config.files.log_file, Some(PathBuf::from("x.log")));
        assert_eq!(config.files.high_score_file, None);
    }

    #[test]
    fn overrides_are_validated() {
        let Ok(Cli::Run(args)) = parse(&["--width", "3"]) else {
            panic!("arguments should parse");
        };
        let mut config = Config::default();
        assert_eq!(args.apply(&mut config), Err(InvalidConfig::GridWidth(3)));
    }

    #[test]
    fn oversized_overrides_are_rejected() {
        let Ok(Cli::Run(args)) = parse(&["--width", "65535"]) else {
            panic!("arguments should parse");
        };
        let mut config = Config::default();
        config.display.cell_size = 100_000;
        assert_eq!(args.apply(&mut config), Err(InvalidConfig::GridWidth(65535)));

        let Ok(Cli::Run(args)) = parse(&["--width", "500", "--height", "500"]) else {
            panic!("arguments should parse");
        };
        let mut config = Config::default();
        config.display.cell_size = 10_000_000;
        assert_eq!(args.apply(&mut config), Err(InvalidConfig::ScreenSize));
    }
}
