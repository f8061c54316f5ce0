use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

static USAGE: &str = "\
Usage: serpent [OPTIONS]

Play the all-time classic snake game in the terminal.

Options:
  -c, --show-controls   Show the controls for the game and exit
  -h, --help            Display this help message and exit
  -V, --version         Display version information and exit
      --width <CELLS>   Width of the board's interior [default: 40]
      --height <CELLS>  Height of the board's interior [default: 18]
      --length <SEGMENTS>
                        Initial length of the snake [default: 5]
      --interval <MS>   Initial time between snake movements, in milliseconds
                        [default: 150]
      --min-interval <MS>
                        Shortest time between snake movements, in milliseconds
                        [default: 50]
      --config <PATH>   Read configuration from PATH
      --log-file <PATH> Write a log of the session to PATH\
";

static CONTROLS: &str = "\
serpent controls.
Movement:
    ↑, w, k: move up
    ←, a, h: move to the left
    →, d, l: move to the right
    ↓, s, j: move down
Game:
    q: quit
    p, Esc: pause
    r: restart\
";

/// The result of parsing the command line: either a request for one of the
/// informational outputs or the arguments for an actual game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(Args),
    Help,
    Version,
    Controls,
}

impl Cli {
    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Args::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                Arg::Short('c') | Arg::Long("show-controls") => return Ok(Cli::Controls),
                Arg::Long("width") => args.width = Some(parser.value()?.parse()?),
                Arg::Long("height") => args.height = Some(parser.value()?.parse()?),
                Arg::Long("length") => args.length = Some(parser.value()?.parse()?),
                Arg::Long("interval") => args.interval_ms = Some(parser.value()?.parse()?),
                Arg::Long("min-interval") => args.min_interval_ms = Some(parser.value()?.parse()?),
                Arg::Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

/// Command-line overrides for the gameplay options, plus the paths the
/// configuration & logging glue needs before a session starts
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Args {
    pub(crate) width: Option<u16>,
    pub(crate) height: Option<u16>,
    pub(crate) length: Option<u16>,
    pub(crate) interval_ms: Option<u64>,
    pub(crate) min_interval_ms: Option<u64>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
}

pub(crate) fn print_usage() {
    println!("{USAGE}");
}

pub(crate) fn print_controls() {
    println!("{CONTROLS}");
}

pub(crate) fn print_version() {
    println!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_iter(
            std::iter::once("serpent").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Cli::Run(Args::default()));
    }

    #[rstest]
    #[case(&["-h"], Cli::Help)]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--version"], Cli::Version)]
    #[case(&["-c"], Cli::Controls)]
    #[case(&["--show-controls"], Cli::Controls)]
    fn informational(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).unwrap(), cli);
    }

    #[test]
    fn informational_beats_other_args() {
        assert_eq!(parse(&["--width", "12", "--help"]).unwrap(), Cli::Help);
    }

    #[test]
    fn game_args() {
        let cli = parse(&[
            "--width",
            "12",
            "--height",
            "9",
            "--length",
            "4",
            "--interval",
            "120",
            "--min-interval",
            "40",
            "--config",
            "custom.toml",
            "--log-file",
            "serpent.log",
        ])
        .unwrap();
        assert_eq!(
            cli,
            Cli::Run(Args {
                width: Some(12),
                height: Some(9),
                length: Some(4),
                interval_ms: Some(120),
                min_interval_ms: Some(40),
                config: Some(PathBuf::from("custom.toml")),
                log_file: Some(PathBuf::from("serpent.log")),
            })
        );
    }

    #[rstest]
    #[case(&["--width"])]
    #[case(&["--width", "many"])]
    #[case(&["--fruits", "3"])]
    #[case(&["-x"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
