use crate::config::GameOptions;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('W') | Arg::Long("width") => {
                    args.width = Some(parser.value()?.parse()?);
                }
                Arg::Short('H') | Arg::Long("height") => {
                    args.height = Some(parser.value()?.parse()?);
                }
                Arg::Short('l') | Arg::Long("length") => {
                    args.length = Some(parser.value()?.parse()?);
                }
                Arg::Short('t') | Arg::Long("tick") => {
                    args.tick = Some(parser.value()?.parse()?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

/// Options for an actual game session
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,
    /// File to write logs to; nothing is logged if unset
    pub(crate) log_file: Option<PathBuf>,
    width: Option<u16>,
    height: Option<u16>,
    length: Option<usize>,
    /// Tick interval in milliseconds
    tick: Option<u64>,
}

impl Arguments {
    /// Override options from the configuration file with those given on the
    /// command line
    pub(crate) fn apply(&self, options: &mut GameOptions) {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(length) = self.length {
            options.initial_length = length;
        }
        if let Some(tick) = self.tick {
            options.tick_interval_ms = tick;
        }
    }
}

pub(crate) const USAGE: &str = concat!(
    "Usage: slither [<options>]\n",
    "\n",
    "Play snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <file>      Read configuration from the given file\n",
    "  -W, --width <cells>      Width of the playing field\n",
    "  -H, --height <cells>     Height of the playing field\n",
    "  -l, --length <n>         Starting length of the snake\n",
    "  -t, --tick <ms>          Milliseconds between moves of the snake\n",
    "      --log-file <file>    Write logs to the given file\n",
    "  -h, --help               Show this help and exit\n",
    "  -V, --version            Show the program version and exit\n",
    "\n",
    "Controls:\n",
    "  Arrow keys, WASD, or HJKL to steer\n",
    "  q, Esc, or Ctrl-C to quit; r to play again after a game ends\n",
);
