//! Command-line parsing.

/// Options for a play session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Seed for the gap-offset generator (None = from entropy)
    pub seed: Option<u64>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(LaunchOptions),
    Version,
    Help,
}

pub const USAGE: &str = "\
Flappy - terminal side-scroller

Usage: flappy [options]

Options:
  --seed <N>     Fix the obstacle generator seed
  --version, -v  Show version information
  --help, -h     Show this help message

Controls:
  Space          Jump
  Esc, Ctrl+C    Close the game";

/// Parse argv (including the program name at index 0).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = LaunchOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
                i += 1;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Command::Play(options))
}
