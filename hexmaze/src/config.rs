//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Solve a hexagonal maze with a best-first search.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "hexmaze", version, about)]
pub struct RunConfig {
    /// Maze text file ('#' wall, '.' open, 'S' start, 'E' end).
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    pub maze: Option<PathBuf>,
    /// Generate a W by H maze; with PCT (0-100) walls are scattered at
    /// random, otherwise a random walk is carved.
    #[arg(long, value_name = "WxH[:PCT]", value_parser = parse_random)]
    pub random: Option<RandomMaze>,
    /// Seed for --random.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Redraw the maze after every expanded cell.
    #[arg(long)]
    pub animate: bool,
    /// Pause between animation frames, in milliseconds.
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub delay_ms: u64,
    /// Mark the route found and print the final maze.
    #[arg(long)]
    pub show_path: bool,
    /// Print the report as JSON; maze drawings go to stderr.
    #[arg(long)]
    pub json: bool,
}

/// Size and wall density of a generated maze.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomMaze {
    pub width: usize,
    pub height: usize,
    /// Wall probability for scattering, or `None` to carve a random walk.
    pub wall_pct: Option<f64>,
}

/// Where the maze comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeSource {
    File(PathBuf),
    Random(RandomMaze),
}

impl RunConfig {
    pub fn source(&self) -> MazeSource {
        match (self.random, &self.maze) {
            (Some(random), _) => MazeSource::Random(random),
            (None, path) => MazeSource::File(path.clone().unwrap_or_default()),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Parse `WxH` or `WxH:PCT`.
fn parse_random(v: &str) -> Result<RandomMaze, String> {
    let (size, pct) = match v.split_once(':') {
        Some((size, pct)) => (size, Some(pct)),
        None => (v, None),
    };
    let (w, h) = size
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got {size:?}"))?;
    let width: usize = w.parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let height: usize = h.parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    if width == 0 || height == 0 {
        return Err("width and height must be at least 1".to_string());
    }
    let wall_pct = match pct {
        Some(p) => {
            let p: f64 = p.parse().map_err(|e| format!("bad percentage {p:?}: {e}"))?;
            if !(0.0..=100.0).contains(&p) {
                return Err(format!("percentage {p} is outside 0-100"));
            }
            Some(p / 100.0)
        }
        None => None,
    };
    Ok(RandomMaze {
        width,
        height,
        wall_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<RunConfig, clap::Error> {
        RunConfig::try_parse_from(std::iter::once("hexmaze").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        RunConfig::command().debug_assert();
    }

    #[test]
    fn file_with_defaults() {
        let cfg = parse(&["maze.txt"]).unwrap();
        assert_eq!(cfg.source(), MazeSource::File(PathBuf::from("maze.txt")));
        assert!(!cfg.animate);
        assert!(!cfg.json);
        assert_eq!(cfg.delay(), Duration::from_millis(50));
    }

    #[test]
    fn all_flags() {
        let cfg = parse(&[
            "--animate",
            "--delay-ms",
            "5",
            "--show-path",
            "--json",
            "--seed",
            "99",
            "m.txt",
        ])
        .unwrap();
        assert!(cfg.animate && cfg.show_path && cfg.json);
        assert_eq!(cfg.delay(), Duration::from_millis(5));
        assert_eq!(cfg.seed, Some(99));
    }

    #[test]
    fn random_sources() {
        let cfg = parse(&["--random", "10x4"]).unwrap();
        assert_eq!(
            cfg.source(),
            MazeSource::Random(RandomMaze {
                width: 10,
                height: 4,
                wall_pct: None
            })
        );
        let cfg = parse(&["--random", "3x2:25"]).unwrap();
        assert_eq!(
            cfg.source(),
            MazeSource::Random(RandomMaze {
                width: 3,
                height: 2,
                wall_pct: Some(0.25)
            })
        );
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["--help"]).unwrap_err().kind(),
            ErrorKind::DisplayHelp
        );
        assert_eq!(
            parse(&["--fast", "m"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["m", "--random", "3x3"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert!(parse(&["a", "b"]).is_err());
        assert!(parse(&["m", "--seed"]).is_err());
        assert!(parse(&["m", "--seed", "x"]).is_err());
        for bad in ["0x3", "3", "ax2", "3x3:150", "3x3:x"] {
            assert_eq!(
                parse(&["--random", bad]).unwrap_err().kind(),
                ErrorKind::ValueValidation,
                "{bad}"
            );
        }
    }

    #[test]
    fn random_size_messages() {
        assert_eq!(
            parse_random("0x3").unwrap_err(),
            "width and height must be at least 1"
        );
        assert_eq!(
            parse_random("3x3:150").unwrap_err(),
            "percentage 150 is outside 0-100"
        );
        assert!(parse_random("7").unwrap_err().starts_with("expected WxH"));
    }
}
