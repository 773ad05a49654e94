//! Parsing command-line arguments.

use crate::format;
use clap::{
    builder::PossibleValuesParser, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches,
    Command, Error,
};
use polyomino_lib::{Config, Symmetry};
use std::path::PathBuf;

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(String::from("must be a positive integer")),
    }
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) count_only: bool,
    pub(crate) plain: bool,
    pub(crate) columns: usize,
    pub(crate) save: Option<PathBuf>,
    pub(crate) verbosity: u8,
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Enumerates free polyominoes\n\
             \n\
             All polyominoes with n cells are obtained from those with n - 1 cells \
             by attaching one cell in every possible way, keeping only shapes that \
             are not rotations or reflections of one found before.\n\
             \n\
             Each generation is printed as a count, followed by the shapes.\n\
             With --plain, occupied cells are `o` and empty cells are `.`.\n",
        )
        .arg(
            Arg::new("SIZE")
                .help("Number of cells of the largest polyominoes [default: 5]")
                .index(1)
                .value_parser(parse_positive),
        )
        .arg(
            Arg::new("ALL")
                .help("Prints every generation from 1 to SIZE, not only the last one")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("COUNT")
                .help("Prints only the number of polyominoes, without drawing them")
                .short('c')
                .long("count")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("SYMMETRY")
                .help("Only shows polyominoes with this symmetry")
                .long_help(
                    "Only shows polyominoes with this symmetry\n\
                     You may need to add quotation marks for some of the symmetries.\n\
                     See [https://conwaylife.com/wiki/Symmetry] \n",
                )
                .short('s')
                .long("symmetry")
                .value_parser(PossibleValuesParser::new([
                    "C1", "C2", "C4", "D2|", "D2-", "D2\\", "D2/", "D4+", "D4X", "D8",
                ])),
        )
        .arg(
            Arg::new("NOVERIFY")
                .help("Does not compare the counts with the known values")
                .long("no-verify")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("LOAD")
                .help("Loads the configuration from a JSON, YAML or TOML file")
                .long_help(
                    "Loads the configuration from a JSON, YAML or TOML file\n\
                     Options given on the command line take precedence.\n",
                )
                .long("load")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SAVE")
                .help("Saves the printed generations to a JSON, YAML or TOML file")
                .long("save")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("COLUMNS")
                .help("Number of polyominoes on each line")
                .long("columns")
                .value_name("N")
                .default_value("6")
                .value_parser(parse_positive),
        )
        .arg(
            Arg::new("PLAIN")
                .help("Draws with `o` and `.` instead of coloured blocks")
                .long("plain")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more details; repeat for even more")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::from_matches(command().try_get_matches()?)
    }

    #[cfg(test)]
    fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::from_matches(command().try_get_matches_from(args)?)
    }

    fn from_matches(matches: ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.get_one::<PathBuf>("LOAD") {
            Some(path) => format::load::<Config>(path).map_err(|e| {
                Error::raw(
                    ErrorKind::InvalidValue,
                    format!("cannot load '{}': {}\n", path.display(), e),
                )
            })?,
            None => Config::default(),
        };

        if let Some(&size) = matches.get_one::<usize>("SIZE") {
            config.size = size;
        }
        if config.size == 0 {
            return Err(Error::raw(
                ErrorKind::InvalidValue,
                "the size must be a positive integer\n",
            ));
        }
        if matches.get_flag("ALL") {
            config.keep_history = true;
        }
        if matches.get_flag("NOVERIFY") {
            config.verify = false;
        }
        if let Some(symmetry) = matches.get_one::<String>("SYMMETRY") {
            let symmetry: Symmetry = symmetry
                .parse()
                .map_err(|e: String| Error::raw(ErrorKind::InvalidValue, e + "\n"))?;
            config.symmetry = Some(symmetry);
        }

        Ok(Args {
            config,
            count_only: matches.get_flag("COUNT"),
            plain: matches.get_flag("PLAIN"),
            columns: matches.get_one::<usize>("COLUMNS").copied().unwrap_or(6),
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            verbosity: matches.get_count("VERBOSE"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults() -> Result<(), Error> {
        let args = Args::parse_from(["polyomino"])?;
        assert_eq!(args.config, Config::default());
        assert_eq!(args.columns, 6);
        assert!(!args.count_only);
        assert!(!args.plain);
        assert_eq!(args.save, None);
        assert_eq!(args.verbosity, 0);
        Ok(())
    }

    #[test]
    fn flags() -> Result<(), Error> {
        let args = Args::parse_from([
            "polyomino", "7", "--all", "-s", "D2\\", "--no-verify", "-c", "--plain", "-vv",
            "--columns", "3", "--save", "out.toml",
        ])?;
        assert_eq!(
            args.config,
            Config::new(7)
                .set_keep_history(true)
                .set_symmetry(Symmetry::D2Diag)
                .set_verify(false)
        );
        assert!(args.count_only);
        assert!(args.plain);
        assert_eq!(args.columns, 3);
        assert_eq!(args.save, Some(PathBuf::from("out.toml")));
        assert_eq!(args.verbosity, 2);
        Ok(())
    }

    #[test]
    fn invalid_values() {
        assert!(Args::parse_from(["polyomino", "0"]).is_err());
        assert!(Args::parse_from(["polyomino", "-3"]).is_err());
        assert!(Args::parse_from(["polyomino", "-s", "C3"]).is_err());
        assert!(Args::parse_from(["polyomino", "--columns", "0"]).is_err());
        assert!(Args::parse_from(["polyomino", "--load", "missing.toml"]).is_err());
    }

    #[test]
    fn command_line_overrides_loaded_config() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!("polyomino-args-{}.toml", std::process::id()));
        fs::write(&path, "size = 8\nkeep_history = true\nsymmetry = \"C2\"\n")?;
        let path_str = path.to_string_lossy().into_owned();

        let loaded = Args::parse_from(["polyomino", "--load", path_str.as_str()]);
        let overridden = Args::parse_from(["polyomino", "--load", path_str.as_str(), "4"]);
        fs::remove_file(&path)?;

        let loaded = loaded?;
        assert_eq!(loaded.config.size, 8);
        assert!(loaded.config.keep_history);
        assert_eq!(loaded.config.symmetry, Some(Symmetry::C2));

        let overridden = overridden?;
        assert_eq!(overridden.config.size, 4);
        assert!(overridden.config.keep_history);
        Ok(())
    }
}
