//! Command-line arguments of the `riddle` binary.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use clap::Parser;
use riddle_generator::{RiddleGenerator, RiddleOptions, RiddleSeed};

use crate::{
    dto::{self, AdapterError, DEFAULT_MAX_TRIES, RiddleResponse},
    table,
};

/// Generate Zebra-style logic-grid riddles.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Number of people (items per category)
    #[arg(long, value_name = "COUNT")]
    pub size: Option<usize>,

    /// Number of categories
    #[arg(long, value_name = "COUNT")]
    pub categories: Option<usize>,

    /// Number of items revealed by one clue
    #[arg(long, value_name = "COUNT")]
    pub group_size: Option<usize>,

    /// Number of items left as questions
    #[arg(long, value_name = "COUNT")]
    pub secrets: Option<usize>,

    /// Number of same-person clues to start with
    #[arg(long, value_name = "COUNT")]
    pub same_person_groups: Option<usize>,

    /// Seed as 64 hex digits
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<RiddleSeed>,

    /// Derive the seed from a text phrase
    #[arg(long, value_name = "TEXT")]
    pub seed_phrase: Option<String>,

    /// Seeds to try when a riddle turns out unusable
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_TRIES)]
    pub max_tries: usize,

    /// Print the riddle as JSON
    #[arg(long)]
    pub json: bool,

    /// Answer a JSON request read from a file, or from stdin with `-`
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "size",
            "categories",
            "group_size",
            "secrets",
            "same_person_groups",
            "seed",
            "seed_phrase",
            "json",
        ],
    )]
    pub request: Option<PathBuf>,

    /// Do not print the board table
    #[arg(long)]
    pub no_board: bool,
}

impl CommandArgs {
    /// Builds the generator options from the flags, defaults filling the rest.
    #[must_use]
    pub fn options(&self) -> RiddleOptions {
        let base = RiddleOptions::default();
        let seed = self
            .seed
            .or_else(|| self.seed_phrase.as_deref().map(RiddleSeed::from_phrase));
        RiddleOptions {
            size: self.size.unwrap_or(base.size),
            categories: self.categories.unwrap_or(base.categories),
            group_size: self.group_size.unwrap_or(base.group_size),
            secrets: self.secrets.unwrap_or(base.secrets),
            same_person_groups: self.same_person_groups,
            seed,
        }
    }
}

/// Errors reported by the `riddle` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CommandError {
    /// The request could not be read.
    #[display("failed to read request from {}: {source}", path.display())]
    #[from(skip)]
    ReadRequest {
        /// Where the request was read from.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Building or generating the riddle failed.
    #[display("{_0}")]
    Adapter(AdapterError),
    /// The JSON response could not be written.
    #[display("failed to serialize response: {_0}")]
    Output(serde_json::Error),
}

/// Runs the command described by `args`, printing to stdout.
///
/// # Errors
///
/// Returns a [`CommandError`] if the request cannot be read, the options are
/// invalid, or no usable riddle was found within `max_tries` seeds.
pub fn run(args: &CommandArgs) -> Result<(), CommandError> {
    if let Some(path) = &args.request {
        let payload = read_request(path)?;
        let result = dto::handle_request_with_tries(&payload, args.max_tries);
        println!("{}", dto::response_json(&result)?);
        result?;
        return Ok(());
    }

    let options = args.options();
    log::debug!("options: {options:?}");
    let generator = RiddleGenerator::new(options).map_err(AdapterError::from)?;
    let riddle =
        dto::generate_with_retries(&generator, args.max_tries).map_err(AdapterError::from)?;
    log::info!("riddle seed: {}", riddle.seed);

    if args.json {
        let result = Ok::<_, AdapterError>(RiddleResponse::from(&riddle));
        println!("{}", dto::response_json(&result)?);
    } else {
        print!("{}", table::render_riddle(&riddle, !args.no_board));
    }
    Ok(())
}

fn read_request(path: &Path) -> Result<String, CommandError> {
    let read = if path.as_os_str() == "-" {
        let mut payload = String::new();
        io::stdin().read_to_string(&mut payload).map(|_| payload)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| CommandError::ReadRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn parse(args: &[&str]) -> Result<CommandArgs, clap::Error> {
        CommandArgs::try_parse_from(std::iter::once("riddle").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.max_tries, 10);
        assert!(!args.json);
        assert!(!args.no_board);
        assert_eq!(args.options(), RiddleOptions::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&[
            "--size",
            "4",
            "--group-size",
            "3",
            "--same-person-groups",
            "1",
            "--seed-phrase",
            "zebra",
        ])
        .unwrap();
        let options = args.options();
        assert_eq!(options.size, 4);
        assert_eq!(options.categories, 5);
        assert_eq!(options.group_size, 3);
        assert_eq!(options.secrets, 2);
        assert_eq!(options.same_person_groups, Some(1));
        assert_eq!(options.seed, Some(RiddleSeed::from_phrase("zebra")));
    }

    #[test]
    fn test_seed_flags() {
        let hex = RiddleSeed::from(7).to_string();
        let args = parse(&["--seed", &hex]).unwrap();
        assert_eq!(args.options().seed, Some(RiddleSeed::from(7)));

        assert!(parse(&["--seed", "xyz"]).is_err());
        assert!(parse(&["--seed", &hex, "--seed-phrase", "zebra"]).is_err());
    }

    #[test]
    fn test_request_conflicts_with_option_flags() {
        assert!(parse(&["--request", "-"]).is_ok());
        let args = parse(&["--request", "-", "--max-tries", "3"]).unwrap();
        assert_eq!(args.max_tries, 3);
        assert!(parse(&["--request", "-", "--size", "3"]).is_err());
    }

    #[test]
    fn test_invalid_options_fail() {
        let args = parse(&["--categories", "9"]).unwrap();
        assert!(matches!(
            run(&args),
            Err(CommandError::Adapter(AdapterError::Options(_)))
        ));
    }

    #[test]
    fn test_output_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CommandError::from(source);
        assert!(matches!(err, CommandError::Output(_)));
        assert!(err.to_string().starts_with("failed to serialize response: "));
    }

    #[test]
    fn test_missing_request_file() {
        let args = parse(&["--request", "/nonexistent/riddle-request.json"]).unwrap();
        assert!(matches!(run(&args), Err(CommandError::ReadRequest { .. })));
    }
}
