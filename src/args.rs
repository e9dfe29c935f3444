use std::{ffi::OsString, path::PathBuf};

use clap::{
    builder::NonEmptyStringValueParser, error::ErrorKind, CommandFactory as _,
    FromArgMatches as _, Parser,
};

use crate::{abi, error::Error, patch::ElfClass};

/// Marks the class and OS/ABI bytes of an ELF file header in place.
#[derive(Parser, Debug)]
#[command(name = "markelf", version, about)]
pub struct Args {
    #[arg(short, long)]
    /// Mark the ELF class byte.  32-bit, unless `--to64` is also given.
    pub class: bool,

    #[arg(
        short = 't',
        long = "type",
        value_name = "ABI",
        value_parser = NonEmptyStringValueParser::new(),
    )]
    /// Set the OS/ABI byte.  Either a decimal code or one of the names listed below.
    pub abi: Option<String>,

    #[arg(short = 'b', long)]
    /// Used with `--class`: mark the file as 64-bit.
    pub to64: bool,

    #[arg(value_name = "FILE")]
    /// ELF file to modify in place.  Only the first one is used.
    pub files: Vec<PathBuf>,
}

/// Validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,

    /// Present iff `--class` was given.
    pub class: Option<ElfClass>,

    /// The `--type` argument, exactly as typed.
    pub abi: Option<String>,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    /// `--help` or `--version`: the text to print, and nothing else to do.
    Info(String),

    Mark(Options),
}

fn command() -> clap::Command {
    Args::command().after_help(abi::table_help())
}

pub fn parse_from<I, T>(argv: I) -> Result<Invocation, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = argv.into_iter().map(Into::into).collect::<Vec<OsString>>();

    if argv.len() < 2 {
        return Err(Error::Usage(
            command().error(ErrorKind::MissingRequiredArgument, "no args are provided"),
        ));
    }

    let matches = match command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Invocation::Info(err.to_string()));
        }
        Err(err) => return Err(Error::Usage(err)),
    };

    let args = Args::from_arg_matches(&matches).map_err(Error::Usage)?;

    Options::try_from(args).map(Invocation::Mark)
}

impl TryFrom<Args> for Options {
    type Error = Error;

    fn try_from(
        Args {
            class,
            abi,
            to64,
            files,
        }: Args,
    ) -> Result<Self, Error> {
        if to64 && !class {
            return Err(Error::DependentFlag);
        }

        let Some(path) = files.into_iter().next() else {
            return Err(Error::MissingFile);
        };

        if !class && abi.is_none() {
            return Err(Error::NoAction);
        }

        Ok(Options {
            path,
            class: class.then(|| ElfClass::from_to64(to64)),
            abi,
        })
    }
}
