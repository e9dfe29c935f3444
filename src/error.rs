use std::{fmt, io, path::PathBuf};

/// Every way a `markelf` run can fail.  All of them are fatal.
#[derive(Debug)]
pub enum Error {
    /// Bad command line, as reported by clap.
    Usage(clap::Error),

    /// No file path left after option scanning.
    MissingFile,

    /// `-b` was given without `-c`.
    DependentFlag,

    /// Neither `-c` nor `-t` was given.
    NoAction,

    /// A digit-only `-t` value that is not a valid byte.
    InvalidAbiNumber(String),

    /// A `-t` value that is neither a number nor a known ABI name.
    UnknownAbiName(String),

    /// An ABI code above the last one in the table.
    AbiRange(u8),

    FileOpen { path: PathBuf, source: io::Error },

    Seek(io::Error),

    Write(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(err) => write!(f, "{err}"),
            Error::MissingFile => write!(f, "no file path was provided."),
            Error::DependentFlag => {
                write!(f, "option '-b' cannot be used without the use of option '-c'.")
            }
            Error::NoAction => write!(f, "no option is provided."),
            Error::InvalidAbiNumber(value) => write!(f, "invalid ABI number: '{value}'."),
            Error::UnknownAbiName(value) => write!(f, "invalid ABI name: '{value}'."),
            Error::AbiRange(code) => {
                write!(f, "cannot set an unknown ABI version: {code}.")
            }
            Error::FileOpen { path, source } => write!(
                f,
                "cannot open file '{}' for reading and writing: {source}",
                path.display(),
            ),
            Error::Seek(source) => write!(f, "seek failed: {source}"),
            Error::Write(source) => write!(f, "write failed: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Usage(err) => Some(err),
            Error::FileOpen { source, .. } | Error::Seek(source) | Error::Write(source) => {
                Some(source)
            }
            _ => None,
        }
    }
}
