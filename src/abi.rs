//! OS/ABI names understood by `--type`.

use crate::error::Error;

/// A named `EI_OSABI` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiEntry {
    pub code: u8,
    pub name: &'static str,
}

const fn entry(code: u8, name: &'static str) -> AbiEntry {
    AbiEntry { code, name }
}

/// Code 5 is not assigned.
pub static ABI_TABLE: [AbiEntry; 18] = [
    entry(0, "sysv"),
    entry(1, "hpux"),
    entry(2, "netbsd"),
    entry(3, "linux"),
    entry(4, "hurd"),
    entry(6, "solaris"),
    entry(7, "aix"),
    entry(8, "irix"),
    entry(9, "freebsd"),
    entry(10, "tru64"),
    entry(11, "modesto"),
    entry(12, "openbsd"),
    entry(13, "openvms"),
    entry(14, "nonstopkernel"),
    entry(15, "aros"),
    entry(16, "fenix"),
    entry(17, "cloudabi"),
    entry(18, "openvos"),
];

/// Largest code present in [`ABI_TABLE`].
pub const MAX_ABI_CODE: u8 = 18;

/// Outcome of resolving a `--type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abi {
    /// A decimal literal.  Not checked against the table, so any byte value is allowed.
    Number(u8),

    /// A table entry matched by name.
    Named(&'static AbiEntry),
}

/// Case-insensitive exact match against [`ABI_TABLE`].
pub fn lookup(name: &str) -> Option<&'static AbiEntry> {
    ABI_TABLE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

pub fn resolve(argument: &str) -> Result<Abi, Error> {
    if !argument.is_empty() && argument.bytes().all(|b| b.is_ascii_digit()) {
        return argument
            .parse::<u8>()
            .map(Abi::Number)
            .map_err(|_| Error::InvalidAbiNumber(argument.to_owned()));
    }

    lookup(argument)
        .map(Abi::Named)
        .ok_or_else(|| Error::UnknownAbiName(argument.to_owned()))
}

/// The table as it is shown in `--help`, a few entries per line.
pub fn table_help() -> String {
    const PER_LINE: usize = 5;

    let lines = ABI_TABLE
        .chunks(PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|AbiEntry { code, name }| format!("{name}({code})"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>();

    format!("ABI types:\n  {}", lines.join(",\n  "))
}
