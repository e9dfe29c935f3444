use std::fs::OpenOptions;

use crate::{
    abi::{self, Abi},
    args::Options,
    error::Error,
    patch,
};

/// Applies the requested patches to `options.path`, class first.
///
/// A success line is printed after each patch, so when the second patch fails the first one has
/// already been reported.  The file is closed when this function returns, on success or error.
pub fn run(
    Options {
        path,
        class,
        abi: abi_argument,
    }: &Options,
) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| Error::FileOpen {
            path: path.clone(),
            source,
        })?;

    if let Some(class) = *class {
        patch::write_class_byte(&mut file, class)?;
        println!(
            "ok: marked '{}' as {} binary.",
            path.display(),
            class.bitness()
        );
    }

    if let Some(argument) = abi_argument {
        match abi::resolve(argument)? {
            // Numbers are written as given, even past the end of the table.
            Abi::Number(code) => patch::write_abi_byte_unchecked(&mut file, code)?,
            Abi::Named(entry) => patch::write_abi_byte(&mut file, entry.code)?,
        }
        println!("ok: marking '{}' ABI to '{}'.", path.display(), argument);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    use crate::{args::Options, error::Error, patch::ElfClass};

    use std::{fs, io::Write, path::Path};

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn zeroed_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0; 16]).unwrap();
        file.flush().unwrap();
        file
    }

    fn mark(path: &Path, class: Option<ElfClass>, abi: Option<&str>) -> Result<(), Error> {
        run(&Options {
            path: path.to_owned(),
            class,
            abi: abi.map(str::to_owned),
        })
    }

    fn ident_bytes(path: &Path) -> (u8, u8) {
        let bytes = fs::read(path).unwrap();
        assert_eq!(bytes.len(), 16, "File size must not change");
        (bytes[4], bytes[7])
    }

    #[test]
    fn class_and_type() {
        let file = zeroed_file();
        mark(file.path(), Some(ElfClass::Elf64), Some("linux")).unwrap();
        assert_eq!(ident_bytes(file.path()), (2, 3));
    }

    #[test]
    fn class_only() {
        let file = zeroed_file();
        mark(file.path(), Some(ElfClass::Elf32), None).unwrap();
        assert_eq!(ident_bytes(file.path()), (1, 0));
    }

    #[test]
    fn numeric_type_past_the_table() {
        let file = zeroed_file();
        mark(file.path(), None, Some("19")).unwrap();
        assert_eq!(ident_bytes(file.path()), (0, 19));
    }

    #[test]
    fn unknown_name_after_class_keeps_class_patch() {
        let file = zeroed_file();
        match mark(file.path(), Some(ElfClass::Elf64), Some("xyz123notaname")) {
            Err(Error::UnknownAbiName(name)) => assert_eq!(name, "xyz123notaname"),
            other => panic!("Expected UnknownAbiName, got: {other:?}"),
        }
        assert_eq!(ident_bytes(file.path()), (2, 0));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist");
        match mark(&path, Some(ElfClass::Elf32), None) {
            Err(Error::FileOpen { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected FileOpen, got: {other:?}"),
        }
        assert!(!path.exists(), "A missing file must not be created");
    }
}
