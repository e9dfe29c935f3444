//! In-place writes into the ELF identification bytes.
//!
//! Each operation seeks to an absolute offset and writes exactly one byte.  Nothing is read back
//! and the rest of the file is left alone.

use std::io::{Seek, SeekFrom, Write};

use goblin::elf::header::{EI_CLASS, EI_OSABI, ELFCLASS32, ELFCLASS64};

use crate::{abi::MAX_ABI_CODE, error::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfClass {
    Elf32,
    Elf64,
}

impl ElfClass {
    pub fn from_to64(to64: bool) -> Self {
        if to64 {
            ElfClass::Elf64
        } else {
            ElfClass::Elf32
        }
    }

    /// `EI_CLASS` value.
    pub fn byte(self) -> u8 {
        match self {
            ElfClass::Elf32 => ELFCLASS32,
            ElfClass::Elf64 => ELFCLASS64,
        }
    }

    pub fn bitness(self) -> &'static str {
        match self {
            ElfClass::Elf32 => "32-bit",
            ElfClass::Elf64 => "64-bit",
        }
    }
}

pub fn write_class_byte<F: Write + Seek>(file: &mut F, class: ElfClass) -> Result<(), Error> {
    write_byte_at(file, EI_CLASS, class.byte())
}

/// Rejects codes past the end of the ABI table before the file is touched.
pub fn write_abi_byte<F: Write + Seek>(file: &mut F, code: u8) -> Result<(), Error> {
    if code > MAX_ABI_CODE {
        return Err(Error::AbiRange(code));
    }

    write_abi_byte_unchecked(file, code)
}

/// Writes `code` as is, even when it is not a known ABI.
pub fn write_abi_byte_unchecked<F: Write + Seek>(file: &mut F, code: u8) -> Result<(), Error> {
    write_byte_at(file, EI_OSABI, code)
}

fn write_byte_at<F: Write + Seek>(file: &mut F, offset: usize, value: u8) -> Result<(), Error> {
    file.seek(SeekFrom::Start(offset as u64)).map_err(Error::Seek)?;
    file.write_all(&[value]).map_err(Error::Write)
}
