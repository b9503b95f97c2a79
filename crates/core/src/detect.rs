//! ELF format detection by magic bytes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::warn;

/// `0x7F 'E' 'L' 'F'` at offset 0.
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// Read at most the first four bytes of `path` and compare them to [`ELF_MAGIC`].
///
/// Files shorter than four bytes are simply not ELF; only open/read failures
/// are errors.
fn probe_magic(path: &Path) -> io::Result<bool> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(ELF_MAGIC.len());
    file.take(ELF_MAGIC.len() as u64).read_to_end(&mut header)?;
    Ok(header == ELF_MAGIC)
}

/// Whether `path` is an ELF file. Unreadable files count as "no" and are logged.
pub fn is_recognized_binary(path: &Path) -> bool {
    match probe_magic(path) {
        Ok(is_elf) => is_elf,
        Err(e) => {
            warn!("unable to open file {}: {e}", path.display());
            false
        }
    }
}
