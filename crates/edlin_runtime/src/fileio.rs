//! Loading and saving newline-delimited text.
//!
//! Saving writes a temporary file next to the target and renames it into
//! place, so a failed save never leaves the target truncated.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use edlin_foundation::{Error, Result};
use tempfile::NamedTempFile;

/// Reads `path` into a vector of lines.
///
/// Both `\n` and `\r\n` endings are stripped. A final line without a trailing
/// newline is kept.
///
/// # Errors
///
/// Returns an I/O error naming `path` if it cannot be opened or read, or is
/// not valid UTF-8.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(|err| Error::io(path, err))
}

/// Writes `lines` to `path`, each followed by `\n`, replacing the file.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns an I/O error naming `path` if it cannot be written. The previous
/// contents of `path` are kept.
pub fn save(path: &Path, lines: &[String]) -> Result<usize> {
    replace_file(path, |writer| {
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    })?;
    Ok(lines.len())
}

/// Fills a temporary sibling of `path` with `fill`, then renames it over
/// `path`. On any failure the temporary file is removed and `path` is left
/// alone.
fn replace_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&File>) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |err: io::Error| Error::io(path, err);

    let temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        fill(&mut writer).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }
    if let Some(permissions) = target_permissions(path)? {
        temp.as_file().set_permissions(permissions).map_err(io_error)?;
    }
    temp.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

/// Permissions for the saved file: those of the file being replaced, or the
/// platform default for a new file.
fn target_permissions(path: &Path) -> Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(err) => Err(Error::io(path, err)),
    }
}

/// Temporary files are created private; a new saved file is world-readable.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
