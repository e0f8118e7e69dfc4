use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Read a source file into lines.
///
/// A missing file is an ordinary outcome and yields `Ok(None)`; any other
/// I/O failure is an error. Invalid UTF-8 is replaced rather than rejected,
/// since only ASCII keywords are ever matched.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>> {
    let path = path.as_ref();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file {}", path.display()));
        }
    };

    let content = String::from_utf8_lossy(&bytes);

    // str::lines handles both LF and CRLF endings
    Ok(Some(content.lines().map(str::to_owned).collect()))
}
