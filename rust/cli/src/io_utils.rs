//! File and stdin helpers shared by the commands.
//!
//! Archives ending in `.zst` are compressed on write and decompressed on
//! read with Zstandard.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// Reads one trimmed line; `None` on EOF or read error.
///
/// ```rust
/// use std::io::Cursor;
/// use cardroom_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(b"  h \n".to_vec());
/// assert_eq!(read_stdin_line(&mut input), Some("h".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, decompressing `.zst` and stripping a UTF-8 BOM.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

/// Opens `path` for writing, through a zstd encoder when it ends in `.zst`.
/// The encoder finishes its frame when the writer is dropped.
pub fn create_output(path: &Path) -> std::io::Result<Box<dyn Write>> {
    ensure_parent_dir(path).map_err(std::io::Error::other)?;
    let file = File::create(path)?;
    if path.extension().is_some_and(|ext| ext == "zst") {
        let encoder = zstd::stream::write::Encoder::new(file, 0)?.auto_finish();
        Ok(Box::new(BufWriter::new(encoder)))
    } else {
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
