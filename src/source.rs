//! Decompressing line source.
//!
//! Reads a whole input file into memory, gunzips it when the file name
//! ends in `.gz`, and splits it into lines. No streaming: the entire
//! decompressed text exists before the first line is handed out, which
//! keeps load-from-file atomic with respect to I/O failures.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::LoadError;

/// Reads `path` and returns its decompressed content as lines, in file
/// order, without line terminators.
///
/// Files whose name ends in `.gz` are gunzipped first; anything else is
/// taken as plain text. Bytes that are not valid UTF-8 are replaced
/// rather than rejected — the per-field casts turn garbage into `Na`
/// downstream.
pub fn load_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let raw = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = if is_gzip_path(path) {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut decoded)
            .map_err(|source| LoadError::Gzip {
                path: path.to_path_buf(),
                source,
            })?;
        String::from_utf8_lossy(&decoded).into_owned()
    } else {
        String::from_utf8_lossy(&raw).into_owned()
    };

    Ok(text.lines().map(str::to_string).collect())
}

/// File-name convention: a trailing `.gz` marks gzip content.
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}
