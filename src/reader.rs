use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::error::KmerCorpusError;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext == "gz")
}

fn unreadable(path: &Path) -> impl FnOnce(std::io::Error) -> KmerCorpusError + '_ {
    move |source| KmerCorpusError::UnreadableSource {
        source,
        path: path.to_path_buf(),
    }
}

/// Reads one line without its `\n` or `\r\n` terminator; `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub(crate) fn read_line_lossy<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Reads every line of `reader`, without line terminators.
pub(crate) fn read_lines_from<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    while let Some(line) = read_line_lossy(&mut reader)? {
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(not(feature = "gzip"))]
fn open(path: &Path) -> Result<Box<dyn Read>, KmerCorpusError> {
    let file = File::open(path).map_err(unreadable(path))?;
    Ok(Box::new(file))
}

#[cfg(feature = "gzip")]
fn open(path: &Path) -> Result<Box<dyn Read>, KmerCorpusError> {
    use flate2::read::MultiGzDecoder;

    let file = File::open(path).map_err(unreadable(path))?;
    if is_gzip_path(path) {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Reads the raw lines of the file at `path`.
///
/// Any failure to open or decode the file is reported as
/// [`KmerCorpusError::UnreadableSource`] naming the path.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, KmerCorpusError> {
    let path = path.as_ref();
    let lines = read_lines_from(BufReader::new(open(path)?)).map_err(unreadable(path))?;

    #[cfg(feature = "tracing")]
    debug!(path = %path.display(), lines = lines.len(), "Read source lines");

    Ok(lines)
}
