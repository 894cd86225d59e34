//! Wordlist input: encoding detection and memory-mapped line reading
//!
//! Wordlists in the wild arrive in every encoding imaginable; everything is
//! detected up front (BOM, then chardetng) and decoded to UTF-8 on the way
//! in so the filter core only ever sees `str`.

use bstr::ByteSlice;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a file by sampling its first 64KB.
pub fn detect_encoding(path: &Path) -> anyhow::Result<EncodingInfo> {
    let mut file = File::open(path)?;
    let mut sample = vec![0u8; 64 * 1024];
    let bytes_read = file.read(&mut sample)?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(EncodingInfo::default());
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(EncodingInfo {
            name: encoding.name(),
            encoding,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);
    let encoding = detector.guess(None, true);

    Ok(EncodingInfo {
        name: encoding.name(),
        encoding,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(encoding_rs::UTF_8);
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some(encoding_rs::UTF_16BE);
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some(encoding_rs::UTF_16LE);
    }
    None
}

/// Memory-mapped word reader: iterates the trimmed, non-empty lines of a
/// wordlist file, decoding each line from the detected encoding.
pub struct WordReader {
    // None for zero-length files, which cannot be mapped
    mmap: Option<memmap2::Mmap>,
    encoding: &'static Encoding,
    position: usize,
}

impl WordReader {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let info = detect_encoding(path)?;
        let file = File::open(path)?;

        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { memmap2::Mmap::map(&file)? })
        };

        // Skip the BOM so it never ends up glued to the first word
        let data = mmap.as_deref().unwrap_or(&[]);
        let position = if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else if data.starts_with(&[0xFE, 0xFF]) || data.starts_with(&[0xFF, 0xFE]) {
            2
        } else {
            0
        };

        log::debug!("{:?}: detected encoding {}", path, info.name);

        Ok(Self {
            mmap,
            encoding: info.encoding,
            position,
        })
    }

    /// Read all words into memory, skipping blank lines.
    pub fn read_words(mut self) -> Vec<String> {
        let mut words = Vec::new();
        while let Some(word) = self.next_word() {
            words.push(word);
        }
        words
    }

    fn next_word(&mut self) -> Option<String> {
        let data = self.mmap.as_deref().unwrap_or(&[]);
        while self.position < data.len() {
            let remaining = &data[self.position..];
            let line_end = memchr::memchr(b'\n', remaining)
                .map(|i| i + 1)
                .unwrap_or(remaining.len());

            let line = remaining[..line_end].trim();
            self.position += line_end;

            if line.is_empty() {
                continue;
            }

            let word = if self.encoding == encoding_rs::UTF_8 {
                match std::str::from_utf8(line) {
                    Ok(s) => s.to_string(),
                    Err(_) => String::from_utf8_lossy(line).into_owned(),
                }
            } else {
                let (decoded, _, had_errors) = self.encoding.decode(line);
                if had_errors {
                    log::warn!("encoding errors in line, using lossy conversion");
                }
                decoded.into_owned()
            };
            return Some(word);
        }
        None
    }
}

impl Iterator for WordReader {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word()
    }
}
