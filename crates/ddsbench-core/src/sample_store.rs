//! Raw Sample Log I/O
//!
//! Persists a captured sample buffer as a headerless binary dump and
//! reads it back for analysis. The layout is deliberately bare: each
//! element is one **little-endian f64**, written in sequence order,
//! with no framing and no metadata. Writer and reader must agree on
//! that contract out of band — the element count is implied by the
//! session that produced the file.
//!
//! ## Example
//!
//! ```rust
//! use ddsbench_core::sample_store::{load_samples, persist_samples};
//!
//! let tmp = std::env::temp_dir().join("ddsbench_store_doc.data");
//! let buffer = vec![0.0, -1.5, 42.0];
//! persist_samples(&tmp, &buffer).unwrap();
//! assert_eq!(load_samples(&tmp).unwrap(), buffer);
//! std::fs::remove_file(&tmp).ok();
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

/// Size of one stored element in bytes.
pub const BYTES_PER_SAMPLE: u64 = 8;

/// Errors raised while reading a sample log back.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File length is not a whole number of elements — the file was
    /// written with a different element size, or truncated mid-write.
    #[error("sample file is {len} bytes, not a multiple of the {BYTES_PER_SAMPLE}-byte element")]
    TruncatedFile { len: u64 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write the buffer to `path` as raw little-endian f64 values.
///
/// Any I/O failure is surfaced immediately; nothing is retried and a
/// partially written file is not cleaned up.
pub fn persist_samples<P: AsRef<Path>>(path: P, samples: &[f64]) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for sample in samples {
        writer.write_all(&sample.to_le_bytes())?;
    }
    writer.flush()?;
    debug!(path = %path.display(), n = samples.len(), "sample log persisted");
    Ok(())
}

/// Read a raw little-endian f64 sample log written by
/// [`persist_samples`].
///
/// The round trip is exact: every bit pattern comes back unchanged.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, StoreError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len % BYTES_PER_SAMPLE != 0 {
        return Err(StoreError::TruncatedFile { len });
    }

    let count = (len / BYTES_PER_SAMPLE) as usize;
    let mut reader = BufReader::new(file);
    let mut samples = Vec::with_capacity(count);
    let mut word = [0u8; BYTES_PER_SAMPLE as usize];
    for _ in 0..count {
        reader.read_exact(&mut word)?;
        samples.push(f64::from_le_bytes(word));
    }
    debug!(path = %path.display(), n = count, "sample log loaded");
    Ok(samples)
}
