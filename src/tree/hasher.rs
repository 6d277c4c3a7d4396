//! Content digest computation for files

use crate::error::{ReconcileError, ReconcileResult};
use crate::types::{Digest, HASH_BUF_BYTES};
use sha1::{Digest as _, Sha1};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Stream `reader` through SHA-1 in fixed-size chunks.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; HASH_BUF_BYTES];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().into())
}

/// Compute the lower-case hex SHA-1 of the file at `path`.
pub fn hash_file(path: &Path) -> ReconcileResult<String> {
    let io_err = |source| ReconcileError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let digest = digest_reader(file).map_err(io_err)?;
    Ok(hex::encode(digest))
}
