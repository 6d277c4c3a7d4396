//! Core types shared across the reconciliation pipeline.

/// Digest: raw SHA-1 of a file's full byte stream
pub type Digest = [u8; 20];

/// Read buffer size used when streaming file contents through the hasher
pub const HASH_BUF_BYTES: usize = 64 * 1024;
