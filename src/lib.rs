use std::path::Path;

use thiserror::Error;

mod sha1;
mod util;

pub use crate::sha1::{DIGEST_LEN, Digest, Sha1, Sha1Error};

#[derive(Debug, Error)]
pub enum HashFileError {
    #[error("unable to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Digest(#[from] Sha1Error),
}

pub fn hash_bytes(bytes: &[u8]) -> Result<Digest, Sha1Error> {
    Sha1::new().digest(bytes)
}

pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Digest, HashFileError> {
    hash_file_with(&Sha1::new(), path)
}

pub fn hash_file_with<P: AsRef<Path>>(hasher: &Sha1, path: P) -> Result<Digest, HashFileError> {
    let bytes = util::io::read_file(path)?;
    let digest = hasher.digest(&bytes)?;
    Ok(digest)
}
