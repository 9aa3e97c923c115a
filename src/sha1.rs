mod compress;
mod pad;

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::sha1::compress::{compress, expand_schedule};
use crate::sha1::pad::{block_count, pad_message};

const H0: u32 = 0x67452301;
const H1: u32 = 0xEFCDAB89;
const H2: u32 = 0x98BADCFE;
const H3: u32 = 0x10325476;
const H4: u32 = 0xC3D2E1F0;

pub const DIGEST_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Sha1Error {
    #[error("input of {len} bytes exceeds the maximum of {max} bytes")]
    InputTooLarge { len: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    fn from_words(words: [u32; 5]) -> Self {
        let mut bytes: [u8; DIGEST_LEN] = [0; DIGEST_LEN];
        for (i, word) in words.iter().enumerate() {
            bytes[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> [u8; DIGEST_LEN] {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|&byte| format!("{byte:02X}")).collect::<Vec<_>>().join(""))
    }
}

#[derive(Debug, Clone)]
pub struct Sha1 {
    max_input: usize,
}

impl Sha1 {
    pub const DEFAULT_MAX_INPUT: usize = 1 << 20;

    pub fn new() -> Self {
        Self::with_max_input(Self::DEFAULT_MAX_INPUT)
    }

    pub fn with_max_input(max_input: usize) -> Self {
        Sha1 { max_input }
    }

    pub fn max_input(&self) -> usize {
        self.max_input
    }

    pub fn digest(&self, bytes: &[u8]) -> Result<Digest, Sha1Error> {
        if bytes.len() > self.max_input {
            return Err(Sha1Error::InputTooLarge { len: bytes.len(), max: self.max_input });
        }
        debug!("hashing {} bytes in {} block(s)", bytes.len(), block_count(bytes.len()));
        let message = pad_message(bytes);

        let mut h: [u32; 5] = [H0, H1, H2, H3, H4];
        for (i, block) in message.chunks_exact(16).enumerate() {
            let w = expand_schedule(block);
            let [a, b, c, d, e] = compress(h, &w);

            h[0] = h[0].wrapping_add(a);
            h[1] = h[1].wrapping_add(b);
            h[2] = h[2].wrapping_add(c);
            h[3] = h[3].wrapping_add(d);
            h[4] = h[4].wrapping_add(e);
            trace!("block {i}: {:08X} {:08X} {:08X} {:08X} {:08X}", h[0], h[1], h[2], h[3], h[4]);
        }

        Ok(Digest::from_words(h))
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}
