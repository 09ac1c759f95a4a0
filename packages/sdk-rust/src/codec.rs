//! Byte-slice primitives for the fixed account layouts.
//!
//! [`Reader`] walks a buffer strictly left to right; every read either consumes
//! exactly its field width or fails with [`Error::BufferTooShort`] naming the
//! offset it stopped at. [`Writer`] is the mirror image used to re-encode
//! records, padding included.

use solana_sdk::pubkey::Pubkey;

use crate::error::{Error, Result};
use crate::math::{u128_from_words, u128_to_words};
use crate::state::Accumulator;

// ─── Reader ───────────────────────────────────────────────────────────────────

pub(crate) struct Reader<'a> {
    data:   &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(n).filter(|end| *end <= self.data.len());
        let Some(end) = end else {
            return Err(Error::BufferTooShort {
                offset: self.offset,
                needed: n,
                len:    self.data.len(),
            });
        };
        let bytes = &self.data[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Two little-endian words, low word first.
    pub(crate) fn read_u128(&mut self) -> Result<u128> {
        let lo = self.read_u64()?;
        let hi = self.read_u64()?;
        Ok(u128_from_words(lo, hi))
    }

    pub(crate) fn read_pubkey(&mut self) -> Result<Pubkey> {
        Ok(Pubkey::new_from_array(self.read_array()?))
    }

    pub(crate) fn read_accumulator(&mut self) -> Result<Accumulator> {
        Ok(Accumulator(self.read_array()?))
    }

    pub(crate) fn read_u64_array<const N: usize>(&mut self) -> Result<[u64; N]> {
        let mut out = [0u64; N];
        for word in out.iter_mut() {
            *word = self.read_u64()?;
        }
        Ok(out)
    }

    pub(crate) fn read_u128_array<const N: usize>(&mut self) -> Result<[u128; N]> {
        let mut out = [0u128; N];
        for word in out.iter_mut() {
            *word = self.read_u128()?;
        }
        Ok(out)
    }
}

// ─── Writer ───────────────────────────────────────────────────────────────────

pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(crate) fn with_capacity(len: usize) -> Self {
        Self { buf: Vec::with_capacity(len) }
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub(crate) fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub(crate) fn put_u16(&mut self, v: u16) {
        self.put_bytes(&v.to_le_bytes());
    }

    pub(crate) fn put_u32(&mut self, v: u32) {
        self.put_bytes(&v.to_le_bytes());
    }

    pub(crate) fn put_u64(&mut self, v: u64) {
        self.put_bytes(&v.to_le_bytes());
    }

    /// Low word first, as [`Reader::read_u128`] expects.
    pub(crate) fn put_u128(&mut self, v: u128) {
        let (lo, hi) = u128_to_words(v);
        self.put_u64(lo);
        self.put_u64(hi);
    }

    pub(crate) fn put_pubkey(&mut self, key: &Pubkey) {
        self.put_bytes(key.as_ref());
    }

    pub(crate) fn put_accumulator(&mut self, acc: &Accumulator) {
        self.put_bytes(&acc.0);
    }

    pub(crate) fn put_u64_slice(&mut self, words: &[u64]) {
        words.iter().for_each(|w| self.put_u64(*w));
    }

    pub(crate) fn put_u128_slice(&mut self, words: &[u128]) {
        words.iter().for_each(|w| self.put_u128(*w));
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
