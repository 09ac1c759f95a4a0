//! Synthetic account buffers with values placed at absolute byte offsets.

#![allow(dead_code)]

use cp_amm_sdk::constants::{POOL_DISCRIMINATOR, POOL_LEN, POSITION_DISCRIMINATOR, POSITION_LEN};

pub fn pool_buffer() -> Vec<u8> {
    let mut buf = vec![0u8; POOL_LEN];
    buf[..8].copy_from_slice(&POOL_DISCRIMINATOR);
    buf
}

pub fn position_buffer() -> Vec<u8> {
    let mut buf = vec![0u8; POSITION_LEN];
    buf[..8].copy_from_slice(&POSITION_DISCRIMINATOR);
    buf
}

pub fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

pub fn put_u16(buf: &mut [u8], offset: usize, v: u16) {
    put(buf, offset, &v.to_le_bytes());
}

pub fn put_u32(buf: &mut [u8], offset: usize, v: u32) {
    put(buf, offset, &v.to_le_bytes());
}

pub fn put_u64(buf: &mut [u8], offset: usize, v: u64) {
    put(buf, offset, &v.to_le_bytes());
}

/// Low word at `offset`, high word at `offset + 8`.
pub fn put_words(buf: &mut [u8], offset: usize, lo: u64, hi: u64) {
    put_u64(buf, offset, lo);
    put_u64(buf, offset + 8, hi);
}

/// Numeric value in the low 16 bytes of a 32-byte accumulator slot.
pub fn put_accumulator(buf: &mut [u8], offset: usize, v: u128) {
    put(buf, offset, &v.to_le_bytes());
}

/// Distinct, recognisable 32-byte key.
pub fn key(tag: u8) -> [u8; 32] {
    let mut k = [tag; 32];
    k[0] = 0xa0;
    k[31] = tag.wrapping_add(1);
    k
}
