use crate::error::{DecodeError, DecodeResult};

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7F;
const MAX_BYTES: usize = 5;

/// Number of bytes `value` occupies once encoded.
#[inline(always)]
pub fn bytelog(value: u32) -> usize {
    if value < (1 << 7) {
        1
    } else if value < (1 << 14) {
        2
    } else if value < (1 << 21) {
        3
    } else if value < (1 << 28) {
        4
    } else {
        5
    }
}

#[inline(always)]
pub fn zigzag_encode(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[inline(always)]
pub fn zigzag_decode(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

pub fn compute_compressed_size_in_bytes(input: &[u32]) -> usize {
    input.iter().map(|&value| bytelog(value)).sum()
}

pub fn compute_compressed_size_in_bytes_signed(input: &[i32]) -> usize {
    input
        .iter()
        .map(|&value| bytelog(zigzag_encode(value)))
        .sum()
}

pub fn compress(input: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(compute_compressed_size_in_bytes(input));
    for &value in input {
        write_varint(&mut output, value);
    }
    output
}

pub fn compress_signed(input: &[i32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(compute_compressed_size_in_bytes_signed(input));
    for &value in input {
        write_varint(&mut output, zigzag_encode(value));
    }
    output
}

/// Counts encoded integers without decoding them: every integer ends with
/// exactly one byte whose continuation bit is clear.
pub fn compute_how_many_integers(input: &[u8]) -> usize {
    input
        .iter()
        .filter(|&&byte| byte & CONTINUATION == 0)
        .count()
}

pub fn uncompress(input: &[u8]) -> DecodeResult<Vec<u32>> {
    let mut output = Vec::with_capacity(compute_how_many_integers(input));
    let mut pos = 0usize;
    while pos < input.len() {
        let (value, next) = read_varint(input, pos)?;
        output.push(value);
        pos = next;
    }
    Ok(output)
}

pub fn uncompress_signed(input: &[u8]) -> DecodeResult<Vec<i32>> {
    let mut output = Vec::with_capacity(compute_how_many_integers(input));
    let mut pos = 0usize;
    while pos < input.len() {
        let (value, next) = read_varint(input, pos)?;
        output.push(zigzag_decode(value));
        pos = next;
    }
    Ok(output)
}

#[inline(always)]
fn write_varint(output: &mut Vec<u8>, mut value: u32) {
    while value >= u32::from(CONTINUATION) {
        output.push((value as u8 & PAYLOAD) | CONTINUATION);
        value >>= 7;
    }
    output.push(value as u8);
}

// Returns the decoded value and the offset of the byte after it.
fn read_varint(input: &[u8], start: usize) -> DecodeResult<(u32, usize)> {
    let mut value = 0u32;
    for index in 0..MAX_BYTES {
        let offset = start + index;
        let byte = match input.get(offset) {
            Some(&byte) => byte,
            None => return Err(DecodeError::Truncated { offset }),
        };
        if index == MAX_BYTES - 1 && byte > 0x0F {
            return Err(DecodeError::Overflow { offset });
        }
        value |= u32::from(byte & PAYLOAD) << (7 * index);
        if byte & CONTINUATION == 0 {
            return Ok((value, offset + 1));
        }
    }
    Err(DecodeError::Overflow {
        offset: start + MAX_BYTES - 1,
    })
}
