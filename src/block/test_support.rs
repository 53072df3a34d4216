//! A reference block writer used only by tests. It produces blocks the way the
//! storage engine's integer encoder does, one strategy at a time.

use crate::block::format::{ENCODING_PACKED, ENCODING_RAW, ENCODING_RLE};
use crate::kernels::leb128;
use crate::kernels::simple8b::{LAYOUTS, MAX_VALUE};
use crate::kernels::zigzag::encode_val;

fn zigzag_deltas(values: &[i64]) -> Vec<u64> {
    let mut prev = 0i64;
    values
        .iter()
        .map(|&v| {
            let delta = v.wrapping_sub(prev);
            prev = v;
            encode_val(delta)
        })
        .collect()
}

pub fn encode_raw(values: &[i64]) -> Vec<u8> {
    let mut out = vec![ENCODING_RAW << 4];
    for delta in zigzag_deltas(values) {
        out.extend_from_slice(&delta.to_be_bytes());
    }
    out
}

/// Greedy Simple8b packing: picks the densest layout that fits the next values.
pub fn pack_simple8b(src: &[u64]) -> Vec<u64> {
    assert!(src.iter().all(|&v| v <= MAX_VALUE), "value too large for simple8b");
    let mut words = Vec::new();
    let mut rest = src;
    while !rest.is_empty() {
        let (selector, layout) = LAYOUTS
            .iter()
            .enumerate()
            .find(|(_, layout)| {
                rest.len() >= layout.n
                    && rest[..layout.n].iter().all(|&v| {
                        if layout.bits == 0 {
                            v == 1
                        } else {
                            v < (1u64 << layout.bits)
                        }
                    })
            })
            .expect("selector 15 fits any value up to MAX_VALUE");

        let mut word = (selector as u64) << 60;
        if layout.bits > 0 {
            for (i, &v) in rest[..layout.n].iter().enumerate() {
                word |= v << (i as u32 * layout.bits);
            }
        }
        words.push(word);
        rest = &rest[layout.n..];
    }
    words
}

/// Packed block; `None` if a delta is too large to pack.
pub fn encode_packed(values: &[i64]) -> Option<Vec<u8>> {
    let deltas = zigzag_deltas(values);
    let (first, rest) = deltas.split_first()?;
    if rest.iter().any(|&d| d > MAX_VALUE) {
        return None;
    }

    let mut out = vec![ENCODING_PACKED << 4];
    // The first value is stored absolute, which equals its delta from zero.
    out.extend_from_slice(&first.to_be_bytes());
    for word in pack_simple8b(rest) {
        out.extend_from_slice(&word.to_be_bytes());
    }
    Some(out)
}

pub fn encode_rle(first: i64, delta: i64, repeat: u64) -> Vec<u8> {
    assert!(repeat >= 1);
    let mut out = vec![ENCODING_RLE << 4];
    out.extend_from_slice(&encode_val(first).to_be_bytes());
    leb128::encode_one(encode_val(delta), &mut out);
    leb128::encode_one(repeat - 1, &mut out);
    out
}

/// RLE block for `values` if they form an arithmetic progression.
pub fn encode_rle_from(values: &[i64]) -> Option<Vec<u8>> {
    let (&first, _) = values.split_first()?;
    let delta = values.get(1).map_or(0, |&second| second.wrapping_sub(first));
    let is_progression = values
        .windows(2)
        .all(|pair| pair[1].wrapping_sub(pair[0]) == delta);
    is_progression.then(|| encode_rle(first, delta, values.len() as u64))
}
