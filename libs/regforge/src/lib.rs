//! Packing of named configuration fields into fixed-width register words.
//!
//! A register file is described by a static table of [`ConfigField`]s; each
//! field contributes `(value & mask(width)) << offset` to its destination
//! word. Packing is deliberately permissive: oversized values are masked
//! down (with a warning) rather than rejected, and reserved ranges simply
//! go unclaimed. [`pack_checked`] adds the stricter overlap check for
//! tables that want it.

use std::fmt::{self, Display};

/// Register slots are one 64-bit word apart.
pub const WORD_STRIDE_BYTES: u64 = 8;

/// One named sub-field of a packed register word.
///
/// `offset` is the bit position of the field's least significant bit inside
/// the destination word; `width` is the field size in bits (at most 64).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConfigField {
    pub name: &'static str,
    pub value: u64,
    pub width: u32,
    pub offset: u32,
    /// Index of the destination word within the register file.
    pub word: usize,
}

impl ConfigField {
    fn contribution(&self) -> u64 {
        (self.value & mask(self.width)) << self.offset
    }

    fn claimed_bits(&self) -> u64 {
        mask(self.width) << self.offset
    }
}

fn mask(width: u32) -> u64 {
    match width {
        0 => 0,
        w if w >= 64 => u64::MAX,
        w => (1 << w) - 1,
    }
}

/// Folds every field into its destination word with OR.
///
/// Values wider than their declared field width are masked down without
/// failing; fields aimed past `word_count` are skipped. Both cases log a
/// warning so sloppy tables stay visible.
pub fn pack(fields: &[ConfigField], word_count: usize) -> Vec<u64> {
    let mut words = vec![0u64; word_count];
    for field in fields {
        if field.word >= word_count {
            log::warn!(
                "{}: targets word {} of a {}-word register file, skipping",
                field.name,
                field.word,
                word_count
            );
            continue;
        }
        if field.value & !mask(field.width) != 0 {
            log::warn!(
                "{}: value {:#x} does not fit in {} bits, masking",
                field.name,
                field.value,
                field.width
            );
        }
        words[field.word] |= field.contribution();
    }
    words
}

/// Two fields claiming the same bit of the same word.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldOverlap {
    pub word: usize,
    pub first: &'static str,
    pub second: &'static str,
}

impl Display for FieldOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fields `{}` and `{}` overlap in word {}",
            self.first, self.second, self.word
        )
    }
}

/// Like [`pack`], but refuses tables where two fields overlap.
///
/// Overlapping fields OR together silently in [`pack`]; this is the opt-in
/// validation pass for callers that would rather hear about it.
pub fn pack_checked(fields: &[ConfigField], word_count: usize) -> Result<Vec<u64>, FieldOverlap> {
    for (i, field) in fields.iter().enumerate() {
        for earlier in &fields[..i] {
            if earlier.word == field.word && earlier.claimed_bits() & field.claimed_bits() != 0 {
                return Err(FieldOverlap {
                    word: field.word,
                    first: earlier.name,
                    second: field.name,
                });
            }
        }
    }
    Ok(pack(fields, word_count))
}

/// A fixed register-file layout: a block of 64-bit words at consecutive
/// addresses, each assembled from the fields that target it.
#[derive(Debug, Copy, Clone)]
pub struct RegFile {
    pub name: &'static str,
    pub base_addr: u64,
    pub word_count: usize,
    pub fields: &'static [ConfigField],
}

/// One packed word paired with its target address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedWord {
    pub index: usize,
    pub address: u64,
    pub value: u64,
}

impl RegFile {
    pub fn pack(&self) -> Vec<PackedWord> {
        self.with_addresses(pack(self.fields, self.word_count))
    }

    pub fn pack_checked(&self) -> Result<Vec<PackedWord>, FieldOverlap> {
        pack_checked(self.fields, self.word_count).map(|words| self.with_addresses(words))
    }

    fn with_addresses(&self, words: Vec<u64>) -> Vec<PackedWord> {
        words
            .into_iter()
            .enumerate()
            .map(|(index, value)| PackedWord {
                index,
                address: self.base_addr + index as u64 * WORD_STRIDE_BYTES,
                value,
            })
            .collect()
    }
}
