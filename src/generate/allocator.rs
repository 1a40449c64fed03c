//! Per-run part number allocation.
//!
//! The allocator is an explicit object owned by the generation run, not
//! process-global state; one allocator per exported file keeps short-form
//! numbering reproducible across runs.

use rand::Rng;

use crate::error::{BomError, Result};

/// Retry ceiling when allocating a number that must differ from the parent.
pub const MAX_PARENT_RETRIES: u32 = 16;

/// Numbers per short-form prefix: A001..A999, then B001.
const NUMBERS_PER_PREFIX: u64 = 999;

/// Prefixes A..Z then AA..ZZ.
const MAX_PREFIXES: u64 = 26 + 26 * 26;

/// Characters used for long-form suffixes.
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Sequential part number allocator.
///
/// Short form yields "A001".."A999", "B001", .. "Z999", "AA001", .. "ZZ999"
/// and fails once the prefix space is exhausted. Long form yields a unique
/// 20-50 character alphanumeric string built from a zero-padded counter
/// prefix plus a random suffix.
#[derive(Debug, Default)]
pub struct PartNumberAllocator {
    counter: u64,
}

impl PartNumberAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart numbering at A001. Call once per generation run.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Letter prefix for a prefix index: 0->A .. 25->Z, 26->AA, 27->AB, ..
    fn prefix(index: u64) -> String {
        if index < 26 {
            char::from(b'A' + index as u8).to_string()
        } else {
            let first = (index - 26) / 26;
            let second = (index - 26) % 26;
            format!(
                "{}{}",
                char::from(b'A' + first as u8),
                char::from(b'A' + second as u8)
            )
        }
    }

    /// Next short-form part number in sequence.
    pub fn next_short(&mut self) -> Result<String> {
        let prefix_index = self.counter / NUMBERS_PER_PREFIX;
        if prefix_index >= MAX_PREFIXES {
            return Err(BomError::AllocatorExhausted);
        }
        let number = self.counter % NUMBERS_PER_PREFIX + 1;
        self.counter += 1;
        Ok(format!("{}{number:03}", Self::prefix(prefix_index)))
    }

    /// Next long-form part number: 20-50 characters, unique per run via the
    /// counter prefix.
    pub fn next_long(&mut self, rng: &mut impl Rng) -> String {
        let length = rng.gen_range(20..=50usize);
        let prefix = format!("P{:06}", self.counter);
        self.counter += 1;
        let mut part_no = String::with_capacity(length);
        part_no.push_str(&prefix);
        while part_no.len() < length {
            let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
            part_no.push(char::from(SUFFIX_CHARSET[idx]));
        }
        part_no
    }

    /// Allocate a part number guaranteed different from `parent`.
    ///
    /// Retries up to [`MAX_PARENT_RETRIES`] times rather than looping
    /// unboundedly on collision.
    pub fn next_for_parent(
        &mut self,
        parent: &str,
        long_form: bool,
        rng: &mut impl Rng,
    ) -> Result<String> {
        for _ in 0..MAX_PARENT_RETRIES {
            let candidate = if long_form {
                self.next_long(rng)
            } else {
                self.next_short()?
            };
            if candidate != parent {
                return Ok(candidate);
            }
        }
        Err(BomError::PartNumberCollision {
            parent: parent.to_string(),
            attempts: MAX_PARENT_RETRIES,
        })
    }
}
