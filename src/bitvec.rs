use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXorAssign, Not};

const WORD_BITS: usize = 64;

/// A fixed-width bit vector backed by 64-bit words.
///
/// The width is fixed at construction and every instance owns its word
/// storage exclusively (`Clone` deep-copies), so snapshots can be retained
/// indefinitely without aliasing. Invariant: all bits in the final word past
/// the declared width ("tail bits") are zero after any public operation
/// returns, which makes equality a plain word-wise comparison.
///
/// Mixing vectors of different widths is a programming error and panics.
#[derive(Clone, Debug, Hash)]
pub struct BitVector {
    words: Vec<u64>,
    bits: usize,
}

impl BitVector {
    /// A zero-initialized vector of width `bits`.
    pub fn new(bits: usize) -> Self {
        BitVector {
            words: vec![0; (bits + WORD_BITS - 1) / WORD_BITS],
            bits,
        }
    }

    /// A vector of width `bits` with the single bit `index` set.
    pub fn with_bit(bits: usize, index: usize) -> Self {
        let mut v = Self::new(bits);
        v.set(index);
        v
    }

    /// Width in bits.
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if no bits are set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Value of the bit at `index`.
    pub fn get(&self, index: usize) -> bool {
        self.check_index(index);
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 != 0
    }

    /// Set the bit at `index`.
    pub fn set(&mut self, index: usize) {
        self.check_index(index);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Clear the bit at `index`.
    pub fn clear(&mut self, index: usize) {
        self.check_index(index);
        self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
    }

    /// Population count over the whole vector.
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Flip every bit in place.
    pub fn invert(&mut self) {
        for w in &mut self.words {
            *w = !*w;
        }
        self.mask_tail();
    }

    /// Clear every bit that is set in `rhs`.
    pub fn and_not(&mut self, rhs: &BitVector) {
        self.check_width(rhs);
        for (w, r) in self.words.iter_mut().zip(&rhs.words) {
            *w &= !r;
        }
    }

    /// Shift the whole bit sequence `n` positions toward lower indices
    /// (bit `b` moves to `b - n`). Bits shifted below index 0 are lost;
    /// vacated high positions fill with zero.
    pub fn shift_left(&mut self, n: usize) {
        let full = n / WORD_BITS;
        let part = n % WORD_BITS;
        let len = self.words.len();
        if full > 0 {
            for i in 0..len {
                self.words[i] = if i + full < len { self.words[i + full] } else { 0 };
            }
        }
        if part > 0 {
            for i in 0..len {
                let spill = if i + 1 < len { self.words[i + 1] } else { 0 };
                self.words[i] = self.words[i] >> part | spill << (WORD_BITS - part);
            }
        }
        self.mask_tail();
    }

    /// Shift the whole bit sequence `n` positions toward higher indices
    /// (bit `b` moves to `b + n`). Bits shifted past the width are lost;
    /// vacated low positions fill with zero.
    pub fn shift_right(&mut self, n: usize) {
        let full = n / WORD_BITS;
        let part = n % WORD_BITS;
        let len = self.words.len();
        if full > 0 {
            for i in (0..len).rev() {
                self.words[i] = if i >= full { self.words[i - full] } else { 0 };
            }
        }
        if part > 0 {
            for i in (0..len).rev() {
                let spill = if i > 0 { self.words[i - 1] } else { 0 };
                self.words[i] = self.words[i] << part | spill >> (WORD_BITS - part);
            }
        }
        self.mask_tail();
    }

    /// The bit pattern as little-endian bytes. Only defined when the width
    /// is a multiple of 8.
    pub fn to_bytes(&self) -> Vec<u8> {
        assert!(
            self.bits % 8 == 0,
            "to_bytes() requires a byte-aligned width, got {}",
            self.bits
        );
        (0..self.bits / 8)
            .map(|i| (self.words[i / 8] >> (i % 8 * 8)) as u8)
            .collect()
    }

    /// Zero the tail bits of the final word.
    fn mask_tail(&mut self) {
        let rem = self.bits % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << rem) - 1;
            }
        }
    }

    fn is_normalized(&self) -> bool {
        let rem = self.bits % WORD_BITS;
        rem == 0 || self.words.last().map_or(true, |w| w >> rem == 0)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.bits,
            "bit index {} out of range for width {}",
            index,
            self.bits
        );
    }

    fn check_width(&self, rhs: &BitVector) {
        assert_eq!(
            self.bits, rhs.bits,
            "bit vector width mismatch: {} vs {}",
            self.bits, rhs.bits
        );
    }
}

impl PartialEq for BitVector {
    fn eq(&self, rhs: &BitVector) -> bool {
        debug_assert!(self.is_normalized() && rhs.is_normalized());
        self.bits == rhs.bits && self.words == rhs.words
    }
}

impl Eq for BitVector {}

impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, rhs: &BitVector) {
        self.check_width(rhs);
        for (w, r) in self.words.iter_mut().zip(&rhs.words) {
            *w |= r;
        }
        self.mask_tail();
    }
}

impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, rhs: &BitVector) {
        self.check_width(rhs);
        for (w, r) in self.words.iter_mut().zip(&rhs.words) {
            *w &= r;
        }
    }
}

impl BitXorAssign<&BitVector> for BitVector {
    fn bitxor_assign(&mut self, rhs: &BitVector) {
        self.check_width(rhs);
        for (w, r) in self.words.iter_mut().zip(&rhs.words) {
            *w ^= r;
        }
        self.mask_tail();
    }
}

impl BitOr<&BitVector> for &BitVector {
    type Output = BitVector;

    fn bitor(self, rhs: &BitVector) -> BitVector {
        let mut out = self.clone();
        out |= rhs;
        out
    }
}

impl BitAnd<&BitVector> for &BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: &BitVector) -> BitVector {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        let mut out = self.clone();
        out.invert();
        out
    }
}
