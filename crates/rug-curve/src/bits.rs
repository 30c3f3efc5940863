//! Bit interleaving shared by the Hilbert and Morton encoders.

/// Spread the 32 bits of `v` over the even bit positions of a `u64`
/// (bit `i` moves to bit `2i`), leaving a zero between each.
#[inline]
pub fn part1by1(v: u32) -> u64 {
    let mut n = v as u64;
    n = (n | (n << 16)) & 0x0000_ffff_0000_ffff;
    n = (n | (n << 8)) & 0x00ff_00ff_00ff_00ff;
    n = (n | (n << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n | (n << 2)) & 0x3333_3333_3333_3333;
    n = (n | (n << 1)) & 0x5555_5555_5555_5555;
    n
}

/// Inverse of [`part1by1`]: gather the even bits of `n`.
#[inline]
pub fn compact1by1(n: u64) -> u32 {
    let mut n = n & 0x5555_5555_5555_5555;
    n = (n | (n >> 1)) & 0x3333_3333_3333_3333;
    n = (n | (n >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    n = (n | (n >> 4)) & 0x00ff_00ff_00ff_00ff;
    n = (n | (n >> 8)) & 0x0000_ffff_0000_ffff;
    n = (n | (n >> 16)) & 0x0000_0000_ffff_ffff;
    n as u32
}

/// Interleave two bit streams into one integer.
///
/// Bit `i` of `even` lands at position `2i`, bit `i` of `odd` at `2i + 1`,
/// so within each pair the odd stream holds the higher bit.
#[inline]
pub fn interleave(odd: u32, even: u32) -> u64 {
    part1by1(even) | (part1by1(odd) << 1)
}
