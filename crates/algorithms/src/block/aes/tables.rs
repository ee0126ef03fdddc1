//! AES constant tables, computed at compile time
//!
//! The S-box, its inverse, and the GF(2⁸) multiplication tables used by
//! MixColumns and its inverse are all built by `const fn` evaluation,
//! so the tables are immutable `const` data with no runtime
//! initialization step.

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        if b & 1 == 1 {
            p ^= a;
        }
        let hi = a & 0x80;
        a <<= 1;
        if hi != 0 {
            a ^= 0x1B;
        }
        b >>= 1;
        i += 1;
    }
    p
}

/// Multiplicative inverse in GF(2⁸) via x^254; maps 0 to 0
const fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// Forward S-box entry: affine transform of the field inverse
const fn sbox_entry(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[x] = sbox_entry(x as u8);
        x += 1;
    }
    table
}

const fn build_inv_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[SBOX[x] as usize] = x as u8;
        x += 1;
    }
    table
}

const fn build_mul_table(factor: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[x] = gf_mul(x as u8, factor);
        x += 1;
    }
    table
}

/// AES forward substitution box
pub(crate) const SBOX: [u8; 256] = build_sbox();

/// AES inverse substitution box
pub(crate) const INV_SBOX: [u8; 256] = build_inv_sbox();

/// Multiplication by 2 in GF(2⁸), used by MixColumns
pub(crate) const MUL2: [u8; 256] = build_mul_table(2);

/// Multiplication by 3 in GF(2⁸), used by MixColumns
pub(crate) const MUL3: [u8; 256] = build_mul_table(3);

/// Multiplication by 9 in GF(2⁸), used by InvMixColumns
pub(crate) const MUL9: [u8; 256] = build_mul_table(9);

/// Multiplication by 11 in GF(2⁸), used by InvMixColumns
pub(crate) const MUL11: [u8; 256] = build_mul_table(11);

/// Multiplication by 13 in GF(2⁸), used by InvMixColumns
pub(crate) const MUL13: [u8; 256] = build_mul_table(13);

/// Multiplication by 14 in GF(2⁸), used by InvMixColumns
pub(crate) const MUL14: [u8; 256] = build_mul_table(14);

/// Round constants for key expansion
pub(crate) const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_known_entries() {
        // FIPS-197 figure 7
        assert_eq!(SBOX[0x00], 0x63);
        assert_eq!(SBOX[0x01], 0x7c);
        assert_eq!(SBOX[0x53], 0xed);
        assert_eq!(SBOX[0xff], 0x16);
    }

    #[test]
    fn inv_sbox_inverts_sbox() {
        for x in 0..=255u8 {
            assert_eq!(INV_SBOX[SBOX[x as usize] as usize], x);
        }
    }

    #[test]
    fn mul_tables_match_field_arithmetic() {
        // xtime identity: MUL2 doubles, MUL3 = MUL2 ^ identity
        for x in 0..=255u8 {
            let doubled = MUL2[x as usize];
            assert_eq!(MUL3[x as usize], doubled ^ x);
        }
        // spot-check the InvMixColumns tables against known products
        assert_eq!(MUL9[0x01], 0x09);
        assert_eq!(MUL11[0x01], 0x0b);
        assert_eq!(MUL13[0x01], 0x0d);
        assert_eq!(MUL14[0x01], 0x0e);
        assert_eq!(MUL14[0x02], 0x1c);
    }
}
