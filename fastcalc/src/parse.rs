//! Fixed-point decoding of temperatures matching `-?[0-9]{1,2}\.[0-9]`.
//!
//! Both forms return the value multiplied by ten. Neither validates its input:
//! anything outside the grammar yields an unspecified number, so callers must
//! establish the record shape first.

const ZERO: i64 = b'0' as i64;

// Digits are 0x3_ and carry bit 4; '-' (0x2d), '.' (0x2e) and '\n' (0x0a) do not.
const DIGIT_BIT: u64 = 0x10;
// Bit 4 of byte 1 and byte 2: where the dot sits for 1 and 2 integer digits.
const DOT_PROBE: u64 = 0x10_10_00;
// Digit lanes of a normalized `xy.z` word: byte 0 = x, byte 1 = y, byte 3 = z.
const LANES: u64 = 0x0f_00_0f_0f;
// x*100 + y*10 + z lands in bits 24.. after one multiply.
const WEIGHTS: u64 = 0x64_0a_00_01;
const VALUE_MASK: u64 = 0x3ff;

/// Parses `data`, which must be exactly the number: an optional `-`, then
/// three (`d.d`) or four (`dd.d`) bytes.
#[inline]
pub fn parse_number(data: &[u8]) -> i64 {
    let (negative, digits) = match data.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, data),
    };

    let magnitude = match *digits {
        [ones, _, tenths] => ones as i64 * 10 + tenths as i64 - ZERO * (10 + 1),
        [tens, ones, _, tenths] => {
            tens as i64 * 100 + ones as i64 * 10 + tenths as i64 - ZERO * (100 + 10 + 1)
        }
        _ => 0,
    };

    if negative { -magnitude } else { magnitude }
}

/// Parses the number at the start of `word`, the next 8 input bytes loaded
/// little-endian. Bytes after the number are ignored.
///
/// Returns the scaled value and the number of bytes it occupies, sign and dot
/// included.
#[inline]
pub fn parse_number_le(word: u64) -> (i64, usize) {
    // 1 when the first byte is '-', else 0.
    let negative = (!word & DIGIT_BIT) >> 4;

    // Drop the sign byte so the first digit is in byte 0.
    let absolute = word >> (negative << 3);

    // 12 when byte 1 is the dot (`d.d`), 20 when byte 2 is (`dd.d`).
    let dot_pos = (!absolute & DOT_PROBE).trailing_zeros();

    // 8 for one integer digit, 0 for two; `& 8` keeps the shift in range.
    let norm_shift = 20u32.wrapping_sub(dot_pos) & 8;

    // Prepend a zero tens digit when needed and strip ASCII down to BCD.
    let normalized = (absolute << norm_shift) & LANES;

    let value = (normalized.wrapping_mul(WEIGHTS) >> 24) & VALUE_MASK;

    // value ^ 0 + 0 or value ^ !0 + 1, i.e. two's complement negation.
    let signed = (value ^ negative.wrapping_neg()).wrapping_add(negative) as i64;

    let size = negative as usize + 4 - (norm_shift as usize >> 3);
    (signed, size)
}

/// Loads the first 8 bytes of `bytes` as a little-endian word.
#[inline]
pub fn load_u64_le(bytes: &[u8]) -> u64 {
    let mut arr = [0u8; 8];
    arr.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(arr)
}

/// True when `data` is exactly `-?[0-9]{1,2}\.[0-9]`.
pub fn is_valid_number(data: &[u8]) -> bool {
    let digits = data.strip_prefix(b"-").unwrap_or(data);
    match *digits {
        [a, b'.', c] => a.is_ascii_digit() && c.is_ascii_digit(),
        [a, b, b'.', c] => a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit(),
        _ => false,
    }
}
