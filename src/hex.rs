use std::{
    fmt::Display,
    ops::{BitOr, Shl, Shr},
};

/// Errors produced while decoding a hexadecimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexDecodeError {
    /// A byte outside `[0-9a-fA-F]` at the given offset of the input.
    NonHexDigit { index: usize },
    /// The input ended partway through an element's digit group; `remaining`
    /// digits were left over.
    IncompleteGroup { remaining: usize },
}

impl Display for HexDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HexDecodeError::NonHexDigit { index } => {
                write!(f, "Non-hexadecimal digit at input offset {index}")
            }
            HexDecodeError::IncompleteGroup { remaining } => {
                write!(f, "Input ended mid-element with {remaining} digit(s) left over")
            }
        }
    }
}

impl std::error::Error for HexDecodeError {}

/// Unsigned integers that can round-trip through hexadecimal text. Each
/// element encodes to `BITS / 4` digits, most significant first.
pub trait HexInt:
    Copy + From<u8> + Shl<u32, Output = Self> + Shr<u32, Output = Self> + BitOr<Output = Self> {
    const ZERO: Self;
    const BITS: u32;

    /// The low four bits of the value.
    fn low_nibble(self) -> u8;
}

macro_rules! impl_hex_int {
    { $($ty:ty),* } => {
        $(
        impl HexInt for $ty {
            const ZERO: $ty = 0;
            const BITS: u32 = <$ty>::BITS;

            #[allow(clippy::cast_possible_truncation)]
            #[inline]
            fn low_nibble(self) -> u8 {
                (self & 0xF) as u8
            }
        } )*
    }
}

impl_hex_int!(u8, u16, u32, u64, u128, usize);

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encodes a sequence of unsigned integers as uppercase hexadecimal, two
/// digits per byte of the element type with the most significant first.
/// Encoding cannot fail.
///
/// ### Examples
///
/// ```
/// use trawl::hex::encode_hex;
///
/// assert_eq!(encode_hex(b"\x01\xA0"), "01A0");
/// assert_eq!(encode_hex(&[0xDEAD_BEEFu32]), "DEADBEEF");
/// ```
#[must_use]
pub fn encode_hex<T: HexInt>(seq: &[T]) -> String {
    let digits = T::BITS / 4;
    let mut out = String::with_capacity(seq.len() * digits as usize);

    for &value in seq {
        for place in (0..digits).rev() {
            let nibble = (value >> (4 * place)).low_nibble();
            out.push(char::from(HEX_DIGITS[nibble as usize]));
        }
    }

    out
}

/// Decodes a hexadecimal string into a sequence of unsigned integers,
/// consuming `BITS / 4` digits per element. Both digit cases are accepted.
///
/// ### Errors
///
/// Fails with [`HexDecodeError::NonHexDigit`] on the first byte outside
/// `[0-9a-fA-F]`, and with [`HexDecodeError::IncompleteGroup`] if the input
/// ends partway through an element's digit group.
///
/// ### Examples
///
/// ```
/// use trawl::hex::{HexDecodeError, decode_hex};
///
/// assert_eq!(decode_hex::<u8>("deadBEEF"), Ok(vec![0xDE, 0xAD, 0xBE, 0xEF]));
/// assert_eq!(decode_hex::<u16>("12345"), Err(HexDecodeError::IncompleteGroup { remaining: 1 }));
/// ```
pub fn decode_hex<T: HexInt>(hex: &str) -> Result<Vec<T>, HexDecodeError> {
    let digits = (T::BITS / 4) as usize;
    let bytes = hex.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / digits);

    let mut start = 0;
    while start < bytes.len() {
        if bytes.len() - start < digits {
            return Err(HexDecodeError::IncompleteGroup {
                remaining: bytes.len() - start,
            });
        }

        let mut acc = T::ZERO;
        for (offset, &digit) in bytes[start..start + digits].iter().enumerate() {
            let value = hex_value(digit).ok_or(HexDecodeError::NonHexDigit { index: start + offset })?;
            acc = (acc << 4) | T::from(value);
        }

        out.push(acc);
        start += digits;
    }

    Ok(out)
}

#[inline]
fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
