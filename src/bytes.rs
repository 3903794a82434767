//! Byte-array to string formatting
//!
//! A format is a printf-style string with exactly one integer conversion,
//! applied to every byte in turn, e.g. `"%02x"` for lowercase hex or
//! `"\\x%02X"` for escaped uppercase hex.

use crate::error::{Result, UtilError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Char,
}

/// A parsed per-byte format specifier
///
/// Supported syntax: `%[flags][width]conv` where flags are any of `-` (left
/// align), `0` (zero pad), `+` (sign for decimals) and `#` (alternate form
/// `0x`/`0X`/leading `0`, omitted for a zero byte), and `conv` is one of
/// `d`, `u`, `x`, `X`, `o`, `c`. Widths above [`ByteFormat::MAX_WIDTH`] are rejected.
/// Literal text may surround the conversion; `%%` is a literal percent.
/// Bytes are always treated as unsigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteFormat {
    prefix: String,
    suffix: String,
    conversion: Conversion,
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    alternate: bool,
    width: usize,
}

impl ByteFormat {
    /// Widest field a conversion may request
    pub const MAX_WIDTH: usize = 255;

    /// Parse a format specifier
    ///
    /// # Examples
    /// ```
    /// use transfer_utils::ByteFormat;
    ///
    /// let fmt = ByteFormat::parse("%02x").unwrap();
    /// assert_eq!(fmt.format(0x0a), "0a");
    /// assert!(ByteFormat::parse("no conversion").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| UtilError::InvalidFormat {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut parsed: Option<ByteFormat> = None;
        let mut chars = spec.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if parsed.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };

            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if parsed.is_some() {
                return Err(invalid("more than one conversion"));
            }

            let mut fmt = ByteFormat {
                prefix: String::new(),
                suffix: String::new(),
                conversion: Conversion::Decimal,
                left_align: false,
                zero_pad: false,
                plus_sign: false,
                alternate: false,
                width: 0,
            };

            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => fmt.left_align = true,
                    '0' => fmt.zero_pad = true,
                    '+' => fmt.plus_sign = true,
                    '#' => fmt.alternate = true,
                    _ => break,
                }
                chars.next();
            }

            while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                fmt.width = fmt.width * 10 + digit as usize;
                if fmt.width > Self::MAX_WIDTH {
                    return Err(invalid(&format!("width exceeds {}", Self::MAX_WIDTH)));
                }
                chars.next();
            }

            fmt.conversion = match chars.next() {
                Some('d') | Some('u') => Conversion::Decimal,
                Some('x') => Conversion::LowerHex,
                Some('X') => Conversion::UpperHex,
                Some('o') => Conversion::Octal,
                Some('c') => Conversion::Char,
                Some(other) => return Err(invalid(&format!("unsupported conversion '{}'", other))),
                None => return Err(invalid("incomplete conversion at end of format")),
            };

            parsed = Some(fmt);
        }

        let mut fmt = parsed.ok_or_else(|| invalid("no conversion"))?;
        fmt.prefix = prefix;
        fmt.suffix = suffix;
        Ok(fmt)
    }

    /// Format a single byte
    pub fn format(&self, byte: u8) -> String {
        let (sign, digits) = match self.conversion {
            Conversion::Decimal if self.plus_sign => ("+", byte.to_string()),
            Conversion::Decimal => ("", byte.to_string()),
            Conversion::LowerHex if self.alternate && byte != 0 => ("0x", format!("{:x}", byte)),
            Conversion::LowerHex => ("", format!("{:x}", byte)),
            Conversion::UpperHex if self.alternate && byte != 0 => ("0X", format!("{:X}", byte)),
            Conversion::UpperHex => ("", format!("{:X}", byte)),
            Conversion::Octal if self.alternate && byte != 0 => ("0", format!("{:o}", byte)),
            Conversion::Octal => ("", format!("{:o}", byte)),
            Conversion::Char => ("", char::from(byte).to_string()),
        };

        let len = sign.len() + digits.chars().count();
        let pad = self.width.saturating_sub(len);
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + len + pad);
        out.push_str(&self.prefix);

        if self.left_align {
            out.push_str(sign);
            out.push_str(&digits);
            out.push_str(&" ".repeat(pad));
        } else if self.zero_pad && self.conversion != Conversion::Char {
            out.push_str(sign);
            out.push_str(&"0".repeat(pad));
            out.push_str(&digits);
        } else {
            out.push_str(&" ".repeat(pad));
            out.push_str(sign);
            out.push_str(&digits);
        }

        out.push_str(&self.suffix);
        out
    }

    /// Format every byte and concatenate the results
    pub fn format_all(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.format(b)).collect()
    }
}

impl FromStr for ByteFormat {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        ByteFormat::parse(s)
    }
}

/// Apply a per-byte format to each byte and concatenate with no separator
///
/// # Examples
/// ```
/// use transfer_utils::format_bytes;
///
/// assert_eq!(format_bytes(&[0x0a, 0xff], "%02x").unwrap(), "0aff");
/// assert_eq!(format_bytes(&[1, 2], "%d,").unwrap(), "1,2,");
/// assert_eq!(format_bytes(&[], "%02x").unwrap(), "");
/// ```
pub fn format_bytes(bytes: &[u8], spec: &str) -> Result<String> {
    Ok(ByteFormat::parse(spec)?.format_all(bytes))
}

/// Lowercase two-digit hex of every byte
pub fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
