use std::fmt;

/// A cell on the planet surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Builds a coordinate from the raw text typed at the X and Y prompts.
    pub fn from_raw(raw_x: &str, raw_y: &str) -> Self {
        Self::new(parse_axis(raw_x), parse_axis(raw_y))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coerces one axis of operator input to an integer.
///
/// Leading whitespace is skipped, then an optional sign and the run of digits
/// that follows it are read; everything after the digits is ignored. Input
/// with no leading digits, including the empty string, becomes 0. Values
/// beyond the `i32` range saturate at `i32::MIN`/`i32::MAX`.
pub fn parse_axis(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            let digit = i32::from(digit - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
