#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub const fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::hex("0a0b0c"), Some(Color::rgb(10, 11, 12)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::hex("#fff"), None);
        assert_eq!(Color::hex("#gg0000"), None);
        assert_eq!(Color::hex("#ééé"), None);
    }
}
