use serde::{Deserialize, Serialize};

/// Linear RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    /// Parse `#RRGGBB` (leading `#` optional). Alpha is 1.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|c| f32::from(c) / 255.0)
        };
        Some(Self([channel(0)?, channel(2)?, channel(4)?, 1.0]))
    }
}
