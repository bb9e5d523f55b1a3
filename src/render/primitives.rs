use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes from either a channel object or a `#rrggbb` / `#rrggbbaa` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque_alpha")]
        alpha: f64,
    },
}

fn opaque_alpha() -> f64 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ChartError;

    fn try_from(repr: ColorRepr) -> ChartResult<Self> {
        match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Self::rgba(red, green, blue, alpha)),
        }
    }
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa` notation.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must use #rrggbb or #rrggbbaa notation"
            )));
        }

        let channel = |index: usize| -> ChartResult<u8> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ChartError::InvalidData(format!("color `{input}` is not valid hex")))
        };

        let alpha = if digits.len() == 8 {
            f64::from(channel(6)?) / 255.0
        } else {
            1.0
        };
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?).with_alpha(alpha))
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_parsing_matches_byte_constructor() {
        let parsed = Color::from_hex("#4e79a7").expect("valid hex");
        assert_eq!(parsed, Color::from_rgb8(0x4e, 0x79, 0xa7));
        assert_eq!(parsed.alpha, 1.0);
    }

    #[test]
    fn hex_parsing_rejects_short_or_non_hex_input() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn hex_parsing_rejects_sign_prefixed_channels() {
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn hex_alpha_channel_is_parsed() {
        let parsed = Color::from_hex("#f28e2c33").expect("valid hex");
        assert!((parsed.alpha - 0.2).abs() <= 1e-9);
    }

    #[test]
    fn deserializes_from_hex_string_or_channels() {
        let from_hex: Color = serde_json::from_str("\"#4e79a7\"").expect("hex color");
        assert_eq!(from_hex, Color::from_rgb8(0x4e, 0x79, 0xa7));

        let from_channels: Color =
            serde_json::from_str(r#"{"red":1.0,"green":0.5,"blue":0.0}"#).expect("channels");
        assert_eq!(from_channels, Color::rgb(1.0, 0.5, 0.0));

        assert!(serde_json::from_str::<Color>("\"#+f+f+f\"").is_err());
    }
}
