use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

    /// 8-bit channels with a normalized alpha, as in CSS `rgba(r, g, b, a)`.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// Opaque color from a packed `0xRRGGBB` literal.
    #[must_use]
    pub fn from_rgb24(rgb: u32) -> Self {
        let [_, red, green, blue] = rgb.to_be_bytes();
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> DeckResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DeckError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_rgb_expands_to_normalized_channels() {
        let color = Color::from_rgb24(0xe7_4c_3c);
        assert!((color.red - 231.0 / 255.0).abs() < 1e-12);
        assert!((color.blue - 60.0 / 255.0).abs() < 1e-12);
        assert!((color.alpha - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_alpha_fails_validation() {
        assert!(Color::rgb(0.0, 0.0, 0.0).with_alpha(1.5).validate().is_err());
    }
}
