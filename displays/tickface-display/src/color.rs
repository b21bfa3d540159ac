//! Native color representation
//!
//! The watch stores colors as one byte, `0bAARRGGBB`: two bits each of
//! alpha, red, green and blue. Conversions from 24-bit RGB keep the top
//! two bits of every channel.

/// An 8-bit ARGB2222 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    argb: u8,
}

impl Color {
    /// Fully transparent
    pub const CLEAR: Color = Color::from_argb(0x00);
    pub const BLACK: Color = Color::from_argb(0xC0);
    pub const WHITE: Color = Color::from_argb(0xFF);
    pub const RED: Color = Color::from_argb(0xF0);
    pub const GREEN: Color = Color::from_argb(0xCC);
    pub const BLUE: Color = Color::from_argb(0xC3);
    pub const YELLOW: Color = Color::from_argb(0xFC);
    pub const LIGHT_GRAY: Color = Color::from_argb(0xEA);
    pub const DARK_GRAY: Color = Color::from_argb(0xD5);

    /// Build from the packed byte
    pub const fn from_argb(argb: u8) -> Self {
        Self { argb }
    }

    /// The packed byte
    pub const fn argb(self) -> u8 {
        self.argb
    }

    /// Opaque color from 8-bit channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0b1100_0000 | ((r >> 6) << 4) | ((g >> 6) << 2) | (b >> 6))
    }

    /// Opaque color from a `0xRRGGBB` value
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_hex(hex: i32) -> Self {
        let hex = hex as u32;
        Self::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Alpha channel, 0..=3
    pub const fn alpha(self) -> u8 {
        self.argb >> 6
    }

    /// Red channel, 0..=3
    pub const fn red(self) -> u8 {
        (self.argb >> 4) & 0b11
    }

    /// Green channel, 0..=3
    pub const fn green(self) -> u8 {
        (self.argb >> 2) & 0b11
    }

    /// Blue channel, 0..=3
    pub const fn blue(self) -> u8 {
        self.argb & 0b11
    }

    /// Expand to `0xRRGGBB`
    pub const fn to_hex(self) -> u32 {
        ((self.red() as u32 * 0x55) << 16)
            | ((self.green() as u32 * 0x55) << 8)
            | (self.blue() as u32 * 0x55)
    }

    /// Perceived brightness, 0..=255 (ITU-R BT.601 weights)
    pub const fn luminance(self) -> u8 {
        let r = self.red() as u32 * 0x55;
        let g = self.green() as u32 * 0x55;
        let b = self.blue() as u32 * 0x55;
        ((r * 299 + g * 587 + b * 114) / 1000) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_primaries() {
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
        assert_eq!(Color::from_hex(0xFF0000), Color::RED);
        assert_eq!(Color::from_hex(0x00FF00), Color::GREEN);
        assert_eq!(Color::from_hex(0x0000FF), Color::BLUE);
    }

    #[test]
    fn test_from_hex_truncates_channels() {
        // 0x40 is the first value of level 1, 0x3F still rounds down to 0
        assert_eq!(Color::from_hex(0x555555), Color::DARK_GRAY);
        assert_eq!(Color::from_hex(0x3F3F3F), Color::BLACK);
        assert_eq!(Color::from_hex(0xAAAAAA), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_out_of_range_hex_is_accepted() {
        assert_eq!(Color::from_hex(0x7F00_0000), Color::BLACK);
        assert_eq!(Color::from_hex(-1), Color::WHITE);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::BLACK.to_hex(), 0x000000);
        assert_eq!(Color::WHITE.to_hex(), 0xFFFFFF);
        assert_eq!(Color::from_hex(0x8040C0).to_hex(), 0xAA55FF);
    }

    #[test]
    fn test_channels() {
        let c = Color::from_argb(0b11_10_01_00);
        assert_eq!(c.alpha(), 3);
        assert_eq!(c.red(), 2);
        assert_eq!(c.green(), 1);
        assert_eq!(c.blue(), 0);
    }

    #[test]
    fn test_luminance() {
        assert_eq!(Color::BLACK.luminance(), 0);
        assert_eq!(Color::WHITE.luminance(), 255);
        assert!(Color::YELLOW.luminance() > Color::BLUE.luminance());
    }
}
