/// A single RGB entry of a `PLAYPAL` palette
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WadColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl WadColour {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The `PLAYPAL` lump holds 14 palettes of 256 colours, each colour 3 bytes.
/// Palette 0 is the normal one, the rest tint the screen for damage,
/// pickups and the radiation suit.
#[derive(Debug, Clone, Copy)]
pub struct WadPalette(pub [WadColour; 256]);

impl Default for WadPalette {
    fn default() -> Self {
        Self([WadColour::default(); 256])
    }
}

impl WadPalette {
    pub const SIZE: usize = 256 * 3;

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut palette = Self::default();
        for (c, rgb) in palette.0.iter_mut().zip(bytes.chunks_exact(3)) {
            *c = WadColour::new(rgb[0], rgb[1], rgb[2]);
        }
        palette
    }
}
