//! Raw RGB cell colors as stored in CUB files

/// A single cell color, compared by exact byte identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Cells holding this value are empty and never produce geometry or materials.
    pub const TRANSPARENT: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a 3-byte `[r, g, b]` group.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }

    /// Components scaled to the unit range (byte / 255).
    pub fn normalized(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| c as f64 / 255.0)
    }
}
