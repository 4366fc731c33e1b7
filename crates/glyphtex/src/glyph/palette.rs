/// A brightness threshold and the color drawn for samples at or above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteBand {
    pub min_brightness: u8,
    /// Band color encoded as RGB bytes.
    pub color: [u8; 3],
}

/// Discrete color bands selected by brightness, highest threshold first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    bands: Vec<PaletteBand>,
}

impl Palette {
    /// Builds a palette from bands in any order; selection always evaluates
    /// highest threshold first.
    pub fn new(mut bands: Vec<PaletteBand>) -> Self {
        bands.sort_by(|a, b| b.min_brightness.cmp(&a.min_brightness));
        Self { bands }
    }

    /// Gold highlights, teal midtones, dark teal shadows.
    pub fn savannah() -> Self {
        Self::new(vec![
            PaletteBand { min_brightness: 221, color: [0xF4, 0xD0, 0x3F] },
            PaletteBand { min_brightness: 101, color: [0x1A, 0xBC, 0x5D] },
            PaletteBand { min_brightness: 0, color: [0x11, 0x55, 0x44] },
        ])
    }

    /// A single band covering the whole brightness domain.
    pub fn mono(color: [u8; 3]) -> Self {
        Self::new(vec![PaletteBand { min_brightness: 0, color }])
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn bands(&self) -> &[PaletteBand] {
        &self.bands
    }

    /// True when some band admits brightness 0, i.e. selection can never
    /// fail to resolve.
    pub fn covers_zero(&self) -> bool {
        self.bands.last().map_or(false, |band| band.min_brightness == 0)
    }

    /// First band (highest threshold first) whose threshold the brightness
    /// meets or exceeds.
    pub fn color_for(&self, brightness: u8) -> Option<[u8; 3]> {
        self.bands.iter().find(|band| brightness >= band.min_brightness).map(|band| band.color)
    }
}
