#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl GlyphRamp {
    /// Builds a ramp from a string of characters ordered weakest to
    /// strongest visual weight. An empty ramp is constructible but rejected
    /// at render time.
    pub fn new(chars: impl Into<String>) -> Self {
        Self { chars: chars.into().chars().collect() }
    }

    /// The ten-step ramp used by the globe texture.
    pub fn classic() -> Self {
        Self::new(" .:-=+*#%@")
    }

    /// Long ramp with fine brightness quantization.
    pub fn dense() -> Self {
        Self::new(" .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$")
    }

    /// Block shade characters, coarsest quantization.
    pub fn shades() -> Self {
        Self::new(" ░▒▓█")
    }

    pub fn binary() -> Self {
        Self::new(" #")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Maps a brightness in [0, 255] onto a ramp index. Linear scaling with
    /// an explicit floor and clamp, so brightness 255 selects the final
    /// character and the index never runs past the ramp.
    pub fn index_for(&self, brightness: u8) -> usize {
        debug_assert!(!self.chars.is_empty());
        let top = self.chars.len().saturating_sub(1);
        let index = (f32::from(brightness) / 255.0 * top as f32).floor() as usize;
        index.min(top)
    }

    /// Character at the index, clamped to the end of the ramp. An empty
    /// ramp yields a space.
    pub fn char_at(&self, index: usize) -> char {
        match self.chars.get(index) {
            Some(&ch) => ch,
            None => self.chars.last().copied().unwrap_or(' '),
        }
    }
}
