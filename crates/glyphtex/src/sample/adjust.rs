/// Optional pre-mapping adjustment of the brightness plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjust {
    pub invert: bool,
    /// Brightness offset in the range [-255.0, 255.0].
    pub brightness: f32,
    /// Contrast offset in the range [-255.0, 255.0].
    pub contrast: f32,
}

impl Default for Adjust {
    fn default() -> Self {
        Self { invert: false, brightness: 0.0, contrast: 0.0 }
    }
}

impl Adjust {
    pub fn is_noop(&self) -> bool {
        !self.invert && self.brightness == 0.0 && self.contrast == 0.0
    }
}

pub fn apply(plane: &mut [u8], adjust: Adjust) {
    if adjust.is_noop() {
        return;
    }

    let contrast = adjust.contrast.clamp(-255.0, 255.0);
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));
    let offset = adjust.brightness.clamp(-255.0, 255.0);

    for value in plane {
        let mut v = f32::from(*value);
        if adjust.invert {
            v = 255.0 - v;
        }
        v = factor * (v - 128.0) + 128.0 + offset;
        *value = v.clamp(0.0, 255.0).round() as u8;
    }
}
