mod glyph;
mod sample;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

pub use glyph::{
    grid::{GlyphCell, GlyphGrid},
    palette::{Palette, PaletteBand},
    ramp::GlyphRamp,
};
pub use sample::{
    adjust::Adjust,
    grid::{CellSize, SampleGrid},
};

use glyph::font;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Everything the rasterization pass depends on besides the source image.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub grid: SampleGrid,
    pub cell: CellSize,
    pub ramp: GlyphRamp,
    pub palette: Palette,
    /// Brightness at or below which a cell is left as background.
    pub skip_threshold: u8,
    /// RGBA fill for the output raster before any glyph is drawn.
    pub background: [u8; 4],
    pub adjust: Adjust,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid: SampleGrid { columns: 120, rows: 60 },
            cell: CellSize { width: 14, height: 24 },
            ramp: GlyphRamp::classic(),
            palette: Palette::savannah(),
            skip_threshold: 20,
            background: [0, 0, 0, 0xFF],
            adjust: Adjust::default(),
        }
    }
}

/// Maps the source image to a glyph grid: one averaged brightness sample per
/// cell, each resolved to a ramp character and a palette band color, or left
/// as background when at or below the skip threshold.
pub fn map_glyphs(
    source: &DynamicImage,
    config: &RenderConfig,
) -> Result<GlyphGrid, RasterError> {
    validate(source, config)?;

    let mut plane = sample::grid::brightness_plane(source, config.grid);
    sample::adjust::apply(&mut plane, config.adjust);

    let mut cells = Vec::with_capacity(plane.len());
    for &brightness in &plane {
        if brightness <= config.skip_threshold {
            cells.push(GlyphCell::background());
            continue;
        }

        let ch = config.ramp.char_at(config.ramp.index_for(brightness));
        let color = config
            .palette
            .color_for(brightness)
            .ok_or(RasterError::InvalidConfiguration("palette does not cover brightness 0"))?;
        cells.push(GlyphCell { ch, color, drawn: true });
    }

    Ok(GlyphGrid::new(config.grid.columns, config.grid.rows, cells))
}

/// Renders the source image into an RGBA glyph raster of exactly
/// `columns * cell.width` by `rows * cell.height` pixels.
pub fn rasterize_image(
    source: &DynamicImage,
    config: &RenderConfig,
) -> Result<RgbaImage, RasterError> {
    let grid = map_glyphs(source, config)?;
    warn_missing_bitmaps(&config.ramp);
    Ok(blit_grid(&grid, config))
}

/// Memoizing front end over [`rasterize_image`].
///
/// Holds the most recent output keyed by the exact input tuple, so a host
/// polling every frame with an unchanged image and configuration pays for
/// one hash of the source bytes instead of a full re-render. One instance
/// per in-flight source; the output buffer is rebuilt wholesale whenever
/// either input changes.
#[derive(Default)]
pub struct Rasterizer {
    cache: Option<CacheEntry>,
}

struct CacheEntry {
    config: RenderConfig,
    source: SourceKey,
    output: RgbaImage,
}

#[derive(PartialEq, Eq)]
struct SourceKey {
    width: u32,
    height: u32,
    digest: u64,
}

impl SourceKey {
    fn of(source: &DynamicImage) -> Self {
        let (width, height) = source.dimensions();
        let mut hasher = DefaultHasher::new();
        source.as_bytes().hash(&mut hasher);
        Self { width, height, digest: hasher.finish() }
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rasterize(
        &mut self,
        source: &DynamicImage,
        config: &RenderConfig,
    ) -> Result<&RgbaImage, RasterError> {
        let key = SourceKey::of(source);
        match &self.cache {
            Some(entry) if entry.source == key && entry.config == *config => {
                log::debug!("source and configuration unchanged, reusing cached raster");
            },
            _ => {
                let output = rasterize_image(source, config)?;
                self.cache = Some(CacheEntry { config: config.clone(), source: key, output });
            },
        }
        Ok(&self.cache.as_ref().expect("cache populated above").output)
    }
}

fn validate(source: &DynamicImage, config: &RenderConfig) -> Result<(), RasterError> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidInput("source image has zero width or height"));
    }
    if config.grid.columns == 0 || config.grid.rows == 0 {
        return Err(RasterError::InvalidInput("sample grid dimensions must be positive"));
    }
    if config.cell.width == 0 || config.cell.height == 0 {
        return Err(RasterError::InvalidInput("glyph cell dimensions must be positive"));
    }
    if config.ramp.is_empty() {
        return Err(RasterError::InvalidInput("glyph ramp is empty"));
    }
    if config.palette.is_empty() {
        return Err(RasterError::InvalidConfiguration("palette is empty"));
    }
    if !config.palette.covers_zero() {
        return Err(RasterError::InvalidConfiguration("palette does not cover brightness 0"));
    }
    Ok(())
}

fn warn_missing_bitmaps(ramp: &GlyphRamp) {
    for &ch in ramp.chars() {
        if font::bitmap(ch).is_none() {
            log::warn!("no built-in bitmap for {ch:?}, rendering as half-tone fill");
        }
    }
}

fn blit_grid(grid: &GlyphGrid, config: &RenderConfig) -> RgbaImage {
    let width = grid.columns() * config.cell.width;
    let height = grid.rows() * config.cell.height;
    let mut raster = RgbaImage::from_pixel(width, height, Rgba(config.background));

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let cell = grid.cell(column, row);
            if !cell.drawn {
                continue;
            }
            font::blit_glyph(
                &mut raster,
                cell.ch,
                column * config.cell.width,
                row * config.cell.height,
                config.cell,
                cell.color,
            );
        }
    }

    raster
}
