use glyphtex::{
    map_glyphs, rasterize_image, CellSize, GlyphRamp, Palette, RasterError, Rasterizer,
    RenderConfig, SampleGrid,
};
use image::{DynamicImage, Rgba, RgbaImage};

fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([value, value, value, 0xFF]),
    ))
}

/// Left half solid black, right half solid white.
fn split_black_white(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0xFF]));
    for y in 0..height {
        for x in width / 2..width {
            img.put_pixel(x, y, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
        }
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn identical_inputs_produce_byte_identical_rasters() {
    let source = split_black_white(64, 32);
    let config = RenderConfig {
        grid: SampleGrid { columns: 8, rows: 4 },
        cell: CellSize { width: 8, height: 8 },
        ..RenderConfig::default()
    };

    let first = rasterize_image(&source, &config).unwrap();
    let second = rasterize_image(&source, &config).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());

    let mut cached = Rasterizer::new();
    let third = cached.rasterize(&source, &config).unwrap();
    assert_eq!(first.as_raw(), third.as_raw());
}

#[test]
fn raster_dimensions_follow_grid_and_cell_size() {
    let source = solid(17, 31, 128);
    for (columns, rows, width, height) in
        [(1, 1, 3, 5), (2, 1, 8, 8), (120, 60, 14, 24), (7, 13, 2, 9)]
    {
        let config = RenderConfig {
            grid: SampleGrid { columns, rows },
            cell: CellSize { width, height },
            ..RenderConfig::default()
        };
        let raster = rasterize_image(&source, &config).unwrap();
        assert_eq!(raster.width(), columns * width);
        assert_eq!(raster.height(), rows * height);
    }
}

#[test]
fn glyph_index_is_monotonic_in_brightness() {
    let mut img = RgbaImage::new(256, 4);
    for y in 0..4 {
        for x in 0..256 {
            let v = x as u8;
            img.put_pixel(x, y, Rgba([v, v, v, 0xFF]));
        }
    }
    let source = DynamicImage::ImageRgba8(img);
    let config = RenderConfig {
        grid: SampleGrid { columns: 16, rows: 1 },
        skip_threshold: 0,
        ..RenderConfig::default()
    };

    let grid = map_glyphs(&source, &config).unwrap();
    let ramp = config.ramp.chars();
    let mut last_index = 0;
    for cell in grid.cells().iter().filter(|cell| cell.drawn) {
        let index = ramp.iter().position(|&ch| ch == cell.ch).unwrap();
        assert!(index >= last_index, "glyph weight decreased left-to-right");
        last_index = index;
    }
}

#[test]
fn brightness_at_threshold_is_background_one_above_is_drawn() {
    let config = RenderConfig {
        grid: SampleGrid { columns: 2, rows: 2 },
        cell: CellSize { width: 4, height: 4 },
        skip_threshold: 20,
        ..RenderConfig::default()
    };

    let at = map_glyphs(&solid(8, 8, 20), &config).unwrap();
    assert!(at.cells().iter().all(|cell| !cell.drawn));
    let raster = rasterize_image(&solid(8, 8, 20), &config).unwrap();
    assert!(raster.pixels().all(|pixel| pixel.0 == [0, 0, 0, 0xFF]));

    let above = map_glyphs(&solid(8, 8, 21), &config).unwrap();
    assert!(above.cells().iter().all(|cell| cell.drawn));
}

#[test]
fn empty_ramp_fails_instead_of_producing_empty_output() {
    let config = RenderConfig { ramp: GlyphRamp::new(""), ..RenderConfig::default() };
    let err = rasterize_image(&solid(8, 8, 128), &config).unwrap_err();
    assert!(matches!(err, RasterError::InvalidInput(_)));
}

#[test]
fn black_white_split_draws_only_the_white_cell() {
    let cell = CellSize { width: 8, height: 8 };
    let config = RenderConfig {
        grid: SampleGrid { columns: 2, rows: 1 },
        cell,
        ramp: GlyphRamp::new(" #"),
        palette: Palette::mono([0xFF, 0xFF, 0xFF]),
        skip_threshold: 10,
        ..RenderConfig::default()
    };
    let source = split_black_white(32, 16);

    let grid = map_glyphs(&source, &config).unwrap();
    assert!(!grid.cell(0, 0).drawn);
    assert!(grid.cell(1, 0).drawn);
    assert_eq!(grid.cell(1, 0).ch, '#');
    assert_eq!(grid.cell(1, 0).color, [0xFF, 0xFF, 0xFF]);

    let raster = rasterize_image(&source, &config).unwrap();
    assert_eq!(raster.width(), 2 * cell.width);
    assert_eq!(raster.height(), cell.height);

    // Left cell stays background everywhere; right cell contains white
    // glyph pixels.
    let mut white_in_right = 0;
    for (x, _, pixel) in raster.enumerate_pixels() {
        if x < cell.width {
            assert_eq!(pixel.0, [0, 0, 0, 0xFF]);
        } else if pixel.0 == [0xFF, 0xFF, 0xFF, 0xFF] {
            white_in_right += 1;
        }
    }
    assert!(white_in_right > 0);
}

#[test]
fn uniform_gray_selects_the_same_glyph_everywhere() {
    let config = RenderConfig {
        grid: SampleGrid { columns: 3, rows: 3 },
        cell: CellSize { width: 4, height: 4 },
        ..RenderConfig::default()
    };
    assert_eq!(config.ramp.len(), 10);

    let grid = map_glyphs(&solid(30, 30, 128), &config).unwrap();
    for cell in grid.cells() {
        assert!(cell.drawn);
        assert_eq!(cell.ch, config.ramp.char_at(4));
    }
}

#[test]
fn source_smaller_than_grid_still_fills_every_cell() {
    let config = RenderConfig {
        grid: SampleGrid { columns: 5, rows: 5 },
        cell: CellSize { width: 2, height: 2 },
        skip_threshold: 0,
        ..RenderConfig::default()
    };

    let grid = map_glyphs(&solid(2, 2, 200), &config).unwrap();
    assert_eq!(grid.cells().len(), 25);
    assert!(grid.cells().iter().all(|cell| cell.drawn));
}
