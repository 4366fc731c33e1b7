use image::DynamicImage;

/// Logical sampling resolution, independent of source and output pixel
/// dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    pub columns: u32,
    pub rows: u32,
}

/// Pixel dimensions of one output glyph cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// Downsamples the source to one brightness sample per grid cell.
///
/// Each cell averages its source region channel-wise and takes the
/// unweighted mean of the averaged R, G, B. Alpha is ignored. When the
/// source has fewer pixels than the grid in a dimension, cell regions clamp
/// to at least one pixel, degrading to nearest-neighbor sampling.
pub fn brightness_plane(source: &DynamicImage, grid: SampleGrid) -> Vec<u8> {
    let rgba = source.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug_assert!(width > 0 && height > 0);
    debug_assert!(grid.columns > 0 && grid.rows > 0);

    let mut plane = Vec::with_capacity(grid.columns as usize * grid.rows as usize);

    for cy in 0..u64::from(grid.rows) {
        let y0 = (cy * u64::from(height) / u64::from(grid.rows)) as u32;
        let y1 = ((cy + 1) * u64::from(height) / u64::from(grid.rows)) as u32;
        let y1 = y1.max(y0 + 1);

        for cx in 0..u64::from(grid.columns) {
            let x0 = (cx * u64::from(width) / u64::from(grid.columns)) as u32;
            let x1 = ((cx + 1) * u64::from(width) / u64::from(grid.columns)) as u32;
            let x1 = x1.max(x0 + 1);

            let mut sum = [0u64; 3];
            for y in y0..y1 {
                for x in x0..x1 {
                    let pixel = rgba.get_pixel(x, y).0;
                    sum[0] += u64::from(pixel[0]);
                    sum[1] += u64::from(pixel[1]);
                    sum[2] += u64::from(pixel[2]);
                }
            }

            let count = (u64::from(x1 - x0) * u64::from(y1 - y0)) as f64;
            let mean_r = sum[0] as f64 / count;
            let mean_g = sum[1] as f64 / count;
            let mean_b = sum[2] as f64 / count;
            let brightness = ((mean_r + mean_g + mean_b) / 3.0).round();
            plane.push(brightness.clamp(0.0, 255.0) as u8);
        }
    }

    plane
}
