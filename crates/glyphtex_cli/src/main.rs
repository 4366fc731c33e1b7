use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glyphtex::{
    map_glyphs, rasterize_image, Adjust, CellSize, GlyphRamp, Palette, RenderConfig, SampleGrid,
};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render images into colored glyph textures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the glyph grid as text for a quick preview
    Preview(PreviewArgs),
    /// Render an image into a glyph texture and write it as a PNG
    Render(RenderArgs),
    /// Render every image in a directory to PNG glyph textures
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image path
    input: PathBuf,
    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input directory of frame images
    input: PathBuf,
    /// Output directory for rendered PNG frames
    #[arg(short, long)]
    out_dir: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Sample grid columns
    #[arg(long, default_value_t = 120)]
    columns: u32,
    /// Sample grid rows
    #[arg(long, default_value_t = 60)]
    rows: u32,
    /// Pixel width of one glyph cell
    #[arg(long, default_value_t = 14)]
    cell_width: u32,
    /// Pixel height of one glyph cell
    #[arg(long, default_value_t = 24)]
    cell_height: u32,
    /// Ramp preset mapping brightness to glyphs
    #[arg(long, value_enum, default_value = "classic")]
    ramp: RampPreset,
    /// Palette preset mapping brightness to color bands
    #[arg(long, value_enum, default_value = "savannah")]
    palette: PalettePreset,
    /// Brightness at or below which a cell stays background (0-255)
    #[arg(long, default_value_t = 20)]
    skip_threshold: u8,
    /// Invert brightness before mapping
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// Brightness adjustment (-255..255)
    #[arg(long, default_value_t = 0.0)]
    brightness: f32,
    /// Contrast adjustment (-255..255)
    #[arg(long, default_value_t = 0.0)]
    contrast: f32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RampPreset {
    Classic,
    Dense,
    Shades,
    Binary,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PalettePreset {
    Savannah,
    Mono,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Render(args) => render(args),
        Commands::Batch(args) => batch(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let image =
        image::open(&args.input).with_context(|| format!("failed to open {:?}", args.input))?;
    let grid = map_glyphs(&image, &args.settings.to_config())
        .with_context(|| format!("failed to render {:?}", args.input))?;

    for row in grid.text_rows() {
        println!("{}", row);
    }

    Ok(())
}

fn render(args: RenderArgs) -> Result<()> {
    let image =
        image::open(&args.input).with_context(|| format!("failed to open {:?}", args.input))?;
    let raster = rasterize_image(&image, &args.settings.to_config())
        .with_context(|| format!("failed to render {:?}", args.input))?;

    raster.save(&args.output).with_context(|| format!("failed to write {:?}", args.output))?;
    Ok(())
}

fn batch(args: BatchArgs) -> Result<()> {
    let config = args.settings.to_config();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let frames = collect_frames(&args.input)?;
    let progress = ProgressBar::new(frames.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames",
        )?
        .progress_chars("=> "),
    );

    for (index, path) in frames.into_iter().enumerate() {
        let image =
            image::open(&path).with_context(|| format!("failed to open image {:?}", path))?;
        let raster = rasterize_image(&image, &config)
            .with_context(|| format!("failed to render frame {}", index))?;

        let frame_path = args.out_dir.join(format!("frame_{:04}.png", index));
        raster.save(&frame_path).with_context(|| format!("failed to write {:?}", frame_path))?;
        progress.inc(1);
    }

    progress.finish_with_message(format!("Frames written to {:?}", args.out_dir));
    Ok(())
}

fn collect_frames(path: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    entries.sort();
    if entries.is_empty() {
        anyhow::bail!("no image files found in {:?}", path);
    }
    Ok(entries)
}

impl RenderSettings {
    fn to_config(&self) -> RenderConfig {
        RenderConfig {
            grid: SampleGrid { columns: self.columns, rows: self.rows },
            cell: CellSize { width: self.cell_width, height: self.cell_height },
            ramp: self.ramp.to_ramp(),
            palette: self.palette.to_palette(),
            skip_threshold: self.skip_threshold,
            adjust: Adjust {
                invert: self.invert,
                brightness: self.brightness,
                contrast: self.contrast,
            },
            ..RenderConfig::default()
        }
    }
}

impl RampPreset {
    fn to_ramp(self) -> GlyphRamp {
        match self {
            RampPreset::Classic => GlyphRamp::classic(),
            RampPreset::Dense => GlyphRamp::dense(),
            RampPreset::Shades => GlyphRamp::shades(),
            RampPreset::Binary => GlyphRamp::binary(),
        }
    }
}

impl PalettePreset {
    fn to_palette(self) -> Palette {
        match self {
            PalettePreset::Savannah => Palette::savannah(),
            PalettePreset::Mono => Palette::mono([0xFF, 0xFF, 0xFF]),
        }
    }
}
