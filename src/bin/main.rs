use anyhow::{Context, Result};
use clap::Parser;
use neo_sprite::loader;
use neo_sprite::palette::Palette;
use neo_sprite::render::{self, RenderOptions};
use neo_sprite::viewer::{ViewState, Viewer};
use neo_sprite::window::format_with_commas;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neo-sprite-viewer", about = "View the tiles in NeoGeo C ROMs")]
struct Args {
    /// Odd C ROM (C1, C3, ...), or a combined sprite dump with --interleaved
    input: PathBuf,

    /// Even C ROM; found from INPUT's name when omitted
    c2: Option<PathBuf>,

    /// Output PNG, defaults to INPUT with a .png extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// INPUT holds both ROMs with their bytes interleaved
    #[arg(long, default_value_t = false, conflicts_with = "c2")]
    interleaved: bool,

    /// Which group of 1024 tiles to show
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Tiles per row
    #[arg(long, default_value_t = 32)]
    columns: u32,

    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Pixels between tiles
    #[arg(long, default_value_t = 1)]
    gap: u32,

    /// 32 bytes of NeoGeo palette RAM to colour the tiles with
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Draw colour 0 instead of leaving it transparent
    #[arg(long, default_value_t = false)]
    opaque: bool,

    /// Print the tiles as text instead of writing a PNG
    #[arg(long, default_value_t = false)]
    text: bool,
}

fn load_palette(args: &Args) -> Result<Palette> {
    let palette = match &args.palette {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open palette {}", path.display()))?;
            Palette::read_neogeo(&mut BufReader::new(file))
                .with_context(|| format!("failed to read palette {}", path.display()))?
        }
        None => Palette::greyscale(),
    };

    Ok(if args.opaque {
        palette.with_opaque_zero()
    } else {
        palette
    })
}

/// Loads the ROMs named by `args`, reports on them to `out` and draws the
/// selected page. Returns the PNG written, if any.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<Option<PathBuf>> {
    let cdata = match &args.c2 {
        Some(c2) => loader::load_pair(&args.input, c2),
        None => loader::load(&args.input, args.interleaved),
    }
    .with_context(|| format!("failed to load {}", args.input.display()))?;

    let mut viewer = Viewer::new();
    viewer.load(cdata);
    viewer.set_page(args.page);

    let window = viewer.window();
    writeln!(
        out,
        "{}: {} tiles, page {} of {}",
        viewer.cdata().map_or("", |cdata| cdata.filename()),
        format_with_commas(window.total_tiles),
        format_with_commas(window.page.saturating_add(1)),
        format_with_commas(window.page_count().max(1))
    )?;
    if let Some(status) = window.status_message() {
        writeln!(out, "{}", status)?;
    }

    let indices = match window.indices.clone() {
        Some(indices) if !indices.is_empty() => indices,
        _ => {
            log::info!("no tiles to show");
            viewer.mark_loaded();
            return Ok(None);
        }
    };
    let cdata = viewer.cdata().context("nothing loaded")?;

    let written = if args.text {
        write!(out, "{}", render::render_text(cdata, indices)?)?;
        None
    } else {
        let options = RenderOptions {
            columns: args.columns,
            scale: args.scale,
            gap: args.gap,
            ..RenderOptions::default()
        };
        let palette = load_palette(args)?;
        let sheet = render::render_sheet(cdata, indices, &palette, &options)?;

        let output = args
            .output
            .clone()
            .unwrap_or_else(|| args.input.with_extension("png"));
        render::save_png(&sheet, &output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        log::info!("wrote {}", output.display());
        Some(output)
    };

    viewer.tile_rendered(window.num_tiles - 1);
    debug_assert_eq!(viewer.state(), ViewState::Ready);

    Ok(written)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())?;

    Ok(())
}
