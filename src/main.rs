use anyhow::Context;
use chessbook::guide::{load_openings, GuideRenderer};
use chessbook::{Font, Info};
use clap::Parser;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Render the openings guide PDF from a directory of JSON records
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing one JSON record per opening
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Path of the PDF to write
    #[arg(short, long, default_value = "openings-guide.pdf")]
    output: PathBuf,

    /// TrueType face for regular text
    #[arg(long, default_value = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")]
    font: PathBuf,

    /// TrueType face for bold text
    #[arg(
        long,
        default_value = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"
    )]
    font_bold: PathBuf,
}

fn load_font(path: &Path) -> anyhow::Result<Font> {
    let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    Font::load(bytes).with_context(|| format!("parsing font {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let regular = load_font(&args.font)?;
    let bold = load_font(&args.font_bold)?;

    let openings = load_openings(&args.data)
        .with_context(|| format!("loading opening records from {}", args.data.display()))?;
    log::info!("loaded {} opening records", openings.len());

    let mut doc = GuideRenderer::new(regular, bold).generate(openings);

    doc.set_info(Info::new(
        "Elo Booster: The Ultimate Opening Guide",
        "Elo Booster",
        "Chess opening study guide",
    ));

    let pages = doc.page_count();
    let file = fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    doc.write(BufWriter::new(file))
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {pages} pages to {}", args.output.display());

    Ok(())
}
