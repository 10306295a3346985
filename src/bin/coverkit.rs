use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use coverkit::{
    AspectRatio, CanvasConfig, ConfigUpdate, CoverEngine, EngineOpts, ExportFormat, ImageSlot,
    ImageSource, LoadOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "coverkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one cover to PNG or JPEG.
    Render(RenderArgs),
    /// List the supported aspect ratios.
    Ratios,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Canvas config JSON preset. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background photo.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Icon emblem image.
    #[arg(long)]
    icon: Option<PathBuf>,

    /// TTF/OTF font for the title and watermark.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Aspect ratio (`2:1`, `16:9`, `4:3`, `3:2`, `1:1`, `3:4` or `WxH`).
    #[arg(long)]
    aspect: Option<AspectRatio>,

    /// Title text; `\n` separates lines.
    #[arg(long)]
    text: Option<String>,

    /// Watermark label.
    #[arg(long)]
    watermark: Option<String>,

    /// Re-center the title on the canvas after resizing.
    #[arg(long, default_value_t = false)]
    center_text: bool,

    /// JPEG quality (JPEG output only).
    #[arg(long, default_value_t = 90)]
    quality: u8,

    /// Output path; the extension picks the format.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Ratios => cmd_ratios(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("COVERKIT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let format = match args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ExportFormat::from_extension)
    {
        Some(ExportFormat::Jpeg { .. }) => ExportFormat::Jpeg {
            quality: args.quality,
        },
        Some(f) => f,
        None => anyhow::bail!(
            "cannot infer output format from '{}' (use .png, .jpg or .jpeg)",
            args.out.display()
        ),
    };

    let config = match &args.config {
        Some(p) => CanvasConfig::from_path(p)?,
        None => CanvasConfig::default(),
    };
    let mut engine = CoverEngine::new(config, EngineOpts::default())?;

    if let Some(font) = &args.font {
        engine.set_font_path(font)?;
    }

    let mut updates = Vec::new();
    if let Some(aspect) = args.aspect {
        updates.push(ConfigUpdate::AspectRatio(aspect));
    }
    if let Some(text) = &args.text {
        updates.push(ConfigUpdate::Text(text.replace("\\n", "\n")));
    }
    if args.center_text {
        updates.push(ConfigUpdate::RecenterText);
    }
    if let Some(label) = &args.watermark {
        updates.push(ConfigUpdate::WatermarkText(label.clone()));
    }
    engine.apply_all(updates)?;

    for (slot, path) in [
        (ImageSlot::Background, &args.background),
        (ImageSlot::Icon, &args.icon),
    ] {
        let Some(path) = path else {
            continue;
        };
        if let LoadOutcome::Failed { error, .. } =
            engine.load_image_blocking(slot, ImageSource::Path(path.clone()))
        {
            eprintln!("warning: {slot:?} image '{}' skipped: {error}", path.display());
        }
    }

    let bytes = engine.encode(format)?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write cover '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_ratios() -> anyhow::Result<()> {
    for ratio in AspectRatio::PRESETS {
        let size = ratio.size()?;
        println!("{:<5} {}x{}", ratio.label(), size.width, size.height);
    }
    Ok(())
}
