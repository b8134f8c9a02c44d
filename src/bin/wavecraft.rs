use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng as _;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use wavecraft::{
    ArtifactSink as _, ContrastGrade, DirectorySink, ExportFormat, Position, ResvgRasterizer,
    Shape, StepClock, WaveConfig, WaveStudio,
};

#[derive(Parser, Debug)]
#[command(name = "wavecraft", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one wave to wave.svg / wave.png / wave.jpg.
    Generate(GenerateArgs),
    /// Print the generated points as JSON.
    Points(WaveArgs),
    /// Print the WCAG contrast ratio of two colors.
    Contrast(ContrastArgs),
    /// Write every frame of a morph as numbered SVG files.
    Animate(AnimateArgs),
    /// Print the default config as JSON.
    Init,
}

#[derive(Args, Debug, Clone)]
struct WaveArgs {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the silhouette.
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Silhouette style.
    #[arg(long, value_enum)]
    shape: Option<ShapeChoice>,

    /// Anchor edge.
    #[arg(long, value_enum)]
    position: Option<PositionChoice>,

    /// Wave body height in design pixels (clamped to 80..=320).
    #[arg(long, allow_negative_numbers = true)]
    height: Option<f64>,

    /// Amplitude (clamped to 0..=1).
    #[arg(long, allow_negative_numbers = true)]
    intensity: Option<f64>,

    /// Fill color (hex or `transparent`).
    #[arg(long)]
    fill: Option<String>,

    /// Background color (hex or `transparent`).
    #[arg(long)]
    background: Option<String>,

    /// Output width in pixels (clamped to 120..=8192).
    #[arg(long, allow_negative_numbers = true)]
    out_width: Option<f64>,

    /// Output height in pixels (clamped to 80..=4096).
    #[arg(long, allow_negative_numbers = true)]
    out_height: Option<f64>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    wave: WaveArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Svg)]
    format: FormatChoice,

    /// Directory the artifact is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Ignore the configured seed and pick a random one.
    #[arg(long, default_value_t = false)]
    randomize: bool,

    /// JPEG quality (1..=100).
    #[arg(long, default_value_t = 92)]
    jpeg_quality: u8,
}

#[derive(Args, Debug)]
struct ContrastArgs {
    /// Foreground hex color.
    #[arg(long)]
    fg: String,

    /// Background hex color.
    #[arg(long)]
    bg: String,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    wave: WaveArgs,

    /// Target seed.
    #[arg(long, allow_negative_numbers = true)]
    to_seed: Option<i64>,

    /// Target style.
    #[arg(long, value_enum)]
    to_shape: Option<ShapeChoice>,

    /// Target anchor edge.
    #[arg(long, value_enum)]
    to_position: Option<PositionChoice>,

    /// Target body height.
    #[arg(long, allow_negative_numbers = true)]
    to_height: Option<f64>,

    /// Target intensity.
    #[arg(long, allow_negative_numbers = true)]
    to_intensity: Option<f64>,

    /// Frames per second of the written sequence.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Directory the frames are written into.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Smooth,
    Peaks,
}

impl From<ShapeChoice> for Shape {
    fn from(v: ShapeChoice) -> Self {
        match v {
            ShapeChoice::Smooth => Shape::Smooth,
            ShapeChoice::Peaks => Shape::Peaks,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PositionChoice {
    Top,
    Bottom,
}

impl From<PositionChoice> for Position {
    fn from(v: PositionChoice) -> Self {
        match v {
            PositionChoice::Top => Position::Top,
            PositionChoice::Bottom => Position::Bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
    #[value(alias = "jpeg")]
    Jpg,
}

impl From<FormatChoice> for ExportFormat {
    fn from(v: FormatChoice) -> Self {
        match v {
            FormatChoice::Svg => ExportFormat::Svg,
            FormatChoice::Png => ExportFormat::Png,
            FormatChoice::Jpg => ExportFormat::Jpeg,
        }
    }
}

// Frames beyond this are never needed: the morph window is well under a second.
const MAX_ANIMATION_FRAMES: usize = 10_000;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Points(args) => cmd_points(args),
        Command::Contrast(args) => cmd_contrast(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Init => cmd_init(),
    }
}

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(args: &WaveArgs) -> anyhow::Result<WaveConfig> {
    let mut cfg = match &args.config {
        Some(path) => WaveConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => WaveConfig::default(),
    };

    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(shape) = args.shape {
        cfg.shape = shape.into();
    }
    if let Some(position) = args.position {
        cfg.position = position.into();
    }
    if let Some(height) = args.height {
        cfg.height = height;
    }
    if let Some(intensity) = args.intensity {
        cfg.intensity = intensity;
    }
    if let Some(fill) = &args.fill {
        cfg.fill.clone_from(fill);
    }
    if let Some(background) = &args.background {
        cfg.background.clone_from(background);
    }

    let mut cfg = cfg.sanitized();
    let size = wavecraft::OutputSize::clamped(
        args.out_width.unwrap_or(f64::from(cfg.output_width)),
        args.out_height.unwrap_or(f64::from(cfg.output_height)),
    );
    cfg.output_width = size.width;
    cfg.output_height = size.height;
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.wave)?;
    if args.randomize {
        cfg.seed = rand::rng().random_range(1..=999_999);
        tracing::info!(seed = cfg.seed, "randomized seed");
    }

    let studio = WaveStudio::new(cfg);
    let rasterizer = ResvgRasterizer::new().with_jpeg_quality(args.jpeg_quality);
    let artifact = studio.export(&rasterizer, args.format.into())?;

    let mut sink = DirectorySink::new(&args.out_dir);
    sink.deliver(&artifact)?;

    eprintln!("wrote {}", args.out_dir.join(artifact.file_name()).display());
    Ok(())
}

fn cmd_points(args: WaveArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let points = wavecraft::generate_points(&cfg.wave_params());
    let json = serde_json::to_string_pretty(&points).context("serialize points")?;
    println!("{json}");
    Ok(())
}

fn cmd_contrast(args: ContrastArgs) -> anyhow::Result<()> {
    let Some(grade) = ContrastGrade::grade(&args.fg, &args.bg) else {
        println!("enter valid colors");
        return Ok(());
    };

    let mark = |pass: bool| if pass { "pass" } else { "fail" };
    println!("ratio: {:.2}:1", grade.ratio);
    println!("AA normal:  {}", mark(grade.aa_normal));
    println!("AA large:   {}", mark(grade.aa_large));
    println!("AAA normal: {}", mark(grade.aaa_normal));
    println!("AAA large:  {}", mark(grade.aaa_large));
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let from = load_config(&args.wave)?;
    let mut studio = WaveStudio::new(from);

    if let Some(height) = args.to_height {
        studio.set_height(height);
    }
    if let Some(intensity) = args.to_intensity {
        studio.set_intensity(intensity);
    }
    if let Some(position) = args.to_position {
        studio.set_position(position.into());
    }
    if let Some(shape) = args.to_shape {
        studio.set_shape(shape.into());
    }
    if let Some(seed) = args.to_seed {
        studio.randomize_with(seed);
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut clock = StepClock::from_fps(args.fps);
    let frames = studio.play(&mut clock, MAX_ANIMATION_FRAMES, |i, s| {
        write_frame(&args.out_dir, i, &s.svg_markup())?;
        Ok(())
    })?;

    if frames == 0 {
        write_frame(&args.out_dir, 0, &studio.svg_markup())?;
    }
    eprintln!(
        "wrote {} frame(s) to {}",
        frames.max(1),
        args.out_dir.display()
    );
    Ok(())
}

fn write_frame(dir: &Path, index: usize, markup: &str) -> anyhow::Result<()> {
    let path = dir.join(format!("frame_{index:04}.svg"));
    std::fs::write(&path, markup).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_init() -> anyhow::Result<()> {
    println!("{}", WaveConfig::default().to_json_pretty()?);
    Ok(())
}
