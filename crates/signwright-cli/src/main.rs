use serde::{Deserialize, Serialize};
use signwright::render::manual::{
    self, AlignmentLine, DEFAULT_ALIGNMENT_TOLERANCE_H, SpacingRules, SpacingViolation,
};
use signwright::render::raster::{RasterError, RasterOptions};
use signwright::render::{HeadlessError, SignRenderer, SvgRenderOptions};
use signwright::{PlacedElement, SignDocument, Size, SnapMode, TemplatePreset};
use std::io::{Read, Write};
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Sign(signwright::Error),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Sign(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<signwright::Error> for CliError {
    fn from(value: signwright::Error) -> Self {
        Self::Sign(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        match value {
            HeadlessError::Layout(err) => Self::Sign(err),
        }
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        match value {
            RasterError::Headless(err) => err.into(),
            other => Self::Raster(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Render,
    Check,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            RenderFormat::Svg => "svg",
            RenderFormat::Png => "png",
            RenderFormat::Jpeg => "jpg",
            RenderFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    preset: Option<TemplatePreset>,
    px_per_h: Option<f64>,
    snap: Option<SnapMode>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    grid: bool,
    guides: bool,
    tolerance: f64,
    out: Option<String>,
}

/// Input of `check`: freely placed elements plus optional per-pair minimum gaps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckInput {
    elements: Vec<PlacedElement>,
    #[serde(default)]
    min_spacing: SpacingRules,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOut {
    violations: Vec<SpacingViolation>,
    alignment_lines: Vec<AlignmentLine>,
    board_size: Size,
}

fn usage() -> &'static str {
    "signwright-cli\n\
\n\
USAGE:\n\
  signwright-cli [layout] [--pretty] [--preset standard|compact|spacious] [--px-per-h <n>] [--snap none|round|half-pixel] [<path>|-]\n\
  signwright-cli render [--format svg|png|jpg|pdf] [--scale <n>] [--background <color>] [--grid] [--guides] [--preset <name>] [--px-per-h <n>] [--out <path>] [<path>|-]\n\
  signwright-cli check [--pretty] [--tolerance <h>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - layout and render read a sign document; check reads {\"elements\": [...], \"minSpacing\": {...}}.\n\
  - layout output is unsnapped unless --snap is given.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to writing next to the input file (or ./out.<ext> for stdin).\n\
  - Set SIGNWRIGHT_LOG (e.g. debug) to log pipeline decisions to stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        render_scale: 1.0,
        tolerance: DEFAULT_ALIGNMENT_TOLERANCE_H,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "check" => args.command = Command::Check,
            "--pretty" => args.pretty = true,
            "--grid" => args.grid = true,
            "--guides" => args.guides = true,
            "--preset" => {
                let preset = next_value(&mut it)?;
                args.preset = Some(
                    preset
                        .parse::<TemplatePreset>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--px-per-h" => {
                let px = next_value(&mut it)?
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(px.is_finite() && px > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.px_per_h = Some(px);
            }
            "--snap" => {
                let mode = next_value(&mut it)?;
                args.snap = Some(
                    mode.parse::<SnapMode>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--tolerance" => {
                args.tolerance = next_value(&mut it)?
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.tolerance.is_finite() && args.tolerance >= 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

/// Parses the input document and applies command-line overrides.
fn load_document(text: &str, args: &Args) -> Result<SignDocument, CliError> {
    let mut doc = SignDocument::from_json_str(text)?;
    if let Some(preset) = args.preset {
        preset.apply(&mut doc.template);
    }
    if let Some(px) = args.px_per_h {
        doc.engine.px_per_h = px;
    }
    if let Some(mode) = args.snap {
        doc.engine.snap_mode = mode;
    }
    tracing::debug!(
        name = doc.name.as_str(),
        panels = doc.panels.len(),
        px_per_h = doc.engine.px_per_h,
        "loaded sign document"
    );
    Ok(doc)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;

    match args.command {
        Command::Layout => {
            let doc = load_document(&text, &args)?;
            let renderer = SignRenderer::new();
            let model = signwright::render::layout_document_sync(
                &doc,
                &renderer.layout,
                args.snap.is_some(),
            )?;
            write_json(&model, args.pretty)
        }
        Command::Render => {
            let doc = load_document(&text, &args)?;
            let renderer = SignRenderer::new().with_svg_options(SvgRenderOptions {
                include_grid: args.grid,
                include_guides: args.guides,
                ..SvgRenderOptions::default()
            });
            let raster = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..RasterOptions::default()
            };

            let format = args.render_format;
            let bytes = match format {
                RenderFormat::Svg => {
                    let svg = renderer.render_svg_sync(&doc)?;
                    match args.out.as_deref() {
                        None => print!("{svg}"),
                        Some(path) => write_bytes(svg.as_bytes(), path)?,
                    }
                    return Ok(());
                }
                RenderFormat::Png => renderer.render_png_sync(&doc, &raster)?,
                RenderFormat::Jpeg => renderer.render_jpeg_sync(&doc, &raster)?,
                RenderFormat::Pdf => renderer.render_pdf_sync(&doc)?,
            };
            let out = args.out.clone().unwrap_or_else(|| {
                default_out_path(args.input.as_deref(), format.extension())
                    .to_string_lossy()
                    .to_string()
            });
            tracing::debug!(out = out.as_str(), bytes = bytes.len(), "writing raster output");
            write_bytes(&bytes, &out)
        }
        Command::Check => {
            let input: CheckInput = serde_json::from_str(&text)?;
            let out = CheckOut {
                violations: manual::validate_spacing(&input.elements, &input.min_spacing),
                alignment_lines: manual::detect_alignment_opportunities(
                    &input.elements,
                    args.tolerance,
                ),
                board_size: manual::board_size_for(&input.elements),
            };
            write_json(&out, args.pretty)
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SIGNWRIGHT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; ignore that case.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Sign(err)) if err.is_cardinality() || err.is_content() => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
