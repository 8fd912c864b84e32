//! # hub3
//!
//! Prints the HUB3 payment-slip record for one order and renders it as a
//! PDF417 barcode.
//!
//! ## Usage
//! ```text
//! hub3 --order order.json                    # settings from hub3.toml + HUB3_* env
//! hub3 --config shop.toml --order order.json --svg slip.svg --png slip.png
//! hub3 --order order.json --data-uri svg     # <img src> value instead of the record
//! hub3 --preview                             # demo recipient and demo order
//! hub3 --catalogue                           # payment models and purpose codes
//! ```
//!
//! By default stdout carries the record exactly as it goes into the barcode
//! (no trailing newline). Logs go to stderr; `RUST_LOG=debug` for more.

mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use hub3_barcode::{
    render as render_barcode, BarcodeEncoder, EncodeOptions, ImageFormat, Pdf417Encoder,
};
use hub3_core::validation::validate_currency;
use hub3_core::{
    build_record, OrderFacts, PreviewMode, RecipientConfig, PAYMENT_MODELS, PURPOSE_CODES,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Barcode outputs requested on the command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Outputs {
    svg: Option<PathBuf>,
    png: Option<PathBuf>,
    data_uri: Option<ImageFormat>,
}

/// What the invocation asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Catalogue,
    Render {
        config: Option<PathBuf>,
        order: Option<PathBuf>,
        preview: bool,
        outputs: Outputs,
    },
}

const USAGE: &str = "\
HUB3 payment slip generator

Usage: hub3 [OPTIONS]

Options:
  -c, --config <PATH>      Recipient settings (default: platform config dir/hub3.toml)
  -o, --order <PATH>       Order facts as JSON
  -p, --preview            Fill missing settings with demo data; demo order if --order is absent
      --svg <PATH>         Write the PDF417 barcode as SVG
      --png <PATH>         Write the PDF417 barcode as PNG
      --data-uri <FORMAT>  Print a data: URI (svg or png) instead of the record
      --catalogue          List payment models and purpose codes
  -h, --help               Show this help message";

fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut order = None;
    let mut preview = false;
    let mut outputs = Outputs::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("{} requires a path", arg),
            },
            "--order" | "-o" => match args.next() {
                Some(path) => order = Some(PathBuf::from(path)),
                None => bail!("{} requires a path", arg),
            },
            "--svg" => match args.next() {
                Some(path) => outputs.svg = Some(PathBuf::from(path)),
                None => bail!("{} requires a path", arg),
            },
            "--png" => match args.next() {
                Some(path) => outputs.png = Some(PathBuf::from(path)),
                None => bail!("{} requires a path", arg),
            },
            "--data-uri" => match args.next().as_deref() {
                Some("svg") => outputs.data_uri = Some(ImageFormat::Svg),
                Some("png") => outputs.data_uri = Some(ImageFormat::Png),
                Some(other) => bail!("--data-uri takes svg or png, not '{}'", other),
                None => bail!("--data-uri requires a format (svg or png)"),
            },
            "--preview" | "-p" => preview = true,
            "--catalogue" => return Ok(Command::Catalogue),
            "--help" | "-h" => return Ok(Command::Help),
            other => bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Render {
        config,
        order,
        preview,
        outputs,
    })
}

/// Initializes logging to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show env overrides, config lookup, symbol sizes
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_order(path: &Path) -> anyhow::Result<OrderFacts> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;
    let facts: OrderFacts = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse order file {}", path.display()))?;

    if let Some(currency) = facts.currency.as_deref().filter(|c| !c.trim().is_empty()) {
        validate_currency(currency.trim())?;
    }

    Ok(facts)
}

/// Builds the record text from loaded settings and the requested order.
fn build_text(
    recipient: RecipientConfig,
    order: Option<PathBuf>,
    preview: bool,
) -> anyhow::Result<String> {
    let mode = if preview {
        PreviewMode::DemoFallback
    } else {
        PreviewMode::Off
    };
    let recipient = mode.prepare(recipient);

    let facts = match order {
        Some(path) => read_order(&path)?,
        None if preview => OrderFacts::preview(chrono::Local::now().date_naive()),
        None => bail!("--order is required unless --preview is given"),
    };

    let record = build_record(&recipient, &facts).map_err(|e| {
        error!(order = %facts.order_number, error = %e, "Could not build HUB3 record");
        e
    })?;

    info!(order = %facts.order_number, "HUB3 record built");
    Ok(record.to_text())
}

fn options_for(format: ImageFormat) -> EncodeOptions {
    match format {
        ImageFormat::Svg => EncodeOptions::svg(),
        ImageFormat::Png => EncodeOptions::png(),
    }
}

/// Writes the requested barcode files and returns what belongs on stdout:
/// the data URI when one was asked for, the record text otherwise.
///
/// Encoding failures do not abort: the placeholder image is written instead.
fn emit<E: BarcodeEncoder + ?Sized>(
    encoder: &E,
    text: &str,
    outputs: &Outputs,
) -> anyhow::Result<String> {
    let files = [
        (ImageFormat::Svg, outputs.svg.as_deref()),
        (ImageFormat::Png, outputs.png.as_deref()),
    ];

    for (format, path) in files {
        if let Some(path) = path {
            let image = render_barcode(encoder, text, &options_for(format));
            std::fs::write(path, image.bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), %format, "Barcode written");
        }
    }

    Ok(match outputs.data_uri {
        Some(format) => render_barcode(encoder, text, &options_for(format)).to_data_uri(),
        None => text.to_string(),
    })
}

fn print_catalogue() {
    println!("Payment models:");
    for (code, label) in PAYMENT_MODELS {
        println!("  {}  {}", code, label);
    }
    println!();
    println!("Purpose codes:");
    for (code, label) in PURPOSE_CODES {
        println!("  {:<6}  {}", code, label);
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    match parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", USAGE),
        Command::Catalogue => print_catalogue(),
        Command::Render {
            config,
            order,
            preview,
            outputs,
        } => {
            let recipient = config::load(config)?;
            let text = build_text(recipient, order, preview)?;
            let out = emit(&Pdf417Encoder::new(), &text, &outputs)?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
