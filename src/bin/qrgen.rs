use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use qrgen::{ECLevel, QrCode, RenderOptions};

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Generate QR codes as PNG or text art")]
struct Cli {
    /// Output PNG file prefix, ".png" appended (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Image size in pixels
    #[arg(short, long, default_value_t = 256)]
    size: i32,

    /// Print the symbol as text art instead of PNG
    #[arg(short, long)]
    text: bool,

    /// Invert dark and light
    #[arg(short, long)]
    invert: bool,

    /// Disable the quiet-zone border
    #[arg(short = 'd', long)]
    no_border: bool,

    /// Error correction level
    #[arg(short, long, value_enum, default_value_t = Level::High)]
    level: Level,

    /// Content to encode; multiple arguments are joined with spaces
    #[arg(required = true)]
    content: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Low,
    Medium,
    Quartile,
    High,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::Quartile => "quartile",
            Level::High => "high",
        })
    }
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => ECLevel::L,
            Level::Medium => ECLevel::M,
            Level::Quartile => ECLevel::Q,
            Level::High => ECLevel::H,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrgen: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let content = cli.content.join(" ");
    let qr = QrCode::new(content.as_bytes(), cli.level.into())?;

    let mut options = RenderOptions::default();
    if cli.no_border {
        options = options.without_border();
    }

    if cli.text {
        print!("{}", qr.to_text(&options, cli.invert));
        return Ok(());
    }

    if cli.invert {
        options = options.inverted();
    }
    let png = qr.to_png(cli.size, &options)?;
    match &cli.output {
        Some(prefix) => std::fs::write(format!("{prefix}.png"), &png)?,
        None => std::io::stdout().write_all(&png)?,
    }
    Ok(())
}
