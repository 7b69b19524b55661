use clap::Parser;
use log::info;
use serde_json::Value;
use stagerider::{Entitlement, PipelineBuilder, PipelineError, RenderRequest};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Generate a technical rider PDF from rider JSON.
#[derive(Parser, Debug)]
#[command(name = "stagerider", version)]
struct Cli {
    /// Path to the rider JSON file.
    input: PathBuf,

    /// Output file, or a directory to write the generated filename into.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document locale (pt, en).
    #[arg(short, long)]
    locale: Option<String>,

    /// Theme id. Only honored with --pro.
    #[arg(short, long)]
    theme: Option<String>,

    /// Leave out the stage plot page.
    #[arg(long)]
    no_stage_plot: bool,

    /// Custom text for the footer's center slot.
    #[arg(long)]
    footer: Option<String>,

    /// Engine configuration (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render with pro entitlements (themes, no watermark).
    #[arg(long)]
    pro: bool,

    /// Print the assembled document as JSON instead of rendering.
    #[arg(long)]
    dump_document: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = PipelineBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    let pipeline = builder.build()?;

    let rider: Value = serde_json::from_str(&fs::read_to_string(&cli.input)?)?;
    let mut request = RenderRequest::new(rider)
        .with_stage_plot(!cli.no_stage_plot)
        .with_entitlement(Entitlement { pro: cli.pro });
    request.locale = cli.locale;
    request.theme = cli.theme;
    request.custom_footer_text = cli.footer;

    if cli.dump_document {
        let document = pipeline.assemble(&request);
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let started = Instant::now();
    let pdf = pipeline.render(&request)?;
    let target = match cli.output {
        Some(path) if path.is_dir() => path.join(&pdf.filename),
        Some(path) => path,
        None => PathBuf::from(&pdf.filename),
    };
    fs::write(&target, &pdf.bytes)?;
    info!("Generated {} in {:?}", target.display(), started.elapsed());
    println!("Successfully generated {}", target.display());
    Ok(())
}
