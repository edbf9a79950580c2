use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use clap::{Parser, Subcommand};
use permit_pdf::{ExportRequest, ExporterConfig, PermitExporter};
use std::path::{Path, PathBuf};

/// Exports work permits from the permit backend as PDF files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of ./permit-pdf.toml.
    #[arg(long, env = "PERMIT_PDF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists the numbers of all permits the backend knows.
    List,
    /// Exports one permit as a PDF.
    Export {
        /// Permit number.
        number: String,
        /// Signature to attach: a PNG file or a `data:image/png;base64,...` URL.
        #[arg(long)]
        signature: Option<String>,
        /// Output file name.
        #[arg(long)]
        output: Option<String>,
        /// Output directory, overriding the configured one.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Categories to print first, comma separated.
        #[arg(long, value_delimiter = ',')]
        category_order: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        ExporterConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::List => {
            let exporter = PermitExporter::from_config(&config)?;
            for number in exporter.list().await? {
                println!("{}", number);
            }
        }
        Command::Export {
            number,
            signature,
            output,
            out_dir,
            category_order,
        } => {
            if let Some(dir) = out_dir {
                config.output.directory = dir;
            }
            let exporter = PermitExporter::from_config(&config)?;

            let mut request = ExportRequest::new(number).with_category_order(category_order);
            if let Some(signature) = signature {
                request = request.with_signature(read_signature(&signature).await?);
            }
            if let Some(output) = output {
                request = request.with_file_name(output);
            }

            let outcome = exporter.export(&request).await?;
            println!(
                "{} ({} page(s), {} bytes)",
                outcome.path.display(),
                outcome.page_count,
                outcome.bytes
            );
        }
    }
    Ok(())
}

/// Accepts a data URL as is; anything else is read as an image file and
/// turned into a PNG data URL.
async fn read_signature(arg: &str) -> anyhow::Result<String> {
    if arg.starts_with("data:") {
        return Ok(arg.to_string());
    }
    let path = Path::new(arg);
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read signature file {}", path.display()))?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}
