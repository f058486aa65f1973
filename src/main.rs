use clap::{Parser, Subcommand};
use folio::render::FileRenderer;
use folio::{CliError, check, export};
use std::path::PathBuf;
use std::process::ExitCode;

/// Check Folio profiles and export their print document.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a profile document
    Check {
        /// Path to the profile document
        #[arg(default_value = "config.yaml")]
        config: PathBuf,
    },

    /// Export the print document for a profile
    Export {
        /// Path to the profile document
        #[arg(default_value = "config.yaml")]
        config: PathBuf,

        /// Directory the export is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Headless Chromium binary; writes a PDF instead of print HTML
        #[arg(long, env = "FOLIO_CHROME")]
        chrome: Option<PathBuf>,
    },
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Check { config } => {
            let summary = check(&config).await?;
            println!("✓ {} is valid", config.display());
            print!("{}", summary);
        }
        Command::Export {
            config,
            out_dir,
            chrome,
        } => {
            let file_name = match chrome {
                #[cfg(feature = "native")]
                Some(binary) => {
                    export(&config, folio::render::ChromiumRenderer::new(binary, &out_dir)).await?
                }
                #[cfg(not(feature = "native"))]
                Some(_) => {
                    log::warn!("Built without the `native` feature, writing print HTML instead");
                    export(&config, FileRenderer::new(&out_dir)).await?
                }
                None => export(&config, FileRenderer::new(&out_dir)).await?,
            };
            println!("✓ Exported {} to {}", file_name, out_dir.display());
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
