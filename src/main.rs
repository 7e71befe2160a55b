use std::path::PathBuf;

use clap::{Parser, Subcommand};
use instgen::{AppError, GenerateOptions};

#[derive(Parser)]
#[command(name = "instgen")]
#[command(version)]
#[command(about = "Generate installer manifest assets for cluster bring-up", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the openshift-install ConfigMap under the asset directory
    #[clap(visible_alias = "g")]
    Generate {
        /// Asset-output root (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Invoker recorded in the manifest when the environment sets none
        #[arg(short, long)]
        invoker: Option<String>,
        /// Regenerate even when a previously generated manifest exists
        #[arg(long)]
        regenerate: bool,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { dir, invoker, regenerate, json } => {
            run_generate(dir, invoker, regenerate, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    dir: Option<PathBuf>,
    invoker: Option<String>,
    regenerate: bool,
    json: bool,
) -> Result<(), AppError> {
    // The environment wins over the flag; both are resolved here, once, so
    // the layers below never touch the environment.
    let invoker_override =
        instgen::invoker_from_env().or(invoker.filter(|value| !value.is_empty()));
    let options = GenerateOptions { invoker_override, regenerate };

    let result = match dir {
        Some(dir) => instgen::generate_at(dir, options)?,
        None => instgen::generate(options)?,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|err| AppError::config_error(format!("failed to render outcome: {err}")))?;
        println!("{rendered}");
        return Ok(());
    }

    if result.skipped {
        println!("No invoker set; skipped openshift-install ConfigMap");
    } else if result.reused {
        for file in &result.files {
            println!("✅ Reused {}", file.display());
        }
    } else {
        for file in &result.files {
            println!("✅ Wrote {}", file.display());
        }
    }

    Ok(())
}
