use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use notification_icons::density::Density;
use notification_icons::logging;
use notification_icons::runner::{run, RunOptions};

#[derive(Parser)]
#[command(name = "notification-icons")]
#[command(about = "Create Android notification icons (white silhouettes) from the launcher icon", long_about = None)]
struct Cli {
    /// Android resource directory (defaults to android/app/src/main/res)
    #[arg(long, value_name = "PATH")]
    res_dir: Option<PathBuf>,

    /// YAML settings file (defaults to ./notification-icons.yaml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = RunOptions {
        res_dir: cli.res_dir,
        config: cli.config,
        ..RunOptions::default()
    };

    let report = match run(&options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            std::process::exit(1);
        }
    };

    if !report.is_complete() {
        bail!(
            "{} of {} notification icons could not be written",
            report.failures.len(),
            Density::ALL.len()
        );
    }

    println!("\n✅ Notification icons created successfully!");
    println!("\nNote: These are simple icons. For best results, create custom icons using:");
    println!("Android Studio → New → Image Asset → Notification Icons");

    Ok(())
}
