//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use vcv::output::OutputMode;

/// vcv - Virtual Commerce Ventures portal
#[derive(Parser, Debug)]
#[command(
    name = "vcv",
    version,
    about = "Virtual Commerce Ventures portal and GaaS grading demo",
    long_about = "Navigate the Virtual Commerce Ventures platforms and run the GaaS demo.\n\n\
                  GaaS (Grading as a Service) walks through three card photographs and\n\
                  returns a placeholder PSA-style estimate. No real image analysis is done."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./vcv.toml, then the user config dir)
    #[arg(short, long, global = true, env = "VCV_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a vcv.toml with the default portal configuration
    Init {
        /// Overwrite an existing vcv.toml
        #[arg(short, long)]
        force: bool,
    },

    /// List portal platforms and whether their links are configured
    Platforms,

    /// Resolve a platform's destination URL
    Open {
        /// Platform id
        id: u32,
    },

    /// Estimate a grade from three card photographs
    Grade {
        /// Front, top-down photograph
        #[arg(long, value_name = "FILE")]
        front_top: Option<PathBuf>,

        /// Back, top-down photograph
        #[arg(long, value_name = "FILE")]
        back_top: Option<PathBuf>,

        /// Front, angled photograph
        #[arg(long, value_name = "FILE")]
        front_angle: Option<PathBuf>,

        /// Directory holding front_top.*, back_top.* and front_angle.*
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Run the capture wizard interactively (commands on stdin)
    Wizard,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Platforms) => commands::platforms(config, output_mode),
        Some(Command::Open { id }) => commands::open(id, config, output_mode),
        Some(Command::Grade {
            front_top,
            back_top,
            front_angle,
            dir,
        }) => {
            let files = commands::GradeFiles {
                front_top,
                back_top,
                front_angle,
                dir,
            };
            commands::grade(&files, output_mode)
        },
        Some(Command::Wizard) => {
            let stdin = std::io::stdin();
            commands::wizard(stdin.lock(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": vcv::VERSION
                    })
                );
            } else {
                println!("vcv v{}", vcv::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": vcv::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("vcv v{}", vcv::VERSION);
                println!("\nRun 'vcv --help' for usage");
                println!("Run 'vcv platforms' to see the portal");
                println!("Run 'vcv wizard' to try the GaaS grading demo");
            }
            Ok(())
        },
    }
}
