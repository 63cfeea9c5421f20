//! Landing Page CLI - Bridge interface for UI collaborators
//!
//! Commands: goals, validate, derive, export
//! Outputs JSON to stdout, logs to stderr
//! Returns 2 on validation failure, 1 on any other error

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use landingpage_core::{
    BuilderSession, ExportConfig, FormInput, GoalTemplate, PageGoal, PipelineError,
};

#[derive(Parser)]
#[command(name = "landingpage-cli")]
#[command(about = "Landing Page CLI - derive marketing copy and export static pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to an export config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List page goals and their call-to-action labels
    Goals,

    /// Validate a form payload
    Validate {
        /// JSON payload (FormInput)
        #[arg(short, long)]
        payload: String,
    },

    /// Derive marketing content from a form payload
    Derive {
        /// JSON payload (FormInput)
        #[arg(short, long)]
        payload: String,
    },

    /// Derive and export a standalone HTML page
    Export {
        /// JSON payload (FormInput)
        #[arg(short, long)]
        payload: String,

        /// Directory to write `<product>-landing-page.html` into.
        /// Without it the document is printed to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copyright year for the footer (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn parse_payload(payload: &str) -> Result<FormInput, ExitCode> {
    serde_json::from_str(payload).map_err(|e| {
        let output = serde_json::json!({
            "success": false,
            "error": format!("Invalid payload: {}", e),
        });
        println!("{}", output);
        ExitCode::FAILURE
    })
}

fn failure(e: &PipelineError) -> ExitCode {
    let output = serde_json::json!({
        "success": false,
        "error": e.to_string(),
    });
    println!("{}", output);
    match e {
        PipelineError::ValidationFailed(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match ExportConfig::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            println!("{}", serde_json::json!({ "success": false, "error": e.to_string() }));
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Goals => {
            let goals: Vec<_> = PageGoal::ALL
                .iter()
                .map(|goal| serde_json::json!({
                    "id": goal.as_str(),
                    "label": goal.label(),
                    "cta": GoalTemplate::for_goal(*goal).cta,
                }))
                .collect();

            println!("{}", serde_json::Value::Array(goals));
            ExitCode::SUCCESS
        }

        Commands::Validate { payload } => {
            let input = match parse_payload(&payload) {
                Ok(i) => i,
                Err(code) => return code,
            };

            let result = BuilderSession::with_input(input, config).validate();
            println!("{}", serde_json::json!(result));
            if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Validation failure
            }
        }

        Commands::Derive { payload } => {
            let input = match parse_payload(&payload) {
                Ok(i) => i,
                Err(code) => return code,
            };

            let mut session = BuilderSession::with_input(input, config);
            match session.generate() {
                Ok(content) => {
                    let output = serde_json::json!({
                        "success": true,
                        "content": content,
                    });
                    println!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => failure(&e),
            }
        }

        Commands::Export { payload, output, year } => {
            let input = match parse_payload(&payload) {
                Ok(i) => i,
                Err(code) => return code,
            };

            let mut session = BuilderSession::with_input(input, config);
            if let Err(e) = session.generate() {
                return failure(&e);
            }

            let page = match year {
                Some(y) => session.export(y),
                None => session.export_now(),
            };
            let page = match page {
                Ok(p) => p,
                Err(e) => return failure(&e),
            };

            match output {
                Some(dir) => match page.write_to(&dir) {
                    Ok(path) => {
                        let output = serde_json::json!({
                            "success": true,
                            "path": path,
                            "filename": page.filename,
                            "documentHash": page.document_hash,
                            "jobHash": page.job_hash,
                        });
                        println!("{}", output);
                        ExitCode::SUCCESS
                    }
                    Err(e) => failure(&e),
                },
                None => {
                    print!("{}", page.html);
                    ExitCode::SUCCESS
                }
            }
        }
    }
}
