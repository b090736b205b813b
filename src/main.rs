use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use ocnav::core::config;
use ocnav::core::exec;

#[derive(Parser)]
#[command(name = "ocnav", about = "Interactive terminal navigator for the OpenShift CLI")]
struct Args {
    /// Switch to the specified project before starting the UI
    #[arg(long)]
    project: Option<String>,

    /// Create a project with the given name and exit
    #[arg(long, value_name = "NAME")]
    create_project: Option<String>,

    /// Delete the project with the given name and exit
    #[arg(long, value_name = "NAME")]
    delete_project: Option<String>,

    /// Wrapped CLI binary (overrides config and OCNAV_TOOL)
    #[arg(long)]
    tool: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to ocnav.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("ocnav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.tool.as_deref());
    log::info!("ocnav starting up, wrapped tool: {}", resolved.tool);

    // The wrapped tool missing entirely is fatal before any terminal setup.
    if !exec::tool_on_path(&resolved.tool) {
        eprintln!(
            "Error: '{}' command not found. Please install it or point --tool at another CLI.",
            resolved.tool
        );
        return ExitCode::FAILURE;
    }

    // Shortcut flags act without starting the UI.
    if let Some(name) = &args.create_project {
        println!("Attempting to create project: {name}");
        return match exec::run_passthrough(&resolved.tool, &["new-project", name.as_str()]) {
            Ok(status) if status.success() => {
                println!("Project '{name}' created.");
                ExitCode::SUCCESS
            }
            Ok(status) => {
                eprintln!("Error creating project '{name}': {status}");
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Error creating project '{name}': {e}");
                ExitCode::FAILURE
            }
        };
    }
    if let Some(name) = &args.delete_project {
        println!("Attempting to delete project: {name}");
        return match exec::run_passthrough(&resolved.tool, &["delete", "project", name.as_str()]) {
            Ok(status) if status.success() => {
                println!("Project '{name}' deleted.");
                ExitCode::SUCCESS
            }
            Ok(status) => {
                eprintln!("Error deleting project '{name}': {status}");
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Error deleting project '{name}': {e}");
                ExitCode::FAILURE
            }
        };
    }

    // --project switches before the UI starts; failure is not fatal.
    if let Some(name) = &args.project {
        match exec::run_passthrough(&resolved.tool, &["project", name.as_str()]) {
            Ok(status) if status.success() => {
                println!("Switched to project '{name}'.");
            }
            Ok(status) => {
                eprintln!("Error switching to project '{name}': {status}. Starting with current project.");
            }
            Err(e) => {
                eprintln!("Error switching to project '{name}': {e}. Starting with current project.");
            }
        }
    }

    match ocnav::tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running ocnav: {e}");
            ExitCode::FAILURE
        }
    }
}
