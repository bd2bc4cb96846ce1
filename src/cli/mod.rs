//! Command-line interface.
//!
//! Argument parsing and the command handlers behind the `nusmods-sync`
//! binary. Handlers write to stdout; logs go to stderr.

pub mod format;

use crate::client::NusModsClient;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nusmods_models::Semester;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nusmods-sync")]
#[command(about = "NUSMods catalog sync and timetable expansion", long_about = None)]
pub struct Cli {
    /// Academic year, e.g. 2025-2026
    #[arg(short = 'y', long, env = "NUSMODS_ACADEMIC_YEAR")]
    pub academic_year: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List modules offered in the academic year
    Modules {
        /// Only show modules whose code or title contains this text
        #[arg(short = 'f', long)]
        filter: Option<String>,
    },
    /// Show a module's catalog entry
    Info {
        /// Module code, e.g. CS2030S
        module_code: String,
    },
    /// Show a module's weekly lessons
    Timetable {
        module_code: String,

        /// Semester: 1, 2, 3 (special term 1) or 4 (special term 2)
        #[arg(short = 's', long, default_value = "1")]
        semester: Semester,
    },
    /// Show a module's exam information
    SemesterData {
        module_code: String,

        #[arg(short = 's', long, default_value = "1")]
        semester: Semester,
    },
    /// Expand a module's timetable into dated sessions
    Sessions {
        module_code: String,

        #[arg(short = 's', long, default_value = "1")]
        semester: Semester,

        /// Academic calendar JSON file
        #[arg(short = 'c', long, env = "NUSMODS_CALENDAR")]
        calendar: PathBuf,

        /// Print sessions as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Run one command against `client`.
pub async fn run(client: &NusModsClient, command: Commands) -> Result<()> {
    match command {
        Commands::Modules { filter } => {
            let modules = client
                .fetch_module_list()
                .await
                .context("Failed to fetch module list")?;
            print!("{}", format::module_list(&modules, filter.as_deref()));
        }
        Commands::Info { module_code } => {
            let info = client
                .fetch_module_info(&module_code)
                .await
                .with_context(|| format!("Failed to fetch info for {module_code}"))?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Timetable {
            module_code,
            semester,
        } => {
            let lessons = client
                .fetch_timetable(&module_code, semester)
                .await
                .with_context(|| format!("Failed to fetch {semester} timetable for {module_code}"))?;
            print!("{}", format::lessons(&lessons));
        }
        Commands::SemesterData {
            module_code,
            semester,
        } => {
            let data = client
                .fetch_semester_data(&module_code, semester)
                .await
                .with_context(|| format!("Failed to fetch {semester} data for {module_code}"))?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Commands::Sessions {
            module_code,
            semester,
            calendar,
            json,
        } => {
            let calendar = nusmods_config::load_calendar(&calendar)?;
            let sessions = client
                .fetch_sessions(&module_code, semester, &calendar)
                .await
                .with_context(|| format!("Failed to expand {semester} sessions for {module_code}"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else {
                print!("{}", format::sessions(&sessions));
            }
        }
    }

    Ok(())
}
