//! Command line arguments

use clap::{Args, Parser, Subcommand};
use medrep_domain::value_objects::{ReportType, Role};
use std::path::PathBuf;

/// Command line interface for medrep
#[derive(Parser, Debug)]
#[command(name = "medrep")]
#[command(about = "Medical report portal client")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Portal commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in and open the landing page of your role
    Login(LoginArgs),

    /// Sign out and forget the saved session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show where a path leads for the current session
    Route {
        /// Path to open, e.g. `/clinic/patients/7`
        path: String,
    },

    /// List your reports
    Reports,

    /// Show one report
    Report {
        /// Report id
        id: String,
    },

    /// Delete one of your reports
    Delete {
        /// Report id
        id: String,
    },

    /// Upload a report file for analysis
    Upload(UploadArgs),

    /// Create an account
    Register(RegisterArgs),
}

impl Command {
    /// Subcommand name, safe to log
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "login",
            Command::Logout => "logout",
            Command::Whoami => "whoami",
            Command::Route { .. } => "route",
            Command::Reports => "reports",
            Command::Report { .. } => "report",
            Command::Delete { .. } => "delete",
            Command::Upload(_) => "upload",
            Command::Register(_) => "register",
        }
    }
}

/// Arguments of `medrep login`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,
}

/// Arguments of `medrep upload`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct UploadArgs {
    /// File to upload (PDF, image, text or Word document)
    pub file: PathBuf,

    /// Report title; defaults to the file name
    #[arg(short, long)]
    pub title: Option<String>,

    /// Kind of report
    #[arg(short = 'k', long = "type", default_value = "general")]
    pub report_type: ReportType,
}

/// Arguments of `medrep register`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RegisterArgs {
    /// Account role: patient, clinic or government
    #[arg(short, long, default_value = "patient")]
    pub role: Role,

    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Password (8+ characters with upper, lower and digit)
    #[arg(short, long)]
    pub password: String,

    /// Password again
    #[arg(long)]
    pub confirm_password: String,

    /// Clinic name (clinic accounts)
    #[arg(long, default_value = "")]
    pub clinic_name: String,

    /// Medical license number (clinic accounts)
    #[arg(long, default_value = "")]
    pub license_number: String,

    /// Street address (clinic accounts)
    #[arg(long, default_value = "")]
    pub address: String,

    /// Department (government accounts)
    #[arg(long, default_value = "")]
    pub department: String,

    /// Employee id (government accounts)
    #[arg(long, default_value = "")]
    pub employee_id: String,

    /// Accept the terms and conditions
    #[arg(long)]
    pub agree_to_terms: bool,

    /// Accept the privacy policy
    #[arg(long)]
    pub agree_to_privacy: bool,
}
