//! Command line front end
//!
//! Every command restores the saved session, runs against the app shell and
//! prints its result as JSON on stdout. Notifications raised along the way
//! go to stderr.

pub mod args;

pub use args::{Cli, Command, LoginArgs, RegisterArgs, UploadArgs};

use anyhow::{Context, bail};
use medrep_application::{App, LoginForm, RegistrationForm};
use medrep_domain::constants::{HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};
use medrep_domain::value_objects::ReportUpload;
use medrep_infrastructure::config::ConfigLoader;
use medrep_infrastructure::{build_app, init_logging};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// How long `logout` waits for the backend before the process exits
const BACKEND_LOGOUT_WAIT: Duration = Duration::from_secs(3);

/// Load configuration, start logging, build the app and run the command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let mut app = build_app(&config).context("Failed to build application")?;

    let mut stdout = std::io::stdout().lock();
    let outcome = execute(&mut app, cli.command, &mut stdout).await;
    report_notifications(&mut app);
    outcome
}

/// Run one command against `app`, writing its JSON result to `out`
pub async fn execute<W: Write>(app: &mut App, command: Command, out: &mut W) -> anyhow::Result<()> {
    debug!(command = command.name(), "Running command");
    match command {
        Command::Login(args) => {
            app.restore(LOGIN_ROUTE);
            let navigation = app
                .login(&LoginForm::new(args.email, args.password))
                .await?;
            print_json(out, &navigation)
        }
        Command::Logout => {
            app.restore(HOME_ROUTE);
            let navigation = app.logout();
            app.settle(BACKEND_LOGOUT_WAIT).await;
            print_json(out, &navigation)
        }
        Command::Whoami => {
            app.restore(HOME_ROUTE);
            print_json(out, &app.sessions().current_identity())
        }
        Command::Route { path } => {
            let navigation = app.restore(&path);
            print_json(out, &navigation)
        }
        Command::Reports => {
            app.restore(HOME_ROUTE);
            require_session(app)?;
            app.refresh_reports().await?;
            print_json(out, &app.reports())
        }
        Command::Report { id } => {
            app.restore(HOME_ROUTE);
            require_session(app)?;
            let report = app.open_report(&id).await?;
            print_json(out, &report)
        }
        Command::Delete { id } => {
            app.restore(HOME_ROUTE);
            require_session(app)?;
            app.delete_report(&id).await?;
            print_json(out, &json!({ "deleted": id }))
        }
        Command::Upload(args) => {
            app.restore(HOME_ROUTE);
            require_session(app)?;
            let upload = read_upload(&args).await?;
            let report = app.upload(upload).await?;
            print_json(out, &report)
        }
        Command::Register(args) => {
            app.restore(REGISTER_ROUTE);
            let email = args.email.clone();
            app.register(&registration_form(args)).await?;
            print_json(out, &json!({ "registered": email }))
        }
    }
}

fn require_session(app: &App) -> anyhow::Result<()> {
    if app.session().is_authenticated() {
        Ok(())
    } else {
        bail!("Please sign in to continue.")
    }
}

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to encode output")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

fn report_notifications(app: &mut App) {
    let mut stderr = std::io::stderr().lock();
    for notification in app.notifications().active() {
        // Nothing left to report to if stderr is gone
        let _ = writeln!(stderr, "[{:?}] {}", notification.kind, notification.message);
    }
}

fn registration_form(args: RegisterArgs) -> RegistrationForm {
    RegistrationForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        clinic_name: args.clinic_name,
        license_number: args.license_number,
        address: args.address,
        department: args.department,
        employee_id: args.employee_id,
        agree_to_terms: args.agree_to_terms,
        agree_to_privacy: args.agree_to_privacy,
        ..RegistrationForm::new(args.role)
    }
}

async fn read_upload(args: &UploadArgs) -> anyhow::Result<ReportUpload> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map_or_else(|| args.file.display().to_string(), |name| name.to_string_lossy().into_owned());
    let title = args.title.clone().unwrap_or_else(|| file_name.clone());

    Ok(ReportUpload {
        title,
        report_type: args.report_type,
        content_type: content_type_for(&args.file).to_string(),
        file_name,
        bytes,
    })
}

/// MIME type guessed from the file extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}
