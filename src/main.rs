use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use trackame::{
    auth::Credentials,
    config::AppConfig,
    profiles::forms::ProfileForm,
    state::AppState,
    ui::{actions, ConsoleDisplay},
};

#[derive(Debug, Parser)]
#[command(name = "trackame", about = "Create, view, edit and search TrackA-Me profiles")]
struct Cli {
    /// Backend base URL; overrides TRACKAME_BACKEND_URL.
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[arg(long, env = "TRACKAME_USER", global = true)]
    user: Option<String>,

    #[arg(long, env = "TRACKAME_PASS", global = true, hide_env_values = true)]
    pass: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// POST /profile
    Create(CreateArgs),
    /// GET /profiles
    List,
    /// GET /profile/{id}/edit
    Edit { id: String },
    /// PUT /profile/{id}
    Update {
        id: String,
        #[arg(long, conflicts_with = "json_file", required_unless_present = "json_file")]
        json: Option<String>,
        #[arg(long)]
        json_file: Option<PathBuf>,
    },
    /// GET /profiles/search?skill=...
    Search { skill: String },
    /// GET /health
    Health,
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    education: String,
    #[arg(long, default_value = "")]
    work: String,
    #[arg(long, default_value = "")]
    links: String,
    /// Comma separated, e.g. "AI, Python"
    #[arg(long, default_value = "")]
    skills: String,
    #[arg(long, default_value = "")]
    project_title: String,
    #[arg(long, default_value = "")]
    project_description: String,
    #[arg(long, default_value = "")]
    project_tech: String,
}

impl From<CreateArgs> for ProfileForm {
    fn from(a: CreateArgs) -> Self {
        Self {
            name: a.name,
            email: a.email,
            education: a.education,
            work: a.work,
            links: a.links,
            skills: a.skills,
            project_title: a.project_title,
            project_description: a.project_description,
            project_tech: a.project_tech,
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "trackame=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.backend_url {
        config = AppConfig::new(url, config.create_requires_auth)?;
    }
    tracing::debug!(backend = %config.backend_url, "config loaded");
    let state = AppState::from_config(config);

    let creds = match (cli.user, cli.pass) {
        (None, None) => None,
        (user, pass) => Some(Credentials::new(
            user.unwrap_or_default(),
            pass.unwrap_or_default(),
        )),
    };
    let display = ConsoleDisplay;

    match cli.command {
        Command::Create(args) => {
            let form = ProfileForm::from(args);
            actions::on_create(&state, &display, &form, creds.as_ref()).await
        }
        Command::List => actions::on_load_all(&state, &display).await,
        Command::Edit { id } => actions::on_load_profile(&state, &display, &id).await,
        Command::Update {
            id,
            json,
            json_file,
        } => {
            let edited = match (json, json_file) {
                (Some(doc), _) => doc,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("read {}", path.display()))?,
                (None, None) => anyhow::bail!("--json or --json-file is required"),
            };
            actions::on_update(&state, &display, &id, &edited, creds.as_ref()).await
        }
        Command::Search { skill } => actions::on_search(&state, &display, &skill).await,
        Command::Health => actions::on_health(&state, &display).await,
    }

    Ok(())
}
