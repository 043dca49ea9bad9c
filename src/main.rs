use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use snippetvault::app::{App, NavigationError};
use snippetvault::config::{ClientConfig, ConfigError};
use snippetvault::error::ApiError;
use snippetvault::net::api::{auth, language, snippet, tag, user};
use snippetvault::net::types::UpdateFileRequest;
use snippetvault::notify::{Notification, Notifier};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Navigation(#[from] NavigationError),
    #[error("not logged in; run `snippetvault login` first")]
    NotLoggedIn,
    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "snippetvault", about = "SnippetVault API client")]
struct Cli {
    #[arg(long, env = "SNIPPETVAULT_API_BASE_URL")]
    base_url: Option<String>,

    /// Log client internals to stderr.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and remember it.
    Login {
        username: String,
        #[arg(long, env = "SNIPPETVAULT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    /// Resolve a route through the navigation guard.
    Open {
        path: String,
    },
    Snippet(SnippetCommand),
    Tag(TagCommand),
    Language(LanguageCommand),
    User(UserCommand),
}

#[derive(Args, Debug)]
struct SnippetCommand {
    #[command(subcommand)]
    command: SnippetSubcommand,
}

#[derive(Subcommand, Debug)]
enum SnippetSubcommand {
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(long = "tag", value_delimiter = ',')]
        tag_ids: Vec<i64>,
        #[arg(long = "language", value_delimiter = ',')]
        language_ids: Vec<i64>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
    },
    Create {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Show {
        snippet_id: i64,
    },
    Update {
        snippet_id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        snippet_id: i64,
    },
    Tags {
        snippet_id: i64,
    },
    AddTag {
        snippet_id: i64,
        tag_id: i64,
    },
    RemoveTag {
        snippet_id: i64,
        tag_id: i64,
    },
    Files {
        snippet_id: i64,
    },
    AddFile {
        snippet_id: i64,
        file_name: String,
        #[arg(long)]
        language: i64,
        #[arg(long, help = "File content; read from --from-path when omitted")]
        content: Option<String>,
        #[arg(long)]
        from_path: Option<PathBuf>,
    },
    UpdateFile {
        snippet_id: i64,
        file_id: i64,
        #[arg(long)]
        file_name: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        language: Option<i64>,
    },
    DeleteFile {
        snippet_id: i64,
        file_id: i64,
    },
}

#[derive(Args, Debug)]
struct TagCommand {
    #[command(subcommand)]
    command: TagSubcommand,
}

#[derive(Subcommand, Debug)]
enum TagSubcommand {
    List,
    Show {
        tag_id: i64,
    },
    Create {
        name: String,
        #[arg(long, default_value = "#6b7280")]
        color: String,
    },
    Update {
        tag_id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    Delete {
        tag_id: i64,
    },
}

#[derive(Args, Debug)]
struct LanguageCommand {
    #[command(subcommand)]
    command: LanguageSubcommand,
}

#[derive(Subcommand, Debug)]
enum LanguageSubcommand {
    List,
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List,
    Show {
        user_id: i64,
    },
    Find {
        username: String,
    },
    Register {
        username: String,
        #[arg(long, env = "SNIPPETVAULT_NEW_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value_t = false)]
        admin: bool,
    },
    Update {
        user_id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    Delete {
        user_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = ClientConfig::new(base_url, config.config_dir)?;
    }

    let notifier = Notifier::new();
    let listener = spawn_notification_listener(notifier.subscribe());
    let mut app = App::boot(&config, notifier).await?;

    let result = run(&mut app, cli.command).await;

    // Closing every sender lets the listener drain and exit.
    drop(app);
    if let Err(e) = listener.await {
        tracing::warn!(error = %e, "notification listener failed");
    }
    result
}

fn spawn_notification_listener(mut rx: broadcast::Receiver<Notification>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(n) => eprintln!("[{}] {}: {}", n.severity, n.summary, n.detail),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "notification listener lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

async fn run(app: &mut App, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            let user = app.session().sign_in(app.http(), &username, &password).await?;
            print_json(&user)
        }
        Command::Logout => {
            app.session().logout();
            Ok(())
        }
        Command::Whoami => {
            let user = app.session().user().ok_or(CliError::NotLoggedIn)?;
            print_json(&user)
        }
        Command::Open { path } => {
            let route = app.navigate(&path)?;
            println!("{route}");
            Ok(())
        }
        Command::Snippet(cmd) => run_snippet(app, cmd).await,
        Command::Tag(cmd) => run_tag(app, cmd).await,
        Command::Language(cmd) => match cmd.command {
            LanguageSubcommand::List => print_json(&language::fetch_languages(app.http()).await?),
        },
        Command::User(cmd) => run_user(app, cmd).await,
    }
}

async fn run_snippet(app: &App, cmd: SnippetCommand) -> Result<(), CliError> {
    let http = app.http();
    match cmd.command {
        SnippetSubcommand::Search { query, tag_ids, language_ids, page, page_size } => {
            let tags = (!tag_ids.is_empty()).then_some(tag_ids.as_slice());
            let languages = (!language_ids.is_empty()).then_some(language_ids.as_slice());
            let result = snippet::fetch_paginated_snippets(http, &query, tags, languages, page, page_size).await?;
            print_json(&result)
        }
        SnippetSubcommand::Create { title, description } => {
            print_json(&snippet::create_snippet(http, &title, &description).await?)
        }
        SnippetSubcommand::Show { snippet_id } => print_json(&snippet::fetch_snippet(http, snippet_id).await?),
        SnippetSubcommand::Update { snippet_id, title, description } => {
            let updated = snippet::update_snippet(http, snippet_id, title.as_deref(), description.as_deref()).await?;
            print_json(&updated)
        }
        SnippetSubcommand::Delete { snippet_id } => print_json(&snippet::delete_snippet(http, snippet_id).await?),
        SnippetSubcommand::Tags { snippet_id } => print_json(&snippet::fetch_snippet_tags(http, snippet_id).await?),
        SnippetSubcommand::AddTag { snippet_id, tag_id } => {
            snippet::add_tag_to_snippet(http, snippet_id, tag_id).await?;
            println!("ok");
            Ok(())
        }
        SnippetSubcommand::RemoveTag { snippet_id, tag_id } => {
            snippet::remove_tag_from_snippet(http, snippet_id, tag_id).await?;
            println!("ok");
            Ok(())
        }
        SnippetSubcommand::Files { snippet_id } => print_json(&snippet::fetch_snippet_files(http, snippet_id).await?),
        SnippetSubcommand::AddFile { snippet_id, file_name, language, content, from_path } => {
            let content = match (content, from_path) {
                (Some(content), _) => content,
                (None, Some(path)) => {
                    std::fs::read_to_string(&path).map_err(|source| CliError::ReadFile { path, source })?
                }
                (None, None) => String::new(),
            };
            print_json(&snippet::create_file(http, snippet_id, &file_name, &content, language).await?)
        }
        SnippetSubcommand::UpdateFile { snippet_id, file_id, file_name, content, language } => {
            let update = UpdateFileRequest {
                filename: file_name.as_deref(),
                content: content.as_deref(),
                language_id: language,
            };
            print_json(&snippet::update_file(http, snippet_id, file_id, &update).await?)
        }
        SnippetSubcommand::DeleteFile { snippet_id, file_id } => {
            print_json(&snippet::delete_file(http, snippet_id, file_id).await?)
        }
    }
}

async fn run_tag(app: &App, cmd: TagCommand) -> Result<(), CliError> {
    let http = app.http();
    match cmd.command {
        TagSubcommand::List => print_json(&tag::fetch_tags(http).await?),
        TagSubcommand::Show { tag_id } => print_json(&tag::fetch_tag(http, tag_id).await?),
        TagSubcommand::Create { name, color } => print_json(&tag::create_tag(http, &name, &color).await?),
        TagSubcommand::Update { tag_id, name, color } => {
            print_json(&tag::update_tag(http, tag_id, name.as_deref(), color.as_deref()).await?)
        }
        TagSubcommand::Delete { tag_id } => print_json(&tag::delete_tag(http, tag_id).await?),
    }
}

async fn run_user(app: &App, cmd: UserCommand) -> Result<(), CliError> {
    let http = app.http();
    match cmd.command {
        UserSubcommand::List => print_json(&user::fetch_users(http).await?),
        UserSubcommand::Show { user_id } => print_json(&user::fetch_user(http, user_id).await?),
        UserSubcommand::Find { username } => print_json(&user::fetch_user_by_username(http, &username).await?),
        UserSubcommand::Register { username, password, admin } => {
            print_json(&auth::register_user(http, &username, &password, admin).await?)
        }
        UserSubcommand::Update { user_id, username, password } => {
            print_json(&user::update_user(http, user_id, username.as_deref(), password.as_deref()).await?)
        }
        UserSubcommand::Delete { user_id } => print_json(&user::delete_user(http, user_id).await?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
