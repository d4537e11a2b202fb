//! Historian - word-level revision history for prose documents
//!
//! Binary entry point: a command-line front end for the document store.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use historian::model::{DiffLineKind, HunkSelection};
use historian::{Config, DocumentStore};

#[derive(Debug, Parser)]
#[command(name = "historian", version, about = "Word-level revision history for prose documents")]
struct Cli {
    /// Root directory holding <user>/<repo>/
    #[arg(long, env = "HISTORIAN_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// git binary to run
    #[arg(long, env = "HISTORIAN_GIT", default_value = "git")]
    git: String,

    /// Seconds before a git invocation is abandoned
    #[arg(long, env = "HISTORIAN_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Render every hunk of a diff instead of only the last one
    #[arg(long, env = "HISTORIAN_ALL_HUNKS")]
    all_hunks: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List users
    Users,
    /// List a user's repos
    Repos { user: String },
    /// Create a user
    CreateUser { user: String },
    /// Create an empty repo
    CreateRepo { user: String, repo: String },
    /// Print the current document
    Show { user: String, repo: String },
    /// Save a new version of the document
    Save {
        user: String,
        repo: String,
        /// Revision message
        #[arg(short, long)]
        message: String,
        /// Read the document from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List revisions, newest first
    Log { user: String, repo: String },
    /// Show what a revision changed
    Diff {
        user: String,
        repo: String,
        identifier: String,
        /// Print class-tagged HTML spans instead of plain lines
        #[arg(long)]
        markup: bool,
    },
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = DocumentStore::new(config_from(&cli));

    match run(&store, cli.command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_not_found() || e.is_already_exists() => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn config_from(cli: &Cli) -> Config {
    let selection = if cli.all_hunks {
        HunkSelection::All
    } else {
        HunkSelection::LastOnly
    };
    Config::with_data_dir(&cli.data_dir)
        .git_command(&cli.git)
        .command_timeout(Duration::from_secs(cli.timeout_secs))
        .hunk_selection(selection)
}

/// Execute one subcommand against the store
fn run(store: &DocumentStore, command: Command) -> historian::Result<()> {
    match command {
        Command::Users => {
            for user in store.list_users()? {
                println!("{user}");
            }
        }
        Command::Repos { user } => {
            for repo in store.list_repos(&user)? {
                println!("{repo}");
            }
        }
        Command::CreateUser { user } => store.create_user(&user)?,
        Command::CreateRepo { user, repo } => store.create_repo(&user, &repo)?,
        Command::Show { user, repo } => {
            print!("{}", store.get_document(&user, &repo)?);
        }
        Command::Save {
            user,
            repo,
            message,
            file,
        } => {
            let prose = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let saved = store.save_document(&user, &repo, &prose, &message)?;
            println!("{}", saved.revision);
        }
        Command::Log { user, repo } => {
            for record in store.list_revisions(&user, &repo)? {
                println!("{record}");
            }
        }
        Command::Diff {
            user,
            repo,
            identifier,
            markup,
        } => {
            let view = store.revision_diff(&user, &repo, &identifier)?;
            println!("{}", view.record);
            if markup {
                println!("{}", view.diff.to_markup());
            } else {
                for line in &view.diff.lines {
                    let marker = match line.kind {
                        DiffLineKind::Addition => '+',
                        DiffLineKind::Deletion => '-',
                        DiffLineKind::Context => ' ',
                    };
                    println!("{marker}{}", line.text);
                }
            }
        }
    }
    Ok(())
}
