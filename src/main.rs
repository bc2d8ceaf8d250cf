use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fen_fixtures::{DuplicatePolicy, EditorConfig, FixtureGroup, Session, UnsavedChoice};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Create and edit move-generator fixture files
#[derive(Parser, Debug)]
#[command(name = "fixture-editor", version, about)]
struct Cli {
    /// Directory that relative fixture file names are resolved against
    #[arg(long, env = "FEN_FIXTURES_DIR", default_value = ".", global = true)]
    dir: PathBuf,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fixture file (".json" is appended if missing)
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty fixture file
    New {
        #[arg(long)]
        description: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List fixtures and their results
    Show {
        /// Only show the fixture at this index
        index: Option<usize>,
    },
    /// Add a fixture for a starting position
    Add {
        fen: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start_description: Option<String>,
        /// Append even if the position is already in the file
        #[arg(long)]
        allow_duplicate: bool,
    },
    /// Add one fixture's resulting position as a new fixture
    AddResult { fixture: usize, result: usize },
    /// Remove the fixture at an index
    Remove {
        #[arg(allow_hyphen_values = true)]
        index: isize,
    },
    /// Add missing white/black transpositions
    Transpose,
    /// Regenerate the results of every fixture (drops per-result descriptions)
    Regenerate,
    /// Set the group description
    Describe { text: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = match &cli.command {
        Command::Add {
            allow_duplicate: true,
            ..
        } => DuplicatePolicy::Append,
        _ => DuplicatePolicy::Reject,
    };
    let config = EditorConfig::new(&cli.dir).with_duplicate_policy(policy);
    let path = config.resolve(&cli.file);
    let mut session = Session::standard(config);

    if !matches!(cli.command, Command::New { .. }) {
        session
            .open(&path, UnsavedChoice::Cancel)
            .with_context(|| format!("failed to open {:?}", path))?;
    }

    match cli.command {
        Command::New { description, force } => {
            if path.exists() && !force {
                bail!("{:?} already exists (use --force to overwrite)", path);
            }
            session.group_mut().set_description(description);
            session.save_as(&path)?;
            info!("[CLI] Created {:?}", path);
        }
        Command::Show { index } => show(session.group(), index)?,
        Command::Add {
            fen,
            description,
            start_description,
            ..
        } => {
            let index = session.add_position(&fen, description, start_description)?;
            let count = session.group().results_at(index).map_or(0, <[_]>::len);
            println!("Added fixture {} with {} moves.", index, count);
        }
        Command::AddResult { fixture, result } => {
            let index = session.add_result_as_fixture(fixture, result)?;
            println!("Added fixture {}.", index);
        }
        Command::Remove { index } => {
            session.remove_at(index)?;
            println!("Removed fixture {}.", index);
        }
        Command::Transpose => {
            let added = session.add_missing_transpositions()?;
            println!("Added {} new test cases.", added);
        }
        Command::Regenerate => {
            let count = session.regenerate_all()?;
            println!("Regenerated moves for {} fens.", count);
        }
        Command::Describe { text } => session.group_mut().set_description(text),
    }

    if session.is_modified() {
        session
            .save()
            .with_context(|| format!("failed to save {:?}", path))?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show(group: &FixtureGroup, only: Option<usize>) -> Result<()> {
    if let Some(description) = group.description() {
        println!("{}", description);
        println!();
    }

    for (i, fixture) in group.fixtures().iter().enumerate() {
        if only.is_some_and(|o| o != i) {
            continue;
        }
        println!(
            "[{}] {}{}",
            i,
            fixture.start_fen(),
            fixture
                .description()
                .map(|d| format!("  ({})", d))
                .unwrap_or_default()
        );
        if let Some(note) = fixture.start().description() {
            println!("     {}", note);
        }
        for (j, result) in fixture.results().iter().enumerate() {
            println!(
                "     {:>3}. {:<8} {}",
                j,
                result.mv().unwrap_or("?"),
                result.fen()
            );
        }
    }

    if let Some(index) = only {
        if index >= group.len() {
            bail!("no fixture at index {} ({} in file)", index, group.len());
        }
    }
    Ok(())
}
