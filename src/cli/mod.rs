mod output;
mod theme;

use crate::clipboard::Clipboard;
use crate::store::{Store, StoreError};
use crate::ui::{self, TerminalChooser};
use anyhow::{Context, Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STASHDIR_COMMIT"), ")");

#[derive(Parser)]
#[command(name = "stashdir", version = VERSION, about = "Bookmark directories and jump back to them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(long, env = "STASHDIR_STORE", global = true)]
    store_path: Option<PathBuf>,
    #[arg(long, env = "STASHDIR_UI_CONFIG", global = true)]
    ui_config: Option<PathBuf>,
    #[arg(long, env = "STASHDIR_CLI_CONFIG", global = true)]
    cli_config: Option<PathBuf>,
    #[arg(long, env = "STASHDIR_CLIPBOARD", global = true, value_name = "COMMAND")]
    clipboard_cmd: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the current or given directory
    Add(AddArgs),
    /// List saved paths
    List,
    /// Show the absolute path of the bookmark file
    Path,
    /// Remove by 1-based index or by path
    Remove(RemoveArgs),
    /// Print a path, chosen interactively or by 1-based index
    Select(PickArgs),
    /// Copy a path to the clipboard, chosen interactively or by 1-based index
    Copy(PickArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Args)]
struct AddArgs {
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

#[derive(Args)]
struct RemoveArgs {
    #[arg(value_name = "INDEX|PATH")]
    target: String,
}

#[derive(Args)]
struct PickArgs {
    #[arg(value_name = "INDEX")]
    index: Option<String>,
}

#[derive(Args)]
struct CompletionsArgs {
    #[arg(value_enum)]
    shell: Shell,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Commands::Completions(args)) => {
            generate_completions(args.shell);
            Ok(())
        }
        Some(command) => {
            let mut store = Store::open(cli.store_path).context("unable to open store")?;

            match command {
                Commands::Add(args) => add_path(&mut store, args.path),
                Commands::List => list_paths(&store, cli.cli_config),
                Commands::Path => show_store_path(&store),
                Commands::Remove(args) => remove_entry(&mut store, &args.target),
                Commands::Select(args) => {
                    if let Some(path) = pick(&store, args.index.as_deref(), cli.ui_config)? {
                        print!("{}", path);
                        io::stdout().flush()?;
                    }
                    Ok(())
                }
                Commands::Copy(args) => {
                    let Some(path) = pick(&store, args.index.as_deref(), cli.ui_config)? else {
                        return Ok(());
                    };
                    Clipboard::new(cli.clipboard_cmd).write(&path)?;
                    println!("Copied to clipboard: {}", path);
                    Ok(())
                }
                Commands::Completions(_) => unreachable!(),
            }
        }
    }
}

fn add_path(store: &mut Store, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => env::current_dir().context("unable to read current directory")?,
    };
    let absolute = std::path::absolute(&path)
        .with_context(|| format!("unable to resolve {}", path.display()))?;
    let absolute = absolute
        .to_str()
        .ok_or_else(|| anyhow!("path is not valid UTF-8: {}", absolute.display()))?;
    store.add(absolute)?;
    Ok(())
}

fn list_paths(store: &Store, cli_config: Option<PathBuf>) -> Result<()> {
    let theme = theme::load_cli_theme(cli_config)?;
    output::print_entries(&store.list(), &theme);
    Ok(())
}

fn show_store_path(store: &Store) -> Result<()> {
    let path = std::path::absolute(store.path()).unwrap_or_else(|_| store.path().to_path_buf());
    print!("{}", path.display());
    io::stdout().flush()?;
    Ok(())
}

fn remove_entry(store: &mut Store, target: &str) -> Result<()> {
    match parse_index(target) {
        Some(index) => {
            let len = store.len();
            store
                .remove_index(index - 1)
                .map_err(|err| index_error(err, len))?;
        }
        None => {
            store.remove_path(target)?;
        }
    }
    Ok(())
}

/// Resolves a 1-based index, or asks interactively when none is given.
fn pick(store: &Store, index: Option<&str>, ui_config: Option<PathBuf>) -> Result<Option<String>> {
    if let Some(raw) = index {
        let index = parse_index(raw).ok_or_else(|| anyhow!("invalid index: {}", raw))?;
        let path = store
            .get(index - 1)
            .map_err(|err| index_error(err, store.len()))?;
        return Ok(Some(path.to_string()));
    }

    if store.is_empty() {
        return Ok(None);
    }
    let config = ui::load_ui_config(ui_config)?;
    let mut chooser = TerminalChooser::new(config);
    Ok(store.select_interactive(&mut chooser)?)
}

/// Reports out-of-range errors in the 1-based numbering users type.
fn index_error(err: StoreError, len: usize) -> anyhow::Error {
    match err {
        StoreError::OutOfRange { .. } => anyhow!("index out of range (1..{})", len),
        other => other.into(),
    }
}

/// Positive 1-based index, or `None` when `raw` is not one.
fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|index| *index > 0)
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "stashdir", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index_accepts_positive_integers() {
        assert_eq!(parse_index("1"), Some(1));
        assert_eq!(parse_index(" 12 "), Some(12));
    }

    #[test]
    fn parse_index_rejects_everything_else() {
        assert_eq!(parse_index("0"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("/tmp/1"), None);
        assert_eq!(parse_index("1a"), None);
        assert_eq!(parse_index(""), None);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
