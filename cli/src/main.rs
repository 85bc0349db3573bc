//! Offline inspection of saved timeline records.
//!
//! Records live in a storage directory as `<key>.json`, holding the same
//! flat JSON object the browser keeps in `localStorage`.

mod file_storage;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use record::{DEFAULT_STORAGE_KEY, FormRecordStore, LoadOutcome, Record, StoreConfig};
use report::{render_report, timeline_report};
use tracing_subscriber::EnvFilter;

use crate::file_storage::FileStorage;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no saved record under `{key}`")]
    NoRecord { key: String },
    #[error(transparent)]
    Record(#[from] record::RecordError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "timeline-cli", about = "Inspect saved evacuation timeline records")]
struct Cli {
    /// Directory holding `<key>.json` record files.
    #[arg(long, env = "TIMELINE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    #[arg(long, env = "TIMELINE_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stored record.
    Show,
    /// Print the evaluation report rendered from the stored record.
    Report {
        /// Emit the rendered slots as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Validate a record file and store it under the storage key.
    Import { file: PathBuf },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StoreConfig {
        storage_key: cli.storage_key,
        ..StoreConfig::default()
    };
    let mut store = FormRecordStore::with_config(FileStorage::new(cli.data_dir), config);
    tracing::debug!(dir = %store.storage().dir().display(), key = %store.config().storage_key, "store opened");

    let output = match cli.command {
        Command::Show => run_show(&store)?,
        Command::Report { json } => run_report(&store, json)?,
        Command::Import { file } => run_import(&mut store, &file)?,
    };
    print!("{output}");
    Ok(())
}

fn load_record(store: &FormRecordStore<FileStorage>) -> Result<Record, CliError> {
    match store.load_saved()? {
        LoadOutcome::Found(record) => Ok(record),
        LoadOutcome::NotFound => Err(CliError::NoRecord {
            key: store.config().storage_key.clone(),
        }),
    }
}

fn run_show(store: &FormRecordStore<FileStorage>) -> Result<String, CliError> {
    let record = load_record(store)?;
    Ok(format!("{}\n", serde_json::to_string_pretty(&record)?))
}

fn run_report(store: &FormRecordStore<FileStorage>, json: bool) -> Result<String, CliError> {
    let record = load_record(store)?;
    let rendered = render_report(&record, &timeline_report());
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&rendered)?));
    }
    Ok(rendered.to_string())
}

fn run_import(store: &mut FormRecordStore<FileStorage>, file: &Path) -> Result<String, CliError> {
    let raw = std::fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let record = record::decode(&raw)?;
    let key = store.config().storage_key.clone();
    store.persist(&key, &record)?;
    tracing::info!(key = %key, entries = record.len(), "record imported");
    Ok(format!("stored {} entries under `{key}`\n", record.len()))
}
