use anyhow::{bail, Context, Result};
use asset_schemas_core::{
    clean_asset_schema, clean_common_schema, AssetTypeIndex, IndexEntry, VendorMetadata,
};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};

/// The shared common-definitions file, processed before everything else.
const COMMON_FILE: &str = "common.json";

/// Non-schema reference output from the generator, skipped entirely.
const REFERENCE_FILE: &str = "other.json";

#[derive(Parser)]
#[command(name = "asset-schemas")]
#[command(about = "Clean generated game asset JSON Schemas into publishable documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean every generated schema in a directory and update the asset-type index
    Process {
        /// Directory of raw generated *.json schema files
        schema_dir: PathBuf,

        /// Directory for the cleaned *.schema.json documents
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Asset-type index file, updated in place (created if absent)
        #[arg(long)]
        index: PathBuf,
    },

    /// Clean a single raw schema document
    Clean {
        /// Input raw schema file
        input: PathBuf,

        /// Output cleaned schema file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat the input as the shared common-definitions file
        #[arg(long)]
        common: bool,
    },
}

#[derive(Debug, Default)]
struct RunSummary {
    processed: usize,
    skipped: usize,
    errors: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output.
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Process {
            schema_dir,
            output_dir,
            index,
        } => {
            let summary = process_dir(&schema_dir, &output_dir, &index)?;
            println!(
                "Processed {} schema(s), skipped {}, {} error(s)",
                summary.processed, summary.skipped, summary.errors
            );
        }
        Commands::Clean {
            input,
            output,
            common,
        } => {
            let raw = read_json(&input)?;
            let result = if common {
                clean_common_schema(&raw)
            } else {
                clean_asset_schema(&raw)
            };
            let cleaned = result
                .with_context(|| format!("Failed to clean schema from: {}", input.display()))?;

            match output {
                Some(path) => write_pretty(&path, &cleaned)?,
                None => {
                    let stdout = io::stdout();
                    let mut writer = BufWriter::new(stdout.lock());
                    serde_json::to_writer_pretty(&mut writer, &cleaned)
                        .context("Failed to write JSON")?;
                    writeln!(writer).context("Failed to write trailing newline")?;
                }
            }
        }
    }

    Ok(())
}

/// Run the whole pipeline over one generator output directory.
///
/// Per-file failures are reported and counted but never abort the run; only
/// a missing input directory or an unwritable output/index path is fatal.
fn process_dir(schema_dir: &Path, output_dir: &Path, index_path: &Path) -> Result<RunSummary> {
    if !schema_dir.is_dir() {
        bail!("schema directory not found at: {}", schema_dir.display());
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut index = load_index(index_path)?;
    let mut summary = RunSummary::default();

    // Shared definitions first: every asset document references
    // common.schema.json.
    let common_path = schema_dir.join(COMMON_FILE);
    if common_path.exists() {
        match clean_common_file(&common_path, output_dir) {
            Ok(definitions) => info!(definitions, "extracted shared definitions"),
            Err(err) => {
                eprintln!("error processing {COMMON_FILE}: {err:#}");
                summary.errors += 1;
            }
        }
    } else {
        // Cleaned documents will still reference common.schema.json; the
        // published copy from a previous run has to cover for it.
        warn!(
            "no {COMMON_FILE} in {}; shared definitions not regenerated",
            schema_dir.display()
        );
    }

    let mut files: Vec<PathBuf> = fs::read_dir(schema_dir)
        .with_context(|| format!("Failed to read schema directory: {}", schema_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    for path in &files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == COMMON_FILE {
            continue;
        }
        if name == REFERENCE_FILE {
            debug!("skipping reference schema {REFERENCE_FILE}");
            summary.skipped += 1;
            continue;
        }

        match clean_asset_file(path, output_dir, &mut index) {
            Ok(()) => summary.processed += 1,
            Err(err) => {
                eprintln!("error processing {name}: {err:#}");
                summary.errors += 1;
            }
        }
    }

    save_index(index_path, index)?;
    Ok(summary)
}

/// Clean the shared common-definitions file into `common.schema.json`,
/// returning the number of extracted definitions.
fn clean_common_file(path: &Path, output_dir: &Path) -> Result<usize> {
    let raw = read_json(path)?;
    let cleaned = clean_common_schema(&raw)?;
    let definitions = cleaned
        .get("$defs")
        .and_then(Value::as_object)
        .map_or(0, |defs| defs.len());
    write_pretty(&output_dir.join("common.schema.json"), &cleaned)?;
    Ok(definitions)
}

/// Clean one asset schema file and upsert its index entry.
fn clean_asset_file(path: &Path, output_dir: &Path, index: &mut AssetTypeIndex) -> Result<()> {
    let raw = read_json(path)?;
    let cleaned = clean_asset_schema(&raw)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;
    write_pretty(&output_dir.join(format!("{stem}.schema.json")), &cleaned)?;

    // The vendor annotation is read off the raw document: cleaning strips it.
    if let Some(meta) = VendorMetadata::from_document(&raw) {
        if let (Some(title), Some(location)) =
            (raw.get("title").and_then(Value::as_str), meta.path.as_deref())
        {
            debug!(title, location, extension = meta.extension.as_deref(), "indexed asset type");
            index.upsert(title, location);
        }
    }

    Ok(())
}

fn load_index(path: &Path) -> Result<AssetTypeIndex> {
    if !path.exists() {
        return Ok(AssetTypeIndex::new());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open index file: {}", path.display()))?;
    let entries: Vec<IndexEntry> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse index file: {}", path.display()))?;
    Ok(AssetTypeIndex::from_entries(entries))
}

fn save_index(path: &Path, index: AssetTypeIndex) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create index directory: {}", parent.display())
            })?;
        }
    }
    write_pretty(path, &index.into_sorted_entries())
}

fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON from: {}", path.display()))?;
    Ok(value)
}

/// Write pretty-printed JSON (2-space indent) with a trailing newline.
fn write_pretty<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to: {}", path.display()))?;
    writeln!(writer).context("Failed to write trailing newline")?;
    Ok(())
}
