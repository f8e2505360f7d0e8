//! Polytonic CLI - Beta code to polytonic Greek converter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use polytonic::{
    files::StdResourceResolver,
    reading::{JsonPositionStore, ReadingSession, Work},
    BetaCodeConverter, ConversionError, ConversionResult, ConvertOptions, Dictionary,
    EmptyWordPolicy, MappingTable, STANDARD_TABLE,
};
#[cfg(feature = "cli")]
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use std::sync::Arc;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "b2g")]
#[command(version)]
#[command(about = "Polytonic - Beta code to polytonic Greek converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    #[command(flatten)]
    table: TableArgs,

    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Mapping table and conversion flags shared by the converting commands
#[cfg(feature = "cli")]
#[derive(clap::Args, Clone)]
struct TableArgs {
    /// Mapping resource to use instead of the standard table (.json; .yaml/.toml/.csv with data-loading)
    #[arg(short, long)]
    mappings: Option<String>,

    /// Drop empty words left by runs of spaces
    #[arg(long)]
    collapse_empty_words: bool,

    /// Keep word-final medial sigma as-is
    #[arg(long)]
    raw_sigma: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a file (default action)
    Convert {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Batch convert every file in a directory
    Batch {
        /// Input directory or single file
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// File extension for output files
        #[arg(short, long, default_value = "txt")]
        extension: String,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Look up a headword (in beta code) in a dictionary
    Lookup {
        /// Headword to look up
        headword: String,

        /// Dictionary resource (JSON object of headword → definition)
        #[arg(short, long)]
        dictionary: String,
    },

    /// Show a random dictionary entry
    Random {
        /// Dictionary resource (JSON object of headword → definition)
        #[arg(short, long)]
        dictionary: String,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the current page of a work, optionally moving first
    Read {
        /// Work resource (JSON)
        work: String,

        /// File holding reading positions
        #[arg(short, long, default_value = "positions.json")]
        positions: String,

        /// Lines to move forward (negative moves back)
        #[arg(short, long, allow_negative_numbers = true)]
        advance: Option<i64>,
    },

    /// Validate a mapping table and report its size
    Table {
        /// Mapping resource (standard table if omitted)
        #[arg(short, long)]
        mappings: Option<String>,

        /// Print every entry, sorted by token
        #[arg(short, long)]
        list: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(cmd) => handle_subcommand(cmd),
        None => convert_file(cli.input_file, cli.output, &cli.table),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    let default = if verbose { "polytonic=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> ConversionResult<()> {
    match cmd {
        Commands::Convert {
            input,
            output,
            table,
        } => convert_file(input, output, &table),

        Commands::Batch {
            input,
            output_dir,
            extension,
            table,
        } => batch_convert(&input, &output_dir, &extension, &table),

        Commands::Lookup {
            headword,
            dictionary,
        } => {
            let dict = Dictionary::load(&StdResourceResolver::new(), &dictionary)?;
            let converter = BetaCodeConverter::standard();
            match dict.lookup_converted(&headword, &converter) {
                Some(definition) => {
                    print!("{}", converter.convert(&headword));
                    print!("{}", definition);
                    Ok(())
                }
                None => {
                    eprintln!("✗ '{}' is not in {}", headword, dictionary);
                    std::process::exit(1);
                }
            }
        }

        Commands::Random { dictionary, seed } => {
            let dict = Dictionary::load(&StdResourceResolver::new(), &dictionary)?;
            let entry = match seed {
                Some(seed) => dict.random_entry_with(&mut StdRng::seed_from_u64(seed)),
                None => dict.random_entry(),
            };
            let Some(entry) = entry else {
                eprintln!("✗ {} has no entries", dictionary);
                std::process::exit(1);
            };
            let converter = BetaCodeConverter::standard();
            print!("{}", converter.convert(&entry.headword));
            print!("{}", converter.convert(&entry.definition));
            Ok(())
        }

        Commands::Read {
            work,
            positions,
            advance,
        } => {
            let work = Work::load(&StdResourceResolver::new(), &work)?;
            let store = JsonPositionStore::open(&positions)?;
            let mut session = ReadingSession::open(work, store)?;
            if let Some(delta) = advance {
                session.advance(delta)?;
            }
            eprintln!("{}", session.reading_info());
            print!("{}", session.converted_page(&BetaCodeConverter::standard()));
            Ok(())
        }

        Commands::Table { mappings, list } => {
            let table = match mappings {
                Some(ref name) => MappingTable::load(&StdResourceResolver::new(), name)?,
                None => MappingTable::clone(&STANDARD_TABLE),
            };
            println!(
                "{}: {} entries",
                mappings.as_deref().unwrap_or("standard table"),
                table.len()
            );
            if list {
                let mut entries: Vec<_> = table.iter().collect();
                entries.sort_unstable();
                for (token, unit) in entries {
                    println!("{}\t{}", token, unit);
                }
            }
            Ok(())
        }

        Commands::Info => {
            println!("Polytonic - Beta code to polytonic Greek converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Beta code → polytonic Greek (breathings, accents, iota subscript, diaeresis)");
            println!("  ✓ Capitals with leading breathing and accent");
            println!("  ✓ Word-final sigma selection");
            println!("  ✓ Custom mapping tables (JSON; YAML/TOML/CSV with data-loading)");
            println!("  ✓ Dictionary lookup and random entries");
            println!("  ✓ Persisted reading positions");
            println!("  ✓ Batch file processing");
            println!();
            println!("Standard table: {} entries", STANDARD_TABLE.len());
            println!();
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn build_converter(args: &TableArgs) -> ConversionResult<BetaCodeConverter> {
    let table = match args.mappings {
        Some(ref name) => Arc::new(MappingTable::load(&StdResourceResolver::new(), name)?),
        None => Arc::clone(&STANDARD_TABLE),
    };
    let options = ConvertOptions {
        empty_words: if args.collapse_empty_words {
            EmptyWordPolicy::Collapse
        } else {
            EmptyWordPolicy::Preserve
        },
        normalize_final_sigma: !args.raw_sigma,
    };
    Ok(BetaCodeConverter::with_options(table, options))
}

#[cfg(feature = "cli")]
fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn convert_file(
    input: Option<String>,
    output: Option<String>,
    args: &TableArgs,
) -> ConversionResult<()> {
    let converter = build_converter(args)?;
    let content = read_input(input.as_deref())?;
    let result = converter.convert(&content);

    match output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(result.as_bytes())?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            io::stdout().write_all(result.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn batch_convert(
    input: &str,
    output_dir: &str,
    extension: &str,
    args: &TableArgs,
) -> ConversionResult<()> {
    let converter = build_converter(args)?;

    // Create output directory if it doesn't exist
    fs::create_dir_all(output_dir)?;

    let input_path = Path::new(input);
    let files: Vec<_> = if input_path.is_dir() {
        fs::read_dir(input_path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect()
    } else {
        vec![input_path.to_path_buf()]
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for file_path in files {
        let filename = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let output_path = Path::new(output_dir).join(format!("{}.{}", filename, extension));

        let outcome = fs::read_to_string(&file_path)
            .map_err(ConversionError::from)
            .and_then(|content| Ok(fs::write(&output_path, converter.convert(&content))?));

        match outcome {
            Ok(()) => {
                eprintln!("✓ {}", output_path.display());
                success_count += 1;
            }
            Err(e) => {
                eprintln!("✗ {} - {}", file_path.display(), e);
                error_count += 1;
            }
        }
    }

    tracing::info!(success_count, error_count, "batch finished");
    eprintln!(
        "\nBatch conversion complete: {} succeeded, {} failed",
        success_count, error_count
    );

    if error_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install polytonic --features cli");
    eprintln!("  b2g [OPTIONS] [INPUT_FILE]");
}
