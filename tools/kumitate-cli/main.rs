use clap::{Parser, ValueEnum};
use kumitate::prelude::*;
use std::fs;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoundingCli {
    /// Round batch counts up; output is never short of the request.
    Ceil,
    /// Round batch counts to the nearest whole number, halves up.
    Nearest,
}

impl From<RoundingCli> for BatchRounding {
    fn from(value: RoundingCli) -> Self {
        match value {
            RoundingCli::Ceil => BatchRounding::Ceil,
            RoundingCli::Nearest => BatchRounding::Nearest,
        }
    }
}

/// Resolve raw-material totals and production schedules from a recipe table
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Inline JSON object of demands, e.g. '{"robotics": 20}'
    input: Option<String>,

    /// Path to the recipe table JSON file
    #[arg(short, long)]
    table: Option<String>,

    /// Read demands from a JSON file instead of the command line
    #[arg(short, long)]
    file: Option<String>,

    /// Store artifact path: loaded if it exists, otherwise built from
    /// --table and saved there for the next run
    #[arg(long)]
    cache: Option<String>,

    /// Treat demand keys as display names instead of item ids
    #[arg(long)]
    named_in: bool,

    /// Key the output by display names instead of item ids
    #[arg(long)]
    named_out: bool,

    /// Batch rounding convention
    #[arg(short, long, value_enum, default_value = "ceil")]
    rounding: RoundingCli,

    /// Print the full production order for the table
    #[arg(long)]
    schedule: bool,

    /// Write the resulting totals JSON to a file
    #[arg(short, long)]
    save: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Store loading ---
    let load_start = Instant::now();
    let store = load_store(&cli);
    let load_duration = load_start.elapsed();
    println!(
        "Loaded recipe store with {} items in {:?}",
        store.len(),
        load_duration
    );

    let names = NameIndex::from_store(&store);

    // --- 2. Production order ---
    if cli.schedule {
        let order = production_order(&store)
            .unwrap_or_else(|e| exit_with_error(&format!("Scheduling failed: {}", e)));
        println!("\nProduction order ({} items):", order.len());
        for (position, item_id) in order.iter().enumerate() {
            let label = if cli.named_out {
                names.name_for(item_id).unwrap_or(item_id)
            } else {
                item_id
            };
            println!("  {:>4}. {}", position + 1, label);
        }
    }

    // --- 3. Requirement resolution ---
    let Some(demands) = read_demands(&cli) else {
        if !cli.schedule {
            exit_with_error("No demands given; pass inline JSON, --file, or --schedule");
        }
        return;
    };

    let resolver = Resolver::new(&store).with_rounding(cli.rounding.into());
    let resolve_start = Instant::now();

    let mut totals = Ledger::new();
    for (key, quantity) in &demands {
        let item_id = if cli.named_in {
            names
                .id_for(key)
                .unwrap_or_else(|| exit_with_error(&format!("No item named '{}' in the table", key)))
        } else {
            key.as_str()
        };

        let requirements = resolver
            .resolve(item_id, *quantity)
            .unwrap_or_else(|e| exit_with_error(&format!("Resolution failed: {}", e)));
        totals = MergeOp::Add.apply(&totals, &requirements);
    }
    let resolve_duration = resolve_start.elapsed();

    // --- 4. Output ---
    let output = if cli.named_out {
        names.keyed_by_name(&totals)
    } else {
        totals
    };

    let mut rendered = serde_json::Map::new();
    for (key, quantity) in output.sorted_iter() {
        rendered.insert(key.to_string(), serde_json::json!(quantity));
    }
    let json = serde_json::to_string_pretty(&rendered)
        .unwrap_or_else(|e| exit_with_error(&format!("Could not render output: {}", e)));

    if let Some(save_path) = &cli.save {
        fs::write(save_path, &json).unwrap_or_else(|e| {
            exit_with_error(&format!("Could not save output to '{}': {}", save_path, e))
        });
        println!("Saved totals to '{}'", save_path);
    }

    println!("\nRaw material totals for {} demand(s):", demands.len());
    println!("{}", json);

    println!("\n--- Performance Summary ---");
    println!("Store Loading:  {:?}", load_duration);
    println!("Resolution:     {:?}", resolve_duration);
    println!("Total:          {:?}", total_start.elapsed());
}

/// Loads the store from the artifact cache when possible, falling back to
/// parsing and validating the raw table.
fn load_store(cli: &Cli) -> RecipeStore {
    if let Some(cache_path) = &cli.cache
        && fs::metadata(cache_path).is_ok()
    {
        println!("Loading store artifact from '{}'", cache_path);
        return RecipeStore::from_file(cache_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load artifact: {}", e)));
    }

    let Some(table_path) = &cli.table else {
        exit_with_error("No recipe table given; pass --table (or --cache pointing to an artifact)");
    };

    let raw = RawTable::from_file(table_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load recipe table: {}", e)));
    let table = raw
        .into_table()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert recipe table: {}", e)));
    let store = RecipeStore::from_table(table)
        .unwrap_or_else(|e| exit_with_error(&format!("Recipe table is malformed: {}", e)));

    if let Some(cache_path) = &cli.cache {
        store
            .save(cache_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("Saved store artifact to '{}'", cache_path);
    }

    store
}

/// Reads the demand set from the inline argument or --file, if either was
/// given.
fn read_demands(cli: &Cli) -> Option<IndexMap<String, u64>> {
    let json = if let Some(file_path) = &cli.file {
        fs::read_to_string(file_path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read demands file '{}': {}", file_path, e))
        })
    } else {
        cli.input.clone()?
    };

    let demands: IndexMap<String, u64> = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse demands JSON: {}", e)));
    Some(demands)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
