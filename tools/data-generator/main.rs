use clap::Parser;
use indexmap::IndexMap;
use kumitate::data::{RawRecipeRecord, RawTable};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate random layered recipe tables for the kumitate
/// resolver. The output is acyclic by construction: every component of a
/// tier-N item comes from a strictly lower tier.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_table.json")]
    output: String,

    /// Number of tiers above the raw-material tier
    #[arg(long, default_value_t = 4)]
    tiers: usize,

    /// Number of items generated per tier
    #[arg(long, default_value_t = 6)]
    per_tier: usize,

    /// Maximum number of distinct components per recipe
    #[arg(long, default_value_t = 3)]
    max_components: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.per_tier == 0 || cli.max_components == 0 {
        eprintln!("Error: --per-tier and --max-components must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating recipe table ({} tiers, {} items per tier)...",
        cli.tiers + 1,
        cli.per_tier
    );

    let mut records: IndexMap<String, RawRecipeRecord> = IndexMap::new();

    // Tier 0: raw materials, leaves with a batch size of 1.
    let mut previous_tier: Vec<String> = Vec::with_capacity(cli.per_tier);
    for index in 0..cli.per_tier {
        let id = format!("raw-{}", index);
        records.insert(id.clone(), make_record(format!("Raw Material {}", index), 1, 0, None));
        previous_tier.push(id);
    }
    println!("-> Generated {} raw materials.", cli.per_tier);

    // Higher tiers draw their components from the tier directly below.
    for tier in 1..=cli.tiers {
        let mut current_tier = Vec::with_capacity(cli.per_tier);
        for index in 0..cli.per_tier {
            let id = format!("t{}-item-{}", tier, index);
            let components = generate_components(&mut rng, &previous_tier, cli.max_components);
            let batch_size = rng.random_range(1..=5);
            records.insert(
                id.clone(),
                make_record(
                    format!("Tier {} Item {}", tier, index),
                    batch_size,
                    tier,
                    Some(components),
                ),
            );
            current_tier.push(id);
        }
        println!("-> Generated tier {} ({} recipes).", tier, cli.per_tier);
        previous_tier = current_tier;
    }

    let table = RawTable { records };
    let json_output = serde_json::to_string_pretty(&table)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} recipes to '{}'",
        table.records.len(),
        cli.output
    );

    Ok(())
}

fn make_record(
    name: String,
    unit_size: i64,
    level: usize,
    components: Option<IndexMap<String, i64>>,
) -> RawRecipeRecord {
    let mut extra = IndexMap::new();
    extra.insert("level".to_string(), serde_json::json!(level));

    RawRecipeRecord {
        type_name: Some(name),
        unit_size: Some(unit_size),
        components,
        extra,
    }
}

/// Picks 1..=max distinct component ids from the pool with random per-batch
/// quantities.
fn generate_components(
    rng: &mut ThreadRng,
    pool: &[String],
    max_components: usize,
) -> IndexMap<String, i64> {
    let count = rng.random_range(1..=max_components.min(pool.len()));
    pool.choose_multiple(rng, count)
        .map(|id| (id.clone(), rng.random_range(1..=10)))
        .collect()
}
