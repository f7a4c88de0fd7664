use anyhow::Context;
use clap::Parser;
use hatchery_core::{init_logging, seeded_rng, BreedingMetrics, GeneticsConfig, GeneticsEngine};
use hatchery_data::{Genome, Phenotype, Tier};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Simulate breeding and report the rarity distribution.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of children to breed
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output directory, defaults to reports/run_<timestamp>
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Size of the initial random parent pool
    #[arg(short, long, default_value_t = 6)]
    parents: usize,

    /// TOML file with genetics tunables
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct PetReport {
    phenotype: Phenotype,
    rarity_score: u32,
    rarity_tier: Tier,
    rarity_tags: Vec<String>,
}

struct Parent {
    genome: Genome,
    phenotype: Phenotype,
}

fn run(args: &Args) -> anyhow::Result<Vec<PetReport>> {
    anyhow::ensure!(args.parents > 0, "--parents must be at least 1");

    let config = match &args.config {
        Some(path) => GeneticsConfig::load(path)?,
        None => GeneticsConfig::default(),
    }
    .with_env_overrides()?;
    let engine = GeneticsEngine::new(config)?;
    let mut rng = seeded_rng(args.seed);
    let metrics = BreedingMetrics::new();

    let mut pool: Vec<Parent> = (0..args.parents)
        .map(|_| {
            let genome = engine.random_genome(&mut rng);
            let phenotype = engine.genome_to_phenotype(&genome);
            Parent { genome, phenotype }
        })
        .collect();

    let mut results = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let a = &pool[rng.gen_range(0..pool.len())];
        let b = &pool[rng.gen_range(0..pool.len())];
        let (genome, rare_event) =
            engine.breed(&a.genome, &b.genome, &a.phenotype, &b.phenotype, &mut rng);
        let phenotype = engine.genome_to_phenotype(&genome);
        let profile = engine.rarity_profile(&phenotype);
        metrics.record_breed(rare_event, &profile);

        results.push(PetReport {
            phenotype: phenotype.clone(),
            rarity_score: profile.score,
            rarity_tier: profile.tier,
            rarity_tags: profile.tags,
        });
        pool.push(Parent { genome, phenotype });
    }

    metrics.log_summary();
    Ok(results)
}

/// Counts children per `(tier, score)`, ordered by tier then score.
fn rarity_histogram(results: &[PetReport]) -> BTreeMap<(Tier, u32), u64> {
    let mut counts = BTreeMap::new();
    for pet in results {
        *counts.entry((pet.rarity_tier, pet.rarity_score)).or_insert(0) += 1;
    }
    counts
}

fn write_reports(out_dir: &Path, results: &[PetReport]) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let pets = serde_json::to_string_pretty(results)?;
    fs::write(out_dir.join("pets.json"), pets)?;

    let mut csv = fs::File::create(out_dir.join("rarity.csv"))?;
    writeln!(csv, "tier,score,count")?;
    for ((tier, score), count) in rarity_histogram(results) {
        writeln!(csv, "{tier},{score},{count}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let out_dir = args.out.clone().unwrap_or_else(|| {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("reports/run_{timestamp}"))
    });

    let results = run(&args)?;
    write_reports(&out_dir, &results)?;

    tracing::info!(children = results.len(), "Simulation finished");
    println!("Wrote reports to {}", out_dir.display());
    Ok(())
}
