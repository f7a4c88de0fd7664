use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hatchery_core::{init_logging, seeded_rng, GeneticsConfig, GeneticsEngine};
use hatchery_data::Genome;
use hatchery_lib::Pet;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "hatchery.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hatch a fresh egg
    Egg {
        /// Use the premium adoption odds
        #[arg(long)]
        premium: bool,

        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Breed two pets and hatch the child
    Breed {
        /// Genome or pet JSON of the first parent
        a: PathBuf,

        /// Genome or pet JSON of the second parent
        b: PathBuf,

        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Resolve and score an existing genome
    Inspect {
        /// Genome or pet JSON
        #[arg(required_unless_present = "hex", conflicts_with = "hex")]
        genome: Option<PathBuf>,

        /// Hex-encoded DNA instead of a file
        #[arg(long)]
        hex: Option<String>,

        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Reads a genome from a file holding either a bare genome or a pet record.
fn load_genome(path: &Path) -> Result<Genome> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut value: serde_json::Value = serde_json::from_str(&content)?;
    if let Some(genome) = value.get_mut("genome") {
        value = genome.take();
    }
    serde_json::from_value(value).with_context(|| format!("parsing genome in {}", path.display()))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = GeneticsConfig::load(&args.config)?.with_env_overrides()?;
    let engine = GeneticsEngine::new(config)?;
    let now = chrono::Utc::now();

    let pet = match args.command {
        Command::Egg { premium, seed } => {
            let mut rng = seeded_rng(seed);
            let genome = if premium {
                engine.premium_genome(&mut rng)
            } else {
                engine.random_genome(&mut rng)
            };
            Pet::hatch(&engine, genome, &mut rng, now)
        }
        Command::Breed { a, b, seed } => {
            let genome_a = load_genome(&a)?;
            let genome_b = load_genome(&b)?;
            let mut rng = seeded_rng(seed);
            let (child, rare_event) = engine.breed_genomes(&genome_a, &genome_b, &mut rng);
            if rare_event {
                tracing::info!("Rare mutation event fired");
            }
            Pet::hatch(&engine, child, &mut rng, now)
        }
        Command::Inspect { genome, hex, seed } => {
            let genome = match (genome, hex) {
                (_, Some(dna)) => Genome::from_hex(&dna)?,
                (Some(path), None) => load_genome(&path)?,
                (None, None) => anyhow::bail!("inspect needs a genome file or --hex"),
            };
            let mut rng = seeded_rng(seed);
            Pet::hatch(&engine, genome, &mut rng, now)
        }
    };

    tracing::info!(tier = %pet.rarity.tier, score = pet.rarity.score, "Hatched");
    println!("{}", serde_json::to_string_pretty(&pet)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_egg() {
        let args = Args::parse_from(["hatchery", "egg", "--premium", "--seed", "9"]);
        assert_eq!(args.config, PathBuf::from("hatchery.toml"));
        match args.command {
            Command::Egg { premium, seed } => {
                assert!(premium);
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_args_parsing_breed() {
        let args = Args::parse_from(["hatchery", "-c", "custom.toml", "breed", "a.json", "b.json"]);
        assert_eq!(args.config, PathBuf::from("custom.toml"));
        match args.command {
            Command::Breed { a, b, seed } => {
                assert_eq!(a, PathBuf::from("a.json"));
                assert_eq!(b, PathBuf::from("b.json"));
                assert!(seed.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_args_parsing_inspect_requires_source() {
        assert!(Args::try_parse_from(["hatchery", "inspect"]).is_err());
        assert!(Args::try_parse_from(["hatchery", "inspect", "--hex", "7b7d"]).is_ok());
        assert!(Args::try_parse_from(["hatchery", "inspect", "g.json", "--hex", "7b7d"]).is_err());
    }
}
