use hatchery_lib::model::state::{Genome, Locus, Phenotype};
use hatchery_lib::GeneticsEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds genomes starting from a plain homozygous baseline.
#[allow(dead_code)]
pub struct GenomeBuilder {
    genome: Genome,
}

#[allow(dead_code)]
impl GenomeBuilder {
    pub fn new() -> Self {
        Self {
            genome: Genome::homozygous(|locus| match locus {
                Locus::Species => "Slime",
                Locus::BodyType => "Round",
                Locus::BaseColor => "Mint",
                Locus::Pattern => "Plain",
                Locus::EyeShape => "Dot",
                Locus::EyeColor => "Black",
                Locus::Mouth => "Smile",
                Locus::Element => "Water",
                Locus::Personality => "Gentle",
                Locus::ShinyGene => "Normal",
                _ => "None",
            }),
        }
    }

    pub fn species(self, species: &str) -> Self {
        self.homozygous(Locus::Species, species)
    }

    pub fn homozygous(self, locus: Locus, allele: &str) -> Self {
        self.pair(locus, allele, allele)
    }

    pub fn pair(mut self, locus: Locus, a: &str, b: &str) -> Self {
        self.genome.set_pair(locus, [a.to_string(), b.to_string()]);
        self
    }

    pub fn build(self) -> Genome {
        self.genome
    }
}

#[allow(dead_code)]
pub fn engine() -> GeneticsEngine {
    GeneticsEngine::default()
}

#[allow(dead_code)]
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub fn phenotype_of(genome: &Genome) -> Phenotype {
    engine().genome_to_phenotype(genome)
}
