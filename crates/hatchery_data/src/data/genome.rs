use super::error::{GeneticsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Number of loci in every genome.
pub const LOCUS_COUNT: usize = 16;

/// A named genetic slot.
///
/// The set is closed and ordered; a locus's position in [`Locus::ALL`] is its
/// index into genome and phenotype storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Locus {
    Species,
    BodyType,
    BaseColor,
    Pattern,
    EyeShape,
    EyeColor,
    Mouth,
    Horn,
    Wing,
    Tail,
    Accessory,
    Aura,
    Element,
    Personality,
    ShinyGene,
    MutationSlot,
}

impl Locus {
    /// Every locus, in storage order.
    pub const ALL: [Locus; LOCUS_COUNT] = [
        Locus::Species,
        Locus::BodyType,
        Locus::BaseColor,
        Locus::Pattern,
        Locus::EyeShape,
        Locus::EyeColor,
        Locus::Mouth,
        Locus::Horn,
        Locus::Wing,
        Locus::Tail,
        Locus::Accessory,
        Locus::Aura,
        Locus::Element,
        Locus::Personality,
        Locus::ShinyGene,
        Locus::MutationSlot,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, as used in serialized genomes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Locus::Species => "Species",
            Locus::BodyType => "BodyType",
            Locus::BaseColor => "BaseColor",
            Locus::Pattern => "Pattern",
            Locus::EyeShape => "EyeShape",
            Locus::EyeColor => "EyeColor",
            Locus::Mouth => "Mouth",
            Locus::Horn => "Horn",
            Locus::Wing => "Wing",
            Locus::Tail => "Tail",
            Locus::Accessory => "Accessory",
            Locus::Aura => "Aura",
            Locus::Element => "Element",
            Locus::Personality => "Personality",
            Locus::ShinyGene => "ShinyGene",
            Locus::MutationSlot => "MutationSlot",
        }
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Locus {
    type Err = GeneticsError;

    fn from_str(s: &str) -> Result<Self> {
        Locus::ALL
            .into_iter()
            .find(|locus| locus.name() == s)
            .ok_or_else(|| GeneticsError::UnknownLocus(s.to_string()))
    }
}

/// A concrete value occupying one slot of a locus.
pub type Allele = String;

/// The two alleles carried at a locus. Slot order matters for inheritance only.
pub type AllelePair = [Allele; 2];

type GenomeMap = BTreeMap<Locus, AllelePair>;
type PhenotypeMap = BTreeMap<Locus, Allele>;

/// Complete diploid allele assignment across all loci.
///
/// Serializes as an object keyed by locus name; deserializing an object that
/// lacks any locus is an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GenomeMap", into = "GenomeMap")]
pub struct Genome {
    pairs: [AllelePair; LOCUS_COUNT],
}

impl Genome {
    /// Builds a genome by asking `f` for the pair at every locus.
    pub fn from_fn<F: FnMut(Locus) -> AllelePair>(f: F) -> Self {
        Self {
            pairs: Locus::ALL.map(f),
        }
    }

    /// Builds a genome that is homozygous for `f(locus)` everywhere.
    pub fn homozygous<F, S>(mut f: F) -> Self
    where
        F: FnMut(Locus) -> S,
        S: Into<Allele>,
    {
        Self::from_fn(|locus| {
            let allele = f(locus).into();
            [allele.clone(), allele]
        })
    }

    #[must_use]
    pub fn pair(&self, locus: Locus) -> &AllelePair {
        &self.pairs[locus.index()]
    }

    pub fn set_pair(&mut self, locus: Locus, pair: AllelePair) {
        self.pairs[locus.index()] = pair;
    }

    /// Whether both slots at `locus` hold the same allele.
    #[must_use]
    pub fn is_homozygous(&self, locus: Locus) -> bool {
        let [a, b] = self.pair(locus);
        a == b
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locus, &AllelePair)> {
        Locus::ALL.into_iter().zip(self.pairs.iter())
    }

    /// Serialize genome to a hex DNA string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    /// Deserialize genome from a hex DNA string.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes =
            hex::decode(hex_str.trim()).map_err(|e| GeneticsError::InvalidDna(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| GeneticsError::InvalidDna(e.to_string()))
    }
}

impl Index<Locus> for Genome {
    type Output = AllelePair;

    fn index(&self, locus: Locus) -> &AllelePair {
        self.pair(locus)
    }
}

impl TryFrom<GenomeMap> for Genome {
    type Error = GeneticsError;

    fn try_from(mut map: GenomeMap) -> Result<Self> {
        let mut pairs: [AllelePair; LOCUS_COUNT] = Default::default();
        for locus in Locus::ALL {
            pairs[locus.index()] = map
                .remove(&locus)
                .ok_or(GeneticsError::MissingLocus(locus))?;
        }
        Ok(Self { pairs })
    }
}

impl From<Genome> for GenomeMap {
    fn from(genome: Genome) -> Self {
        Locus::ALL.into_iter().zip(genome.pairs).collect()
    }
}

/// One resolved, observable trait per locus.
///
/// Derived from a [`Genome`] by dominance resolution and never edited on its
/// own. Serializes as an object keyed by locus name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PhenotypeMap", into = "PhenotypeMap")]
pub struct Phenotype {
    traits: [Allele; LOCUS_COUNT],
}

impl Phenotype {
    pub fn from_fn<F, S>(mut f: F) -> Self
    where
        F: FnMut(Locus) -> S,
        S: Into<Allele>,
    {
        Self {
            traits: Locus::ALL.map(|locus| f(locus).into()),
        }
    }

    #[must_use]
    pub fn get(&self, locus: Locus) -> &str {
        &self.traits[locus.index()]
    }

    pub fn set(&mut self, locus: Locus, value: impl Into<Allele>) {
        self.traits[locus.index()] = value.into();
    }

    /// Returns a copy with the trait at `locus` replaced.
    #[must_use]
    pub fn with(mut self, locus: Locus, value: impl Into<Allele>) -> Self {
        self.set(locus, value);
        self
    }

    /// Whether the trait at `locus` equals `value`.
    #[must_use]
    pub fn is(&self, locus: Locus, value: &str) -> bool {
        self.get(locus) == value
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locus, &str)> {
        Locus::ALL
            .into_iter()
            .zip(self.traits.iter().map(String::as_str))
    }
}

impl Index<Locus> for Phenotype {
    type Output = str;

    fn index(&self, locus: Locus) -> &str {
        self.get(locus)
    }
}

impl TryFrom<PhenotypeMap> for Phenotype {
    type Error = GeneticsError;

    fn try_from(mut map: PhenotypeMap) -> Result<Self> {
        let mut traits: [Allele; LOCUS_COUNT] = Default::default();
        for locus in Locus::ALL {
            traits[locus.index()] = map
                .remove(&locus)
                .ok_or(GeneticsError::MissingLocus(locus))?;
        }
        Ok(Self { traits })
    }
}

impl From<Phenotype> for PhenotypeMap {
    fn from(phenotype: Phenotype) -> Self {
        Locus::ALL.into_iter().zip(phenotype.traits).collect()
    }
}
