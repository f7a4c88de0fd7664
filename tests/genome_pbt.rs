use hatchery_lib::model::config::{RarityConfig, SynergyRule, TraitRequirement};
use hatchery_lib::model::genome::legal_alleles;
use hatchery_lib::model::phenotype::{genome_to_phenotype, pick_dominant};
use hatchery_lib::model::rarity::rarity_profile;
use hatchery_lib::model::state::{Allele, Genome, Locus, Tier};
use proptest::prelude::*;

fn arb_allele(locus: Locus) -> impl Strategy<Value = Allele> {
    prop::sample::select(legal_alleles(locus)).prop_map(str::to_string)
}

fn arb_pair(locus: Locus) -> impl Strategy<Value = [Allele; 2]> {
    (arb_allele(locus), arb_allele(locus)).prop_map(|(a, b)| [a, b])
}

prop_compose! {
    fn arb_genome()(
        pairs in Vec::from(Locus::ALL.map(arb_pair))
    ) -> Genome {
        let mut pairs = pairs.into_iter();
        Genome::from_fn(|_| pairs.next().unwrap_or_default())
    }
}

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_dominance_is_symmetric(genome in arb_genome()) {
        for (locus, [a, b]) in genome.iter() {
            prop_assert_eq!(pick_dominant(locus, a, b), pick_dominant(locus, b, a));
        }
    }

    #[test]
    fn test_phenotype_is_idempotent(genome in arb_genome()) {
        let phenotype = genome_to_phenotype(&genome);
        let homozygous = Genome::homozygous(|locus| phenotype.get(locus).to_string());
        prop_assert_eq!(genome_to_phenotype(&homozygous), phenotype);
    }

    #[test]
    fn test_genome_hex_roundtrip(genome in arb_genome()) {
        let hex = genome.to_hex();
        let restored = Genome::from_hex(&hex).unwrap();
        prop_assert_eq!(restored, genome);
    }

    #[test]
    fn test_extra_satisfied_rule_never_lowers_rarity(
        genome in arb_genome(),
        locus in prop::sample::select(Locus::ALL.to_vec()),
        bonus in 0u32..40,
        min_tier in arb_tier(),
    ) {
        let phenotype = genome_to_phenotype(&genome);
        let base = RarityConfig::default();
        let before = rarity_profile(&base, &phenotype);

        let mut extended = base.clone();
        extended.synergy.push(SynergyRule {
            tags: vec!["EXTRA_SET".into()],
            requires: vec![TraitRequirement::new(locus, phenotype.get(locus))],
            bonus,
            min_tier,
        });
        let after = rarity_profile(&extended, &phenotype);

        prop_assert!(after.score >= before.score);
        prop_assert!(after.tier >= before.tier);
        prop_assert!(after.tier >= min_tier);
        prop_assert!(after.has_tag("EXTRA_SET"));
    }

    #[test]
    fn test_tags_are_sorted_and_unique(genome in arb_genome()) {
        let profile = rarity_profile(&RarityConfig::default(), &genome_to_phenotype(&genome));
        prop_assert!(profile.tags.windows(2).all(|w| w[0] < w[1]));
    }
}
