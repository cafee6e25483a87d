//! Property tests for the aggregation algebra.

use proptest::prelude::*;

use suffering_model::{Country, ImportBreakdown, Material};
use suffering_score::{WeightedEntry, suffering, weighted_mean};

fn country_for(index: usize) -> Country {
    // Skip Undefined at position 0.
    Country::ALL[1 + index % (Country::ALL.len() - 1)]
}

proptest! {
    #[test]
    fn fully_resolved_mean_equals_plain_weighted_mean(
        items in prop::collection::vec((0.01f64..10.0, 1.0f64..6.0), 1..20)
    ) {
        let entries: Vec<WeightedEntry<usize>> = items
            .iter()
            .enumerate()
            .map(|(i, (weight, value))| WeightedEntry::new(i, *weight, Some(*value)))
            .collect();
        let result = weighted_mean(&entries);
        let aggregate = result.outcome.expect("fully resolved input must aggregate");

        let total: f64 = items.iter().map(|(w, _)| w).sum();
        let expected: f64 = items.iter().map(|(w, v)| w * v).sum::<f64>() / total;
        prop_assert!((aggregate.value - expected).abs() < 1e-9);
        prop_assert!(aggregate.unresolved.is_empty());
        prop_assert!(aggregate.unresolved_fraction() == 0.0);
    }

    #[test]
    fn unresolved_fraction_stays_in_unit_interval(
        items in prop::collection::vec(
            (0.01f64..10.0, prop::option::of(1.0f64..6.0)),
            1..20,
        )
    ) {
        let entries: Vec<WeightedEntry<usize>> = items
            .iter()
            .enumerate()
            .map(|(i, (weight, value))| WeightedEntry::new(i, *weight, *value))
            .collect();
        let result = weighted_mean(&entries);
        if let Some(aggregate) = result.outcome {
            let fraction = aggregate.unresolved_fraction();
            prop_assert!((0.0..=1.0).contains(&fraction));
        }
    }

    #[test]
    fn zero_total_weight_always_fails(
        values in prop::collection::vec(1.0f64..6.0, 1..10)
    ) {
        let entries: Vec<WeightedEntry<usize>> = values
            .iter()
            .enumerate()
            .map(|(i, value)| WeightedEntry::new(i, 0.0, Some(*value)))
            .collect();
        let result = weighted_mean(&entries);
        prop_assert!(result.is_failure());
    }

    #[test]
    fn suffering_index_is_invariant_under_identical_reordering(
        pairs in prop::collection::vec((0.0f64..100.0, 0.0f64..1.0), 1..12)
    ) {
        let countries: Vec<Country> = (0..pairs.len()).map(country_for).collect();
        let counts: Vec<f64> = pairs.iter().map(|(count, _)| *count).collect();
        let ratios: Vec<f64> = pairs.iter().map(|(_, ratio)| *ratio).collect();

        let forward = ImportBreakdown::new(
            Material::Timber,
            Country::UnitedStatesOfAmerica,
            countries.clone(),
            ratios.clone(),
        );
        let reversed = ImportBreakdown::new(
            Material::Timber,
            Country::UnitedStatesOfAmerica,
            countries.into_iter().rev().collect(),
            ratios.into_iter().rev().collect(),
        );
        let reversed_counts: Vec<f64> = counts.iter().copied().rev().collect();

        let left = suffering::score(&counts, &forward, 50.0)
            .outcome
            .expect("index");
        let right = suffering::score(&reversed_counts, &reversed, 50.0)
            .outcome
            .expect("index");

        prop_assert!((left.value - right.value).abs() < 1e-9);
        prop_assert_eq!(left.culled_countries.len(), right.culled_countries.len());
    }
}
