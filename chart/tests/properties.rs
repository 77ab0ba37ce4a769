//! Property-based tests for center classification and cross extraction.
//!
//! Uses proptest to check the partition and ordering invariants over
//! arbitrary channel sets, including tokens that do not decode.

use std::collections::{BTreeMap, BTreeSet};

use bodygraph_chart::{
    ActivationMap, Center, CenterDefinition, Engine, Gate, Planet, MISSING_GATE,
};
use proptest::prelude::*;

fn engine() -> Engine {
    Engine::standard().unwrap()
}

/// A channel token that may or may not decode: well-formed pairs in and out
/// of range, reversed pairs, and free text.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u8..=64, 1u8..=64).prop_map(|(a, b)| format!("Key{a}Key{b}")),
        (0u8..=99, 0u8..=99).prop_map(|(a, b)| format!("Key{a}Key{b}")),
        "[a-zA-Z0-9 ]{0,12}",
    ]
}

fn is_partition(def: &CenterDefinition) -> bool {
    let defined: BTreeSet<Center> = def.defined.iter().copied().collect();
    let undefined: BTreeSet<Center> = def.undefined.iter().copied().collect();
    let all: BTreeSet<Center> = Center::ALL.into_iter().collect();
    defined.is_disjoint(&undefined)
        && defined.union(&undefined).copied().collect::<BTreeSet<_>>() == all
        && defined.len() == def.defined.len()
        && undefined.len() == def.undefined.len()
}

fn is_sorted_by_name(centers: &[Center]) -> bool {
    centers.windows(2).all(|w| w[0].name() < w[1].name())
}

// =============================================================================
// Gate Table
// =============================================================================

proptest! {
    /// Every gate in range has a center; everything else is a lookup error.
    #[test]
    fn prop_lookup_total_in_range(n in -1000i64..1000) {
        let engine = engine();
        let result = engine.table().lookup(n);
        prop_assert_eq!(result.is_ok(), (1..=64).contains(&n));
    }
}

// =============================================================================
// Partition Properties
// =============================================================================

proptest! {
    /// defined and undefined partition the nine centers for any input.
    #[test]
    fn prop_partition(tokens in prop::collection::vec(token(), 0..20)) {
        let def = engine().resolver().resolve(&tokens);
        prop_assert!(is_partition(&def), "{:?}", def);
        prop_assert!(is_sorted_by_name(&def.defined));
        prop_assert!(is_sorted_by_name(&def.undefined));
    }

    /// Reversing every pair never changes the result.
    #[test]
    fn prop_decode_symmetric(pairs in prop::collection::vec((1u8..=64, 1u8..=64), 0..10)) {
        let engine = engine();
        let forward: Vec<String> = pairs.iter().map(|(a, b)| format!("Key{a}Key{b}")).collect();
        let reverse: Vec<String> = pairs.iter().map(|(a, b)| format!("Key{b}Key{a}")).collect();
        prop_assert_eq!(
            engine.resolver().resolve(&forward),
            engine.resolver().resolve(&reverse)
        );
    }

    /// Adding undecodable tokens never changes the result.
    #[test]
    fn prop_noise_is_inert(
        pairs in prop::collection::vec((1u8..=64, 1u8..=64), 0..10),
        noise in prop::collection::vec("[a-z ]{0,10}", 0..5),
    ) {
        let engine = engine();
        let clean: Vec<String> = pairs.iter().map(|(a, b)| format!("Key{a}Key{b}")).collect();
        let mut noisy = clean.clone();
        noisy.extend(noise);
        prop_assert_eq!(
            engine.resolver().resolve(&clean),
            engine.resolver().resolve(&noisy)
        );
    }

    /// The defined set is exactly the centers of the decoded gates.
    #[test]
    fn prop_defined_matches_table(pairs in prop::collection::vec((1u8..=64, 1u8..=64), 0..10)) {
        let engine = engine();
        let tokens: Vec<String> = pairs.iter().map(|(a, b)| format!("Key{a}Key{b}")).collect();
        let expected: Vec<Center> = pairs
            .iter()
            .filter(|(a, b)| a != b)
            .flat_map(|&(a, b)| [a, b])
            .map(|n| engine.table().center(Gate::new(i64::from(n)).unwrap()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(engine.resolver().resolve(&tokens).defined, expected);
    }
}

// =============================================================================
// Cross Extraction
// =============================================================================

proptest! {
    /// Output order follows the slot order regardless of map contents.
    #[test]
    fn prop_cross_slot_order(
        gates in prop::array::uniform4(1u8..=64),
        lines in prop::array::uniform4(1u8..=6),
        extra in prop::collection::vec((0usize..13, 1u8..=64), 0..8),
    ) {
        let engine = engine();
        let mut personality: ActivationMap = BTreeMap::new();
        let mut design: ActivationMap = BTreeMap::new();
        for (i, p) in extra {
            let planet = Planet::ALL[i];
            if planet != Planet::Sun && planet != Planet::Earth {
                personality.insert(planet, format!("{p}.1"));
                design.insert(planet, format!("{p}.2"));
            }
        }
        personality.insert(Planet::Sun, format!("{}.{}", gates[0], lines[0]));
        personality.insert(Planet::Earth, format!("{}.{}", gates[1], lines[1]));
        design.insert(Planet::Sun, format!("{}.{}", gates[2], lines[2]));
        design.insert(Planet::Earth, format!("{}.{}", gates[3], lines[3]));

        let cross = engine.cross_extractor().from_imprints(&personality, &design);
        prop_assert_eq!(cross.numbers(), gates.map(i32::from));
        prop_assert!(cross.is_complete());
    }

    /// A missing slot becomes the sentinel and nothing else moves.
    #[test]
    fn prop_cross_missing_slot(gates in prop::array::uniform4(1u8..=64), missing in 0usize..4) {
        let engine = engine();
        let tokens: Vec<Option<String>> = gates
            .iter()
            .enumerate()
            .map(|(i, g)| (i != missing).then(|| format!("{g}.3")))
            .collect();
        let cross = engine.cross_extractor().cross_gates(
            tokens[0].as_deref(),
            tokens[1].as_deref(),
            tokens[2].as_deref(),
            tokens[3].as_deref(),
        );
        let numbers = cross.numbers();
        for i in 0..4 {
            if i == missing {
                prop_assert_eq!(numbers[i], MISSING_GATE);
            } else {
                prop_assert_eq!(numbers[i], i32::from(gates[i]));
            }
        }
        prop_assert!(!cross.is_complete());
    }
}
