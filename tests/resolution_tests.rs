//! Property tests for the resolution model.
//!
//! The invariants here are the load-bearing ones: attempt counts only ever
//! grow, availability latches off once a door breaks, the curves stay inside
//! their clamps, and degenerate chances (0 and 100) are fully deterministic.

use proptest::prelude::*;

use tumbler::core::{ChanceCurve, DoorId, EngineConfig, MapId, SessionRng, TimeCurve};
use tumbler::doors::{DifficultyEntry, DifficultyTable};
use tumbler::resolve::formula::{action_duration, chance_for_success, duration_factor};
use tumbler::resolve::{DifficultyBand, LockEngine};

fn engine_with_door(required_level: u8) -> LockEngine {
    let mut table = DifficultyTable::new();
    table.register(
        MapId::new("m"),
        DoorId::new("d"),
        DifficultyEntry::new(required_level),
    );
    LockEngine::new(EngineConfig::default(), table).unwrap()
}

proptest! {
    /// Chance 0 never succeeds, for any seed.
    #[test]
    fn chance_zero_never_succeeds(seed in any::<u64>()) {
        let mut engine = engine_with_door(5);
        let mut rng = SessionRng::new(seed);
        let door = DoorId::new("d");

        let outcome = engine.resolve_action(&door, 0.0, &mut rng);
        prop_assert!(!outcome.success);
    }

    /// Chance 100 always succeeds, for any seed.
    #[test]
    fn chance_hundred_always_succeeds(seed in any::<u64>()) {
        let mut engine = engine_with_door(5);
        let mut rng = SessionRng::new(seed);
        let door = DoorId::new("d");

        let outcome = engine.resolve_action(&door, 100.0, &mut rng);
        prop_assert!(outcome.success);
        prop_assert!(!outcome.broken_now);
    }

    /// Over any random sequence of resolutions, the attempt count never
    /// decreases, and availability never comes back once lost.
    #[test]
    fn attempts_grow_and_availability_latches(
        seed in any::<u64>(),
        chances in proptest::collection::vec(0.0f32..=100.0, 1..40),
    ) {
        let mut engine = engine_with_door(5);
        let mut rng = SessionRng::new(seed);
        let door = DoorId::new("d");

        let mut last_attempts = 0;
        let mut went_unavailable = false;

        for chance in chances {
            let outcome = engine.resolve_action(&door, chance, &mut rng);
            let attempts = engine.attempts(&door);

            prop_assert!(attempts >= last_attempts);
            prop_assert!(attempts - last_attempts <= 1);
            if outcome.success {
                prop_assert_eq!(attempts, last_attempts);
            }
            last_attempts = attempts;

            if went_unavailable {
                prop_assert!(!engine.is_action_available(&door));
            }
            if !engine.is_action_available(&door) {
                went_unavailable = true;
                prop_assert!(attempts > 3);
            }
        }
    }

    /// The chance formula stays inside [0, 100] for every level pairing.
    #[test]
    fn chance_is_clamped(skill in 0u8..=60, required in 0u8..=60) {
        let chance = chance_for_success(&ChanceCurve::default(), skill, required);
        prop_assert!((0.0..=100.0).contains(&chance));
    }

    /// The chance formula never decreases as skill goes up.
    #[test]
    fn chance_is_monotone(skill in 0u8..60, required in 0u8..=60) {
        let curve = ChanceCurve::default();
        let lower = chance_for_success(&curve, skill, required);
        let higher = chance_for_success(&curve, skill + 1, required);
        prop_assert!(higher >= lower);
    }

    /// The duration factor respects its clamps and durations stay positive.
    #[test]
    fn duration_is_bounded_and_positive(
        skill in 0u8..=60,
        required in 0u8..=60,
        base_time in 0.5f32..30.0,
    ) {
        let curve = TimeCurve::default();
        let factor = duration_factor(&curve, skill, required);
        prop_assert!(factor >= curve.min_factor);
        prop_assert!(factor <= curve.max_factor);

        let duration = action_duration(&curve, base_time, skill, required);
        prop_assert!(duration > 0.0);
    }

    /// More under-leveled never means faster.
    #[test]
    fn duration_is_monotone_in_deficit(skill in 1u8..=60, required in 0u8..=60) {
        let curve = TimeCurve::default();
        let weaker = duration_factor(&curve, skill - 1, required);
        let stronger = duration_factor(&curve, skill, required);
        prop_assert!(weaker >= stronger);
    }

    /// Every chance in [0, 100] lands in exactly the band the thresholds
    /// prescribe.
    #[test]
    fn bands_partition_the_chance_range(chance in 0.0f32..=100.0) {
        let band = DifficultyBand::classify(chance);
        if chance > 80.0 {
            prop_assert_eq!(band, DifficultyBand::Easy);
        } else if chance == 0.0 {
            prop_assert_eq!(band, DifficultyBand::Impossible);
        } else {
            prop_assert_eq!(band, DifficultyBand::Hard);
        }
    }
}

/// Deterministic exhaustive check of the latch at the default threshold.
#[test]
fn test_availability_latch_threshold() {
    let mut engine = engine_with_door(5);
    let mut rng = SessionRng::new(0);
    let door = DoorId::new("d");

    // Attempts 1 through 3 keep the door available
    for _ in 0..3 {
        engine.resolve_action(&door, 0.0, &mut rng);
        assert!(engine.is_action_available(&door));
    }

    // The fourth failure is the one that breaks it
    let outcome = engine.resolve_action(&door, 0.0, &mut rng);
    assert!(outcome.broken_now);
    assert!(!engine.is_action_available(&door));
}
