use super::*;
use chrono::{TimeDelta, TimeZone};
use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::{Rng, SeedableRng};
use std::{collections::HashSet, sync::Arc, thread};

struct FixedEntropy(u128);

impl EntropySource for FixedEntropy {
    fn next_u128(&self) -> u128 {
        self.0
    }
}

fn at_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

#[test]
fn timestamp_survives_the_round_trip_at_millisecond_resolution() {
    let at = at_millis(1_700_000_000_123) + TimeDelta::microseconds(456);
    let id = time_ordered_id(at, &FixedEntropy(7)).unwrap();

    assert_eq!(extract_timestamp(id), at_millis(1_700_000_000_123));
    assert_eq!(id.timestamp_ms(), 1_700_000_000_123);
    assert_eq!(id.random(), 7);
}

#[test]
fn random_bits_are_masked_to_eighty() {
    let id = time_ordered_id(at_millis(1), &FixedEntropy(u128::MAX)).unwrap();

    assert_eq!(id.random(), (1u128 << 80) - 1);
    assert_eq!(id.timestamp_ms(), 1);
}

#[test]
fn later_timestamp_sorts_after_regardless_of_randomness() {
    let early = time_ordered_id(at_millis(10), &FixedEntropy(u128::MAX)).unwrap();
    let late = time_ordered_id(at_millis(11), &FixedEntropy(0)).unwrap();

    assert!(early < late);
}

#[test]
fn same_timestamp_draws_fresh_randomness() {
    let generator = TimeIdGenerator::seeded(42);
    let at = at_millis(1_000);

    let ids: HashSet<TimeId> = (0..256).map(|_| generator.generate(at).unwrap()).collect();
    assert_eq!(ids.len(), 256);
}

#[test]
fn seeded_generators_are_reproducible() {
    let a = TimeIdGenerator::seeded(9);
    let b = TimeIdGenerator::seeded(9);
    let at = at_millis(5_000);

    assert_eq!(a.generate(at).unwrap(), b.generate(at).unwrap());
}

#[test]
fn chacha_draws_pack_two_words_high_first() {
    let source = ChaChaEntropy::from_seed(11);
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let high = u128::from(rng.next_u64());
    let low = u128::from(rng.next_u64());

    assert_eq!(source.next_u128(), (high << 64) | low);
    assert_ne!(source.next_u128(), (high << 64) | low);
}

#[test]
fn os_entropy_generator_mints_current_ids() {
    let generator = TimeIdGenerator::from_os_entropy().unwrap();
    let before = Utc::now();
    let id = generator.now().unwrap();

    assert!(id.timestamp() >= before - TimeDelta::milliseconds(1));
}

#[test]
fn timestamps_outside_the_time_bits_are_rejected() {
    let before_epoch = at_millis(-1);
    assert!(matches!(
        time_ordered_id(before_epoch, &FixedEntropy(0)),
        Err(TimeIdError::TimestampOutOfRange { millis: -1 })
    ));

    let overflow = at_millis(i64::try_from(MAX_TIMESTAMP_MS).unwrap() + 1);
    assert!(TimeId::min_for(overflow).is_err());

    let last = at_millis(i64::try_from(MAX_TIMESTAMP_MS).unwrap());
    assert_eq!(TimeId::max_for(last).unwrap(), TimeId::MAX);
}

#[test]
fn range_bounds_enclose_every_id_for_the_timestamp() {
    let at = at_millis(123_456);
    let id = time_ordered_id(at, &FixedEntropy(0xDEAD_BEEF)).unwrap();

    assert!(TimeId::min_for(at).unwrap() <= id);
    assert!(id <= TimeId::max_for(at).unwrap());
    let upper = TimeId::max_for(at).unwrap();
    assert!(upper < TimeId::min_for(at_millis(123_457)).unwrap());
}

#[test]
fn string_and_uuid_forms() {
    let id = TimeId::from_parts(1_700_000_000_000, 42);

    let parsed: TimeId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!(matches!(
        "not-a-ulid".parse::<TimeId>(),
        Err(TimeIdError::InvalidString)
    ));

    assert_eq!(id.to_uuid().as_u128(), id.to_u128());
    assert_eq!(TimeId::cql_type(), CqlType::Uuid);
    assert_eq!(id.to_cql().unwrap(), id.to_uuid().hyphenated().to_string());

    let json = serde_json::to_string(&id).unwrap();
    let back: TimeId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn shared_source_is_usable_across_threads() {
    let generator = Arc::new(TimeIdGenerator::seeded(3));
    let at = at_millis(77);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                (0..64)
                    .map(|_| generator.generate(at).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<TimeId> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(ids.len(), 4 * 64);
}

proptest! {
    #[test]
    fn ordering_follows_timestamps(
        t1 in 0i64..1_000_000_000_000,
        gap in 1i64..1_000_000,
        r1 in any::<u128>(),
        r2 in any::<u128>(),
    ) {
        let first = time_ordered_id(at_millis(t1), &FixedEntropy(r1)).unwrap();
        let second = time_ordered_id(at_millis(t1 + gap), &FixedEntropy(r2)).unwrap();

        prop_assert!(first < second);
    }

    #[test]
    fn extract_inverts_generation(
        t in 0i64..=i64::try_from(MAX_TIMESTAMP_MS).unwrap(),
        r in any::<u128>(),
    ) {
        let id = time_ordered_id(at_millis(t), &FixedEntropy(r)).unwrap();

        prop_assert_eq!(extract_timestamp(id), at_millis(t));
    }
}
