use cqlkit::{
    chrono::{DateTime, TimeDelta, Utc},
    core::types::{EntropySource, MAX_TIMESTAMP_MS, extract_timestamp, time_ordered_id},
    prelude::*,
};
use std::sync::atomic::{AtomicU64, Ordering};

struct Counting(AtomicU64);

impl EntropySource for Counting {
    fn next_u128(&self) -> u128 {
        u128::from(self.0.fetch_add(1, Ordering::Relaxed))
    }
}

#[test]
fn generated_ids_round_trip_their_timestamp() {
    let at = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap();
    let id = time_ordered_id(at, &Counting(AtomicU64::new(0))).unwrap();

    assert_eq!(extract_timestamp(id), at);
}

#[test]
fn every_call_draws_fresh_entropy() {
    let source = Counting(AtomicU64::new(0));
    let at = DateTime::<Utc>::from_timestamp_millis(5).unwrap();

    let first = time_ordered_id(at, &source).unwrap();
    let second = time_ordered_id(at, &source).unwrap();
    assert_ne!(first, second);
    assert!(first < second);
}

#[test]
fn configured_generator_is_time_ordered() {
    let config = QueryConfig::from_toml_str("[time_ids]\nseed = 1").unwrap();
    let generator = config.time_id_generator().unwrap();
    let at = DateTime::<Utc>::from_timestamp_millis(10_000).unwrap();

    let ids: Vec<TimeId> = (0..16)
        .map(|step| at + TimeDelta::milliseconds(step))
        .map(|moment| generator.generate(moment).unwrap())
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn time_ids_bind_as_uuids() {
    const EVENTS: ListColumn<TimeId> = ListColumn::new("events");

    let id = TimeId::from_parts(42, 7);
    let clause = EVENTS.append(id).unwrap();

    assert_eq!(
        clause.fragment().as_str(),
        format!("events = events + [{}]", id.to_uuid().hyphenated())
    );
    assert_eq!(
        EVENTS.append_bound().bind_types(),
        vec![CqlType::list_of(CqlType::Uuid)]
    );
}

#[test]
fn last_representable_millisecond_is_accepted() {
    let last = i64::try_from(MAX_TIMESTAMP_MS).unwrap();
    let at = DateTime::<Utc>::from_timestamp_millis(last).unwrap();

    assert_eq!(TimeId::max_for(at).unwrap().timestamp_ms(), MAX_TIMESTAMP_MS);
    assert!(TimeId::min_for(at + TimeDelta::milliseconds(1)).is_err());
}

#[test]
fn parts_are_readable_in_const_context() {
    const ID: TimeId = TimeId::from_parts(MAX_TIMESTAMP_MS, 5);
    const PARTS: (u64, u128) = (ID.timestamp_ms(), ID.random());

    assert_eq!(PARTS, (MAX_TIMESTAMP_MS, 5));
}
