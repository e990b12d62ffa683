use cqlkit::{
    core::{
        clause::{BindSlot, Clause},
        config::ConfigError,
    },
    prelude::*,
};
use proptest::prelude::*;

const ID: PartitionKeyColumn<i64> = PartitionKeyColumn::new("id");
const VIEWS: CounterColumn = CounterColumn::new("views");
const TAGS: ListColumn<String> = ListColumn::new("tags");
const LABELS: IndexedSetColumn<String> = SetColumn::new("labels").indexed();
const SCORES: IndexedKeyedMapColumn<String, i32> = MapColumn::new("scores").keys_indexed();

#[test]
fn counter_increment_literal() {
    assert_eq!(VIEWS.increment(5).fragment().as_str(), "views = views + 5");
}

#[test]
fn counter_decrement_bound() {
    let clause = VIEWS.decrement_bound();

    assert_eq!(clause.fragment().as_str(), "views = views - ?");
    assert_eq!(
        clause.bind_slots(),
        [BindSlot {
            position: 0,
            ty: CqlType::BigInt
        }]
    );
}

#[test]
fn list_discard_all() {
    let clause = TAGS.discard_all(["x", "y"]).unwrap();

    assert_eq!(clause.fragment().as_str(), "tags = tags - ['x', 'y']");
}

#[test]
fn map_contains_key() {
    let clause = SCORES.contains_key("alice").unwrap();

    assert_eq!(clause.fragment().as_str(), "scores CONTAINS KEY 'alice'");
}

#[test]
fn mixed_clauses_collect_into_one_batch() {
    let clauses: Vec<Clause> = vec![
        ID.token_gte(10).unwrap().into(),
        LABELS.contains("urgent").unwrap().into(),
        VIEWS.increment(1).into(),
        LABELS.add_bound().into(),
    ];

    let rendered: Vec<String> = clauses.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "token(id) >= token(10)",
            "labels CONTAINS 'urgent'",
            "views = views + 1",
            "labels = labels + ?",
        ]
    );
    let filters = clauses.iter().filter(|clause| clause.is_filter()).count();
    assert_eq!(filters, 2);
}

#[test]
fn bound_clauses_bind_in_placeholder_order() {
    let bound = SCORES.set_bound().bind((10, "dana".to_string())).unwrap();
    let (fragment, values) = bound.into_parts();

    assert_eq!(fragment.as_str(), "scores[?] = ?");
    assert_eq!(values, ["'dana'", "10"]);

    let bound = LABELS
        .remove_bound()
        .bind((CqlSet::from(["b".to_string(), "a".to_string()]),))
        .unwrap();
    assert_eq!(bound.values(), ["{'b', 'a'}"]);
}

#[test]
fn double_collections_take_bound_batches() {
    const RATES: SetColumn<f64> = SetColumn::new("rates");
    const WEIGHTS: MapColumn<f64, String> = MapColumn::new("weights");

    let bound = RATES.add_bound().bind((vec![0.5, 1.5].into(),)).unwrap();
    assert_eq!(bound.fragment().as_str(), "rates = rates + ?");
    assert_eq!(bound.values(), ["{0.5, 1.5}"]);

    let entries = CqlMap::from([(2.0, "double".to_string())]);
    let bound = WEIGHTS.set_to_bound().bind((entries,)).unwrap();
    assert_eq!(bound.fragment().as_str(), "weights = ?");
    assert_eq!(bound.values(), ["{2.0: 'double'}"]);
}

#[test]
fn store_version_gates_clauses() {
    let config = QueryConfig::from_toml_str("[store]\nversion = \"1.2\"").unwrap();

    assert!(config.check(&TAGS.append("a").unwrap().into()).is_ok());
    assert!(matches!(
        config.check(&LABELS.contains("a").unwrap().into()),
        Err(ConfigError::Unsupported {
            feature: StoreFeature::CollectionIndexes,
            ..
        })
    ));

    let err: cqlkit::Error = config
        .check(&SCORES.contains_key_bound().into())
        .unwrap_err()
        .into();
    assert_eq!(
        err.kind,
        cqlkit::error::ErrorKind::Config(cqlkit::error::ConfigErrorKind::Unsupported)
    );
}

#[test]
fn serializer_errors_surface_through_the_facade() {
    let wide: SetColumn<u64> = SetColumn::new("wide");
    let err: cqlkit::Error = wide.add(u64::MAX).unwrap_err().into();

    assert_eq!(
        err.kind,
        cqlkit::error::ErrorKind::Serialize(cqlkit::error::SerializeErrorKind::OutOfRange)
    );
}

proptest! {
    #[test]
    fn text_literals_never_break_quoting(value in ".*") {
        let clause = TAGS.append(value).unwrap();

        prop_assert_eq!(clause.fragment().placeholder_count(), 0);
        prop_assert!(clause.fragment().as_str().ends_with("']"));
    }

    #[test]
    fn token_shorthands_agree_with_token(key in any::<i64>()) {
        prop_assert_eq!(
            ID.token_lt(key).unwrap(),
            ID.token(CompareOp::Lt, key).unwrap()
        );
        prop_assert_eq!(
            ID.token_eq(key).unwrap(),
            ID.token(CompareOp::Eq, key).unwrap()
        );
    }
}
