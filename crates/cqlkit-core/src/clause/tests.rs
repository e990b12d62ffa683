use super::*;
use crate::fragment::{CompareOp, CqlFragments, FragmentBuilder, UpdateOp, WhereOp};

struct NotDebug;

fn views_plus_bound() -> UpdateClause<(i64,)> {
    let fragment = CqlFragments.build_update("views", UpdateOp::Add("?"));

    UpdateClause::from_body(ClauseBody::sequential::<(i64,)>(
        fragment,
        Some(StoreFeature::Counters),
    ))
}

fn map_entry_bound() -> UpdateClause<(i32, String)> {
    let fragment = CqlFragments.build_update(
        "scores",
        UpdateOp::SetAt {
            index: "?",
            value: "?",
        },
    );

    UpdateClause::from_body(ClauseBody::positioned::<(i32, String)>(
        fragment,
        [1, 0],
        Some(StoreFeature::Collections),
    ))
}

#[test]
fn sequential_slots_follow_declaration_order() {
    let clause = views_plus_bound();

    assert_eq!(clause.fragment().as_str(), "views = views + ?");
    assert!(clause.is_parameterized());
    assert_eq!(
        clause.bind_slots(),
        [BindSlot {
            position: 0,
            ty: CqlType::BigInt
        }]
    );
    assert_eq!(clause.required_feature(), Some(StoreFeature::Counters));
}

#[test]
fn bind_orders_values_by_placeholder() {
    let clause = map_entry_bound();
    assert_eq!(clause.bind_types(), vec![CqlType::Int, CqlType::Text]);
    assert_eq!(clause.bind_slots()[0].position, 1);
    assert_eq!(clause.bind_slots()[1].position, 0);

    let bound = clause.bind((7, "alice".to_string())).unwrap();
    assert_eq!(bound.fragment().as_str(), "scores[?] = ?");
    assert_eq!(bound.values(), ["'alice'", "7"]);
}

#[test]
fn bind_surfaces_serialization_errors() {
    let fragment = CqlFragments.build_where("total", WhereOp::Compare(CompareOp::Gt), "?");
    let clause: FilterCondition<(u64,)> =
        FilterCondition::from_body(ClauseBody::sequential::<(u64,)>(fragment, None));

    assert!(clause.bind((u64::MAX,)).is_err());
    assert_eq!(clause.bind((5,)).unwrap().values(), ["5"]);
}

#[test]
fn literal_clause_has_no_slots() {
    let fragment = CqlFragments.build_update("views", UpdateOp::Add("5"));
    let clause: UpdateClause =
        UpdateClause::from_body(ClauseBody::sequential::<()>(fragment, None));

    assert!(!clause.is_parameterized());
    assert!(clause.bind_types().is_empty());
    let (fragment, values) = clause.bind(()).unwrap().into_parts();
    assert_eq!(fragment.as_str(), "views = views + 5");
    assert!(values.is_empty());
}

#[test]
fn trait_impls_do_not_constrain_the_bind_tuple() {
    let fragment = CqlFragments.build_update("views", UpdateOp::Assign("0"));
    let clause: UpdateClause<NotDebug> =
        UpdateClause::from_body(ClauseBody::sequential::<()>(fragment, None));

    let copy = clause.clone();
    assert_eq!(copy, clause);
    let debug = format!("{clause:?}");
    assert!(debug.starts_with("UpdateClause { fragment:"));
    assert_eq!(clause.to_string(), "views = 0");
}

#[test]
fn erased_clause_keeps_kind_and_body() {
    let update: Clause = views_plus_bound().into();
    assert!(update.is_update());
    assert!(!update.is_filter());
    assert_eq!(update.to_string(), "views = views + ?");
    assert_eq!(update.required_feature(), Some(StoreFeature::Counters));
    assert_eq!(update.bind_slots().len(), 1);
}

#[test]
fn clauses_are_shareable_whatever_the_binds() {
    fn assert_shareable<T: Clone + Send + Sync>() {}

    assert_shareable::<FilterCondition<(std::rc::Rc<i32>,)>>();
    assert_shareable::<UpdateClause<(NotDebug, String)>>();
    assert_shareable::<Clause>();
}
