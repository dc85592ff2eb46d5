//! 提示绑定全流程测试
//!
//! 覆盖从提示节点到匹配、警告收集的完整路径

mod common;

use common::fixtures::{candidate, index_hint, join_hint, storage_hint};
use common::{parse_hints, parse_hints_with_config};
use planhint::config::HintConfig;
use planhint::core::{HintWarning, Ident};
use planhint::query::hint::{
    restore_join_hint, restore_table_optimizer_hint, AggPreference, HintData, HintTable, HintedTable,
    JoinPreference, QueryBlockHandler, StorageEngine, TableHintKind, TableOptimizerHint,
};

#[test]
fn test_hash_join_partial_match_reports_missing_table() {
    let handler = QueryBlockHandler::new(1);
    let (mut hints, warnings) = parse_hints(&handler, &[join_hint("hash_join", &["t1", "t2"])], 1);
    assert!(warnings.is_empty());

    let t1 = candidate("t1", 1);
    let t3 = candidate("t3", 1);
    assert!(hints.prefers_hash_join(&[Some(&t1), Some(&t3)]));

    let unmatched = hints.collect_unmatched_warnings(&HintConfig::default());
    assert_eq!(unmatched.len(), 1);
    let message = unmatched[0].to_string();
    assert!(message.contains("(t2)"));
    assert!(message.contains("/*+ HASH_JOIN(t1, t2) */"));
    assert!(message.contains("/*+ TIDB_HJ(t1, t2) */"));
}

#[test]
fn test_storage_hint_partial_match() {
    let handler = QueryBlockHandler::new(1);
    let (mut hints, _) = parse_hints(&handler, &[storage_hint(StorageEngine::TiFlash, &["t1", "t2"])], 1);

    let t1 = candidate("t1", 1);
    let matched = hints.prefers_tiflash(Some(&t1)).map(|t| t.table_name.clone());
    assert_eq!(matched, Some(Ident::new("t1")));
    assert!(hints.prefers_tikv(Some(&t1)).is_none());

    let unmatched = hints.collect_unmatched_warnings(&HintConfig::default());
    assert_eq!(
        unmatched,
        vec![HintWarning::UnmatchedStorageHint {
            tables: vec!["t2".to_string()],
            hint: "/*+ READ_FROM_STORAGE(tiflash[t1, t2]) */".to_string(),
        }]
    );
}

#[test]
fn test_storage_hint_tikv_group_unmatched() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![
        storage_hint(StorageEngine::TiFlash, &["t1"]),
        storage_hint(StorageEngine::TiKV, &["t2"]),
    ];
    let (mut hints, _) = parse_hints(&handler, &hints, 1);

    let t1 = candidate("t1", 1);
    assert!(hints.prefers_tiflash(Some(&t1)).is_some());

    let unmatched = hints.collect_unmatched_warnings(&HintConfig::default());
    assert_eq!(unmatched.len(), 1);
    assert_eq!(
        unmatched[0].to_string(),
        "There are no matching table names for (t2) in optimizer hint /*+ READ_FROM_STORAGE(tiflash[t1], tikv[t2]) */. Maybe you can use the table alias name"
    );
}

#[test]
fn test_storage_hint_requires_exact_db() {
    let handler = QueryBlockHandler::new(1);
    let hint = TableOptimizerHint::new("read_from_storage")
        .with_tables(vec![HintTable::new("t1").with_db("*")])
        .with_data(HintData::Storage(StorageEngine::TiFlash));
    let (mut hints, _) = parse_hints(&handler, &[hint], 1);

    let other_db = HintedTable::new("other", "t1", 1);
    assert!(hints.prefers_tiflash(Some(&other_db)).is_none());
    assert_eq!(hints.unmatched_count(), 1);
}

#[test]
fn test_index_hints_bind_only_in_their_block() {
    let handler = QueryBlockHandler::new(2);
    let hints = vec![
        index_hint("use_index", "t1", &["i1"]).with_qb_name("sel_2"),
        index_hint("force_index", "t1", &["i2"]).with_qb_name("missing"),
    ];
    let (mut outer, _) = parse_hints(&handler, &hints, 1);
    let db = Ident::new("test");
    assert!(outer.index_hints_for(&db, &Ident::new("t1")).is_empty());

    let (mut inner, _) = parse_hints(&handler, &hints, 2);
    let bound = inner.index_hints_for(&db, &Ident::new("t1"));
    assert_eq!(bound.len(), 1);
    assert_eq!(bound[0].hint_type_str(), "use_index");
}

#[test]
fn test_scalar_hints_bind_only_in_their_block() {
    let handler = QueryBlockHandler::new(2);
    let hints = vec![
        TableOptimizerHint::new("hash_agg").with_qb_name("sel_2"),
        TableOptimizerHint::new("limit_to_cop").with_qb_name("sel_2"),
    ];
    let (outer, _) = parse_hints(&handler, &hints, 1);
    assert!(outer.agg.prefer_agg_type.is_empty());
    assert!(!outer.prefer_limit_to_cop);

    let (inner, _) = parse_hints(&handler, &hints, 2);
    assert_eq!(inner.agg.prefer_agg_type, AggPreference::HASH_AGG);
    assert!(inner.prefer_limit_to_cop);
}

#[test]
fn test_case_insensitive_matching() {
    let handler = QueryBlockHandler::new(1);
    let hint = TableOptimizerHint::new("MERGE_JOIN")
        .with_tables(vec![HintTable::new("T1").with_db("TEST")]);
    let (mut hints, _) = parse_hints(&handler, &[hint], 1);

    let t1 = candidate("t1", 1);
    assert!(hints.prefers_merge_join(&[Some(&t1)]));
    assert_eq!(hints.unmatched_count(), 0);
}

#[test]
fn test_wildcard_db_matches_any_database() {
    let handler = QueryBlockHandler::new(1);
    let hint = TableOptimizerHint::new("hash_join")
        .with_tables(vec![HintTable::new("t1").with_db("*")]);
    let (mut hints, _) = parse_hints(&handler, &[hint], 1);

    let other_db = HintedTable::new("other", "t1", 1);
    assert!(hints.prefers_hash_join(&[Some(&other_db)]));
}

#[test]
fn test_query_block_isolation() {
    let mut handler = QueryBlockHandler::new(3);
    assert!(handler.register("qb_sub", 2));

    let hints = vec![
        TableOptimizerHint::new("hash_join").with_tables(vec![HintTable::new("t1").with_qb_name("qb_sub")]),
        TableOptimizerHint::new("merge_join")
            .with_qb_name("sel_3")
            .with_tables(vec![HintTable::new("t2")]),
    ];
    let (mut hints, _) = parse_hints(&handler, &hints, 1);

    let t1_outer = candidate("t1", 1);
    let t1_sub = candidate("t1", 2);
    assert!(!hints.prefers_hash_join(&[Some(&t1_outer)]));
    assert!(hints.prefers_hash_join(&[Some(&t1_sub)]));

    let t2_outer = candidate("t2", 1);
    let t2_third = candidate("t2", 3);
    assert!(!hints.prefers_merge_join(&[Some(&t2_outer)]));
    assert!(hints.prefers_merge_join(&[Some(&t2_third)]));
}

#[test]
fn test_unknown_query_block_never_matches() {
    let handler = QueryBlockHandler::new(1);
    let hint = TableOptimizerHint::new("hash_join")
        .with_tables(vec![HintTable::new("t1").with_qb_name("missing")]);
    let (mut hints, _) = parse_hints(&handler, &[hint], 1);

    let entries = hints.tables(TableHintKind::HashJoin);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].query_block_offset, None);

    let t1 = candidate("t1", 1);
    assert!(!hints.prefers_hash_join(&[Some(&t1)]));
}

#[test]
fn test_partitioned_join_hint_is_dropped_entirely() {
    let handler = QueryBlockHandler::new(1);
    let hint = TableOptimizerHint::new("merge_join").with_tables(vec![
        HintTable::new("t1"),
        HintTable::new("t2").with_partitions(["p0"]),
    ]);
    let (mut hints, warnings) = parse_hints(&handler, &[hint], 1);

    assert_eq!(warnings.len(), 1);
    assert!(matches!(&warnings[0], HintWarning::InapplicableOnPartitions { .. }));
    assert!(warnings[0].to_string().contains("MERGE_JOIN(t1, t2 PARTITION(p0))"));

    let t1 = candidate("t1", 1);
    assert!(!hints.prefers_merge_join(&[Some(&t1)]));
    assert!(hints.tables(TableHintKind::SortMergeJoin).is_empty());
}

#[test]
fn test_partitioned_storage_hint_is_kept() {
    let handler = QueryBlockHandler::new(1);
    let hint = storage_hint(StorageEngine::TiKV, &["t1"]);
    let hint = TableOptimizerHint {
        tables: vec![HintTable::new("t1").with_partitions(["p0"])],
        ..hint
    };
    let (hints, warnings) = parse_hints(&handler, &[hint], 1);
    assert!(warnings.is_empty());
    assert_eq!(hints.tables(TableHintKind::TiKV).len(), 1);
}

#[test]
fn test_duplicated_index_hints_are_collapsed() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![
        index_hint("use_index", "t1", &["i1"]),
        index_hint("USE_INDEX", "T1", &["I1"]),
    ];
    let (hints_deduped, _) = parse_hints(&handler, &hints, 1);
    assert_eq!(hints_deduped.index_hints().len(), 1);

    let config = HintConfig {
        remove_duplicated_hints: false,
        ..HintConfig::default()
    };
    let (hints_kept, _) = parse_hints_with_config(&handler, &hints, 1, &config);
    assert_eq!(hints_kept.index_hints().len(), 2);
}

#[test]
fn test_index_hint_match_flow() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![
        index_hint("force_index", "t1", &["i1"]),
        index_hint("use_index", "t2", &["i2"]),
    ];
    let (mut hints, _) = parse_hints(&handler, &hints, 1);

    let db = Ident::new("test");
    for hint in hints.index_hints_for(&db, &Ident::new("T1")) {
        hint.mark_matched();
    }

    let unmatched = hints.collect_unmatched_warnings(&HintConfig::default());
    assert_eq!(unmatched.len(), 1);
    assert_eq!(
        unmatched[0].to_string(),
        "use_index(test.t2, i2) is inapplicable, check whether the table(test.t2) exists. Maybe you can use the table alias name"
    );
}

#[test]
fn test_restore_round_trip_of_merge_join() {
    let entries = vec![candidate("t1", 1), candidate("t2", 1)];
    assert_eq!(restore_join_hint("merge_join", &entries), "/*+ MERGE_JOIN(t1, t2) */");

    let node = join_hint("merge_join", &["t1", "t2"]);
    assert_eq!(restore_table_optimizer_hint(&node), "MERGE_JOIN(t1, t2)");
}

#[test]
fn test_completeness_of_unmatched_warnings() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![
        join_hint("tidb_inlj", &["t1", "t2"]),
        join_hint("no_hash_join", &["t3"]),
        join_hint("leading", &["t4", "t5"]),
        index_hint("ignore_index", "t6", &["i1"]),
        storage_hint(StorageEngine::TiFlash, &["t7"]),
        storage_hint(StorageEngine::TiKV, &["t8"]),
    ];
    let (mut hints, _) = parse_hints(&handler, &hints, 1);

    let t1 = candidate("t1", 1);
    let t4 = candidate("t4", 1);
    assert!(hints.prefers_inlj(&[Some(&t1)]));
    assert!(hints.prefers_leading(&[Some(&t4)]));

    let unmatched = hints.collect_unmatched_warnings(&HintConfig::default());
    let storage = unmatched
        .iter()
        .filter(|w| matches!(w, HintWarning::UnmatchedStorageHint { .. }))
        .count();
    // 存储引擎条目合并为一条警告
    assert_eq!(storage, 1);
    assert_eq!(unmatched.len() - storage + 2, hints.unmatched_count());
    assert!(unmatched.iter().all(HintWarning::is_unmatched));
}

#[test]
fn test_join_preference_from_sided_hints() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![
        join_hint("inl_join", &["t2"]),
        join_hint("hash_join_build", &["t1"]),
        join_hint("no_merge_join", &["t1"]),
    ];
    let (mut hints, _) = parse_hints(&handler, &hints, 1);

    let t1 = candidate("t1", 1);
    let t2 = candidate("t2", 1);
    let pref = hints.join_preference(&[Some(&t1)], &[Some(&t2)]);
    assert!(pref.contains(JoinPreference::RIGHT_AS_INLJ_INNER));
    assert!(pref.contains(JoinPreference::LEFT_AS_HJ_BUILD));
    assert!(pref.contains(JoinPreference::NO_MERGE_JOIN));
    assert!(!pref.contains(JoinPreference::LEFT_AS_INLJ_INNER));
    assert!(pref.contains(JoinPreference::INLJ));
    assert!(pref.contains(JoinPreference::HJ_BUILD));
    assert_eq!(hints.unmatched_count(), 0);
}

#[test]
fn test_leading_conflicts_clear_leading() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![
        join_hint("leading", &["t1", "t2"]),
        join_hint("leading", &["t2", "t1"]),
    ];
    let (hints, warnings) = parse_hints(&handler, &hints, 1);
    assert_eq!(warnings, vec![HintWarning::MultipleLeadingHints]);
    assert!(hints.tables(TableHintKind::LeadingJoinOrder).is_empty());

    let hints = vec![join_hint("leading", &["t1"]), TableOptimizerHint::new("straight_join")];
    let (hints, warnings) = parse_hints(&handler, &hints, 1);
    assert_eq!(warnings, vec![HintWarning::LeadingWithStraightJoin]);
    assert!(hints.straight_join);
    assert!(hints.tables(TableHintKind::LeadingJoinOrder).is_empty());
}

#[test]
fn test_plan_hints_serialize() {
    let handler = QueryBlockHandler::new(1);
    let hints = vec![join_hint("hash_join", &["t1"]), TableOptimizerHint::new("stream_agg")];
    let (hints, _) = parse_hints(&handler, &hints, 1);

    let json = serde_json::to_value(&hints).unwrap();
    assert_eq!(json["straight_join"], serde_json::json!(false));
    assert!(json["agg"]["prefer_agg_type"].is_string());
    let restored: planhint::query::hint::PlanHints = serde_json::from_value(json).unwrap();
    assert_eq!(restored.tables(TableHintKind::HashJoin), hints.tables(TableHintKind::HashJoin));
    assert_eq!(restored.agg, hints.agg);
}
