//! 未匹配提示的警告收集
//!
//! 计划构建结束后调用一次，按固定顺序遍历各类提示：索引提示、index merge、三种 index join
//! 及其否定形式、merge join、broadcast、shuffle、hash join 及其 build/probe、leading，
//! 最后是存储引擎提示。否定形式排在对应的肯定形式之后。
//! 每个未匹配的索引或连接条目产生一条警告；TiFlash 与 TiKV 的未匹配条目合并为一条。

use crate::config::HintConfig;
use crate::core::error::HintWarning;

use super::index::HintedIndex;
use super::names::{TableHintKind, HINT_INDEX_MERGE};
use super::plan_hints::PlanHints;
use super::restore::{restore_join_hint, restore_storage_hint};
use super::table::{extract_unmatched_tables, HintedTable};

const JOIN_HINT_ORDER: [TableHintKind; 15] = [
    TableHintKind::IndexNestedLoopJoin,
    TableHintKind::IndexNestedLoopHashJoin,
    TableHintKind::IndexNestedLoopMergeJoin,
    TableHintKind::NoIndexJoin,
    TableHintKind::NoIndexHashJoin,
    TableHintKind::NoIndexMergeJoin,
    TableHintKind::SortMergeJoin,
    TableHintKind::NoMergeJoin,
    TableHintKind::BroadcastJoin,
    TableHintKind::ShuffleJoin,
    TableHintKind::HashJoin,
    TableHintKind::NoHashJoin,
    TableHintKind::HashJoinBuild,
    TableHintKind::HashJoinProbe,
    TableHintKind::LeadingJoinOrder,
];

/// 收集未匹配提示的警告
pub fn collect_unmatched_hint_warnings(hints: &PlanHints, config: &HintConfig) -> Vec<HintWarning> {
    let mut warnings = Vec::new();
    collect_unmatched_index_hint_warnings(hints.index_hints(), false, &mut warnings);
    collect_unmatched_index_hint_warnings(hints.index_merge_hints(), true, &mut warnings);
    for kind in JOIN_HINT_ORDER {
        collect_unmatched_join_hint_warnings(kind, hints.tables(kind), config, &mut warnings);
    }
    collect_unmatched_storage_hint_warnings(
        hints.tables(TableHintKind::TiFlash),
        hints.tables(TableHintKind::TiKV),
        &mut warnings,
    );
    if !warnings.is_empty() {
        log::debug!("计划构建后有 {} 条提示未匹配", warnings.len());
    }
    warnings
}

fn collect_unmatched_index_hint_warnings(
    index_hints: &[HintedIndex],
    used_for_index_merge: bool,
    warnings: &mut Vec<HintWarning>,
) {
    for hint in index_hints.iter().filter(|hint| !hint.matched) {
        let hint_type = if used_for_index_merge {
            HINT_INDEX_MERGE
        } else {
            hint.hint_type_str()
        };
        warnings.push(HintWarning::UnmatchedIndexHint {
            hint_type: hint_type.to_string(),
            target: hint.index_string(),
            table: format!("{}.{}", hint.db_name, hint.table_name),
        });
    }
}

fn collect_unmatched_join_hint_warnings(
    kind: TableHintKind,
    hint_tables: &[HintedTable],
    config: &HintConfig,
    warnings: &mut Vec<HintWarning>,
) {
    let unmatched = extract_unmatched_tables(hint_tables);
    if unmatched.is_empty() {
        return;
    }
    let hint = restore_join_hint(kind.hint_name(), hint_tables);
    let alias = kind
        .alias()
        .filter(|_| config.report_alias_hints)
        .map(|alias| restore_join_hint(alias, hint_tables));
    for table in unmatched {
        warnings.push(HintWarning::UnmatchedJoinHint {
            tables: vec![table],
            hint: hint.clone(),
            alias: alias.clone(),
        });
    }
}

fn collect_unmatched_storage_hint_warnings(
    tiflash_tables: &[HintedTable],
    tikv_tables: &[HintedTable],
    warnings: &mut Vec<HintWarning>,
) {
    let mut unmatched = extract_unmatched_tables(tiflash_tables);
    unmatched.extend(extract_unmatched_tables(tikv_tables));
    if unmatched.is_empty() {
        return;
    }
    warnings.push(HintWarning::UnmatchedStorageHint {
        tables: unmatched,
        hint: restore_storage_hint(tiflash_tables, tikv_tables),
    });
}
