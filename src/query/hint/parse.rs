//! 提示分派
//!
//! 把一个查询块的原始提示节点（去重后）按名称分派到 `PlanHints` 的各个类别。
//! 语句级提示（`memory_quota`、`max_execution_time` 等）由外层处理，这里跳过。

use crate::config::HintConfig;
use crate::core::error::{HintWarning, WarningSink};

use super::ast::{HintData, IndexHintSpec, IndexHintType, StorageEngine, TableOptimizerHint};
use super::dedup::remove_duplicated_hints;
use super::index::HintedIndex;
use super::names::*;
use super::plan_hints::PlanHints;
use super::preference::{AggPreference, SubqueryHintFlags};
use super::table::HintNormalizer;

impl PlanHints {
    /// 从提示节点构造计划提示
    ///
    /// `current_offset` 为提示所在查询块的偏移。连接与存储引擎提示按解析出的偏移保存，
    /// 其余提示只在属于当前查询块时生效。规范化产生的警告（分区不适用、leading 冲突）
    /// 追加到 `sink`。
    pub fn parse(
        hints: &[TableOptimizerHint],
        normalizer: &HintNormalizer<'_>,
        current_offset: usize,
        config: &HintConfig,
        sink: &mut dyn WarningSink,
    ) -> PlanHints {
        let hints = if config.remove_duplicated_hints {
            remove_duplicated_hints(hints.to_vec())
        } else {
            hints.to_vec()
        };

        let mut plan_hints = PlanHints::new();
        let mut leading_hint_count = 0usize;
        for hint in &hints {
            let name = hint.name();
            let offset = normalizer
                .resolver()
                .hint_offset(hint.qb_name.as_ref(), current_offset);

            if let Some(kind) = TableHintKind::from_join_hint_name(name) {
                if kind == TableHintKind::LeadingJoinOrder && offset == Some(current_offset) {
                    leading_hint_count += 1;
                }
                let tables = normalizer.normalize(name, &hint.tables, offset, sink);
                plan_hints.add_tables(kind, tables);
                continue;
            }

            if name == HINT_READ_FROM_STORAGE {
                let kind = match hint.data {
                    HintData::Storage(StorageEngine::TiFlash) => TableHintKind::TiFlash,
                    HintData::Storage(StorageEngine::TiKV) => TableHintKind::TiKV,
                    _ => {
                        log::debug!("存储引擎提示缺少引擎类型，已忽略");
                        continue;
                    }
                };
                let tables = normalizer.normalize(name, &hint.tables, offset, sink);
                plan_hints.add_tables(kind, tables);
                continue;
            }

            // 索引提示与标量提示不记录查询块，只接受属于当前查询块的
            if offset != Some(current_offset) {
                log::debug!("提示 {} 不属于查询块 {}，已跳过", name, current_offset);
                continue;
            }

            match name {
                HINT_USE_INDEX | HINT_IGNORE_INDEX | HINT_FORCE_INDEX | HINT_INDEX_MERGE => {
                    let Some(index_hint) = build_index_hint(hint, normalizer, current_offset) else {
                        log::debug!("索引提示 {} 缺少当前查询块内的表参数，已忽略", name);
                        continue;
                    };
                    if name == HINT_INDEX_MERGE {
                        plan_hints.add_index_merge_hint(index_hint);
                    } else {
                        plan_hints.add_index_hint(index_hint);
                    }
                }
                HINT_HASH_AGG => plan_hints.agg.prefer_agg_type |= AggPreference::HASH_AGG,
                HINT_STREAM_AGG => plan_hints.agg.prefer_agg_type |= AggPreference::STREAM_AGG,
                HINT_MPP_1PHASE_AGG => plan_hints.agg.prefer_agg_type |= AggPreference::MPP_1PHASE_AGG,
                HINT_MPP_2PHASE_AGG => plan_hints.agg.prefer_agg_type |= AggPreference::MPP_2PHASE_AGG,
                HINT_AGG_TO_COP => plan_hints.agg.prefer_agg_to_cop = true,
                HINT_LIMIT_TO_COP => plan_hints.prefer_limit_to_cop = true,
                HINT_MERGE => plan_hints.cte_merge = true,
                HINT_STRAIGHT_JOIN => plan_hints.straight_join = true,
                HINT_TIME_RANGE => {
                    if let HintData::TimeRange(range) = &hint.data {
                        plan_hints.time_range = Some(range.clone());
                    }
                }
                _ => log::debug!("跳过非计划类提示: {}", name),
            }
        }

        if leading_hint_count > 1 || (leading_hint_count > 0 && plan_hints.straight_join) {
            if leading_hint_count > 1 {
                sink.append_warning(HintWarning::MultipleLeadingHints);
            } else {
                sink.append_warning(HintWarning::LeadingWithStraightJoin);
            }
            plan_hints.clear_tables_in_block(TableHintKind::LeadingJoinOrder, current_offset);
        }
        plan_hints
    }
}

fn build_index_hint(
    hint: &TableOptimizerHint,
    normalizer: &HintNormalizer<'_>,
    current_offset: usize,
) -> Option<HintedIndex> {
    let table = hint.tables.first()?;
    let table_offset = normalizer
        .resolver()
        .hint_offset(table.qb_name.as_ref(), current_offset);
    if table_offset != Some(current_offset) {
        return None;
    }
    let hint_type = match hint.name() {
        HINT_IGNORE_INDEX => IndexHintType::Ignore,
        HINT_FORCE_INDEX => IndexHintType::Force,
        _ => IndexHintType::Use,
    };
    let db_name = if table.db_name.is_empty() {
        normalizer.current_db().clone()
    } else {
        table.db_name.clone()
    };
    let mut index_hint = HintedIndex::new(
        db_name,
        table.table_name.clone(),
        IndexHintSpec::new(hint_type, hint.indexes.clone()),
    );
    index_hint.partitions = table.partitions.clone();
    Some(index_hint)
}

/// 提取作用于子查询的提示标记
pub fn subquery_hint_flags(hints: &[TableOptimizerHint]) -> SubqueryHintFlags {
    hints.iter().fold(SubqueryHintFlags::empty(), |flags, hint| match hint.name() {
        HINT_SEMI_JOIN_REWRITE => flags | SubqueryHintFlags::SEMI_JOIN_REWRITE,
        HINT_NO_DECORRELATE => flags | SubqueryHintFlags::NO_DECORRELATE,
        _ => flags,
    })
}
