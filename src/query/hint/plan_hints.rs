//! 语句级提示集合与匹配
//!
//! `PlanHints` 为每个表级提示类别保存一个有序条目列表。计划构建器在构造算子时通过
//! `prefers_*` 系列方法探测提示，匹配成功的条目被原地标记为已匹配；构建结束后
//! 警告收集器据此报告未匹配的提示。
//!
//! 条目列表只在分派阶段追加，匹配阶段只翻转标记、不改变长度。

use serde::{Deserialize, Serialize};

use crate::config::HintConfig;
use crate::core::error::HintWarning;
use crate::core::types::Ident;

use super::ast::HintTimeRange;
use super::index::HintedIndex;
use super::names::TableHintKind;
use super::preference::{AggPreference, JoinPreference, StoragePreference};
use super::table::HintedTable;
use super::warnings::collect_unmatched_hint_warnings;

/// 聚合提示，与表无关
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggHints {
    pub prefer_agg_type: AggPreference,
    pub prefer_agg_to_cop: bool,
}

/// 一条语句的计划提示
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanHints {
    tables: [Vec<HintedTable>; TableHintKind::COUNT],
    index_hints: Vec<HintedIndex>,
    index_merge_hints: Vec<HintedIndex>,

    // 以下提示不关联具体的表
    pub agg: AggHints,
    pub prefer_limit_to_cop: bool,
    pub cte_merge: bool,
    pub time_range: Option<HintTimeRange>,
    pub straight_join: bool,
}

/// 检查候选表是否命中提示列表
///
/// 只要任一候选命中任一条目即返回 true；所有身份相同的条目都会被标记。
/// 列表中放两张表并不意味着优化器会调整连接顺序让它们直接相连，
/// 最终作用于哪个连接取决于计划构建的遍历顺序。
pub fn match_table_name(tables: &[Option<&HintedTable>], hint_tables: &mut [HintedTable]) -> bool {
    let mut hint_matched = false;
    for table in tables.iter().flatten() {
        for entry in hint_tables.iter_mut() {
            if entry.matches(table) {
                entry.matched = true;
                hint_matched = true;
            }
        }
    }
    hint_matched
}

fn match_storage<'a>(
    table: Option<&HintedTable>,
    hint_tables: &'a mut [HintedTable],
) -> Option<&'a HintedTable> {
    let table = table?;
    let mut first = None;
    for (i, entry) in hint_tables.iter_mut().enumerate() {
        if entry.matches_exactly(table) {
            entry.matched = true;
            first.get_or_insert(i);
        }
    }
    let i = first?;
    Some(&hint_tables[i])
}

impl PlanHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加某类提示的条目，只应在匹配开始之前调用
    pub fn add_tables(&mut self, kind: TableHintKind, tables: Vec<HintedTable>) {
        self.tables[kind.index()].extend(tables);
    }

    pub fn add_index_hint(&mut self, hint: HintedIndex) {
        self.index_hints.push(hint);
    }

    pub fn add_index_merge_hint(&mut self, hint: HintedIndex) {
        self.index_merge_hints.push(hint);
    }

    /// 移除某类提示中属于给定查询块的条目
    pub(crate) fn clear_tables_in_block(&mut self, kind: TableHintKind, offset: usize) {
        self.tables[kind.index()].retain(|table| table.query_block_offset != Some(offset));
    }

    pub fn tables(&self, kind: TableHintKind) -> &[HintedTable] {
        &self.tables[kind.index()]
    }

    pub fn index_hints(&self) -> &[HintedIndex] {
        &self.index_hints
    }

    pub fn index_merge_hints(&self) -> &[HintedIndex] {
        &self.index_merge_hints
    }

    /// 是否不包含任何表级或索引级条目
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(Vec::is_empty)
            && self.index_hints.is_empty()
            && self.index_merge_hints.is_empty()
    }

    /// 所有类别中仍未匹配的条目数
    pub fn unmatched_count(&self) -> usize {
        let tables = self.tables.iter().flatten().filter(|t| !t.matched).count();
        let indexes = self
            .index_hints
            .iter()
            .chain(&self.index_merge_hints)
            .filter(|h| !h.matched)
            .count();
        tables + indexes
    }

    /// 通用匹配入口
    pub fn prefers(&mut self, kind: TableHintKind, tables: &[Option<&HintedTable>]) -> bool {
        match_table_name(tables, &mut self.tables[kind.index()])
    }

    pub fn prefers_merge_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::SortMergeJoin, tables)
    }

    pub fn prefers_no_merge_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::NoMergeJoin, tables)
    }

    pub fn prefers_broadcast_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::BroadcastJoin, tables)
    }

    pub fn prefers_shuffle_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::ShuffleJoin, tables)
    }

    pub fn prefers_hash_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::HashJoin, tables)
    }

    pub fn prefers_no_hash_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::NoHashJoin, tables)
    }

    pub fn prefers_hj_build(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::HashJoinBuild, tables)
    }

    pub fn prefers_hj_probe(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::HashJoinProbe, tables)
    }

    pub fn prefers_leading(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::LeadingJoinOrder, tables)
    }

    pub fn prefers_inlj(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::IndexNestedLoopJoin, tables)
    }

    pub fn prefers_inlhj(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::IndexNestedLoopHashJoin, tables)
    }

    pub fn prefers_inlmj(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::IndexNestedLoopMergeJoin, tables)
    }

    pub fn prefers_no_index_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::NoIndexJoin, tables)
    }

    pub fn prefers_no_index_hash_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::NoIndexHashJoin, tables)
    }

    pub fn prefers_no_index_merge_join(&mut self, tables: &[Option<&HintedTable>]) -> bool {
        self.prefers(TableHintKind::NoIndexMergeJoin, tables)
    }

    /// 查找要求从 TiFlash 读取该表的提示条目
    pub fn prefers_tiflash(&mut self, table: Option<&HintedTable>) -> Option<&HintedTable> {
        match_storage(table, &mut self.tables[TableHintKind::TiFlash.index()])
    }

    /// 查找要求从 TiKV 读取该表的提示条目
    pub fn prefers_tikv(&mut self, table: Option<&HintedTable>) -> Option<&HintedTable> {
        match_storage(table, &mut self.tables[TableHintKind::TiKV.index()])
    }

    /// 该表被要求读取的存储引擎集合
    pub fn storage_preference(&mut self, table: Option<&HintedTable>) -> StoragePreference {
        let mut pref = StoragePreference::empty();
        if self.prefers_tiflash(table).is_some() {
            pref |= StoragePreference::TIFLASH;
        }
        if self.prefers_tikv(table).is_some() {
            pref |= StoragePreference::TIKV;
        }
        pref
    }

    /// 作用于给定库表的索引提示，由调用方在索引确认存在后调用 `mark_matched`
    pub fn index_hints_for(&mut self, db_name: &Ident, table_name: &Ident) -> Vec<&mut HintedIndex> {
        self.index_hints
            .iter_mut()
            .filter(|hint| hint.matches(db_name, table_name))
            .collect()
    }

    /// 作用于给定库表的 index merge 提示
    pub fn index_merge_hints_for(&mut self, db_name: &Ident, table_name: &Ident) -> Vec<&mut HintedIndex> {
        self.index_merge_hints
            .iter_mut()
            .filter(|hint| hint.matches(db_name, table_name))
            .collect()
    }

    /// 计算一个连接两侧的连接偏好
    ///
    /// 对称类提示（merge / hash / broadcast / shuffle 及其否定形式）只要任一侧命中即生效；
    /// 区分角色的提示按命中的一侧设置 LEFT_* 或 RIGHT_* 标记，并设置对应的算法标记（如 `INLJ`）。
    pub fn join_preference(
        &mut self,
        lhs: &[Option<&HintedTable>],
        rhs: &[Option<&HintedTable>],
    ) -> JoinPreference {
        let both: Vec<Option<&HintedTable>> = lhs.iter().chain(rhs).copied().collect();
        let mut pref = JoinPreference::empty();

        let symmetric = [
            (TableHintKind::SortMergeJoin, JoinPreference::MERGE_JOIN),
            (TableHintKind::NoMergeJoin, JoinPreference::NO_MERGE_JOIN),
            (TableHintKind::BroadcastJoin, JoinPreference::BROADCAST_JOIN),
            (TableHintKind::ShuffleJoin, JoinPreference::SHUFFLE_JOIN),
            (TableHintKind::HashJoin, JoinPreference::HASH_JOIN),
            (TableHintKind::NoHashJoin, JoinPreference::NO_HASH_JOIN),
            (TableHintKind::NoIndexJoin, JoinPreference::NO_INDEX_JOIN),
            (TableHintKind::NoIndexHashJoin, JoinPreference::NO_INDEX_HASH_JOIN),
            (TableHintKind::NoIndexMergeJoin, JoinPreference::NO_INDEX_MERGE_JOIN),
        ];
        for (kind, flag) in symmetric {
            if self.prefers(kind, &both) {
                pref |= flag;
            }
        }

        // 角色类提示：命中的一侧设置对应的 LEFT_* / RIGHT_* 标记，同时设置算法标记
        let sided = [
            (
                TableHintKind::IndexNestedLoopJoin,
                JoinPreference::INLJ,
                JoinPreference::LEFT_AS_INLJ_INNER,
                JoinPreference::RIGHT_AS_INLJ_INNER,
            ),
            (
                TableHintKind::IndexNestedLoopHashJoin,
                JoinPreference::INLHJ,
                JoinPreference::LEFT_AS_INLHJ_INNER,
                JoinPreference::RIGHT_AS_INLHJ_INNER,
            ),
            (
                TableHintKind::IndexNestedLoopMergeJoin,
                JoinPreference::INLMJ,
                JoinPreference::LEFT_AS_INLMJ_INNER,
                JoinPreference::RIGHT_AS_INLMJ_INNER,
            ),
            (
                TableHintKind::HashJoinBuild,
                JoinPreference::HJ_BUILD,
                JoinPreference::LEFT_AS_HJ_BUILD,
                JoinPreference::RIGHT_AS_HJ_BUILD,
            ),
            (
                TableHintKind::HashJoinProbe,
                JoinPreference::HJ_PROBE,
                JoinPreference::LEFT_AS_HJ_PROBE,
                JoinPreference::RIGHT_AS_HJ_PROBE,
            ),
        ];
        for (kind, algo, left, right) in sided {
            if self.prefers(kind, lhs) {
                pref |= algo | left;
            }
            if self.prefers(kind, rhs) {
                pref |= algo | right;
            }
        }
        pref
    }

    /// 收集计划构建后仍未匹配的提示警告
    pub fn collect_unmatched_warnings(&self, config: &HintConfig) -> Vec<HintWarning> {
        collect_unmatched_hint_warnings(self, config)
    }
}
