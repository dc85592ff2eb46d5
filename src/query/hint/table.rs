//! 表级提示条目与表引用规范化
//!
//! 解析器给出的表引用经规范化后成为 [`HintedTable`]：补全默认库名、解析查询块偏移，
//! 并对位置型连接提示执行分区检查。

use serde::{Deserialize, Serialize};

use crate::core::error::{HintWarning, WarningSink};
use crate::core::types::Ident;

use super::ast::HintTable;
use super::names::{is_positional_join_hint, WILDCARD_DB};
use super::query_block::QueryBlockResolver;
use super::restore::restore_join_hint;

/// 提示作用的表
///
/// 既用于 `PlanHints` 中保存的提示条目，也用于计划构建器传入的候选表。
/// `query_block_offset` 为 `None` 表示提示指定的查询块不存在，该条目永远不会被匹配。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintedTable {
    pub db_name: Ident,
    pub table_name: Ident,
    pub partitions: Vec<Ident>,
    pub query_block_offset: Option<usize>,
    /// 是否已成功绑定到计划节点
    pub matched: bool,
}

impl HintedTable {
    /// 创建候选表描述
    pub fn new(db_name: impl Into<Ident>, table_name: impl Into<Ident>, query_block_offset: usize) -> Self {
        Self {
            db_name: db_name.into(),
            table_name: table_name.into(),
            partitions: Vec::new(),
            query_block_offset: Some(query_block_offset),
            matched: false,
        }
    }

    pub fn with_partitions<I, S>(mut self, partitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.partitions = partitions.into_iter().map(Into::into).collect();
        self
    }

    /// 判断本条目（已保存的提示）是否与候选表匹配
    ///
    /// 库名相同或为通配库名、表名相同，且查询块偏移一致。比较均不区分大小写。
    pub fn matches(&self, candidate: &HintedTable) -> bool {
        (self.db_name == candidate.db_name || self.db_name.lower() == WILDCARD_DB)
            && self.table_name == candidate.table_name
            && self.query_block_offset.is_some()
            && self.query_block_offset == candidate.query_block_offset
    }

    /// 存储引擎提示的匹配规则：库名必须相同，不接受通配库名
    pub fn matches_exactly(&self, candidate: &HintedTable) -> bool {
        self.db_name == candidate.db_name
            && self.table_name == candidate.table_name
            && self.query_block_offset.is_some()
            && self.query_block_offset == candidate.query_block_offset
    }
}

/// 提取未匹配条目的表名（原始大小写）
pub fn extract_unmatched_tables(hint_tables: &[HintedTable]) -> Vec<String> {
    hint_tables
        .iter()
        .filter(|table| !table.matched)
        .map(|table| table.table_name.original().to_string())
        .collect()
}

/// 表引用规范化器
pub struct HintNormalizer<'a> {
    current_db: Ident,
    resolver: &'a dyn QueryBlockResolver,
}

impl<'a> HintNormalizer<'a> {
    pub fn new(current_db: impl Into<Ident>, resolver: &'a dyn QueryBlockResolver) -> Self {
        Self {
            current_db: current_db.into(),
            resolver,
        }
    }

    pub fn current_db(&self) -> &Ident {
        &self.current_db
    }

    pub fn resolver(&self) -> &'a dyn QueryBlockResolver {
        self.resolver
    }

    /// 将一条提示的表引用转换为 [`HintedTable`]
    ///
    /// `current_offset` 是提示本身所在（或 `@qb` 指定）的查询块，为 `None` 时只有自带 `@qb` 的表能解析出偏移。位置型连接提示中只要有一张表
    /// 带分区列表，整条提示都会被丢弃并追加一条警告，其余不带分区的表也一并丢弃。
    pub fn normalize(
        &self,
        hint_name: &str,
        hint_tables: &[HintTable],
        current_offset: Option<usize>,
        sink: &mut dyn WarningSink,
    ) -> Vec<HintedTable> {
        if hint_tables.is_empty() {
            return Vec::new();
        }
        let hint_name = hint_name.to_lowercase();
        let positional = is_positional_join_hint(&hint_name);
        let mut inapplicable = false;
        let mut tables = Vec::with_capacity(hint_tables.len());
        for hint_table in hint_tables {
            let db_name = if hint_table.db_name.is_empty() {
                self.current_db.clone()
            } else {
                hint_table.db_name.clone()
            };
            let query_block_offset = match hint_table.qb_name.as_ref().filter(|qb| !qb.is_empty()) {
                // 表自带的 @qb 与提示级查询块无关
                Some(qb_name) => self
                    .resolver
                    .hint_offset(Some(qb_name), current_offset.unwrap_or_default()),
                None => current_offset,
            };
            if positional && !hint_table.partitions.is_empty() {
                inapplicable = true;
            }
            tables.push(HintedTable {
                db_name,
                table_name: hint_table.table_name.clone(),
                partitions: hint_table.partitions.clone(),
                query_block_offset,
                matched: false,
            });
        }
        if inapplicable {
            let hint = restore_join_hint(&hint_name, &tables);
            log::debug!("丢弃分区上的位置型连接提示: {}", hint);
            sink.append_warning(HintWarning::InapplicableOnPartitions { hint });
            return Vec::new();
        }
        tables
    }
}
