//! 索引级提示条目
//!
//! 索引提示只按库名、表名绑定，查询块作用域由调用方保证：计划构建器只传入当前查询块内的候选表。

use serde::{Deserialize, Serialize};

use crate::core::types::Ident;

use super::ast::{IndexHintSpec, IndexHintType};
use super::names::{HINT_FORCE_INDEX, HINT_IGNORE_INDEX, HINT_USE_INDEX, WILDCARD_DB};

/// 提示作用的索引
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintedIndex {
    pub db_name: Ident,
    pub table_name: Ident,
    pub partitions: Vec<Ident>,
    pub index_hint: IndexHintSpec,
    /// 是否已成功应用到某个数据源；计划构建后仍未匹配的条目会产生警告
    pub matched: bool,
}

impl HintedIndex {
    pub fn new(db_name: impl Into<Ident>, table_name: impl Into<Ident>, index_hint: IndexHintSpec) -> Self {
        Self {
            db_name: db_name.into(),
            table_name: table_name.into(),
            partitions: Vec::new(),
            index_hint,
            matched: false,
        }
    }

    /// 检查提示是否作用于给定的库表；`*.t` 形式的通配绑定匹配任意库
    pub fn matches(&self, db_name: &Ident, table_name: &Ident) -> bool {
        self.table_name == *table_name
            && (self.db_name == *db_name || self.db_name.lower() == WILDCARD_DB)
    }

    pub fn mark_matched(&mut self) {
        self.matched = true;
    }

    /// 提示模式的文本形式
    pub fn hint_type_str(&self) -> &'static str {
        match self.index_hint.hint_type {
            IndexHintType::Use => HINT_USE_INDEX,
            IndexHintType::Ignore => HINT_IGNORE_INDEX,
            IndexHintType::Force => HINT_FORCE_INDEX,
        }
    }

    /// 格式化为 `db.table[, idx1, idx2]`
    pub fn index_string(&self) -> String {
        let mut out = format!("{}.{}", self.db_name, self.table_name);
        for index_name in &self.index_hint.index_names {
            out.push_str(", ");
            out.push_str(index_name.lower());
        }
        out
    }
}
