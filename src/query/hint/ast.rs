//! 提示语法节点
//!
//! 由外部 SQL 解析器产出，本模块只消费这些节点。`READ_FROM_STORAGE(TIFLASH[t1], TIKV[t2])`
//! 在解析时拆为两个节点，各自携带存储引擎与表列表。

use serde::{Deserialize, Serialize};

use crate::core::types::Ident;

/// 提示中引用的表：`db.t@qb PARTITION(p0, p1)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintTable {
    pub db_name: Ident,
    pub table_name: Ident,
    pub qb_name: Option<Ident>,
    pub partitions: Vec<Ident>,
}

impl HintTable {
    pub fn new(table_name: impl Into<Ident>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    pub fn with_db(mut self, db_name: impl Into<Ident>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn with_qb_name(mut self, qb_name: impl Into<Ident>) -> Self {
        self.qb_name = Some(qb_name.into());
        self
    }

    pub fn with_partitions<I, S>(mut self, partitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.partitions = partitions.into_iter().map(Into::into).collect();
        self
    }
}

/// 索引提示模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexHintType {
    Use,
    Ignore,
    Force,
}

/// 索引提示描述：模式与索引名列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexHintSpec {
    pub hint_type: IndexHintType,
    pub index_names: Vec<Ident>,
}

impl IndexHintSpec {
    pub fn new(hint_type: IndexHintType, index_names: Vec<Ident>) -> Self {
        Self {
            hint_type,
            index_names,
        }
    }
}

/// `TIME_RANGE('from', 'to')` 的参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintTimeRange {
    pub from: String,
    pub to: String,
}

/// 存储引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageEngine {
    TiFlash,
    TiKV,
}

impl StorageEngine {
    pub fn name(&self) -> &'static str {
        match self {
            StorageEngine::TiFlash => super::names::HINT_TIFLASH,
            StorageEngine::TiKV => super::names::HINT_TIKV,
        }
    }
}

/// 非表参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintData {
    #[default]
    None,
    Storage(StorageEngine),
    TimeRange(HintTimeRange),
    Number(u64),
}

/// 一条优化器提示
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptimizerHint {
    pub hint_name: Ident,
    pub qb_name: Option<Ident>,
    pub tables: Vec<HintTable>,
    pub indexes: Vec<Ident>,
    pub data: HintData,
}

impl TableOptimizerHint {
    pub fn new(hint_name: impl Into<Ident>) -> Self {
        Self {
            hint_name: hint_name.into(),
            ..Default::default()
        }
    }

    pub fn with_qb_name(mut self, qb_name: impl Into<Ident>) -> Self {
        self.qb_name = Some(qb_name.into());
        self
    }

    pub fn with_tables(mut self, tables: Vec<HintTable>) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_indexes<I, S>(mut self, indexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        self.indexes = indexes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_data(mut self, data: HintData) -> Self {
        self.data = data;
        self
    }

    /// 小写提示名
    pub fn name(&self) -> &str {
        self.hint_name.lower()
    }
}
