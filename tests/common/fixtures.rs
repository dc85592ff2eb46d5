//! 测试数据构造

use planhint::query::hint::{
    HintData, HintTable, HintedTable, StorageEngine, TableOptimizerHint,
};

use super::CURRENT_DB;

/// 构造连接类提示节点
pub fn join_hint(name: &str, tables: &[&str]) -> TableOptimizerHint {
    TableOptimizerHint::new(name).with_tables(tables.iter().map(|t| HintTable::new(*t)).collect())
}

/// 构造索引类提示节点
pub fn index_hint(name: &str, table: &str, indexes: &[&str]) -> TableOptimizerHint {
    TableOptimizerHint::new(name)
        .with_tables(vec![HintTable::new(table)])
        .with_indexes(indexes.iter().copied())
}

/// 构造存储引擎提示节点
pub fn storage_hint(engine: StorageEngine, tables: &[&str]) -> TableOptimizerHint {
    join_hint("read_from_storage", tables).with_data(HintData::Storage(engine))
}

/// 计划构建时看到的表
pub fn candidate(table: &str, offset: usize) -> HintedTable {
    HintedTable::new(CURRENT_DB, table, offset)
}
