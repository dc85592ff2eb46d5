//! 提示文本还原
//!
//! 把提示条目还原为规范的提示注释文本，用于诊断信息和去重键：
//!
//! ```text
//! /*+ HASH_JOIN(t1, t2 PARTITION(p0, p1)) */
//! /*+ USE_INDEX(t1, idx_a, idx_b) */
//! /*+ READ_FROM_STORAGE(tiflash[t1], tikv[t2]) */
//! ```

use super::ast::{HintData, HintTable, TableOptimizerHint};
use super::index::HintedIndex;
use super::names::{
    HINT_FORCE_INDEX, HINT_IGNORE_INDEX, HINT_INDEX_MERGE, HINT_MAX_EXECUTION_TIME, HINT_MEMORY_QUOTA,
    HINT_NO_INDEX_MERGE, HINT_NO_ORDER_INDEX, HINT_ORDER_INDEX, HINT_QB_NAME, HINT_READ_FROM_STORAGE,
    HINT_TIFLASH, HINT_TIKV, HINT_TIME_RANGE, HINT_USE_INDEX,
};
use super::table::HintedTable;

fn restore_partitions<'a>(out: &mut String, partitions: impl ExactSizeIterator<Item = &'a str>) {
    if partitions.len() == 0 {
        return;
    }
    out.push_str(" PARTITION(");
    for (i, partition) in partitions.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(partition);
    }
    out.push(')');
}

/// 还原表列表：`t1, t2 PARTITION(p0, p1)`
pub fn restore_table_hint(hint_tables: &[HintedTable]) -> String {
    let mut out = String::new();
    for (i, table) in hint_tables.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(table.table_name.lower());
        restore_partitions(&mut out, table.partitions.iter().map(|p| p.lower()));
    }
    out
}

/// 还原连接类提示；表列表为空时只返回大写提示名
pub fn restore_join_hint(hint_type: &str, hint_tables: &[HintedTable]) -> String {
    if hint_tables.is_empty() {
        return hint_type.to_uppercase();
    }
    format!("/*+ {}({}) */", hint_type.to_uppercase(), restore_table_hint(hint_tables))
}

/// 还原索引类提示：`/*+ USE_INDEX(t1, idx_a, idx_b) */`
pub fn restore_index_hint(hint_type: &str, hint_index: &HintedIndex) -> String {
    let mut out = format!("/*+ {}(", hint_type.to_uppercase());
    out.push_str(hint_index.table_name.lower());
    restore_partitions(&mut out, hint_index.partitions.iter().map(|p| p.lower()));
    for index_name in &hint_index.index_hint.index_names {
        out.push_str(", ");
        out.push_str(index_name.lower());
    }
    out.push_str(") */");
    out
}

/// 还原存储引擎提示，空分组省略
pub fn restore_storage_hint(tiflash_tables: &[HintedTable], tikv_tables: &[HintedTable]) -> String {
    let mut groups = Vec::with_capacity(2);
    if !tiflash_tables.is_empty() {
        groups.push(format!("{}[{}]", HINT_TIFLASH, restore_table_hint(tiflash_tables)));
    }
    if !tikv_tables.is_empty() {
        groups.push(format!("{}[{}]", HINT_TIKV, restore_table_hint(tikv_tables)));
    }
    format!(
        "/*+ {}({}) */",
        HINT_READ_FROM_STORAGE.to_uppercase(),
        groups.join(", ")
    )
}

/// 还原解析器给出的表引用：`db.t@qb PARTITION(p0)`
pub fn restore_hint_table(table: &HintTable) -> String {
    let mut out = String::new();
    if !table.db_name.is_empty() {
        out.push_str(table.db_name.original());
        out.push('.');
    }
    out.push_str(table.table_name.original());
    if let Some(qb_name) = table.qb_name.as_ref().filter(|qb| !qb.is_empty()) {
        out.push('@');
        out.push_str(qb_name.original());
    }
    restore_partitions(&mut out, table.partitions.iter().map(|p| p.original()));
    out
}

fn is_index_level_hint(name: &str) -> bool {
    matches!(
        name,
        HINT_USE_INDEX
            | HINT_IGNORE_INDEX
            | HINT_FORCE_INDEX
            | HINT_ORDER_INDEX
            | HINT_NO_ORDER_INDEX
            | HINT_INDEX_MERGE
            | HINT_NO_INDEX_MERGE
    )
}

/// 还原一条原始提示节点，如 `HASH_JOIN(@sel_2 t1, test.t2@qb)`
pub fn restore_table_optimizer_hint(hint: &TableOptimizerHint) -> String {
    let name = hint.name();
    let mut out = format!("{}(", name.to_uppercase());

    let qb_name = hint.qb_name.as_ref().filter(|qb| !qb.is_empty());
    if name == HINT_QB_NAME {
        if let Some(qb_name) = qb_name {
            out.push_str(qb_name.original());
        }
        out.push(')');
        return out;
    }
    let mut args: Vec<String> = Vec::new();
    match (&hint.data, name) {
        (HintData::Number(n), HINT_MEMORY_QUOTA) => args.push(format!("{} MB", n / 1024 / 1024)),
        (HintData::Number(n), HINT_MAX_EXECUTION_TIME) => args.push(n.to_string()),
        (HintData::Storage(engine), _) => {
            let tables: Vec<String> = hint.tables.iter().map(restore_hint_table).collect();
            args.push(format!("{}[{}]", engine.name().to_uppercase(), tables.join(", ")));
        }
        (HintData::TimeRange(range), HINT_TIME_RANGE) => {
            args.push(format!("'{}'", range.from));
            args.push(format!("'{}'", range.to));
        }
        _ if is_index_level_hint(name) => {
            args.extend(hint.tables.iter().map(restore_hint_table));
            args.extend(hint.indexes.iter().map(|i| i.original().to_string()));
        }
        (HintData::Number(n), _) => args.push(n.to_string()),
        _ => args.extend(hint.tables.iter().map(restore_hint_table)),
    }

    if let Some(qb_name) = qb_name {
        out.push('@');
        out.push_str(qb_name.original());
        if !args.is_empty() {
            out.push(' ');
        }
    }
    out.push_str(&args.join(", "));
    out.push(')');
    out
}
