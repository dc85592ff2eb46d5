//! 提示去重
//!
//! 以规范文本（小写）作为键，文本相同的提示视为重复，只保留第一次出现。

use std::collections::HashSet;

use super::ast::TableOptimizerHint;
use super::restore::restore_table_optimizer_hint;

/// 去重键
pub fn dedup_key(hint: &TableOptimizerHint) -> String {
    restore_table_optimizer_hint(hint).to_lowercase()
}

/// 移除重复的提示，保持其余提示的相对顺序
pub fn remove_duplicated_hints(hints: Vec<TableOptimizerHint>) -> Vec<TableOptimizerHint> {
    if hints.len() < 2 {
        return hints;
    }
    let mut seen = HashSet::with_capacity(hints.len());
    let total = hints.len();
    let deduped: Vec<TableOptimizerHint> = hints
        .into_iter()
        .filter(|hint| seen.insert(dedup_key(hint)))
        .collect();
    if deduped.len() < total {
        log::debug!("移除了 {} 条重复提示", total - deduped.len());
    }
    deduped
}
