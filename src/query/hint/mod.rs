//! 优化器提示绑定
//!
//! 数据流：解析器产出的提示节点 → 去重 → 分派与规范化 → `PlanHints`（每条语句一份）→
//! 计划构建器在构造算子时探测并标记匹配 → 构建结束后收集未匹配警告。
//!
//! ## 模块结构
//!
//! - `names` - 提示名称与表级提示类别
//! - `ast` - 提示语法节点
//! - `query_block` - 查询块偏移解析
//! - `table` - 表级提示条目与表引用规范化
//! - `index` - 索引级提示条目
//! - `plan_hints` - 语句级提示集合与匹配
//! - `preference` - 计划偏好位集
//! - `dedup` - 提示去重
//! - `restore` - 提示文本还原
//! - `warnings` - 未匹配提示的警告收集
//! - `parse` - 提示分派

pub mod ast;
pub mod dedup;
pub mod index;
pub mod names;
pub mod parse;
pub mod plan_hints;
pub mod preference;
pub mod query_block;
pub mod restore;
pub mod table;
pub mod warnings;

pub use ast::{
    HintData, HintTable, HintTimeRange, IndexHintSpec, IndexHintType, StorageEngine, TableOptimizerHint,
};
pub use dedup::remove_duplicated_hints;
pub use index::HintedIndex;
pub use names::{TableHintKind, WILDCARD_DB};
pub use parse::subquery_hint_flags;
pub use plan_hints::{match_table_name, AggHints, PlanHints};
pub use preference::{AggPreference, JoinPreference, StoragePreference, SubqueryHintFlags};
pub use query_block::{QueryBlockHandler, QueryBlockResolver};
pub use restore::{
    restore_index_hint, restore_join_hint, restore_storage_hint, restore_table_hint,
    restore_table_optimizer_hint,
};
pub use table::{extract_unmatched_tables, HintNormalizer, HintedTable};
pub use warnings::collect_unmatched_hint_warnings;
