//! planhint - 关系型查询规划器的优化器提示绑定
//!
//! 将查询文本中的优化器提示（连接算法、索引选择、存储引擎、聚合策略）规范化为统一模型，
//! 在逻辑计划构建过程中与实际的表和索引绑定，并对始终未找到目标的提示给出警告。
//! 提示永远不会导致语句编译失败。

pub mod config;
pub mod core;
pub mod query;
pub mod utils;
