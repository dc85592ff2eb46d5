//! 集成测试共享工具模块
//!
//! 提供提示节点构造与解析的辅助函数

pub mod fixtures;

use planhint::config::HintConfig;
use planhint::core::HintWarning;
use planhint::query::hint::{HintNormalizer, PlanHints, QueryBlockHandler, TableOptimizerHint};

/// 测试用的当前库
pub const CURRENT_DB: &str = "test";

/// 解析一个查询块的提示，返回计划提示和规范化阶段的警告
pub fn parse_hints(
    handler: &QueryBlockHandler,
    hints: &[TableOptimizerHint],
    current_offset: usize,
) -> (PlanHints, Vec<HintWarning>) {
    parse_hints_with_config(handler, hints, current_offset, &HintConfig::default())
}

pub fn parse_hints_with_config(
    handler: &QueryBlockHandler,
    hints: &[TableOptimizerHint],
    current_offset: usize,
    config: &HintConfig,
) -> (PlanHints, Vec<HintWarning>) {
    let normalizer = HintNormalizer::new(CURRENT_DB, handler);
    let mut warnings: Vec<HintWarning> = Vec::new();
    let plan_hints = PlanHints::parse(hints, &normalizer, current_offset, config, &mut warnings);
    (plan_hints, warnings)
}
