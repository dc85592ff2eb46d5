//! 优化器提示诊断类型
//!
//! 提示诊断分为两类：
//! - 不适用（inapplicable）：提示结构与目标不兼容，整条提示被丢弃
//! - 未匹配（unmatched）：计划构建结束后仍未绑定到任何计划节点
//!
//! 两类都只是警告，不会中断语句编译。

use thiserror::Error;

use crate::core::error::codes::ErrorCode;

/// 诊断类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    Inapplicable,
    Unmatched,
}

/// 优化器提示警告
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintWarning {
    /// 位置型连接提示引用了带分区列表的表
    #[error("Optimizer Hint {hint} is inapplicable on specified partitions")]
    InapplicableOnPartitions { hint: String },

    /// 同一查询块中出现多个 leading 提示
    #[error("We can only use one leading hint at most, when multiple leading hints are used, all leading hints will be invalid")]
    MultipleLeadingHints,

    /// leading 与 straight_join 同时出现
    #[error("We can only use the straight_join hint, when we use the leading hint and straight_join hint at the same time, all leading hints will be invalid")]
    LeadingWithStraightJoin,

    /// 连接类提示中存在未匹配的表
    #[error("There are no matching table names for ({}) in optimizer hint {hint}{}. Maybe you can use the table alias name", .tables.join(", "), alias_suffix(.alias))]
    UnmatchedJoinHint {
        tables: Vec<String>,
        hint: String,
        alias: Option<String>,
    },

    /// 索引类提示未匹配
    #[error("{hint_type}({target}) is inapplicable, check whether the table({table}) exists. Maybe you can use the table alias name")]
    UnmatchedIndexHint {
        hint_type: String,
        target: String,
        table: String,
    },

    /// 存储引擎提示中存在未匹配的表
    #[error("There are no matching table names for ({}) in optimizer hint {hint}. Maybe you can use the table alias name", .tables.join(", "))]
    UnmatchedStorageHint { tables: Vec<String>, hint: String },
}

fn alias_suffix(alias: &Option<String>) -> String {
    match alias {
        Some(alias) => format!(" or {}", alias),
        None => String::new(),
    }
}

impl HintWarning {
    /// 获取诊断类别
    pub fn kind(&self) -> WarningKind {
        match self {
            HintWarning::InapplicableOnPartitions { .. }
            | HintWarning::MultipleLeadingHints
            | HintWarning::LeadingWithStraightJoin => WarningKind::Inapplicable,
            HintWarning::UnmatchedJoinHint { .. }
            | HintWarning::UnmatchedIndexHint { .. }
            | HintWarning::UnmatchedStorageHint { .. } => WarningKind::Unmatched,
        }
    }

    /// 对外错误码
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Internal
    }

    pub fn is_unmatched(&self) -> bool {
        self.kind() == WarningKind::Unmatched
    }
}

/// 会话诊断接收端
///
/// 编译上下文持有具体的警告列表，提示模块只通过该接口追加警告。
pub trait WarningSink {
    fn append_warning(&mut self, warning: HintWarning);
}

impl WarningSink for Vec<HintWarning> {
    fn append_warning(&mut self, warning: HintWarning) {
        self.push(warning);
    }
}
