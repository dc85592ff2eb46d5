//! 对外错误码定义
//!
//! 提示诊断通过会话的警告列表返回给客户端，错误码沿用 MySQL 协议的数值，
//! 使客户端 `SHOW WARNINGS` 的输出与其他兼容服务器一致。

use serde::{Deserialize, Serialize};

/// 对外错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// 内部错误（ER_INTERNAL_ERROR），优化器提示类警告统一使用
    Internal = 1815,
}

impl ErrorCode {
    /// 获取错误码的数值
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// 根据数值获取错误码
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1815 => Some(ErrorCode::Internal),
            _ => None,
        }
    }
}
