//! 核心模块：错误类型与基础类型

pub mod error;
pub mod types;

pub use error::{ErrorCode, HintError, HintResult, HintWarning, WarningKind, WarningSink};
pub use types::Ident;
