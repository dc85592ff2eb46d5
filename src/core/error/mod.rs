//! 统一错误处理
//!
//! 提示绑定本身从不失败：不适用或未匹配的提示以 [`HintWarning`] 返回给调用方。
//! [`HintError`] 只覆盖真正会中断调用的场景，例如配置加载。

use thiserror::Error;

pub mod codes;
pub mod hint;

pub use codes::ErrorCode;
pub use hint::{HintWarning, WarningKind, WarningSink};

/// 提示模块的硬错误
#[derive(Error, Debug)]
pub enum HintError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("日志初始化错误: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// 统一的结果类型
pub type HintResult<T> = Result<T, HintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HintError = io_err.into();
        assert!(matches!(err, HintError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: HintError = parse_err.into();
        assert!(matches!(err, HintError::ConfigParse(_)));
    }
}
