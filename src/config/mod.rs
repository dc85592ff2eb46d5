use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::HintResult;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub hint: HintConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "planhint".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 提示处理的行为开关
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct HintConfig {
    /// 未匹配警告中是否附带提示的别名写法（如 `TIDB_HJ`）
    pub report_alias_hints: bool,
    /// 分派前是否移除文本完全相同的重复提示
    pub remove_duplicated_hints: bool,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            report_alias_hints: true,
            remove_duplicated_hints: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> HintResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> HintResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
