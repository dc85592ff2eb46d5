//! 大小写不敏感的标识符
//!
//! 库名、表名、分区名、索引名在 SQL 中不区分大小写，但诊断信息需要保留用户书写的原始形式。
//! `Ident` 同时保存两种形式，比较与哈希只使用小写形式。

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// 双形式标识符：`o` 为原始形式，`l` 为小写比较形式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ident {
    o: String,
    l: String,
}

impl Ident {
    /// 从原始文本创建标识符
    pub fn new(name: impl Into<String>) -> Self {
        let o = name.into();
        let l = o.to_lowercase();
        Self { o, l }
    }

    /// 用户书写的原始形式
    pub fn original(&self) -> &str {
        &self.o
    }

    /// 小写比较形式
    pub fn lower(&self) -> &str {
        &self.l
    }

    pub fn is_empty(&self) -> bool {
        self.l.is_empty()
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.l == other.l
    }
}

impl Eq for Ident {}

impl Hash for Ident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.l.hash(state);
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.o)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}
