//! 查询块偏移解析
//!
//! 提示通过 `@qb_name` 指定作用的查询块。未命名时作用于提示所在的查询块。
//! 除 `QB_NAME` 显式声明的名字外，还支持隐式名字 `sel_N`、`upd_N`、`del_N`、`ins_N`。

use std::collections::HashMap;

use crate::core::types::Ident;

/// 查询块偏移解析接口
pub trait QueryBlockResolver {
    /// 解析提示作用的查询块偏移
    ///
    /// `qb_name` 为空时返回 `current_offset`；名字无法解析时返回 `None`。
    fn hint_offset(&self, qb_name: Option<&Ident>, current_offset: usize) -> Option<usize>;
}

const IMPLICIT_BLOCK_PREFIXES: [&str; 4] = ["sel_", "upd_", "del_", "ins_"];

/// 默认的查询块解析器
#[derive(Debug, Clone, Default)]
pub struct QueryBlockHandler {
    named_offsets: HashMap<Ident, usize>,
    block_count: usize,
}

impl QueryBlockHandler {
    /// 创建解析器，`block_count` 为语句中查询块的数量（偏移从 1 开始）
    pub fn new(block_count: usize) -> Self {
        Self {
            named_offsets: HashMap::new(),
            block_count,
        }
    }

    /// 登记 `QB_NAME(name)` 声明；重复声明时保留第一次
    pub fn register(&mut self, name: impl Into<Ident>, offset: usize) -> bool {
        let name = name.into();
        if self.named_offsets.contains_key(&name) {
            return false;
        }
        self.named_offsets.insert(name, offset);
        true
    }

    fn implicit_offset(&self, name: &str) -> Option<usize> {
        IMPLICIT_BLOCK_PREFIXES.iter().find_map(|prefix| {
            let offset: usize = name.strip_prefix(prefix)?.parse().ok()?;
            (offset >= 1 && offset <= self.block_count).then_some(offset)
        })
    }
}

impl QueryBlockResolver for QueryBlockHandler {
    fn hint_offset(&self, qb_name: Option<&Ident>, current_offset: usize) -> Option<usize> {
        match qb_name {
            None => Some(current_offset),
            Some(name) if name.is_empty() => Some(current_offset),
            Some(name) => self
                .named_offsets
                .get(name)
                .copied()
                .or_else(|| self.implicit_offset(name.lower())),
        }
    }
}
