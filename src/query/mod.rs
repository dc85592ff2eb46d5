//! 查询优化相关模块

pub mod hint;
