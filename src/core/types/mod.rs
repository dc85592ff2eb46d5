//! 核心类型模块

pub mod ident;

pub use ident::Ident;
