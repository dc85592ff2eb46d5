//! 计划偏好位集
//!
//! 各偏好相互独立、可同时设置；空集表示"没有偏好"，而不是"偏好为否"。

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// 连接算法与连接两侧角色的偏好
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct JoinPreference: u32 {
        const INLJ = 1 << 0;
        const INLHJ = 1 << 1;
        const INLMJ = 1 << 2;
        const HJ_BUILD = 1 << 3;
        const HJ_PROBE = 1 << 4;
        const HASH_JOIN = 1 << 5;
        const NO_HASH_JOIN = 1 << 6;
        const MERGE_JOIN = 1 << 7;
        const NO_MERGE_JOIN = 1 << 8;
        const NO_INDEX_JOIN = 1 << 9;
        const NO_INDEX_HASH_JOIN = 1 << 10;
        const NO_INDEX_MERGE_JOIN = 1 << 11;
        const BROADCAST_JOIN = 1 << 12;
        const SHUFFLE_JOIN = 1 << 13;

        const LEFT_AS_INLJ_INNER = 1 << 14;
        const RIGHT_AS_INLJ_INNER = 1 << 15;
        const LEFT_AS_INLHJ_INNER = 1 << 16;
        const RIGHT_AS_INLHJ_INNER = 1 << 17;
        const LEFT_AS_INLMJ_INNER = 1 << 18;
        const RIGHT_AS_INLMJ_INNER = 1 << 19;
        const LEFT_AS_HJ_BUILD = 1 << 20;
        const RIGHT_AS_HJ_BUILD = 1 << 21;
        const LEFT_AS_HJ_PROBE = 1 << 22;
        const RIGHT_AS_HJ_PROBE = 1 << 23;
    }
}

impl JoinPreference {
    /// 任一侧被要求作为 index join 的内表
    pub fn prefers_index_join(&self) -> bool {
        self.intersects(
            JoinPreference::LEFT_AS_INLJ_INNER
                | JoinPreference::RIGHT_AS_INLJ_INNER
                | JoinPreference::LEFT_AS_INLHJ_INNER
                | JoinPreference::RIGHT_AS_INLHJ_INNER
                | JoinPreference::LEFT_AS_INLMJ_INNER
                | JoinPreference::RIGHT_AS_INLMJ_INNER,
        )
    }
}

bitflags! {
    /// 聚合策略偏好
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct AggPreference: u32 {
        const HASH_AGG = 1 << 0;
        const STREAM_AGG = 1 << 1;
        const MPP_1PHASE_AGG = 1 << 2;
        const MPP_2PHASE_AGG = 1 << 3;
    }
}

bitflags! {
    /// 存储引擎偏好
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StoragePreference: u32 {
        const TIKV = 1 << 0;
        const TIFLASH = 1 << 1;
    }
}

bitflags! {
    /// 作用于子查询的提示标记
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SubqueryHintFlags: u64 {
        const SEMI_JOIN_REWRITE = 1 << 0;
        const NO_DECORRELATE = 1 << 1;
    }
}
