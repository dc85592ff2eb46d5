//! 提示名称与表级提示类别
//!
//! 名称均为小写形式，解析器产出的提示名需先转换为小写再比较。

use serde::{Deserialize, Serialize};

/// merge join 的旧写法
pub const TIDB_MERGE_JOIN: &str = "tidb_smj";
pub const HINT_SMJ: &str = "merge_join";
pub const HINT_NO_MERGE_JOIN: &str = "no_merge_join";

/// broadcast join 的旧写法
pub const TIDB_BROADCAST_JOIN: &str = "tidb_bcj";
pub const HINT_BCJ: &str = "broadcast_join";
pub const HINT_SHUFFLE_JOIN: &str = "shuffle_join";

/// 按 FROM 子句中的顺序连接
pub const HINT_STRAIGHT_JOIN: &str = "straight_join";
/// 指定连接顺序的前缀表
pub const HINT_LEADING: &str = "leading";

/// index nested loop join 的旧写法
pub const TIDB_INDEX_NESTED_LOOP_JOIN: &str = "tidb_inlj";
pub const HINT_INLJ: &str = "inl_join";
pub const HINT_INLHJ: &str = "inl_hash_join";
pub const HINT_INLMJ: &str = "inl_merge_join";
pub const HINT_NO_INDEX_JOIN: &str = "no_index_join";
pub const HINT_NO_INDEX_HASH_JOIN: &str = "no_index_hash_join";
pub const HINT_NO_INDEX_MERGE_JOIN: &str = "no_index_merge_join";

/// hash join 的旧写法
pub const TIDB_HASH_JOIN: &str = "tidb_hj";
pub const HINT_HJ: &str = "hash_join";
pub const HINT_NO_HASH_JOIN: &str = "no_hash_join";
pub const HINT_HASH_JOIN_BUILD: &str = "hash_join_build";
pub const HINT_HASH_JOIN_PROBE: &str = "hash_join_probe";

pub const HINT_HASH_AGG: &str = "hash_agg";
pub const HINT_STREAM_AGG: &str = "stream_agg";
pub const HINT_MPP_1PHASE_AGG: &str = "mpp_1phase_agg";
pub const HINT_MPP_2PHASE_AGG: &str = "mpp_2phase_agg";
pub const HINT_AGG_TO_COP: &str = "agg_to_cop";
pub const HINT_LIMIT_TO_COP: &str = "limit_to_cop";

pub const HINT_USE_INDEX: &str = "use_index";
pub const HINT_IGNORE_INDEX: &str = "ignore_index";
pub const HINT_FORCE_INDEX: &str = "force_index";
pub const HINT_ORDER_INDEX: &str = "order_index";
pub const HINT_NO_ORDER_INDEX: &str = "no_order_index";
pub const HINT_INDEX_MERGE: &str = "use_index_merge";
pub const HINT_NO_INDEX_MERGE: &str = "no_index_merge";

pub const HINT_READ_FROM_STORAGE: &str = "read_from_storage";
pub const HINT_TIFLASH: &str = "tiflash";
pub const HINT_TIKV: &str = "tikv";

/// 指定指标汇总表的时间范围
pub const HINT_TIME_RANGE: &str = "time_range";
/// 将 CTE 内联展开
pub const HINT_MERGE: &str = "merge";

/// 为查询块命名
pub const HINT_QB_NAME: &str = "qb_name";
pub const HINT_IGNORE_PLAN_CACHE: &str = "ignore_plan_cache";
pub const HINT_SEMI_JOIN_REWRITE: &str = "semi_join_rewrite";
pub const HINT_NO_DECORRELATE: &str = "no_decorrelate";
pub const HINT_MEMORY_QUOTA: &str = "memory_quota";
pub const HINT_USE_TOJA: &str = "use_toja";
pub const HINT_MAX_EXECUTION_TIME: &str = "max_execution_time";

/// 通配库名，用于 `*.t` 形式的全局绑定
pub const WILDCARD_DB: &str = "*";

/// 表级提示类别
///
/// 每个类别在 `PlanHints` 中对应一个独立的表列表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableHintKind {
    SortMergeJoin,
    NoMergeJoin,
    BroadcastJoin,
    ShuffleJoin,
    HashJoin,
    NoHashJoin,
    HashJoinBuild,
    HashJoinProbe,
    LeadingJoinOrder,
    IndexNestedLoopJoin,
    IndexNestedLoopHashJoin,
    IndexNestedLoopMergeJoin,
    NoIndexJoin,
    NoIndexHashJoin,
    NoIndexMergeJoin,
    TiFlash,
    TiKV,
}

impl TableHintKind {
    pub const COUNT: usize = 17;

    pub const ALL: [TableHintKind; Self::COUNT] = [
        TableHintKind::SortMergeJoin,
        TableHintKind::NoMergeJoin,
        TableHintKind::BroadcastJoin,
        TableHintKind::ShuffleJoin,
        TableHintKind::HashJoin,
        TableHintKind::NoHashJoin,
        TableHintKind::HashJoinBuild,
        TableHintKind::HashJoinProbe,
        TableHintKind::LeadingJoinOrder,
        TableHintKind::IndexNestedLoopJoin,
        TableHintKind::IndexNestedLoopHashJoin,
        TableHintKind::IndexNestedLoopMergeJoin,
        TableHintKind::NoIndexJoin,
        TableHintKind::NoIndexHashJoin,
        TableHintKind::NoIndexMergeJoin,
        TableHintKind::TiFlash,
        TableHintKind::TiKV,
    ];

    /// 在 `PlanHints` 存储数组中的下标
    pub fn index(self) -> usize {
        self as usize
    }

    /// 规范提示名（诊断渲染时使用）
    pub fn hint_name(self) -> &'static str {
        match self {
            TableHintKind::SortMergeJoin => HINT_SMJ,
            TableHintKind::NoMergeJoin => HINT_NO_MERGE_JOIN,
            TableHintKind::BroadcastJoin => HINT_BCJ,
            TableHintKind::ShuffleJoin => HINT_SHUFFLE_JOIN,
            TableHintKind::HashJoin => HINT_HJ,
            TableHintKind::NoHashJoin => HINT_NO_HASH_JOIN,
            TableHintKind::HashJoinBuild => HINT_HASH_JOIN_BUILD,
            TableHintKind::HashJoinProbe => HINT_HASH_JOIN_PROBE,
            TableHintKind::LeadingJoinOrder => HINT_LEADING,
            TableHintKind::IndexNestedLoopJoin => HINT_INLJ,
            TableHintKind::IndexNestedLoopHashJoin => HINT_INLHJ,
            TableHintKind::IndexNestedLoopMergeJoin => HINT_INLMJ,
            TableHintKind::NoIndexJoin => HINT_NO_INDEX_JOIN,
            TableHintKind::NoIndexHashJoin => HINT_NO_INDEX_HASH_JOIN,
            TableHintKind::NoIndexMergeJoin => HINT_NO_INDEX_MERGE_JOIN,
            TableHintKind::TiFlash => HINT_TIFLASH,
            TableHintKind::TiKV => HINT_TIKV,
        }
    }

    /// 旧写法，未匹配警告中会一并给出
    pub fn alias(self) -> Option<&'static str> {
        match self {
            TableHintKind::SortMergeJoin => Some(TIDB_MERGE_JOIN),
            TableHintKind::BroadcastJoin => Some(TIDB_BROADCAST_JOIN),
            TableHintKind::HashJoin => Some(TIDB_HASH_JOIN),
            TableHintKind::IndexNestedLoopJoin => Some(TIDB_INDEX_NESTED_LOOP_JOIN),
            _ => None,
        }
    }

    /// 根据小写提示名查找连接类提示的类别，存储引擎提示不在此列
    pub fn from_join_hint_name(name: &str) -> Option<Self> {
        let kind = match name {
            TIDB_MERGE_JOIN | HINT_SMJ => TableHintKind::SortMergeJoin,
            HINT_NO_MERGE_JOIN => TableHintKind::NoMergeJoin,
            TIDB_BROADCAST_JOIN | HINT_BCJ => TableHintKind::BroadcastJoin,
            HINT_SHUFFLE_JOIN => TableHintKind::ShuffleJoin,
            TIDB_HASH_JOIN | HINT_HJ => TableHintKind::HashJoin,
            HINT_NO_HASH_JOIN => TableHintKind::NoHashJoin,
            HINT_HASH_JOIN_BUILD => TableHintKind::HashJoinBuild,
            HINT_HASH_JOIN_PROBE => TableHintKind::HashJoinProbe,
            HINT_LEADING => TableHintKind::LeadingJoinOrder,
            TIDB_INDEX_NESTED_LOOP_JOIN | HINT_INLJ => TableHintKind::IndexNestedLoopJoin,
            HINT_INLHJ => TableHintKind::IndexNestedLoopHashJoin,
            HINT_INLMJ => TableHintKind::IndexNestedLoopMergeJoin,
            HINT_NO_INDEX_JOIN => TableHintKind::NoIndexJoin,
            HINT_NO_INDEX_HASH_JOIN => TableHintKind::NoIndexHashJoin,
            HINT_NO_INDEX_MERGE_JOIN => TableHintKind::NoIndexMergeJoin,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_storage(self) -> bool {
        matches!(self, TableHintKind::TiFlash | TableHintKind::TiKV)
    }
}

/// 位置型连接提示：参数表示特定连接形态中的参与者，不允许携带分区列表
pub fn is_positional_join_hint(name: &str) -> bool {
    matches!(
        name,
        TIDB_MERGE_JOIN
            | HINT_SMJ
            | TIDB_INDEX_NESTED_LOOP_JOIN
            | HINT_INLJ
            | HINT_INLHJ
            | HINT_INLMJ
            | TIDB_HASH_JOIN
            | HINT_HJ
            | HINT_LEADING
    )
}
