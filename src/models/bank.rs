//! 主题库数据结构
//!
//! 磁盘格式与游戏后端一致：`{"categories": {"<分类ID>": {...}}}`

use crate::models::question::RawRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// 分类（题目桶）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
    pub icon: String,
    /// 题目按原始记录保存，写回时字段、顺序和 null 值保持不变
    #[serde(default)]
    pub questions: Vec<RawRecord>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// 主题库
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub categories: IndexMap<String, Category>,

    /// 其他顶层字段，原样保留
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl QuestionBank {
    /// 题库是否没有任何内容
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.extra.is_empty()
    }

    /// 题目总数
    pub fn total_questions(&self) -> usize {
        self.categories.values().map(|c| c.questions.len()).sum()
    }

    /// 遍历所有分类中的题目
    pub fn questions(&self) -> impl Iterator<Item = &RawRecord> {
        self.categories.values().flat_map(|c| c.questions.iter())
    }
}
