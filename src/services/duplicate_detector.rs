//! 查重服务 - 业务能力层
//!
//! 两个累计集合：已见 ID、已见的规范化题干。导入开始前用主题库中的全部题目预填充，
//! 每接受一道题就立即加入，因此同一次运行中后来的题目会与之前接受的题目比较。

use crate::models::bank::QuestionBank;
use crate::models::question::{record_str, Question, RawRecord};
use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 规范化题干：小写 → 去首尾空白 → 删除 `?` `.` `,`
///
/// 删除字符后再去一次首尾空白，保证对结果再次规范化不会改变它
pub fn normalize_question_text(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .filter(|c| !matches!(c, '?' | '.' | ','))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 重复原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Duplicate {
    /// ID 已存在
    Id,
    /// 规范化题干已存在
    SimilarText {
        /// 先出现的那道题的原始题干
        existing: String,
    },
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duplicate::Id => write!(f, "重复 ID"),
            Duplicate::SimilarText { existing } => write!(f, "相似题目: '{}'", existing),
        }
    }
}

/// 累计查重器
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    seen_ids: HashSet<String>,
    /// 规范化题干 → 原始题干
    seen_texts: HashMap<String, String>,
}

impl DuplicateDetector {
    /// 创建空的查重器
    pub fn new() -> Self {
        Self::default()
    }

    /// 用主题库中已有的题目预填充
    ///
    /// 已有记录不做校验，缺失或非字符串的 `id` / `question` 按空串登记
    pub fn from_bank(bank: &QuestionBank) -> Self {
        let mut detector = Self::new();
        for record in bank.questions() {
            detector.register(record_str(record, "id"), record_str(record, "question"));
        }
        detector
    }

    /// 判断题目能否接受；能则立即登记
    pub fn admit(&mut self, question: &Question) -> Result<(), Duplicate> {
        if self.seen_ids.contains(&question.id) {
            return Err(Duplicate::Id);
        }
        let normalized = normalize_question_text(&question.question);
        if let Some(existing) = self.seen_texts.get(&normalized) {
            return Err(Duplicate::SimilarText {
                existing: existing.clone(),
            });
        }
        self.register(&question.id, &question.question);
        Ok(())
    }

    /// 已登记的 ID 数量
    pub fn known_ids(&self) -> usize {
        self.seen_ids.len()
    }

    fn register(&mut self, id: &str, text: &str) {
        self.seen_ids.insert(id.to_string());
        self.seen_texts
            .entry(normalize_question_text(text))
            .or_insert_with(|| text.to_string());
    }
}

/// 单个文件内部的重复项（仅用于提示，不影响导入决定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InFileDuplicate {
    Id { id: String },
    Text { text: String, first: String },
}

impl fmt::Display for InFileDuplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InFileDuplicate::Id { id } => write!(f, "重复 ID: {}", id),
            InFileDuplicate::Text { text, first } => {
                write!(f, "相似题目: '{}' 与 '{}'", text, first)
            }
        }
    }
}

/// 检查单个文件内部的重复 ID 和相似题干
///
/// 对所有记录生效（包括未通过校验的），缺失或非字符串的字段不参与比较
pub fn find_in_file_duplicates(records: &[RawRecord]) -> Vec<InFileDuplicate> {
    let mut duplicates = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut seen_texts: HashMap<String, String> = HashMap::new();

    for record in records {
        if let Some(JsonValue::String(id)) = record.get("id") {
            if !seen_ids.insert(id.as_str()) {
                duplicates.push(InFileDuplicate::Id { id: id.clone() });
            }
        }

        if let Some(JsonValue::String(text)) = record.get("question") {
            let normalized = normalize_question_text(text);
            match seen_texts.get(&normalized) {
                Some(first) => duplicates.push(InFileDuplicate::Text {
                    text: text.clone(),
                    first: first.clone(),
                }),
                None => {
                    seen_texts.insert(normalized, text.clone());
                }
            }
        }
    }

    duplicates
}
