//! 题目结构校验 - 业务能力层
//!
//! 只负责"检查一条记录是否符合题目格式"，收集全部问题，不短路

use crate::models::question::RawRecord;
use serde_json::Value as JsonValue;
use std::fmt;

/// 必填字段，按检查顺序排列
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "question", "answers", "correct"];

/// 可选的字符串字段
const OPTIONAL_STRING_FIELDS: [&str; 4] = ["difficulty", "explanation", "image", "visualType"];

/// 答案数量
pub const ANSWER_COUNT: usize = 4;

/// 结构问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// 缺少必填字段
    MissingField(&'static str),
    /// `answers` 不是列表
    AnswersNotList,
    /// 答案数量不是 4
    WrongAnswerCount(usize),
    /// `correct` 不是 0-3 的整数
    InvalidCorrect,
    /// 字段不是字符串
    NotAString(&'static str),
    /// 某个答案不是字符串
    AnswerNotAString(usize),
}

impl Violation {
    /// 出问题的字段名
    pub fn field(&self) -> &'static str {
        match self {
            Violation::MissingField(field) | Violation::NotAString(field) => field,
            Violation::AnswersNotList
            | Violation::WrongAnswerCount(_)
            | Violation::AnswerNotAString(_) => "answers",
            Violation::InvalidCorrect => "correct",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingField(field) => write!(f, "缺少字段 '{}'", field),
            Violation::AnswersNotList => write!(f, "字段 'answers' 必须是列表"),
            Violation::WrongAnswerCount(count) => {
                write!(f, "必须恰好有 {} 个答案 (实际 {})", ANSWER_COUNT, count)
            }
            Violation::InvalidCorrect => write!(f, "字段 'correct' 必须是 0-3 的整数"),
            Violation::NotAString(field) => write!(f, "字段 '{}' 必须是字符串", field),
            Violation::AnswerNotAString(idx) => write!(f, "第 {} 个答案必须是字符串", idx + 1),
        }
    }
}

/// 校验一条原始记录，返回全部结构问题（为空表示合法）
pub fn validate_question(record: &RawRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    // 1. 必填字段
    for field in REQUIRED_FIELDS {
        if !record.contains_key(field) {
            violations.push(Violation::MissingField(field));
        }
    }

    // 2. 答案列表
    if let Some(answers) = record.get("answers") {
        match answers {
            JsonValue::Array(items) if items.len() != ANSWER_COUNT => {
                violations.push(Violation::WrongAnswerCount(items.len()));
            }
            JsonValue::Array(_) => {}
            _ => violations.push(Violation::AnswersNotList),
        }
    }

    // 3. 正确答案索引
    if let Some(correct) = record.get("correct") {
        if !matches!(correct.as_u64(), Some(idx) if idx < ANSWER_COUNT as u64) {
            violations.push(Violation::InvalidCorrect);
        }
    }

    // 4. 字段类型
    for field in ["id", "question"] {
        if matches!(record.get(field), Some(value) if !value.is_string()) {
            violations.push(Violation::NotAString(field));
        }
    }
    if let Some(JsonValue::Array(items)) = record.get("answers") {
        for (idx, item) in items.iter().enumerate() {
            if !item.is_string() {
                violations.push(Violation::AnswerNotAString(idx));
            }
        }
    }
    for field in OPTIONAL_STRING_FIELDS {
        if matches!(record.get(field), Some(value) if !value.is_string() && !value.is_null()) {
            violations.push(Violation::NotAString(field));
        }
    }

    violations
}
