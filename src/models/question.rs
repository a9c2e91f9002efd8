use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

/// 从源文件读出的原始记录，尚未校验
pub type RawRecord = Map<String, JsonValue>;

/// 缺少 id 时在报告中使用的占位符
pub const MISSING_ID: &str = "BRAK_ID";

/// 题目记录的类型化视图
///
/// 只用于校验后的判断（查重、分类），写回题库的始终是原始记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answers: Vec<String>,
    pub correct: u8,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "visualType", default)]
    pub visual_type: Option<String>,
}

impl Question {
    /// 从已通过校验的原始记录构造类型化视图
    pub fn from_record(record: &RawRecord) -> Result<Self, serde_json::Error> {
        serde_json::from_value(JsonValue::Object(record.clone()))
    }
}

/// 被接受的题目：类型化视图 + 原样保留的原始记录
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedQuestion {
    pub question: Question,
    pub record: RawRecord,
}

impl AcceptedQuestion {
    pub fn id(&self) -> &str {
        &self.question.id
    }
}

/// 读取原始记录中的字符串字段，缺失或非字符串时为空串
pub fn record_str<'a>(record: &'a RawRecord, field: &str) -> &'a str {
    record.get(field).and_then(JsonValue::as_str).unwrap_or("")
}

/// 读取原始记录的 id，用于报告
pub fn record_id(record: &RawRecord) -> String {
    match record.get("id") {
        Some(JsonValue::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => MISSING_ID.to_string(),
    }
}
