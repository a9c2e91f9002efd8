use crate::error::{AppError, AppResult, BankError, FileError};
use crate::models::bank::QuestionBank;
use crate::models::question::RawRecord;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use tracing::{error, warn};

/// 从源文件加载待导入的原始记录
///
/// 文件可以是题目数组，也可以是带 `questions` 数组的对象。
/// 文件无法读取、无法解析或结构未知时只记录日志并返回空列表，不向上抛错。
/// 文件是否存在由调用方在处理前判断。
pub fn load_question_file(path: &Path) -> Vec<RawRecord> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("❌ 读取文件 {} 失败: {}", path.display(), e);
            return Vec::new();
        }
    };

    let data: JsonValue = match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(e) => {
            error!("❌ 文件 {} JSON 解析失败: {}", path.display(), e);
            return Vec::new();
        }
    };

    let items = match data {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut map) => match map.remove("questions") {
            Some(JsonValue::Array(items)) => items,
            _ => {
                warn!("⚠️ 文件 {} 结构未知", path.display());
                return Vec::new();
            }
        },
        _ => {
            warn!("⚠️ 文件 {} 结构未知", path.display());
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match item {
            JsonValue::Object(record) => Some(record),
            other => {
                warn!(
                    "⚠️ 文件 {} 第 {} 条记录不是对象，跳过: {}",
                    path.display(),
                    idx + 1,
                    other
                );
                None
            }
        })
        .collect()
}

/// 加载主题库
///
/// 与源文件不同，主题库加载失败是致命错误
pub fn load_bank(path: &Path) -> AppResult<QuestionBank> {
    let path_str = path.display().to_string();
    if !path.exists() {
        return Err(FileError::NotFound { path: path_str }.into());
    }

    let content =
        fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&path_str, e))?;
    let bank: QuestionBank =
        serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(&path_str, e))?;

    if bank.is_empty() {
        return Err(BankError::Empty { path: path_str }.into());
    }

    Ok(bank)
}
