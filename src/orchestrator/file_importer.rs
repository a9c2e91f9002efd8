//! 单个源文件导入器 - 编排层
//!
//! ## 职责
//!
//! 1. **加载记录**：读取源文件（缺失或损坏时为空）
//! 2. **文件内查重提示**：只输出警告，不影响导入决定
//! 3. **流程调度**：逐条交给 `ImportFlow`
//! 4. **统计汇总**：把结果记入 `ImportReport`

use crate::config::Config;
use crate::models::question::AcceptedQuestion;
use crate::models::{load_question_file, RawRecord};
use crate::services::{find_in_file_duplicates, Duplicate};
use crate::workflow::{ImportCtx, ImportFlow, ProcessResult};
use std::path::Path;
use tracing::{info, warn};

/// 被跳过的重复记录
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub source_file: String,
    pub id: String,
    pub reason: Duplicate,
}

/// 无效记录
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecord {
    pub source_file: String,
    pub id: String,
    /// 出问题的字段名
    pub fields: Vec<&'static str>,
    pub reasons: Vec<String>,
}

/// 整个导入会话的统计
#[derive(Debug, Default)]
pub struct ImportReport {
    pub accepted: Vec<AcceptedQuestion>,
    pub skipped: Vec<SkippedRecord>,
    pub invalid: Vec<InvalidRecord>,
}

/// 导入单个源文件
///
/// # 参数
/// - `flow`: 导入流程（持有会话级查重状态）
/// - `path`: 源文件路径
/// - `config`: 配置
/// - `report`: 会话统计
///
/// 缺失的文件在这里跳过（只警告一次），不会交给加载器
pub fn import_file(flow: &mut ImportFlow, path: &Path, config: &Config, report: &mut ImportReport) {
    let source_file = path.display().to_string();

    if !path.exists() {
        warn!("⚠️ 文件 {} 不存在，跳过...", source_file);
        return;
    }

    info!("\n📂 正在处理: {}", source_file);
    let records = load_question_file(path);

    if records.is_empty() {
        warn!("⚠️ 文件 {} 中没有题目", source_file);
        return;
    }

    info!("📊 找到 {} 道题目", records.len());
    log_in_file_duplicates(&records, config.max_in_file_duplicate_preview);

    for (idx, record) in records.into_iter().enumerate() {
        let ctx = ImportCtx::new(source_file.clone(), idx + 1);
        match flow.run(record, &ctx) {
            ProcessResult::Accepted(question) => report.accepted.push(question),
            ProcessResult::Invalid {
                id,
                fields,
                reasons,
            } => report.invalid.push(InvalidRecord {
                source_file: source_file.clone(),
                id,
                fields,
                reasons,
            }),
            ProcessResult::Duplicate { id, reason } => report.skipped.push(SkippedRecord {
                source_file: source_file.clone(),
                id,
                reason,
            }),
        }
    }
}

fn log_in_file_duplicates(records: &[RawRecord], limit: usize) {
    let duplicates = find_in_file_duplicates(records);
    if duplicates.is_empty() {
        return;
    }
    warn!("⚠️ 文件内发现 {} 处重复:", duplicates.len());
    for duplicate in duplicates.iter().take(limit) {
        warn!("   - {}", duplicate);
    }
}
