//! 题目导入流程 - 流程层
//!
//! 核心职责：定义"一条记录"的完整处理流程
//!
//! 流程顺序：
//! 1. 结构校验（不合法 → 无效）
//! 2. 转换为题目
//! 3. 查重（ID 重复 / 相似题干 → 跳过）
//! 4. 接受并登记

use tracing::debug;

use crate::models::question::{record_id, AcceptedQuestion, Question, RawRecord};
use crate::services::{validate_question, Duplicate, DuplicateDetector, Violation};
use crate::workflow::import_ctx::ImportCtx;

/// 单条记录的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    /// 接受
    Accepted(AcceptedQuestion),
    /// 结构不合法
    Invalid {
        id: String,
        /// 出问题的字段，按首次出现去重
        fields: Vec<&'static str>,
        reasons: Vec<String>,
    },
    /// 重复，跳过
    Duplicate { id: String, reason: Duplicate },
}

/// 题目导入流程
///
/// - 持有整个导入会话的查重状态
/// - 不关心文件和题库写入
pub struct ImportFlow {
    detector: DuplicateDetector,
}

impl ImportFlow {
    pub fn new(detector: DuplicateDetector) -> Self {
        Self { detector }
    }

    pub fn run(&mut self, record: RawRecord, ctx: &ImportCtx) -> ProcessResult {
        let id = record_id(&record);

        let violations = validate_question(&record);
        if !violations.is_empty() {
            debug!("{} 校验失败: {:?}", ctx, violations);
            let mut fields: Vec<&'static str> = Vec::new();
            for field in violations.iter().map(Violation::field) {
                if !fields.contains(&field) {
                    fields.push(field);
                }
            }
            return ProcessResult::Invalid {
                id,
                fields,
                reasons: violations.iter().map(Violation::to_string).collect(),
            };
        }

        let question = match Question::from_record(&record) {
            Ok(question) => question,
            Err(e) => {
                return ProcessResult::Invalid {
                    id,
                    fields: Vec::new(),
                    reasons: vec![e.to_string()],
                }
            }
        };

        match self.detector.admit(&question) {
            Ok(()) => {
                let accepted = AcceptedQuestion { question, record };
                debug!("{} ✓ 接受题目 {}", ctx, accepted.id());
                ProcessResult::Accepted(accepted)
            }
            Err(reason) => {
                debug!("{} 跳过题目 {}: {}", ctx, id, reason);
                ProcessResult::Duplicate { id, reason }
            }
        }
    }
}
