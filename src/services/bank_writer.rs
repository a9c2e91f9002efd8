//! 题库写入服务 - 业务能力层
//!
//! 只负责"把题库写到磁盘"：先写备份，再覆盖主文件。
//! 两次写入之间被中断时，备份和主文件可能不一致。

use crate::error::{AppError, AppResult};
use crate::models::bank::QuestionBank;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 题库写入服务
pub struct BankWriter {
    main_path: PathBuf,
    backup_path: PathBuf,
}

impl BankWriter {
    pub fn new(main_path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            main_path: main_path.into(),
            backup_path: backup_path.into(),
        }
    }

    /// 序列化为缩进 2 格的 JSON，非 ASCII 字符原样输出
    pub fn render(bank: &QuestionBank) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(bank)
    }

    /// 先写备份，再写主文件；任一步失败即返回错误
    pub fn persist(&self, bank: &QuestionBank) -> AppResult<()> {
        let content = Self::render(bank).map_err(|e| {
            AppError::json_serialize_failed(self.main_path.display().to_string(), e)
        })?;

        info!("💾 创建备份: {}", self.backup_path.display());
        write_file(&self.backup_path, &content)?;

        info!("💾 保存更新后的题库: {}", self.main_path.display());
        write_file(&self.main_path, &content)?;

        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content).map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
}
