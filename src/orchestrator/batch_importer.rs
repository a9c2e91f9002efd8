//! 批量导入器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的导入会话。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载主题库（失败即终止）
//! 2. **批量导入**：按固定顺序处理所有源文件
//! 3. **合并**：分类并写入主题库
//! 4. **持久化**：先备份再覆盖主文件（失败即终止）
//! 5. **全局统计**：输出汇总信息

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_bank, QuestionBank, Taxonomy};
use crate::orchestrator::file_importer::{import_file, ImportReport};
use crate::services::{BankMerger, BankWriter, DuplicateDetector, MergeOutcome};
use crate::utils::logging;
use crate::workflow::ImportFlow;
use std::path::Path;
use tracing::{error, info};

/// 一次运行的结果
#[derive(Debug, Default)]
pub struct RunSummary {
    pub accepted: usize,
    pub skipped: usize,
    pub invalid: usize,
    pub merge: MergeOutcome,
    /// 是否写入了题库文件
    pub persisted: bool,
}

/// 应用主结构
pub struct App {
    config: Config,
    taxonomy: Taxonomy,
    bank: QuestionBank,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, taxonomy: Taxonomy) -> AppResult<Self> {
        logging::log_startup(&config);

        info!("📖 正在加载主题库: {}", config.main_db_file);
        let bank = load_bank(Path::new(&config.main_db_file)).inspect_err(|e| {
            error!("❌ 无法加载主题库: {}", e);
        })?;

        info!(
            "📊 现有题库: {} 道题目, {} 个分类",
            bank.total_questions(),
            bank.categories.len()
        );

        Ok(Self {
            config,
            taxonomy,
            bank,
        })
    }

    /// 运行导入主逻辑
    pub fn run(&mut self) -> AppResult<RunSummary> {
        let report = self.import_all();
        logging::log_validation_summary(&report, &self.config);

        let mut summary = RunSummary {
            accepted: report.accepted.len(),
            skipped: report.skipped.len(),
            invalid: report.invalid.len(),
            ..Default::default()
        };

        if report.accepted.is_empty() {
            info!("\n🎯 没有需要添加的新题目!");
            return Ok(summary);
        }

        let merger = BankMerger::new(&self.taxonomy);
        summary.merge = merger.merge(&mut self.bank, report.accepted);

        let writer = BankWriter::new(&self.config.main_db_file, self.config.backup_file());
        writer.persist(&self.bank).inspect_err(|e| {
            error!("❌ 保存题库失败: {}", e);
        })?;
        summary.persisted = true;

        logging::print_final_stats(&self.bank, &summary.merge);

        Ok(summary)
    }

    /// 当前内存中的题库
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// 依次导入所有源文件
    fn import_all(&self) -> ImportReport {
        let detector = DuplicateDetector::from_bank(&self.bank);
        info!("🔍 查重基线: {} 个已有 ID", detector.known_ids());
        let mut flow = ImportFlow::new(detector);
        let mut report = ImportReport::default();

        for source_file in &self.config.source_files {
            import_file(&mut flow, Path::new(source_file), &self.config, &mut report);
        }

        report
    }
}
