//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::config::Config;
use crate::models::QuestionBank;
use crate::orchestrator::ImportReport;
use crate::services::MergeOutcome;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别为 info（`verbose` 时为 debug），可用 `RUST_LOG` 覆盖
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 正在导入题目到题库 {}", config.main_db_file);
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 输出校验阶段汇总，以及部分无效 / 跳过的题目
pub fn log_validation_summary(report: &ImportReport, config: &Config) {
    info!("\n📊 校验汇总:");
    info!("   ✅ 待添加的新题目: {}", report.accepted.len());
    info!("   ⏭️ 跳过（重复）: {}", report.skipped.len());
    info!("   ❌ 无效题目: {}", report.invalid.len());

    if !report.invalid.is_empty() {
        error!("\n❌ 无效题目:");
        for record in report.invalid.iter().take(config.max_invalid_preview) {
            error!(
                "   {} - {} [{}]: {}",
                record.source_file,
                record.id,
                record.fields.join(", "),
                record.reasons.join(", ")
            );
        }
    }

    if !report.skipped.is_empty() {
        warn!("\n⏭️ 跳过示例:");
        for record in report.skipped.iter().take(config.max_skipped_preview) {
            warn!("   {} - {}: {}", record.source_file, record.id, record.reason);
        }
    }
}

/// 打印最终统计信息
pub fn print_final_stats(bank: &QuestionBank, merge: &MergeOutcome) {
    info!("\n{}", "=".repeat(60));
    info!("🎉 成功! 新增 {} 道题目!", merge.total_added());
    if merge.total_dropped() > 0 {
        warn!("⚠️ 因分类未知被丢弃: {} 道题目", merge.total_dropped());
    }
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "📊 题库现有 {} 道题目, {} 个分类",
        bank.total_questions(),
        bank.categories.len()
    );
    for category in bank.categories.values() {
        info!(
            "   {}: {} 道题目",
            truncate_text(&category.name, 40),
            category.questions.len()
        );
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
