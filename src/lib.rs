//! # Question Bank Import
//!
//! 将新生成的题目集合并到主题库（questions-polish.json），同时查重并自动分类
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、分类、题库结构，以及分类规则表 `Taxonomy`
//! - `models/loaders` - 读取源文件和主题库
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只负责一种能力
//! - `validator` - 结构校验
//! - `DuplicateDetector` - 查重
//! - `Categorizer` - 自动分类
//! - `BankMerger` - 合并进题库
//! - `BankWriter` - 备份并写回题库
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一条记录"的完整处理流程
//! - `ImportCtx` - 上下文封装（源文件 + 记录索引）
//! - `ImportFlow` - 流程编排（校验 → 转换 → 查重）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_importer` - 一次完整的导入会话
//! - `orchestrator/file_importer` - 单个源文件，遍历记录列表

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Question, QuestionBank, Taxonomy};
pub use orchestrator::{App, RunSummary};
pub use workflow::{ImportCtx, ImportFlow, ProcessResult};
