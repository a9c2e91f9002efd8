//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量导入和流程调度。
//!
//! ### `batch_importer` - 批量导入器
//! - 管理应用生命周期（加载题库、导入、合并、保存）
//! - 输出全局统计信息
//!
//! ### `file_importer` - 单个源文件导入器
//! - 遍历单个文件的所有记录
//! - 输出文件内重复提示
//!
//! ## 层次关系
//!
//! ```text
//! batch_importer (处理 Vec<源文件>)
//!     ↓
//! file_importer (处理 Vec<记录>)
//!     ↓
//! workflow::ImportFlow (处理单条记录)
//!     ↓
//! services (能力层：validate / dedup / categorize / merge / write)
//! ```

pub mod batch_importer;
pub mod file_importer;

pub use batch_importer::{App, RunSummary};
pub use file_importer::{import_file, ImportReport, InvalidRecord, SkippedRecord};
