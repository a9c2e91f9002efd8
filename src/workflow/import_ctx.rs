//! 题目导入上下文
//!
//! 封装"我正在处理哪个文件的第几条记录"这一信息

use std::fmt::Display;

/// 题目导入上下文
#[derive(Debug, Clone)]
pub struct ImportCtx {
    /// 源文件名
    pub source_file: String,

    /// 记录在文件中的索引（从1开始）
    pub record_index: usize,
}

impl ImportCtx {
    pub fn new(source_file: impl Into<String>, record_index: usize) -> Self {
        Self {
            source_file: source_file.into(),
            record_index,
        }
    }
}

impl Display for ImportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 {} 记录#{}]", self.source_file, self.record_index)
    }
}
