use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 可选的配置文件名（与可执行文件同目录运行）
pub const CONFIG_FILE: &str = "import_config.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待导入的源文件（按顺序处理）
    pub source_files: Vec<String>,
    /// 主题库文件
    pub main_db_file: String,
    /// 备份文件后缀
    pub backup_suffix: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 汇总中最多展示的无效题目数
    pub max_invalid_preview: usize,
    /// 汇总中最多展示的跳过题目数
    pub max_skipped_preview: usize,
    /// 单个文件内最多展示的重复项数
    pub max_in_file_duplicate_preview: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_files: vec![
                "baza-pytan-500plus.json".to_string(),
                "dodatkowe-pytania.json".to_string(),
                "pytania-cleaned.json".to_string(),
                "dodatkowe-pytania-150.json".to_string(),
            ],
            main_db_file: "questions-polish.json".to_string(),
            backup_suffix: ".backup".to_string(),
            verbose_logging: false,
            max_invalid_preview: 10,
            max_skipped_preview: 5,
            max_in_file_duplicate_preview: 5,
        }
    }
}

impl Config {
    /// 配置文件存在时读取，否则使用默认值
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        toml::from_str(&content)
            .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))
    }

    /// 备份文件路径：主题库路径 + 后缀
    pub fn backup_file(&self) -> String {
        format!("{}{}", self.main_db_file, self.backup_suffix)
    }
}
