//! 分类规则表
//!
//! 前缀表、关键词分层和分类模板都是不可变配置，由入口传入流水线。
//! 内置默认值来自下面的静态表，也可以从 TOML 构造替换版本。

use crate::error::{AppError, AppResult};
use crate::models::bank::Category;
use indexmap::IndexMap;
use phf::phf_ordered_map;
use serde::{Deserialize, Serialize};

/// ID 前缀 → 分类。按声明顺序匹配，`geo_world_` 必须排在 `geo_` 之前
static CATEGORY_PREFIXES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "sci_" => "nauka_polska",
    "tech_" => "nauka_polska",
    "geo_world_" => "geografia_swiata",
    "geo_" => "geografia_polski",
    "hist_world_" => "historia_swiata",
    "hist_" => "historia_polski",
    "sport_" => "sport_polski",
    "cult_" => "kultura_polska",
    "art_" => "kultura_polska",
    "lit_" => "kultura_polska",
    "ent_" => "rozrywka_polska",
    "film_" => "rozrywka_polska",
    "music_" => "rozrywka_polska",
};

/// 可自动创建的分类模板：(名称, 颜色, 图标)
static CATEGORY_TEMPLATES: phf::OrderedMap<&'static str, (&'static str, &'static str, &'static str)> = phf_ordered_map! {
    "nauka_polska" => ("Nauka i Wynalazki", "#4169E1", "🔬"),
    "geografia_swiata" => ("Geografia Świata", "#228B22", "🌍"),
    "historia_swiata" => ("Historia Świata", "#8B4513", "🌍"),
};

const POLISH_LOCALE_KEYWORDS: &[&str] = &["polska", "polsk", "polsce", "warszawa", "kraków", "wisła"];

const POLISH_TOPICS: &[(&[&str], &str)] = &[
    (&["historia", "król", "wojna", "bitwa"], "historia_polski"),
    (&["rzeka", "góra", "miasto", "województwo"], "geografia_polski"),
    (&["kultura", "literatura", "chopin", "mickiewicz"], "kultura_polska"),
    (&["sport", "piłka", "skoki", "medal"], "sport_polski"),
];

const GENERAL_TOPICS: &[(&[&str], &str)] = &[
    (&["chromosom", "atom", "chemia", "fizyka", "biologia"], "nauka_polska"),
    (&["rzeka", "kontynent", "stolica", "kraj"], "geografia_swiata"),
    (&["wojna światowa", "napoleon", "hitler"], "historia_swiata"),
];

/// ID 前缀规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub prefix: String,
    pub category: String,
}

/// 关键词规则：题干包含任一关键词即命中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub category: String,
}

/// 分类模板
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl CategoryTemplate {
    /// 生成一个空分类
    pub fn instantiate(&self) -> Category {
        Category {
            name: self.name.clone(),
            color: self.color.clone(),
            icon: self.icon.clone(),
            questions: Vec::new(),
            extra: Default::default(),
        }
    }
}

/// 分类规则全集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub prefix_rules: Vec<PrefixRule>,
    /// 第一层：波兰本地词
    pub locale_keywords: Vec<String>,
    /// 第二层：命中本地词后细分主题
    pub locale_topics: Vec<KeywordRule>,
    /// 本地词命中但主题都未命中时的分类
    pub locale_fallback: String,
    /// 未命中本地词时的通用主题
    pub general_topics: Vec<KeywordRule>,
    pub default_category: String,
    pub templates: IndexMap<String, CategoryTemplate>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            prefix_rules: CATEGORY_PREFIXES
                .entries()
                .map(|(prefix, category)| PrefixRule {
                    prefix: prefix.to_string(),
                    category: category.to_string(),
                })
                .collect(),
            locale_keywords: to_strings(POLISH_LOCALE_KEYWORDS),
            locale_topics: to_rules(POLISH_TOPICS),
            locale_fallback: "kultura_polska".to_string(),
            general_topics: to_rules(GENERAL_TOPICS),
            default_category: "nauka_polska".to_string(),
            templates: CATEGORY_TEMPLATES
                .entries()
                .map(|(id, (name, color, icon))| {
                    (
                        id.to_string(),
                        CategoryTemplate {
                            name: name.to_string(),
                            color: color.to_string(),
                            icon: icon.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl Taxonomy {
    /// 从 TOML 文本构造规则表
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::toml_parse_failed("<taxonomy>", e))
    }

    /// 查找分类模板
    pub fn template(&self, category: &str) -> Option<&CategoryTemplate> {
        self.templates.get(category)
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_rules(table: &[(&[&str], &str)]) -> Vec<KeywordRule> {
    table
        .iter()
        .map(|(keywords, category)| KeywordRule {
            keywords: to_strings(keywords),
            category: category.to_string(),
        })
        .collect()
}
