//! 自动分类服务 - 业务能力层
//!
//! 规则链：按顺序求值，第一条命中的规则决定分类。
//!
//! 1. ID 前缀（声明顺序优先，不是最长匹配）
//! 2. 题干含波兰本地词 → 细分主题，均未命中则用本地兜底分类
//! 3. 通用主题：科学 → 世界地理 → 世界历史
//! 4. 默认分类

use crate::models::question::Question;
use crate::models::taxonomy::{KeywordRule, Taxonomy};

/// 匹配条件
#[derive(Debug, Clone)]
enum Matcher {
    /// ID 以该前缀开头
    IdPrefix(String),
    /// 小写题干包含任一关键词
    TextContainsAny(Vec<String>),
}

/// 命中后的去向
#[derive(Debug, Clone)]
enum Target {
    Category(String),
    /// 继续求值子规则链，都未命中时使用兜底分类
    Chain(Vec<Rule>, String),
}

#[derive(Debug, Clone)]
struct Rule {
    matcher: Matcher,
    target: Target,
}

impl Rule {
    fn keywords(rule: &KeywordRule) -> Self {
        Self {
            matcher: Matcher::TextContainsAny(rule.keywords.clone()),
            target: Target::Category(rule.category.clone()),
        }
    }

    fn matches(&self, id: &str, text: &str) -> bool {
        match &self.matcher {
            Matcher::IdPrefix(prefix) => id.starts_with(prefix.as_str()),
            Matcher::TextContainsAny(words) => words.iter().any(|w| text.contains(w.as_str())),
        }
    }
}

/// 题目分类器（纯函数，不修改任何状态）
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<Rule>,
    default_category: String,
}

impl Categorizer {
    /// 根据规则表构造规则链
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let mut rules: Vec<Rule> = taxonomy
            .prefix_rules
            .iter()
            .map(|r| Rule {
                matcher: Matcher::IdPrefix(r.prefix.clone()),
                target: Target::Category(r.category.clone()),
            })
            .collect();

        rules.push(Rule {
            matcher: Matcher::TextContainsAny(taxonomy.locale_keywords.clone()),
            target: Target::Chain(
                taxonomy.locale_topics.iter().map(Rule::keywords).collect(),
                taxonomy.locale_fallback.clone(),
            ),
        });

        rules.extend(taxonomy.general_topics.iter().map(Rule::keywords));

        Self {
            rules,
            default_category: taxonomy.default_category.clone(),
        }
    }

    /// 为题目确定唯一的分类 ID
    pub fn categorize(&self, question: &Question) -> &str {
        let text = question.question.to_lowercase();
        evaluate(&self.rules, &question.id, &text).unwrap_or(self.default_category.as_str())
    }
}

fn evaluate<'a>(rules: &'a [Rule], id: &str, text: &str) -> Option<&'a str> {
    let rule = rules.iter().find(|r| r.matches(id, text))?;
    match &rule.target {
        Target::Category(category) => Some(category.as_str()),
        Target::Chain(children, fallback) => {
            Some(evaluate(children, id, text).unwrap_or(fallback.as_str()))
        }
    }
}
