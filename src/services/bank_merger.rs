//! 题库合并服务 - 业务能力层
//!
//! 按分类分组新题目，缺失的分类从模板创建，然后追加到对应分类末尾。
//! 没有模板的未知分类：记录警告并丢弃这些题目（不会加入任何分类）。

use crate::models::bank::QuestionBank;
use crate::models::question::{AcceptedQuestion, RawRecord};
use crate::models::taxonomy::Taxonomy;
use crate::services::categorizer::Categorizer;
use indexmap::IndexMap;
use tracing::{info, warn};

/// 合并结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// 分类 → 新增题目数
    pub added: IndexMap<String, usize>,
    /// 本次从模板新建的分类
    pub created_categories: Vec<String>,
    /// 未知分类 → 被丢弃的题目数
    pub dropped: IndexMap<String, usize>,
}

impl MergeOutcome {
    pub fn total_added(&self) -> usize {
        self.added.values().sum()
    }

    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }
}

/// 题库合并器
pub struct BankMerger<'a> {
    taxonomy: &'a Taxonomy,
    categorizer: Categorizer,
}

impl<'a> BankMerger<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self {
            taxonomy,
            categorizer: Categorizer::new(taxonomy),
        }
    }

    /// 按分类分组，保持首次出现的分类顺序和组内输入顺序
    ///
    /// 分类依据类型化视图，分组内保存的是原始记录
    pub fn group(&self, accepted: Vec<AcceptedQuestion>) -> IndexMap<String, Vec<RawRecord>> {
        let mut groups: IndexMap<String, Vec<RawRecord>> = IndexMap::new();
        for item in accepted {
            let category = self.categorizer.categorize(&item.question).to_string();
            groups.entry(category).or_default().push(item.record);
        }
        groups
    }

    /// 将新题目合并进主题库
    pub fn merge(
        &self,
        bank: &mut QuestionBank,
        accepted: Vec<AcceptedQuestion>,
    ) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        for (category, questions) in self.group(accepted) {
            if !bank.categories.contains_key(&category) {
                match self.taxonomy.template(&category) {
                    Some(template) => {
                        bank.categories
                            .insert(category.clone(), template.instantiate());
                        info!("➕ 新增分类: {}", category);
                        outcome.created_categories.push(category.clone());
                    }
                    None => {
                        warn!("⚠️ 未知分类: {}", category);
                        warn!(
                            "⚠️ 无法将 {} 道题目加入未知分类: {}",
                            questions.len(),
                            category
                        );
                        outcome.dropped.insert(category, questions.len());
                        continue;
                    }
                }
            }

            if let Some(bucket) = bank.categories.get_mut(&category) {
                let count = questions.len();
                bucket.questions.extend(questions);
                info!("➕ 向分类 '{}' 添加了 {} 道题目", category, count);
                outcome.added.insert(category, count);
            }
        }

        outcome
    }
}
