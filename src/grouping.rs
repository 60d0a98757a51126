//! Grouping Module
//!
//! 行をカテゴリ列で分類し、カテゴリごとのレコード集合（ダイジェスト）を構築するモジュール。
//! カテゴリは最初に現れた順、カテゴリ内の行は入力順を保持します。

use std::collections::HashMap;

use serde::Serialize;

use crate::formatter::Record;
use crate::types::{Row, CATEGORY_COLUMN};

/// 同じカテゴリに属する行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'r> {
    /// カテゴリ名（空の場合はフォールバック名）
    pub category: String,

    /// 入力順の行
    pub rows: Vec<&'r Row>,
}

/// 行をカテゴリごとに分類する
///
/// カテゴリ列に届かない行と、日付・タイトルが両方空の行は分類前に除外されます。
/// カテゴリ列が空の行は`fallback`の名前で分類されます。
pub fn group_by_category<'r>(rows: &'r [Row], fallback: &str) -> Vec<CategoryGroup<'r>> {
    let mut groups: Vec<CategoryGroup<'r>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        if row.len() <= CATEGORY_COLUMN || !row.has_date_or_title() {
            continue;
        }

        let category = row.text_at(CATEGORY_COLUMN);
        let category = if category.is_empty() {
            fallback.to_string()
        } else {
            category.into_owned()
        };

        match positions.get(&category) {
            Some(&position) => groups[position].rows.push(row),
            None => {
                positions.insert(category.clone(), groups.len());
                groups.push(CategoryGroup {
                    category,
                    rows: vec![row],
                });
            }
        }
    }

    groups
}

/// 1カテゴリ分のレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestSection {
    /// カテゴリ名
    pub category: String,

    /// 整形済みレコード（入力順）
    pub records: Vec<Record>,
}

/// カテゴリごとに分類されたレコード全体
///
/// レコードが1件も無いカテゴリは含まれません。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Digest {
    sections: Vec<DigestSection>,
}

impl Digest {
    pub(crate) fn new(sections: Vec<DigestSection>) -> Self {
        Self { sections }
    }

    /// カテゴリ一覧（最初に現れた順）
    pub fn sections(&self) -> &[DigestSection] {
        &self.sections
    }

    /// レコードが1件も無いかどうか
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// レコードの総数
    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|section| section.records.len()).sum()
    }
}
