//! Links Module
//!
//! 候補リンク列からメインリンクを選び、残りのリンクを「ソース」注記として
//! ラベル付けするモジュール。

use std::borrow::Cow;

use tracing::trace;

use crate::api::LinkPolicy;
use crate::types::{Link, Row, ALTERNATE_COLUMN, OFFICIAL_COLUMN, SUB_COLUMN};

/// 常に元のラベルで表示される検索リンクのラベル
pub const YOUTUBE_SEARCH_LABEL: &str = "YouTube Search";

/// 1行分の候補リンク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkCandidates<'a> {
    /// 公式リンク列
    pub official: &'a [Link],

    /// 代替ソースリンク列
    pub alternate: &'a [Link],

    /// サブ（主）リンク列。`"None"`などのテキストセルは空として扱う
    pub sub: &'a [Link],
}

impl<'a> LinkCandidates<'a> {
    /// 行の位置からリンク列を取り出す
    pub fn from_row(row: &'a Row) -> Self {
        Self {
            official: row.links_at(OFFICIAL_COLUMN),
            alternate: row.links_at(ALTERNATE_COLUMN),
            sub: row.links_at(SUB_COLUMN),
        }
    }

    /// サブリンクが存在するかどうか
    ///
    /// サブ列が空でないリンクセルの場合のみ`true`です。
    /// テキストの`"None"`や空文字列はどちらも「存在しない」とみなします。
    pub fn has_sub(&self) -> bool {
        !self.sub.is_empty()
    }
}

/// リンク選択の結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkSelection {
    /// タイトルに付与するメインリンク
    pub main: Option<Link>,

    /// ソース注記として処理するリンク（元の順序）
    pub sources: Vec<Link>,
}

/// 方式に従ってメインリンクとソースリンクを選ぶ
pub fn select_links(candidates: &LinkCandidates<'_>, policy: LinkPolicy) -> LinkSelection {
    let selection = match policy {
        LinkPolicy::Rich => select_rich(candidates),
        LinkPolicy::Simple => select_simple(candidates),
    };
    trace!(
        ?policy,
        has_main = selection.main.is_some(),
        sources = selection.sources.len(),
        "link selection"
    );
    selection
}

fn select_rich(candidates: &LinkCandidates<'_>) -> LinkSelection {
    let LinkCandidates {
        official,
        alternate,
        sub,
    } = *candidates;

    match (sub, official, alternate) {
        ([only], _, _) => LinkSelection {
            main: Some(only.clone()),
            sources: official.iter().chain(alternate).cloned().collect(),
        },
        (_, [only], []) => LinkSelection {
            main: Some(only.clone()),
            sources: Vec::new(),
        },
        (_, [], [only]) => LinkSelection {
            main: Some(only.clone()),
            sources: Vec::new(),
        },
        _ => LinkSelection {
            main: None,
            sources: official.iter().chain(alternate).cloned().collect(),
        },
    }
}

fn select_simple(candidates: &LinkCandidates<'_>) -> LinkSelection {
    let main = match (candidates.sub, candidates.official) {
        ([only], _) => Some(only.clone()),
        (_, [only]) => Some(only.clone()),
        _ => None,
    };
    LinkSelection {
        main,
        sources: Vec::new(),
    }
}

/// ソースリンクに表示ラベルを付け、表示順に並べる
///
/// - 検索リンク（[`YOUTUBE_SEARCH_LABEL`]）は常に元のラベルで、最後に並ぶ
/// - それ以外が1件だけで検索リンクが無い場合、メインリンクがあれば`"Source"`
/// - それ以外が複数、または検索リンクもある場合、メインリンクがあれば`"Source 1"`, `"Source 2"`, …
/// - メインリンクが無い場合は元のラベルのまま
pub fn annotate_sources(sources: &[Link], has_main: bool) -> Vec<Link> {
    let (search, others): (Vec<&Link>, Vec<&Link>) = sources
        .iter()
        .partition(|link| link.label == YOUTUBE_SEARCH_LABEL);

    let single = others.len() == 1 && search.is_empty();
    let mut annotated: Vec<Link> = others
        .into_iter()
        .enumerate()
        .map(|(index, link)| {
            let label = match (has_main, single) {
                (false, _) => link.label.clone(),
                (true, true) => "Source".to_string(),
                (true, false) => format!("Source {}", index + 1),
            };
            Link::new(label, link.url.clone())
        })
        .collect();

    annotated.extend(search.into_iter().cloned());
    annotated
}

/// スキーム（`://`）の無いURLに`https://`を付与する
pub fn normalize_url(url: &str) -> Cow<'_, str> {
    if url.contains("://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{}", url))
    }
}
