//! Formatter Module
//!
//! 1行分のセルから、出力前の構造化レコードを組み立てるモジュール。
//! 実際の文字列化（HTML / プレーンテキスト / JSON）は`output`モジュールが担当します。

use std::borrow::Cow;

use serde::Serialize;

use crate::builder::DigestOptions;
use crate::links::{annotate_sources, normalize_url, select_links, LinkCandidates};
use crate::members::resolve_initials;
use crate::title::{ParsedTitle, UNTITLED};
use crate::types::{Link, Row, DATE_COLUMN, TITLE_COLUMN};

/// サブリンクがある行の状態表示
pub const SUBBED_EMOJI: &str = "\u{2714}\u{fe0f}";

/// サブリンクが無い行の状態表示
pub const MISSING_EMOJI: &str = "\u{274c}";

/// 1行分のレコード
///
/// 一度生成されたら変更されません。出力フォーマッターはこの値だけを見て
/// 文字列を生成します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// サブリンクがあるかどうか
    pub has_sub: bool,

    /// 日付（エスケープ前）
    pub date: String,

    /// 表示するプレフィックス（表示設定が無効の場合は`None`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// 表示名
    pub name: String,

    /// タイトルに付与するリンク（URLは正規化済み）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// ソース注記（表示ラベル付与済み、表示順）
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Link>,

    /// メンバー名の列挙（無い場合は空文字列）
    #[serde(skip_serializing_if = "String::is_empty")]
    pub members: String,
}

impl Record {
    /// 状態表示の絵文字
    pub fn status_emoji(&self) -> &'static str {
        if self.has_sub {
            SUBBED_EMOJI
        } else {
            MISSING_EMOJI
        }
    }
}

/// レコードフォーマッター
///
/// 行からレコードを組み立てる処理のファサードとして機能します。
#[derive(Debug, Default)]
pub(crate) struct RecordFormatter;

impl RecordFormatter {
    /// 新しいRecordFormatterインスタンスを生成
    pub fn new() -> Self {
        Self
    }

    /// 行をレコードに変換
    ///
    /// # 引数
    ///
    /// * `row` - テーブル抽出器が生成した行
    /// * `options` - ダイジェスト設定
    ///
    /// # 戻り値
    ///
    /// * `Some(Record)` - 整形対象の行の場合
    /// * `None` - セル数不足、または日付とタイトルが両方空の場合
    pub fn build_record(&self, row: &Row, options: &DigestOptions) -> Option<Record> {
        if !row.is_eligible() {
            return None;
        }

        // 1. タイトルの分解
        let full_title = row.text_at(TITLE_COLUMN);
        let full_title = if full_title.is_empty() {
            Cow::Borrowed(UNTITLED)
        } else {
            full_title
        };
        let parsed = ParsedTitle::parse(&full_title);

        // 2. リンクの選択
        let candidates = LinkCandidates::from_row(row);
        let selection = select_links(&candidates, options.link_policy);
        let has_main = selection.main.is_some();
        let link = selection.main.map(normalize_link);
        let sources = annotate_sources(&selection.sources, has_main)
            .into_iter()
            .map(normalize_link)
            .collect();

        // 3. メンバー名の解決
        let members = resolve_initials(&parsed.initials, &options.members);

        // 4. プレフィックス（表示設定が有効で、空でない場合のみ）
        let prefix = parsed
            .prefix
            .filter(|prefix| options.show_prefix && !prefix.is_empty());

        Some(Record {
            has_sub: candidates.has_sub(),
            date: row.text_at(DATE_COLUMN).into_owned(),
            prefix,
            name: parsed.name,
            link,
            sources,
            members,
        })
    }
}

fn normalize_link(link: Link) -> Link {
    let url = normalize_url(&link.url).into_owned();
    Link {
        label: link.label,
        url,
    }
}
