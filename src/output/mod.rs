//! Output Format Module
//!
//! Strategy Patternによる出力フォーマットの抽象化を提供するモジュール。

mod formatters;

use crate::error::SheetDigestError;
use crate::formatter::Record;
use crate::grouping::Digest;
use std::io::Write;

pub(crate) use formatters::*;

/// 出力フォーマッター（Strategy Pattern）
///
/// 各出力フォーマット（HTML, プレーンテキスト, JSON）をenumとして表現します。
#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormatter {
    Html,
    PlainText,
    Json,
}

impl OutputFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: crate::api::OutputFormat) -> Self {
        match format {
            crate::api::OutputFormat::Html => OutputFormatter::Html,
            crate::api::OutputFormat::PlainText => OutputFormatter::PlainText,
            crate::api::OutputFormat::Json => OutputFormatter::Json,
        }
    }

    /// 1レコードを1行の文字列に変換する
    pub fn render_record(&self, record: &Record) -> String {
        match self {
            OutputFormatter::Html => HtmlFormatter.render_record(record),
            OutputFormatter::PlainText => PlainTextFormatter.render_record(record),
            OutputFormatter::Json => JsonFormatter.render_record(record),
        }
    }

    /// ダイジェスト全体を指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `digest` - 出力するダイジェスト
    /// * `category_headers` - カテゴリごとに見出しを出力するか
    /// * `writer` - 出力先のライター
    pub fn render<W: Write>(
        &self,
        digest: &Digest,
        category_headers: bool,
        writer: &mut W,
    ) -> Result<(), SheetDigestError> {
        match self {
            OutputFormatter::Html => HtmlFormatter.render(digest, category_headers, writer),
            OutputFormatter::PlainText => {
                PlainTextFormatter.render(digest, category_headers, writer)
            }
            OutputFormatter::Json => JsonFormatter.render(digest, writer),
        }
    }
}
