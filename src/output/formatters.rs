//! Output Formatters Implementation
//!
//! 各出力フォーマットの実装を提供するモジュール。

use std::borrow::Cow;
use std::io::Write;

use crate::error::SheetDigestError;
use crate::formatter::Record;
use crate::grouping::Digest;
use crate::styles::{ANCHOR, BASE_SPAN, BOLD_SPAN, LINK_SPAN, MEMBERS_SPAN};

/// HTML出力でのレコード区切り
pub(crate) const LINE_BREAK: &str = "<br>";

/// HTML特殊文字（`& < > " '`）をエスケープ
pub(crate) fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}

/// インラインスタイル付きHTML形式のフォーマッター
pub(crate) struct HtmlFormatter;

impl HtmlFormatter {
    pub fn render_record(&self, record: &Record) -> String {
        let mut html = String::new();

        // 1. 状態と日付
        html.push_str(&span(
            BASE_SPAN,
            &format!("{} {} . ", record.status_emoji(), escape_html(&record.date)),
        ));

        // 2. プレフィックス
        if let Some(prefix) = &record.prefix {
            html.push_str(&span(BOLD_SPAN, &escape_html(prefix)));
            html.push_str(&span(BASE_SPAN, " - "));
        }

        // 3. タイトル（メインリンクがあればリンク）
        let name = escape_html(&record.name);
        match &record.link {
            Some(link) => html.push_str(&anchor(&link.url, &name)),
            None => html.push_str(&span(BASE_SPAN, &name)),
        }

        // 4. ソース注記
        if !record.sources.is_empty() {
            html.push_str(&span(BASE_SPAN, " - "));
            let anchors: Vec<String> = record
                .sources
                .iter()
                .map(|link| anchor(&link.url, &escape_html(&link.label)))
                .collect();
            html.push_str(&anchors.join(span(BASE_SPAN, " | ").as_str()));
        }

        // 5. メンバー
        if !record.members.is_empty() {
            html.push_str(&span(BASE_SPAN, " - "));
            html.push_str(&span(MEMBERS_SPAN, &escape_html(&record.members)));
        }

        html
    }

    pub fn render<W: Write>(
        &self,
        digest: &Digest,
        category_headers: bool,
        writer: &mut W,
    ) -> Result<(), SheetDigestError> {
        // レコードの無いカテゴリはDigestに含まれないため、空の見出しは出力されない
        let blocks: Vec<String> = digest
            .sections()
            .iter()
            .map(|section| {
                let records = section
                    .records
                    .iter()
                    .map(|record| self.render_record(record))
                    .collect::<Vec<_>>()
                    .join(LINE_BREAK);
                if category_headers {
                    format!(
                        "<h3 class=\"category-header\">{}</h3>{}",
                        escape_html(&section.category),
                        records
                    )
                } else {
                    records
                }
            })
            .collect();

        // 見出しがブロック要素として改行を担うため、見出しありの場合は区切りなし
        let separator = if category_headers { "" } else { LINE_BREAK };
        write!(writer, "{}", blocks.join(separator))?;
        writer.flush()?;
        Ok(())
    }
}

fn span(style: &str, content: &str) -> String {
    format!("<span style=\"{}\">{}</span>", style, content)
}

fn anchor(url: &str, content: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"{}\">{}</a>",
        escape_html(url),
        ANCHOR,
        span(LINK_SPAN, content)
    )
}

/// プレーンテキスト形式のフォーマッター
pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn render_record(&self, record: &Record) -> String {
        let mut text = format!("{} {} . ", record.status_emoji(), record.date);

        if let Some(prefix) = &record.prefix {
            text.push_str(prefix);
            text.push_str(" - ");
        }

        text.push_str(&record.name);

        if !record.sources.is_empty() {
            let labels: Vec<&str> = record
                .sources
                .iter()
                .map(|link| link.label.as_str())
                .collect();
            text.push_str(" - ");
            text.push_str(&labels.join(" | "));
        }

        if !record.members.is_empty() {
            text.push_str(" - ");
            text.push_str(&record.members);
        }

        text
    }

    pub fn render<W: Write>(
        &self,
        digest: &Digest,
        category_headers: bool,
        writer: &mut W,
    ) -> Result<(), SheetDigestError> {
        // レコードの無いカテゴリはDigestに含まれないため、空の見出しは出力されない
        let blocks: Vec<String> = digest
            .sections()
            .iter()
            .map(|section| {
                let records = section
                    .records
                    .iter()
                    .map(|record| self.render_record(record))
                    .collect::<Vec<_>>()
                    .join("\n");
                if category_headers {
                    format!("## {}\n{}", section.category, records)
                } else {
                    records
                }
            })
            .collect();

        let separator = if category_headers { "\n\n" } else { "\n" };
        write!(writer, "{}", blocks.join(separator))?;
        writer.flush()?;
        Ok(())
    }
}

/// JSON形式のフォーマッター
pub(crate) struct JsonFormatter;

impl JsonFormatter {
    pub fn render_record(&self, record: &Record) -> String {
        serde_json::json!(record).to_string()
    }

    pub fn render<W: Write>(&self, digest: &Digest, writer: &mut W) -> Result<(), SheetDigestError> {
        serde_json::to_writer_pretty(&mut *writer, digest)?;
        writer.flush()?;
        Ok(())
    }
}
