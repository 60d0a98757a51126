//! HTML Table Extractor
//!
//! scraperを使用して、スプレッドシートからコピーされたHTMLの`<table>`を
//! セルの行列に変換します。

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use super::TableExtractor;
use crate::types::{Cell, Link, Row};

/// HTMLテーブル抽出器
///
/// `href`の相対URLは、ベースURLが設定されている場合のみ絶対URLに解決します。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::{Cell, HtmlTableExtractor, TableExtractor};
///
/// let rows = HtmlTableExtractor::new().parse_table(
///     "<table><tr><td> a </td><td><a href=\"https://youtu.be/x\">MV</a></td></tr></table>",
/// );
/// assert_eq!(rows[0].get(0), Some(&Cell::text("a")));
/// assert_eq!(rows[0].get(1).map(|c| c.as_links().len()), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlTableExtractor {
    base_url: Option<Url>,
}

impl HtmlTableExtractor {
    /// ベースURLなしの抽出器を生成
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// 相対URLの解決に使うベースURLを指定して生成
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
        }
    }

    /// 1セル分の値を抽出
    ///
    /// リンクが1件以上あれば`Cell::Links`、無ければテキストを返します。
    fn extract_cell(&self, cell: ElementRef<'_>, link_selector: &Selector) -> Cell {
        let links: Vec<Link> = cell
            .select(link_selector)
            .map(|anchor| {
                let url = anchor
                    .value()
                    .attr("href")
                    .map(|href| self.resolve_href(href))
                    .unwrap_or_default();
                Link::new(element_text(anchor), url)
            })
            .collect();

        if links.is_empty() {
            Cell::Text(element_text(cell))
        } else {
            Cell::Links(links)
        }
    }

    /// `href`を絶対URLに解決
    fn resolve_href(&self, href: &str) -> String {
        let href = href.trim();
        match Url::parse(href) {
            Ok(url) => url.into(),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base
                    .join(href)
                    .map(String::from)
                    .unwrap_or_else(|_| href.to_string()),
                None => href.to_string(),
            },
            Err(_) => href.to_string(),
        }
    }
}

impl TableExtractor for HtmlTableExtractor {
    fn parse_table(&self, markup: &str) -> Vec<Row> {
        let (Ok(row_selector), Ok(cell_selector), Ok(link_selector)) = (
            Selector::parse("tr"),
            Selector::parse("td"),
            Selector::parse("a"),
        ) else {
            return Vec::new();
        };

        let document = Html::parse_document(markup);
        let rows: Vec<Row> = document
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| self.extract_cell(cell, &link_selector))
                    .collect()
            })
            .collect();

        debug!(rows = rows.len(), "extracted table rows");
        rows
    }
}

/// 要素内のテキストを連結し、前後の空白を除去
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
