//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。
//! 列の意味は見出し名ではなく位置（0始まりのインデックス）で固定されています。

use std::borrow::Cow;

use serde::Serialize;

/// 日付列
pub(crate) const DATE_COLUMN: usize = 1;
/// タイトル列（角括弧のプレフィックスと括弧内のイニシャルを含む）
pub(crate) const TITLE_COLUMN: usize = 2;
/// カテゴリ列
pub(crate) const CATEGORY_COLUMN: usize = 3;
/// 公式リンク列
pub(crate) const OFFICIAL_COLUMN: usize = 4;
/// 代替ソースリンク列
pub(crate) const ALTERNATE_COLUMN: usize = 5;
/// サブ（主）リンク列。リンクが無い場合は`"None"`などのテキスト
pub(crate) const SUB_COLUMN: usize = 8;

/// 整形対象となる行の最小セル数
pub const MIN_ROW_LEN: usize = 9;

/// ハイパーリンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// アンカーの表示テキスト（前後の空白を除去済み）
    pub label: String,

    /// リンク先URL
    pub url: String,
}

impl Link {
    /// 新しいリンクを生成
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// テキスト（前後の空白を除去済み）
    Text(String),

    /// 1件以上のハイパーリンク（文書内の出現順）
    Links(Vec<Link>),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}

impl Cell {
    /// テキストセルを生成
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// リンクセルを生成
    pub fn links(links: Vec<Link>) -> Self {
        Cell::Links(links)
    }

    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Text(s) => s.is_empty(),
            Cell::Links(links) => links.is_empty(),
        }
    }

    /// セルをテキストとして取得
    ///
    /// リンクセルの場合は各リンクの表示テキストを半角スペースで連結します。
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s.as_str()),
            Cell::Links(links) => Cow::Owned(
                links
                    .iter()
                    .map(|link| link.label.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }

    /// セルをリンク列として取得（テキストセルは空スライス）
    pub fn as_links(&self) -> &[Link] {
        match self {
            Cell::Links(links) => links,
            Cell::Text(_) => &[],
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Vec<Link>> for Cell {
    fn from(links: Vec<Link>) -> Self {
        Cell::Links(links)
    }
}

/// スプレッドシートの1行
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// セル列から行を生成
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// セル一覧
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// セル数
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// セルが1つも無いかどうか
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 指定位置のセル
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// 指定位置のテキスト（セルが無い場合は空文字列）
    pub(crate) fn text_at(&self, index: usize) -> Cow<'_, str> {
        self.get(index).map(Cell::as_text).unwrap_or(Cow::Borrowed(""))
    }

    /// 指定位置のリンク（セルが無い、またはテキストの場合は空）
    pub(crate) fn links_at(&self, index: usize) -> &[Link] {
        self.get(index).map(Cell::as_links).unwrap_or(&[])
    }

    /// 整形対象となる行かどうか
    ///
    /// セル数が[`MIN_ROW_LEN`]以上で、日付列とタイトル列の少なくとも一方が
    /// 空でない場合に`true`を返します。
    pub fn is_eligible(&self) -> bool {
        self.len() >= MIN_ROW_LEN && self.has_date_or_title()
    }

    /// 日付列とタイトル列の少なくとも一方が空でないかどうか
    pub(crate) fn has_date_or_title(&self) -> bool {
        !self.text_at(DATE_COLUMN).is_empty() || !self.text_at(TITLE_COLUMN).is_empty()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with(len: usize, date: &str, title: &str) -> Row {
        let mut cells = vec![Cell::default(); len];
        if len > DATE_COLUMN {
            cells[DATE_COLUMN] = Cell::text(date);
        }
        if len > TITLE_COLUMN {
            cells[TITLE_COLUMN] = Cell::text(title);
        }
        Row::new(cells)
    }

    #[test]
    fn test_cell_default_is_empty_text() {
        assert_eq!(Cell::default(), Cell::Text(String::new()));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_cell_as_text_for_links() {
        let cell = Cell::links(vec![
            Link::new("Part 1", "https://example.com/1"),
            Link::new("Part 2", "https://example.com/2"),
        ]);
        assert_eq!(cell.as_text(), "Part 1 Part 2");
        assert_eq!(cell.as_links().len(), 2);
    }

    #[test]
    fn test_text_cell_has_no_links() {
        assert!(Cell::text("None").as_links().is_empty());
    }

    #[test]
    fn test_row_accessors_out_of_range() {
        let row = Row::new(vec![Cell::text("a")]);
        assert_eq!(row.text_at(5), "");
        assert!(row.links_at(5).is_empty());
        assert!(row.get(5).is_none());
    }

    #[test]
    fn test_row_eligibility() {
        assert!(row_with(9, "2024-05-01", "").is_eligible());
        assert!(row_with(9, "", "Title").is_eligible());
        assert!(!row_with(9, "", "").is_eligible());
        assert!(!row_with(8, "2024-05-01", "Title").is_eligible());
        assert!(!Row::default().is_eligible());
    }

    #[test]
    fn test_row_from_iterator() {
        let row: Row = ["x", "y", "z"].into_iter().map(Cell::from).collect();
        assert_eq!(row.len(), 3);
        assert_eq!(row.text_at(1), "y");
    }
}
