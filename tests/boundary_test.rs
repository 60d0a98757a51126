//! Boundary Tests for sheetdigest
//!
//! This module contains boundary tests: short rows, empty cells,
//! unusual markup and escaping of user-controlled text.

use sheetdigest::{
    Cell, DigestBuilder, Digester, Link, OutputFormat, Row, SheetDigestError, MIN_ROW_LEN,
};

// Helper module for generating boundary test fixtures
mod fixtures {
    use sheetdigest::{Cell, Row, MIN_ROW_LEN};

    /// A row of `len` empty text cells
    pub fn blank_row(len: usize) -> Row {
        vec![Cell::default(); len].into()
    }

    /// A full-width row with the given date, title and sub cell
    pub fn row_with(date: &str, title: &str, sub: Cell) -> Row {
        let mut cells = vec![Cell::default(); MIN_ROW_LEN];
        cells[1] = Cell::text(date);
        cells[2] = Cell::text(title);
        cells[8] = sub;
        cells.into()
    }

    pub fn table_of(len: usize, cell: &str) -> String {
        let cells: String = (0..len).map(|_| format!("<td>{}</td>", cell)).collect();
        format!("<table><tr>{}</tr></table>", cells)
    }
}

use fixtures::*;

fn plain_text() -> Digester {
    DigestBuilder::new()
        .with_output_format(OutputFormat::PlainText)
        .build()
        .unwrap()
}

// TC-B-001: Empty Input
#[test]
fn test_empty_input() {
    let digester = DigestBuilder::new().build().unwrap();
    assert!(digester.parse_table("").is_empty());
    assert!(matches!(
        digester.convert_to_string(""),
        Err(SheetDigestError::NothingToFormat)
    ));
}

// TC-B-002: Rows Shorter Than Nine Cells
#[test]
fn test_short_rows_are_skipped() {
    let digester = plain_text();
    for len in 0..MIN_ROW_LEN {
        let mut row = blank_row(len);
        if len > 2 {
            row = row_with("2024-05-01", "Song", Cell::text("None"))
                .cells()
                .iter()
                .take(len)
                .cloned()
                .collect();
        }
        assert_eq!(digester.format_row(&row), "", "row of {} cells", len);
    }

    let html = table_of(8, "x");
    assert!(matches!(
        digester.convert_to_string(&html),
        Err(SheetDigestError::NothingToFormat)
    ));
}

// TC-B-003: Extra Cells Beyond The Ninth Are Ignored
#[test]
fn test_extra_cells_ignored() {
    let mut cells = row_with("2024-05-01", "Song", Cell::text("None")).cells().to_vec();
    cells.extend(vec![Cell::text("extra"); 5]);
    let row: Row = cells.into();

    assert_eq!(plain_text().format_row(&row), "\u{274c} 2024-05-01 . Song");
}

// TC-B-004: Empty Date And Empty Title
#[test]
fn test_empty_date_and_title() {
    let row = row_with("", "", Cell::links(vec![Link::new("Sub", "https://s.example/")]));
    assert!(!row.is_eligible());
    assert_eq!(plain_text().format_row(&row), "");
}

// TC-B-005: Date Only Falls Back To Untitled
#[test]
fn test_date_only() {
    let row = row_with("2024-05-01", "", Cell::text("None"));
    assert_eq!(plain_text().format_row(&row), "\u{274c} 2024-05-01 . Untitled");
}

// TC-B-006: Title Only Keeps An Empty Date
#[test]
fn test_title_only() {
    let row = row_with("", "Song", Cell::text("None"));
    assert_eq!(plain_text().format_row(&row), "\u{274c}  . Song");
}

// TC-B-007: Sub Sentinels
#[test]
fn test_sub_sentinels() {
    let digester = plain_text();
    let subbed = row_with(
        "2024-05-01",
        "Song",
        Cell::links(vec![Link::new("Sub", "https://s.example/")]),
    );
    assert!(digester.format_row(&subbed).starts_with("\u{2714}\u{fe0f} "));

    for sub in [Cell::text("None"), Cell::text(""), Cell::links(Vec::new()), Cell::text("TBD")] {
        let row = row_with("2024-05-01", "Song", sub);
        assert!(digester.format_row(&row).starts_with("\u{274c} "));
    }
}

// TC-B-008: Link Cells Used As Text
#[test]
fn test_link_cell_in_title_column() {
    let mut cells = row_with("2024-05-01", "", Cell::text("None")).cells().to_vec();
    cells[2] = Cell::links(vec![
        Link::new("Part", "https://a.example/"),
        Link::new("One", "https://b.example/"),
    ]);
    let row: Row = cells.into();

    assert_eq!(plain_text().format_row(&row), "\u{274c} 2024-05-01 . Part One");
}

// TC-B-009: Text In Link Columns Is No Link
#[test]
fn test_text_in_link_columns() {
    let mut cells = row_with("2024-05-01", "Song", Cell::text("None")).cells().to_vec();
    cells[4] = Cell::text("https://not-a-link.example/");
    cells[5] = Cell::text("pending");
    let row: Row = cells.into();

    assert_eq!(plain_text().format_row(&row), "\u{274c} 2024-05-01 . Song");
}

// TC-B-010: HTML Special Characters Are Escaped
#[test]
fn test_special_characters_escaped() {
    let html = "<table><tr><td></td><td>2024-05-01</td>\
        <td>[&lt;b&gt;] Tom &amp; Jerry's \"Show\" (SR)</td><td></td>\
        <td><a href=\"https://a.example/?x=1&amp;y=2\">A</a></td>\
        <td></td><td></td><td></td><td>None</td></tr></table>";

    let digest = DigestBuilder::new().build().unwrap().convert_to_string(html).unwrap();

    assert!(digest.contains(">&lt;b&gt;</span>"));
    assert!(digest.contains("Tom &amp; Jerry"));
    assert!(digest.contains("&quot;Show&quot;"));
    assert!(!digest.contains("Jerry's"));
    assert!(digest.contains("href=\"https://a.example/?x=1&amp;y=2\""));
    assert!(!digest.contains("<b>"));
}

// TC-B-011: Unicode Content
#[test]
fn test_unicode_content() {
    let row = row_with("5월 1일", "[공지] 노래 제목 (SR)", Cell::text("None"));
    assert_eq!(
        plain_text().format_row(&row),
        "\u{274c} 5월 1일 . 공지 - 노래 제목 - Saerom"
    );
}

// TC-B-012: Whitespace-Only Cells
#[test]
fn test_whitespace_cells() {
    let html = table_of(9, " \n\t ");
    let rows = DigestBuilder::new().build().unwrap().parse_table(&html);

    assert_eq!(rows.len(), 1);
    assert!(rows[0].cells().iter().all(Cell::is_empty));
    assert!(!rows[0].is_eligible());
}

// TC-B-013: Non-Table Markup
#[test]
fn test_non_table_markup() {
    let digester = DigestBuilder::new().build().unwrap();
    for input in [
        "plain text",
        "<div><p>hello</p></div>",
        "<table>",
        "</td></tr>",
        "<<<>>>",
    ] {
        assert!(digester.parse_table(input).is_empty(), "input {:?}", input);
        assert!(matches!(
            digester.convert_to_string(input),
            Err(SheetDigestError::NothingToFormat)
        ));
    }
}

// TC-B-014: Unknown Initials Pass Through
#[test]
fn test_unknown_initials() {
    let row = row_with("2024-05-01", "Song (ZZ)", Cell::text("None"));
    assert_eq!(plain_text().format_row(&row), "\u{274c} 2024-05-01 . Song - ZZ");
}

// TC-B-015: Parentheses In The Middle Of A Title
#[test]
fn test_inner_parentheses() {
    let row = row_with("2024-05-01", "Live (Acoustic) Ver.", Cell::text("None"));
    assert_eq!(
        plain_text().format_row(&row),
        "\u{274c} 2024-05-01 . Live (Acoustic) Ver."
    );
}

// TC-B-016: Empty Brackets
#[test]
fn test_empty_prefix_brackets() {
    let row = row_with("2024-05-01", "[] Song", Cell::text("None"));
    assert_eq!(plain_text().format_row(&row), "\u{274c} 2024-05-01 . Song");
}

// TC-B-017: Many Rows
#[test]
fn test_many_rows() {
    let rows: String = (0..2_000)
        .map(|i| {
            format!(
                "<tr><td></td><td>d{}</td><td>Song {}</td><td>Cat {}</td>\
                 <td></td><td></td><td></td><td></td><td>None</td></tr>",
                i,
                i,
                i % 7
            )
        })
        .collect();
    let html = format!("<table>{}</table>", rows);

    let digester = DigestBuilder::new().build().unwrap();
    let digest = digester.digest_markup(&html).unwrap();
    assert_eq!(digest.sections().len(), 7);
    assert_eq!(digest.record_count(), 2_000);
    assert_eq!(digest.sections()[0].category, "Cat 0");
}
