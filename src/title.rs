//! Title Module
//!
//! タイトル列の文字列を、角括弧のプレフィックス・表示名・括弧内のイニシャルに
//! 分解するモジュール。

use std::sync::LazyLock;

use regex::Regex;

/// 先頭の`[...]`ブロックと残りの部分
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*?)\]\s*(.*)$").expect("PREFIX_PATTERN should compile"));

/// 末尾の`(...)`ブロックとそれ以前の部分
static INITIALS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*\(([^)]+)\)$").expect("INITIALS_PATTERN should compile")
});

/// 空タイトルの行に使う表示名
pub(crate) const UNTITLED: &str = "Untitled";

/// タイトルから先頭の角括弧プレフィックスを切り出す
///
/// `[NOTICE] Title`のように角括弧で始まる場合は`(Some("NOTICE"), "Title")`を返します。
/// それ以外の場合、プレフィックスは`None`で、タイトルは入力そのまま（前後の空白も含む）です。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::split_prefix;
///
/// assert_eq!(split_prefix("[NOTICE] Title"), (Some("NOTICE"), "Title"));
/// assert_eq!(split_prefix("Title"), (None, "Title"));
/// ```
pub fn split_prefix(text: &str) -> (Option<&str>, &str) {
    match PREFIX_PATTERN.captures(text) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(prefix), Some(title)) => (Some(prefix.as_str()), title.as_str()),
            _ => (None, text),
        },
        None => (None, text),
    }
}

/// タイトルを表示名と末尾の括弧内イニシャルに分割する
///
/// 末尾が`(...)`で終わる場合のみイニシャルとして扱います。途中にある括弧は
/// 表示名の一部です。どちらも前後の空白を除去して返します。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::split_name_and_initials;
///
/// assert_eq!(split_name_and_initials("Song Name (SR, HY)"), ("Song Name", "SR, HY"));
/// assert_eq!(split_name_and_initials("Live (Acoustic) Ver."), ("Live (Acoustic) Ver.", ""));
/// ```
pub fn split_name_and_initials(title: &str) -> (&str, &str) {
    if let Some(caps) = INITIALS_PATTERN.captures(title) {
        if let (Some(name), Some(initials)) = (caps.get(1), caps.get(2)) {
            return (name.as_str().trim(), initials.as_str().trim());
        }
    }
    (title.trim(), "")
}

/// 分解済みのタイトル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// 角括弧内のプレフィックス
    pub prefix: Option<String>,

    /// 括弧を除いた表示名
    pub name: String,

    /// 括弧内のイニシャル（無い場合は空文字列）
    pub initials: String,
}

impl ParsedTitle {
    /// タイトル列の文字列を分解する
    pub fn parse(full_title: &str) -> Self {
        let (prefix, title) = split_prefix(full_title);
        let (name, initials) = split_name_and_initials(title);
        Self {
            prefix: prefix.map(str::to_string),
            name: name.to_string(),
            initials: initials.to_string(),
        }
    }
}
