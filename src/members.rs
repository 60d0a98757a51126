//! Members Module
//!
//! 括弧内のイニシャルを表示名に解決し、英語の列挙形式で連結するモジュール。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 既定のイニシャル→表示名テーブル
const DEFAULT_MEMBERS: [(&str, &str); 9] = [
    ("SR", "Saerom"),
    ("HY", "Hayoung"),
    ("GY", "Gyuri"),
    ("JW", "Jiwon"),
    ("JS", "Jisun"),
    ("SY", "Seoyeon"),
    ("CY", "Chaeyoung"),
    ("NG", "Nagyung"),
    ("JH", "Jiheon"),
];

/// イニシャルから表示名への対応表
///
/// 実行中に変更されない設定値として、整形処理に明示的に渡されます。
/// キーの照合は大文字・小文字を区別します。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::{resolve_initials, MemberDirectory};
///
/// let directory = MemberDirectory::default();
/// assert_eq!(resolve_initials("SR, HY", &directory), "Saerom & Hayoung");
///
/// let custom: MemberDirectory = [("AB", "Alice Brown")].into_iter().collect();
/// assert_eq!(resolve_initials("AB & SR", &custom), "Alice Brown & SR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberDirectory {
    names: BTreeMap<String, String>,
}

impl Default for MemberDirectory {
    fn default() -> Self {
        DEFAULT_MEMBERS.into_iter().collect()
    }
}

impl MemberDirectory {
    /// 空の対応表を生成
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// 対応を追加（既存のキーは上書き）
    pub fn insert(&mut self, initials: impl Into<String>, name: impl Into<String>) {
        self.names.insert(initials.into(), name.into());
    }

    /// イニシャルに対応する表示名
    pub fn get(&self, initials: &str) -> Option<&str> {
        self.names.get(initials).map(String::as_str)
    }

    /// トークンを表示名に変換する（未登録のトークンはそのまま返す）
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    /// 登録数
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemberDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// イニシャル文字列を表示名の列挙に解決する
///
/// 空白・カンマ・アンパサンドの連続で分割し、空のトークンを除いたうえで
/// 各トークンを`directory`で変換し、[`join_with_and`]で連結します。
pub fn resolve_initials(initials: &str, directory: &MemberDirectory) -> String {
    let names: Vec<&str> = initials
        .split(|c: char| c.is_whitespace() || c == ',' || c == '&')
        .filter(|token| !token.is_empty())
        .map(|token| directory.resolve(token))
        .collect();
    join_with_and(&names)
}

/// 英語の列挙規則で連結する
///
/// 0件は空文字列、1件はそのまま、2件は`"A & B"`、3件以上は`"A, B & C"`です。
pub fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            format!("{} & {}", head, last.as_ref())
        }
    }
}
