//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::fmt;

use thiserror::Error;

/// sheetdigestクレート全体で使用するエラー型
///
/// クリップボードからの読み込み、HTMLテーブルの解析、ダイジェストの出力中に
/// 発生するすべてのエラーを統一的に扱うために使用されます。
///
/// 行の欠落や列不足はエラーではありません（その行は黙って除外されます）。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（出力の書き込み失敗など）
/// - `Config`: 設定の検証に失敗したエラー
/// - `Serialization`: JSONのシリアライズ／デシリアライズに失敗したエラー
/// - `SecurityViolation`: 入力サイズ制限に違反したエラー
/// - `ClipboardUnavailable`: クリップボードの読み込みに失敗したエラー
/// - `NoHtmlContent`: クリップボードにHTML表現が存在しない
/// - `NothingToFormat`: 有効な行が1行も見つからなかった
/// - `ClipboardWrite`: クリップボードへの書き込みに失敗したエラー
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::{DigestBuilder, SheetDigestError};
///
/// let digester = DigestBuilder::new().build().unwrap();
/// match digester.convert_to_string("<p>not a table</p>") {
///     Err(SheetDigestError::NothingToFormat) => {}
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum SheetDigestError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `DigestBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、フォールバックカテゴリ名が空の場合や、
    /// ベースURLが絶対URLとして解釈できない場合などです。
    ///
    /// # 例
    ///
    /// ```rust
    /// use sheetdigest::{DigestBuilder, SheetDigestError};
    ///
    /// let result = DigestBuilder::new()
    ///     .with_fallback_category("")
    ///     .build();
    ///
    /// assert!(matches!(result, Err(SheetDigestError::Config(_))));
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSONのシリアライズ／デシリアライズエラー
    ///
    /// JSON出力や設定ファイルの読み込み時に発生します。
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力HTMLのサイズが上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// クリップボードの読み込みに失敗したエラー
    ///
    /// 権限不足やクリップボードAPIが利用できない場合に発生します。
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// クリップボードにHTML表現が含まれていない
    #[error("No HTML content found on the clipboard")]
    NoHtmlContent,

    /// 整形対象となる有効な行が存在しない
    #[error("No valid data rows to format")]
    NothingToFormat,

    /// クリップボードへの書き込みに失敗したエラー
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),
}

impl SheetDigestError {
    /// このエラーに対応するユーザー向け通知を返す
    ///
    /// 画面上のダイアログやCLIのエラーメッセージにそのまま表示できる文言です。
    pub fn notice(&self) -> Notice {
        match self {
            SheetDigestError::NoHtmlContent => Notice::NoHtmlContent,
            SheetDigestError::ClipboardUnavailable(_) => Notice::ClipboardReadFailed,
            SheetDigestError::NothingToFormat => Notice::NothingToFormat,
            SheetDigestError::ClipboardWrite(_) => Notice::CopyFailed,
            SheetDigestError::Io(_)
            | SheetDigestError::Config(_)
            | SheetDigestError::Serialization(_)
            | SheetDigestError::SecurityViolation(_) => Notice::Unexpected,
        }
    }
}

/// ユーザー向けの通知
///
/// 1回の呼び出しが失敗したときに表示するメッセージの種類です。
/// いずれの通知も、その呼び出しの出力が一切生成されなかったことを意味します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Notice {
    /// クリップボードにHTMLが無い
    NoHtmlContent,
    /// クリップボードを読めなかった
    ClipboardReadFailed,
    /// 有効な行が見つからなかった
    NothingToFormat,
    /// 結果をクリップボードに書き込めなかった
    CopyFailed,
    /// 予期しないエラー
    Unexpected,
}

impl Notice {
    /// 表示用メッセージ
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoHtmlContent => "No HTML content found on the clipboard.",
            Notice::ClipboardReadFailed => "Could not read from clipboard.",
            Notice::NothingToFormat => "Could not find any valid data rows to format.",
            Notice::CopyFailed => {
                "Could not copy to clipboard. Your browser might not support this feature or you may need to grant permission."
            }
            Notice::Unexpected => "An unexpected error occurred during processing.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
