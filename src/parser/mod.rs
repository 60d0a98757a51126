//! Parser Module
//!
//! クリップボードのHTML表現から、位置で参照できるセルの行列を抽出します。
//! 整形処理はこのトレイトの出力形状にのみ依存するため、HTMLパーサーなしで
//! 手作りの`Row`を使ってテストできます。

mod table;

pub use table::HtmlTableExtractor;

use crate::types::Row;

/// マークアップから行列を抽出するインターフェース
pub trait TableExtractor {
    /// `tr`ごとに1行、`td`ごとに1セルの行列を返す
    ///
    /// 列数の検証は行いません。解析できない入力に対しては空の`Vec`を返し、
    /// エラーにはなりません。
    fn parse_table(&self, markup: &str) -> Vec<Row>;
}
