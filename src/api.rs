//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// メインリンクの選択方式
///
/// スプレッドシートのリンク列のうち、どの列を候補として扱うかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum LinkPolicy {
    /// 3列（公式・代替ソース・サブ）を候補とする方式（デフォルト）
    ///
    /// メインリンクに選ばれなかったリンクは「ソース」注記として
    /// タイトルの後ろに表示されます。
    ///
    /// # 優先順位
    ///
    /// 1. サブ列のリンクがちょうど1件 → サブのリンク
    /// 2. 公式列がちょうど1件かつ代替列が0件 → 公式のリンク
    /// 3. 代替列がちょうど1件かつ公式列が0件 → 代替のリンク
    /// 4. それ以外 → メインリンクなし、全リンクをソースとして表示
    #[default]
    Rich,

    /// 2列（公式・サブ）のみを候補とする方式
    ///
    /// サブ列がちょうど1件ならサブ、次に公式列がちょうど1件なら公式の
    /// リンクを使用します。ソース注記は出力しません。
    Simple,
}

/// 出力フォーマット
///
/// ダイジェストを出力する際の形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputFormat {
    /// インラインスタイル付きHTML形式（デフォルト）
    ///
    /// ドキュメントエディタへの貼り付け形式に合わせた`<span>`の並びを出力します。
    /// レコード間は`<br>`で区切られます。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <span style="...">✔️ 2024-05-01 . </span><a href="https://youtu.be/x" ...><span style="...">Song</span></a>
    /// ```
    #[default]
    Html,

    /// プレーンテキスト形式
    ///
    /// HTMLと同じレイアウトを、マークアップなしで1レコード1行として出力します。
    ///
    /// # 出力例
    ///
    /// ```text
    /// ✔️ 2024-05-01 . NOTICE - Song - Saerom & Hayoung
    /// ```
    PlainText,

    /// JSON形式
    ///
    /// カテゴリごとのレコードを構造化データとして出力します。
    ///
    /// # 出力例
    ///
    /// ```json
    /// [
    ///   {
    ///     "category": "Music",
    ///     "records": [{"has_sub": true, "date": "2024-05-01", "name": "Song"}]
    ///   }
    /// ]
    /// ```
    Json,
}
