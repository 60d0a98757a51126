//! WASM Bindings
//!
//! ブラウザの貼り付けハンドラから、クリップボードのHTML表現を直接整形するための
//! WebAssemblyバインディング。クリップボードへのアクセス自体はJavaScript側で行います。

use wasm_bindgen::prelude::*;

use crate::{DigestBuilder, LinkPolicy};

/// クリップボードのHTML表現をダイジェストのHTMLに変換する
///
/// # 引数
/// * `html` - クリップボードのHTML表現
/// * `show_prefix` - プレフィックスを表示するか
/// * `rich` - `true`なら3列のリンク選択、`false`なら2列のリンク選択
///
/// # 戻り値
/// * 成功: ダイジェストのHTML
/// * 失敗: ユーザー向けの通知メッセージ
#[wasm_bindgen]
pub fn format_sheet_html(html: &str, show_prefix: bool, rich: bool) -> Result<String, String> {
    let policy = if rich {
        LinkPolicy::Rich
    } else {
        LinkPolicy::Simple
    };

    let digester = DigestBuilder::new()
        .with_show_prefix(show_prefix)
        .with_link_policy(policy)
        .build()
        .map_err(|e| e.notice().to_string())?;

    digester
        .convert_to_string(html)
        .map_err(|e| e.notice().to_string())
}

/// Get version information
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
