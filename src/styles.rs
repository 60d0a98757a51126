//! Inline Styles
//!
//! 貼り付け先ドキュメントエディタの形式に合わせたインラインスタイル。

/// 通常テキストの`<span>`
pub(crate) const BASE_SPAN: &str = "font-size:11pt;font-family:Lato;color:#212121ff;background-color:transparent;font-weight:400;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// 太字（プレフィックス）の`<span>`
pub(crate) const BOLD_SPAN: &str = "font-size:11pt;font-family:Lato;color:#212121ff;background-color:transparent;font-weight:700;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// リンク内側の`<span>`（下線付き）
pub(crate) const LINK_SPAN: &str = "font-size:11pt;font-family:Lato;color:#000000ff;background-color:transparent;font-weight:400;font-style:normal;font-variant:normal;text-decoration:underline;-webkit-text-decoration-skip:none;text-decoration-skip-ink:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// メンバー名の`<span>`（等幅・薄い背景色）
pub(crate) const MEMBERS_SPAN: &str = "font-size:11pt;font-family:'Source Code Pro';color:#212121ff;background-color:rgba(0,0,0,0.059);font-weight:400;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;";

/// `<a>`要素自体のスタイル
pub(crate) const ANCHOR: &str = "text-decoration:none;";
