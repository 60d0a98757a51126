//! Session Module
//!
//! クリップボードのスナップショット1つからダイジェストを生成し、
//! 必要に応じてクリップボードへ書き戻す、1回分の処理を提供するモジュール。
//!
//! どの段階で失敗しても部分的な出力は書き込まれません。
//! 失敗した直後に再実行しても安全です。

use tracing::{error, info, warn};

use crate::api::OutputFormat;
use crate::builder::Digester;
use crate::clipboard::{ClipboardPayload, ClipboardSink, ClipboardSource};
use crate::error::SheetDigestError;

/// クリップボードを読み込み、HTML表現とプレーンテキスト表現のダイジェストを生成する
///
/// # 戻り値
///
/// * `Ok(ClipboardPayload)` - 生成されたダイジェスト
/// * `Err(SheetDigestError::ClipboardUnavailable)` - 読み込みに失敗した場合
/// * `Err(SheetDigestError::NoHtmlContent)` - HTML表現が無い場合
/// * `Err(SheetDigestError::NothingToFormat)` - 有効な行が無い場合
///
/// # 使用例
///
/// ```rust
/// use futures::executor::block_on;
/// use sheetdigest::{paste_and_format, DigestBuilder, MemoryClipboard, SheetDigestError};
///
/// let digester = DigestBuilder::new().build().unwrap();
/// let mut clipboard = MemoryClipboard::with_text("no html here");
/// let result = block_on(paste_and_format(&digester, &mut clipboard));
/// assert!(matches!(result, Err(SheetDigestError::NoHtmlContent)));
/// ```
pub async fn paste_and_format<S>(
    digester: &Digester,
    source: &mut S,
) -> Result<ClipboardPayload, SheetDigestError>
where
    S: ClipboardSource + ?Sized,
{
    let html = match source.read_html().await {
        Ok(Some(html)) => html,
        Ok(None) => {
            warn!("clipboard has no HTML content");
            return Err(SheetDigestError::NoHtmlContent);
        }
        Err(e) => {
            error!(error = %e, "failed to read clipboard");
            return Err(e);
        }
    };

    let digest = digester.digest_markup(&html).map_err(|e| {
        match &e {
            SheetDigestError::NothingToFormat => warn!("no valid data rows to format"),
            other => error!(error = %other, "failed to build digest"),
        }
        e
    })?;

    let payload = ClipboardPayload {
        html: digester.render_to_string(&digest, OutputFormat::Html)?,
        text: digester.render_to_string(&digest, OutputFormat::PlainText)?,
    };
    info!(records = digest.record_count(), "formatted clipboard table");
    Ok(payload)
}

/// クリップボードを読み込んでダイジェストを生成し、書き込み先へ両方の表現を書き込む
///
/// 書き込みに失敗した場合は`SheetDigestError::ClipboardWrite`を返します。
pub async fn paste_and_copy<S, K>(
    digester: &Digester,
    source: &mut S,
    sink: &mut K,
) -> Result<ClipboardPayload, SheetDigestError>
where
    S: ClipboardSource + ?Sized,
    K: ClipboardSink + ?Sized,
{
    let payload = paste_and_format(digester, source).await?;

    sink.write(payload.clone()).await.map_err(|e| {
        error!(error = %e, "failed to write clipboard");
        match e {
            SheetDigestError::ClipboardWrite(_) => e,
            other => SheetDigestError::ClipboardWrite(other.to_string()),
        }
    })?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DigestBuilder;
    use crate::clipboard::{MemoryClipboard, ReaderClipboard};
    use async_trait::async_trait;
    use futures::executor::block_on;

    const TABLE: &str = "<table>\
        <tr><td></td><td>2024-05-01</td><td>[MV] Song (SR)</td><td>Music</td>\
        <td><a href=\"https://youtu.be/a\">MV</a></td><td></td><td></td><td></td><td>None</td></tr>\
        </table>";

    struct RejectingSink;

    #[async_trait]
    impl ClipboardSink for RejectingSink {
        async fn write(&mut self, _payload: ClipboardPayload) -> Result<(), SheetDigestError> {
            Err(SheetDigestError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "write not allowed",
            )))
        }
    }

    #[test]
    fn test_paste_and_format_produces_both_flavors() {
        let digester = DigestBuilder::new().build().unwrap();
        let mut clipboard = MemoryClipboard::with_html(TABLE);
        let payload = block_on(paste_and_format(&digester, &mut clipboard)).unwrap();

        assert!(payload.html.contains("<a href=\"https://youtu.be/a\""));
        assert_eq!(payload.text, "\u{274c} 2024-05-01 . MV - Song - Saerom");
        assert!(clipboard.written().is_none());
    }

    #[test]
    fn test_paste_and_format_nothing_to_format() {
        let digester = DigestBuilder::new().build().unwrap();
        let mut clipboard = MemoryClipboard::with_html("<table><tr><td>x</td></tr></table>");
        let result = block_on(paste_and_format(&digester, &mut clipboard));
        assert!(matches!(result, Err(SheetDigestError::NothingToFormat)));
    }

    #[test]
    fn test_paste_and_copy_writes_payload() {
        let digester = DigestBuilder::new().build().unwrap();
        let mut source = ReaderClipboard::new(TABLE.as_bytes());
        let mut sink = MemoryClipboard::new();

        let payload = block_on(paste_and_copy(&digester, &mut source, &mut sink)).unwrap();
        assert_eq!(sink.written(), Some(&payload));
    }

    #[test]
    fn test_paste_and_copy_skips_sink_on_failure() {
        let digester = DigestBuilder::new().build().unwrap();
        let mut source = MemoryClipboard::new();
        let mut sink = MemoryClipboard::new();

        let result = block_on(paste_and_copy(&digester, &mut source, &mut sink));
        assert!(matches!(result, Err(SheetDigestError::NoHtmlContent)));
        assert!(sink.written().is_none());
    }

    #[test]
    fn test_paste_and_copy_write_failure() {
        let digester = DigestBuilder::new().build().unwrap();
        let mut source = MemoryClipboard::with_html(TABLE);

        match block_on(paste_and_copy(&digester, &mut source, &mut RejectingSink)) {
            Err(SheetDigestError::ClipboardWrite(msg)) => assert!(msg.contains("write not allowed")),
            other => panic!("Expected ClipboardWrite, got {:?}", other),
        }
    }
}
