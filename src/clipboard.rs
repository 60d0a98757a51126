//! Clipboard Module
//!
//! クリップボードの読み書きを抽象化するモジュール。
//! 読み込みは唯一の非同期境界であり、それ以降の処理はすべて同期的に実行されます。

use std::io::Read;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SheetDigestError;
use crate::security::{validate_input_len, DEFAULT_MAX_INPUT_SIZE};

/// クリップボードへ書き込む内容
///
/// HTML表現とプレーンテキスト表現を同時に書き込みます。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardPayload {
    /// HTML表現
    pub html: String,

    /// プレーンテキスト表現
    pub text: String,
}

/// クリップボードの読み込み元
#[async_trait]
pub trait ClipboardSource {
    /// 現在のスナップショットのHTML表現を読み込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(html))` - HTML表現が存在する場合
    /// * `Ok(None)` - HTML表現が存在しない場合
    /// * `Err(SheetDigestError::ClipboardUnavailable)` - 読み込みに失敗した場合
    async fn read_html(&mut self) -> Result<Option<String>, SheetDigestError>;
}

/// クリップボードの書き込み先
#[async_trait]
pub trait ClipboardSink {
    /// HTML表現とプレーンテキスト表現を書き込む
    async fn write(&mut self, payload: ClipboardPayload) -> Result<(), SheetDigestError>;
}

/// メモリ上のクリップボード
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::{ClipboardSource, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::with_html("<table></table>");
/// let html = futures::executor::block_on(clipboard.read_html()).unwrap();
/// assert_eq!(html.as_deref(), Some("<table></table>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    html: Option<String>,
    text: Option<String>,
    written: Option<ClipboardPayload>,
}

impl MemoryClipboard {
    /// 空のクリップボード
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML表現を持つクリップボード
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// プレーンテキスト表現のみを持つクリップボード
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// プレーンテキスト表現
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// 最後に書き込まれた内容
    pub fn written(&self) -> Option<&ClipboardPayload> {
        self.written.as_ref()
    }
}

#[async_trait]
impl ClipboardSource for MemoryClipboard {
    async fn read_html(&mut self) -> Result<Option<String>, SheetDigestError> {
        Ok(self.html.clone())
    }
}

#[async_trait]
impl ClipboardSink for MemoryClipboard {
    async fn write(&mut self, payload: ClipboardPayload) -> Result<(), SheetDigestError> {
        // 書き込み後は、読み込み側からも書き込んだ内容が見える
        self.html = Some(payload.html.clone());
        self.text = Some(payload.text.clone());
        self.written = Some(payload);
        Ok(())
    }
}

/// 任意の`Read`からスナップショットを1回だけ読み込むクリップボード
///
/// 標準入力やファイルに保存したクリップボードの内容を扱うために使用します。
/// 内容にマークアップ（`<`）が含まれない場合は、HTML表現が無いものとして扱います。
#[derive(Debug)]
pub struct ReaderClipboard<R> {
    reader: R,
    max_input_size: usize,
    snapshot: Option<Option<String>>,
}

impl<R: Read> ReaderClipboard<R> {
    /// 新しいクリップボードを作成
    ///
    /// 読み込みサイズの上限は既定値（16MB）です。
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            snapshot: None,
        }
    }

    /// 読み込みサイズの上限（バイト）を設定
    ///
    /// 通常は`DigestOptions::max_input_size`と同じ値を渡します。
    pub fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

#[async_trait]
impl<R: Read + Send> ClipboardSource for ReaderClipboard<R> {
    async fn read_html(&mut self) -> Result<Option<String>, SheetDigestError> {
        if let Some(snapshot) = &self.snapshot {
            return Ok(snapshot.clone());
        }

        // 上限+1バイトまで読み、UTF-8として解釈する前に超過を検出する
        let limit = (self.max_input_size as u64).saturating_add(1);
        let mut bytes = Vec::new();
        self.reader
            .by_ref()
            .take(limit)
            .read_to_end(&mut bytes)
            .map_err(|e| SheetDigestError::ClipboardUnavailable(e.to_string()))?;
        validate_input_len(bytes.len(), self.max_input_size)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| SheetDigestError::ClipboardUnavailable(e.to_string()))?;
        debug!(bytes = content.len(), "read clipboard snapshot");

        let html = if content.trim().is_empty() || !content.contains('<') {
            None
        } else {
            Some(content)
        };
        self.snapshot = Some(html.clone());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_memory_clipboard_without_html() {
        let mut clipboard = MemoryClipboard::with_text("plain");
        assert_eq!(block_on(clipboard.read_html()).unwrap(), None);
        assert_eq!(clipboard.text(), Some("plain"));
    }

    #[test]
    fn test_memory_clipboard_write_replaces_content() {
        let mut clipboard = MemoryClipboard::new();
        let payload = ClipboardPayload {
            html: "<b>x</b>".to_string(),
            text: "x".to_string(),
        };
        block_on(clipboard.write(payload.clone())).unwrap();

        assert_eq!(clipboard.written(), Some(&payload));
        assert_eq!(
            block_on(clipboard.read_html()).unwrap().as_deref(),
            Some("<b>x</b>")
        );
        assert_eq!(clipboard.text(), Some("x"));
    }

    #[test]
    fn test_reader_clipboard_reads_snapshot_once() {
        let mut clipboard = ReaderClipboard::new("<table></table>".as_bytes());
        let first = block_on(clipboard.read_html()).unwrap();
        let second = block_on(clipboard.read_html()).unwrap();
        assert_eq!(first.as_deref(), Some("<table></table>"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_reader_clipboard_without_markup() {
        let mut empty = ReaderClipboard::new("   \n".as_bytes());
        assert_eq!(block_on(empty.read_html()).unwrap(), None);

        let mut plain = ReaderClipboard::new("2024-05-01\tSong".as_bytes());
        assert_eq!(block_on(plain.read_html()).unwrap(), None);
    }

    #[test]
    fn test_reader_clipboard_read_failure() {
        let mut clipboard = ReaderClipboard::new(FailingReader);
        match block_on(clipboard.read_html()) {
            Err(SheetDigestError::ClipboardUnavailable(msg)) => assert!(msg.contains("denied")),
            other => panic!("Expected ClipboardUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_clipboard_input_limit() {
        let mut clipboard =
            ReaderClipboard::new("<table>\u{e9}</table>".as_bytes()).with_max_input_size(8);
        match block_on(clipboard.read_html()) {
            Err(SheetDigestError::SecurityViolation(msg)) => assert!(msg.contains("max: 8 bytes")),
            other => panic!("Expected SecurityViolation, got {:?}", other),
        }

        let mut exact = ReaderClipboard::new("<b>x</b>".as_bytes()).with_max_input_size(8);
        assert_eq!(block_on(exact.read_html()).unwrap().as_deref(), Some("<b>x</b>"));
    }

    #[test]
    fn test_reader_clipboard_invalid_utf8() {
        let mut clipboard = ReaderClipboard::new(&[0x3c, 0xff][..]);
        assert!(matches!(
            block_on(clipboard.read_html()),
            Err(SheetDigestError::ClipboardUnavailable(_))
        ));
    }
}
