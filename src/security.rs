//! Security Module
//!
//! 入力HTMLに対する制限を実装するモジュール。
//! クリップボードには任意の大きさのデータが入り得るため、解析前にサイズを検証します。

use std::io::Read;

use crate::error::SheetDigestError;

/// 入力HTMLの既定の最大サイズ（バイト）
/// デフォルト: 16MB (16_777_216 bytes)
pub(crate) const DEFAULT_MAX_INPUT_SIZE: usize = 16_777_216;

/// 入力HTMLのサイズを検証
///
/// # 引数
///
/// * `markup` - 検証する入力
/// * `max_input_size` - 許容する最大バイト数
///
/// # 戻り値
///
/// * `Ok(())` - 上限以内の場合
/// * `Err(SheetDigestError::SecurityViolation)` - 上限を超えた場合
pub(crate) fn validate_input_size(
    markup: &str,
    max_input_size: usize,
) -> Result<(), SheetDigestError> {
    validate_input_len(markup.len(), max_input_size)
}

/// 読み込んだバイト数を検証
///
/// UTF-8として解釈する前に呼び出すことで、上限の位置で文字が分断されていても
/// サイズ超過として扱われます。
pub(crate) fn validate_input_len(len: usize, max_input_size: usize) -> Result<(), SheetDigestError> {
    if len > max_input_size {
        return Err(SheetDigestError::SecurityViolation(format!(
            "Input size exceeds maximum: {} bytes (max: {} bytes)",
            len, max_input_size
        )));
    }
    Ok(())
}

/// 上限+1バイトまでを読み込み、サイズを検証したバイト列を返す
pub(crate) fn read_bounded<R: Read>(
    reader: R,
    max_input_size: usize,
) -> Result<Vec<u8>, SheetDigestError> {
    let limit = (max_input_size as u64).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;
    validate_input_len(bytes.len(), max_input_size)?;
    Ok(bytes)
}
