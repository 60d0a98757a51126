//! Builder Module
//!
//! Fluent Builder APIを提供し、`Digester`インスタンスを段階的に構築する。

use std::io::{self, BufWriter, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::api::{LinkPolicy, OutputFormat};
use crate::error::SheetDigestError;
use crate::formatter::{Record, RecordFormatter};
use crate::grouping::{group_by_category, Digest, DigestSection};
use crate::members::MemberDirectory;
use crate::output::OutputFormatter;
use crate::parser::{HtmlTableExtractor, TableExtractor};
use crate::security::{read_bounded, validate_input_size, DEFAULT_MAX_INPUT_SIZE};
use crate::types::Row;

/// カテゴリ列が空の行に使うカテゴリ名
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Uncategorized";

/// ダイジェスト処理の設定
///
/// JSONファイルから読み込めるように`serde`に対応しています。
/// 省略された項目はデフォルト値になります。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::{DigestBuilder, DigestOptions, LinkPolicy};
///
/// # fn main() -> Result<(), sheetdigest::SheetDigestError> {
/// let json = r#"{ "show_prefix": false, "link_policy": "simple" }"#;
/// let options = DigestOptions::from_json_reader(json.as_bytes())?;
/// assert_eq!(options.link_policy, LinkPolicy::Simple);
///
/// let digester = DigestBuilder::from_options(options).build()?;
/// assert!(!digester.options().show_prefix);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestOptions {
    /// 角括弧のプレフィックスを太字で表示するか
    pub show_prefix: bool,

    /// メインリンクの選択方式
    pub link_policy: LinkPolicy,

    /// 出力フォーマット
    pub output_format: OutputFormat,

    /// カテゴリごとに見出しを出力するか
    pub category_headers: bool,

    /// カテゴリ列が空の行に使うカテゴリ名
    pub fallback_category: String,

    /// イニシャル→表示名の対応表
    pub members: MemberDirectory,

    /// 相対URLの解決に使うベースURL
    pub base_url: Option<String>,

    /// 入力HTMLの最大サイズ（バイト）
    pub max_input_size: usize,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            show_prefix: true,
            link_policy: LinkPolicy::Rich,
            output_format: OutputFormat::Html,
            category_headers: false,
            fallback_category: DEFAULT_FALLBACK_CATEGORY.to_string(),
            members: MemberDirectory::default(),
            base_url: None,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl DigestOptions {
    /// JSONから設定を読み込む
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, SheetDigestError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Digester`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::{DigestBuilder, LinkPolicy, OutputFormat};
///
/// # fn main() -> Result<(), sheetdigest::SheetDigestError> {
/// let digester = DigestBuilder::new()
///     .with_show_prefix(false)
///     .with_link_policy(LinkPolicy::Simple)
///     .with_output_format(OutputFormat::PlainText)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DigestBuilder {
    /// 内部設定（構築中）
    options: DigestOptions,
}

impl DigestBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - プレフィックス表示: 有効
    /// - リンク選択方式: 3列（`LinkPolicy::Rich`）
    /// - 出力フォーマット: HTML
    /// - カテゴリ見出し: なし
    /// - フォールバックカテゴリ: `"Uncategorized"`
    /// - メンバー対応表: 既定の9名
    /// - 入力サイズ上限: 16MB
    pub fn new() -> Self {
        Self {
            options: DigestOptions::default(),
        }
    }

    /// 既存の設定からビルダーを生成する
    pub fn from_options(options: DigestOptions) -> Self {
        Self { options }
    }

    /// プレフィックスを表示するかを指定する
    pub fn with_show_prefix(mut self, show: bool) -> Self {
        self.options.show_prefix = show;
        self
    }

    /// メインリンクの選択方式を指定する
    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.options.link_policy = policy;
        self
    }

    /// 出力フォーマットを指定する
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.options.output_format = format;
        self
    }

    /// カテゴリごとの見出しを出力するかを指定する
    pub fn with_category_headers(mut self, headers: bool) -> Self {
        self.options.category_headers = headers;
        self
    }

    /// カテゴリ列が空の行に使うカテゴリ名を指定する
    pub fn with_fallback_category(mut self, category: impl Into<String>) -> Self {
        self.options.fallback_category = category.into();
        self
    }

    /// イニシャル→表示名の対応表を指定する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheetdigest::{DigestBuilder, MemberDirectory};
    ///
    /// let mut members = MemberDirectory::default();
    /// members.insert("AB", "Alice");
    /// let builder = DigestBuilder::new().with_member_directory(members);
    /// ```
    pub fn with_member_directory(mut self, members: MemberDirectory) -> Self {
        self.options.members = members;
        self
    }

    /// 相対URLの解決に使うベースURLを指定する
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = Some(base_url.into());
        self
    }

    /// 入力HTMLの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.options.max_input_size = max_input_size;
        self
    }

    /// 設定を検証し、`Digester`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `SheetDigestError::Config(String)`: 設定の検証に失敗した場合
    ///   * フォールバックカテゴリ名が空
    ///   * 入力サイズ上限が0
    ///   * ベースURLが絶対URLとして解釈できない
    pub fn build(self) -> Result<Digester, SheetDigestError> {
        // 1. フォールバックカテゴリの検証
        if self.options.fallback_category.trim().is_empty() {
            return Err(SheetDigestError::Config(
                "Fallback category must not be empty".to_string(),
            ));
        }

        // 2. 入力サイズ上限の検証
        if self.options.max_input_size == 0 {
            return Err(SheetDigestError::Config(
                "Maximum input size must be greater than zero".to_string(),
            ));
        }

        // 3. ベースURLの検証
        let extractor = match &self.options.base_url {
            Some(base_url) => {
                let url = Url::parse(base_url).map_err(|e| {
                    SheetDigestError::Config(format!("Invalid base URL '{}': {}", base_url, e))
                })?;
                if url.cannot_be_a_base() {
                    return Err(SheetDigestError::Config(format!(
                        "Base URL cannot be used to resolve relative links: '{}'",
                        base_url
                    )));
                }
                HtmlTableExtractor::with_base_url(url)
            }
            None => HtmlTableExtractor::new(),
        };

        Ok(Digester::new(self.options, extractor))
    }
}

/// ダイジェスト処理のファサード
///
/// クリップボードのHTMLからダイジェストを生成するためのメインエントリーポイントです。
/// 同じ入力と同じ設定に対しては、常にバイト単位で同一の出力を返します。
///
/// # 使用例
///
/// ```rust
/// use sheetdigest::DigestBuilder;
///
/// # fn main() -> Result<(), sheetdigest::SheetDigestError> {
/// let html = "<table><tr><td></td><td>2024-05-01</td><td>Song (SR)</td><td>Music</td>\
///             <td></td><td></td><td></td><td></td><td>None</td></tr></table>";
/// let digester = DigestBuilder::new().build()?;
/// let digest = digester.convert_to_string(html)?;
/// assert!(digest.contains("Saerom"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Digester {
    /// 設定
    options: DigestOptions,

    /// テーブル抽出器
    extractor: HtmlTableExtractor,

    /// レコードフォーマッター
    formatter: RecordFormatter,
}

impl Digester {
    pub(crate) fn new(options: DigestOptions, extractor: HtmlTableExtractor) -> Self {
        Self {
            options,
            extractor,
            formatter: RecordFormatter::new(),
        }
    }

    /// 現在の設定
    pub fn options(&self) -> &DigestOptions {
        &self.options
    }

    /// HTMLからセルの行列を抽出する
    pub fn parse_table(&self, markup: &str) -> Vec<Row> {
        self.extractor.parse_table(markup)
    }

    /// 1行をレコードに変換する（整形対象外の行は`None`）
    pub fn record(&self, row: &Row) -> Option<Record> {
        self.formatter.build_record(row, &self.options)
    }

    /// 1行を設定された出力フォーマットの1行の文字列に変換する
    ///
    /// 整形対象外の行（セル数不足、日付とタイトルが両方空）は空文字列になります。
    pub fn format_row(&self, row: &Row) -> String {
        self.record(row)
            .map(|record| {
                OutputFormatter::from_format(self.options.output_format).render_record(&record)
            })
            .unwrap_or_default()
    }

    /// 行をカテゴリごとに分類し、レコードを組み立てる
    ///
    /// レコードが1件も残らなかったカテゴリは含まれません。
    pub fn digest(&self, rows: &[Row]) -> Digest {
        let mut sections = Vec::new();
        for group in group_by_category(rows, &self.options.fallback_category) {
            let records: Vec<Record> = group
                .rows
                .iter()
                .filter_map(|row| self.record(row))
                .collect();

            let skipped = group.rows.len() - records.len();
            if skipped > 0 {
                debug!(category = %group.category, skipped, "skipped ineligible rows");
            }

            // 対象行の無いカテゴリは見出しも含めて出力しない
            if !records.is_empty() {
                sections.push(DigestSection {
                    category: group.category,
                    records,
                });
            }
        }

        let digest = Digest::new(sections);
        debug!(
            rows = rows.len(),
            sections = digest.sections().len(),
            records = digest.record_count(),
            "digest built"
        );
        digest
    }

    /// HTMLを検証・解析し、ダイジェストを組み立てる
    ///
    /// # 戻り値
    ///
    /// * `Ok(Digest)` - 1件以上のレコードがある場合
    /// * `Err(SheetDigestError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(SheetDigestError::NothingToFormat)` - 有効な行が無い場合
    pub fn digest_markup(&self, markup: &str) -> Result<Digest, SheetDigestError> {
        validate_input_size(markup, self.options.max_input_size)?;

        let rows = self.parse_table(markup);
        let digest = self.digest(&rows);
        if digest.is_empty() {
            return Err(SheetDigestError::NothingToFormat);
        }
        Ok(digest)
    }

    /// ダイジェストを設定された出力フォーマットで書き出す
    pub fn render<W: Write>(&self, digest: &Digest, output: W) -> Result<(), SheetDigestError> {
        self.render_as(digest, self.options.output_format, output)
    }

    /// ダイジェストを指定した出力フォーマットで書き出す
    pub fn render_as<W: Write>(
        &self,
        digest: &Digest,
        format: OutputFormat,
        mut output: W,
    ) -> Result<(), SheetDigestError> {
        let mut writer = BufWriter::new(&mut output);
        OutputFormatter::from_format(format).render(
            digest,
            self.options.category_headers,
            &mut writer,
        )?;
        writer.flush()?;
        Ok(())
    }

    /// ダイジェストを指定した出力フォーマットの文字列に変換する
    pub fn render_to_string(
        &self,
        digest: &Digest,
        format: OutputFormat,
    ) -> Result<String, SheetDigestError> {
        let mut buffer = Vec::new();
        self.render_as(digest, format, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            SheetDigestError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }

    /// HTMLを読み込み、ダイジェストを書き出す
    ///
    /// # 引数
    ///
    /// * `input` - クリップボードのHTML表現を読み込むためのリーダー
    /// * `output` - 出力先のライター
    ///
    /// # 処理フロー
    ///
    /// 1. 上限サイズまで入力を読み込む
    /// 2. テーブルを抽出
    /// 3. カテゴリごとに分類してレコードを組み立て
    /// 4. 設定された出力フォーマットで書き出し
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use sheetdigest::DigestBuilder;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), sheetdigest::SheetDigestError> {
    /// let digester = DigestBuilder::new().build()?;
    /// let input = File::open("clipboard.html")?;
    /// digester.convert(input, std::io::stdout())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read, W: Write>(&self, input: R, output: W) -> Result<(), SheetDigestError> {
        // バイト数で上限を判定してからUTF-8として解釈する
        let bytes = read_bounded(input, self.options.max_input_size)?;
        let markup = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let digest = self.digest_markup(&markup)?;
        self.render(&digest, output)
    }

    /// HTML文字列を設定された出力フォーマットの文字列に変換する
    pub fn convert_to_string(&self, markup: &str) -> Result<String, SheetDigestError> {
        let digest = self.digest_markup(markup)?;
        self.render_to_string(&digest, self.options.output_format)
    }
}
