//! sheetdigest - Turns spreadsheet rows copied as HTML into a paste-ready digest
//!
//! This crate takes the HTML flavor of a clipboard snapshot taken after copying
//! cells from a spreadsheet application, and turns every row into a single-line
//! record: status emoji, date, optional bold prefix, linked title, secondary
//! source links and resolved member names. Records are grouped by category.
//!
//! # Quick Start
//!
//! ```rust
//! use sheetdigest::DigestBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a digester with default settings
//!     let digester = DigestBuilder::new().build()?;
//!
//!     let html = "<table><tr><td></td><td>2024-05-01</td><td>[MV] Song (SR, HY)</td>\
//!                 <td>Music</td><td><a href=\"https://youtu.be/abc\">MV</a></td>\
//!                 <td></td><td></td><td></td><td>None</td></tr></table>";
//!
//!     // Convert the clipboard HTML into the styled digest
//!     let digest = digester.convert_to_string(html)?;
//!     assert!(digest.contains("Saerom &amp; Hayoung"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use sheetdigest::{DigestBuilder, LinkPolicy, OutputFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let digester = DigestBuilder::new()
//!     .with_show_prefix(false)                  // Hide "[...]" prefixes
//!     .with_link_policy(LinkPolicy::Simple)     // Only sub and official columns
//!     .with_output_format(OutputFormat::PlainText)
//!     .with_category_headers(true)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Clipboard Round Trip
//!
//! ```rust
//! use futures::executor::block_on;
//! use sheetdigest::{paste_and_copy, DigestBuilder, MemoryClipboard};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let digester = DigestBuilder::new().build()?;
//! let mut clipboard = MemoryClipboard::with_html(
//!     "<table><tr><td></td><td>2024-05-01</td><td>Song</td><td></td>\
//!      <td></td><td></td><td></td><td></td><td>None</td></tr></table>",
//! );
//! let mut output = MemoryClipboard::new();
//!
//! // Writes both the HTML and the plain-text flavor
//! let payload = block_on(paste_and_copy(&digester, &mut clipboard, &mut output))?;
//! assert_eq!(payload.text, "\u{274c} 2024-05-01 . Song");
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod clipboard;
mod error;
mod formatter;
mod grouping;
mod links;
mod members;
mod output;
mod parser;
mod security;
mod session;
mod styles;
mod title;
mod types;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod wasm;

// 公開API
pub use api::{LinkPolicy, OutputFormat};
pub use builder::{DigestBuilder, DigestOptions, Digester, DEFAULT_FALLBACK_CATEGORY};
pub use clipboard::{
    ClipboardPayload, ClipboardSink, ClipboardSource, MemoryClipboard, ReaderClipboard,
};
pub use error::{Notice, SheetDigestError};
pub use formatter::{Record, MISSING_EMOJI, SUBBED_EMOJI};
pub use grouping::{group_by_category, CategoryGroup, Digest, DigestSection};
pub use links::{
    annotate_sources, normalize_url, select_links, LinkCandidates, LinkSelection,
    YOUTUBE_SEARCH_LABEL,
};
pub use members::{join_with_and, resolve_initials, MemberDirectory};
pub use parser::{HtmlTableExtractor, TableExtractor};
pub use session::{paste_and_copy, paste_and_format};
pub use title::{split_name_and_initials, split_prefix, ParsedTitle};
pub use types::{Cell, Link, Row, MIN_ROW_LEN};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use wasm::format_sheet_html;
