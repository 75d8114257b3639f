//! Rule-based decomposition of free-form full names into title, first,
//! middle, last, nickname and suffix.
//!
//! ```
//! let name = fullname_parser::parse_fullname("Dr. Juan Xavier");
//! assert_eq!(name.title, "Dr.");
//! assert_eq!(name.first, "Juan");
//! assert_eq!(name.last, "Xavier");
//! ```

pub mod error;
pub mod lists;
pub mod nickname;
pub mod parser;
pub mod scanner;
pub mod tokens;

use std::sync::LazyLock;

pub use error::{Error, Result};
pub use fullname_types::ParsedName;
pub use lists::ReferenceLists;
pub use parser::NameParser;

static DEFAULT_PARSER: LazyLock<NameParser> = LazyLock::new(NameParser::default);

/// Parse `fullname` with the built-in reference lists.
pub fn parse_fullname(fullname: &str) -> ParsedName {
    DEFAULT_PARSER.parse(fullname)
}
