//! Persian text normalization.
//!
//! Folds Arabic letter variants to their Persian forms, maps Persian and
//! Arabic-Indic digits to ASCII, folds Arabic punctuation, strips control
//! characters, collapses whitespace and optionally drops stop words. The
//! output is always NFC.

pub mod batch;
pub mod normalize;
pub mod parser;
pub mod server;
pub mod stopwords;
pub mod tables;

pub use normalize::{normalize, normalize_value, normalize_with};
pub use stopwords::StopWords;
