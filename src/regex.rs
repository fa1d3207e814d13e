//! Re-exports from either `regex` or `regex_lite`, depending on features.

#[cfg(feature = "lite")]
pub use regex_lite::Regex;
#[cfg(all(feature = "regex", not(feature = "lite")))]
pub use regex::Regex;

#[cfg(not(any(feature = "regex", feature = "lite")))]
compile_error!("bibliostat requires the \"regex\" or \"lite\" feature to be enabled");
