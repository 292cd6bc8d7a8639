//! Ding notation: `HEAD :: TRANSLATION`, where each side is a list of
//! families separated by `" | "` and each family a list of alternatives
//! separated by `"; "`.

pub mod parser;
pub mod scanner;

pub use parser::{parse_family, parse_line, parse_order, parse_translation};
pub use scanner::scan;

pub const SIDE_SEPARATOR: &str = "::";
pub const FAMILY_SEPARATOR: &str = " | ";
pub const ALTERNATIVE_SEPARATOR: &str = "; ";
