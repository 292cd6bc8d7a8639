pub mod ding;
pub mod format;
pub mod loaders;
pub mod rank;
pub mod types;

pub use ding::{parse_line, scan};
pub use format::{format_vocabulary, render_card, render_lookup, render_not_found};
pub use rank::{Ranked, estimate_priority, rank};
pub use types::{Card, Family, Fragment, Order, Vocabulary};
