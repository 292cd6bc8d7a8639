//! Readers turning dictionary sources into raw store entries, and the
//! buffered driver that feeds them into a store.

pub mod ding;
pub mod import;
pub mod wiki;

pub use ding::DingFileReader;
pub use import::{ImportError, construct_db_path, import};
pub use wiki::WikiDumpReader;
