pub mod declension;
pub mod dictionary;
pub mod loader;
pub mod processor;

pub use declension::{Case, Gender, decline};
pub use dictionary::DingStore;
pub use loader::{DingLoader, SourceFormat};
pub use processor::GermanProcessor;
