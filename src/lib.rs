pub mod syntax;
pub mod reconstruct;
pub mod string_types;
pub mod utils;
pub mod io;

// 重新导出主要结构
pub use syntax::{parse_entry, serialize_entry, Entry, EntryKind, GrammarError, GrammarErrorKind};
pub use reconstruct::{reconstruct, reconstruct_detailed, Reconstruction};
pub use reconstruct::batch::{reconstruct_batch, BatchSummary};
pub use string_types::{ReconstructedUnit, TranslationUnit};
pub use utils::FtlError;

// 常量定义
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ftl"];
