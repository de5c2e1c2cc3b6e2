//! IO 抽象层模块
//!
//! 提供条目文件与批量译文文件读写的抽象接口，支持依赖注入和测试替换。
//!
//! # 架构设计
//!
//! - **traits**: 定义 Reader/Writer trait 接口
//! - **ftl_io**: FTL 条目文件的默认实现
//! - **batch_io**: 批量 JSON 文件的默认实现
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ftl_rebuild::io::{DefaultEntryReader, EntryReader};
//!
//! let source = DefaultEntryReader.read(Path::new("brand.ftl"))?;
//! # Ok::<(), ftl_rebuild::FtlError>(())
//! ```
pub mod traits;
pub mod ftl_io;
pub mod batch_io;

// === 导出 trait 定义 ===
pub use traits::{EntryReader, EntryWriter, ReconstructedUnitWriter, TranslationUnitReader};

// === 导出默认实现 ===
pub use ftl_io::{DefaultEntryReader, DefaultEntryWriter};
pub use batch_io::{DefaultReconstructedUnitWriter, DefaultTranslationUnitReader};
