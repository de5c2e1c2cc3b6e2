//! 批量重建
//!
//! 每条重建互不依赖，使用 rayon 并行处理，输出顺序与输入一致。
//! 单条失败只记录在对应结果中，不会中断整批。
use rayon::prelude::*;

use crate::string_types::{ReconstructedUnit, TranslationUnit};
use super::reconstruct;

/// 并行重建一批译文
pub fn reconstruct_batch(units: Vec<TranslationUnit>) -> Vec<ReconstructedUnit> {
    units
        .into_par_iter()
        .map(|unit| {
            let result = reconstruct(&unit.original, &unit.translation);
            if let Err(error) = &result {
                tracing::warn!("重建失败 [{}]: {}", unit.label(), error);
            }
            ReconstructedUnit::from_result(unit, result)
        })
        .collect()
}

/// 批量结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn of(results: &[ReconstructedUnit]) -> Self {
        let succeeded = results.iter().filter(|unit| unit.is_success()).count();
        BatchSummary {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "共 {} 条，成功 {} 条，失败 {} 条",
            self.total, self.succeeded, self.failed
        )
    }
}
