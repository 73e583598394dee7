//! Cross-report aggregation and global critical path selection.

use crate::error::AnalysisError;
use crate::module::{ModuleRecord, UNNAMED_DESIGN};
use gcpa_common::{max_by_magnitude, TimeValue};
use indexmap::IndexMap;

/// Module records keyed by design name, in the order reports were analyzed.
///
/// Inserting a record whose design name is already present replaces the
/// earlier record in place: it keeps the earlier position and nothing is
/// merged.
#[derive(Clone, Debug, Default)]
pub struct GlobalSummary {
    modules: IndexMap<Option<String>, ModuleRecord>,
}

/// The block holding the largest critical path across all reports.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalCriticalPath {
    /// Design name of the reported block.
    pub design_name: Option<String>,
    /// The block's critical path, as written in its report.
    pub critical_path: TimeValue,
}

impl GlobalCriticalPath {
    /// Returns the design name, or [`UNNAMED_DESIGN`].
    pub fn display_name(&self) -> &str {
        self.design_name.as_deref().unwrap_or(UNNAMED_DESIGN)
    }
}

/// A finished analysis: every module plus the global critical path.
#[derive(Clone, Debug)]
pub struct AnalysisSummary {
    modules: IndexMap<Option<String>, ModuleRecord>,
    global: GlobalCriticalPath,
}

impl GlobalSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module, returning the record it replaced, if any.
    pub fn insert(&mut self, record: ModuleRecord) -> Option<ModuleRecord> {
        let replaced = self.modules.insert(record.design_name.clone(), record);
        if let Some(old) = &replaced {
            tracing::debug!(design = old.display_name(), "replacing earlier module record");
        }
        replaced
    }

    /// Selects the global critical path and freezes the summary.
    ///
    /// The maximum is taken over normalized delays, the first module winning
    /// ties. The reported block is then the first module whose critical path
    /// is written exactly like that maximum.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] if no module has a critical path,
    /// and [`AnalysisError::Time`] on an unsupported unit.
    pub fn finish(self) -> Result<AnalysisSummary, AnalysisError> {
        let candidates = self
            .modules
            .values()
            .filter_map(|module| module.critical_path.as_ref().map(|path| ((), path)));
        let Some((_, max)) = max_by_magnitude(candidates)? else {
            return Err(AnalysisError::EmptyInput);
        };

        let global = self
            .modules
            .values()
            .find(|module| module.critical_path.as_ref() == Some(max))
            .map(|module| GlobalCriticalPath {
                design_name: module.design_name.clone(),
                critical_path: max.clone(),
            })
            .ok_or(AnalysisError::EmptyInput)?;

        tracing::debug!(
            design = global.display_name(),
            critical_path = %global.critical_path,
            "selected global critical path"
        );

        Ok(AnalysisSummary {
            modules: self.modules,
            global,
        })
    }
}

impl FromIterator<ModuleRecord> for GlobalSummary {
    fn from_iter<I: IntoIterator<Item = ModuleRecord>>(iter: I) -> Self {
        let mut summary = Self::new();
        for record in iter {
            summary.insert(record);
        }
        summary
    }
}

impl AnalysisSummary {
    /// Iterates over the modules in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.modules.values()
    }

    /// Looks up a module by design name.
    pub fn module(&self, design_name: Option<&str>) -> Option<&ModuleRecord> {
        self.modules.get(&design_name.map(str::to_string))
    }

    /// Returns the block with the largest critical path.
    pub fn global(&self) -> &GlobalCriticalPath {
        &self.global
    }
}
