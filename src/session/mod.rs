//! In-memory assessment state for one session.
//!
//! The record set is created once from the catalog; later steps only toggle
//! activity flags and numeric inputs. Records are never added or removed.

pub mod file;
pub mod steps;

use crate::catalog::{self, classify};
use crate::core::{GapDefinition, GapRecord};
use crate::errors::LossmapError;
use crate::report::LossReport;

#[derive(Debug, Clone)]
pub struct Assessment {
    records: Vec<GapRecord>,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

impl Assessment {
    /// Fresh session: one inactive record per catalog entry, catalog order
    pub fn new() -> Self {
        Self {
            records: catalog::GAPS
                .iter()
                .map(|gap| GapRecord::inactive(gap.id))
                .collect(),
        }
    }

    pub fn records(&self) -> &[GapRecord] {
        &self.records
    }

    pub fn record(&self, id: u32) -> Option<&GapRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn record_mut(&mut self, id: u32) -> Result<&mut GapRecord, LossmapError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LossmapError::UnknownGap(id))
    }

    pub fn set_active(&mut self, id: u32, active: bool) -> Result<(), LossmapError> {
        self.record_mut(id)?.active = active;
        Ok(())
    }

    /// Set the usage quantity and unit cost for one gap. Negative values
    /// clamp to zero; the record model only holds non-negative inputs.
    pub fn set_inputs(&mut self, id: u32, quantity: f64, unit_cost: f64) -> Result<(), LossmapError> {
        let record = self.record_mut(id)?;
        record.quantity = quantity.max(0.0);
        record.unit_cost = unit_cost.max(0.0);
        Ok(())
    }

    pub fn reset(&mut self, id: u32) -> Result<(), LossmapError> {
        self.record_mut(id)?.reset();
        Ok(())
    }

    /// Activate every gap in a confirmed scope (from the mapping step).
    /// Ids are already deduplicated by `catalog::suggested_scope`; unknown
    /// ids are skipped with a warning.
    pub fn activate_scope(&mut self, ids: &[u32]) {
        for id in ids {
            if self.set_active(*id, true).is_err() {
                log::warn!("ignoring unknown gap id {id} in confirmed scope");
            }
        }
    }

    /// Merge loaded entries into the session. Only known records change;
    /// unknown ids are skipped with a warning.
    pub fn apply(&mut self, entries: &[GapRecord]) {
        for entry in entries {
            match self.record_mut(entry.id) {
                Ok(record) => {
                    record.active = entry.active;
                    record.quantity = entry.quantity.max(0.0);
                    record.unit_cost = entry.unit_cost.max(0.0);
                }
                Err(_) => log::warn!("ignoring entry for unknown gap id {}", entry.id),
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.active).count()
    }

    /// Catalog gaps outside the given scope, grouped by display category
    /// for the additional-assessment step
    pub fn additional_gaps(&self, scope: &[u32]) -> Vec<(&'static str, Vec<&'static GapDefinition>)> {
        classify::group_by_category(
            catalog::GAPS
                .iter()
                .filter(|gap| !scope.contains(&gap.id)),
        )
    }

    /// Compose the aggregate report over the current records
    pub fn report(&self) -> LossReport {
        LossReport::compose(&self.records)
    }
}
