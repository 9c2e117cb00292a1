//! Aggregated install failures.

use std::collections::BTreeMap;

use crate::error::EddyError;

/// Failures of one installer run, keyed by tool.
///
/// A tool with no entry installed successfully.
#[derive(Debug, Default)]
pub struct InstallReport {
    failures: BTreeMap<String, EddyError>,
}

impl InstallReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `tool` failed. A second failure for the same tool replaces the first.
    pub fn record(&mut self, tool: impl Into<String>, error: EddyError) {
        self.failures.insert(tool.into(), error);
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn get(&self, tool: &str) -> Option<&EddyError> {
        self.failures.get(tool)
    }

    /// Failures in tool-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EddyError)> {
        self.failures.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove and return the failure of `tool`.
    pub fn take(&mut self, tool: &str) -> Option<EddyError> {
        self.failures.remove(tool)
    }
}

/// Failures of a whole run, keyed by ecosystem then tool.
#[derive(Debug, Default)]
pub struct RunReport {
    ecosystems: BTreeMap<String, InstallReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one installer's report under `ecosystem`.
    ///
    /// Empty reports are dropped; failures for an ecosystem already present
    /// are added to it.
    pub fn merge(&mut self, ecosystem: &str, report: InstallReport) {
        if report.is_empty() {
            return;
        }
        let entry = self.ecosystems.entry(ecosystem.to_string()).or_default();
        for (tool, error) in report.failures {
            entry.record(tool, error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ecosystems.values().all(InstallReport::is_empty)
    }

    /// Total failed tools across ecosystems.
    pub fn failure_count(&self) -> usize {
        self.ecosystems.values().map(InstallReport::len).sum()
    }

    pub fn ecosystem(&self, ecosystem: &str) -> Option<&InstallReport> {
        self.ecosystems.get(ecosystem)
    }

    /// `(ecosystem, tool, error)` for every failure.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str, &EddyError)> {
        self.ecosystems.iter().flat_map(|(ecosystem, report)| {
            report
                .iter()
                .map(move |(tool, error)| (ecosystem.as_str(), tool, error))
        })
    }
}
