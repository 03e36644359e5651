use serde::{Deserialize, Serialize};

/// One `csv_1` row: one per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRow {
    pub id: String,
    pub level: String,
}

/// One `csv_2` row: one per object entry, sharing the owning document's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRow {
    pub id: String,
    pub object_name: String,
}

/// Rows produced from a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRows {
    pub parent: ParentRow,
    pub children: Vec<ChildRow>,
}

/// A document that was dropped from an archive's contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub document: String,
    pub reason: String,
}

/// Immutable per-archive result returned by a worker.
///
/// Rows keep the document order of the archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveOutcome {
    pub archive: String,
    pub documents_total: usize,
    pub parents: Vec<ParentRow>,
    pub children: Vec<ChildRow>,
    pub failures: Vec<DocumentFailure>,
}

impl ArchiveOutcome {
    pub fn new(archive: impl Into<String>) -> Self {
        Self {
            archive: archive.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, rows: DocumentRows) {
        self.parents.push(rows.parent);
        self.children.extend(rows.children);
    }
}

/// Counters reported at the end of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub archives_seen: usize,
    pub archives_processed: usize,
    pub archives_skipped: usize,
    pub archives_failed: usize,
    pub documents_extracted: usize,
    pub documents_failed: usize,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        self.archives_failed > 0 || self.documents_failed > 0
    }
}

/// The two flattened tables plus the run summary.
#[derive(Debug, Clone, Default)]
pub struct AggregatedTables {
    pub parents: Vec<ParentRow>,
    pub children: Vec<ChildRow>,
    pub summary: BatchSummary,
}
