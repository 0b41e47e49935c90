//! Batch result

use serde::Serialize;

use crate::domain::entities::{Artifact, ArtifactBundle};

/// Artifacts of a whole batch
///
/// Bundles follow entity input order; artifacts inside a bundle follow stage
/// order. Nothing is merged or deduplicated across entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    bundles: Vec<ArtifactBundle>,
}

impl BatchResult {
    pub fn new(bundles: Vec<ArtifactBundle>) -> Self {
        Self { bundles }
    }

    /// Per-entity groupings, in entity input order
    pub fn bundles(&self) -> &[ArtifactBundle] {
        &self.bundles
    }

    /// Flat view over every artifact
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.bundles.iter().flat_map(|b| b.artifacts().iter())
    }

    /// Total number of artifacts
    pub fn artifact_count(&self) -> usize {
        self.bundles.iter().map(ArtifactBundle::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.artifact_count() == 0
    }

    /// Flatten into the output artifact list
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.bundles
            .into_iter()
            .flat_map(ArtifactBundle::into_artifacts)
            .collect()
    }
}
