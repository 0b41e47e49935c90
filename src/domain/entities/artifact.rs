//! Artifact entity - one unit of generated output
//!
//! Artifacts are produced by stage generators and never mutated afterwards.
//! The pipeline only reads their paths; everything else is forwarded as is.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// A generated file: where it belongs and what it contains
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Path relative to the generated project root
    path: PathBuf,
    /// Generated content
    content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// SHA256 of the content, `sha256:` prefixed
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// Output of a stage that may emit several artifacts
///
/// The primary artifact is the one later stages reference by path. It is an
/// explicit field so a generator cannot demote it by reordering its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    primary: Artifact,
    secondary: Vec<Artifact>,
}

impl StageOutput {
    pub fn new(primary: Artifact) -> Self {
        Self {
            primary,
            secondary: Vec::new(),
        }
    }

    pub fn with_secondary(mut self, artifact: Artifact) -> Self {
        self.secondary.push(artifact);
        self
    }

    pub fn primary(&self) -> &Artifact {
        &self.primary
    }

    /// Path downstream stages reference
    pub fn primary_path(&self) -> &Path {
        self.primary.path()
    }

    pub fn secondary(&self) -> &[Artifact] {
        &self.secondary
    }

    pub fn len(&self) -> usize {
        1 + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flatten to primary first, then secondary artifacts in generator order
    pub fn into_artifacts(self) -> Vec<Artifact> {
        let mut artifacts = Vec::with_capacity(self.len());
        artifacts.push(self.primary);
        artifacts.extend(self.secondary);
        artifacts
    }
}

impl From<Artifact> for StageOutput {
    fn from(primary: Artifact) -> Self {
        Self::new(primary)
    }
}

/// All artifacts produced for one entity, in stage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactBundle {
    entity: String,
    artifacts: Vec<Artifact>,
}

impl ArtifactBundle {
    pub fn new(entity: impl Into<String>, artifacts: Vec<Artifact>) -> Self {
        Self {
            entity: entity.into(),
            artifacts,
        }
    }

    /// Declared name of the entity this bundle was generated for
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}
