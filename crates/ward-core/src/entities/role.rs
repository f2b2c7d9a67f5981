use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EcosystemStatus;

/// A named workflow and the policies that govern it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,
    #[serde(default)]
    pub policies: BTreeSet<String>,
}

impl Workflow {
    pub fn new<I, S>(name: impl Into<String>, policies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            policies: policies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything a single role grants. Attribution is added at resolution time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CapabilityBundle {
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub vault_access: bool,
    #[serde(default)]
    pub ecosystem: EcosystemStatus,
    #[serde(default)]
    pub dashboards: Vec<String>,
}

impl CapabilityBundle {
    /// Whether the bundle grants nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
            && !self.vault_access
            && !self.ecosystem.is_granted()
            && self.dashboards.is_empty()
    }
}

/// A catalog role: its name is the primary key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    pub capabilities: CapabilityBundle,
}
