//! CLI response types returned as JSON by `cnv` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Project, ResearchEntry};

/// Response from `cnv project create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCreateResponse {
    pub project: Project,
}

/// Response from `cnv project list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// Response from `cnv research create` and `cnv research edit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchSaveResponse {
    pub research: ResearchEntry,
}

/// Response from `cnv research delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchDeleteResponse {
    pub deleted: bool,
    pub id: String,
}
