use thiserror::Error;

use crate::model::entity::Group;

pub mod stage1_schema;
pub mod stage2_distance;
pub mod stage3_scores;
pub mod stage4_report;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("team is empty; at least one member is required")]
    EmptyTeam,

    #[error("entity {entity:?} has no attributes")]
    EmptySchema { entity: String },

    #[error("attribute vectors differ in length (expected {expected}, found {found})")]
    AttributeMismatch { expected: usize, found: usize },

    #[error("distance between attribute vectors is not finite")]
    NonFiniteDistance,

    #[error(
        "entity {entity:?} does not match the attribute schema (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    SchemaMismatch {
        entity: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("duplicate name {name:?} in {group}")]
    DuplicateName { group: Group, name: String },

    #[error("entity {entity:?} has a non-finite value for {attribute:?}")]
    NonFiniteValue { entity: String, attribute: String },
}
