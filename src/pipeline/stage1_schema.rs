use std::collections::HashSet;

use crate::input::{RawEntity, RawRoster};
use crate::model::entity::{AttributeSchema, Entity, Group, Roster};
use crate::pipeline::ScoreError;

/// Validates a raw roster against the schema of its first team member.
pub fn build_roster(raw: &RawRoster) -> Result<Roster, ScoreError> {
    let first = raw.team.first().ok_or(ScoreError::EmptyTeam)?;
    let schema = AttributeSchema::new(first.attributes.keys().cloned().collect());
    if schema.is_empty() {
        return Err(ScoreError::EmptySchema {
            entity: first.name.clone(),
        });
    }

    let team = convert_group(&raw.team, Group::Team, &schema)?;
    let applicants = convert_group(&raw.applicants, Group::Applicants, &schema)?;

    tracing::info!(
        team = team.len(),
        applicants = applicants.len(),
        attributes = %schema.names().join(","),
        "roster validated"
    );

    Ok(Roster::from_parts(schema, team, applicants))
}

fn convert_group(
    entities: &[RawEntity],
    group: Group,
    schema: &AttributeSchema,
) -> Result<Vec<Entity>, ScoreError> {
    let mut seen = HashSet::with_capacity(entities.len());
    let mut out = Vec::with_capacity(entities.len());
    for raw in entities {
        if !seen.insert(raw.name.as_str()) {
            return Err(ScoreError::DuplicateName {
                group,
                name: raw.name.clone(),
            });
        }
        out.push(to_entity(raw, schema)?);
    }
    Ok(out)
}

pub fn to_entity(raw: &RawEntity, schema: &AttributeSchema) -> Result<Entity, ScoreError> {
    let mut values = Vec::with_capacity(schema.len());
    let mut missing = Vec::new();
    for name in schema.names() {
        match raw.attributes.get(name) {
            Some(&value) => values.push(value),
            None => missing.push(name.clone()),
        }
    }
    let unexpected = raw
        .attributes
        .keys()
        .filter(|key| !schema.names().contains(*key))
        .cloned()
        .collect::<Vec<_>>();

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(ScoreError::SchemaMismatch {
            entity: raw.name.clone(),
            missing,
            unexpected,
        });
    }

    for (name, value) in schema.names().iter().zip(&values) {
        if !value.is_finite() {
            return Err(ScoreError::NonFiniteValue {
                entity: raw.name.clone(),
                attribute: name.clone(),
            });
        }
    }

    Ok(Entity::new(raw.name.clone(), values))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_schema.rs"]
mod tests;
