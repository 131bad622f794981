use crate::model::entity::Entity;
use crate::model::profile::ScoringProfile;
use crate::model::scores::{ScoreMatrix, ScoreRecord};
use crate::pipeline::ScoreError;
use crate::pipeline::stage2_distance::distance;

/// Score of one applicant against one member, normalized by the profile's
/// fixed maximum distance. Not clamped: distances above the maximum go negative.
pub fn pairwise_score(
    applicant: &Entity,
    member: &Entity,
    profile: &ScoringProfile,
) -> Result<f64, ScoreError> {
    let d = distance(&applicant.values, &member.values)?;
    if d == 0.0 {
        return Ok(1.0);
    }
    Ok(1.0 - d / profile.max_pairwise_distance)
}

/// Score of one applicant against the whole team, normalized by the spread
/// of the team's own distances: `1 - min / max`.
pub fn aggregate_score(applicant: &Entity, team: &[Entity]) -> Result<f64, ScoreError> {
    if team.is_empty() {
        return Err(ScoreError::EmptyTeam);
    }
    let mut min_d = f64::INFINITY;
    let mut max_d = 0.0f64;
    for member in team {
        let d = distance(&applicant.values, &member.values)?;
        min_d = min_d.min(d);
        max_d = max_d.max(d);
    }
    if max_d == 0.0 {
        return Ok(1.0);
    }
    Ok(1.0 - min_d / max_d)
}

pub fn score_applicants(
    team: &[Entity],
    applicants: &[Entity],
    profile: &ScoringProfile,
) -> Result<Vec<ScoreRecord>, ScoreError> {
    let mut out = Vec::with_capacity(applicants.len());
    for applicant in applicants {
        let score = round_to(aggregate_score(applicant, team)?, profile.decimals);
        tracing::debug!(applicant = %applicant.name, score, "aggregate score");
        out.push(ScoreRecord {
            name: applicant.name.clone(),
            score,
        });
    }
    Ok(out)
}

pub fn build_score_matrix(
    team: &[Entity],
    applicants: &[Entity],
    profile: &ScoringProfile,
) -> Result<ScoreMatrix, ScoreError> {
    let mut values = Vec::with_capacity(applicants.len());
    for applicant in applicants {
        let mut row = Vec::with_capacity(team.len());
        for member in team {
            let raw = pairwise_score(applicant, member, profile)?;
            if raw < 0.0 {
                tracing::warn!(
                    applicant = %applicant.name,
                    member = %member.name,
                    score = raw,
                    "pairwise distance exceeds {}; score is negative",
                    profile.max_pairwise_distance
                );
            }
            row.push(round_to(raw, profile.decimals));
        }
        values.push(row);
    }

    Ok(ScoreMatrix {
        rows: applicants.iter().map(|a| a.name.clone()).collect(),
        columns: team.iter().map(|m| m.name.clone()).collect(),
        values,
    })
}

/// Rounds to `decimals` places, ties to even on the exact binary value.
/// A negative zero result becomes `0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // exact error of the product; decides the cases where it landed on .5
    let residual = value.mul_add(factor, -scaled);
    let floor = scaled.floor();
    let whole = if scaled - floor == 0.5 {
        if residual > 0.0 {
            floor + 1.0
        } else if residual < 0.0 || floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };
    let rounded = whole / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scores.rs"]
mod tests;
