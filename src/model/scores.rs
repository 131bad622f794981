use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredApplicants {
    #[serde(rename = "scoredApplicants")]
    pub scored_applicants: Vec<ScoreRecord>,
}

/// Applicant x member table of pairwise scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    pub fn get(&self, applicant: &str, member: &str) -> Option<f64> {
        let row = self.rows.iter().position(|r| r == applicant)?;
        let col = self.columns.iter().position(|c| c == member)?;
        self.values.get(row)?.get(col).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}
