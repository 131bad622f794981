use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::scores::{ScoreRecord, ScoredApplicants};

pub fn render_scored_applicants_json(records: &[ScoreRecord]) -> Result<String, serde_json::Error> {
    let doc = ScoredApplicants {
        scored_applicants: records.to_vec(),
    };
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
