use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::scores::{ScoreMatrix, ScoreRecord};
use crate::report::format_score;
use crate::report::json::render_scored_applicants_json;
use crate::report::text::render_heatmap_text;

pub const SCORES_FILE: &str = "scored_applicants.json";
pub const MATRIX_FILE: &str = "score_matrix.tsv";
pub const HEATMAP_FILE: &str = "heatmap.txt";

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub scored: &'a [ScoreRecord],
    pub matrix: &'a ScoreMatrix,
}

/// Writes the score artifacts into `out_dir` and returns the written paths.
pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let scores_path = out_dir.join(SCORES_FILE);
    let json = render_scored_applicants_json(input.scored)?;
    write_text(&scores_path, &json)?;

    let matrix_path = out_dir.join(MATRIX_FILE);
    write_matrix_tsv(input.matrix, &matrix_path)?;

    let heatmap_path = out_dir.join(HEATMAP_FILE);
    write_text(&heatmap_path, &render_heatmap_text(input.matrix))?;

    let written = vec![scores_path, matrix_path, heatmap_path];
    for path in &written {
        tracing::info!(path = %path.display(), "wrote report");
    }
    Ok(written)
}

fn write_matrix_tsv(matrix: &ScoreMatrix, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec!["applicant"];
    header.extend(matrix.columns.iter().map(String::as_str));
    writeln!(w, "{}", header.join("\t"))?;

    for (applicant, row) in matrix.rows.iter().zip(&matrix.values) {
        let mut fields = Vec::with_capacity(row.len() + 1);
        fields.push(applicant.clone());
        fields.extend(row.iter().map(|&v| format_score(v)));
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        f.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
