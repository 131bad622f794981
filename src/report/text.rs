use crate::model::scores::ScoreMatrix;
use crate::report::{format_score, shade, shade_legend};

const TITLE: &str = "Compatibility Scores";
const ROW_AXIS: &str = "Applicants";
const COLUMN_AXIS: &str = "Team Members";

/// Annotated text heatmap: one row per applicant, one column per member.
pub fn render_heatmap_text(matrix: &ScoreMatrix) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push_str("\n\n");

    if matrix.is_empty() {
        out.push_str("(no scores)\n");
        return out;
    }

    let mut cells = Vec::with_capacity(matrix.rows.len());
    for applicant in &matrix.rows {
        let row = matrix
            .columns
            .iter()
            .map(|member| match matrix.get(applicant, member) {
                Some(v) => format!("{} {}", format_score(v), shade(v)),
                None => "-".to_string(),
            })
            .collect::<Vec<_>>();
        cells.push(row);
    }

    let label_width = matrix
        .rows
        .iter()
        .map(|r| r.chars().count())
        .chain(std::iter::once(ROW_AXIS.len()))
        .max()
        .unwrap_or(0);
    let col_widths = matrix
        .columns
        .iter()
        .enumerate()
        .map(|(j, name)| {
            cells
                .iter()
                .map(|row| row[j].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    out.push_str(&format!("{ROW_AXIS:<label_width$} | {COLUMN_AXIS}\n"));
    let mut header = format!("{:<label_width$} |", "");
    for (name, width) in matrix.columns.iter().zip(&col_widths) {
        header.push_str(&format!(" {name:<width$}"));
    }
    out.push_str(header.trim_end());
    out.push('\n');
    let rule_len = label_width + 2 + col_widths.iter().map(|w| w + 1).sum::<usize>();
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for (applicant, row) in matrix.rows.iter().zip(&cells) {
        let mut line = format!("{applicant:<label_width$} |");
        for (cell, width) in row.iter().zip(&col_widths) {
            line.push_str(&format!(" {cell:<width$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("Scale: {}\n", shade_legend()));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
