pub mod json;
pub mod text;

const SHADES: [(f64, char); 4] = [(0.2, '·'), (0.4, '░'), (0.6, '▒'), (0.8, '▓')];
const SHADE_TOP: char = '█';

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

/// Maps a score to a shade glyph; values outside [0, 1] take the nearest end.
pub fn shade(v: f64) -> char {
    let v = v.clamp(0.0, 1.0);
    for (upper, glyph) in SHADES {
        if v < upper {
            return glyph;
        }
    }
    SHADE_TOP
}

pub fn shade_legend() -> String {
    let mut parts = Vec::with_capacity(SHADES.len() + 1);
    for (upper, glyph) in SHADES {
        parts.push(format!("{glyph} <{}", format_score(upper)));
    }
    let last = SHADES[SHADES.len() - 1].0;
    parts.push(format!("{SHADE_TOP} >={}", format_score(last)));
    parts.join("  ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
