//! Coordinate and color normalization.
//!
//! Callers supply pixel coordinates in one of three shapes: a flat numeric
//! sequence, a sequence of `{x,y}` records, or a sequence of `[x,y]`
//! pairs. All three are reduced to the canonical wire format: a flat
//! sequence of alternating x,y integers, each wrapped into tile-local
//! `[0, 1000)` space. Pure transformation, no I/O.

use serde_json::Value;

/// Tile edge length. Pixel coordinates are wrapped modulo this value.
pub const TILE_SIZE: i64 = 1000;

/// A caller-supplied coordinate collection, shape-detected from JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordInput {
    /// Flat `[x0, y0, x1, y1, ...]`; consecutive pairs form points.
    Flat(Vec<f64>),
    /// `[{"x": .., "y": ..}, ...]`.
    Points(Vec<(f64, f64)>),
    /// `[[x, y], ...]`.
    Pairs(Vec<(f64, f64)>),
    /// Not an array, or the first element matched no recognized shape.
    Empty,
}

impl CoordInput {
    /// Detect the collection shape by inspecting the first element.
    pub fn from_value(value: &Value) -> Self {
        let Some(arr) = value.as_array() else {
            return Self::Empty;
        };
        match arr.first() {
            None => Self::Flat(Vec::new()),
            Some(Value::Number(_)) => {
                Self::Flat(arr.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect())
            }
            Some(Value::Object(first)) => {
                if !first.contains_key("x") && !first.contains_key("y") {
                    return Self::Empty;
                }
                Self::Points(
                    arr.iter()
                        .map(|v| (field_num(v, "x"), field_num(v, "y")))
                        .collect(),
                )
            }
            Some(Value::Array(_)) => Self::Pairs(
                arr.iter()
                    .map(|v| (index_num(v, 0), index_num(v, 1)))
                    .collect(),
            ),
            Some(_) => Self::Empty,
        }
    }

    /// Candidate (x, y) pairs in input order, before wrapping. Invalid
    /// components surface as NaN so downstream filtering can drop them.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        match self {
            Self::Flat(values) => values
                .chunks(2)
                .map(|c| (c[0], c.get(1).copied().unwrap_or(f64::NAN)))
                .collect(),
            Self::Points(points) | Self::Pairs(points) => points.clone(),
            Self::Empty => Vec::new(),
        }
    }
}

fn field_num(v: &Value, key: &str) -> f64 {
    v.get(key).and_then(Value::as_f64).unwrap_or(f64::NAN)
}

fn index_num(v: &Value, idx: usize) -> f64 {
    v.get(idx).and_then(Value::as_f64).unwrap_or(f64::NAN)
}

/// Floored modulo into `[0, TILE_SIZE)`.
fn wrap(v: i64) -> u16 {
    (((v % TILE_SIZE) + TILE_SIZE) % TILE_SIZE) as u16
}

/// Truncate toward zero; non-finite values are rejected, not substituted.
fn trunc_finite(v: f64) -> Option<i64> {
    v.is_finite().then(|| v.trunc() as i64)
}

fn wrap_pair(x: f64, y: f64) -> Option<(u16, u16)> {
    match (trunc_finite(x), trunc_finite(y)) {
        (Some(x), Some(y)) => Some((wrap(x), wrap(y))),
        _ => None,
    }
}

/// Normalize a coordinate collection to the flat wire sequence, dropping
/// pairs with a non-finite component.
pub fn normalize_coords(coords: &Value) -> Vec<u16> {
    CoordInput::from_value(coords)
        .pairs()
        .into_iter()
        .filter_map(|(x, y)| wrap_pair(x, y))
        .flat_map(|(x, y)| [x, y])
        .collect()
}

/// Coerce a color sequence to integer indices: truncation toward zero,
/// with anything non-numeric falling back to 0. Non-array input yields
/// an empty sequence.
pub fn normalize_colors(colors: &Value) -> Vec<i32> {
    let Some(arr) = colors.as_array() else {
        return Vec::new();
    };
    arr.iter().map(coerce_color).collect()
}

fn coerce_color(v: &Value) -> i32 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    };
    if n.is_finite() { n.trunc() as i32 } else { 0 }
}

/// Normalize coordinates and colors together.
///
/// When the two inputs describe the same number of logical points, a
/// coordinate pair dropped for being non-finite takes its color with it,
/// so normalization can never desynchronize the sequences. Inputs whose
/// counts already disagree pass through per-sequence normalization
/// unchanged and are rejected by the submitter's length check.
pub fn normalize(coords: &Value, colors: &Value) -> (Vec<u16>, Vec<i32>) {
    let pairs = CoordInput::from_value(coords).pairs();
    let colors_norm = normalize_colors(colors);

    if pairs.len() != colors_norm.len() {
        return (normalize_from_pairs(&pairs), colors_norm);
    }

    let mut flat = Vec::with_capacity(pairs.len() * 2);
    let mut kept_colors = Vec::with_capacity(colors_norm.len());
    for (&(x, y), &color) in pairs.iter().zip(&colors_norm) {
        if let Some((x, y)) = wrap_pair(x, y) {
            flat.push(x);
            flat.push(y);
            kept_colors.push(color);
        }
    }
    (flat, kept_colors)
}

fn normalize_from_pairs(pairs: &[(f64, f64)]) -> Vec<u16> {
    pairs
        .iter()
        .filter_map(|&(x, y)| wrap_pair(x, y))
        .flat_map(|(x, y)| [x, y])
        .collect()
}

#[cfg(test)]
#[path = "coords_tests.rs"]
mod tests;
