use crate::strategies::Algorithm;
use serde::{Deserialize, Serialize};

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPart {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
}

/// External representation of an [`Instance`](crate::entities::Instance):
/// the flat part list and sheet size supplied by the caller.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    pub parts: Vec<ExtPart>,
    pub sheet: ExtSheet,
}

/// A placement as consumed by the rendering collaborator.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacement {
    /// Name of the placed part
    pub part: String,
    /// Bottom-left corner of the placement on its sheet
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`PackSolution`](crate::entities::PackSolution).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    pub algorithm: Algorithm,
    pub sheets_used: usize,
    pub utilization: f64,
    pub waste: f64,
    /// Placements per sheet, in sheet creation order
    pub sheets: Vec<Vec<ExtPlacement>>,
    /// Names of parts the strategy could not place anywhere
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unplaced: Vec<String>,
}
