use crate::entities::{Part, Sheet};
use crate::error::OptError;

/// Validated, immutable input to one optimization run: the parts to place and
/// the stock-sheet size. Structural preconditions are checked exactly once
/// here, before any strategy runs.
#[derive(Clone, Debug)]
pub struct Instance {
    pub parts: Vec<Part>,
    pub sheet: Sheet,
}

impl Instance {
    pub fn new(parts: Vec<Part>, sheet: Sheet) -> Result<Self, OptError> {
        if parts.is_empty() {
            return Err(OptError::EmptyInput);
        }
        if !(sheet.width > 0.0 && sheet.height > 0.0) {
            return Err(OptError::InvalidDimension {
                subject: "sheet".to_string(),
                width: sheet.width,
                height: sheet.height,
            });
        }
        for (index, part) in parts.iter().enumerate() {
            if !(part.width > 0.0 && part.height > 0.0) {
                return Err(OptError::InvalidDimension {
                    subject: part.name.clone(),
                    width: part.width,
                    height: part.height,
                });
            }
            // `Instance::part` and the conservation check index by id
            if part.id != index {
                return Err(OptError::IdMismatch { id: part.id, index });
            }
        }

        Ok(Instance { parts, sheet })
    }

    pub fn part(&self, id: usize) -> &Part {
        &self.parts[id]
    }
}
