use thiserror::Error;

/// All the ways an optimization run can fail.
///
/// Strategies are deterministic, so none of these are worth retrying:
/// a failure recurs identically on rerun.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptError {
    /// A part or the sheet has a non-positive dimension.
    #[error("invalid dimensions for {subject}: {width}x{height}")]
    InvalidDimension {
        subject: String,
        width: f64,
        height: f64,
    },
    /// A part's id does not match its position in the submitted list.
    #[error("part id {id} at index {index}, ids must match submission order")]
    IdMismatch { id: usize, index: usize },
    /// The part does not fit the sheet in any orientation allowed by the strategy.
    #[error("part {part_id} exceeds the sheet in every allowed orientation")]
    PartExceedsSheet { part_id: usize },
    /// No parts were submitted.
    #[error("no parts submitted")]
    EmptyInput,
    /// Every strategy failed to place a single part despite non-empty valid input.
    #[error("no strategy could place any part")]
    NoPlanFound,
}
