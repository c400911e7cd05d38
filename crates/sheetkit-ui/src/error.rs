//! Errors returned by imperative [`BottomSheet`](crate::BottomSheet) commands.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet has no resting position to move to.
    NoStops,
    /// The requested stop index is past the last stop.
    StopOutOfRange { index: usize, len: usize },
    /// A dismiss cycle is already under way.
    Dismissed,
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::NoStops => write!(f, "sheet has no stops"),
            SheetError::StopOutOfRange { index, len } => {
                write!(f, "stop {index} out of range; sheet has {len} stops")
            }
            SheetError::Dismissed => write!(f, "sheet is being dismissed"),
        }
    }
}

impl std::error::Error for SheetError {}
