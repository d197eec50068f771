use crate::size_class::SizeClass;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakpointError {
    #[error("breakpoint key not found: {0:?}")]
    KeyNotFound(String),
    #[error("size class `{0}` is configured more than once")]
    DuplicateSizeClass(SizeClass),
    #[error("size class `{class}` at {px}px does not come after `{previous}` at {previous_px}px")]
    NonMonotonic {
        class: SizeClass,
        px: u32,
        previous: SizeClass,
        previous_px: u32,
    },
    #[error("size class `{class}` has no valid variants at {px}px")]
    InvalidBoundary { class: SizeClass, px: u32 },
    #[error("compound key `{compound}` refers to `{part}`, which is not in the table")]
    UnknownCompoundPart { compound: String, part: String },
    #[error("breakpoint key `{0}` is defined more than once")]
    DuplicateKey(String),
}
