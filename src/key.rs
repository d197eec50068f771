use std::fmt;

use crate::size_class::{Comparison, SizeClass, Variants};

/// A single-class key such as `phone` or `>=tablet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointKey {
    #[cfg_attr(feature = "serde", serde(default))]
    pub comparison: Option<Comparison>,
    pub class: SizeClass,
}

impl BreakpointKey {
    pub const fn new(comparison: Comparison, class: SizeClass) -> Self {
        Self {
            comparison: Some(comparison),
            class,
        }
    }

    pub const fn bare(class: SizeClass) -> Self {
        Self {
            comparison: None,
            class,
        }
    }

    /// The variant flag a size class needs for this key to exist.
    pub fn variant(&self) -> Variants {
        self.comparison
            .map_or(Variants::BARE, Comparison::variant)
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comparison) = self.comparison {
            f.write_str(comparison.prefix())?;
        }
        f.write_str(self.class.name())
    }
}

/// Two keys separated by a single space, e.g. `<widescreen >=smallscreen`.
/// Its query is the conjunction of both parts, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundKey {
    pub first: BreakpointKey,
    pub second: BreakpointKey,
}

impl CompoundKey {
    pub const fn new(first: BreakpointKey, second: BreakpointKey) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for CompoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
