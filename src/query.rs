//! Width media queries in their CSS text form.

use std::fmt;

use smallvec::SmallVec;
use strum_macros::{Display, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum MediaFeature {
    MinWidth,
    MaxWidth,
}

/// A single `(feature: Npx)` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub feature: MediaFeature,
    pub px: u32,
}

impl Condition {
    pub const fn new(feature: MediaFeature, px: u32) -> Self {
        Self { feature, px }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {}px)", self.feature, self.px)
    }
}

/// A conjunction of width conditions, rendered as `(a) and (b)`.
///
/// Every query in a breakpoint table has one or two conditions, so they are
/// kept inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaQuery {
    conditions: SmallVec<[Condition; 2]>,
}

impl MediaQuery {
    pub fn new(condition: Condition) -> Self {
        let mut conditions = SmallVec::new();
        conditions.push(condition);
        Self { conditions }
    }

    /// The conjunction of `self` followed by `other`.
    #[must_use]
    pub fn and(&self, other: &MediaQuery) -> Self {
        let conditions = self
            .conditions
            .iter()
            .chain(other.conditions.iter())
            .copied()
            .collect();
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl From<Condition> for MediaQuery {
    fn from(condition: Condition) -> Self {
        Self::new(condition)
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}
