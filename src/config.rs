//! Configuration a [`BreakpointTable`](crate::BreakpointTable) is generated from.
//!
//! [`Breakpoints::default`] describes the standard table. A custom
//! configuration can move boundaries, drop variants or add compound keys; it
//! must pass [`Breakpoints::validate`] before a table is built from it.

use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;

use crate::{
    error::BreakpointError,
    key::{BreakpointKey, CompoundKey},
    query::{Condition, MediaFeature, MediaQuery},
    size_class::{Comparison, SizeClass, Variants},
};

/// The boundary of one size class and the keys it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeClassBreakpoint {
    pub class: SizeClass,
    /// The last pixel matched by `<=class`.
    pub px: u32,
    pub variants: Variants,
}

impl SizeClassBreakpoint {
    pub const fn new(class: SizeClass, px: u32, variants: Variants) -> Self {
        Self {
            class,
            px,
            variants,
        }
    }

    /// The query for `comparison` around this boundary. A bare key matches up
    /// to and including the boundary.
    pub fn query(&self, comparison: Option<Comparison>) -> Option<MediaQuery> {
        let condition = match comparison {
            None => Condition::new(MediaFeature::MaxWidth, self.px),
            Some(comparison) => comparison.condition(self.px)?,
        };
        Some(condition.into())
    }

    /// Keys enabled by `variants`, bare key first, then `<`, `<=`, `>=`, `>`.
    pub fn keys(&self) -> impl Iterator<Item = BreakpointKey> + '_ {
        let class = self.class;
        std::iter::once(None)
            .chain(Comparison::iter().map(Some))
            .map(move |comparison| BreakpointKey { comparison, class })
            .filter(|key| self.variants.contains(key.variant()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Size classes in ascending order.
    pub classes: Vec<SizeClassBreakpoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub compounds: Vec<CompoundKey>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        use Comparison::*;
        use SizeClass::*;

        Self {
            classes: vec![
                SizeClassBreakpoint::new(Phone, 320, Variants::BARE),
                SizeClassBreakpoint::new(Mobile, 667, Variants::COMPARISONS),
                SizeClassBreakpoint::new(Tablet, 768, Variants::COMPARISONS),
                SizeClassBreakpoint::new(Povertyscreen, 840, Variants::COMPARISONS),
                SizeClassBreakpoint::new(Smallscreen, 960, Variants::COMPARISONS),
                SizeClassBreakpoint::new(Desktop, 1024, Variants::COMPARISONS),
                SizeClassBreakpoint::new(Widescreen, 1140, Variants::COMPARISONS),
            ],
            compounds: vec![CompoundKey::new(
                BreakpointKey::new(Lt, Widescreen),
                BreakpointKey::new(Ge, Smallscreen),
            )],
        }
    }
}

impl Breakpoints {
    pub fn class(&self, class: SizeClass) -> Option<&SizeClassBreakpoint> {
        self.classes.iter().find(|bp| bp.class == class)
    }

    /// The query for a single-class key, if the configuration emits it.
    pub fn query(&self, key: BreakpointKey) -> Option<MediaQuery> {
        let bp = self.class(key.class)?;
        if !bp.variants.contains(key.variant()) {
            return None;
        }
        bp.query(key.comparison)
    }

    pub fn validate(&self) -> Result<(), BreakpointError> {
        let mut seen = FxHashSet::default();
        let mut previous: Option<&SizeClassBreakpoint> = None;

        for bp in &self.classes {
            if !seen.insert(bp.class) {
                return Err(BreakpointError::DuplicateSizeClass(bp.class));
            }
            if let Some(prev) = previous
                && (bp.class <= prev.class || bp.px <= prev.px)
            {
                return Err(BreakpointError::NonMonotonic {
                    class: bp.class,
                    px: bp.px,
                    previous: prev.class,
                    previous_px: prev.px,
                });
            }
            if bp.variants.is_empty() || bp.keys().any(|key| bp.query(key.comparison).is_none())
            {
                return Err(BreakpointError::InvalidBoundary {
                    class: bp.class,
                    px: bp.px,
                });
            }
            previous = Some(bp);
        }

        let mut compounds = FxHashSet::default();
        for compound in &self.compounds {
            for part in [compound.first, compound.second] {
                if self.query(part).is_none() {
                    return Err(BreakpointError::UnknownCompoundPart {
                        compound: compound.to_string(),
                        part: part.to_string(),
                    });
                }
            }
            if !compounds.insert(*compound) {
                return Err(BreakpointError::DuplicateKey(compound.to_string()));
            }
        }

        Ok(())
    }
}
