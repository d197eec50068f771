use bitflags::bitflags;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::query::{Condition, MediaFeature};

bitflags! {
  /// Which keys a size class contributes to a table.
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  pub struct Variants: u8 {
    /// The unprefixed key, e.g. `phone`.
    const BARE = 1;
    const LT = 2;
    const LE = 4;
    const GE = 8;
    const GT = 16;

    const COMPARISONS = Self::LT.bits() | Self::LE.bits() | Self::GE.bits() | Self::GT.bits();
  }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Variants {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Variants {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// A named viewport category. Variants are declared in ascending width order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum SizeClass {
    Phone,
    Mobile,
    Tablet,
    Povertyscreen,
    Smallscreen,
    Desktop,
    Widescreen,
}

impl SizeClass {
    pub const ALL: [SizeClass; 7] = [
        SizeClass::Phone,
        SizeClass::Mobile,
        SizeClass::Tablet,
        SizeClass::Povertyscreen,
        SizeClass::Smallscreen,
        SizeClass::Desktop,
        SizeClass::Widescreen,
    ];

    /// The token used for this class inside breakpoint keys.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The prefix of a breakpoint key, relative to a size class boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Comparison {
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = ">")]
    Gt,
}

impl Comparison {
    pub fn prefix(self) -> &'static str {
        self.into()
    }

    pub fn variant(self) -> Variants {
        match self {
            Comparison::Lt => Variants::LT,
            Comparison::Le => Variants::LE,
            Comparison::Ge => Variants::GE,
            Comparison::Gt => Variants::GT,
        }
    }

    /// The width condition for this comparison around `boundary`, where
    /// `boundary` is the last pixel matched by `<=`.
    ///
    /// `<=` and `>=` both include the boundary pixel; `<` and `>` step one
    /// pixel away from it. Returns `None` if that step leaves the `u32` range.
    pub fn condition(self, boundary: u32) -> Option<Condition> {
        let (feature, px) = match self {
            Comparison::Lt => (MediaFeature::MaxWidth, boundary.checked_sub(1)?),
            Comparison::Le => (MediaFeature::MaxWidth, boundary),
            Comparison::Ge => (MediaFeature::MinWidth, boundary),
            Comparison::Gt => (MediaFeature::MinWidth, boundary.checked_add(1)?),
        };
        Some(Condition::new(feature, px))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{Comparison, SizeClass, Variants};
    use crate::query::{Condition, MediaFeature};

    #[test]
    fn names_are_lowercase_tokens() {
        let names: Vec<_> = SizeClass::iter().map(SizeClass::name).collect();
        assert_eq!(
            names,
            [
                "phone",
                "mobile",
                "tablet",
                "povertyscreen",
                "smallscreen",
                "desktop",
                "widescreen"
            ]
        );
        assert_eq!(SizeClass::Smallscreen.to_string(), "smallscreen");
    }

    #[test]
    fn all_matches_declaration_order() {
        assert!(SizeClass::iter().eq(SizeClass::ALL));
        assert!(SizeClass::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prefixes() {
        let prefixes: Vec<_> = Comparison::iter().map(Comparison::prefix).collect();
        assert_eq!(prefixes, ["<", "<=", ">=", ">"]);
    }

    #[test]
    fn conditions_around_boundary() {
        assert_eq!(
            Comparison::Lt.condition(667),
            Some(Condition::new(MediaFeature::MaxWidth, 666))
        );
        assert_eq!(
            Comparison::Le.condition(667),
            Some(Condition::new(MediaFeature::MaxWidth, 667))
        );
        assert_eq!(
            Comparison::Ge.condition(667),
            Some(Condition::new(MediaFeature::MinWidth, 667))
        );
        assert_eq!(
            Comparison::Gt.condition(667),
            Some(Condition::new(MediaFeature::MinWidth, 668))
        );
    }

    #[test]
    fn conditions_out_of_range() {
        assert_eq!(Comparison::Lt.condition(0), None);
        assert_eq!(Comparison::Gt.condition(u32::MAX), None);
    }

    #[test]
    fn comparison_variants() {
        let all = Comparison::iter().fold(Variants::empty(), |acc, c| acc | c.variant());
        assert_eq!(all, Variants::COMPARISONS);
        assert!(!all.contains(Variants::BARE));
    }
}
