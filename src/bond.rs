use serde::{Deserialize, Serialize};

/// Bond order carried by a graph connector.
///
/// `Unset` is a legitimate terminal value: it is what query bond types decode
/// to, and what an undetermined connector holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Quad,
    ExplicitAromatic,
    Other,
    Unset,
}

impl crate::traits::HasBondOrder for BondOrder {
    fn bond_order(&self) -> BondOrder {
        *self
    }
}
