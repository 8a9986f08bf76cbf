use crate::element::{self, ElementInfo, ElementKey, ElementLookup};
use crate::isotope::{self, IsotopeInfo, IsotopeLookup};

/// Everything the node resolver needs from a chemistry database.
pub trait ChemLookup: ElementLookup + IsotopeLookup {}

impl<T: ElementLookup + IsotopeLookup + ?Sized> ChemLookup for T {}

/// Built-in reference data backed by the static element and isotope tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodicTable;

impl ElementLookup for PeriodicTable {
    fn element_info(&self, key: ElementKey<'_>) -> Option<ElementInfo> {
        element::element_info(key)
    }
}

impl IsotopeLookup for PeriodicTable {
    fn isotope_info(&self, key: ElementKey<'_>, mass_number: Option<u16>) -> Option<IsotopeInfo> {
        isotope::isotope_info(key, mass_number)
    }
}

impl<T: ElementLookup + ?Sized> ElementLookup for &T {
    fn element_info(&self, key: ElementKey<'_>) -> Option<ElementInfo> {
        (**self).element_info(key)
    }
}

impl<T: IsotopeLookup + ?Sized> IsotopeLookup for &T {
    fn isotope_info(&self, key: ElementKey<'_>, mass_number: Option<u16>) -> Option<IsotopeInfo> {
        (**self).isotope_info(key, mass_number)
    }
}
