use crate::bond::BondOrder;

pub trait HasAtomicNum {
    /// `None` for nodes that are not a concrete element.
    fn atomic_num(&self) -> Option<u8>;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i32;
}

pub trait HasIsotope {
    fn mass_number(&self) -> Option<u16>;
}

pub trait HasHydrogenCount {
    fn explicit_hydrogen_count(&self) -> Option<u32>;
}

pub trait HasParity {
    fn parity(&self) -> Option<i32>;
}

pub trait HasPosition2D {
    fn position_2d(&self) -> Option<[f64; 2]>;
    fn set_position_2d(&mut self, pos: Option<[f64; 2]>);

    fn has_coord_2d(&self) -> bool {
        self.position_2d().is_some()
    }
}

pub trait HasPosition3D {
    fn position_3d(&self) -> Option<[f64; 3]>;
    fn set_position_3d(&mut self, pos: Option<[f64; 3]>);

    fn has_coord_3d(&self) -> bool {
        self.position_3d().is_some()
    }
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}
