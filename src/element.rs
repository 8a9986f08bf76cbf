//! Element reference data and the element half of the lookup contract.
//!
//! Connection table reconstruction only needs a handful of facts per
//! element: its symbol, atomic number and natural (standard atomic) mass.
//! Group, period and series are derived from the atomic number rather than
//! stored.

use serde::{Deserialize, Serialize};

/// Key used to address an element or isotope: by symbol or by atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey<'a> {
    Symbol(&'a str),
    AtomicNumber(u8),
}

impl<'a> From<&'a str> for ElementKey<'a> {
    fn from(symbol: &'a str) -> Self {
        ElementKey::Symbol(symbol)
    }
}

impl From<u8> for ElementKey<'_> {
    fn from(atomic_number: u8) -> Self {
        ElementKey::AtomicNumber(atomic_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementSeries {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    Lanthanide,
    Actinide,
    MainGroup,
    NobleGas,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementInfo {
    pub symbol: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight, used as the reference for MDL mass differences.
    pub natural_mass: f64,
    /// IUPAC group 1..=18; `None` for the inner f-block.
    pub group: Option<u8>,
    pub period: u8,
    pub series: ElementSeries,
}

/// Read-only element database.
pub trait ElementLookup {
    fn element_info(&self, key: ElementKey<'_>) -> Option<ElementInfo>;
}

pub fn atomic_number_of(symbol: &str) -> Option<u8> {
    ELEMENTS
        .iter()
        .position(|(sym, _)| *sym == symbol)
        .map(|i| i as u8 + 1)
}

pub fn symbol_of(atomic_number: u8) -> Option<&'static str> {
    entry(atomic_number).map(|(sym, _)| *sym)
}

pub fn natural_mass_of(atomic_number: u8) -> Option<f64> {
    entry(atomic_number).map(|(_, mass)| *mass)
}

pub fn element_info(key: ElementKey<'_>) -> Option<ElementInfo> {
    let atomic_number = match key {
        ElementKey::Symbol(s) => atomic_number_of(s)?,
        ElementKey::AtomicNumber(n) => n,
    };
    let (symbol, natural_mass) = *entry(atomic_number)?;
    Some(ElementInfo {
        symbol,
        atomic_number,
        natural_mass,
        group: group_of(atomic_number),
        period: period_of(atomic_number),
        series: series_of(atomic_number),
    })
}

fn entry(atomic_number: u8) -> Option<&'static (&'static str, f64)> {
    if atomic_number == 0 {
        return None;
    }
    ELEMENTS.get(atomic_number as usize - 1)
}

// first atomic number of each period
const PERIOD_STARTS: [u8; 7] = [1, 3, 11, 19, 37, 55, 87];

fn period_of(atomic_number: u8) -> u8 {
    PERIOD_STARTS
        .iter()
        .rposition(|&start| atomic_number >= start)
        .map(|p| p as u8 + 1)
        .unwrap_or(1)
}

fn group_of(atomic_number: u8) -> Option<u8> {
    let period = period_of(atomic_number);
    let offset = atomic_number.checked_sub(PERIOD_STARTS[period as usize - 1])?;
    match period {
        1 => Some(if atomic_number == 1 { 1 } else { 18 }),
        2 | 3 => Some(if offset < 2 { offset + 1 } else { offset + 11 }),
        4 | 5 => Some(offset + 1),
        _ => match offset {
            0 | 1 => Some(offset + 1),
            2 => Some(3),
            3..=16 => None,
            _ => Some(offset - 13),
        },
    }
}

fn series_of(atomic_number: u8) -> ElementSeries {
    match atomic_number {
        57..=71 => ElementSeries::Lanthanide,
        89..=103 => ElementSeries::Actinide,
        _ => match group_of(atomic_number) {
            Some(18) => ElementSeries::NobleGas,
            Some(1) if atomic_number != 1 => ElementSeries::AlkaliMetal,
            Some(2) => ElementSeries::AlkalineEarthMetal,
            Some(3..=12) => ElementSeries::TransitionMetal,
            _ => ElementSeries::MainGroup,
        },
    }
}

// (symbol, standard atomic weight) indexed by atomic number - 1
static ELEMENTS: [(&str, f64); 118] = [
    ("H", 1.008), ("He", 4.002602), ("Li", 6.941),
    ("Be", 9.0121831), ("B", 10.81), ("C", 12.011),
    ("N", 14.007), ("O", 15.999), ("F", 18.998403163),
    ("Ne", 20.1797), ("Na", 22.98976928), ("Mg", 24.305),
    ("Al", 26.9815384), ("Si", 28.085), ("P", 30.973761998),
    ("S", 32.06), ("Cl", 35.45), ("Ar", 39.948),
    ("K", 39.0983), ("Ca", 40.078), ("Sc", 44.955908),
    ("Ti", 47.867), ("V", 50.9415), ("Cr", 51.9961),
    ("Mn", 54.938043), ("Fe", 55.845), ("Co", 58.933194),
    ("Ni", 58.6934), ("Cu", 63.546), ("Zn", 65.38),
    ("Ga", 69.723), ("Ge", 72.630), ("As", 74.921595),
    ("Se", 78.971), ("Br", 79.904), ("Kr", 83.798),
    ("Rb", 85.4678), ("Sr", 87.62), ("Y", 88.90584),
    ("Zr", 91.224), ("Nb", 92.90637), ("Mo", 95.95),
    ("Tc", 97.0), ("Ru", 101.07), ("Rh", 102.90549),
    ("Pd", 106.42), ("Ag", 107.8682), ("Cd", 112.414),
    ("In", 114.818), ("Sn", 118.710), ("Sb", 121.760),
    ("Te", 127.60), ("I", 126.90447), ("Xe", 131.293),
    ("Cs", 132.90545196), ("Ba", 137.327), ("La", 138.90547),
    ("Ce", 140.116), ("Pr", 140.90766), ("Nd", 144.242),
    ("Pm", 145.0), ("Sm", 150.36), ("Eu", 151.964),
    ("Gd", 157.25), ("Tb", 158.925354), ("Dy", 162.500),
    ("Ho", 164.930328), ("Er", 167.259), ("Tm", 168.934218),
    ("Yb", 173.045), ("Lu", 174.9668), ("Hf", 178.486),
    ("Ta", 180.94788), ("W", 183.84), ("Re", 186.207),
    ("Os", 190.23), ("Ir", 192.217), ("Pt", 195.084),
    ("Au", 196.966570), ("Hg", 200.592), ("Tl", 204.38),
    ("Pb", 207.2), ("Bi", 208.98040), ("Po", 209.0),
    ("At", 210.0), ("Rn", 222.0), ("Fr", 223.0),
    ("Ra", 226.0), ("Ac", 227.0), ("Th", 232.0377),
    ("Pa", 231.03588), ("U", 238.02891), ("Np", 237.0),
    ("Pu", 244.0), ("Am", 243.0), ("Cm", 247.0),
    ("Bk", 247.0), ("Cf", 251.0), ("Es", 252.0),
    ("Fm", 257.0), ("Md", 258.0), ("No", 259.0),
    ("Lr", 266.0), ("Rf", 267.0), ("Db", 268.0),
    ("Sg", 269.0), ("Bh", 270.0), ("Hs", 277.0),
    ("Mt", 278.0), ("Ds", 281.0), ("Rg", 282.0),
    ("Cn", 285.0), ("Nh", 286.0), ("Fl", 289.0),
    ("Mc", 290.0), ("Lv", 293.0), ("Ts", 294.0),
    ("Og", 294.0),
];
