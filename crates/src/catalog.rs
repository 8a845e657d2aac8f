//! Element catalog: the static record table and its grid layout.
//!
//! Records are immutable and keyed by atomic number. Layout positions live in
//! a separate map so alternative layouts (or small test catalogs) can be built
//! without touching the records.

use crate::category::Category;
use std::collections::HashMap;

/// One chemical element as shown on a card and in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_weight: f64,
    pub category: Category,
    pub electron_configuration: &'static str,
    pub electronegativity: Option<f64>,
    /// g/cm³
    pub density: Option<f64>,
    /// °C
    pub melting_point: Option<f64>,
    /// °C
    pub boiling_point: Option<f64>,
    /// `None` for elements known since antiquity.
    pub discovery_year: Option<i32>,
    pub description: &'static str,
}

/// 1-based grid coordinate. Rows 1-7 are periods, 9-10 the f-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub row: u16,
    pub col: u16,
}

pub type PositionMap = HashMap<u32, GridPosition>;

pub const GRID_ROWS: u16 = 10;
pub const GRID_COLS: u16 = 18;

#[derive(Debug, Clone)]
pub struct Catalog {
    elements: Vec<ElementRecord>,
    positions: PositionMap,
}

impl Catalog {
    pub fn new(elements: Vec<ElementRecord>, positions: PositionMap) -> Self {
        Catalog {
            elements,
            positions,
        }
    }

    /// All 118 elements in the standard 18-column layout.
    pub fn builtin() -> Self {
        let elements = ELEMENTS.to_vec();
        let positions = standard_layout(&elements);
        Catalog::new(elements, positions)
    }

    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.elements
            .iter()
            .find(|e| e.atomic_number == atomic_number)
    }

    pub fn position(&self, atomic_number: u32) -> Option<GridPosition> {
        self.positions.get(&atomic_number).copied()
    }

    /// Record at a grid cell, if one is laid out there.
    pub fn at(&self, pos: GridPosition) -> Option<&ElementRecord> {
        self.positions
            .iter()
            .find(|(_, p)| **p == pos)
            .and_then(|(n, _)| self.get(*n))
    }

    /// Looks an element up by atomic number, symbol or name (case-insensitive).
    pub fn find(&self, query: &str) -> Option<&ElementRecord> {
        let q = query.trim();
        if let Ok(n) = q.parse::<u32>() {
            return self.get(n);
        }
        self.elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(q) || e.name.eq_ignore_ascii_case(q))
    }
}

/// Standard long-form position for an atomic number.
pub fn standard_position(atomic_number: u32) -> Option<GridPosition> {
    let (row, col) = match atomic_number {
        1 => (1, 1),
        2 => (1, 18),
        3..=4 => (2, atomic_number - 2),
        5..=10 => (2, atomic_number + 8),
        11..=12 => (3, atomic_number - 10),
        13..=18 => (3, atomic_number),
        19..=36 => (4, atomic_number - 18),
        37..=54 => (5, atomic_number - 36),
        55..=56 => (6, atomic_number - 54),
        57..=71 => (9, atomic_number - 54),
        72..=86 => (6, atomic_number - 68),
        87..=88 => (7, atomic_number - 86),
        89..=103 => (10, atomic_number - 86),
        104..=118 => (7, atomic_number - 100),
        _ => return None,
    };
    Some(GridPosition {
        row: row as u16,
        col: col as u16,
    })
}

pub fn standard_layout(elements: &[ElementRecord]) -> PositionMap {
    elements
        .iter()
        .filter_map(|e| standard_position(e.atomic_number).map(|p| (e.atomic_number, p)))
        .collect()
}

#[allow(clippy::too_many_arguments)]
const fn rec(
    atomic_number: u32,
    symbol: &'static str,
    name: &'static str,
    atomic_weight: f64,
    category: Category,
    electron_configuration: &'static str,
    electronegativity: Option<f64>,
    density: Option<f64>,
    melting_point: Option<f64>,
    boiling_point: Option<f64>,
    discovery_year: Option<i32>,
    description: &'static str,
) -> ElementRecord {
    ElementRecord {
        atomic_number,
        symbol,
        name,
        atomic_weight,
        category,
        electron_configuration,
        electronegativity,
        density,
        melting_point,
        boiling_point,
        discovery_year,
        description,
    }
}

use Category::{
    Actinide, AlkaliMetal, AlkalineEarthMetal, Halogen, Lanthanide, Metalloid, NobleGas,
    Nonmetal, PostTransitionMetal, TransitionMetal,
};

#[rustfmt::skip]
pub static ELEMENTS: [ElementRecord; 118] = [
    // --- Period 1 ---
    rec(1, "H", "Hydrogen", 1.008, Nonmetal, "1s1", Some(2.20), Some(0.00008988), Some(-259.16), Some(-252.87), Some(1766),
        "The lightest and most abundant element in the universe."),
    rec(2, "He", "Helium", 4.0026, NobleGas, "1s2", None, Some(0.0001785), Some(-272.2), Some(-268.93), Some(1868),
        "Inert gas first detected in the solar spectrum."),
    // --- Period 2 ---
    rec(3, "Li", "Lithium", 6.94, AlkaliMetal, "[He] 2s1", Some(0.98), Some(0.534), Some(180.5), Some(1330.0), Some(1817),
        "Soft, light metal used in rechargeable batteries."),
    rec(4, "Be", "Beryllium", 9.0122, AlkalineEarthMetal, "[He] 2s2", Some(1.57), Some(1.85), Some(1287.0), Some(2469.0), Some(1798),
        "Stiff, lightweight metal transparent to X-rays."),
    rec(5, "B", "Boron", 10.81, Metalloid, "[He] 2s2 2p1", Some(2.04), Some(2.34), Some(2076.0), Some(3927.0), Some(1808),
        "Metalloid found in borax and heat-resistant glass."),
    rec(6, "C", "Carbon", 12.011, Nonmetal, "[He] 2s2 2p2", Some(2.55), Some(2.267), Some(3550.0), Some(4027.0), None,
        "Basis of organic chemistry, found as graphite and diamond."),
    rec(7, "N", "Nitrogen", 14.007, Nonmetal, "[He] 2s2 2p3", Some(3.04), Some(0.0012506), Some(-210.0), Some(-195.79), Some(1772),
        "Makes up about 78% of Earth's atmosphere."),
    rec(8, "O", "Oxygen", 15.999, Nonmetal, "[He] 2s2 2p4", Some(3.44), Some(0.001429), Some(-218.79), Some(-182.96), Some(1774),
        "Highly reactive gas essential for respiration."),
    rec(9, "F", "Fluorine", 18.998, Halogen, "[He] 2s2 2p5", Some(3.98), Some(0.001696), Some(-219.67), Some(-188.11), Some(1886),
        "The most electronegative and reactive element."),
    rec(10, "Ne", "Neon", 20.180, NobleGas, "[He] 2s2 2p6", None, Some(0.0009002), Some(-248.59), Some(-246.05), Some(1898),
        "Noble gas that glows red-orange in discharge lamps."),
    // --- Period 3 ---
    rec(11, "Na", "Sodium", 22.990, AlkaliMetal, "[Ne] 3s1", Some(0.93), Some(0.971), Some(97.79), Some(882.9), Some(1807),
        "Reactive soft metal, a component of table salt."),
    rec(12, "Mg", "Magnesium", 24.305, AlkalineEarthMetal, "[Ne] 3s2", Some(1.31), Some(1.738), Some(650.0), Some(1090.0), Some(1755),
        "Light structural metal that burns with a brilliant white flame."),
    rec(13, "Al", "Aluminium", 26.982, PostTransitionMetal, "[Ne] 3s2 3p1", Some(1.61), Some(2.70), Some(660.32), Some(2519.0), Some(1825),
        "The most abundant metal in Earth's crust."),
    rec(14, "Si", "Silicon", 28.085, Metalloid, "[Ne] 3s2 3p2", Some(1.90), Some(2.3296), Some(1414.0), Some(3265.0), Some(1824),
        "Semiconductor at the heart of modern electronics."),
    rec(15, "P", "Phosphorus", 30.974, Nonmetal, "[Ne] 3s2 3p3", Some(2.19), Some(1.82), Some(44.15), Some(280.5), Some(1669),
        "Essential for DNA and ATP, first isolated from urine."),
    rec(16, "S", "Sulfur", 32.06, Nonmetal, "[Ne] 3s2 3p4", Some(2.58), Some(2.067), Some(115.21), Some(444.6), None,
        "Yellow nonmetal known since antiquity as brimstone."),
    rec(17, "Cl", "Chlorine", 35.45, Halogen, "[Ne] 3s2 3p5", Some(3.16), Some(0.003214), Some(-101.5), Some(-34.04), Some(1774),
        "Yellow-green gas widely used for disinfection."),
    rec(18, "Ar", "Argon", 39.948, NobleGas, "[Ne] 3s2 3p6", None, Some(0.0017837), Some(-189.34), Some(-185.85), Some(1894),
        "Third most abundant gas in the atmosphere."),
    // --- Period 4 ---
    rec(19, "K", "Potassium", 39.098, AlkaliMetal, "[Ar] 4s1", Some(0.82), Some(0.862), Some(63.5), Some(759.0), Some(1807),
        "Reactive metal vital for nerve function."),
    rec(20, "Ca", "Calcium", 40.078, AlkalineEarthMetal, "[Ar] 4s2", Some(1.00), Some(1.54), Some(842.0), Some(1484.0), Some(1808),
        "Key component of bones, teeth and limestone."),
    rec(21, "Sc", "Scandium", 44.956, TransitionMetal, "[Ar] 3d1 4s2", Some(1.36), Some(2.985), Some(1541.0), Some(2836.0), Some(1879),
        "Light metal used in aerospace alloys."),
    rec(22, "Ti", "Titanium", 47.867, TransitionMetal, "[Ar] 3d2 4s2", Some(1.54), Some(4.506), Some(1668.0), Some(3287.0), Some(1791),
        "Strong, corrosion-resistant metal with low density."),
    rec(23, "V", "Vanadium", 50.942, TransitionMetal, "[Ar] 3d3 4s2", Some(1.63), Some(6.0), Some(1910.0), Some(3407.0), Some(1801),
        "Hard metal used to strengthen steel."),
    rec(24, "Cr", "Chromium", 51.996, TransitionMetal, "[Ar] 3d5 4s1", Some(1.66), Some(7.19), Some(1907.0), Some(2671.0), Some(1797),
        "Lustrous metal used for plating and stainless steel."),
    rec(25, "Mn", "Manganese", 54.938, TransitionMetal, "[Ar] 3d5 4s2", Some(1.55), Some(7.21), Some(1246.0), Some(2061.0), Some(1774),
        "Brittle metal essential in steel production."),
    rec(26, "Fe", "Iron", 55.845, TransitionMetal, "[Ar] 3d6 4s2", Some(1.83), Some(7.874), Some(1538.0), Some(2861.0), None,
        "The most used metal, main component of steel."),
    rec(27, "Co", "Cobalt", 58.933, TransitionMetal, "[Ar] 3d7 4s2", Some(1.88), Some(8.90), Some(1495.0), Some(2927.0), Some(1735),
        "Magnetic metal that gives glass a deep blue colour."),
    rec(28, "Ni", "Nickel", 58.693, TransitionMetal, "[Ar] 3d8 4s2", Some(1.91), Some(8.908), Some(1455.0), Some(2913.0), Some(1751),
        "Corrosion-resistant metal used in coins and alloys."),
    rec(29, "Cu", "Copper", 63.546, TransitionMetal, "[Ar] 3d10 4s1", Some(1.90), Some(8.96), Some(1084.62), Some(2562.0), None,
        "Excellent conductor used in wiring since antiquity."),
    rec(30, "Zn", "Zinc", 65.38, TransitionMetal, "[Ar] 3d10 4s2", Some(1.65), Some(7.14), Some(419.53), Some(907.0), Some(1746),
        "Used to galvanize steel against corrosion."),
    rec(31, "Ga", "Gallium", 69.723, PostTransitionMetal, "[Ar] 3d10 4s2 4p1", Some(1.81), Some(5.91), Some(29.76), Some(2400.0), Some(1875),
        "Metal that melts in the palm of a hand."),
    rec(32, "Ge", "Germanium", 72.630, Metalloid, "[Ar] 3d10 4s2 4p2", Some(2.01), Some(5.323), Some(938.25), Some(2833.0), Some(1886),
        "Semiconductor predicted by Mendeleev as eka-silicon."),
    rec(33, "As", "Arsenic", 74.922, Metalloid, "[Ar] 3d10 4s2 4p3", Some(2.18), Some(5.727), Some(816.8), Some(614.0), None,
        "Notoriously toxic metalloid that sublimes when heated."),
    rec(34, "Se", "Selenium", 78.971, Nonmetal, "[Ar] 3d10 4s2 4p4", Some(2.55), Some(4.81), Some(221.0), Some(685.0), Some(1817),
        "Photoconductive nonmetal used in photocopiers."),
    rec(35, "Br", "Bromine", 79.904, Halogen, "[Ar] 3d10 4s2 4p5", Some(2.96), Some(3.1028), Some(-7.2), Some(58.8), Some(1826),
        "Red-brown liquid halogen at room temperature."),
    rec(36, "Kr", "Krypton", 83.798, NobleGas, "[Ar] 3d10 4s2 4p6", Some(3.00), Some(0.003749), Some(-157.36), Some(-153.22), Some(1898),
        "Noble gas used in high-performance lighting."),
    // --- Period 5 ---
    rec(37, "Rb", "Rubidium", 85.468, AlkaliMetal, "[Kr] 5s1", Some(0.82), Some(1.532), Some(39.31), Some(688.0), Some(1861),
        "Highly reactive metal used in atomic clocks."),
    rec(38, "Sr", "Strontium", 87.62, AlkalineEarthMetal, "[Kr] 5s2", Some(0.95), Some(2.64), Some(777.0), Some(1382.0), Some(1790),
        "Gives fireworks their crimson colour."),
    rec(39, "Y", "Yttrium", 88.906, TransitionMetal, "[Kr] 4d1 5s2", Some(1.22), Some(4.472), Some(1526.0), Some(3345.0), Some(1794),
        "Used in phosphors and superconductors."),
    rec(40, "Zr", "Zirconium", 91.224, TransitionMetal, "[Kr] 4d2 5s2", Some(1.33), Some(6.52), Some(1855.0), Some(4409.0), Some(1789),
        "Corrosion-resistant metal used in nuclear reactors."),
    rec(41, "Nb", "Niobium", 92.906, TransitionMetal, "[Kr] 4d4 5s1", Some(1.6), Some(8.57), Some(2477.0), Some(4744.0), Some(1801),
        "Used in superconducting magnets."),
    rec(42, "Mo", "Molybdenum", 95.95, TransitionMetal, "[Kr] 4d5 5s1", Some(2.16), Some(10.28), Some(2623.0), Some(4639.0), Some(1778),
        "Refractory metal used in high-strength steel."),
    rec(43, "Tc", "Technetium", 98.0, TransitionMetal, "[Kr] 4d5 5s2", Some(1.9), Some(11.0), Some(2157.0), Some(4265.0), Some(1937),
        "The lightest element with no stable isotopes."),
    rec(44, "Ru", "Ruthenium", 101.07, TransitionMetal, "[Kr] 4d7 5s1", Some(2.2), Some(12.45), Some(2334.0), Some(4150.0), Some(1844),
        "Platinum-group metal used in wear-resistant contacts."),
    rec(45, "Rh", "Rhodium", 102.91, TransitionMetal, "[Kr] 4d8 5s1", Some(2.28), Some(12.41), Some(1964.0), Some(3695.0), Some(1803),
        "Rare, reflective metal used in catalytic converters."),
    rec(46, "Pd", "Palladium", 106.42, TransitionMetal, "[Kr] 4d10", Some(2.20), Some(12.023), Some(1554.9), Some(2963.0), Some(1803),
        "Absorbs large volumes of hydrogen."),
    rec(47, "Ag", "Silver", 107.87, TransitionMetal, "[Kr] 4d10 5s1", Some(1.93), Some(10.49), Some(961.78), Some(2162.0), None,
        "Has the highest electrical conductivity of any element."),
    rec(48, "Cd", "Cadmium", 112.41, TransitionMetal, "[Kr] 4d10 5s2", Some(1.69), Some(8.65), Some(321.07), Some(767.0), Some(1817),
        "Toxic metal once common in rechargeable batteries."),
    rec(49, "In", "Indium", 114.82, PostTransitionMetal, "[Kr] 4d10 5s2 5p1", Some(1.78), Some(7.31), Some(156.6), Some(2072.0), Some(1863),
        "Soft metal used in touchscreen coatings."),
    rec(50, "Sn", "Tin", 118.71, PostTransitionMetal, "[Kr] 4d10 5s2 5p2", Some(1.96), Some(7.287), Some(231.93), Some(2602.0), None,
        "Alloyed with copper to make bronze."),
    rec(51, "Sb", "Antimony", 121.76, Metalloid, "[Kr] 4d10 5s2 5p3", Some(2.05), Some(6.685), Some(630.63), Some(1587.0), None,
        "Metalloid used in flame retardants."),
    rec(52, "Te", "Tellurium", 127.60, Metalloid, "[Kr] 4d10 5s2 5p4", Some(2.1), Some(6.232), Some(449.51), Some(988.0), Some(1782),
        "Rare metalloid used in solar panels."),
    rec(53, "I", "Iodine", 126.90, Halogen, "[Kr] 4d10 5s2 5p5", Some(2.66), Some(4.93), Some(113.7), Some(184.3), Some(1811),
        "Sublimes into a violet vapour, essential for the thyroid."),
    rec(54, "Xe", "Xenon", 131.29, NobleGas, "[Kr] 4d10 5s2 5p6", Some(2.6), Some(0.005894), Some(-111.75), Some(-108.1), Some(1898),
        "Heavy noble gas used in flash lamps and ion thrusters."),
    // --- Period 6 ---
    rec(55, "Cs", "Caesium", 132.91, AlkaliMetal, "[Xe] 6s1", Some(0.79), Some(1.93), Some(28.44), Some(671.0), Some(1860),
        "Defines the SI second through its atomic transition."),
    rec(56, "Ba", "Barium", 137.33, AlkalineEarthMetal, "[Xe] 6s2", Some(0.89), Some(3.51), Some(727.0), Some(1845.0), Some(1808),
        "Its sulfate is used as a contrast agent in X-ray imaging."),
    rec(57, "La", "Lanthanum", 138.91, Lanthanide, "[Xe] 5d1 6s2", Some(1.10), Some(6.162), Some(920.0), Some(3464.0), Some(1839),
        "First of the lanthanides, used in camera lenses."),
    rec(58, "Ce", "Cerium", 140.12, Lanthanide, "[Xe] 4f1 5d1 6s2", Some(1.12), Some(6.77), Some(795.0), Some(3443.0), Some(1803),
        "The most abundant rare-earth element."),
    rec(59, "Pr", "Praseodymium", 140.91, Lanthanide, "[Xe] 4f3 6s2", Some(1.13), Some(6.77), Some(935.0), Some(3520.0), Some(1885),
        "Used in aircraft engine alloys and yellow glass."),
    rec(60, "Nd", "Neodymium", 144.24, Lanthanide, "[Xe] 4f4 6s2", Some(1.14), Some(7.01), Some(1024.0), Some(3074.0), Some(1885),
        "Makes the strongest permanent magnets."),
    rec(61, "Pm", "Promethium", 145.0, Lanthanide, "[Xe] 4f5 6s2", None, Some(7.26), Some(1042.0), Some(3000.0), Some(1945),
        "Radioactive lanthanide used in luminous paint."),
    rec(62, "Sm", "Samarium", 150.36, Lanthanide, "[Xe] 4f6 6s2", Some(1.17), Some(7.52), Some(1072.0), Some(1794.0), Some(1879),
        "Used in samarium-cobalt magnets."),
    rec(63, "Eu", "Europium", 151.96, Lanthanide, "[Xe] 4f7 6s2", None, Some(5.244), Some(826.0), Some(1529.0), Some(1901),
        "Red phosphor in displays and euro banknotes."),
    rec(64, "Gd", "Gadolinium", 157.25, Lanthanide, "[Xe] 4f7 5d1 6s2", Some(1.20), Some(7.90), Some(1312.0), Some(3273.0), Some(1880),
        "MRI contrast agent with unusual magnetic properties."),
    rec(65, "Tb", "Terbium", 158.93, Lanthanide, "[Xe] 4f9 6s2", None, Some(8.23), Some(1356.0), Some(3230.0), Some(1843),
        "Green phosphor used in fluorescent lamps."),
    rec(66, "Dy", "Dysprosium", 162.50, Lanthanide, "[Xe] 4f10 6s2", Some(1.22), Some(8.54), Some(1407.0), Some(2562.0), Some(1886),
        "Added to magnets to keep them strong when hot."),
    rec(67, "Ho", "Holmium", 164.93, Lanthanide, "[Xe] 4f11 6s2", Some(1.23), Some(8.79), Some(1461.0), Some(2720.0), Some(1878),
        "Has the highest magnetic moment of any element."),
    rec(68, "Er", "Erbium", 167.26, Lanthanide, "[Xe] 4f12 6s2", Some(1.24), Some(9.066), Some(1529.0), Some(2868.0), Some(1843),
        "Amplifies signals in fibre-optic cables."),
    rec(69, "Tm", "Thulium", 168.93, Lanthanide, "[Xe] 4f13 6s2", Some(1.25), Some(9.32), Some(1545.0), Some(1950.0), Some(1879),
        "One of the rarest lanthanides, used in portable X-ray devices."),
    rec(70, "Yb", "Ytterbium", 173.05, Lanthanide, "[Xe] 4f14 6s2", None, Some(6.90), Some(824.0), Some(1196.0), Some(1878),
        "Used in some of the most precise atomic clocks."),
    rec(71, "Lu", "Lutetium", 174.97, Lanthanide, "[Xe] 4f14 5d1 6s2", Some(1.27), Some(9.841), Some(1652.0), Some(3402.0), Some(1907),
        "Last of the lanthanides, used in PET detectors."),
    rec(72, "Hf", "Hafnium", 178.49, TransitionMetal, "[Xe] 4f14 5d2 6s2", Some(1.3), Some(13.31), Some(2233.0), Some(4603.0), Some(1923),
        "Neutron absorber used in reactor control rods."),
    rec(73, "Ta", "Tantalum", 180.95, TransitionMetal, "[Xe] 4f14 5d3 6s2", Some(1.5), Some(16.69), Some(3017.0), Some(5458.0), Some(1802),
        "Used in capacitors for compact electronics."),
    rec(74, "W", "Tungsten", 183.84, TransitionMetal, "[Xe] 4f14 5d4 6s2", Some(2.36), Some(19.25), Some(3422.0), Some(5555.0), Some(1783),
        "Has the highest melting point of all metals."),
    rec(75, "Re", "Rhenium", 186.21, TransitionMetal, "[Xe] 4f14 5d5 6s2", Some(1.9), Some(21.02), Some(3186.0), Some(5596.0), Some(1925),
        "One of the rarest elements in Earth's crust."),
    rec(76, "Os", "Osmium", 190.23, TransitionMetal, "[Xe] 4f14 5d6 6s2", Some(2.2), Some(22.59), Some(3033.0), Some(5012.0), Some(1803),
        "The densest naturally occurring element."),
    rec(77, "Ir", "Iridium", 192.22, TransitionMetal, "[Xe] 4f14 5d7 6s2", Some(2.20), Some(22.56), Some(2446.0), Some(4428.0), Some(1803),
        "Extremely corrosion-resistant metal."),
    rec(78, "Pt", "Platinum", 195.08, TransitionMetal, "[Xe] 4f14 5d9 6s1", Some(2.28), Some(21.45), Some(1768.3), Some(3825.0), Some(1735),
        "Precious metal and versatile catalyst."),
    rec(79, "Au", "Gold", 196.97, TransitionMetal, "[Xe] 4f14 5d10 6s1", Some(2.54), Some(19.3), Some(1064.18), Some(2856.0), None,
        "Malleable precious metal that does not tarnish."),
    rec(80, "Hg", "Mercury", 200.59, TransitionMetal, "[Xe] 4f14 5d10 6s2", Some(2.00), Some(13.534), Some(-38.83), Some(356.73), None,
        "The only metal that is liquid at room temperature."),
    rec(81, "Tl", "Thallium", 204.38, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p1", Some(1.62), Some(11.85), Some(304.0), Some(1473.0), Some(1861),
        "Highly toxic soft metal."),
    rec(82, "Pb", "Lead", 207.2, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p2", Some(2.33), Some(11.34), Some(327.46), Some(1749.0), None,
        "Dense metal used for radiation shielding."),
    rec(83, "Bi", "Bismuth", 208.98, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p3", Some(2.02), Some(9.78), Some(271.3), Some(1564.0), Some(1753),
        "Forms iridescent stair-stepped crystals."),
    rec(84, "Po", "Polonium", 209.0, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p4", Some(2.0), Some(9.196), Some(254.0), Some(962.0), Some(1898),
        "Intensely radioactive element discovered by the Curies."),
    rec(85, "At", "Astatine", 210.0, Halogen, "[Xe] 4f14 5d10 6s2 6p5", Some(2.2), None, Some(302.0), None, Some(1940),
        "The rarest naturally occurring halogen."),
    rec(86, "Rn", "Radon", 222.0, NobleGas, "[Xe] 4f14 5d10 6s2 6p6", Some(2.2), Some(0.00973), Some(-71.0), Some(-61.7), Some(1899),
        "Radioactive gas that accumulates in basements."),
    // --- Period 7 ---
    rec(87, "Fr", "Francium", 223.0, AlkaliMetal, "[Rn] 7s1", Some(0.7), None, Some(27.0), None, Some(1939),
        "Extremely rare and unstable alkali metal."),
    rec(88, "Ra", "Radium", 226.0, AlkalineEarthMetal, "[Rn] 7s2", Some(0.9), Some(5.5), Some(700.0), Some(1737.0), Some(1898),
        "Radioactive metal that glows faintly blue."),
    rec(89, "Ac", "Actinium", 227.0, Actinide, "[Rn] 6d1 7s2", Some(1.1), Some(10.07), Some(1050.0), Some(3198.0), Some(1899),
        "First of the actinides, glows blue in the dark."),
    rec(90, "Th", "Thorium", 232.04, Actinide, "[Rn] 6d2 7s2", Some(1.3), Some(11.72), Some(1750.0), Some(4788.0), Some(1829),
        "Weakly radioactive metal proposed as nuclear fuel."),
    rec(91, "Pa", "Protactinium", 231.04, Actinide, "[Rn] 5f2 6d1 7s2", Some(1.5), Some(15.37), Some(1568.0), None, Some(1913),
        "Rare, highly radioactive actinide."),
    rec(92, "U", "Uranium", 238.03, Actinide, "[Rn] 5f3 6d1 7s2", Some(1.38), Some(19.1), Some(1132.2), Some(4131.0), Some(1789),
        "Primary fuel for nuclear reactors."),
    rec(93, "Np", "Neptunium", 237.0, Actinide, "[Rn] 5f4 6d1 7s2", Some(1.36), Some(20.45), Some(644.0), Some(4000.0), Some(1940),
        "First transuranium element to be synthesized."),
    rec(94, "Pu", "Plutonium", 244.0, Actinide, "[Rn] 5f6 7s2", Some(1.28), Some(19.816), Some(639.4), Some(3228.0), Some(1940),
        "Fissile element used in reactors and weapons."),
    rec(95, "Am", "Americium", 243.0, Actinide, "[Rn] 5f7 7s2", Some(1.13), Some(12.0), Some(1176.0), Some(2607.0), Some(1944),
        "Found in household smoke detectors."),
    rec(96, "Cm", "Curium", 247.0, Actinide, "[Rn] 5f7 6d1 7s2", Some(1.28), Some(13.51), Some(1340.0), Some(3110.0), Some(1944),
        "Named after Marie and Pierre Curie."),
    rec(97, "Bk", "Berkelium", 247.0, Actinide, "[Rn] 5f9 7s2", Some(1.3), Some(14.78), Some(986.0), None, Some(1949),
        "Synthetic actinide named after Berkeley, California."),
    rec(98, "Cf", "Californium", 251.0, Actinide, "[Rn] 5f10 7s2", Some(1.3), Some(15.1), Some(900.0), None, Some(1950),
        "Strong neutron emitter used to start reactors."),
    rec(99, "Es", "Einsteinium", 252.0, Actinide, "[Rn] 5f11 7s2", Some(1.3), Some(8.84), Some(860.0), None, Some(1952),
        "First found in the debris of a hydrogen bomb test."),
    rec(100, "Fm", "Fermium", 257.0, Actinide, "[Rn] 5f12 7s2", Some(1.3), None, Some(1527.0), None, Some(1952),
        "Heaviest element that can form by neutron capture."),
    rec(101, "Md", "Mendelevium", 258.0, Actinide, "[Rn] 5f13 7s2", Some(1.3), None, Some(827.0), None, Some(1955),
        "Named after Dmitri Mendeleev."),
    rec(102, "No", "Nobelium", 259.0, Actinide, "[Rn] 5f14 7s2", Some(1.3), None, Some(827.0), None, Some(1958),
        "Named after Alfred Nobel."),
    rec(103, "Lr", "Lawrencium", 266.0, Actinide, "[Rn] 5f14 7s2 7p1", Some(1.3), None, Some(1627.0), None, Some(1961),
        "Last of the actinides."),
    rec(104, "Rf", "Rutherfordium", 267.0, TransitionMetal, "[Rn] 5f14 6d2 7s2", None, None, None, None, Some(1964),
        "First transactinide element."),
    rec(105, "Db", "Dubnium", 268.0, TransitionMetal, "[Rn] 5f14 6d3 7s2", None, None, None, None, Some(1967),
        "Named after the Russian town of Dubna."),
    rec(106, "Sg", "Seaborgium", 269.0, TransitionMetal, "[Rn] 5f14 6d4 7s2", None, None, None, None, Some(1974),
        "Named after Glenn Seaborg while he was still alive."),
    rec(107, "Bh", "Bohrium", 270.0, TransitionMetal, "[Rn] 5f14 6d5 7s2", None, None, None, None, Some(1981),
        "Named after Niels Bohr."),
    rec(108, "Hs", "Hassium", 277.0, TransitionMetal, "[Rn] 5f14 6d6 7s2", None, None, None, None, Some(1984),
        "Named after the German state of Hesse."),
    rec(109, "Mt", "Meitnerium", 278.0, TransitionMetal, "[Rn] 5f14 6d7 7s2", None, None, None, None, Some(1982),
        "Named after Lise Meitner."),
    rec(110, "Ds", "Darmstadtium", 281.0, TransitionMetal, "[Rn] 5f14 6d8 7s2", None, None, None, None, Some(1994),
        "Named after the city of Darmstadt."),
    rec(111, "Rg", "Roentgenium", 282.0, TransitionMetal, "[Rn] 5f14 6d9 7s2", None, None, None, None, Some(1994),
        "Named after Wilhelm Röntgen."),
    rec(112, "Cn", "Copernicium", 285.0, TransitionMetal, "[Rn] 5f14 6d10 7s2", None, None, None, None, Some(1996),
        "Named after Nicolaus Copernicus."),
    rec(113, "Nh", "Nihonium", 286.0, PostTransitionMetal, "[Rn] 5f14 6d10 7s2 7p1", None, None, None, None, Some(2003),
        "First element discovered in Japan."),
    rec(114, "Fl", "Flerovium", 289.0, PostTransitionMetal, "[Rn] 5f14 6d10 7s2 7p2", None, None, None, None, Some(1998),
        "Named after the Flerov Laboratory of Nuclear Reactions."),
    rec(115, "Mc", "Moscovium", 290.0, PostTransitionMetal, "[Rn] 5f14 6d10 7s2 7p3", None, None, None, None, Some(2003),
        "Named after the Moscow region."),
    rec(116, "Lv", "Livermorium", 293.0, PostTransitionMetal, "[Rn] 5f14 6d10 7s2 7p4", None, None, None, None, Some(2000),
        "Named after Lawrence Livermore National Laboratory."),
    rec(117, "Ts", "Tennessine", 294.0, Halogen, "[Rn] 5f14 6d10 7s2 7p5", None, None, None, None, Some(2010),
        "Second-heaviest known element."),
    rec(118, "Og", "Oganesson", 294.0, NobleGas, "[Rn] 5f14 6d10 7s2 7p6", None, None, None, None, Some(2002),
        "The heaviest element known, named after Yuri Oganessian."),
];
