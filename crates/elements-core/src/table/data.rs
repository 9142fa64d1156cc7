use crate::common::constants::MAX_ATOMIC_NUMBER;
use crate::domain::ElementRecord;

/// Element rows in atomic-number order.
///
/// Columns: atomic number, symbol, name, valence, valence electrons, covalent
/// radius, van der Waals radius, metallic radius. Radii are in angstroms.
#[rustfmt::skip]
pub(crate) static ELEMENT_ROWS: [ElementRecord; MAX_ATOMIC_NUMBER] = [
    ElementRecord::new(1, "H", "Hydrogen", 1.0, 1, Some(0.31), Some(1.20), None),
    ElementRecord::new(2, "He", "Helium", 0.5, 2, Some(0.28), Some(1.40), None),
    ElementRecord::new(3, "Li", "Lithium", 1.0, 1, Some(1.28), Some(1.82), Some(1.52)),
    ElementRecord::new(4, "Be", "Beryllium", 2.0, 2, Some(0.96), Some(1.53), Some(1.12)),
    ElementRecord::new(5, "B", "Boron", 3.0, 3, Some(0.84), Some(1.92), None),
    ElementRecord::new(6, "C", "Carbon", 4.0, 4, Some(0.78), Some(1.70), None),
    ElementRecord::new(7, "N", "Nitrogen", 3.0, 5, Some(0.78), Some(1.55), None),
    ElementRecord::new(8, "O", "Oxygen", 2.0, 6, Some(0.70), Some(1.52), None),
    ElementRecord::new(9, "F", "Fluorine", 1.0, 7, Some(0.57), Some(1.47), None),
    ElementRecord::new(10, "Ne", "Neon", 0.5, 8, Some(0.58), Some(1.54), None),
    ElementRecord::new(11, "Na", "Sodium", 1.0, 1, Some(1.66), Some(2.27), Some(1.86)),
    ElementRecord::new(12, "Mg", "Magnesium", 2.0, 2, Some(1.41), Some(1.73), Some(1.60)),
    ElementRecord::new(13, "Al", "Aluminium", 3.0, 3, Some(1.21), Some(1.84), Some(1.43)),
    ElementRecord::new(14, "Si", "Silicon", 4.0, 4, Some(1.11), Some(2.10), None),
    ElementRecord::new(15, "P", "Phosphorus", 3.0, 5, Some(1.07), Some(1.80), None),
    ElementRecord::new(16, "S", "Sulfur", 2.0, 6, Some(1.25), Some(1.80), None),
    ElementRecord::new(17, "Cl", "Chlorine", 1.0, 7, Some(1.02), Some(1.75), None),
    ElementRecord::new(18, "Ar", "Argon", 0.5, 8, Some(1.06), Some(1.88), None),
    ElementRecord::new(19, "K", "Potassium", 1.0, 1, Some(2.03), Some(2.75), Some(2.27)),
    ElementRecord::new(20, "Ca", "Calcium", 2.0, 2, Some(1.76), Some(2.31), Some(1.97)),
    ElementRecord::new(21, "Sc", "Scandium", 3.0, 3, Some(1.70), Some(2.11), Some(1.62)),
    ElementRecord::new(22, "Ti", "Titanium", 4.0, 4, Some(1.60), Some(2.00), Some(1.47)),
    ElementRecord::new(23, "V", "Vanadium", 4.0, 5, Some(1.53), Some(2.00), Some(1.34)),
    ElementRecord::new(24, "Cr", "Chromium", 3.0, 6, Some(1.39), Some(2.00), Some(1.28)),
    ElementRecord::new(25, "Mn", "Manganese", 4.0, 5, Some(1.39), Some(2.00), Some(1.27)),
    ElementRecord::new(26, "Fe", "Iron", 3.0, 3, Some(1.32), Some(2.00), Some(1.26)),
    ElementRecord::new(27, "Co", "Cobalt", 3.0, 3, Some(1.26), Some(2.00), Some(1.25)),
    ElementRecord::new(28, "Ni", "Nickel", 2.0, 3, Some(1.24), Some(1.63), Some(1.24)),
    ElementRecord::new(29, "Cu", "Copper", 2.0, 2, Some(1.32), Some(1.40), Some(1.28)),
    ElementRecord::new(30, "Zn", "Zinc", 2.0, 2, Some(1.22), Some(1.39), Some(1.34)),
    ElementRecord::new(31, "Ga", "Gallium", 3.0, 3, Some(1.22), Some(1.87), Some(1.35)),
    ElementRecord::new(32, "Ge", "Germanium", 4.0, 4, Some(1.20), Some(2.11), None),
    ElementRecord::new(33, "As", "Arsenic", 3.0, 5, Some(1.19), Some(1.85), None),
    ElementRecord::new(34, "Se", "Selenium", 2.0, 6, Some(1.20), Some(1.90), None),
    ElementRecord::new(35, "Br", "Bromine", 1.0, 7, Some(1.20), Some(1.85), None),
    ElementRecord::new(36, "Kr", "Krypton", 0.5, 8, Some(1.16), Some(2.02), None),
    ElementRecord::new(37, "Rb", "Rubidium", 1.0, 1, Some(2.20), Some(3.03), Some(2.48)),
    ElementRecord::new(38, "Sr", "Strontium", 2.0, 2, Some(1.95), Some(2.49), Some(2.15)),
    ElementRecord::new(39, "Y", "Yttrium", 3.0, 3, Some(1.90), Some(2.00), Some(1.80)),
    ElementRecord::new(40, "Zr", "Zirconium", 4.0, 4, Some(1.75), Some(2.00), Some(1.60)),
    ElementRecord::new(41, "Nb", "Niobium", 5.0, 5, Some(1.64), Some(2.00), Some(1.46)),
    ElementRecord::new(42, "Mo", "Molybdenum", 4.0, 6, Some(1.54), Some(2.00), Some(1.39)),
    ElementRecord::new(43, "Tc", "Technetium", 4.0, 5, Some(1.47), Some(2.00), Some(1.36)),
    ElementRecord::new(44, "Ru", "Ruthenium", 4.0, 3, Some(1.46), Some(2.00), Some(1.34)),
    ElementRecord::new(45, "Rh", "Rhodium", 4.0, 3, Some(1.42), Some(1.63), Some(1.34)),
    ElementRecord::new(46, "Pd", "Palladium", 4.0, 3, Some(1.39), Some(1.72), Some(1.37)),
    ElementRecord::new(47, "Ag", "Silver", 1.0, 2, Some(1.45), Some(1.58), Some(1.44)),
    ElementRecord::new(48, "Cd", "Cadmium", 2.0, 2, Some(1.44), Some(1.93), Some(1.51)),
    ElementRecord::new(49, "In", "Indium", 3.0, 3, Some(1.42), Some(2.17), Some(1.67)),
    ElementRecord::new(50, "Sn", "Tin", 4.0, 4, Some(1.39), Some(2.06), None),
    ElementRecord::new(51, "Sb", "Antimony", 3.0, 5, Some(1.39), Some(2.06), None),
    ElementRecord::new(52, "Te", "Tellurium", 2.0, 6, Some(1.38), Some(2.06), None),
    ElementRecord::new(53, "I", "Iodine", 1.0, 7, Some(1.39), Some(1.98), None),
    ElementRecord::new(54, "Xe", "Xenon", 0.5, 8, Some(1.40), Some(2.16), None),
    ElementRecord::new(55, "Cs", "Caesium", 1.0, 1, Some(2.44), Some(3.43), Some(2.65)),
    ElementRecord::new(56, "Ba", "Barium", 2.0, 2, Some(2.15), Some(2.68), Some(2.22)),
    ElementRecord::new(57, "La", "Lanthanum", 3.0, 3, Some(2.07), Some(2.10), Some(1.87)),
    ElementRecord::new(58, "Ce", "Cerium", 4.0, 3, Some(2.04), Some(2.10), Some(1.818)),
    ElementRecord::new(59, "Pr", "Praseodymium", 3.0, 3, Some(2.03), Some(2.10), Some(1.824)),
    ElementRecord::new(60, "Nd", "Neodymium", 3.0, 3, Some(2.01), Some(2.10), Some(1.814)),
    ElementRecord::new(61, "Pm", "Promethium", 3.0, 3, Some(1.99), Some(2.10), Some(1.834)),
    ElementRecord::new(62, "Sm", "Samarium", 3.0, 3, Some(1.98), Some(2.10), Some(1.804)),
    ElementRecord::new(63, "Eu", "Europium", 3.0, 3, Some(1.98), Some(2.10), Some(1.804)),
    ElementRecord::new(64, "Gd", "Gadolinium", 3.0, 3, Some(1.96), Some(2.10), Some(1.804)),
    ElementRecord::new(65, "Tb", "Terbium", 3.0, 3, Some(1.94), Some(2.10), Some(1.773)),
    ElementRecord::new(66, "Dy", "Dysprosium", 3.0, 3, Some(1.92), Some(2.10), Some(1.781)),
    ElementRecord::new(67, "Ho", "Holmium", 3.0, 3, Some(1.92), Some(2.10), Some(1.762)),
    ElementRecord::new(68, "Er", "Erbium", 3.0, 3, Some(1.89), Some(2.10), Some(1.761)),
    ElementRecord::new(69, "Tm", "Thulium", 3.0, 3, Some(1.90), Some(2.10), Some(1.759)),
    ElementRecord::new(70, "Yb", "Ytterbium", 3.0, 3, Some(1.87), Some(2.10), Some(1.76)),
    ElementRecord::new(71, "Lu", "Lutetium", 3.0, 3, Some(1.87), Some(2.10), Some(1.738)),
    ElementRecord::new(72, "Hf", "Hafnium", 4.0, 3, Some(1.75), Some(2.10), Some(1.59)),
    ElementRecord::new(73, "Ta", "Tantalum", 5.0, 3, Some(1.70), Some(2.10), Some(1.46)),
    ElementRecord::new(74, "W", "Tungsten", 4.0, 3, Some(1.62), Some(2.10), Some(1.39)),
    ElementRecord::new(75, "Re", "Rhenium", 4.0, 3, Some(1.51), Some(2.10), Some(1.37)),
    ElementRecord::new(76, "Os", "Osmium", 4.0, 3, Some(1.44), Some(2.10), Some(1.35)),
    ElementRecord::new(77, "Ir", "Iridium", 4.0, 3, Some(1.41), Some(2.10), Some(1.355)),
    ElementRecord::new(78, "Pt", "Platinum", 4.0, 3, Some(1.36), Some(1.75), Some(1.385)),
    ElementRecord::new(79, "Au", "Gold", 1.0, 3, Some(1.36), Some(1.66), Some(1.44)),
    ElementRecord::new(80, "Hg", "Mercury", 2.0, 3, Some(1.32), Some(1.55), Some(1.51)),
    ElementRecord::new(81, "Tl", "Thallium", 3.0, 3, Some(1.45), Some(1.96), Some(1.70)),
    ElementRecord::new(82, "Pb", "Lead", 4.0, 4, Some(1.46), Some(2.02), None),
    ElementRecord::new(83, "Bi", "Bismuth", 3.0, 5, Some(1.48), Some(2.07), None),
    ElementRecord::new(84, "Po", "Polonium", 2.0, 6, Some(1.40), Some(1.97), None),
    ElementRecord::new(85, "At", "Astatine", 1.0, 7, Some(1.50), Some(2.02), None),
    ElementRecord::new(86, "Rn", "Radon", 0.5, 8, Some(1.50), Some(2.20), None),
    ElementRecord::new(87, "Fr", "Francium", 1.0, 1, Some(2.60), Some(3.48), None),
    ElementRecord::new(88, "Ra", "Radium", 2.0, 2, Some(2.21), Some(2.83), None),
    ElementRecord::new(89, "Ac", "Actinium", 3.0, 3, Some(2.15), Some(2.20), None),
    ElementRecord::new(90, "Th", "Thorium", 4.0, 3, Some(2.06), Some(2.20), Some(1.79)),
    ElementRecord::new(91, "Pa", "Protactinium", 4.0, 3, Some(2.00), Some(2.20), Some(1.63)),
    ElementRecord::new(92, "U", "Uranium", 4.0, 3, Some(1.96), Some(2.20), Some(1.56)),
    ElementRecord::new(93, "Np", "Neptunium", 4.0, 3, Some(1.90), Some(2.20), Some(1.55)),
    ElementRecord::new(94, "Pu", "Plutonium", 4.0, 3, Some(1.87), Some(2.20), Some(1.59)),
    ElementRecord::new(95, "Am", "Americium", 4.0, 3, Some(1.80), Some(2.20), Some(1.73)),
    ElementRecord::new(96, "Cm", "Curium", 4.0, 3, Some(1.69), Some(2.20), Some(1.74)),
    ElementRecord::new(97, "Bk", "Berkelium", 4.0, 3, None, None, Some(1.70)),
    ElementRecord::new(98, "Cf", "Californium", 4.0, 3, None, None, Some(1.86)),
    ElementRecord::new(99, "Es", "Einsteinium", 4.0, 3, None, None, Some(1.86)),
    ElementRecord::new(100, "Fm", "Fermium", 4.0, 3, None, None, None),
    ElementRecord::new(101, "Md", "Mendelevium", 4.0, 3, None, None, None),
    ElementRecord::new(102, "No", "Nobelium", 4.0, 3, None, None, None),
    ElementRecord::new(103, "Lr", "Lawrencium", 4.0, 3, None, None, None),
    ElementRecord::new(104, "Rf", "Rutherfordium", 4.0, 3, None, None, None),
    ElementRecord::new(105, "Db", "Dubnium", 2.0, 3, None, None, None),
];
