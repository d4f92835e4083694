use phf::{Map, phf_map};

/// Mass of the water molecule added back for the chain termini, in daltons.
pub const WATER_MASS: f64 = 18.015;

/// Average masses of the free amino acids, in daltons, keyed by one-letter code.
static AVERAGE_RESIDUE_MASSES: Map<char, f64> = phf_map! {
    'A' => 89.09, 'R' => 174.20, 'N' => 132.12, 'D' => 133.10, 'C' => 121.16,
    'E' => 147.13, 'Q' => 146.15, 'G' => 75.07, 'H' => 155.16, 'I' => 131.17,
    'L' => 131.17, 'K' => 146.19, 'M' => 149.21, 'F' => 165.19, 'P' => 115.13,
    'S' => 105.09, 'T' => 119.12, 'W' => 204.23, 'Y' => 181.19, 'V' => 117.15,
};

// EMBOSS pKa values.
pub const PKA_N_TERMINUS: f64 = 9.69;
pub const PKA_C_TERMINUS: f64 = 2.34;

static ACIDIC_SIDE_CHAIN_PKA: Map<char, f64> = phf_map! {
    'D' => 3.65, 'E' => 4.25, 'C' => 8.18, 'Y' => 10.07,
};

static BASIC_SIDE_CHAIN_PKA: Map<char, f64> = phf_map! {
    'H' => 6.00, 'K' => 10.53, 'R' => 12.48,
};

pub fn average_mass(symbol: char) -> Option<f64> {
    AVERAGE_RESIDUE_MASSES.get(&symbol).copied()
}

/// pKa of a side chain that carries a negative charge when deprotonated.
pub fn acidic_pka(symbol: char) -> Option<f64> {
    ACIDIC_SIDE_CHAIN_PKA.get(&symbol).copied()
}

/// pKa of a side chain that carries a positive charge when protonated.
pub fn basic_pka(symbol: char) -> Option<f64> {
    BASIC_SIDE_CHAIN_PKA.get(&symbol).copied()
}
