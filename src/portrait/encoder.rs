//! Encodage phase/module : transforme la grille complexe en indices de
//! palette et en masques de brillance selon la variante de portrait.

use std::f64::consts::PI;

use num_complex::Complex64;
use rayon::prelude::*;

use crate::portrait::periodic::{sawtooth, step_index};
use crate::portrait::types::ComplexGrid;

/// Plancher de brillance des variantes en marches (module et phase).
const STEP_BRIGHTNESS_FLOOR: f64 = 0.75;

/// Phase normalisée d'un échantillon : `(arg(-z) + π) / 2π`, dans (0, 1].
///
/// La négation avant la prise d'argument tourne l'origine des phases de
/// 180° ; c'est la convention du schéma de couleurs reproduit ici, à
/// conserver telle quelle pour la parité visuelle.
pub fn normalized_phase(z: Complex64) -> f64 {
    ((-z).arg() + PI) / (2.0 * PI)
}

/// Logarithme naturel du module. Vaut −∞ pour un échantillon nul : la
/// valeur se propage en NaN dans la rampe du pixel concerné, sans
/// interrompre le rendu des autres pixels.
fn log_modulus(z: Complex64) -> f64 {
    z.norm().ln()
}

/// Indices de palette 1-based pour chaque échantillon de la grille.
///
/// Calcul élémentaire par pixel, parallélisé par `rayon` ; l'ordre du
/// buffer résultat est identique au calcul séquentiel.
pub fn phase_indices(grid: &ComplexGrid, bucket_count: usize) -> Vec<usize> {
    grid.values()
        .par_iter()
        .map(|&z| step_index(normalized_phase(z), 1.0, bucket_count))
        .collect()
}

/// Masque de brillance de la grille conforme : produit d'une rampe pilotée
/// par la phase (période `1/pres`) et d'une rampe pilotée par le module
/// (période `2π/pres`), toutes deux sur [lowb, 1].
///
/// Le plancher `lowb = sqrt(0.75² · (1 − brighten) + brighten)` relève la
/// brillance minimale des lignes de niveau selon le facteur `brighten`.
pub fn conformal_grid_mask(grid: &ComplexGrid, pres: u32, brighten: f64) -> Vec<f64> {
    let lowb = (STEP_BRIGHTNESS_FLOOR * STEP_BRIGHTNESS_FLOOR * (1.0 - brighten) + brighten).sqrt();
    let phase_period = 1.0 / pres as f64;
    let modulus_period = 2.0 * PI / pres as f64;

    grid.values()
        .par_iter()
        .map(|&z| {
            sawtooth(normalized_phase(z), phase_period, lowb, 1.0)
                * sawtooth(log_modulus(z), modulus_period, lowb, 1.0)
        })
        .collect()
}

/// Masque de brillance en marches de module : rampe sur `ln|z|` de période
/// `2π/pres`, valeurs dans [0.75, 1].
pub fn stepped_modulus_mask(grid: &ComplexGrid, pres: u32) -> Vec<f64> {
    let period = 2.0 * PI / pres as f64;
    grid.values()
        .par_iter()
        .map(|&z| sawtooth(log_modulus(z), period, STEP_BRIGHTNESS_FLOOR, 1.0))
        .collect()
}

/// Masque de brillance en marches de phase : rampe sur la phase normalisée
/// de période `1/pres`, valeurs dans [0.75, 1].
pub fn stepped_phase_mask(grid: &ComplexGrid, pres: u32) -> Vec<f64> {
    let period = 1.0 / pres as f64;
    grid.values()
        .par_iter()
        .map(|&z| sawtooth(normalized_phase(z), period, STEP_BRIGHTNESS_FLOOR, 1.0))
        .collect()
}
