use image::RgbImage;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColormapLayout;

/// Résolution de phase par défaut (nombre de bandes par période).
pub const DEFAULT_PHASE_RESOLUTION: u32 = 20;

/// Plancher de brillance par défaut pour la grille conforme.
pub const DEFAULT_BRIGHTEN: f64 = 0.1;

/// Variantes de portrait de phase prises en charge.
///
/// Les identifiants numériques correspondent aux sélecteurs externes :
/// 1=Proper, 2=ConformalGrid, 3=SteppedModulus, 4=SteppedPhase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortraitVariant {
    /// Coloration continue par la phase seule, sans masque de brillance.
    Proper,
    /// Superposition de lignes de niveau de phase et de module
    /// (produit de deux rampes de brillance).
    ConformalGrid,
    /// Bandes de module en marches, colorées par la phase.
    SteppedModulus,
    /// Bandes de phase en marches.
    SteppedPhase,
}

impl PortraitVariant {
    /// Convertit un identifiant numérique externe en enum.
    ///
    /// Retourne `None` pour un sélecteur inconnu : c'est le point de rejet
    /// des variantes invalides avant toute construction de portrait.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PortraitVariant::Proper),
            2 => Some(PortraitVariant::ConformalGrid),
            3 => Some(PortraitVariant::SteppedModulus),
            4 => Some(PortraitVariant::SteppedPhase),
            _ => None,
        }
    }

    /// Identifiant numérique correspondant.
    pub fn id(self) -> u8 {
        match self {
            PortraitVariant::Proper => 1,
            PortraitVariant::ConformalGrid => 2,
            PortraitVariant::SteppedModulus => 3,
            PortraitVariant::SteppedPhase => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PortraitVariant::Proper => "Proper",
            PortraitVariant::ConformalGrid => "Conformal Grid",
            PortraitVariant::SteppedModulus => "Stepped Modulus",
            PortraitVariant::SteppedPhase => "Stepped Phase",
        }
    }

    /// Vrai pour les variantes qui produisent un masque de brillance.
    pub fn uses_brightness(self) -> bool {
        !matches!(self, PortraitVariant::Proper)
    }
}

/// Paramètres de rendu d'un portrait de phase.
///
/// Les valeurs par défaut reproduisent le rendu de référence ; les tests
/// peuvent les surcharger de manière déterministe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PortraitOptions {
    /// Disposition de la palette cyclique.
    pub layout: ColormapLayout,
    /// Nombre de bandes de phase/module par période (pres).
    pub phase_resolution: u32,
    /// Plancher de brillance de la grille conforme, dans [0, 1].
    pub brighten: f64,
}

impl Default for PortraitOptions {
    fn default() -> Self {
        PortraitOptions {
            layout: ColormapLayout::Standard,
            phase_resolution: DEFAULT_PHASE_RESOLUTION,
            brighten: DEFAULT_BRIGHTEN,
        }
    }
}

impl PortraitOptions {
    /// Rejette les configurations qui mèneraient à une division par zéro
    /// ou à un plancher de brillance corrompu.
    pub fn validate(&self) -> Result<(), PortraitError> {
        if self.phase_resolution == 0 {
            return Err(PortraitError::InvalidResolution(self.phase_resolution));
        }
        if !(0.0..=1.0).contains(&self.brighten) {
            return Err(PortraitError::InvalidBrighten(self.brighten));
        }
        Ok(())
    }
}

/// Erreurs de configuration et de construction du pipeline.
///
/// Les valeurs numériques dégénérées (module nul sous le logarithme,
/// échantillons non finis) ne sont volontairement pas des erreurs : elles
/// dégradent le pixel concerné sans interrompre le rendu.
#[derive(Debug, Error)]
pub enum PortraitError {
    #[error("grille vide: le portrait nécessite au moins un échantillon")]
    EmptyGrid,
    #[error("dimensions incohérentes: {values} valeurs pour une grille {rows}x{cols}")]
    DimensionMismatch {
        values: usize,
        rows: usize,
        cols: usize,
    },
    #[error("résolution de phase invalide: {0} (attendu >= 1)")]
    InvalidResolution(u32),
    #[error("plancher de brillance invalide: {0} (attendu dans [0, 1])")]
    InvalidBrighten(f64),
}

/// Grille 2D d'échantillons complexes, stockée en ligne-majeure.
///
/// La grille est l'entrée immuable du pipeline : elle est construite par
/// l'appelant (qui a échantillonné sa fonction comme il l'entend) et n'est
/// jamais modifiée par le rendu.
#[derive(Clone, Debug)]
pub struct ComplexGrid {
    values: Vec<Complex64>,
    rows: usize,
    cols: usize,
}

impl ComplexGrid {
    /// Construit une grille depuis un buffer plat ligne-majeure.
    ///
    /// Échoue si les dimensions sont nulles ou si la longueur du buffer
    /// ne correspond pas à `rows * cols`.
    pub fn from_vec(
        values: Vec<Complex64>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, PortraitError> {
        if rows == 0 || cols == 0 {
            return Err(PortraitError::EmptyGrid);
        }
        if values.len() != rows * cols {
            return Err(PortraitError::DimensionMismatch {
                values: values.len(),
                rows,
                cols,
            });
        }
        Ok(ComplexGrid { values, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Échantillon à la ligne `row`, colonne `col`.
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.values[row * self.cols + col]
    }

    /// Buffer plat ligne-majeure.
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }
}

/// Image résultat : triplets RGB dans [0, 1], ligne-majeure, déjà
/// retournée verticalement par rapport à la grille source.
#[derive(Clone, Debug, PartialEq)]
pub struct PortraitImage {
    pixels: Vec<[f64; 3]>,
    rows: usize,
    cols: usize,
}

impl PortraitImage {
    pub(crate) fn from_raw(pixels: Vec<[f64; 3]>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(pixels.len(), rows * cols);
        PortraitImage { pixels, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Couleur du pixel à la ligne `row`, colonne `col`.
    pub fn get(&self, row: usize, col: usize) -> [f64; 3] {
        self.pixels[row * self.cols + col]
    }

    /// Buffer plat ligne-majeure.
    pub fn pixels(&self) -> &[[f64; 3]] {
        &self.pixels
    }

    /// Empaquette l'image en `RgbImage` 8 bits par canal pour le
    /// collaborateur d'affichage.
    ///
    /// Les canaux non finis (pixels dégénérés, module nul sous le
    /// logarithme) saturent à 0 : le pixel ressort noir sans affecter le
    /// reste de l'image.
    pub fn to_rgb_image(&self) -> RgbImage {
        let buffer: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|px| px.iter().map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8))
            .collect();

        RgbImage::from_raw(self.cols as u32, self.rows as u32, buffer)
            .expect("taille de buffer incohérente avec les dimensions de l'image")
    }
}
