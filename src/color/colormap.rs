use serde::{Deserialize, Serialize};

use crate::color::color_models::{hsl_to_rgb, Hsl};

/// Longueur de la palette cyclique standard.
pub const STANDARD_COLORMAP_LEN: usize = 600;

/// Nombre d'échantillons de teinte avant sous-échantillonnage pour la
/// disposition de référence.
pub const REFERENCE_SOURCE_LEN: usize = 900;

/// Dispositions de palette disponibles pour les portraits de phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColormapLayout {
    /// 600 teintes uniformément réparties sur la roue chromatique.
    #[default]
    Standard,
    /// 900 teintes uniformes ré-indexées par une partition fixe qui
    /// comprime inégalement les transitions de couleur autour de la roue
    /// (reproduit un schéma de couleurs de référence externe).
    Reference,
}

impl ColormapLayout {
    pub fn name(self) -> &'static str {
        match self {
            ColormapLayout::Standard => "Standard",
            ColormapLayout::Reference => "Reference",
        }
    }
}

/// Échantillonne `n` teintes pures uniformément de 0° à 360° inclus.
///
/// Le premier et le dernier échantillon tombent sur la même couleur,
/// ce qui garantit le bouclage de la roue.
fn hue_wheel(n: usize) -> Vec<[f64; 3]> {
    debug_assert!(n >= 2 && n % 6 == 0, "longueur de roue invalide: {n}");
    (0..n)
        .map(|k| {
            let h = 360.0 * k as f64 / (n - 1) as f64;
            hsl_to_rgb(Hsl { h, s: 1.0, l: 0.5 })
        })
        .collect()
}

/// Construit la palette cyclique pour la disposition demandée.
///
/// Fonction pure : deux appels avec la même disposition produisent la
/// même séquence de couleurs.
pub fn build_colormap(layout: ColormapLayout) -> Vec<[f64; 3]> {
    match layout {
        ColormapLayout::Standard => hue_wheel(STANDARD_COLORMAP_LEN),
        ColormapLayout::Reference => {
            let full = hue_wheel(REFERENCE_SOURCE_LEN);
            let n = REFERENCE_SOURCE_LEN;

            // Partition fixe (bornes 150/450/600 pour n = 900, division
            // entière) : premier sixième dense, deuxième sixième à la
            // moitié un indice sur deux, tiers médian dense, dernier
            // tiers un indice sur deux.
            let mut cmap = Vec::with_capacity(n / 6 * 4);
            cmap.extend_from_slice(&full[..n / 6]);
            cmap.extend(full[n / 6..n / 2].iter().step_by(2).copied());
            cmap.extend_from_slice(&full[n / 2..2 * n / 3]);
            cmap.extend(full[2 * n / 3..].iter().step_by(2).copied());
            cmap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_length_and_range() {
        let cmap = build_colormap(ColormapLayout::Standard);
        assert_eq!(cmap.len(), STANDARD_COLORMAP_LEN);
        for rgb in &cmap {
            for c in rgb {
                assert!((0.0..=1.0).contains(c));
            }
        }
    }

    #[test]
    fn test_standard_cyclic_wraparound() {
        // Premier échantillon = 0°, dernier = 360° : même couleur
        let cmap = build_colormap(ColormapLayout::Standard);
        let first = cmap[0];
        let last = cmap[cmap.len() - 1];
        for (a, b) in first.iter().zip(last.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reference_is_subsampled() {
        let cmap = build_colormap(ColormapLayout::Reference);
        assert!(cmap.len() < REFERENCE_SOURCE_LEN);
        assert_eq!(cmap.len(), 600);
    }

    #[test]
    fn test_reference_partition_boundaries() {
        let cmap = build_colormap(ColormapLayout::Reference);
        let full = hue_wheel(REFERENCE_SOURCE_LEN);

        // Premier sixième conservé dense
        assert_eq!(cmap[0], full[0]);
        assert_eq!(cmap[149], full[149]);
        // Deuxième sixième : un indice sur deux à partir de 150
        assert_eq!(cmap[150], full[150]);
        assert_eq!(cmap[151], full[152]);
        assert_eq!(cmap[299], full[448]);
        // Tiers médian dense à partir de 450
        assert_eq!(cmap[300], full[450]);
        assert_eq!(cmap[449], full[599]);
        // Dernier tiers : un indice sur deux à partir de 600
        assert_eq!(cmap[450], full[600]);
        assert_eq!(cmap[599], full[898]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            build_colormap(ColormapLayout::Reference),
            build_colormap(ColormapLayout::Reference)
        );
        assert_eq!(
            build_colormap(ColormapLayout::Standard),
            build_colormap(ColormapLayout::Standard)
        );
    }
}
