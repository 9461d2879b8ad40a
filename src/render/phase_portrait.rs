//! Point d'entrée du pipeline : validation, palette, encodage, composition.

use crate::color::build_colormap;
use crate::portrait::encoder::{
    conformal_grid_mask, phase_indices, stepped_modulus_mask, stepped_phase_mask,
};
use crate::portrait::types::{ComplexGrid, PortraitError, PortraitImage, PortraitOptions, PortraitVariant};
use crate::render::compositor::compose_image;

/// Rend le portrait de phase de la grille pour la variante demandée.
///
/// Étapes communes à toutes les variantes : construction de la palette
/// cyclique puis encodage de la phase normalisée en indices de palette.
/// Seul le masque de brillance dépend de la variante.
///
/// Les échantillons dégénérés (module nul, valeurs non finies) ne font pas
/// échouer le rendu : leur pixel ressort dégradé (NaN propagé), le reste
/// de l'image est inchangé.
pub fn render_portrait(
    grid: &ComplexGrid,
    variant: PortraitVariant,
    options: &PortraitOptions,
) -> Result<PortraitImage, PortraitError> {
    options.validate()?;

    let colormap = build_colormap(options.layout);
    let indices = phase_indices(grid, colormap.len());

    let pres = options.phase_resolution;
    let brightness = match variant {
        PortraitVariant::Proper => None,
        PortraitVariant::ConformalGrid => {
            Some(conformal_grid_mask(grid, pres, options.brighten))
        }
        PortraitVariant::SteppedModulus => Some(stepped_modulus_mask(grid, pres)),
        PortraitVariant::SteppedPhase => Some(stepped_phase_mask(grid, pres)),
    };

    Ok(compose_image(
        &indices,
        brightness.as_deref(),
        &colormap,
        grid.rows(),
        grid.cols(),
    ))
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;
    use crate::color::ColormapLayout;

    fn unit_grid() -> ComplexGrid {
        ComplexGrid::from_vec(vec![Complex64::new(1.0, 0.0)], 1, 1).unwrap()
    }

    #[test]
    fn test_invalid_resolution_fails_fast() {
        let options = PortraitOptions {
            phase_resolution: 0,
            ..Default::default()
        };
        let err = render_portrait(&unit_grid(), PortraitVariant::Proper, &options);
        assert!(matches!(err, Err(PortraitError::InvalidResolution(0))));
    }

    #[test]
    fn test_proper_portrait_of_one() {
        // arg(-1) = π -> farg = 1.0 -> partie fractionnaire 0 -> indice 1
        let img = render_portrait(
            &unit_grid(),
            PortraitVariant::Proper,
            &PortraitOptions::default(),
        )
        .unwrap();
        let expected = build_colormap(ColormapLayout::Standard)[0];
        assert_eq!(img.get(0, 0), expected);
    }

    #[test]
    fn test_reference_layout_is_used() {
        let options = PortraitOptions {
            layout: ColormapLayout::Reference,
            ..Default::default()
        };
        let img = render_portrait(&unit_grid(), PortraitVariant::Proper, &options).unwrap();
        let expected = build_colormap(ColormapLayout::Reference)[0];
        assert_eq!(img.get(0, 0), expected);
    }

    #[test]
    fn test_variants_share_phase_indices() {
        // Même grille : la variante ne change que la brillance, donc les
        // pixels en marches de phase restent proportionnels aux propres
        let grid = ComplexGrid::from_vec(
            (0..6)
                .map(|k| Complex64::from_polar(2.0, k as f64))
                .collect(),
            2,
            3,
        )
        .unwrap();
        let options = PortraitOptions::default();
        let proper = render_portrait(&grid, PortraitVariant::Proper, &options).unwrap();
        let stepped = render_portrait(&grid, PortraitVariant::SteppedPhase, &options).unwrap();
        for (p, s) in proper.pixels().iter().zip(stepped.pixels().iter()) {
            for c in 0..3 {
                assert!(s[c] <= p[c] + 1e-12);
                assert!(s[c] >= 0.75 * p[c] - 1e-12);
            }
        }
    }
}
