//! Composition finale : des indices de palette (et du masque de brillance
//! éventuel) vers l'image couleur, avec retournement vertical.

use rayon::prelude::*;

use crate::portrait::types::PortraitImage;

/// Écrit l'image finale depuis le tableau d'indices 1-based et le masque
/// de brillance optionnel.
///
/// La première ligne de la grille d'entrée devient la dernière ligne de
/// l'image : l'axe imaginaire croît vers le haut côté mathématique, alors
/// que l'affichage compte les lignes depuis le haut. Chaque pixel est
/// écrit exactement une fois dans un buffer fraîchement alloué.
///
/// La composition est parallélisée par lignes de sortie avec `rayon` ;
/// le résultat est identique au parcours séquentiel.
pub fn compose_image(
    indices: &[usize],
    brightness: Option<&[f64]>,
    colormap: &[[f64; 3]],
    rows: usize,
    cols: usize,
) -> PortraitImage {
    assert_eq!(
        indices.len(),
        rows * cols,
        "tableau d'indices incohérent avec les dimensions de la grille"
    );
    if let Some(mask) = brightness {
        assert_eq!(
            mask.len(),
            indices.len(),
            "masque de brillance incohérent avec le tableau d'indices"
        );
    }

    let pixels: Vec<[f64; 3]> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|out_row| {
            let src_row = rows - 1 - out_row;
            (0..cols).map(move |col| {
                let at = src_row * cols + col;
                let [r, g, b] = colormap[indices[at] - 1];
                match brightness {
                    Some(mask) => {
                        let v = mask[at];
                        [r * v, g * v, b * v]
                    }
                    None => [r, g, b],
                }
            })
        })
        .collect();

    PortraitImage::from_raw(pixels, rows, cols)
}
