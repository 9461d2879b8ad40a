/// Conversions colorimétriques pour la construction des roues de teintes.

/// Espace colorimétrique HSL (Teinte, Saturation, Luminosité).
///
/// Avec `s = 1.0` et `l = 0.5` la conversion produit les teintes pures de
/// la roue chromatique, ce qui est exactement le réglage utilisé par les
/// palettes cycliques des portraits de phase.
#[derive(Clone, Copy, Debug)]
pub struct Hsl {
    pub h: f64, // Teinte [0, 360]
    pub s: f64, // Saturation [0, 1]
    pub l: f64, // Luminosité [0, 1]
}

/// Convertit HSL vers RGB, chaque canal dans [0, 1].
///
/// La teinte est repliée dans [0, 360) avant conversion, donc 360° redonne
/// exactement la couleur de 0° (bouclage de la roue).
pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s;
    let l = hsl.l;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        (r + m).clamp(0.0, 1.0),
        (g + m).clamp(0.0, 1.0),
        (b + m).clamp(0.0, 1.0),
    ]
}
