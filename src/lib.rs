//! Portraits de phase de fonctions complexes.
//!
//! La bibliothèque transforme une grille 2D de valeurs complexes en une
//! image couleur : la teinte encode l'argument (phase) de chaque valeur,
//! et selon la variante choisie, une modulation de brillance encode des
//! lignes de niveau de phase et/ou de module.
//!
//! Le pipeline est purement fonctionnel : grille complexe → encodeur
//! phase/module → (indices de couleur, masque de brillance optionnel) →
//! compositeur d'image. L'échantillonnage de la fonction source et
//! l'affichage/export du résultat restent à la charge de l'appelant.

pub mod color;
pub mod portrait;
pub mod render;

pub use color::{build_colormap, ColormapLayout};
pub use portrait::{ComplexGrid, PortraitError, PortraitImage, PortraitOptions, PortraitVariant};
pub use render::render_portrait;
