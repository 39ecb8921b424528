/// DOM contract between the engine and the host page.
///
/// The host supplies the interactive surface and the image layers; the
/// engine injects the mask and filter SVG and drives their attributes.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Elements expected in the host markup
pub const SURFACE_ID: &str = "reveal-surface";
pub const REVEAL_LAYER_ID: &str = "reveal-layer";
pub const NEAR_LAYER_ID: &str = "layer-near";
pub const FAR_LAYER_ID: &str = "layer-far";

// Elements the engine creates
pub const MASK_ID: &str = "particle-mask";
pub const CONTOUR_FILTER_ID: &str = "contour-lines";

// Contour backdrop styling
pub const CONTOUR_OPACITY: &str = "0.3";
pub const CONTOUR_FILL: &str = "black";
