use crate::constants::*;
use crate::core::constants::{
    BAND_TABLE_VALUES, EDGE_DILATE_RADIUS, FILTER_MARGIN_PCT, NOISE_OCTAVES, NOISE_SEED,
};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_svg_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

/// Attribute writes happen every frame; failures are logged, not fatal.
#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    if el.set_attribute(name, value).is_err() {
        log::error!("[dom] failed to set {}={} on <{}>", name, value, el.tag_name());
    }
}

fn append_svg_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    attrs: &[(&str, &str)],
) -> anyhow::Result<web::Element> {
    let el = create_svg_element(document, tag)?;
    for (name, value) in attrs {
        set_attr(&el, name, value);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

/// Build the hidden SVG holding the reveal mask: a black backdrop rect
/// (nothing revealed) plus one white ellipse per pool slot, returned in
/// slot order for the frame driver to retarget.
pub fn build_particle_mask(
    document: &web::Document,
    surface: &web::Element,
    capacity: usize,
) -> anyhow::Result<Vec<web::Element>> {
    let svg = append_svg_child(
        document,
        surface,
        "svg",
        &[
            ("width", "0"),
            ("height", "0"),
            ("style", "position:absolute;left:0;top:0"),
            ("aria-hidden", "true"),
        ],
    )?;
    let defs = append_svg_child(document, &svg, "defs", &[])?;
    let mask = append_svg_child(document, &defs, "mask", &[("id", MASK_ID)])?;
    append_svg_child(
        document,
        &mask,
        "rect",
        &[("width", "100%"), ("height", "100%"), ("fill", "black")],
    )?;
    let mut ellipses = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        let el = append_svg_child(
            document,
            &mask,
            "ellipse",
            &[("fill", "white"), ("cx", "0"), ("cy", "0"), ("rx", "0"), ("ry", "0")],
        )?;
        ellipses.push(el);
    }
    Ok(ellipses)
}

/// Build the contour backdrop: a full-surface rect run through the
/// edge-extraction filter graph. Returns the two filter nodes the frame
/// driver animates (turbulence for base frequency, offset for the pan).
pub fn build_contour_backdrop(
    document: &web::Document,
    surface: &web::Element,
) -> anyhow::Result<(web::Element, web::Element)> {
    let svg = append_svg_child(
        document,
        surface,
        "svg",
        &[
            ("width", "100%"),
            ("height", "100%"),
            (
                "style",
                "position:absolute;left:0;top:0;z-index:0;pointer-events:none",
            ),
            ("opacity", CONTOUR_OPACITY),
            ("aria-hidden", "true"),
        ],
    )?;
    let defs = append_svg_child(document, &svg, "defs", &[])?;
    let margin = format!("-{}%", FILTER_MARGIN_PCT);
    let span = format!("{}%", 100 + 2 * FILTER_MARGIN_PCT);
    let filter = append_svg_child(
        document,
        &defs,
        "filter",
        &[
            ("id", CONTOUR_FILTER_ID),
            ("x", &margin),
            ("y", &margin),
            ("width", &span),
            ("height", &span),
        ],
    )?;

    // Stage 1: base turbulence "height map"
    let turbulence = append_svg_child(
        document,
        &filter,
        "feTurbulence",
        &[
            ("type", "turbulence"),
            ("baseFrequency", "0.015"),
            ("numOctaves", &NOISE_OCTAVES.to_string()),
            ("seed", &NOISE_SEED.to_string()),
            ("result", "noise"),
        ],
    )?;
    // Stage 2: pan the noise to make it drift
    let pan = append_svg_child(
        document,
        &filter,
        "feOffset",
        &[
            ("in", "noise"),
            ("dx", "0"),
            ("dy", "0"),
            ("result", "panned_noise"),
        ],
    )?;
    // Stage 3: collapse to grayscale
    append_svg_child(
        document,
        &filter,
        "feColorMatrix",
        &[
            ("in", "panned_noise"),
            ("type", "saturate"),
            ("values", "0"),
            ("result", "grayscale_noise"),
        ],
    )?;
    // Stage 4: quantize the smooth gradient into hard-edged bands
    let transfer = append_svg_child(
        document,
        &filter,
        "feComponentTransfer",
        &[("in", "grayscale_noise"), ("result", "banded_noise")],
    )?;
    for func in ["feFuncR", "feFuncG", "feFuncB"] {
        append_svg_child(
            document,
            &transfer,
            func,
            &[("type", "discrete"), ("tableValues", BAND_TABLE_VALUES)],
        )?;
    }
    // Stage 5: thicken the bands, then subtract the original to keep only
    // the band edges
    append_svg_child(
        document,
        &filter,
        "feMorphology",
        &[
            ("in", "banded_noise"),
            ("operator", "dilate"),
            ("radius", &EDGE_DILATE_RADIUS.to_string()),
            ("result", "dilated"),
        ],
    )?;
    append_svg_child(
        document,
        &filter,
        "feComposite",
        &[
            ("in", "dilated"),
            ("in2", "banded_noise"),
            ("operator", "out"),
            ("result", "edges"),
        ],
    )?;
    // Stage 6: mask the solid fill onto the edges
    append_svg_child(
        document,
        &filter,
        "feComposite",
        &[
            ("in", "SourceGraphic"),
            ("in2", "edges"),
            ("operator", "in"),
        ],
    )?;

    append_svg_child(
        document,
        &svg,
        "rect",
        &[
            ("width", "100%"),
            ("height", "100%"),
            ("fill", CONTOUR_FILL),
            ("filter", &format!("url(#{})", CONTOUR_FILTER_ID)),
        ],
    )?;
    Ok((turbulence, pan))
}

/// Point a layer's alpha mask at the particle mask definition.
pub fn apply_particle_mask(layer: &web::HtmlElement) {
    let style = layer.style();
    let url = format!("url(#{})", MASK_ID);
    _ = style.set_property("mask-image", &url);
    _ = style.set_property("-webkit-mask-image", &url);
}
