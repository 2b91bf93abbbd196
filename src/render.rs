use crate::css;
use crate::constants::*;
use crate::dom;
use cursor_core::{GlyphStyle, RenderFrame};
use fnv::{FnvHashMap, FnvHashSet};
use web_sys as web;

/// Draws the glyph and spray bubbles as absolutely positioned DOM nodes.
///
/// Bubble nodes are keyed by particle id: created on first sight, updated
/// every frame from the decay look, removed as soon as the particle leaves
/// the frame (evicted or finished).
pub struct DomRenderer {
    document: web::Document,
    layer: web::HtmlElement,
    glyph: web::HtmlElement,
    ring: web::HtmlElement,
    core: web::HtmlElement,
    dot: web::HtmlElement,
    bubbles: FnvHashMap<u64, web::HtmlElement>,
    last_style: Option<GlyphStyle>,
}

impl DomRenderer {
    pub fn new(document: &web::Document, mount: &web::Element) -> anyhow::Result<Self> {
        let layer = dom::create_div(document, LAYER_CLASS, &css::layer_css())?;
        let glyph = dom::create_div(document, GLYPH_CLASS, &css::glyph_base_css())?;
        let ring = dom::create_div(document, RING_CLASS, &css::ring_base_css())?;
        let core = dom::create_div(document, CORE_CLASS, &css::core_css(false))?;
        let dot = dom::create_div(document, DOT_CLASS, &css::dot_css(true))?;

        dom::append(&core, &dot)?;
        dom::append(&ring, &core)?;
        dom::append(&glyph, &ring)?;
        dom::append(&layer, &glyph)?;
        dom::append(mount, &layer)?;
        dom::set_prop(&ring, "opacity", "0");

        Ok(Self {
            document: document.clone(),
            layer,
            glyph,
            ring,
            core,
            dot,
            bubbles: FnvHashMap::default(),
            last_style: None,
        })
    }

    pub fn draw(&mut self, frame: &RenderFrame) {
        dom::set_prop(
            &self.glyph,
            "transform",
            &css::translate_px(frame.glyph.x, frame.glyph.y),
        );
        self.apply_style(&frame.style);
        self.draw_bubbles(frame);
    }

    fn apply_style(&mut self, style: &GlyphStyle) {
        if self.last_style.as_ref() == Some(style) {
            return;
        }
        for (name, value) in css::ring_props(style) {
            dom::set_prop(&self.ring, name, &value);
        }
        _ = self.core.set_attribute("style", &css::core_css(style.filled));
        _ = self.dot.set_attribute("style", &css::dot_css(style.show_center_dot));
        self.last_style = Some(*style);
    }

    fn draw_bubbles(&mut self, frame: &RenderFrame) {
        let live: FnvHashSet<u64> = frame.particles.iter().map(|p| p.id).collect();
        self.bubbles.retain(|id, el| {
            let keep = live.contains(id);
            if !keep {
                el.remove();
            }
            keep
        });

        for view in &frame.particles {
            if !self.bubbles.contains_key(&view.id) {
                match dom::create_div(&self.document, PARTICLE_CLASS, &css::bubble_base_css(view)) {
                    Ok(el) => {
                        if let Err(e) = dom::append(&self.layer, &el) {
                            log::warn!("[render] bubble #{} not attached: {:#}", view.id, e);
                            continue;
                        }
                        self.bubbles.insert(view.id, el);
                    }
                    Err(e) => {
                        log::warn!("[render] bubble #{} not created: {:#}", view.id, e);
                        continue;
                    }
                }
            }
            if let Some(el) = self.bubbles.get(&view.id) {
                for (name, value) in css::bubble_props(view) {
                    dom::set_prop(el, name, &value);
                }
            }
        }
    }

    /// Removes every bubble and fades the glyph out.
    pub fn clear(&mut self) {
        for (_, el) in self.bubbles.drain() {
            el.remove();
        }
        dom::set_prop(&self.ring, "opacity", "0");
        self.last_style = None;
    }

    pub fn unmount(&mut self) {
        self.clear();
        self.layer.remove();
    }
}
