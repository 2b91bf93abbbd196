use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_div(document: &web::Document, class: &str, css: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("create_element failed: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("not an HtmlElement: {:?}", e))?;
    el.set_class_name(class);
    _ = el.set_attribute("style", css);
    el.set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("set_attribute failed: {:?}", e))?;
    Ok(el)
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child failed: {:?}", e))
}

#[inline]
pub fn set_prop(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}
