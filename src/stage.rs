use crate::dom::{self, Listener};
use folio_core::{scroll_progress, AnimationParams, CardItem, CardStage, Mount, StageFrame, PROJECTS};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const STAGE_REGION_ID: &str = "project-stage";
pub const STAGE_FOLDER_ID: &str = "stage-folder";
pub const STAGE_COVER_ID: &str = "stage-cover";
pub const STAGE_STACK_ID: &str = "stage-stack";

struct StageElements {
    region: web::Element,
    folder: Option<web::HtmlElement>,
    cover: Option<web::HtmlElement>,
    stack: Option<web::HtmlElement>,
    cards: Vec<(usize, web::HtmlElement)>,
    texts: Vec<(usize, web::HtmlElement)>,
}

fn indexed_elements(
    document: &web::Document,
    attribute: &str,
    limit: usize,
) -> Vec<(usize, web::HtmlElement)> {
    let mut out = Vec::new();
    let Ok(list) = document.query_selector_all(&format!("[{}]", attribute)) else {
        return out;
    };
    for i in 0..list.length() {
        let Some(el) = list
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        match el.get_attribute(attribute).and_then(|v| v.trim().parse::<usize>().ok()) {
            Some(index) if index < limit => out.push((index, el)),
            _ => log::warn!("[stage] ignoring element with bad {}", attribute),
        }
    }
    out
}

fn fill_text(el: &web::HtmlElement, item: &CardItem) {
    let set = |selector: &str, text: &str| {
        if let Ok(Some(node)) = el.query_selector(selector) {
            node.set_text_content(Some(text));
        }
    };
    set(".card-title", item.title);
    set(".card-description", item.description);
    set(".card-tags", &item.tags.join(" · "));
    if let Ok(Some(link)) = el.query_selector("a.card-link") {
        _ = link.set_attribute("href", item.link);
    }
}

fn apply_params(el: &web::HtmlElement, params: &AnimationParams) {
    dom::set_style(el, "transform", &params.transform_css());
    dom::set_style(el, "opacity", &params.opacity_css());
}

impl StageElements {
    fn apply(&self, frame: &StageFrame) {
        if let Some(el) = &self.folder {
            apply_params(el, &frame.folder);
        }
        for (i, el) in &self.cards {
            apply_params(el, &frame.cards[*i]);
        }
        for (i, el) in &self.texts {
            apply_params(el, &frame.texts[*i]);
        }
        if let Some(el) = &self.cover {
            apply_params(el, &frame.cover);
        }
        if let Some(el) = &self.stack {
            apply_params(el, &frame.stack);
        }
    }
}

/// Recompute stage parameters from the region's position; runs
/// synchronously on every scroll/resize, never on a loop of its own.
fn update(window: &web::Window, stage: &CardStage, elements: &StageElements) {
    let rect = elements.region.get_bounding_client_rect();
    let viewport_h = dom::viewport_size(window).y;
    let p = scroll_progress(rect.top() as f32, rect.height() as f32, viewport_h);
    elements.apply(&stage.frame(p));
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Option<Mount>> {
    let Some(region) = document.get_element_by_id(STAGE_REGION_ID) else {
        return Ok(None);
    };
    let stage = CardStage::new(PROJECTS.len());
    let elements = StageElements {
        region,
        folder: dom::html_element_by_id(document, STAGE_FOLDER_ID),
        cover: dom::html_element_by_id(document, STAGE_COVER_ID),
        stack: dom::html_element_by_id(document, STAGE_STACK_ID),
        cards: indexed_elements(document, "data-card-index", stage.item_count()),
        texts: indexed_elements(document, "data-card-text", stage.item_count()),
    };
    for (i, el) in &elements.texts {
        fill_text(el, &PROJECTS[*i]);
    }
    log::info!(
        "[stage] {} cards, {} text blocks over {} segments",
        elements.cards.len(),
        elements.texts.len(),
        stage.segment_count()
    );
    let elements = Rc::new(elements);
    update(window, &stage, &elements);

    let mut mount = Mount::new("card-stage");
    for event in ["scroll", "resize"] {
        let w = window.clone();
        let els = elements.clone();
        // capture so scrolls of inner snap containers are seen too
        mount.add(Listener::add_with_capture(window, event, true, move |_ev: web::Event| {
            update(&w, &stage, &els);
        })?);
    }
    Ok(Some(mount))
}
