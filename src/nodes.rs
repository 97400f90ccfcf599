use crate::dom::{self, Listener};
use crate::layout::{node_box, node_class, node_style};
use cerca_core::nav::node_visual;
use cerca_core::{Frame, SECTIONS};
use web_sys as web;

/// The five navigation buttons. Holds no selection state of its own.
pub struct NodeLayer {
    buttons: Vec<web::Element>,
    _listeners: Vec<Listener>,
}

impl NodeLayer {
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        on_select: impl Fn(usize) + Clone + 'static,
    ) -> anyhow::Result<Self> {
        container.set_inner_html("");
        let mut buttons = Vec::with_capacity(SECTIONS.len());
        let mut listeners = Vec::with_capacity(SECTIONS.len());
        for section in SECTIONS.iter() {
            let class = node_class(node_visual(section.id, None));
            let el = dom::create_child(document, container, "button", class)?;
            el.set_text_content(Some(section.label));
            _ = el.set_attribute("data-icon", section.icon_key);
            let select = on_select.clone();
            let id = section.id;
            listeners.push(dom::click_listener(&el, move || select(id)));
            buttons.push(el);
        }
        Ok(Self {
            buttons,
            _listeners: listeners,
        })
    }

    pub fn relayout(&self, frame: &Frame) {
        for (i, el) in self.buttons.iter().enumerate() {
            _ = el.set_attribute("style", &node_style(&node_box(i, frame)));
        }
    }

    pub fn sync(&self, active: Option<usize>) {
        for (i, el) in self.buttons.iter().enumerate() {
            el.set_class_name(node_class(node_visual(i, active)));
        }
    }
}
