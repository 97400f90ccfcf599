use crate::constants::{PANEL_CLOSE_ID, PANEL_ID};
use crate::content::render_content;
use crate::dom::{self, Listener};
use crate::layout::panel_class;
use cerca_core::{section, PanelController};
use web_sys as web;

/// DOM side of the detail panel: mirrors the controller's flags.
pub struct PanelView {
    root: web::Element,
    title: web::Element,
    subtitle: web::Element,
    body: web::Element,
    shown: Option<usize>,
    _close: Listener,
}

impl PanelView {
    pub fn build(
        document: &web::Document,
        parent: &web::Element,
        on_close: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let root = dom::ensure_child(document, parent, "aside", PANEL_ID)?;
        root.set_inner_html("");
        root.set_class_name(panel_class(false));
        let close = dom::ensure_child(document, &root, "button", PANEL_CLOSE_ID)?;
        close.set_text_content(Some("×"));
        let title = dom::create_child(document, &root, "h2", "title")?;
        let subtitle = dom::create_child(document, &root, "p", "subtitle")?;
        let body = dom::create_child(document, &root, "div", "body")?;
        Ok(Self {
            root,
            title,
            subtitle,
            body,
            shown: None,
            _close: dom::click_listener(&close, on_close),
        })
    }

    pub fn sync(&mut self, panel: &PanelController) {
        self.root.set_class_name(panel_class(panel.panel_open()));
        let active = panel.active_section();
        if active == self.shown {
            return;
        }
        match active.map(section) {
            Some(Ok(s)) => {
                self.title.set_text_content(Some(s.title));
                self.subtitle.set_text_content(Some(s.subtitle));
                self.body.set_inner_html(render_content(s.id));
            }
            Some(Err(e)) => log::error!("[panel] {}", e),
            None => {
                self.title.set_text_content(None);
                self.subtitle.set_text_content(None);
                self.body.set_inner_html("");
            }
        }
        self.shown = active;
    }
}
