/// DOM, typography and interaction constants for the web front-end.
///
/// Simulation and timing tuning lives in `cerca_core::constants`; this file
/// only holds what the browser layer needs to build and style the page.
// Element ids
pub const CANVAS_ID: &str = "cerca-canvas";
pub const NODES_ID: &str = "cerca-nodes";
pub const PANEL_ID: &str = "cerca-panel";
pub const PANEL_CLOSE_ID: &str = "cerca-panel-close";
pub const HERO_ID: &str = "cerca-hero";
pub const STYLE_ID: &str = "cerca-style";

// CSS classes
pub const NODE_CLASS: &str = "cerca-node";
pub const NODE_SELECTED_CLASS: &str = "cerca-node selected";
pub const PANEL_CLASS: &str = "cerca-panel";
pub const PANEL_OPEN_CLASS: &str = "cerca-panel open";

// Navigation node box (CSS px)
pub const NODE_SIZE_PX: f32 = 84.0;

// Brand
pub const BRAND_NAME: &str = "Cerca";
pub const ACCENT: &str = "#d4a373";
pub const BACKDROP: &str = "#050505";
pub const TAGLINE: &str = "No hace falta ir lejos para sentir que te has ido";

// Canvas typography
pub const RING_LABEL_FONT: &str = "10px system-ui, sans-serif";
pub const CAPTION_FONT: &str = "italic 15px Georgia, serif";

// Walking-distance labels, one per distance ring
pub const RING_LABELS: [&str; 4] = ["5 min", "10 min", "15 min", "20 min"];

// Ring dash pattern and drift (px, px per second)
pub const RING_DASH: [f64; 2] = [4.0, 6.0];
pub const RING_DASH_DRIFT: f32 = 8.0;

// Frame pacing: longer gaps (tab in background) are treated as this long
pub const MAX_FRAME_DT_SECS: f32 = 0.1;

// Keyboard
pub const CLOSE_KEY: &str = "Escape";

pub const STYLESHEET: &str = "\
body{margin:0;background:#050505;color:#fff;overflow:hidden;font-family:system-ui,sans-serif}\
#cerca-canvas{position:fixed;inset:0;width:100vw;height:100vh;display:block}\
#cerca-hero{position:fixed;top:28px;left:0;right:0;text-align:center;pointer-events:none}\
#cerca-hero h1{font-family:Georgia,serif;font-size:48px;margin:0}\
#cerca-hero p{font-style:italic;opacity:.7;margin:6px 0 0}\
#cerca-nodes{position:fixed;inset:0;pointer-events:none}\
.cerca-node{position:absolute;pointer-events:auto;border-radius:50%;cursor:pointer;\
border:1px solid rgba(255,255,255,.15);background:rgba(255,255,255,.03);\
color:rgba(255,255,255,.5);font-size:13px;backdrop-filter:blur(16px);transition:all .3s}\
.cerca-node.selected{border-color:rgba(255,255,255,.4);background:rgba(255,255,255,.1);\
color:#fff;font-weight:600}\
.cerca-panel{position:fixed;top:0;right:0;bottom:0;width:min(520px,92vw);padding:40px 32px;\
box-sizing:border-box;overflow-y:auto;background:rgba(10,8,6,.92);\
border-left:1px solid rgba(255,255,255,.1);transform:translateX(100%);\
transition:transform .4s ease}\
.cerca-panel.open{transform:translateX(0)}\
.cerca-panel h2{font-family:Georgia,serif;font-size:28px;margin:0 0 8px}\
.cerca-panel .subtitle{color:#d4a373;margin:0 0 24px}\
#cerca-panel-close{position:absolute;top:16px;right:16px;background:none;border:none;\
color:#fff;font-size:22px;cursor:pointer}";
