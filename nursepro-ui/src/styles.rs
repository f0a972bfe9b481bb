#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-nursepro-ui]";

/// Layout-only stylesheet; colours come from the host page.
pub const DEFAULT_STYLES: &str = r#"
.calc-root {
  display: flex;
  flex-direction: column;
  gap: 20px;
  max-width: 720px;
  margin: 0 auto;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
}

.calc-tabs {
  display: flex;
  gap: 8px;
}

.calc-tab {
  padding: 8px 20px;
  border: 1px solid currentColor;
  border-radius: 12px;
  background: transparent;
  font-weight: 700;
  cursor: pointer;
}

.calc-tab.is-active {
  text-decoration: underline;
}

.calc-form {
  display: grid;
  gap: 16px;
}

.calc-field {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.calc-field input,
.calc-field select {
  padding: 10px 12px;
  border-radius: 10px;
  border: 1px solid rgba(100, 116, 139, 0.4);
}

.calc-helper {
  font-size: 0.7rem;
  opacity: 0.7;
}

.calc-result {
  padding: 24px;
  border-radius: 20px;
  border: 2px solid currentColor;
  text-align: center;
}

.calc-result-value {
  font-size: 2.5rem;
  font-weight: 900;
}

.calc-reference,
.calc-legend {
  display: grid;
  gap: 6px;
  font-size: 0.75rem;
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-nursepro-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
