use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh container attached to the body, for mounting one component.
pub fn mount_container(id: &str) -> HtmlElement {
    let document = document();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<HtmlElement>()
}

pub fn remove_container(container: &HtmlElement) {
    document().body().unwrap().remove_child(container).unwrap();
}

pub fn click(container: &HtmlElement, selector: &str) {
    let element = container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector));
    element.unchecked_into::<HtmlElement>().click();
}

pub fn exists(container: &HtmlElement, selector: &str) -> bool {
    container.query_selector(selector).unwrap().is_some()
}

pub fn text_of(container: &HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}
