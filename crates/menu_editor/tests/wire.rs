#![cfg(target_arch = "wasm32")]

//! The editor runs once per page, so everything wired to the page controls is
//! checked in one pass over a single started page.

use menu_editor::config::{Config, ElementIds};
use menu_editor::image::DataUrl;
use menu_editor::runtime;
use menu_editor::session::Update;
use menu_editor::style::{Px, StyleParameters};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn page(ids: &ElementIds) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let add = |tag: &str, id: &str| {
        let el = document.create_element(tag).unwrap();

        el.set_id(id);
        body.append_child(&el).unwrap();
        el
    };

    for id in [&ids.new_item, &ids.menu_title, &ids.background_color, &ids.text_color, &ids.hover_color] {
        add("input", id);
    }

    for id in [&ids.menu_width, &ids.item_spacing, &ids.font_size, &ids.border_width, &ids.border_radius, &ids.border_color] {
        add("input", id).unchecked_into::<HtmlInputElement>().set_value("600");
    }

    add("input", &ids.menu_image)
        .unchecked_into::<HtmlInputElement>()
        .set_type("file");

    add("button", &ids.add_item_button);
    add("button", &ids.update_button);
    add("div", &ids.items_container);
    add("div", &ids.border_width_value);
    add("div", &ids.border_radius_value);

    let container = add("div", &ids.menu_container);
    let preview = document.create_element("div").unwrap();

    preview.set_id(&ids.menu_preview);
    container.append_child(&preview).unwrap();

    document
}

fn element(document: &Document, id: &str) -> HtmlElement {
    document.get_element_by_id(id).unwrap().unchecked_into()
}

fn input(document: &Document, id: &str) -> HtmlInputElement {
    element(document, id).unchecked_into()
}

fn fire(target: &EventTarget, event: &str) {
    target.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

fn css(el: &HtmlElement, prop: &str) -> String {
    el.style().get_property_value(prop).unwrap()
}

fn find(parent: &HtmlElement, selector: &str) -> HtmlElement {
    parent.query_selector(selector).unwrap().unwrap().unchecked_into()
}

#[wasm_bindgen_test]
fn page_controls_drive_the_editor() {
    let config = Config {
        style: StyleParameters {
            width: Px(640.0),
            ..StyleParameters::default()
        },
        ..Config::default()
    };

    let document = page(&config.ids);

    runtime::start(config);

    let preview = element(&document, "menu-preview");
    let rows = element(&document, "items-container");

    assert_eq!(rows.children().length(), 5);

    // Controls show the configured style, not their markup values.
    assert_eq!(input(&document, "menu-width").value(), "640");
    assert_eq!(input(&document, "border-color").value(), "#cccccc");
    assert_eq!(input(&document, "menu-title").value(), "Meu Menu");
    assert_eq!(css(&preview, "width"), "640px");

    // Add button
    let new_item = input(&document, "new-item");

    new_item.set_value("  Blog ");
    element(&document, "add-item-button").click();

    assert_eq!(rows.children().length(), 6);
    assert_eq!(new_item.value(), "");
    assert_eq!(
        find(&preview, ".menu-list li:last-child").text_content().as_deref(),
        Some("Blog")
    );

    new_item.set_value("   ");
    element(&document, "add-item-button").click();

    assert_eq!(rows.children().length(), 6);

    // Each control reaches its own property.
    let edit = |id: &str, raw: &str| {
        let control = input(&document, id);

        control.set_value(raw);
        fire(&control, "input");
    };

    edit("menu-title", "Cardápio");
    assert_eq!(find(&preview, ".menu-title").text_content().as_deref(), Some("Cardápio"));

    edit("background-color", "#010203");
    assert_eq!(css(&preview, "background-color"), "rgb(1, 2, 3)");

    edit("text-color", "#0000ff");
    assert_eq!(css(&preview, "color"), "rgb(0, 0, 255)");

    edit("menu-width", "480");
    assert_eq!(css(&preview, "width"), "480px");

    edit("item-spacing", "30");
    assert_eq!(css(&find(&preview, ".menu-list"), "gap"), "30px");

    edit("font-size", "7.9");
    assert_eq!(css(&preview, "font-size"), "7.9px");

    edit("border-width", "4");
    assert_eq!(css(&preview, "border-top-width"), "4px");
    assert_eq!(element(&document, "border-width-value").text_content().as_deref(), Some("4px"));

    edit("border-radius", "12");
    assert_eq!(css(&preview, "border-top-left-radius"), "12px");
    assert_eq!(element(&document, "border-radius-value").text_content().as_deref(), Some("12px"));

    edit("border-color", "#ff0000");
    assert_eq!(css(&preview, "border-top-color"), "rgb(255, 0, 0)");
    assert_eq!(css(&preview, "border-top-width"), "4px");

    edit("hover-color", "#00ff00");

    // Hover swaps the entry background and restores it on leave.
    let li = find(&preview, ".menu-list li");

    fire(&li, "mouseenter");
    assert_eq!(css(&li, "background-color"), "rgb(0, 255, 0)");

    fire(&li, "mouseleave");
    assert_eq!(css(&li, "background-color"), "rgb(1, 2, 3)");

    // An emptied number field is ignored.
    edit("font-size", "");
    assert_eq!(css(&preview, "font-size"), "7.9px");

    // Refresh re-reads controls that changed without an input event.
    input(&document, "menu-width").set_value("500");
    input(&document, "font-size").set_value("18");

    assert_eq!(css(&preview, "width"), "480px");

    element(&document, "update-button").click();

    assert_eq!(css(&preview, "width"), "500px");
    assert_eq!(css(&preview, "font-size"), "18px");

    // Emptying the file picker hides the shown image.
    let ticket = runtime::begin_image().unwrap();
    let image = DataUrl::encode("image/gif", b"GIF89a");

    runtime::dispatch(Update::ImageDecoded { ticket, image });

    let img = find(&preview, ".preview-image");

    assert_eq!(css(&img, "display"), "block");

    fire(&input(&document, "menu-image"), "change");

    assert_eq!(css(&find(&preview, ".preview-image"), "display"), "none");

    // The container follows the page scroll.
    fire(&web_sys::window().unwrap(), "scroll");

    assert_eq!(css(&element(&document, "menu-container"), "transform"), "translateY(0px)");
}
