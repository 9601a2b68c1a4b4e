#![cfg(target_arch = "wasm32")]

use menu_editor::config::{Config, ElementIds};
use menu_editor::dom::Dom;
use menu_editor::runtime::{Runtime, Then};
use menu_editor::session::{Session, Update};
use menu_editor::style::{Field, StylePatch};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn page(ids: &ElementIds) -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = match document.get_element_by_id("fixture") {
        Some(fixture) => fixture,
        None => {
            let fixture = document.create_element("div").unwrap();

            fixture.set_id("fixture");
            document.body().unwrap().append_child(&fixture).unwrap();
            fixture
        }
    };

    body.set_inner_html("");

    for id in [&ids.items_container, &ids.menu_preview, &ids.border_width_value, &ids.border_radius_value] {
        let el = document.create_element("div").unwrap();

        el.set_id(id);
        body.append_child(&el).unwrap();
    }

    let input = document.create_element("input").unwrap();

    input.set_id(&ids.new_item);
    body.append_child(&input).unwrap();

    document
}

fn element(document: &web_sys::Document, id: &str) -> HtmlElement {
    document.get_element_by_id(id).unwrap().unchecked_into()
}

#[wasm_bindgen_test]
fn mounts_preview_and_rows() {
    let config = Config::default();
    let document = page(&config.ids);

    let mut runtime = Runtime::new(Session::from_config(&config), Dom::attach(&config.ids).unwrap());

    runtime.mount();

    let preview = element(&document, "menu-preview");
    let rows = element(&document, "items-container");

    assert_eq!(preview.style().get_property_value("width").unwrap(), "600px");
    assert_eq!(preview.children().length(), 3);
    assert_eq!(rows.children().length(), 5);
    assert_eq!(
        element(&document, "border-width-value").text_content().as_deref(),
        Some("1px")
    );

    let patch = StylePatch::field(Field::BorderWidth, "5").unwrap();

    assert_eq!(runtime.dispatch(Update::Style(patch)), Then::Render);
    assert_eq!(preview.style().get_property_value("border-top-width").unwrap(), "5px");
}

#[wasm_bindgen_test]
fn successful_add_clears_input() {
    let config = Config::default();
    let document = page(&config.ids);

    let mut runtime = Runtime::new(Session::from_config(&config), Dom::attach(&config.ids).unwrap());

    runtime.mount();

    let input: HtmlInputElement = document.get_element_by_id("new-item").unwrap().unchecked_into();

    input.set_value("Blog");
    runtime.dispatch(Update::AddItem(input.value()));

    assert_eq!(input.value(), "");
    assert_eq!(element(&document, "items-container").children().length(), 6);
}

#[wasm_bindgen_test]
fn image_update_replaces_only_the_image() {
    let config = Config::default();
    let document = page(&config.ids);

    let mut runtime = Runtime::new(Session::from_config(&config), Dom::attach(&config.ids).unwrap());

    runtime.mount();

    let preview = element(&document, "menu-preview");
    let title = preview.children().item(1).unwrap();

    let ticket = runtime.begin_image();
    let image = menu_editor::image::DataUrl::encode("image/gif", b"GIF89a");

    assert_eq!(runtime.dispatch(Update::ImageDecoded { ticket, image }), Then::Image);

    let img: HtmlElement = preview.children().item(0).unwrap().unchecked_into();

    assert_eq!(img.style().get_property_value("display").unwrap(), "block");
    assert!(preview.children().item(1).unwrap().is_same_node(Some(&title)));
}
