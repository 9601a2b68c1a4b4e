// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser side of the editor: turns [`view::Element`](Element) trees into DOM
//! nodes and page events into [`Update`]s.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Event, EventTarget, File, HtmlElement, HtmlInputElement, Window};

use crate::config::{Config, ElementIds, CONFIG_ELEMENT_ID};
use crate::error::{Error, ErrorExt, Report};
use crate::image::DataUrl;
use crate::log::{error, info};
use crate::render;
use crate::runtime::{self, Host, Readout};
use crate::session::Update;
use crate::style::{Field, StyleParameters, StylePatch};
use crate::view::{Action, Css, Element, Listener, Tag};

type Handler = Closure<dyn FnMut(Event)>;

/// Event handlers attached to one mount point.
///
/// Handlers of the previous render are kept for one more render: a click on a
/// remove button re-renders from inside its own handler, which must not be
/// dropped while it runs.
#[derive(Default)]
struct Handlers {
    live: Vec<Handler>,
    // Only held, never read.
    #[allow(dead_code)]
    retired: Vec<Handler>,
}

impl Handlers {
    fn retire(&mut self) {
        self.retired = std::mem::take(&mut self.live);
    }
}

/// [`Host`] rendering into the elements of the current page.
pub struct Dom {
    document: Document,
    items: HtmlElement,
    preview: HtmlElement,
    new_item: HtmlInputElement,
    border_width_value: HtmlElement,
    border_radius_value: HtmlElement,
    image: Option<web_sys::Element>,
    item_handlers: Handlers,
    preview_handlers: Handlers,
}

impl Dom {
    /// Look up the mount points and readouts by id.
    pub fn attach(ids: &ElementIds) -> Report<Self> {
        let document = document()?;

        Ok(Dom {
            items: by_id(&document, &ids.items_container)?,
            preview: by_id(&document, &ids.menu_preview)?,
            new_item: by_id(&document, &ids.new_item)?,
            border_width_value: by_id(&document, &ids.border_width_value)?,
            border_radius_value: by_id(&document, &ids.border_radius_value)?,
            image: None,
            item_handlers: Handlers::default(),
            preview_handlers: Handlers::default(),
            document,
        })
    }
}

impl Host for Dom {
    fn mount_items(&mut self, view: Element) -> Report<()> {
        self.item_handlers.retire();
        self.items.set_inner_html("");

        for child in &view.children {
            let node = build(&self.document, child, &mut self.item_handlers.live)?;

            self.items
                .append_child(&node)
                .message("failed to mount item row")?;
        }

        Ok(())
    }

    fn mount_preview(&mut self, view: Element) -> Report<()> {
        self.preview_handlers.retire();
        set_styles(&self.preview, &view.style)?;
        self.preview.set_inner_html("");
        self.image = None;

        for child in &view.children {
            let node = build(&self.document, child, &mut self.preview_handlers.live)?;

            self.preview
                .append_child(&node)
                .message("failed to mount preview")?;

            if child.tag == Tag::Img {
                self.image = Some(node);
            }
        }

        Ok(())
    }

    fn mount_image(&mut self, view: Element) -> Report<()> {
        let node = build(&self.document, &view, &mut self.preview_handlers.live)?;

        let mounted = match self.image.replace(node.clone()) {
            Some(old) => old.replace_with_with_node_1(&node),
            None => self.preview.prepend_with_node_1(&node),
        };

        mounted.message("failed to mount preview image")
    }

    fn readout(&mut self, readout: Readout, text: &str) -> Report<()> {
        let label = match readout {
            Readout::BorderWidth => &self.border_width_value,
            Readout::BorderRadius => &self.border_radius_value,
        };

        label.set_text_content(Some(text));

        Ok(())
    }

    fn clear_new_item(&mut self) -> Report<()> {
        self.new_item.set_value("");

        Ok(())
    }
}

fn build(document: &Document, view: &Element, sink: &mut Vec<Handler>) -> Report<web_sys::Element> {
    let el = document
        .create_element(view.tag.name())
        .with_message(|| format!("failed to create `<{}>`", view.tag.name()))?;

    if !view.classes.is_empty() {
        el.set_class_name(&view.classes.join(" "));
    }

    for (attr, value) in &view.attrs {
        el.set_attribute(attr.name(), value)
            .with_message(|| format!("failed to set `{}`", attr.name()))?;
    }

    if let Some(text) = view.text.as_deref() {
        el.set_text_content(Some(text));
    }

    // Every `Tag` is an HTML element
    let html: &HtmlElement = el.unchecked_ref();

    set_styles(html, &view.style)?;

    for child in &view.children {
        let node = build(document, child, sink)?;

        el.append_child(&node).message("failed to append element")?;
    }

    for listener in &view.listeners {
        sink.push(listen(html, listener)?);
    }

    Ok(el)
}

fn set_styles(el: &HtmlElement, style: &[(Css, String)]) -> Report<()> {
    let decl = el.style();

    for (css, value) in style {
        decl.set_property(css.name(), value)
            .with_message(|| format!("failed to set `{}: {value}`", css.name()))?;
    }

    Ok(())
}

fn listen(target: &HtmlElement, listener: &Listener) -> Report<Handler> {
    let handler: Handler = match &listener.action {
        Action::Style(css, value) => {
            let (el, css, value) = (target.clone(), *css, value.clone());

            Closure::wrap(Box::new(move |_: Event| {
                if let Err(err) = el.style().set_property(css.name(), &value) {
                    error!("{}", Error::new(err, "failed to apply hover style"));
                }
            }) as Box<dyn FnMut(Event)>)
        }
        Action::RemoveItem(index) => {
            let index = *index;

            Closure::wrap(Box::new(move |_: Event| {
                runtime::dispatch(Update::RemoveItem(index));
            }) as Box<dyn FnMut(Event)>)
        }
    };

    target
        .add_event_listener_with_callback(listener.on.name(), handler.as_ref().unchecked_ref())
        .with_message(|| format!("failed to listen to `{}`", listener.on.name()))?;

    Ok(handler)
}

/// Read a [`Config`] from the page's `#menu-config` script, defaults if absent.
pub fn page_config() -> Report<Config> {
    match document()?.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(script) => Config::from_json(&script.text_content().unwrap_or_default()),
        None => Ok(Config::default()),
    }
}

/// Connect the page controls to the running editor.
pub fn wire(ids: &ElementIds) -> Report<()> {
    let window = window()?;
    let document = document()?;

    let new_item: HtmlInputElement = by_id(&document, &ids.new_item)?;
    let add: HtmlElement = by_id(&document, &ids.add_item_button)?;

    on(&add, "click", move |_| {
        runtime::dispatch(Update::AddItem(new_item.value()));
    })?;

    let inputs = control_inputs(&document, ids)?;
    let refresh: HtmlElement = by_id(&document, &ids.update_button)?;
    let snapshot = inputs.clone();

    on(&refresh, "click", move |_| {
        runtime::dispatch(Update::Refresh(read_controls(&snapshot)));
    })?;

    for (field, input) in inputs {
        let source = input.clone();

        on(&input, "input", move |_| {
            match StylePatch::field(field, &source.value()) {
                Ok(patch) => runtime::dispatch(Update::Style(patch)),
                Err(err) => info!("ignoring `#{}`: {err}", source.id()),
            }
        })?;
    }

    let picker: HtmlInputElement = by_id(&document, &ids.menu_image)?;
    let files = picker.clone();

    on(&picker, "change", move |_| {
        pick_image(files.files().and_then(|list| list.get(0)));
    })?;

    let container: HtmlElement = by_id(&document, &ids.menu_container)?;
    let scrolled = window.clone();

    on(&window, "scroll", move |_| {
        let offset = scrolled.scroll_y().unwrap_or_default();

        if let Err(err) = container
            .style()
            .set_property("transform", &render::scroll_transform(offset))
        {
            error!("{}", Error::new(err, "failed to follow page scroll"));
        }
    })
}

fn controls(ids: &ElementIds) -> [(Field, &str); 10] {
    [
        (Field::Title, ids.menu_title.as_str()),
        (Field::Background, ids.background_color.as_str()),
        (Field::Text, ids.text_color.as_str()),
        (Field::Hover, ids.hover_color.as_str()),
        (Field::Width, ids.menu_width.as_str()),
        (Field::Spacing, ids.item_spacing.as_str()),
        (Field::FontSize, ids.font_size.as_str()),
        (Field::BorderWidth, ids.border_width.as_str()),
        (Field::BorderRadius, ids.border_radius.as_str()),
        (Field::BorderColor, ids.border_color.as_str()),
    ]
}

fn control_inputs(document: &Document, ids: &ElementIds) -> Report<Vec<(Field, HtmlInputElement)>> {
    controls(ids)
        .into_iter()
        .map(|(field, id)| by_id(document, id).map(|input| (field, input)))
        .collect()
}

/// One patch holding the current value of every control.
fn read_controls(inputs: &[(Field, HtmlInputElement)]) -> StylePatch {
    let (patch, rejected) =
        StylePatch::from_controls(inputs.iter().map(|(field, input)| (*field, input.value())));

    for (field, err) in rejected {
        info!("ignoring {field:?} control: {err}");
    }

    patch
}

/// Show the values of `style` in the page controls.
pub fn sync_controls(ids: &ElementIds, style: &StyleParameters) -> Report<()> {
    let document = document()?;

    for (field, input) in control_inputs(&document, ids)? {
        input.set_value(&style.control_value(field));
    }

    Ok(())
}

fn pick_image(file: Option<File>) {
    let Some(file) = file else {
        return runtime::dispatch(Update::ClearImage);
    };

    let Some(ticket) = runtime::begin_image() else {
        return;
    };

    spawn_local(async move {
        match read_data_url(&file).await {
            Ok(image) => runtime::dispatch(Update::ImageDecoded { ticket, image }),
            Err(err) => error!("{err}"),
        }
    });
}

async fn read_data_url(file: &File) -> Report<DataUrl> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .with_message(|| format!("failed to read `{}`", file.name()))?;

    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(DataUrl::encode(&file.type_(), &bytes))
}

/// Page-lifetime listener.
fn on<F>(target: &EventTarget, event: &str, handler: F) -> Report<()>
where
    F: FnMut(Event) + 'static,
{
    let handler: Handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .with_message(|| format!("failed to listen to `{event}`"))?;

    handler.forget();

    Ok(())
}

fn window() -> Report<Window> {
    web_sys::window().ok_or_else(|| Error::message("no global `window`"))
}

fn document() -> Report<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::message("no `document` on window"))
}

fn by_id<T>(document: &Document, id: &str) -> Report<T>
where
    T: JsCast,
{
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::message(format!("missing element `#{id}`")))?
        .dyn_into()
        .map_err(|_| Error::message(format!("element `#{id}` has an unexpected type")))
}
