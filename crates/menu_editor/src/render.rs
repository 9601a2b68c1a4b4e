// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projections from editor state to [`Element`] trees.
//!
//! All functions here are pure: they read the item list and style parameters and
//! build a fresh tree every call. Nothing is diffed, the host replaces whatever it
//! showed before.

use crate::items::ItemList;
use crate::style::{Px, StyleParameters};
use crate::view::{Action, Attr, Css, Element, On, Tag};

/// The styled menu container with its image, title and entries.
pub fn preview(items: &ItemList, style: &StyleParameters) -> Element {
    let entries = items.iter().map(|item| {
        Element::new(Tag::Li)
            .text(item.as_str())
            .on(On::MouseEnter, Action::Style(Css::BackgroundColor, style.hover.css()))
            .on(On::MouseLeave, Action::Style(Css::BackgroundColor, style.background.css()))
    });

    Element::new(Tag::Div)
        .style(Css::Border, style.border())
        .style(Css::BackgroundColor, style.background.css())
        .style(Css::Width, style.width.css())
        .style(Css::Color, style.text.css())
        .style(Css::FontSize, style.font_size.css())
        .style(Css::BorderRadius, style.border_radius.css())
        .child(image(style))
        .child(Element::new(Tag::Div).class("menu-title").text(style.title.as_str()))
        .child(
            Element::new(Tag::Ul)
                .class("menu-list")
                .style(Css::Display, "flex")
                .style(Css::Gap, style.spacing.css())
                .children(entries),
        )
}

/// The preview image, hidden while no image is attached.
pub fn image(style: &StyleParameters) -> Element {
    let img = Element::new(Tag::Img).class("preview-image");

    match &style.image {
        Some(url) => img.attr(Attr::Src, url.as_str()).style(Css::Display, "block"),
        None => img.style(Css::Display, "none"),
    }
}

/// Editable rows, one per item, each with a button removing that item.
pub fn item_rows(items: &ItemList) -> Element {
    let rows = items.iter().enumerate().map(|(index, item)| {
        Element::new(Tag::Div)
            .class("item-row")
            .child(Element::new(Tag::Div).class("item-text").text(item.as_str()))
            .child(
                Element::new(Tag::Button)
                    .class("btn")
                    .class("btn-danger")
                    .class("btn-sm")
                    .text("Remover")
                    .on(On::Click, Action::RemoveItem(index)),
            )
    });

    Element::new(Tag::Div).children(rows)
}

/// Text next to a slider showing its current value.
pub fn readout(value: Px) -> String {
    value.css()
}

/// Transform that keeps the menu container level with the page scroll offset.
pub fn scroll_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::DataUrl;
    use crate::style::Color;

    fn items() -> ItemList {
        ["Home", "Produtos", "Serviços"].into_iter().collect()
    }

    fn entries(tree: &Element) -> Vec<&str> {
        tree.find("menu-list")
            .unwrap()
            .children
            .iter()
            .filter_map(|li| li.text.as_deref())
            .collect()
    }

    #[test]
    fn container_styles() {
        let style = StyleParameters {
            border_width: Px(5.0),
            border_color: Color::rgb(0, 0, 0),
            ..StyleParameters::default()
        };

        let tree = preview(&items(), &style);

        assert_eq!(tree.get_style(Css::Border), Some("5px solid #000000"));
        assert_eq!(tree.get_style(Css::BackgroundColor), Some("#ffffff"));
        assert_eq!(tree.get_style(Css::Width), Some("600px"));
        assert_eq!(tree.get_style(Css::Color), Some("#333333"));
        assert_eq!(tree.get_style(Css::FontSize), Some("16px"));
        assert_eq!(tree.get_style(Css::BorderRadius), Some("0px"));
    }

    #[test]
    fn children_in_order() {
        let tree = preview(&items(), &StyleParameters::default());

        let tags: Vec<_> = tree.children.iter().map(|c| c.tag).collect();

        assert_eq!(tags, [Tag::Img, Tag::Div, Tag::Ul]);
        assert_eq!(tree.children[1].text.as_deref(), Some("Meu Menu"));
        assert_eq!(entries(&tree), ["Home", "Produtos", "Serviços"]);

        let list = &tree.children[2];

        assert_eq!(list.get_style(Css::Display), Some("flex"));
        assert_eq!(list.get_style(Css::Gap), Some("10px"));
    }

    #[test]
    fn hover_swaps_background() {
        let style = StyleParameters {
            hover: Color::rgb(0xff, 0, 0),
            ..StyleParameters::default()
        };

        let tree = preview(&items(), &style);
        let li = &tree.find("menu-list").unwrap().children[0];

        assert_eq!(
            li.listeners
                .iter()
                .map(|l| (l.on, l.action.clone()))
                .collect::<Vec<_>>(),
            [
                (On::MouseEnter, Action::Style(Css::BackgroundColor, "#ff0000".into())),
                (On::MouseLeave, Action::Style(Css::BackgroundColor, "#ffffff".into())),
            ]
        );
    }

    #[test]
    fn image_visibility() {
        let mut style = StyleParameters::default();

        let hidden = image(&style);

        assert_eq!(hidden.get_style(Css::Display), Some("none"));
        assert_eq!(hidden.get_attr(Attr::Src), None);

        style.image = Some(DataUrl::encode("image/gif", b"GIF89a"));

        let shown = image(&style);

        assert_eq!(shown.get_style(Css::Display), Some("block"));
        assert_eq!(shown.get_attr(Attr::Src), Some("data:image/gif;base64,R0lGODlh"));
        assert_eq!(preview(&items(), &style).children[0], shown);
    }

    #[test]
    fn idempotent() {
        let items = items();
        let style = StyleParameters::default();

        assert_eq!(preview(&items, &style), preview(&items, &style));
        assert_eq!(item_rows(&items), item_rows(&items));
    }

    #[test]
    fn empty_list() {
        let tree = preview(&ItemList::new(), &StyleParameters::default());

        assert!(tree.find("menu-list").unwrap().children.is_empty());
        assert!(item_rows(&ItemList::new()).children.is_empty());
    }

    #[test]
    fn rows_capture_index() {
        let rows = item_rows(&items());

        assert_eq!(rows.children.len(), 3);

        for (index, row) in rows.children.iter().enumerate() {
            let button = &row.children[1];

            assert!(row.has_class("item-row"));
            assert_eq!(button.text.as_deref(), Some("Remover"));
            assert_eq!(button.listeners[0].action, Action::RemoveItem(index));
        }

        assert_eq!(rows.children[2].children[0].text.as_deref(), Some("Serviços"));
    }

    #[test]
    fn scroll() {
        assert_eq!(scroll_transform(0.0), "translateY(0px)");
        assert_eq!(scroll_transform(120.5), "translateY(120.5px)");
        assert_eq!(readout(Px(3.0)), "3px");
    }
}
