// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Start-up configuration.
//!
//! Every key is optional. A page can override any subset of them with a JSON
//! block that [`start!`](crate::start) picks up:
//!
//! ```html
//! <script id="menu-config" type="application/json">
//!   { "items": ["Início", "Contato"], "style": { "border-width": 3 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::{ErrorExt, Report};
use crate::style::StyleParameters;

/// Identifier of the `<script>` element holding a JSON [`Config`].
pub const CONFIG_ELEMENT_ID: &str = "menu-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Initial menu labels. Blank entries are dropped.
    pub items: Vec<String>,
    pub style: StyleParameters,
    pub ids: ElementIds,
    /// Log every state change to the console.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            items: ["Home", "Produtos", "Serviços", "Sobre", "Contato"]
                .map(String::from)
                .into(),
            style: StyleParameters::default(),
            ids: ElementIds::default(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Report<Self> {
        serde_json::from_str(json).message("failed to parse menu config")
    }
}

/// `id` attributes of the host page elements the editor binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ElementIds {
    pub add_item_button: String,
    pub update_button: String,
    pub items_container: String,
    pub menu_preview: String,
    pub menu_container: String,
    pub menu_image: String,
    pub new_item: String,
    pub menu_title: String,
    pub background_color: String,
    pub text_color: String,
    pub hover_color: String,
    pub menu_width: String,
    pub item_spacing: String,
    pub font_size: String,
    pub border_width: String,
    pub border_width_value: String,
    pub border_radius: String,
    pub border_radius_value: String,
    pub border_color: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            add_item_button: "add-item-button".into(),
            update_button: "update-button".into(),
            items_container: "items-container".into(),
            menu_preview: "menu-preview".into(),
            menu_container: "menu-container".into(),
            menu_image: "menu-image".into(),
            new_item: "new-item".into(),
            menu_title: "menu-title".into(),
            background_color: "background-color".into(),
            text_color: "text-color".into(),
            hover_color: "hover-color".into(),
            menu_width: "menu-width".into(),
            item_spacing: "item-spacing".into(),
            font_size: "font-size".into(),
            border_width: "border-width".into(),
            border_width_value: "border-width-value".into(),
            border_radius: "border-radius".into(),
            border_radius_value: "border-radius-value".into(),
            border_color: "border-color".into(),
        }
    }
}
