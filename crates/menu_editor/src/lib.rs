// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Menu Editor
//!
//! _Live menu customization for the browser._
//!
//! The editor keeps a list of menu labels and a set of style parameters (colors,
//! width, spacing, font size, border, an optional image) and mirrors every change
//! into a preview of the menu.
//!
//! Key pieces:
//!
//! * [`ItemList`](items::ItemList): the ordered labels, append and remove-by-index.
//! * [`StyleParameters`](style::StyleParameters): independent visual values, changed
//!   through a [`StylePatch`](style::StylePatch).
//! * [`render`]: pure functions projecting the state into [`view::Element`] trees.
//! * [`Session`](session::Session): owns the state, applies [`Update`](session::Update)s.
//! * [`Runtime`](runtime::Runtime): re-renders into a [`Host`](runtime::Host) after
//!   every update. [`dom::Dom`] is the host for a real page.
//!
//! ### Rendering is plain data
//!
//! Nothing in the state or render layers touches the DOM, so the whole editor can
//! be driven from a test:
//!
//! ```
//! use menu_editor::config::Config;
//! use menu_editor::render;
//! use menu_editor::session::{Session, Update};
//! use menu_editor::style::{Field, StylePatch};
//! use menu_editor::view::Css;
//!
//! let mut session = Session::from_config(&Config::default());
//!
//! session.apply(Update::AddItem("  Blog  ".into()));
//! session.apply(Update::Style(StylePatch::field(Field::BorderWidth, "5").unwrap()));
//! session.apply(Update::Style(StylePatch::field(Field::BorderColor, "#000000").unwrap()));
//!
//! let preview = render::preview(&session.items, &session.style);
//!
//! assert_eq!(preview.get_style(Css::Border), Some("5px solid #000000"));
//! assert_eq!(session.items.last().map(String::as_str), Some("Blog"));
//! ```
//!
//! ### Running on a page
//!
//! A `cdylib` crate only needs to invoke the [`start!`](start) macro. The host page
//! provides the controls, identified by the ids in [`ElementIds`](config::ElementIds):
//!
//! ```no_run
//! menu_editor::start!();
//! # fn main() {}
//! ```
//!
//! To run the demo you'll need [`trunk`](https://trunkrs.dev/) and the Wasm target:
//! ```sh
//! rustup target add wasm32-unknown-unknown
//! cd demos/editor
//! trunk serve
//! ```

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

pub mod config;
pub mod dom;
pub mod error;
pub mod image;
pub mod items;
pub mod log;
pub mod render;
pub mod runtime;
pub mod session;
pub mod style;
pub mod view;

/// Crate re-exports for the [`start!`](start) macro internals
pub mod reexport {
    pub use wasm_bindgen;
}

/// Mount the editor when the Wasm module loads.
///
/// Without arguments the configuration is read from the page's
/// `<script id="menu-config" type="application/json">` block, if any.
/// Otherwise pass a [`Config`](config::Config) expression.
#[macro_export]
macro_rules! start {
    () => {
        use $crate::reexport::wasm_bindgen;
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen(start)]
        fn menu_editor_main() {
            $crate::runtime::start_from_page();
        }
    };

    ($config:expr) => {
        use $crate::reexport::wasm_bindgen;
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen(start)]
        fn menu_editor_main() {
            $crate::runtime::start($config);
        }
    };
}
