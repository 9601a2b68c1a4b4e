// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Applying updates and re-rendering through a [`Host`].

use std::cell::RefCell;

use crate::config::Config;
use crate::dom::{self, Dom};
use crate::error::Report;
use crate::image::Ticket;
use crate::log::{self, error, info};
use crate::render;
use crate::session::{Session, Update};
use crate::view::Element;

/// Describes what needs to be rendered after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Then {
    /// Nothing changed
    Stop,
    /// Rebuild the item rows, the preview and the readouts
    Render,
    /// Replace only the preview image
    Image,
}

/// Value labels shown next to the border sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    BorderWidth,
    BorderRadius,
}

/// Presentation layer the runtime renders into.
pub trait Host {
    /// Replace the editable item rows with the children of `view`.
    fn mount_items(&mut self, view: Element) -> Report<()>;

    /// Apply the styles of `view` to the preview container and replace its children.
    fn mount_preview(&mut self, view: Element) -> Report<()>;

    /// Replace the preview image mounted by the last [`mount_preview`](Host::mount_preview).
    fn mount_image(&mut self, view: Element) -> Report<()>;

    fn readout(&mut self, readout: Readout, text: &str) -> Report<()>;

    /// Empty the text field new items are typed into.
    fn clear_new_item(&mut self) -> Report<()>;
}

pub struct Runtime<H> {
    session: Session,
    host: H,
}

impl<H> Runtime<H>
where
    H: Host,
{
    pub fn new(session: Session, host: H) -> Self {
        Runtime { session, host }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn begin_image(&mut self) -> Ticket {
        self.session.begin_image()
    }

    /// Initial render.
    pub fn mount(&mut self) {
        self.render();
    }

    pub fn dispatch(&mut self, update: Update) -> Then {
        let adding = matches!(update, Update::AddItem(_));
        let then = self.session.apply(update);

        match then {
            Then::Render => {
                if adding {
                    report(self.host.clear_new_item());
                }
                self.render();
            }
            Then::Image => {
                let view = render::image(&self.session.style);

                report(self.host.mount_image(view));
            }
            Then::Stop => (),
        }

        then
    }

    fn render(&mut self) {
        let Session { items, style, .. } = &self.session;

        report(self.host.mount_items(render::item_rows(items)));
        report(self.host.mount_preview(render::preview(items, style)));
        report(self.host.readout(Readout::BorderWidth, &render::readout(style.border_width)));
        report(self.host.readout(Readout::BorderRadius, &render::readout(style.border_radius)));
    }
}

fn report(res: Report<()>) {
    if let Err(err) = res {
        error!("{err}");
    }
}

thread_local! {
    static APP: RefCell<Option<Runtime<Dom>>> = const { RefCell::new(None) };
}

/// Start the editor on the current page with the given configuration.
pub fn start(config: Config) {
    if let Err(err) = try_start(config) {
        error!("{err}");
    }
}

/// Start the editor, reading the configuration from the page if it has one.
pub fn start_from_page() {
    let config = dom::page_config().unwrap_or_else(|err| {
        error!("{err}, falling back to defaults");
        Config::default()
    });

    start(config);
}

fn try_start(config: Config) -> Report<()> {
    if APP.with_borrow(Option::is_some) {
        return Ok(());
    }

    init_panic_hook();

    if config.verbose {
        log::enable_verbose_output();
    }

    let mut runtime = Runtime::new(Session::from_config(&config), Dom::attach(&config.ids)?);

    runtime.mount();

    dom::sync_controls(&config.ids, &runtime.session().style)?;

    let count = runtime.session().items.len();

    APP.set(Some(runtime));

    dom::wire(&config.ids)?;

    info!("started with {count} items");

    Ok(())
}

/// Apply an update to the running editor.
pub fn dispatch(update: Update) {
    APP.with(|app| match app.try_borrow_mut() {
        Ok(mut app) => {
            if let Some(app) = app.as_mut() {
                app.dispatch(update);
            }
        }
        Err(_) => error!("cyclical update detected, dropping {update:?}"),
    });
}

/// Ticket for a newly picked image, `None` if the editor isn't running.
pub fn begin_image() -> Option<Ticket> {
    APP.with(|app| {
        let mut app = app.try_borrow_mut().ok()?;
        let ticket = app.as_mut()?.begin_image();

        Some(ticket)
    })
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
