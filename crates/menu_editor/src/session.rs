// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Editor state and the single entry point that changes it.

use crate::config::Config;
use crate::image::{DataUrl, Decoder, Ticket};
use crate::items::ItemList;
use crate::log::{info, updated};
use crate::runtime::Then;
use crate::style::{StyleParameters, StylePatch};

/// Every change the editor knows how to make.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    AddItem(String),
    RemoveItem(usize),
    Style(StylePatch),
    /// Re-read every control and render, whether or not anything changed.
    Refresh(StylePatch),
    ImageDecoded { ticket: Ticket, image: DataUrl },
    ClearImage,
}

#[derive(Debug, Default)]
pub struct Session {
    pub items: ItemList,
    pub style: StyleParameters,
    images: Decoder,
}

impl Session {
    pub fn new(items: ItemList, style: StyleParameters) -> Self {
        Session {
            items,
            style,
            images: Decoder::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Session::new(config.items.iter().collect(), config.style.clone())
    }

    /// Ticket for a newly picked image file. Reads started earlier become stale.
    pub fn begin_image(&mut self) -> Ticket {
        self.images.begin()
    }

    pub fn apply(&mut self, update: Update) -> Then {
        match update {
            Update::AddItem(text) => {
                let then = self.items.add(&text);

                if let Then::Render = then {
                    updated!("added item #{}", self.items.len() - 1);
                }
                then
            }
            Update::RemoveItem(index) => {
                let removed = self.items.remove_at(index);

                updated!("removed item #{index} `{removed}`");
                Then::Render
            }
            Update::Style(patch) => {
                if patch.apply(&mut self.style) {
                    Then::Render
                } else {
                    Then::Stop
                }
            }
            Update::Refresh(patch) => {
                if patch.apply(&mut self.style) {
                    updated!("controls and preview were out of step");
                }
                Then::Render
            }
            Update::ImageDecoded { ticket, image } => {
                if !self.images.is_current(ticket) {
                    info!("discarding image from a superseded selection");
                    return Then::Stop;
                }

                self.style.image = Some(image);
                Then::Image
            }
            Update::ClearImage => {
                self.images.supersede();

                match self.style.image.take() {
                    Some(_) => Then::Image,
                    None => Then::Stop,
                }
            }
        }
    }
}
