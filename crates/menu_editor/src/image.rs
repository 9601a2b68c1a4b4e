// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Image attachment for the menu preview.
//!
//! Reading a picked file is asynchronous. Every selection takes a [`Ticket`] from
//! the [`Decoder`]; only the result carrying the latest ticket is ever shown, so a
//! slow read of an older file cannot replace a newer one.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A `data:` URL that can be used directly as an image `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode raw file bytes. An empty `mime` (unknown file type) falls back to
    /// `application/octet-stream`.
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let mime = match mime.trim() {
            "" => FALLBACK_MIME,
            mime => mime,
        };

        let mut url = String::with_capacity(13 + mime.len() + bytes.len() * 4 / 3 + 4);

        url.push_str("data:");
        url.push_str(mime);
        url.push_str(";base64,");
        STANDARD.encode_string(bytes, &mut url);

        DataUrl(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generation of an image selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u32);

#[derive(Debug, Default)]
pub struct Decoder {
    generation: u32,
}

impl Decoder {
    /// Start a new selection, superseding every ticket issued before.
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);

        Ticket(self.generation)
    }

    /// Invalidate pending reads without starting a new one.
    pub fn supersede(&mut self) {
        self.begin();
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
