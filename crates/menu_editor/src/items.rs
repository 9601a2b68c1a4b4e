// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ordered list of menu labels.

use std::ops::Deref;

use crate::runtime::Then;

/// Ordered menu labels. Insertion order is display order, duplicates are fine,
/// and no label is ever blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    pub fn new() -> Self {
        ItemList::default()
    }

    /// Trim `text` and append it. Blank input is dropped silently.
    pub fn add(&mut self, text: &str) -> Then {
        let text = text.trim();

        if text.is_empty() {
            return Then::Stop;
        }

        self.items.push(text.into());

        Then::Render
    }

    /// Remove the label at `index`.
    ///
    /// # Panics
    ///
    /// Indices come from the rendered rows, so an index past the end is a bug
    /// in the caller and panics.
    pub fn remove_at(&mut self, index: usize) -> String {
        self.items.remove(index)
    }
}

impl Deref for ItemList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.items
    }
}

impl<S> FromIterator<S> for ItemList
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ItemList::new();

        for item in iter {
            list.add(item.as_ref());
        }

        list
    }
}
