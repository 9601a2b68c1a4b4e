// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console logging. Lines go to the browser console on Wasm and to stderr elsewhere.

use std::fmt;
use std::sync::OnceLock;

static VERBOSE_OUTPUT: OnceLock<()> = OnceLock::new();

pub fn enable_verbose_output() {
    let _ = VERBOSE_OUTPUT.set(());
}

pub fn is_verbose_output_enabled() -> bool {
    VERBOSE_OUTPUT.get().is_some()
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::log::write($crate::log::Title::ERROR, format_args!($($arg)*));
    }};
}

pub use error;

#[macro_export]
macro_rules! updated {
    ($($arg:tt)*) => {{
        if $crate::log::is_verbose_output_enabled() {
            $crate::log::write($crate::log::Title::UPDATED, format_args!($($arg)*));
        }
    }};
}

pub use updated;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::log::is_verbose_output_enabled() {
            $crate::log::write($crate::log::Title::INFO, format_args!($($arg)*));
        }
    }};
}

pub use info;

pub struct Title(&'static str);

impl Title {
    pub const ERROR: Title = Title("error");
    pub const UPDATED: Title = Title("updated");
    pub const INFO: Title = Title("info");

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn is_error(&self) -> bool {
        self.0 == Self::ERROR.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[menu_editor] {}", self.0)
    }
}

#[doc(hidden)]
pub fn write(title: Title, args: fmt::Arguments) {
    emit(&title, format!("{title}: {args}"));
}

#[cfg(target_arch = "wasm32")]
fn emit(title: &Title, line: String) {
    if title.is_error() {
        gloo_console::error!(line);
    } else {
        gloo_console::log!(line);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_: &Title, line: String) {
    eprintln!("{line}");
}
