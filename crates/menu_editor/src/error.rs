// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error reporting shared by the session, the configuration and the DOM adapter.

use std::error;
use std::fmt;

use wasm_bindgen::{JsCast, JsValue};

use crate::style::ParseError;

pub type Report<T> = Result<T, Error>;

/// Underlying cause of an [`Error`].
#[derive(Debug)]
pub enum Source {
    /// Exception or rejected promise coming from JavaScript, already stringified.
    Js(String),
    Json(serde_json::Error),
    Value(ParseError),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Js(message) => f.write_str(message),
            Source::Json(err) => write!(f, "{err}"),
            Source::Value(err) => write!(f, "{err}"),
        }
    }
}

impl From<JsValue> for Source {
    fn from(value: JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Source::Js(message);
        }

        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => Source::Js(err.message().into()),
            None => Source::Js(format!("{value:?}")),
        }
    }
}

impl From<serde_json::Error> for Source {
    fn from(err: serde_json::Error) -> Self {
        Source::Json(err)
    }
}

impl From<ParseError> for Source {
    fn from(err: ParseError) -> Self {
        Source::Value(err)
    }
}

#[derive(Debug)]
pub struct Error {
    source: Option<Source>,
    message: String,
}

impl Error {
    pub fn new<S, M>(source: S, message: M) -> Self
    where
        S: Into<Source>,
        M: Into<String>,
    {
        Self {
            source: Some(source.into()),
            message: message.into(),
        }
    }

    pub fn message<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            source: None,
            message: message.into(),
        }
    }

    pub fn cause(&self) -> Option<&Source> {
        self.source.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl error::Error for Error {}

pub trait ErrorExt<T> {
    fn message(self, message: &str) -> Report<T>;

    fn with_message<F, M>(self, f: F) -> Report<T>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Source>,
{
    fn message(self, message: &str) -> Report<T> {
        self.map_err(|err| Error::new(err, message))
    }

    fn with_message<F, M>(self, f: F) -> Report<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|err| Error::new(err, f()))
    }
}
