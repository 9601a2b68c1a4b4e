// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Visual parameters of the menu preview.
//!
//! Every field of [`StyleParameters`] is independent of the others. Range limits
//! belong to the input controls on the page, nothing here couples or clamps values.
//!
//! Changes arrive as a [`StylePatch`], usually built from a single control with
//! [`StylePatch::field`]:
//!
//! ```
//! use menu_editor::style::{Field, StyleParameters, StylePatch};
//!
//! let mut style = StyleParameters::default();
//! let patch = StylePatch::field(Field::BorderWidth, "5").unwrap();
//!
//! assert!(patch.apply(&mut style));
//! assert_eq!(style.border_width.css(), "5px");
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::image::DataUrl;

/// Failure to parse a raw control value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    expected: &'static str,
    input: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got `{}`", self.expected, self.input)
    }
}

impl std::error::Error for ParseError {}

/// An opaque RGB color, as produced by `<input type="color">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn css(self) -> String {
        self.to_string()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Accepts `#rgb` and `#rrggbb`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError {
            expected: "a `#rrggbb` color",
            input: s.into(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;

        // `from_str_radix` alone would let a sign through, e.g. `#+f+f+f`.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());

        match hex.len() {
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|c| c * 0x11);

                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(err()),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A length in CSS pixels, kept exactly as the control reported it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Px(pub f64);

impl Px {
    /// The bare number, as written back into a control.
    pub fn number(self) -> String {
        self.0.to_string()
    }

    pub fn css(self) -> String {
        let mut out = self.number();

        out.push_str("px");
        out
    }
}

impl Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl FromStr for Px {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(Px(n.abs())),
            _ => Err(ParseError {
                expected: "a non-negative pixel length",
                input: s.into(),
            }),
        }
    }
}

/// The full snapshot of visual values consumed by the preview renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleParameters {
    pub title: String,
    pub background: Color,
    pub text: Color,
    pub hover: Color,
    pub width: Px,
    pub spacing: Px,
    pub font_size: Px,
    pub border_width: Px,
    pub border_radius: Px,
    pub border_color: Color,
    #[serde(skip)]
    pub image: Option<DataUrl>,
}

impl Default for StyleParameters {
    fn default() -> Self {
        StyleParameters {
            title: "Meu Menu".into(),
            background: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x33, 0x33, 0x33),
            hover: Color::rgb(0xf0, 0xf0, 0xf0),
            width: Px(600.0),
            spacing: Px(10.0),
            font_size: Px(16.0),
            border_width: Px(1.0),
            border_radius: Px(0.0),
            border_color: Color::rgb(0xcc, 0xcc, 0xcc),
            image: None,
        }
    }
}

impl StyleParameters {
    /// Shorthand `border` value, e.g. `5px solid #000000`.
    pub fn border(&self) -> String {
        format!("{} solid {}", self.border_width, self.border_color)
    }

    /// The value a page control shows for `field`.
    pub fn control_value(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Background => self.background.css(),
            Field::Text => self.text.css(),
            Field::Hover => self.hover.css(),
            Field::Width => self.width.number(),
            Field::Spacing => self.spacing.number(),
            Field::FontSize => self.font_size.number(),
            Field::BorderWidth => self.border_width.number(),
            Field::BorderRadius => self.border_radius.number(),
            Field::BorderColor => self.border_color.css(),
        }
    }
}

/// One style control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Background,
    Text,
    Hover,
    Width,
    Spacing,
    FontSize,
    BorderWidth,
    BorderRadius,
    BorderColor,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Title,
        Field::Background,
        Field::Text,
        Field::Hover,
        Field::Width,
        Field::Spacing,
        Field::FontSize,
        Field::BorderWidth,
        Field::BorderRadius,
        Field::BorderColor,
    ];
}

/// A partial update of [`StyleParameters`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub title: Option<String>,
    pub background: Option<Color>,
    pub text: Option<Color>,
    pub hover: Option<Color>,
    pub width: Option<Px>,
    pub spacing: Option<Px>,
    pub font_size: Option<Px>,
    pub border_width: Option<Px>,
    pub border_radius: Option<Px>,
    pub border_color: Option<Color>,
}

impl StylePatch {
    /// Build a single-field patch from the raw value of a control.
    pub fn field(field: Field, raw: &str) -> Result<Self, ParseError> {
        let mut patch = StylePatch::default();

        patch.set(field, raw)?;

        Ok(patch)
    }

    /// Build a patch from the values of many controls at once.
    ///
    /// Values that fail to parse leave their field unset and are returned
    /// alongside the patch.
    pub fn from_controls<I, S>(controls: I) -> (Self, Vec<(Field, ParseError)>)
    where
        I: IntoIterator<Item = (Field, S)>,
        S: AsRef<str>,
    {
        let mut patch = StylePatch::default();
        let mut rejected = Vec::new();

        for (field, raw) in controls {
            if let Err(err) = patch.set(field, raw.as_ref()) {
                rejected.push((field, err));
            }
        }

        (patch, rejected)
    }

    /// Parse `raw` into the slot for `field`, leaving it untouched on error.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), ParseError> {
        match field {
            Field::Title => self.title = Some(raw.into()),
            Field::Background => self.background = Some(raw.parse()?),
            Field::Text => self.text = Some(raw.parse()?),
            Field::Hover => self.hover = Some(raw.parse()?),
            Field::Width => self.width = Some(raw.parse()?),
            Field::Spacing => self.spacing = Some(raw.parse()?),
            Field::FontSize => self.font_size = Some(raw.parse()?),
            Field::BorderWidth => self.border_width = Some(raw.parse()?),
            Field::BorderRadius => self.border_radius = Some(raw.parse()?),
            Field::BorderColor => self.border_color = Some(raw.parse()?),
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == StylePatch::default()
    }

    /// Overwrite the fields set in this patch, returns `true` if any value changed.
    pub fn apply(self, style: &mut StyleParameters) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
            match value {
                Some(value) if *slot != value => {
                    *slot = value;
                    true
                }
                _ => false,
            }
        }

        // Non-short-circuiting `|` so every field is written.
        set(&mut style.title, self.title)
            | set(&mut style.background, self.background)
            | set(&mut style.text, self.text)
            | set(&mut style.hover, self.hover)
            | set(&mut style.width, self.width)
            | set(&mut style.spacing, self.spacing)
            | set(&mut style.font_size, self.font_size)
            | set(&mut style.border_width, self.border_width)
            | set(&mut style.border_radius, self.border_radius)
            | set(&mut style.border_color, self.border_color)
    }
}
