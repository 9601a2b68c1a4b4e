// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative description of the DOM produced by the renderer.
//!
//! An [`Element`] is plain data: it can be compared, cloned and inspected in tests
//! without a browser. The [`dom`](crate::dom) module turns it into real nodes.

/// HTML tags used by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Ul,
    Li,
    Img,
    Button,
}

impl Tag {
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Img => "img",
            Tag::Button => "button",
        }
    }
}

/// CSS properties the renderer may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Css {
    BackgroundColor,
    Border,
    BorderRadius,
    Color,
    Display,
    FontSize,
    Gap,
    Width,
}

impl Css {
    pub const fn name(self) -> &'static str {
        match self {
            Css::BackgroundColor => "background-color",
            Css::Border => "border",
            Css::BorderRadius => "border-radius",
            Css::Color => "color",
            Css::Display => "display",
            Css::FontSize => "font-size",
            Css::Gap => "gap",
            Css::Width => "width",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Src,
}

impl Attr {
    pub const fn name(self) -> &'static str {
        match self {
            Attr::Src => "src",
        }
    }
}

/// DOM events the renderer listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum On {
    Click,
    MouseEnter,
    MouseLeave,
}

impl On {
    pub const fn name(self) -> &'static str {
        match self {
            On::Click => "click",
            On::MouseEnter => "mouseenter",
            On::MouseLeave => "mouseleave",
        }
    }
}

/// What happens when a listener fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set a style property on the element the listener is attached to.
    Style(Css, String),
    /// Remove the item at the index captured when the view was rendered.
    RemoveItem(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub on: On,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(Attr, String)>,
    pub style: Vec<(Css, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub listeners: Vec<Listener>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Element {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            style: Vec::new(),
            text: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, attr: Attr, value: impl Into<String>) -> Self {
        self.attrs.push((attr, value.into()));
        self
    }

    /// Set a style property, replacing an earlier value for the same property.
    pub fn style(mut self, css: Css, value: impl Into<String>) -> Self {
        let value = value.into();

        match self.style.iter_mut().find(|(prop, _)| *prop == css) {
            Some((_, slot)) => *slot = value,
            None => self.style.push((css, value)),
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children);
        self
    }

    pub fn on(mut self, on: On, action: Action) -> Self {
        self.listeners.push(Listener { on, action });
        self
    }

    pub fn get_style(&self, css: Css) -> Option<&str> {
        self.style
            .iter()
            .find(|(prop, _)| *prop == css)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_attr(&self, attr: Attr) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(name, _)| *name == attr)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Depth-first search for the first element carrying `class`, including `self`.
    pub fn find(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }

        self.children.iter().find_map(|child| child.find(class))
    }
}
