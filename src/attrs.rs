//! Attribute and style bags with ordered shallow merging.

#[cfg(feature = "no_std")]
use alloc::string::String;

use core::fmt;

use crate::OrderedMap;

/// Attribute name holding the class string.
pub const CLASS: &str = "class";
/// Alias accepted on input and folded into [`CLASS`].
pub const CLASS_NAME: &str = "className";
/// Attribute name holding the [`Style`] bag.
pub const STYLE: &str = "style";

/// CSS property to value map.
///
/// Properties keep insertion order. [`merge`](Self::merge) lets the
/// override win on collision while the colliding key keeps its original
/// position.
#[derive(Debug, Clone, Default)]
pub struct Style(OrderedMap<String, String>);

/// Order-sensitive, matching the [`Display`](fmt::Display) output.
impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Style {}

impl Style {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set `property`, keeping its position when already present.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// The value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow merge of `over` on top of `self`.
    pub fn merge(mut self, over: Style) -> Style {
        self.0.extend(over.0);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

/// Inline CSS text, e.g. `font: bold; color: red`.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Num(f64),
    Style(Style),
}

impl AttrValue {
    /// The string value, if this is [`AttrValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The style bag, if this is [`AttrValue::Style`].
    pub fn as_style(&self) -> Option<&Style> {
        match self {
            AttrValue::Style(style) => Some(style),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(String::from(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Num(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Num(f64::from(value))
    }
}

impl From<Style> for AttrValue {
    fn from(style: Style) -> Self {
        AttrValue::Style(style)
    }
}

/// Attribute name to value map, ARIA and data attributes included.
///
/// Equality is order-sensitive.
#[derive(Debug, Clone, Default)]
pub struct Attrs(OrderedMap<String, AttrValue>);

impl PartialEq for Attrs {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Attrs {
    /// An empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name`, keeping its position when already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// The value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Whether `name` is set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove `name`, keeping the order of the remaining attributes.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.shift_remove(name)
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `class` attribute, when it holds a string.
    pub fn class(&self) -> Option<&str> {
        self.get(CLASS).and_then(AttrValue::as_str)
    }

    /// The `style` attribute, when it holds a [`Style`].
    pub fn style(&self) -> Option<&Style> {
        self.get(STYLE).and_then(AttrValue::as_style)
    }

    /// Shallow merge of `over` on top of `self`; `over` wins on collision.
    pub fn merge(mut self, over: Attrs) -> Attrs {
        self.0.extend(over.0);
        self
    }

    /// Remove `class` and `className`, returning their string values in
    /// that order.
    pub(crate) fn take_classes(&mut self) -> (Option<String>, Option<String>) {
        let class = self.remove(CLASS).and_then(into_string);
        let class_name = self.remove(CLASS_NAME).and_then(into_string);
        (class, class_name)
    }

    /// Remove `style`, returning it when it holds a [`Style`].
    pub(crate) fn take_style(&mut self) -> Option<Style> {
        match self.remove(STYLE)? {
            AttrValue::Style(style) => Some(style),
            other => {
                tracing::warn!(value = ?other, "ignoring non-style value in `style` attribute");
                None
            }
        }
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

fn into_string(value: AttrValue) -> Option<String> {
    match value {
        AttrValue::Str(value) => Some(value),
        other => {
            tracing::warn!(value = ?other, "ignoring non-string class attribute");
            None
        }
    }
}
