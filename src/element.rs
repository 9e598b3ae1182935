//! The renderable node produced for a BEM entity.

#[cfg(feature = "no_std")]
use alloc::borrow::Cow;
#[cfg(not(feature = "no_std"))]
use std::borrow::Cow;

use crate::attrs::{AttrValue, Attrs, Style, CLASS, STYLE};
use crate::naming::join_classes;

/// Tag used when neither the caller nor the component picks one.
pub const DEFAULT_TAG: &str = "div";

/// A root element ready to hand to the host framework: a tag name plus the
/// fully resolved attributes, `class` and `style` included.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Cow<'static, str>,
    attrs: Attrs,
}

impl Element {
    /// An element with already resolved attributes.
    pub fn new(tag: impl Into<Cow<'static, str>>, attrs: Attrs) -> Self {
        Self {
            tag: tag.into(),
            attrs,
        }
    }

    /// Build an element from a computed BEM class and caller attributes.
    ///
    /// - `class` is the computed class followed by any caller `class` or
    ///   `className`; it is never replaced.
    /// - every other caller attribute passes through verbatim.
    /// - `style` is the caller's `style` attribute merged with `style`, the
    ///   latter winning; it is left out when empty.
    pub(crate) fn resolve(
        tag: Cow<'static, str>,
        bem_class: &str,
        mut attrs: Attrs,
        style: Style,
    ) -> Self {
        let (class, class_name) = attrs.take_classes();
        let class = join_classes([
            bem_class,
            class.as_deref().unwrap_or_default(),
            class_name.as_deref().unwrap_or_default(),
        ]);
        let style = attrs.take_style().unwrap_or_default().merge(style);

        let mut resolved = Attrs::new().with(CLASS, class).merge(attrs);
        if !style.is_empty() {
            resolved.set(STYLE, style);
        }

        tracing::trace!(tag = %tag, class = ?resolved.class(), "resolved element");
        Self::new(tag, resolved)
    }

    /// Tag name of the element.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// A single attribute by name.
    pub fn prop(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// All attributes.
    pub fn props(&self) -> &Attrs {
        &self.attrs
    }

    /// The resolved class string, empty when none was set.
    pub fn class_name(&self) -> &str {
        self.attrs.class().unwrap_or_default()
    }

    /// Whether `class` is one of the element's classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    /// The resolved style, absent when empty.
    pub fn style(&self) -> Option<&Style> {
        self.attrs.style()
    }

    /// Split into tag and attributes for the host.
    pub fn into_parts(self) -> (Cow<'static, str>, Attrs) {
        (self.tag, self.attrs)
    }
}
