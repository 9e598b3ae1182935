//! Stateless rendering helper.

#[cfg(feature = "no_std")]
use alloc::borrow::Cow;
#[cfg(feature = "no_std")]
use alloc::string::String;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;
#[cfg(not(feature = "no_std"))]
use std::borrow::Cow;

use crate::attrs::{AttrValue, Attrs, Style};
use crate::element::{Element, DEFAULT_TAG};
use crate::error::Result;
use crate::naming::{Entity, ModValue, Mods, Naming};

/// Describe a BEM node inline and render it to an [`Element`].
///
/// The tag defaults to `div`. Inline attributes, ARIA and data attributes
/// included, pass through untouched; a caller `class` is combined with the
/// computed one.
///
/// # Example
///
/// ```rust
/// use oxide_bem::Bem;
///
/// let element = Bem::new("Block")
///     .tag("b")
///     .attr("aria-labelledby", "address")
///     .render()
///     .unwrap();
///
/// assert_eq!(element.tag(), "b");
/// assert_eq!(element.class_name(), "Block");
/// assert_eq!(
///     element.prop("aria-labelledby").and_then(|v| v.as_str()),
///     Some("address")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Bem {
    block: String,
    elem: Option<String>,
    mods: Mods,
    mix: Vec<Entity>,
    tag: Option<Cow<'static, str>>,
    attrs: Attrs,
    naming: Naming,
}

impl Bem {
    /// Describe a node of `block`. The name is checked on render.
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            elem: None,
            mods: Mods::new(),
            mix: Vec::new(),
            tag: None,
            attrs: Attrs::new(),
            naming: Naming::default(),
        }
    }

    /// Render as the element `block__elem`.
    pub fn elem(mut self, elem: impl Into<String>) -> Self {
        self.elem = Some(elem.into());
        self
    }

    /// Set a modifier.
    pub fn mod_(mut self, name: impl Into<String>, value: impl Into<ModValue>) -> Self {
        self.mods.set(name, value);
        self
    }

    /// Set every modifier of `mods`.
    pub fn mods(mut self, mods: Mods) -> Self {
        self.mods.extend(mods);
        self
    }

    /// Mix another entity into the class string.
    pub fn mix(mut self, entity: Entity) -> Self {
        self.mix.push(entity);
        self
    }

    /// Override the default `div` tag.
    pub fn tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set one inline attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Merge `attrs` over the inline attributes set so far.
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Use other delimiters.
    pub fn naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    /// The entity this helper describes.
    pub fn entity(&self) -> Result<Entity> {
        let entity = match &self.elem {
            Some(elem) => Entity::elem(self.block.as_str(), elem.as_str())?,
            None => Entity::new(self.block.as_str())?,
        };

        Ok(self
            .mix
            .iter()
            .cloned()
            .fold(entity.with_mods(self.mods.clone()), Entity::with_mix))
    }

    /// Produce the element. Fails only for a malformed block, element or
    /// modifier name, or a modifier value containing whitespace.
    pub fn render(&self) -> Result<Element> {
        let entity = self.entity()?;
        let class = self.naming.class_name(&entity)?;
        let tag = self.tag.clone().unwrap_or(Cow::Borrowed(DEFAULT_TAG));

        Ok(Element::resolve(tag, &class, self.attrs.clone(), Style::new()))
    }
}
