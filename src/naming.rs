//! BEM name builder.
//!
//! Turns an [`Entity`] (block, optional element, modifiers and mixes) into the
//! class string a rendered node carries:
//!
//! - `block` or `block__elem` for the entity itself
//! - `<base>--<mod>` for every modifier set to `true`
//! - `<base>--<mod>-<value>` for every modifier set to a non-empty string
//!
//! Falsy modifiers are skipped. Modifiers keep their insertion order, so the
//! output is stable for a given entity. Modifier names must be non-empty and
//! free of whitespace, as must string values; otherwise building the class
//! string fails.
//!
//! # Example
//!
//! ```rust
//! use oxide_bem::Entity;
//!
//! let entity = Entity::elem("Menu", "Item")
//!     .unwrap()
//!     .with_mod("active", true)
//!     .with_mod("size", "l")
//!     .with_mod("disabled", false);
//!
//! assert_eq!(
//!     entity.class_name().unwrap(),
//!     "Menu__Item Menu__Item--active Menu__Item--size-l"
//! );
//! ```

#[cfg(feature = "no_std")]
use alloc::borrow::Cow;
#[cfg(feature = "no_std")]
use alloc::string::String;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;
#[cfg(not(feature = "no_std"))]
use std::borrow::Cow;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::error::{BemError, Result};
use crate::OrderedMap;

/// Value of a single modifier.
///
/// Mirrors the loose `boolean | string | undefined` values UI code tends to
/// pass around, with an explicit notion of truthiness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModValue {
    /// Not set; never rendered.
    #[default]
    Unset,
    /// Flag modifier, rendered as `--name` when `true`.
    Bool(bool),
    /// Key-value modifier, rendered as `--name-value` when non-empty.
    Str(String),
}

impl ModValue {
    /// Whether the modifier contributes a class.
    pub fn is_truthy(&self) -> bool {
        match self {
            ModValue::Unset => false,
            ModValue::Bool(flag) => *flag,
            ModValue::Str(value) => !value.is_empty(),
        }
    }
}

impl From<bool> for ModValue {
    fn from(flag: bool) -> Self {
        ModValue::Bool(flag)
    }
}

impl From<&str> for ModValue {
    fn from(value: &str) -> Self {
        ModValue::Str(String::from(value))
    }
}

impl From<String> for ModValue {
    fn from(value: String) -> Self {
        ModValue::Str(value)
    }
}

impl<T: Into<ModValue>> From<Option<T>> for ModValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ModValue::Unset, Into::into)
    }
}

/// Insertion-ordered modifier map.
///
/// Setting a modifier that already exists replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct Mods(OrderedMap<String, ModValue>);

/// Order-sensitive: the same modifiers set in another order are not equal.
impl PartialEq for Mods {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Mods {
    /// An empty modifier map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ModValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name` to `value`. Names are checked when the class is built.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ModValue>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// The value of modifier `name`, if set.
    pub fn get(&self, name: &str) -> Option<&ModValue> {
        self.0.get(name)
    }

    /// Copy every modifier of `other` into `self`; `other` wins on collision.
    pub fn extend(&mut self, other: Mods) {
        self.0.extend(other.0);
    }

    /// Modifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of modifiers set, falsy ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no modifier is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ModValue>> FromIterator<(K, V)> for Mods {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mods = Mods::new();
        for (name, value) in iter {
            mods.set(name, value);
        }
        mods
    }
}

/// A BEM descriptor: block, optional element, modifiers and mixed entities.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    block: String,
    elem: Option<String>,
    mods: Mods,
    mix: Vec<Entity>,
}

impl Entity {
    /// Create a block entity.
    ///
    /// Fails with [`BemError::EmptyBlock`] for an empty name.
    pub fn new(block: impl Into<String>) -> Result<Self> {
        let block = block.into();
        validate_name(&block, BemError::EmptyBlock)?;

        Ok(Self {
            block,
            elem: None,
            mods: Mods::new(),
            mix: Vec::new(),
        })
    }

    /// Create an element entity (`block__elem`).
    pub fn elem(block: impl Into<String>, elem: impl Into<String>) -> Result<Self> {
        let mut entity = Self::new(block)?;
        let elem = elem.into();
        validate_name(&elem, BemError::EmptyElement)?;
        entity.elem = Some(elem);
        Ok(entity)
    }

    /// Set a modifier on this entity.
    pub fn with_mod(mut self, name: impl Into<String>, value: impl Into<ModValue>) -> Self {
        self.mods.set(name, value);
        self
    }

    /// Set every modifier of `mods`, replacing ones with the same name.
    pub fn with_mods(mut self, mods: Mods) -> Self {
        self.mods.extend(mods);
        self
    }

    /// Mix another entity in; its classes follow this entity's own.
    pub fn with_mix(mut self, entity: Entity) -> Self {
        self.mix.push(entity);
        self
    }

    /// The block name.
    pub fn block(&self) -> &str {
        &self.block
    }

    /// The element name, for `block__elem` entities.
    pub fn element(&self) -> Option<&str> {
        self.elem.as_deref()
    }

    /// Modifiers in insertion order.
    pub fn mods(&self) -> &Mods {
        &self.mods
    }

    /// Mixed entities in insertion order.
    pub fn mixes(&self) -> &[Entity] {
        &self.mix
    }

    /// Class string using the default [`Naming`].
    ///
    /// Fails with [`BemError::EmptyModifier`] or [`BemError::InvalidName`]
    /// for a malformed modifier.
    pub fn class_name(&self) -> Result<String> {
        Naming::default().class_name(self)
    }
}

/// Delimiters used to join block, element, modifier and modifier value.
///
/// The default produces `block__elem--mod-value`. [`Naming::origin`] produces
/// the classic `block__elem_mod_value` form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Naming {
    pub elem: Cow<'static, str>,
    pub modifier: Cow<'static, str>,
    pub mod_value: Cow<'static, str>,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            elem: Cow::Borrowed("__"),
            modifier: Cow::Borrowed("--"),
            mod_value: Cow::Borrowed("-"),
        }
    }
}

impl Naming {
    /// `block__elem_mod_value` delimiters.
    pub fn origin() -> Self {
        Self {
            elem: Cow::Borrowed("__"),
            modifier: Cow::Borrowed("_"),
            mod_value: Cow::Borrowed("_"),
        }
    }

    /// `block` or `block__elem`, without modifiers.
    pub fn entity_name(&self, block: &str, elem: Option<&str>) -> String {
        let mut name = String::from(block);
        if let Some(elem) = elem {
            name.push_str(&self.elem);
            name.push_str(elem);
        }
        name
    }

    /// A single modifier class on top of `base`, or `None` when the value
    /// is falsy.
    ///
    /// The name is checked even when the value is falsy; a string value must
    /// not contain whitespace.
    pub fn modifier_class(
        &self,
        base: &str,
        name: &str,
        value: &ModValue,
    ) -> Result<Option<String>> {
        validate_name(name, BemError::EmptyModifier)?;
        if let ModValue::Str(value) = value {
            if value.chars().any(char::is_whitespace) {
                return Err(BemError::InvalidName {
                    name: String::from(value.as_str()),
                });
            }
        }
        if !value.is_truthy() {
            return Ok(None);
        }

        let mut class = String::from(base);
        class.push_str(&self.modifier);
        class.push_str(name);
        if let ModValue::Str(value) = value {
            class.push_str(&self.mod_value);
            class.push_str(value);
        }
        Ok(Some(class))
    }

    /// Every class of `entity` in output order, mixes included.
    ///
    /// Fails for a malformed modifier anywhere in `entity` or its mixes.
    pub fn classes(&self, entity: &Entity) -> Result<Vec<String>> {
        let base = self.entity_name(&entity.block, entity.element());
        let mut classes = Vec::with_capacity(1 + entity.mods.len());

        for (name, value) in entity.mods.iter() {
            if let Some(class) = self.modifier_class(&base, name, value)? {
                classes.push(class);
            }
        }
        classes.insert(0, base);

        for mixed in &entity.mix {
            classes.extend(self.classes(mixed)?);
        }
        Ok(classes)
    }

    /// The space separated class string of `entity`.
    pub fn class_name(&self, entity: &Entity) -> Result<String> {
        let classes = self.classes(entity)?;
        Ok(join_classes(classes.iter().map(String::as_str)))
    }
}

/// Join class lists into one space separated string.
///
/// Each item may itself hold several whitespace separated classes. Repeated
/// classes are dropped; the first occurrence keeps its position.
pub fn join_classes<'a>(lists: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: IndexSet<&'a str, FxBuildHasher> = IndexSet::default();
    for list in lists {
        seen.extend(list.split_whitespace());
    }

    let mut joined = String::new();
    for class in seen {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(class);
    }
    joined
}

fn validate_name(name: &str, empty: BemError) -> Result<()> {
    if name.is_empty() {
        return Err(empty);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(BemError::InvalidName {
            name: String::from(name),
        });
    }
    Ok(())
}
