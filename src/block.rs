//! Component base trait for stateful BEM components.

#[cfg(feature = "no_std")]
use alloc::borrow::Cow;
#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;
#[cfg(not(feature = "no_std"))]
use std::borrow::Cow;

use crate::attrs::{Attrs, Style};
use crate::element::{Element, DEFAULT_TAG};
use crate::error::Result;
use crate::naming::{Entity, Mods, Naming};

/// A UI component rendered as one BEM-named root element.
///
/// Implementors declare their [`block`](Self::block) name and override the
/// hooks they need. Each hook receives the current props and state
/// explicitly and is evaluated fresh on every [`render`](Self::render).
///
/// # Example
///
/// ```rust
/// use oxide_bem::{Attrs, Block, Mods, Style};
///
/// struct Props { id: &'static str, checked: bool }
///
/// struct Checkbox;
///
/// impl Block<Props> for Checkbox {
///     fn block(&self) -> &str {
///         "Checkbox"
///     }
///
///     fn mods(&self, props: &Props, _state: &()) -> Mods {
///         Mods::new().with("checked", props.checked)
///     }
///
///     fn attrs(&self, props: &Props, _state: &()) -> Attrs {
///         Attrs::new()
///             .with("id", props.id)
///             .with("style", Style::new().with("color", "green"))
///     }
///
///     fn style(&self, _props: &Props, _state: &()) -> Style {
///         Style::new().with("color", "red")
///     }
/// }
///
/// let element = Checkbox
///     .render(&Props { id: "agree", checked: true }, &())
///     .unwrap();
///
/// assert_eq!(element.tag(), "div");
/// assert_eq!(element.class_name(), "Checkbox Checkbox--checked");
/// assert_eq!(element.style().and_then(|s| s.get("color")), Some("red"));
/// ```
pub trait Block<Props, State = ()> {
    /// The block name. Must not be empty.
    fn block(&self) -> &str;

    /// Element name, making the component render `block__elem`.
    fn elem(&self) -> Option<&str> {
        None
    }

    fn mods(&self, _props: &Props, _state: &State) -> Mods {
        Mods::new()
    }

    /// Entities whose classes are mixed into the root element.
    fn mix(&self, _props: &Props, _state: &State) -> Vec<Entity> {
        Vec::new()
    }

    /// Tag of the root element.
    fn tag(&self, _props: &Props, _state: &State) -> Cow<'static, str> {
        Cow::Borrowed(DEFAULT_TAG)
    }

    /// Attributes merged over the computed defaults.
    ///
    /// A `class` here is combined with the BEM class rather than replacing
    /// it. A `style` here is the base that [`style`](Self::style) merges over.
    fn attrs(&self, _props: &Props, _state: &State) -> Attrs {
        Attrs::new()
    }

    /// Style merged over the `style` attribute from [`attrs`](Self::attrs),
    /// winning on collision.
    fn style(&self, _props: &Props, _state: &State) -> Style {
        Style::new()
    }

    fn naming(&self) -> Naming {
        Naming::default()
    }

    /// The entity for the current props and state.
    fn entity(&self, props: &Props, state: &State) -> Result<Entity> {
        let entity = match self.elem() {
            Some(elem) => Entity::elem(self.block(), elem)?,
            None => Entity::new(self.block())?,
        };

        Ok(self
            .mix(props, state)
            .into_iter()
            .fold(entity.with_mods(self.mods(props, state)), Entity::with_mix))
    }

    /// Compute the root element for the current props and state.
    fn render(&self, props: &Props, state: &State) -> Result<Element> {
        let entity = self.entity(props, state)?;
        let class = self.naming().class_name(&entity)?;

        Ok(Element::resolve(
            self.tag(props, state),
            &class,
            self.attrs(props, state),
            self.style(props, state),
        ))
    }
}

impl<Props, State, B> Block<Props, State> for Box<B>
where
    B: Block<Props, State> + ?Sized,
{
    fn block(&self) -> &str {
        (**self).block()
    }

    fn elem(&self) -> Option<&str> {
        (**self).elem()
    }

    fn mods(&self, props: &Props, state: &State) -> Mods {
        (**self).mods(props, state)
    }

    fn mix(&self, props: &Props, state: &State) -> Vec<Entity> {
        (**self).mix(props, state)
    }

    fn tag(&self, props: &Props, state: &State) -> Cow<'static, str> {
        (**self).tag(props, state)
    }

    fn attrs(&self, props: &Props, state: &State) -> Attrs {
        (**self).attrs(props, state)
    }

    fn style(&self, props: &Props, state: &State) -> Style {
        (**self).style(props, state)
    }

    fn naming(&self) -> Naming {
        (**self).naming()
    }
}

/// Decorator adding modifiers to a wrapped component.
///
/// Created with [`with_mods`]. The modifiers returned by the closure are
/// applied after the inner component's own, replacing any with the same
/// name. All other hooks delegate to the inner component.
pub struct WithMods<C, F> {
    inner: C,
    mods: F,
}

/// Wrap `component` so `mods(props, state)` is added to its modifiers.
///
/// # Example
///
/// ```rust
/// use oxide_bem::{with_mods, Block, Mods};
///
/// struct Button;
///
/// impl Block<bool> for Button {
///     fn block(&self) -> &str {
///         "Button"
///     }
/// }
///
/// let button = with_mods(Button, |pressed: &bool, _: &()| {
///     Mods::new().with("pressed", *pressed)
/// });
///
/// assert_eq!(button.render(&true, &()).unwrap().class_name(), "Button Button--pressed");
/// assert_eq!(button.render(&false, &()).unwrap().class_name(), "Button");
/// ```
pub fn with_mods<C, F>(component: C, mods: F) -> WithMods<C, F> {
    WithMods {
        inner: component,
        mods,
    }
}

impl<C, F> WithMods<C, F> {
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<Props, State, C, F> Block<Props, State> for WithMods<C, F>
where
    C: Block<Props, State>,
    F: Fn(&Props, &State) -> Mods,
{
    fn block(&self) -> &str {
        self.inner.block()
    }

    fn elem(&self) -> Option<&str> {
        self.inner.elem()
    }

    fn mods(&self, props: &Props, state: &State) -> Mods {
        let mut mods = self.inner.mods(props, state);
        mods.extend((self.mods)(props, state));
        mods
    }

    fn mix(&self, props: &Props, state: &State) -> Vec<Entity> {
        self.inner.mix(props, state)
    }

    fn tag(&self, props: &Props, state: &State) -> Cow<'static, str> {
        self.inner.tag(props, state)
    }

    fn attrs(&self, props: &Props, state: &State) -> Attrs {
        self.inner.attrs(props, state)
    }

    fn style(&self, props: &Props, state: &State) -> Style {
        self.inner.style(props, state)
    }

    fn naming(&self) -> Naming {
        self.inner.naming()
    }
}
