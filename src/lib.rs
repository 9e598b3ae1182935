#![cfg_attr(feature = "no_std", no_std)]

//! BEM (Block-Element-Modifier) class naming and attribute merging for
//! component-based UI, with `no_std` support.
//!
//! Computes `block`, `block__elem` and `block--mod` class strings and merges
//! them with caller attributes and styles, so a rendered root element always
//! carries the right classes next to any ARIA, data or style attributes.
//!
//! Two entry points are provided:
//! - [`Bem`]: a stateless helper describing a node inline
//! - [`Block`]: a component trait with overridable `tag`, `attrs` and `style`
//!   hooks evaluated against typed props and state
//!
//! ## Example
//!
//! ```rust
//! use oxide_bem::{Attrs, Block, Element, Mods, Mount, Style};
//!
//! struct Props { id: String, open: bool }
//!
//! #[derive(Default)]
//! struct State { name: String }
//!
//! struct Popup;
//!
//! impl Block<Props, State> for Popup {
//!     fn block(&self) -> &str {
//!         "Popup"
//!     }
//!
//!     fn mods(&self, props: &Props, _state: &State) -> Mods {
//!         Mods::new().with("open", props.open)
//!     }
//!
//!     fn attrs(&self, props: &Props, state: &State) -> Attrs {
//!         Attrs::new()
//!             .with("id", props.id.clone())
//!             .with("name", state.name.clone())
//!             .with("style", Style::new().with("font", "bold").with("color", "green"))
//!     }
//!
//!     fn style(&self, _props: &Props, _state: &State) -> Style {
//!         Style::new().with("color", "red")
//!     }
//! }
//!
//! let mut rendered = Vec::new();
//! let renderer = |element: Element| rendered.push(element);
//!
//! let props = Props { id: "the-id".to_string(), open: true };
//! let mut mount = Mount::new(Popup, props, State::default(), renderer).unwrap();
//! mount.mount().unwrap();
//!
//! let element = mount.element().unwrap();
//! assert_eq!(element.class_name(), "Popup Popup--open");
//! assert_eq!(element.style().unwrap().to_string(), "font: bold; color: red");
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod attrs;
mod bem;
mod block;
mod element;
mod error;
mod mount;
mod naming;
mod renderer;

// Public re-exports
pub use attrs::{AttrValue, Attrs, Style, CLASS, CLASS_NAME, STYLE};
pub use bem::Bem;
pub use block::{with_mods, Block, WithMods};
pub use element::{Element, DEFAULT_TAG};
pub use error::{BemError, Result};
pub use mount::Mount;
pub use naming::{join_classes, Entity, ModValue, Mods, Naming};
pub use renderer::Renderer;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;

/// Insertion-ordered map used for modifiers, attributes and styles.
pub(crate) type OrderedMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
