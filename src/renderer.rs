//! Renderer abstraction for handing elements to the host framework.

#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::Element;

/// Renderer abstraction for produced elements.
///
/// Implement this trait to connect oxide-bem to your host framework (virtual
/// DOM, server-side HTML writer, native widget tree, etc.).
///
/// Closures taking an [`Element`] implement it through the blanket
/// implementation.
///
/// # Example
///
/// ```rust
/// use oxide_bem::{Element, Renderer};
///
/// struct ConsoleRenderer;
///
/// impl Renderer for ConsoleRenderer {
///     fn render(&mut self, element: Element) {
///         println!("<{} class=\"{}\">", element.tag(), element.class_name());
///     }
/// }
/// ```
pub trait Renderer {
    /// Render the given element.
    ///
    /// Called with a freshly computed element every time the component's
    /// props or state change.
    fn render(&mut self, element: Element);
}

impl<F> Renderer for F
where
    F: FnMut(Element),
{
    fn render(&mut self, element: Element) {
        self(element)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every rendered element for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage: pass one clone to a
/// [`Mount`](crate::Mount) and keep another for inspection.
///
/// # Example
///
/// ```rust
/// use oxide_bem::{Block, Mount, TestRenderer};
///
/// struct MyBlock;
///
/// impl Block<()> for MyBlock {
///     fn block(&self) -> &str {
///         "MyBlock"
///     }
/// }
///
/// let renderer = TestRenderer::new();
/// let mut mount = Mount::new(MyBlock, (), (), renderer.clone()).unwrap();
/// mount.mount().unwrap();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].tag(), "div");
///     assert_eq!(renders[0].class_name(), "MyBlock");
/// });
/// ```
pub struct TestRenderer {
    renders: Arc<Mutex<Vec<Element>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestRenderer {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for TestRenderer {
    fn render(&mut self, element: Element) {
        self.renders.lock().push(element);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestRenderer {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// The most recently rendered element.
    pub fn last(&self) -> Option<Element> {
        self.renders.lock().last().cloned()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives a reference to the Vec of all captured elements.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Element>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
