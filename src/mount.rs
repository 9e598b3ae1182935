//! Minimal mount/update driver connecting a [`Block`] to a [`Renderer`].

use crate::error::Result;
use crate::{Block, Element, Renderer};

/// A mounted component instance.
///
/// Owns the component, its current props and state, and the renderer that
/// receives every produced [`Element`]. It only covers the "compute output
/// for current props/state" step; scheduling and reconciliation belong to
/// the host framework behind the [`Renderer`].
///
/// 1. [`Mount::new`] validates the component's block and element names
/// 2. [`Mount::mount`] renders the initial element
/// 3. [`Mount::set_props`] and [`Mount::update_state`] re-render while mounted
///
/// # Type Parameters
///
/// * `C` - The component type (implements [`Block`])
/// * `Props` - The props type passed to every hook
/// * `State` - The state type passed to every hook
/// * `R` - The renderer implementation type (implements [`Renderer`])
pub struct Mount<C, Props, State, R>
where
    C: Block<Props, State>,
    R: Renderer,
{
    component: C,
    props: Props,
    state: State,
    renderer: R,
    mounted: bool,
}

impl<C, Props, State, R> Mount<C, Props, State, R>
where
    C: Block<Props, State>,
    R: Renderer,
{
    /// Create a new mount.
    ///
    /// Nothing is rendered until [`Mount::mount`] is called.
    ///
    /// # Arguments
    ///
    /// * `component` - The component to render
    /// * `props` - The initial props
    /// * `state` - The initial state
    /// * `renderer` - Host rendering implementation receiving elements
    pub fn new(component: C, props: Props, state: State, renderer: R) -> Result<Self> {
        component.entity(&props, &state)?;

        Ok(Mount {
            component,
            props,
            state,
            renderer,
            mounted: false,
        })
    }

    /// Render the initial element.
    ///
    /// Calling it on an already mounted component renders again.
    pub fn mount(&mut self) -> Result<()> {
        tracing::debug!(block = self.component.block(), "mounting component");
        self.mounted = true;
        self.rerender()
    }

    /// Stop rendering on updates. Props and state stay available.
    pub fn unmount(&mut self) {
        tracing::debug!(block = self.component.block(), "unmounting component");
        self.mounted = false;
    }

    /// Replace the props, re-rendering when mounted.
    pub fn set_props(&mut self, props: Props) -> Result<()> {
        self.props = props;
        self.rerender_if_mounted()
    }

    /// Mutate the state in place, re-rendering when mounted.
    pub fn update_state<F>(&mut self, update: F) -> Result<()>
    where
        F: FnOnce(&mut State),
    {
        update(&mut self.state);
        self.rerender_if_mounted()
    }

    /// Compute the element for the current props and state without
    /// rendering it.
    pub fn element(&self) -> Result<Element> {
        self.component.render(&self.props, &self.state)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn rerender_if_mounted(&mut self) -> Result<()> {
        if !self.mounted {
            tracing::trace!(block = self.component.block(), "skipping render while unmounted");
            return Ok(());
        }
        self.rerender()
    }

    fn rerender(&mut self) -> Result<()> {
        let element = self.element()?;
        tracing::debug!(
            block = self.component.block(),
            tag = element.tag(),
            "rendering component"
        );
        self.renderer.render(element);
        Ok(())
    }
}
