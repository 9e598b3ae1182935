use std::borrow::Cow;

use oxide_bem::{Attrs, Block, Entity, Mods, Style};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestProps {
    pub(crate) aria_labelled_by: String,
    pub(crate) id: String,
    pub(crate) disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestState {
    pub(crate) name: String,
}

/// Source of the `aria-label` text, looked up by element id on every render.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait LabelSource {
    fn label_for(&self, id: &str) -> String;
}

/// Component deriving every attribute from its props and state.
pub(crate) struct AttrsBlock {
    pub(crate) labels: Box<dyn LabelSource>,
}

impl Block<TestProps, TestState> for AttrsBlock {
    fn block(&self) -> &str {
        "MyBlock"
    }

    fn mods(&self, props: &TestProps, _state: &TestState) -> Mods {
        Mods::new().with("disabled", props.disabled)
    }

    fn attrs(&self, props: &TestProps, state: &TestState) -> Attrs {
        Attrs::new()
            .with("aria-labelledby", props.aria_labelled_by.as_str())
            .with("aria-label", self.labels.label_for(&props.id))
            .with("id", props.id.as_str())
            .with("name", state.name.as_str())
    }
}

/// Component with no hooks overridden.
pub(crate) struct PlainBlock;

impl Block<()> for PlainBlock {
    fn block(&self) -> &str {
        "MyBlock"
    }
}

/// Component declaring its own tag.
pub(crate) struct LinkBlock;

impl Block<()> for LinkBlock {
    fn block(&self) -> &str {
        "MyBlock"
    }

    fn tag(&self, _props: &(), _state: &()) -> Cow<'static, str> {
        Cow::Borrowed("a")
    }
}

/// Component declaring a base style in `attrs` and an override in `style`.
pub(crate) struct StyledBlock;

impl Block<()> for StyledBlock {
    fn block(&self) -> &str {
        "MyBlock"
    }

    fn attrs(&self, _props: &(), _state: &()) -> Attrs {
        Attrs::new().with(
            "style",
            Style::new().with("font", "bold").with("color", "green"),
        )
    }

    fn style(&self, _props: &(), _state: &()) -> Style {
        Style::new().with("color", "red").with("background", "blue")
    }
}

/// Element component `Menu__Item`, mixed with a layout element.
pub(crate) struct MenuItem;

impl Block<bool> for MenuItem {
    fn block(&self) -> &str {
        "Menu"
    }

    fn elem(&self) -> Option<&str> {
        Some("Item")
    }

    fn mods(&self, active: &bool, _state: &()) -> Mods {
        Mods::new().with("active", *active)
    }

    fn mix(&self, _active: &bool, _state: &()) -> Vec<Entity> {
        vec![Entity::elem("Layout", "Cell").unwrap()]
    }

    fn tag(&self, _active: &bool, _state: &()) -> Cow<'static, str> {
        Cow::Borrowed("li")
    }

    fn attrs(&self, _active: &bool, _state: &()) -> Attrs {
        Attrs::new().with("class", "menu-item").with("role", "menuitem")
    }
}

/// Component with an empty block name.
pub(crate) struct NamelessBlock;

impl Block<()> for NamelessBlock {
    fn block(&self) -> &str {
        ""
    }
}
