use super::*;
use oxide_bem::{with_mods, AttrValue, BemError, Block, Mods};

#[test]
fn given_no_hooks_should_render_div_with_block_class() {
    let element = PlainBlock.render(&(), &()).unwrap();

    assert_eq!(element.tag(), "div");
    assert_eq!(element.class_name(), "MyBlock");
    assert_eq!(element.props().len(), 1);
}

#[test]
fn given_a_declared_tag_should_render_that_tag() {
    let element = LinkBlock.render(&(), &()).unwrap();

    assert_eq!(element.tag(), "a");
}

#[test]
fn given_declared_attrs_should_reflect_props_and_state() {
    let component = AttrsBlock {
        labels: Box::new(given_a_label_source(1)),
    };

    let element = component.render(&default_props(), &default_state()).unwrap();

    let str_prop = |name: &str| element.prop(name).and_then(AttrValue::as_str);
    assert_eq!(str_prop("aria-labelledby"), Some("address"));
    assert_eq!(str_prop("aria-label"), Some("label for the-id"));
    assert_eq!(str_prop("id"), Some("the-id"));
    assert_eq!(str_prop("name"), Some("the-name"));
    assert_eq!(element.class_name(), "MyBlock");
}

#[test]
fn given_a_declared_style_should_override_the_attrs_style() {
    let element = StyledBlock.render(&(), &()).unwrap();
    let style = element.style().expect("style attribute is set");

    assert_eq!(style.get("font"), Some("bold"));
    assert_eq!(style.get("color"), Some("red"));
    assert_eq!(style.get("background"), Some("blue"));
    assert_eq!(style.len(), 3);
}

#[test]
fn given_an_element_component_should_combine_bem_mix_and_caller_classes() {
    let element = MenuItem.render(&true, &()).unwrap();

    assert_eq!(element.tag(), "li");
    assert_eq!(
        element.class_name(),
        "Menu__Item Menu__Item--active Layout__Cell menu-item"
    );
    assert_eq!(element.prop("role").and_then(AttrValue::as_str), Some("menuitem"));
}

#[test]
fn given_a_truthy_modifier_from_props_should_add_modifier_class() {
    let component = AttrsBlock {
        labels: Box::new(given_a_label_source(2)),
    };
    let mut props = default_props();

    let enabled = component.render(&props, &default_state()).unwrap();
    props.disabled = true;
    let disabled = component.render(&props, &default_state()).unwrap();

    assert_eq!(enabled.class_name(), "MyBlock");
    assert_eq!(disabled.class_name(), "MyBlock MyBlock--disabled");
}

#[test]
fn given_identical_props_and_state_when_rendered_twice_should_be_identical() {
    let component = AttrsBlock {
        labels: Box::new(given_a_label_source(2)),
    };

    let first = component.render(&default_props(), &default_state()).unwrap();
    let second = component.render(&default_props(), &default_state()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_with_mods_decorator_should_add_modifiers_after_inner_ones() {
    let component = with_mods(MenuItem, |active: &bool, _: &()| {
        Mods::new().with("focused", *active).with("active", "forced")
    });

    let element = component.render(&true, &()).unwrap();

    assert_eq!(
        element.class_name(),
        "Menu__Item Menu__Item--active-forced Menu__Item--focused Layout__Cell menu-item"
    );
    assert_eq!(element.tag(), "li");
}

#[test]
fn given_a_boxed_component_should_render_like_the_inner_one() {
    let component: Box<dyn Block<()>> = Box::new(LinkBlock);

    assert_eq!(component.render(&(), &()).unwrap(), LinkBlock.render(&(), &()).unwrap());
}

#[test]
fn given_an_empty_block_name_should_fail_to_render() {
    assert_eq!(NamelessBlock.render(&(), &()), Err(BemError::EmptyBlock));
}

#[test]
fn given_a_decorator_adding_an_empty_modifier_name_should_fail_to_render() {
    let component = with_mods(PlainBlock, |_: &(), _: &()| Mods::new().with("", true));

    assert_eq!(component.render(&(), &()), Err(BemError::EmptyModifier));
}
