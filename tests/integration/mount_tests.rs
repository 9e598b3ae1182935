use super::*;
use oxide_bem::{AttrValue, BemError};

#[test]
fn given_a_mounted_component_should_render_once() {
    let (mount, renderer) = create_mounted_attrs_block(given_a_label_source(1));

    assert!(mount.is_mounted());
    assert_eq!(renderer.count(), 1);
    renderer.with_renders(|renders| {
        assert_eq!(renders[0].tag(), "div");
        assert_eq!(renders[0].class_name(), "MyBlock");
    });
}

#[test]
fn given_a_mounted_component_when_props_change_should_render_again() {
    let (mut mount, renderer) = create_mounted_attrs_block(given_a_label_source(2));

    mount
        .set_props(TestProps {
            id: "other-id".to_string(),
            disabled: true,
            ..default_props()
        })
        .unwrap();

    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert_eq!(renders[1].class_name(), "MyBlock MyBlock--disabled");
        assert_eq!(
            renders[1].prop("aria-label").and_then(AttrValue::as_str),
            Some("label for other-id")
        );
    });
}

#[test]
fn given_a_mounted_component_when_state_changes_should_render_new_state() {
    let (mut mount, renderer) = create_mounted_attrs_block(given_a_label_source(2));

    mount
        .update_state(|state| state.name = "renamed".to_string())
        .unwrap();

    assert_eq!(mount.state().name, "renamed");
    let last = renderer.last().expect("a render was captured");
    assert_eq!(last.prop("name").and_then(AttrValue::as_str), Some("renamed"));
}

#[test]
fn given_an_unmounted_component_when_props_change_should_not_render() {
    let (mut mount, renderer) = create_mounted_attrs_block(given_a_label_source(1));

    mount.unmount();
    mount.set_props(default_props()).unwrap();

    assert!(!mount.is_mounted());
    assert_eq!(renderer.count(), 1);
}

#[test]
fn given_a_mounted_component_when_rendered_again_with_same_inputs_should_be_identical() {
    let (mut mount, renderer) = create_mounted_attrs_block(given_a_label_source(2));

    mount.set_props(default_props()).unwrap();

    renderer.with_renders(|renders| {
        assert_eq!(renders[0], renders[1]);
    });
}

#[test]
fn given_a_component_with_empty_block_should_fail_to_mount() {
    let result = Mount::new(NamelessBlock, (), (), TestRenderer::new());

    assert!(matches!(result, Err(BemError::EmptyBlock)));
}

#[test]
fn given_a_closure_renderer_should_receive_elements() {
    let mut tags = Vec::new();
    {
        let mut mount = Mount::new(LinkBlock, (), (), |element: oxide_bem::Element| {
            tags.push(element.tag().to_string())
        })
        .unwrap();
        mount.mount().unwrap();
        mount.update_state(|_| {}).unwrap();
    }

    assert_eq!(tags, vec!["a".to_string(), "a".to_string()]);
}
