#![forbid(unsafe_code)]

//! Integration tests: ordered layouts driven by update descriptions.

use ordo_core::{LayoutConfig, Size};
use ordo_dom::{MemoryTree, StructuralTree};
use ordo_harness::{ScriptedConnection, Uidl, label_uidl, layout_uidl, tree_to_text, uidl_from_json};
use ordo_layout::{AlignmentInfo, Orientation};
use ordo_widgets::{ComponentRef, Error, OrderedLayout, Paintable};
use pretty_assertions::assert_eq;

fn ids(client: &ScriptedConnection, ids: &[&str]) -> Vec<ComponentRef> {
    ids.iter()
        .map(|id| client.component(id).expect("registered"))
        .collect()
}

fn order(layout: &OrderedLayout) -> Vec<ComponentRef> {
    layout.iter().collect()
}

fn apply(layout: &mut OrderedLayout, tree: &mut MemoryTree, client: &mut ScriptedConnection, uidl: &Uidl) {
    layout.apply_update(tree, client, uidl).expect("update applies");
}

/// Children must sit in their wrappers, and wrappers in the holder, in order.
fn assert_structure(layout: &OrderedLayout, tree: &MemoryTree) {
    assert_eq!(layout.child_count(), layout.wrapper_count());
    let holder = tree.children(layout.holder_element());
    assert_eq!(holder.len(), layout.wrapper_count());
    for (i, child) in layout.iter().enumerate() {
        let wrapper = layout.wrapper(i).expect("wrapper");
        assert_eq!(holder[i], wrapper.element());
        assert!(tree.contains(wrapper.element(), child.element()));
    }
}

// ============================================================================
// Reconciliation
// ============================================================================

#[test]
fn swap_insert_and_remove() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);

    let first = layout_uidl("root", ["a", "b", "c"].map(label_uidl));
    apply(&mut layout, &mut tree, &mut client, &first);
    let [a, b, c] = ["a", "b", "c"].map(|id| client.component(id).unwrap());
    let c_label = client.label("c").unwrap();

    let second = layout_uidl("root", ["b", "a", "d"].map(label_uidl));
    apply(&mut layout, &mut tree, &mut client, &second);

    assert_eq!(order(&layout), ids(&client, &["b", "a", "d"]));
    assert_eq!(order(&layout), vec![b, a, client.component("d").unwrap()]);
    // Dropped, not discarded: the connection still knows `c`.
    assert!(client.unregistered().is_empty());
    assert_eq!(client.component("c"), Some(c.clone()));
    assert_eq!(c_label.borrow().detached, 1);
    assert!(tree.is_alive(c.element()));
    assert_eq!(tree.parent(c.element()), None);
    assert_eq!(client.label("d").unwrap().borrow().attached, 1);
    assert_structure(&layout, &tree);
}

#[test]
fn reapplying_a_description_changes_nothing() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    tree.set_offset_size(layout.margin_element(), Size::new(300, 40));

    let uidl = layout_uidl(
        "root",
        [
            label_uidl("a").with_attr("caption", "Name"),
            label_uidl("b").with_attr("required", true),
            label_uidl("c").with_attr("icon", "theme://save.png"),
        ],
    )
    .with_attr("orientation", "horizontal")
    .with_attr("width", "300px")
    .with_attr("margins", 0b1010)
    .with_attr("spacing", true)
    .with_attr("alignments", [5i64, 18, 40]);

    apply(&mut layout, &mut tree, &mut client, &uidl);
    let snapshot = tree_to_text(&tree, layout.root_element());
    let structural = tree.structural_mutations();
    let properties = tree.property_mutations();

    apply(&mut layout, &mut tree, &mut client, &uidl);
    assert_eq!(tree.structural_mutations(), structural);
    assert_eq!(tree.property_mutations(), properties);
    assert_eq!(tree_to_text(&tree, layout.root_element()), snapshot);
    assert_eq!(client.label("a").unwrap().borrow().updates, 2);
}

#[test]
fn repeated_child_descriptions_are_placed_once() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let uidl = layout_uidl("root", ["a", "b", "a"].map(label_uidl));
    apply(&mut layout, &mut tree, &mut client, &uidl);
    assert_eq!(order(&layout), ids(&client, &["a", "b"]));
    assert_structure(&layout, &tree);
}

#[test]
fn cached_layout_description_is_skipped() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    apply(&mut layout, &mut tree, &mut client, &layout_uidl("root", ["a"].map(label_uidl)));

    let cached = layout_uidl("root", []).with_attr("cached", true);
    apply(&mut layout, &mut tree, &mut client, &cached);
    assert_eq!(layout.child_count(), 1);
    assert!(client.unregistered().is_empty());
}

#[test]
fn cached_child_keeps_its_caption() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let captioned = layout_uidl("root", [label_uidl("a").with_attr("caption", "Name")]);
    apply(&mut layout, &mut tree, &mut client, &captioned);

    let cached = layout_uidl(
        "root",
        [Uidl::new("label").with_attr("id", "a").with_attr("cached", true)],
    );
    apply(&mut layout, &mut tree, &mut client, &cached);
    assert!(layout.wrapper(0).unwrap().caption().is_some());
    assert_eq!(client.label("a").unwrap().borrow().updates, 1);
}

// ============================================================================
// Orientation, captions, alignment
// ============================================================================

#[test]
fn orientation_round_trip_restores_structure() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let vertical = layout_uidl("root", ["a", "b", "c"].map(label_uidl))
        .with_attr("spacing", true)
        .with_attr("alignments", [0i64, 0, 0]);
    let horizontal = vertical.clone().with_attr("orientation", "horizontal");

    apply(&mut layout, &mut tree, &mut client, &vertical);
    let before = tree_to_text(&tree, layout.root_element());
    let live = tree.len();

    apply(&mut layout, &mut tree, &mut client, &horizontal);
    assert_eq!(layout.orientation(), Orientation::Horizontal);
    assert_eq!(tree.tag(layout.holder_element()), Some("tr"));
    assert!(tree.has_class(layout.wrapper(1).unwrap().element(), "i-orderedlayout-hspacing"));
    assert_structure(&layout, &tree);

    apply(&mut layout, &mut tree, &mut client, &vertical);
    assert_eq!(order(&layout), ids(&client, &["a", "b", "c"]));
    assert_eq!(tree_to_text(&tree, layout.root_element()), before);
    assert_eq!(tree.len(), live);
}

#[test]
fn orientation_change_runs_a_layout_pass() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    apply(&mut layout, &mut tree, &mut client, &layout_uidl("root", ["a"].map(label_uidl)));
    let a = client.label("a").unwrap();
    let layouts = a.borrow().layouts;

    layout.set_orientation(&mut tree, Orientation::Horizontal);
    assert_eq!(a.borrow().layouts, layouts + 1);
    layout.set_orientation(&mut tree, Orientation::Horizontal);
    assert_eq!(a.borrow().layouts, layouts + 1);
}

#[test]
fn caption_comes_and_goes_without_residue() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let plain = layout_uidl("root", ["a", "b"].map(label_uidl));
    let with_indicator = layout_uidl(
        "root",
        [label_uidl("a"), label_uidl("b").with_attr("required", true)],
    );

    apply(&mut layout, &mut tree, &mut client, &plain);
    let before = tree_to_text(&tree, layout.root_element());
    let live = tree.len();

    apply(&mut layout, &mut tree, &mut client, &with_indicator);
    {
        let wrapper = layout.wrapper(1).unwrap();
        let caption = wrapper.caption().expect("caption shown").element();
        let b = client.component("b").unwrap();
        assert_eq!(tree.children(wrapper.element()), &[b.element(), caption]);
        assert!(tree.has_class(wrapper.element(), "i-orderedlayout-w"));
    }

    apply(&mut layout, &mut tree, &mut client, &plain);
    assert!(layout.wrapper(1).unwrap().caption().is_none());
    assert_eq!(tree_to_text(&tree, layout.root_element()), before);
    assert_eq!(tree.len(), live);
}

#[test]
fn center_then_left_unwraps_cleanly() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let left = (AlignmentInfo::TOP | AlignmentInfo::LEFT).bits() as i64;
    let center = (AlignmentInfo::TOP | AlignmentInfo::HORIZONTAL_CENTER).bits() as i64;
    let children = [label_uidl("a").with_attr("caption", "Name")];

    let uidl = |code: i64| layout_uidl("root", children.clone()).with_attr("alignments", [code]);

    apply(&mut layout, &mut tree, &mut client, &uidl(left));
    let before = tree_to_text(&tree, layout.root_element());
    let live = tree.len();

    apply(&mut layout, &mut tree, &mut client, &uidl(center));
    assert!(layout.wrapper(0).unwrap().is_aligned());
    assert!(tree.len() > live);

    apply(&mut layout, &mut tree, &mut client, &uidl(left));
    assert!(!layout.wrapper(0).unwrap().is_aligned());
    assert_eq!(tree_to_text(&tree, layout.root_element()), before);
    assert_eq!(tree.len(), live);
}

#[test]
fn short_alignment_list_is_reported() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let uidl = layout_uidl("root", ["a", "b", "c"].map(label_uidl)).with_attr("alignments", [0i64]);
    assert_eq!(
        layout.apply_update(&mut tree, &mut client, &uidl),
        Err(Error::AlignmentMismatch {
            children: 3,
            alignments: 1
        })
    );
    assert_eq!(layout.child_count(), 0);
    assert_eq!(client.resolutions(), 0);
}

#[test]
fn mistyped_attribute_is_reported() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let uidl = layout_uidl("root", []).with_attr("spacing", "yes");
    let err = layout.apply_update(&mut tree, &mut client, &uidl).unwrap_err();
    assert!(matches!(err, Error::Uidl(_)));
    assert!(err.to_string().contains("spacing"));
}

// ============================================================================
// Fixed-size distribution
// ============================================================================

#[test]
fn fixed_width_with_spacing_splits_284_pixels() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let uidl = layout_uidl("root", ["a", "b", "c"].map(label_uidl))
        .with_attr("orientation", "horizontal")
        .with_attr("width", "300px")
        .with_attr("spacing", true);

    apply(&mut layout, &mut tree, &mut client, &uidl);
    // Nothing resolved yet: the margin reports zero width.
    assert_eq!(layout.fixed_state().applied(), Some(0));

    tree.set_offset_size(layout.margin_element(), Size::new(300, 20));
    layout.refresh_layout(&mut tree);

    let widths: Vec<_> = (0..3)
        .map(|i| tree.style(layout.wrapper(i).unwrap().element(), "width"))
        .collect();
    assert_eq!(widths, [Some("95px"), Some("95px"), Some("94px")]);
    let table = tree.parent(tree.parent(layout.holder_element()).unwrap()).unwrap();
    assert_eq!(tree.style(table, "table-layout"), Some("fixed"));
    assert_eq!(tree.style(table, "width"), Some("300px"));

    tree.set_offset_size(layout.margin_element(), Size::new(400, 20));
    layout.refresh_layout(&mut tree);
    assert_eq!(
        tree.style(layout.wrapper(2).unwrap().element(), "width"),
        Some("128px")
    );

    let unsized_uidl = uidl.clone().with_attr("width", "");
    apply(&mut layout, &mut tree, &mut client, &unsized_uidl);
    assert!(!layout.fixed_state().is_enabled());
    assert_eq!(tree.style(table, "table-layout"), Some("auto"));
    assert_eq!(tree.style(table, "width"), None);
    for i in 0..3 {
        let wrapper = layout.wrapper(i).unwrap().element();
        assert_eq!(tree.style(wrapper, "width"), None);
        assert_eq!(tree.style(wrapper, "overflow"), None);
    }
}

#[test]
fn unchanged_size_skips_the_pass() {
    let mut tree = MemoryTree::new();
    let mut layout = OrderedLayout::new(&mut tree);
    let mut client = ScriptedConnection::new();
    tree.set_offset_size(layout.margin_element(), Size::new(10, 90));
    let uidl = layout_uidl("root", ["a", "b"].map(label_uidl)).with_attr("height", "90px");
    apply(&mut layout, &mut tree, &mut client, &uidl);
    let properties = tree.property_mutations();

    layout.refresh_layout(&mut tree);
    layout.refresh_layout(&mut tree);
    assert_eq!(tree.property_mutations(), properties);
}

#[test]
fn added_child_is_sized_and_clipped() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    tree.set_offset_size(layout.margin_element(), Size::new(10, 90));

    let two = layout_uidl("root", ["a", "b"].map(label_uidl)).with_attr("height", "90px");
    apply(&mut layout, &mut tree, &mut client, &two);
    let three = layout_uidl("root", ["a", "b", "c"].map(label_uidl)).with_attr("height", "90px");
    apply(&mut layout, &mut tree, &mut client, &three);

    for i in 0..3 {
        let wrapper = layout.wrapper(i).unwrap().element();
        assert_eq!(tree.style(wrapper, "height"), Some("30px"));
        assert_eq!(tree.style(wrapper, "overflow"), Some("hidden"));
    }
}

#[test]
fn configured_spacing_unit_is_used() {
    let mut tree = MemoryTree::new();
    let config = LayoutConfig::new().class_name("v-box").spacing_unit(4);
    let mut client = ScriptedConnection::with_config(config.clone());
    let mut layout = OrderedLayout::with_config(&mut tree, config);
    tree.set_offset_size(layout.margin_element(), Size::new(0, 100));

    let uidl = layout_uidl("root", ["a", "b", "c"].map(label_uidl))
        .with_attr("height", "100px")
        .with_attr("spacing", true);
    apply(&mut layout, &mut tree, &mut client, &uidl);

    assert_eq!(layout.fixed_state().applied(), Some(92));
    assert!(tree.has_class(layout.root_element(), "v-box"));
    assert!(tree.has_class(layout.wrapper(1).unwrap().element(), "v-box-vspacing"));
}

// ============================================================================
// Container operations
// ============================================================================

#[test]
fn replace_keeps_the_position() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    apply(&mut layout, &mut tree, &mut client, &layout_uidl("root", ["a", "b", "c"].map(label_uidl)));

    let b = client.component("b").unwrap();
    let x = client.register_label(&mut tree, "x", "X");
    layout.replace_child_component(&mut tree, &mut client, &b, x.clone());

    assert_eq!(order(&layout), ids(&client, &["a", "x", "c"]));
    assert_eq!(client.unregistered(), ["b"]);
    assert_eq!(client.label("x").unwrap().borrow().attached, 1);
    assert_structure(&layout, &tree);

    let stranger = client.register_label(&mut tree, "y", "Y");
    layout.replace_child_component(&mut tree, &mut client, &stranger, b);
    assert_eq!(layout.child_count(), 3);
}

#[test]
fn adopting_layout_takes_the_child_from_its_holder() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut first = OrderedLayout::new(&mut tree);
    let mut second = OrderedLayout::new(&mut tree);
    apply(&mut first, &mut tree, &mut client, &layout_uidl("one", ["a"].map(label_uidl)));

    let a = client.component("a").unwrap();
    second.push(&mut tree, a.clone());
    assert!(!first.has_child_component(&a));
    assert_eq!(first.child_count(), 0);
    assert_structure(&first, &tree);
    assert!(tree.contains(second.wrapper(0).unwrap().element(), a.element()));

    apply(&mut first, &mut tree, &mut client, &layout_uidl("one", []));
    assert!(client.unregistered().is_empty());
    assert!(second.has_child_component(&a));

    let label = client.label("a").unwrap();
    assert_eq!(label.borrow().attached, 2);
    assert_eq!(label.borrow().detached, 1);
}

/// `root` holding two sibling layouts `p` and `q`, with `x` in one of them.
fn siblings(first: (&str, &[&str]), second: (&str, &[&str])) -> Uidl {
    fn layout((id, kids): (&str, &[&str])) -> Uidl {
        layout_uidl(id, kids.iter().map(|kid| label_uidl(kid)))
    }
    layout_uidl("root", [layout(first), layout(second)])
}

fn assert_moved_to(
    client: &ScriptedConnection,
    tree: &MemoryTree,
    x: &ComponentRef,
    from: &str,
    to: &str,
) {
    let from = client.layout(from).unwrap();
    let to = client.layout(to).unwrap();
    assert!(!from.borrow().has_child_component(x));
    assert!(to.borrow().has_child_component(x));
    assert!(x.is_held_by(&to.borrow().handle()));
    assert_eq!(client.component("x").as_ref(), Some(x));
    assert!(client.unregistered().is_empty());
    assert_structure(&from.borrow(), tree);
    assert_structure(&to.borrow(), tree);
}

#[test]
fn child_moves_to_a_later_sibling() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut root = OrderedLayout::new(&mut tree);
    apply(&mut root, &mut tree, &mut client, &siblings(("p", &["x"]), ("q", &[])));
    let x = client.component("x").unwrap();

    apply(&mut root, &mut tree, &mut client, &siblings(("p", &[]), ("q", &["x"])));
    assert_moved_to(&client, &tree, &x, "p", "q");
    let label = client.label("x").unwrap();
    assert_eq!(label.borrow().updates, 2);
    assert_eq!(tree.text(x.element()), Some("x"));
}

#[test]
fn child_moves_to_an_earlier_sibling() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut root = OrderedLayout::new(&mut tree);
    apply(&mut root, &mut tree, &mut client, &siblings(("p", &["x"]), ("q", &[])));
    let x = client.component("x").unwrap();

    apply(&mut root, &mut tree, &mut client, &siblings(("q", &["x"]), ("p", &[])));
    assert_moved_to(&client, &tree, &x, "p", "q");
    assert_eq!(client.label("x").unwrap().borrow().detached, 1);
}

#[test]
fn child_moves_between_root_and_nested_layout() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut root = OrderedLayout::new(&mut tree);
    let nested = layout_uidl("root", [layout_uidl("p", [label_uidl("x")])]);
    let flat = layout_uidl("root", [label_uidl("x"), layout_uidl("p", [])]);

    apply(&mut root, &mut tree, &mut client, &nested);
    let x = client.component("x").unwrap();
    let p = client.layout("p").unwrap();

    apply(&mut root, &mut tree, &mut client, &flat);
    assert!(root.has_child_component(&x));
    assert!(!p.borrow().has_child_component(&x));
    assert!(x.is_held_by(&root.handle()));
    assert_structure(&root, &tree);

    // The root is mid-update when `p` adopts `x`; it drops its own entry
    // once the description no longer lists `x`.
    apply(&mut root, &mut tree, &mut client, &nested);
    assert!(!root.has_child_component(&x));
    assert!(p.borrow().has_child_component(&x));
    assert!(x.is_held_by(&p.borrow().handle()));
    assert_structure(&root, &tree);
    assert_structure(&p.borrow(), &tree);
    assert!(client.unregistered().is_empty());
}

#[test]
fn nested_layouts_update_and_relayout() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut outer = OrderedLayout::new(&mut tree);
    let uidl = layout_uidl(
        "outer",
        [
            label_uidl("a"),
            layout_uidl("inner", ["b", "c"].map(label_uidl)).with_attr("orientation", "horizontal"),
        ],
    );
    apply(&mut outer, &mut tree, &mut client, &uidl);

    let inner = client.layout("inner").unwrap();
    assert_eq!(inner.borrow().orientation(), Orientation::Horizontal);
    assert_eq!(order(&inner.borrow()), ids(&client, &["b", "c"]));

    let b = client.label("b").unwrap();
    let layouts = b.borrow().layouts;
    outer.refresh_layout(&mut tree);
    assert_eq!(b.borrow().layouts, layouts + 1);

    let inner_root = inner.borrow().element();
    assert!(tree.contains(outer.root_element(), inner_root));
}

#[test]
fn layout_containing_itself_is_reentrant() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let outer = client.register_layout(&mut tree, "outer");
    let uidl = layout_uidl("outer", [layout_uidl("inner", [layout_uidl("outer", [])])]);

    let result = outer
        .with_mut(|p| p.update_from_uidl(&uidl, &mut tree, &mut client))
        .and_then(|r| r);
    assert_eq!(result, Err(Error::Reentrant));
}

#[test]
fn teardown_orphans_children() {
    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    apply(&mut layout, &mut tree, &mut client, &layout_uidl("root", ["a", "b"].map(label_uidl)));

    layout.teardown(&mut tree);
    assert_eq!(tree.len(), 2);
    assert_eq!(client.label("a").unwrap().borrow().detached, 1);
    assert!(!tree.is_alive(layout.root_element()));
}

// ============================================================================
// JSON fixtures
// ============================================================================

#[test]
fn json_fixtures_drive_a_swap() {
    let before = uidl_from_json(include_str!("fixtures/swap_before.json")).unwrap();
    let after = uidl_from_json(include_str!("fixtures/swap_after.json")).unwrap();

    let mut tree = MemoryTree::new();
    let mut client = ScriptedConnection::new();
    let mut layout = OrderedLayout::new(&mut tree);
    apply(&mut layout, &mut tree, &mut client, &before);
    apply(&mut layout, &mut tree, &mut client, &after);

    assert_eq!(order(&layout), ids(&client, &["b", "a", "d"]));
    assert!(layout.is_spacing_enabled());
    assert!(client.unregistered().is_empty());
    let d = client.component("d").unwrap();
    assert_eq!(tree.text(d.element()), Some("Delta"));
}
