//! Extensible identity registry: tokens, is_a through several bases,
//! sub-object projection.

mod common;

use std::collections::HashSet;

use common::*;
use tola_cast::prelude::*;
use tola_cast::TypeToken;

fn all_tokens() -> [TypeToken; 6] {
    [
        <dyn Object>::type_token(),
        Node::type_token(),
        Container::type_token(),
        Element::type_token(),
        List::type_token(),
        Tree::type_token(),
    ]
}

#[test]
fn test_tokens_are_unique() {
    let tokens: HashSet<TypeToken> = all_tokens().into_iter().collect();
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_tokens_are_stable() {
    assert_eq!(Tree::type_token(), Tree::type_token());
    assert!(std::ptr::eq(Tree::type_info(), Tree::type_token().info()));
}

#[test]
fn test_dynamic_type_equals_static_type() {
    let node = Node { value: 1 };
    let element = Element { node: Node { value: 2 }, index: 0 };
    let tree = common::tree(4, 5, 6);
    assert_eq!(node.dynamic_type(), Node::type_token());
    assert_eq!(element.dynamic_type(), Element::type_token());
    assert_eq!(tree.dynamic_type(), Tree::type_token());

    let viewed: &dyn NodeLike = &tree;
    assert_eq!(viewed.dynamic_type(), Tree::type_token());
}

#[test]
fn test_names_are_qualified() {
    assert!(Tree::type_token().name().ends_with("common::Tree"));
    assert_eq!(<dyn Object>::type_token().name(), "tola_cast::Object");
}

#[test]
fn test_is_a_is_reflexive() {
    let list = List { container: Container { capacity: 1 }, count: 0 };
    assert!(list.is_a(List::type_token()));
    assert!(list.is_a_type::<List>());
}

#[test]
fn test_is_a_through_primary_and_secondary_bases() {
    let tree = common::tree(10, 20, 3);
    assert!(tree.is_a_type::<Container>());
    assert!(tree.is_a_type::<Node>());
    assert!(tree.is_a_type::<dyn Object>());
    assert!(!tree.is_a_type::<List>());
    assert!(!tree.is_a_type::<Element>());
}

#[test]
fn test_is_a_on_unrelated_types() {
    let node = Node { value: 0 };
    let container = Container { capacity: 0 };
    assert!(!node.is_a_type::<Container>());
    assert!(!container.is_a_type::<Node>());
    assert!(!node.is_a_type::<Element>());
}

#[test]
fn test_every_type_derives_from_root() {
    let root = <dyn Object>::type_token();
    for token in all_tokens() {
        assert!(token.derives_from(root), "{token} should derive from the root");
    }
}

#[test]
fn test_is_a_monotone_along_bases() {
    // If T derives from U and U derives from V, T derives from V.
    let tokens = all_tokens();
    for t in tokens {
        for u in tokens {
            for v in tokens {
                if t.derives_from(u) && u.derives_from(v) {
                    assert!(t.derives_from(v), "{t} -> {u} -> {v}");
                }
            }
        }
    }
}

#[test]
fn test_bases_listed_in_declaration_order() {
    let bases: Vec<TypeToken> = Tree::type_info().bases().collect();
    assert_eq!(bases, [Container::type_token(), Node::type_token()]);
    let root: Vec<TypeToken> = Node::type_info().bases().collect();
    assert_eq!(root, [<dyn Object>::type_token()]);
}

#[test]
fn test_upcast_projects_to_embedded_base() {
    let tree = common::tree(10, 20, 3);
    let node = check_cast::<Node, _>(&tree);
    assert!(std::ptr::eq(node, &tree.node));
    let container = check_cast::<Container, _>(&tree);
    assert!(std::ptr::eq(container, &tree.container));
}

#[test]
fn test_mutable_projection_writes_through() {
    let mut tree = common::tree(10, 20, 3);
    {
        let viewed: &mut dyn ContainerLike = &mut tree;
        let node = check_cast::<Node, _>(viewed);
        node.value = 99;
    }
    assert_eq!(tree.node.value, 99);
}
