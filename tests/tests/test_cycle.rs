// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::cell::RefCell;
use std::rc::Rc;

use glaze::{Error, Glaze, GlazeObject};

#[derive(GlazeObject, Debug)]
struct SelfReferential {
    children: Vec<Rc<RefCell<SelfReferential>>>,
}

fn node() -> Rc<RefCell<SelfReferential>> {
    Rc::new(RefCell::new(SelfReferential {
        children: Vec::new(),
    }))
}

#[test]
fn test_self_cycle_is_rejected() {
    let glaze = Glaze::new();
    let a = node();
    a.borrow_mut().children.push(a.clone());
    let err = glaze.to_json(&a).unwrap_err();
    assert!(matches!(err, Error::Cycle(_)));
}

#[test]
fn test_two_node_cycle_is_rejected() {
    let glaze = Glaze::new();
    let a = node();
    let b = node();
    a.borrow_mut().children.push(b.clone());
    b.borrow_mut().children.push(a.clone());
    let err = glaze.to_json(&a).unwrap_err();
    assert!(matches!(err, Error::Cycle(_)));
}

#[test]
fn test_directed_acyclic_graph_is_accepted() {
    let glaze = Glaze::new();
    let a = node();
    let b = node();
    let c = node();
    a.borrow_mut().children.push(b.clone());
    a.borrow_mut().children.push(c.clone());
    b.borrow_mut().children.push(c.clone());
    // The shared node appears in full at both of its positions.
    assert_eq!(
        glaze.to_json(&a).unwrap(),
        r#"{"children":[{"children":[{"children":[]}]},{"children":[]}]}"#
    );
}

#[test]
fn test_empty_children_serialize_as_empty_array() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&node()).unwrap(), r#"{"children":[]}"#);
}

#[derive(GlazeObject, Debug, PartialEq)]
struct Tagged {
    tag: i32,
}

#[test]
fn test_equal_but_distinct_siblings_are_both_emitted() {
    let glaze = Glaze::new();
    let twins = vec![Tagged { tag: 1 }, Tagged { tag: 1 }];
    assert_eq!(glaze.to_json(&twins).unwrap(), r#"[{"tag":1},{"tag":1}]"#);
}

#[derive(GlazeObject, Debug)]
struct OverridesEquality {
    linked: Option<Rc<RefCell<OverridesEquality>>>,
}

impl PartialEq for OverridesEquality {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[test]
fn test_cycle_detection_uses_identity_not_equality() {
    let glaze = Glaze::new();

    // Reference back to self: rejected.
    let a = Rc::new(RefCell::new(OverridesEquality { linked: None }));
    a.borrow_mut().linked = Some(a.clone());
    assert!(glaze.to_json(&a).unwrap_err().is_cycle());

    // Equal but distinct: accepted.
    let plain = Rc::new(RefCell::new(OverridesEquality { linked: None }));
    let holder = OverridesEquality {
        linked: Some(plain),
    };
    assert_eq!(glaze.to_json(&holder).unwrap(), r#"{"linked":{}}"#);
}

#[test]
fn test_failed_call_leaves_the_facade_reusable() {
    let glaze = Glaze::new();
    let a = node();
    a.borrow_mut().children.push(a.clone());
    assert!(glaze.to_json(&a).unwrap_err().is_cycle());
    // A fresh call on the same facade starts with a clean ancestor path.
    assert_eq!(glaze.to_json(&node()).unwrap(), r#"{"children":[]}"#);
}
