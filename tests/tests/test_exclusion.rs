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

use glaze::{FieldMarkers, Glaze, GlazeObject};

#[derive(GlazeObject, Debug, PartialEq)]
struct ClassWithTransientFields {
    #[glaze(transient)]
    transient_value: i64,
    value: i64,
}

#[test]
fn test_transient_fields_are_not_serialized() {
    let glaze = Glaze::new();
    let target = ClassWithTransientFields {
        transient_value: 1,
        value: 2,
    };
    assert_eq!(glaze.to_json(&target).unwrap(), r#"{"value":2}"#);
}

#[test]
fn test_transient_fields_are_not_deserialized() {
    let glaze = Glaze::new();
    let rebuilt: ClassWithTransientFields = glaze
        .from_json(r#"{"transient_value":9,"value":2}"#)
        .unwrap();
    assert_eq!(rebuilt.transient_value, 0);
    assert_eq!(rebuilt.value, 2);
}

#[test]
fn test_replacing_the_marker_mask() {
    // An empty mask stops excluding transients.
    let glaze = Glaze::builder()
        .exclude_fields_with_markers(FieldMarkers::empty())
        .build();
    let target = ClassWithTransientFields {
        transient_value: 1,
        value: 2,
    };
    assert_eq!(
        glaze.to_json(&target).unwrap(),
        r#"{"transient_value":1,"value":2}"#
    );
}

#[derive(GlazeObject, Debug, PartialEq)]
struct WithSynthetic {
    #[glaze(synthetic)]
    captured_scope: i32,
    real: i32,
}

#[test]
fn test_synthetic_fields_stay_excluded_under_any_mask() {
    let glaze = Glaze::builder()
        .exclude_fields_with_markers(FieldMarkers::empty())
        .build();
    let target = WithSynthetic {
        captured_scope: 1,
        real: 2,
    };
    assert_eq!(glaze.to_json(&target).unwrap(), r#"{"real":2}"#);
}

#[derive(GlazeObject, Debug, PartialEq)]
#[glaze(local)]
struct FunctionLocal {
    value: i32,
}

#[test]
fn test_local_classes_produce_nothing() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&FunctionLocal { value: 3 }).unwrap(), "");
}

#[test]
fn test_local_class_field_is_omitted() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Holder {
        kept: i32,
        scoped: Option<FunctionLocal>,
    }

    let glaze = Glaze::new();
    let target = Holder {
        kept: 4,
        scoped: Some(FunctionLocal { value: 3 }),
    };
    assert_eq!(glaze.to_json(&target).unwrap(), r#"{"kept":4}"#);
}

#[test]
fn test_adding_a_strategy_never_changes_retained_encodings() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Mixed {
        plain: i64,
        #[glaze(since = 2.0)]
        late: i64,
    }

    let unversioned = Glaze::new();
    let versioned = Glaze::builder().version(1.0).build();
    let target = Mixed { plain: 11, late: 12 };

    let full = unversioned.to_node(&target).unwrap().unwrap();
    let trimmed = versioned.to_node(&target).unwrap().unwrap();
    // The retained member is encoded identically; the key set only shrank.
    assert_eq!(
        full.as_object().unwrap().get("plain"),
        trimmed.as_object().unwrap().get("plain")
    );
    assert!(trimmed.as_object().unwrap().get("late").is_none());
}
