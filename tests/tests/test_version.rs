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

use glaze::{Glaze, GlazeObject};

#[derive(GlazeObject, Debug, PartialEq)]
struct Version1 {
    a: i32,
    #[glaze(since = 1.0)]
    b: i32,
}

#[derive(GlazeObject, Debug, PartialEq)]
struct Version1_1 {
    a: i32,
    #[glaze(since = 1.0)]
    b: i32,
    #[glaze(since = 1.1)]
    c: i32,
}

#[derive(GlazeObject, Debug, PartialEq)]
#[glaze(since = 1.2)]
struct Version1_2 {
    d: i32,
}

#[test]
fn test_versioned_classes() {
    let glaze = Glaze::builder().version(1.0).build();
    let v1 = Version1 { a: 0, b: 1 };
    let v1_1 = Version1_1 { a: 0, b: 1, c: 2 };
    // Under a 1.0 ceiling the 1.1 field disappears and both shapes agree.
    assert_eq!(glaze.to_json(&v1).unwrap(), glaze.to_json(&v1_1).unwrap());
    assert_eq!(glaze.to_json(&v1_1).unwrap(), r#"{"a":0,"b":1}"#);
}

#[test]
fn test_version_at_the_ceiling_is_included() {
    let glaze = Glaze::builder().version(1.0).build();
    assert_eq!(
        glaze.to_json(&Version1 { a: 5, b: 6 }).unwrap(),
        r#"{"a":5,"b":6}"#
    );
}

#[test]
fn test_ignore_later_version_class() {
    let glaze = Glaze::builder().version(1.0).build();
    // The whole class is past the ceiling: nothing is produced.
    assert_eq!(glaze.to_json(&Version1_2 { d: 3 }).unwrap(), "");
}

#[test]
fn test_later_version_class_as_a_field_is_omitted() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Holder {
        kept: i32,
        dropped: Option<Version1_2>,
    }

    let glaze = Glaze::builder().version(1.0).build();
    let holder = Holder {
        kept: 1,
        dropped: Some(Version1_2 { d: 3 }),
    };
    assert_eq!(glaze.to_json(&holder).unwrap(), r#"{"kept":1}"#);
}

#[test]
fn test_versioned_glaze_with_unversioned_class() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Unversioned {
        value: i32,
    }

    let glaze = Glaze::builder().version(1.0).build();
    assert_eq!(
        glaze.to_json(&Unversioned { value: 9 }).unwrap(),
        r#"{"value":9}"#
    );
}

#[test]
fn test_no_ceiling_includes_everything() {
    let glaze = Glaze::new();
    assert_eq!(
        glaze.to_json(&Version1_1 { a: 0, b: 1, c: 2 }).unwrap(),
        r#"{"a":0,"b":1,"c":2}"#
    );
    assert_eq!(glaze.to_json(&Version1_2 { d: 3 }).unwrap(), r#"{"d":3}"#);
}

#[test]
fn test_raising_the_ceiling_only_grows_the_key_set() {
    let low = Glaze::builder().version(1.0).build();
    let high = Glaze::builder().version(1.1).build();
    let value = Version1_1 { a: 0, b: 1, c: 2 };

    let low_node = low.to_node(&value).unwrap().unwrap();
    let high_node = high.to_node(&value).unwrap().unwrap();
    let low_keys: Vec<_> = low_node.as_object().unwrap().keys().collect();
    let high_obj = high_node.as_object().unwrap();
    for key in low_keys {
        assert!(high_obj.contains_key(key));
    }
    assert!(high_obj.contains_key("c"));
}

#[test]
fn test_class_version_is_inherited_by_unversioned_fields() {
    #[derive(GlazeObject, Debug, PartialEq)]
    #[glaze(since = 1.1)]
    struct MostlyLate {
        // Inherits 1.1 from the class.
        x: i32,
        // Its own marker wins over the class's.
        #[glaze(since = 0.5)]
        y: i32,
    }

    // The class itself is past the ceiling, so nothing is emitted at all.
    let glaze = Glaze::builder().version(1.0).build();
    assert_eq!(glaze.to_json(&MostlyLate { x: 1, y: 2 }).unwrap(), "");

    // With the class inside the ceiling, field-level inheritance applies.
    let glaze = Glaze::builder().version(1.1).build();
    assert_eq!(
        glaze.to_json(&MostlyLate { x: 1, y: 2 }).unwrap(),
        r#"{"x":1,"y":2}"#
    );
}

#[test]
fn test_version_ceiling_applies_during_deserialization() {
    let glaze = Glaze::builder().version(1.0).build();
    let rebuilt: Version1_1 = glaze.from_json(r#"{"a":7,"b":8,"c":9}"#).unwrap();
    // The past-the-ceiling field keeps its default instead of the wire value.
    assert_eq!(rebuilt, Version1_1 { a: 7, b: 8, c: 0 });
}
