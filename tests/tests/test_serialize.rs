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
use url::Url;

#[derive(GlazeObject, Debug, PartialEq)]
struct BagOfPrimitives {
    #[glaze(rename = "intVal")]
    int_val: i32,
    #[glaze(rename = "longVal")]
    long_val: i64,
    #[glaze(rename = "boolVal")]
    bool_val: bool,
    #[glaze(rename = "strVal")]
    str_val: String,
}

impl BagOfPrimitives {
    fn sample() -> BagOfPrimitives {
        BagOfPrimitives {
            int_val: 10,
            long_val: 20,
            bool_val: false,
            str_val: "stringValue".to_string(),
        }
    }
}

#[derive(GlazeObject, Debug, PartialEq)]
struct ClassWithNoFields {}

#[derive(GlazeObject, Debug, PartialEq)]
struct Nested {
    primitive1: Option<BagOfPrimitives>,
    primitive2: Option<BagOfPrimitives>,
}

#[test]
fn test_class_with_no_fields() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&ClassWithNoFields {}).unwrap(), "{}");
}

#[test]
fn test_bag_of_primitives() {
    let glaze = Glaze::new();
    assert_eq!(
        glaze.to_json(&BagOfPrimitives::sample()).unwrap(),
        r#"{"intVal":10,"longVal":20,"boolVal":false,"strVal":"stringValue"}"#
    );
}

#[test]
fn test_string_value() {
    let glaze = Glaze::new();
    let value = "someRandomStringValue".to_string();
    assert_eq!(glaze.to_json(&value).unwrap(), "\"someRandomStringValue\"");
}

#[test]
fn test_primitive_integer() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&1i32).unwrap(), "1");
}

#[test]
fn test_primitive_boolean() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&true).unwrap(), "true");
    assert_eq!(glaze.to_json(&false).unwrap(), "false");
}

#[test]
fn test_floats_drop_integral_fraction() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&20.0f64).unwrap(), "20");
    assert_eq!(glaze.to_json(&2.5f64).unwrap(), "2.5");
}

#[test]
fn test_array_of_one_value() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&[1i32]).unwrap(), "[1]");
}

#[test]
fn test_array() {
    let glaze = Glaze::new();
    let target = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(glaze.to_json(&target).unwrap(), "[1,2,3,4,5,6,7,8,9]");
}

#[test]
fn test_collection() {
    let glaze = Glaze::new();
    let target: Vec<i32> = (1..=9).collect();
    assert_eq!(glaze.to_json(&target).unwrap(), "[1,2,3,4,5,6,7,8,9]");
}

#[test]
fn test_empty_array() {
    let glaze = Glaze::new();
    let target: [i32; 0] = [];
    assert_eq!(glaze.to_json(&target).unwrap(), "[]");
}

#[test]
fn test_null() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&None::<BagOfPrimitives>).unwrap(), "");
}

#[test]
fn test_null_fields_are_omitted() {
    let glaze = Glaze::new();
    let target = Nested {
        primitive1: Some(BagOfPrimitives::sample()),
        primitive2: None,
    };
    assert_eq!(
        glaze.to_json(&target).unwrap(),
        r#"{"primitive1":{"intVal":10,"longVal":20,"boolVal":false,"strVal":"stringValue"}}"#
    );
}

#[test]
fn test_nested() {
    let glaze = Glaze::new();
    let target = Nested {
        primitive1: Some(BagOfPrimitives::sample()),
        primitive2: Some(BagOfPrimitives {
            int_val: 30,
            long_val: 40,
            bool_val: true,
            str_val: "stringValue".to_string(),
        }),
    };
    assert_eq!(
        glaze.to_json(&target).unwrap(),
        concat!(
            r#"{"primitive1":{"intVal":10,"longVal":20,"boolVal":false,"strVal":"stringValue"},"#,
            r#""primitive2":{"intVal":30,"longVal":40,"boolVal":true,"strVal":"stringValue"}}"#
        )
    );
}

#[test]
fn test_default_support_for_url() {
    let glaze = Glaze::new();
    let url = Url::parse("http://google.com/").unwrap();
    assert_eq!(glaze.to_json(&url).unwrap(), "\"http://google.com/\"");
}

#[test]
fn test_char_renders_as_single_character_string() {
    let glaze = Glaze::new();
    assert_eq!(glaze.to_json(&'x').unwrap(), "\"x\"");
}

#[derive(GlazeObject, Debug, PartialEq)]
struct PrimitiveArray {
    longs: Vec<i64>,
}

#[test]
fn test_primitive_array_field() {
    let glaze = Glaze::new();
    let target = PrimitiveArray {
        longs: vec![1, 2, 3],
    };
    assert_eq!(glaze.to_json(&target).unwrap(), r#"{"longs":[1,2,3]}"#);
}

#[derive(GlazeObject, Debug, PartialEq)]
struct ArrayOfObjects {
    elements: Vec<ClassWithNoFields>,
}

#[test]
fn test_array_of_objects() {
    let glaze = Glaze::new();
    let target = ArrayOfObjects {
        elements: vec![ClassWithNoFields {}, ClassWithNoFields {}],
    };
    assert_eq!(glaze.to_json(&target).unwrap(), r#"{"elements":[{},{}]}"#);
}

#[test]
fn test_array_of_arrays() {
    let glaze = Glaze::new();
    let target = vec![vec![1, 2], vec![], vec![3]];
    assert_eq!(glaze.to_json(&target).unwrap(), "[[1,2],[],[3]]");
}

#[derive(GlazeObject, Debug, PartialEq)]
struct SubInterfacesOfCollection {
    list: Vec<i32>,
    queue: std::collections::VecDeque<i64>,
    sorted: std::collections::BTreeSet<char>,
}

#[test]
fn test_sub_interfaces_of_collection() {
    let glaze = Glaze::new();
    let target = SubInterfacesOfCollection {
        list: vec![0, 1, 2, 3],
        queue: std::collections::VecDeque::from([0, 1, 2, 3]),
        sorted: std::collections::BTreeSet::from(['a', 'b', 'c', 'd']),
    };
    assert_eq!(
        glaze.to_json(&target).unwrap(),
        r#"{"list":[0,1,2,3],"queue":[0,1,2,3],"sorted":["a","b","c","d"]}"#
    );
}

#[derive(GlazeObject, Debug, PartialEq)]
struct WithDates {
    day: chrono::NaiveDate,
}

#[test]
fn test_dates_render_as_iso_strings() {
    let glaze = Glaze::new();
    let target = WithDates {
        day: chrono::NaiveDate::from_ymd_opt(2008, 5, 6).unwrap(),
    };
    assert_eq!(glaze.to_json(&target).unwrap(), r#"{"day":"2008-05-06"}"#);
}
