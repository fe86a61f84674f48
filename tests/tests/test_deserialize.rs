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

use glaze::{Error, Glaze, GlazeObject};
use url::Url;

#[derive(GlazeObject, Debug, PartialEq, Clone)]
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

fn sample() -> BagOfPrimitives {
    BagOfPrimitives {
        int_val: 10,
        long_val: 20,
        bool_val: false,
        str_val: "stringValue".to_string(),
    }
}

#[test]
fn test_object_round_trip() {
    let glaze = Glaze::new();
    let json = glaze.to_json(&sample()).unwrap();
    let rebuilt: BagOfPrimitives = glaze.from_json(&json).unwrap();
    assert_eq!(rebuilt, sample());
}

#[test]
fn test_scalar_round_trips() {
    let glaze = Glaze::new();
    let n: i64 = glaze.from_json(&glaze.to_json(&42i64).unwrap()).unwrap();
    assert_eq!(n, 42);
    let f: f64 = glaze.from_json(&glaze.to_json(&2.5f64).unwrap()).unwrap();
    assert_eq!(f, 2.5);
    let b: bool = glaze.from_json(&glaze.to_json(&true).unwrap()).unwrap();
    assert!(b);
    let s: String = glaze
        .from_json(&glaze.to_json(&"x\ny".to_string()).unwrap())
        .unwrap();
    assert_eq!(s, "x\ny");
    let c: char = glaze.from_json(&glaze.to_json(&'q').unwrap()).unwrap();
    assert_eq!(c, 'q');
}

#[test]
fn test_integral_float_text_narrows_back() {
    // "20" was written for 20.0; it must read back into a float field.
    let glaze = Glaze::new();
    let f: f64 = glaze.from_json("20").unwrap();
    assert_eq!(f, 20.0);
}

#[test]
fn test_collection_round_trips() {
    let glaze = Glaze::new();
    let list = vec![sample(), sample()];
    let rebuilt: Vec<BagOfPrimitives> = glaze.from_json(&glaze.to_json(&list).unwrap()).unwrap();
    assert_eq!(rebuilt, list);

    let fixed = [1u8, 2, 3];
    let rebuilt: [u8; 3] = glaze.from_json(&glaze.to_json(&fixed).unwrap()).unwrap();
    assert_eq!(rebuilt, fixed);
}

#[test]
fn test_url_round_trip() {
    let glaze = Glaze::new();
    let url = Url::parse("http://google.com/").unwrap();
    let rebuilt: Url = glaze.from_json(&glaze.to_json(&url).unwrap()).unwrap();
    assert_eq!(rebuilt, url);
}

#[test]
fn test_absent_fields_keep_their_defaults() {
    let glaze = Glaze::new();
    let rebuilt: BagOfPrimitives = glaze.from_json(r#"{"intVal":7}"#).unwrap();
    assert_eq!(
        rebuilt,
        BagOfPrimitives {
            int_val: 7,
            long_val: 0,
            bool_val: false,
            str_val: String::new(),
        }
    );
}

#[test]
fn test_explicit_null_reads_as_none() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Holder {
        inner: Option<BagOfPrimitives>,
    }

    let glaze = Glaze::new();
    let rebuilt: Holder = glaze.from_json(r#"{"inner":null}"#).unwrap();
    assert_eq!(rebuilt, Holder { inner: None });

    let rebuilt: Holder = glaze.from_json(r#"{}"#).unwrap();
    assert_eq!(rebuilt, Holder { inner: None });
}

#[test]
fn test_empty_text_is_the_null_document() {
    let glaze = Glaze::new();
    let rebuilt: Option<BagOfPrimitives> = glaze.from_json("").unwrap();
    assert_eq!(rebuilt, None);
}

#[test]
fn test_shape_mismatch_is_terminal() {
    let glaze = Glaze::new();
    let err = glaze.from_json::<BagOfPrimitives>("[1,2]").unwrap_err();
    assert!(matches!(err, Error::Mismatch { .. }));
}

#[test]
fn test_field_failures_carry_the_field_name() {
    let glaze = Glaze::new();
    let err = glaze
        .from_json::<BagOfPrimitives>(r#"{"intVal":"ten"}"#)
        .unwrap_err();
    match err {
        Error::Access {
            type_name, field, ..
        } => {
            assert!(type_name.contains("BagOfPrimitives"));
            assert_eq!(field, "int_val");
        }
        other => panic!("expected an access error, got {other}"),
    }
}

#[test]
fn test_out_of_range_numbers_are_mismatches() {
    let glaze = Glaze::new();
    let err = glaze.from_json::<i8>("400").unwrap_err();
    assert!(matches!(err, Error::Mismatch { .. }));
    let err = glaze.from_json::<u32>("-1").unwrap_err();
    assert!(matches!(err, Error::Mismatch { .. }));
}

#[test]
fn test_renamed_fields_read_their_wire_name() {
    let glaze = Glaze::new();
    let rebuilt: BagOfPrimitives = glaze
        .from_json(r#"{"intVal":1,"longVal":2,"boolVal":true,"strVal":"v"}"#)
        .unwrap();
    assert_eq!(rebuilt.int_val, 1);
    assert_eq!(rebuilt.long_val, 2);
    assert!(rebuilt.bool_val);
    assert_eq!(rebuilt.str_val, "v");
    // The declared Rust name is not a wire name once renamed.
    let ignored: BagOfPrimitives = glaze.from_json(r#"{"int_val":5}"#).unwrap();
    assert_eq!(ignored.int_val, 0);
}

#[test]
fn test_nested_structure_round_trip() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Outer {
        name: String,
        bags: Vec<BagOfPrimitives>,
        maybe: Option<Box<BagOfPrimitives>>,
    }

    let glaze = Glaze::new();
    let target = Outer {
        name: "outer".to_string(),
        bags: vec![sample()],
        maybe: Some(Box::new(sample())),
    };
    let rebuilt: Outer = glaze.from_json(&glaze.to_json(&target).unwrap()).unwrap();
    assert_eq!(rebuilt, target);
}

#[test]
fn test_generic_round_trip() {
    #[derive(GlazeObject, Debug, PartialEq)]
    struct Holder<T> {
        value: T,
    }

    let glaze = Glaze::new();
    let ints = Holder { value: 5i64 };
    let rebuilt: Holder<i64> = glaze.from_json(&glaze.to_json(&ints).unwrap()).unwrap();
    assert_eq!(rebuilt, ints);

    let nested = Holder {
        value: vec!["a".to_string(), "b".to_string()],
    };
    let rebuilt: Holder<Vec<String>> = glaze.from_json(&glaze.to_json(&nested).unwrap()).unwrap();
    assert_eq!(rebuilt, nested);
}

#[test]
fn test_datetime_round_trip() {
    let glaze = Glaze::new();
    let day = chrono::NaiveDate::from_ymd_opt(2008, 5, 6).unwrap();
    let rebuilt: chrono::NaiveDate = glaze.from_json(&glaze.to_json(&day).unwrap()).unwrap();
    assert_eq!(rebuilt, day);
}
