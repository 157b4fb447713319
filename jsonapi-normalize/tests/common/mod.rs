use jsonapi_normalize::model::document::Document;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn read_json_file(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {:?}: {}", path, err))
}

#[allow(dead_code)]
pub fn read_document(name: &str) -> Document { read_json_file(name).parse().unwrap() }

#[allow(dead_code)]
pub fn read_value(name: &str) -> Value { serde_json::from_str(&read_json_file(name)).unwrap() }
