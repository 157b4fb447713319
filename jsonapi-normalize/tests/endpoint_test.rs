mod common;

use crate::common::read_document;
use jsonapi_normalize::{normalize, normalize_value, NormalizeOptions};
use serde_json::json;

#[test]
fn meta_without_links_test() {
    let _ = env_logger::try_init();

    let doc = json!({
        "data": [{
            "type": "post",
            "relationships": { "question": { "data": { "type": "question", "id": "295" } } },
            "id": "2620",
            "attributes": { "text": "hello", "id": 2620 }
        }]
    });
    let result = normalize_value(&doc, &NormalizeOptions::default().with_endpoint("posts/me"))
        .unwrap()
        .into_value();

    assert_eq!(
        result,
        json!({
            "post": {
                "2620": {
                    "id": "2620",
                    "type": "post",
                    "attributes": { "text": "hello", "id": 2620 },
                    "relationships": { "question": { "data": { "type": "question", "id": "295" } } }
                }
            },
            "meta": {
                "posts/me": {
                    "data": [{
                        "id": "2620",
                        "type": "post",
                        "relationships": { "question": { "data": { "type": "question", "id": "295" } } }
                    }]
                }
            }
        })
    );
}

#[test]
fn meta_with_links_test() {
    let _ = env_logger::try_init();

    let doc = read_document("data/paginated_feed.json");
    let store = normalize(&doc, &NormalizeOptions::default().with_endpoint("posts/me")).unwrap();

    assert_eq!(
        store.endpoint_meta("posts/me").unwrap()["links"],
        json!({
            "next": "http://example.com/api/v1/posts/friends_feed/superyuri?page[cursor]=5037",
            "first": "http://api.postie.loc/v1/posts/friends_feed/superyuri?page[cursor]=0"
        })
    );
}

#[test]
fn filter_strips_query_test() {
    let _ = env_logger::try_init();

    let doc = read_document("data/paginated_feed.json");
    let plain = normalize(&doc, &NormalizeOptions::default().with_endpoint("posts/me")).unwrap();
    let queried = normalize(&doc, &NormalizeOptions::default().with_endpoint("posts/me?x=1")).unwrap();

    assert_eq!(plain, queried);
    assert_eq!(plain.endpoint_meta("posts/me"), queried.endpoint_meta("posts/me"));
    assert!(queried.endpoint_meta("posts/me?x=1").is_none());
}

#[test]
fn disabled_filter_partitions_by_query_test() {
    let _ = env_logger::try_init();

    let doc = read_document("data/paginated_feed.json");
    let filtered = normalize(&doc, &NormalizeOptions::default().with_endpoint("posts/me")).unwrap();
    let options = NormalizeOptions::default().with_endpoint("posts/me?x=1").filter_endpoint(false);
    let unfiltered = normalize(&doc, &options).unwrap();

    assert_ne!(filtered, unfiltered);

    let outer = unfiltered.endpoint_meta("posts/me").unwrap();
    let links = doc.links.clone().map(serde_json::Value::Object).unwrap();
    assert_eq!(outer, &json!({ "links": links.clone(), "?x=1": filtered.endpoint_meta("posts/me").unwrap() }));
    assert_eq!(outer["?x=1"]["links"], links);
    assert!(outer["?x=1"]["data"].is_array());
}

#[test]
fn disabled_filter_without_query_partitions_under_empty_key_test() {
    let _ = env_logger::try_init();

    let doc = json!({
        "data": [{ "type": "post", "id": "1" }],
        "links": { "next": "/posts/me?page=2" }
    });
    let options = NormalizeOptions::default().with_endpoint("posts/me").filter_endpoint(false);
    let store = normalize_value(&doc, &options).unwrap();

    assert_eq!(
        store.endpoint_meta("posts/me"),
        Some(&json!({
            "links": { "next": "/posts/me?page=2" },
            "": {
                "data": [{ "id": "1", "type": "post" }],
                "links": { "next": "/posts/me?page=2" }
            }
        }))
    );
}

#[test]
fn links_and_meta_without_data_test() {
    let _ = env_logger::try_init();

    let doc = json!({
        "links": { "next": "/posts?page=2" },
        "meta": { "total-count": 0, "page_info": { "has-more": false } }
    });
    let result = normalize_value(&doc, &NormalizeOptions::default().with_endpoint("/posts?page=1"))
        .unwrap()
        .into_value();

    assert_eq!(
        result,
        json!({
            "meta": {
                "/posts": {
                    "data": {},
                    "links": { "next": "/posts?page=2" },
                    "meta": { "totalCount": 0, "pageInfo": { "hasMore": false } }
                }
            }
        })
    );

    let options = NormalizeOptions::default().with_endpoint("/posts?page=1").camelize_keys(false);
    let result = normalize_value(&doc, &options).unwrap();
    assert_eq!(
        result.endpoint_meta("/posts").unwrap()["meta"],
        json!({ "total-count": 0, "page_info": { "has-more": false } })
    );
}

#[test]
fn empty_endpoint_is_ignored_test() {
    let _ = env_logger::try_init();

    let doc = read_document("data/paginated_feed.json");
    let store = normalize(&doc, &NormalizeOptions::default().with_endpoint("")).unwrap();
    assert!(store.as_map().get("meta").is_none());
}

#[test]
fn compound_document_meta_test() {
    let _ = env_logger::try_init();

    let doc = read_document("data/compound_document.json");

    let options = NormalizeOptions::default()
        .with_endpoint("/post")
        .camelize_keys(false)
        .camelize_type_values(false);
    let store = normalize(&doc, &options).unwrap();
    assert_eq!(
        store.as_map()["meta"],
        json!({
            "/post": {
                "data": [{
                    "type": "question",
                    "id": "29",
                    "relationships": {
                        "post-blocks": { "data": [
                            { "type": "post-block", "id": "4601" },
                            { "type": "post-block", "id": "2454" }
                        ] }
                    }
                }]
            }
        })
    );

    let store = normalize(&doc, &NormalizeOptions::default().with_endpoint("/post")).unwrap();
    assert_eq!(
        store.as_map()["meta"],
        json!({
            "/post": {
                "data": [{
                    "type": "question",
                    "id": "29",
                    "relationships": {
                        "postBlocks": { "data": [
                            { "type": "postBlock", "id": "4601" },
                            { "type": "postBlock", "id": "2454" }
                        ] }
                    }
                }]
            }
        })
    );
}

#[test]
fn options_from_json_test() {
    let _ = env_logger::try_init();

    let doc = read_document("data/paginated_feed.json");
    let options =
        NormalizeOptions::from_json(r#"{ "endpoint": "posts/me?x=1", "filterEndpoint": false }"#).unwrap();
    let store = normalize(&doc, &options).unwrap();
    assert!(store.endpoint_meta("posts/me").unwrap().get("?x=1").is_some());
}
