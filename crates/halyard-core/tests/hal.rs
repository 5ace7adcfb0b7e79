//! HAL projection scenarios exercised over the public API.
//!
//! Each test builds a resource the way an API handler would and checks the
//! exact JSON the projection yields.

use halyard_core::{
    Embedded, HalResource, HalyardError, Link, Links, OneOrMany, RequestUrl, Resource, MEDIA_TYPE,
};
use serde_json::{json, Value};

fn hal_json(resource: &Resource) -> Value {
    serde_json::to_value(resource.to_hal()).expect("serialize")
}

fn self_link(href: &str) -> Links {
    let mut links = Links::new();
    links.insert("self".to_string(), OneOrMany::One(Link::new("self", href)));
    links
}

#[test]
fn single_self_link_with_data() {
    let mut resource = Resource::with_links(self_link("/items/1"));
    resource.field("name", "widget");

    assert_eq!(
        hal_json(&resource),
        json!({
            "_links": { "self": { "href": "/items/1" } },
            "name": "widget"
        })
    );
}

#[test]
fn for_request_synthesizes_the_self_link() {
    let ctx = RequestUrl::new("https://api.example/items/1");
    let resource = Resource::for_request(&ctx, Links::new()).expect("context available");

    assert_eq!(
        hal_json(&resource)["_links"]["self"],
        json!({ "href": "https://api.example/items/1" })
    );
}

#[test]
fn for_request_outside_a_request_surfaces_the_error() {
    let err = Resource::for_request(&RequestUrl::none(), Links::new()).unwrap_err();
    assert!(matches!(err, HalyardError::ContextUnavailable));
}

#[test]
fn chained_links_under_one_rel_collapse_to_a_sequence() {
    let mut resource = Resource::new();
    resource.link("next", "/items/2").link("next", "/items/3");

    assert_eq!(
        hal_json(&resource)["_links"]["next"],
        json!([{ "href": "/items/2" }, { "href": "/items/3" }])
    );
}

#[test]
fn three_links_under_one_rel_keep_call_order() {
    let mut resource = Resource::new();
    resource
        .link("item", "/items/1")
        .link("item", "/items/2")
        .link("item", "/items/3");

    assert_eq!(
        hal_json(&resource)["_links"]["item"],
        json!([
            { "href": "/items/1" },
            { "href": "/items/2" },
            { "href": "/items/3" }
        ])
    );
}

#[test]
fn templated_and_named_links_carry_their_fields() {
    let mut resource = Resource::new();
    resource.link(
        "search",
        Link::new("search", "/search{?q}").templated(true).named("by-query"),
    );

    assert_eq!(
        hal_json(&resource)["_links"]["search"],
        json!({ "href": "/search{?q}", "templated": true, "name": "by-query" })
    );
}

#[test]
fn absent_embedded_section_is_omitted() {
    let resource = Resource::new();
    let value = hal_json(&resource);

    assert!(value.get("_embedded").is_none());
    assert_eq!(value, json!({ "_links": {} }));
}

#[test]
fn empty_embedded_section_still_appears() {
    let mut resource = Resource::new();
    resource.embedded = Some(Embedded::new());

    assert_eq!(hal_json(&resource)["_embedded"], json!({}));
}

#[test]
fn embedding_projects_three_levels_deep() {
    let mut line = Resource::with_links(self_link("/orders/7/lines/1"));
    line.field("sku", "A-100");

    let mut order = Resource::with_links(self_link("/orders/7"));
    order.embed("lines", line);

    let mut customer = Resource::with_links(self_link("/customers/3"));
    customer.embed("orders", order);

    assert_eq!(
        hal_json(&customer),
        json!({
            "_links": { "self": { "href": "/customers/3" } },
            "_embedded": {
                "orders": {
                    "_links": { "self": { "href": "/orders/7" } },
                    "_embedded": {
                        "lines": {
                            "_links": { "self": { "href": "/orders/7/lines/1" } },
                            "sku": "A-100"
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn embedded_collections_collapse_to_arrays() {
    let mut first = Resource::with_links(self_link("/items/1"));
    first.field("name", "widget");
    let mut second = Resource::with_links(self_link("/items/2"));
    second.field("name", "sprocket");

    let mut collection = Resource::with_links(self_link("/items"));
    collection.embed("items", first).embed("items", second);

    assert_eq!(
        hal_json(&collection)["_embedded"]["items"],
        json!([
            {
                "_links": { "self": { "href": "/items/1" } },
                "name": "widget"
            },
            {
                "_links": { "self": { "href": "/items/2" } },
                "name": "sprocket"
            }
        ])
    );
}

#[test]
fn hal_json_body_parses_back_into_the_wire_shape() {
    let mut resource = Resource::with_links(self_link("/items/1"));
    resource.field("count", 2).embed(
        "items",
        Resource::with_links(self_link("/items/1/parts/1")),
    );

    let body = resource.to_hal_json().expect("serialize");
    let back: HalResource = serde_json::from_str(&body).expect("deserialize");
    assert_eq!(back, resource.to_hal());
}

#[test]
fn media_type_matches_the_hal_convention() {
    assert_eq!(MEDIA_TYPE, "application/hal+json");
}
