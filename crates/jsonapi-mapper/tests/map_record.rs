mod support;
use support::*;

use jsonapi_mapper::plain::PlainRecord;
use jsonapi_mapper::{encoder, Data, MappingOptions, Pagination, RelationFilter, Template};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn articles_with_comments_only() {
    let encoded = map(
        &article("1"),
        "articles",
        &MappingOptions::new().relations(RelationFilter::only(["comments"])),
    );

    assert_eq!(encoded.ty, "articles");
    assert_eq!(encoded.attributes(), ["title", "body", "comments"]);
    assert_eq!(encoded.relation_names(), ["comments"]);

    let comments = encoded.template.relation("comments").unwrap();
    assert_eq!(comments.attributes, ["body"]);
    assert_eq!(comments.reference, "id");

    let links = comments.relationship_links.as_ref().unwrap();
    assert_eq!(
        links.self_link.resolve("1"),
        "http://localhost:3000/api/articles/1/relationships/comments"
    );
    assert_eq!(
        links.related.resolve("1"),
        "http://localhost:3000/api/articles/1/comments"
    );

    assert_eq!(
        encoded.template.top_level_links.self_link,
        "http://localhost:3000/api/articles"
    );
    assert_eq!(
        encoded.template.data_links.resolve("1"),
        "http://localhost:3000/api/articles/1"
    );
}

#[test]
fn all_relations_by_default() {
    let encoded = mapper()
        .map_default(&article("1"), "articles", &Capture)
        .unwrap();

    assert_eq!(
        encoded.attributes(),
        ["title", "body", "comments", "author"]
    );
    assert_eq!(encoded.relation_names(), ["comments", "author"]);
    assert_eq!(encoded.template.relation("author").unwrap().attributes, ["name"]);
}

#[test]
fn no_relations() {
    let encoded = map(
        &article("1"),
        "articles",
        &MappingOptions::new().relations(false),
    );

    assert_eq!(encoded.attributes(), ["title", "body"]);
    assert!(encoded.template.relations.is_empty());
}

#[test]
fn allowed_set_intersects_loaded_relations() {
    let encoded = map(
        &article("1"),
        "articles",
        &MappingOptions::new().relations(RelationFilter::only(["author", "tags", "editor"])),
    );

    assert_eq!(encoded.attributes(), ["title", "body", "author"]);
    assert_eq!(encoded.relation_names(), ["author"]);
    assert!(!encoded.attributes().contains(&"tags"));
}

#[test]
fn include_relations_replaces_relations() {
    let options = MappingOptions {
        relations: RelationFilter::All,
        include_relations: Some(RelationFilter::only(["author"])),
        ..MappingOptions::default()
    };

    let encoded = map(&article("1"), "articles", &options);

    assert_eq!(encoded.relation_names(), ["author"]);
    // the caller's options are left untouched
    assert_eq!(options.relations, RelationFilter::All);
}

#[test]
fn unloaded_relations_are_not_attributes() {
    let encoded = map(&bare_article("1"), "articles", &MappingOptions::new());

    assert_eq!(encoded.attributes(), ["title", "body"]);
    assert!(encoded.template.relations.is_empty());
}

#[test]
fn empty_to_many_relation() {
    let record = bare_article("1").with_many("comments", Vec::<PlainRecord>::new());
    let encoded = map(&record, "articles", &MappingOptions::new());

    assert_eq!(encoded.attributes(), ["title", "body", "comments"]);
    assert!(encoded.template.relation("comments").unwrap().attributes.is_empty());
}

#[test]
fn snapshot_is_handed_to_encoder() {
    let record = article("1");
    let encoded = map(&record, "articles", &MappingOptions::new());

    assert_eq!(encoded.data["id"], json!("1"));
    assert_eq!(encoded.data["title"], json!("Article 1"));
    assert_eq!(encoded.data["author"], json!({"id": "9", "name": "Ann"}));
    assert_eq!(encoded.data["comments"].as_array().unwrap().len(), 2);
}

#[test]
fn pagination_and_query_links() {
    let options = MappingOptions::new()
        .pagination(Pagination::new(10, 10, 35))
        .query("sort", "-title");

    let encoded = map(&article("1"), "articles", &options);
    let links = &encoded.template.top_level_links;

    assert_eq!(links.self_link, "http://localhost:3000/api/articles?sort=-title");
    assert_eq!(
        links.next.as_deref(),
        Some("http://localhost:3000/api/articles?sort=-title&page%5Boffset%5D=20&page%5Blimit%5D=10")
    );
    assert_eq!(
        links.last.as_deref(),
        Some("http://localhost:3000/api/articles?sort=-title&page%5Boffset%5D=30&page%5Blimit%5D=10")
    );
    assert_eq!(
        encoded.template.data_links.resolve("1"),
        "http://localhost:3000/api/articles/1?sort=-title"
    );
}

#[test]
fn pluralized_links() {
    init_logging();
    let mapper = jsonapi_mapper::Mapper::builder(BASE_URL)
        .pluralize_type(true)
        .build()
        .unwrap();

    let encoded = mapper
        .map_default(&article("1"), "article", &Capture)
        .unwrap();

    assert_eq!(encoded.ty, "article");
    assert_eq!(
        encoded.template.top_level_links.self_link,
        "http://localhost:3000/api/articles"
    );
    assert_eq!(
        encoded.template.data_links.resolve("1"),
        "http://localhost:3000/api/articles/1"
    );
}

#[test]
fn empty_type_fails() {
    let err = mapper()
        .map_default(&article("1"), "", &Capture)
        .unwrap_err();

    assert!(err.is_invalid_resource_type());
}

#[test]
fn unknown_data_fails() {
    struct Opaque;
    impl Data for Opaque {}

    let err = mapper().map_default(&Opaque, "articles", &Capture).unwrap_err();

    assert!(err.is_unsupported_data());
}

#[test]
fn encoder_output_is_returned_unchanged() {
    let document = mapper()
        .map_default(
            &article("1"),
            "articles",
            &encoder::from_fn(|ty: &str, data: Value, template: &Template| {
                Ok(json!({
                    "data": {
                        "type": ty,
                        "id": data["id"],
                        "links": {"self": template.data_links.resolve("1")},
                    }
                }))
            }),
        )
        .unwrap();

    assert_eq!(
        document,
        json!({
            "data": {
                "type": "articles",
                "id": "1",
                "links": {"self": "http://localhost:3000/api/articles/1"},
            }
        })
    );
}

#[test]
fn encoder_failure_carries_context() {
    let err = mapper()
        .map_default(
            &article("1"),
            "articles",
            &encoder::from_fn(|_: &str, _: Value, _: &Template| -> jsonapi_mapper::Result<()> {
                Err(jsonapi_mapper::Error::encode(anyhow::anyhow!("boom")))
            }),
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to encode `articles` document: document encoding failed: boom"
    );
}
