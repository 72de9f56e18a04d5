mod support;
use support::*;

use jsonapi_mapper::{
    Mapper, MapperConfig, MappingOptions, RelationFilter, RelationTemplate, TemplateOverrides,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn per_call_attributes_override() {
    let encoded = mapper()
        .map_with(
            &article("1"),
            "articles",
            &MappingOptions::new(),
            &TemplateOverrides::new().attributes(["onlyField"]),
            &Capture,
        )
        .unwrap();

    assert_eq!(encoded.attributes(), ["onlyField"]);
    // computed relation templates are kept
    assert_eq!(encoded.relation_names(), ["comments", "author"]);
}

#[test]
fn default_overrides_apply_to_every_call() {
    init_logging();
    let mapper = Mapper::builder(BASE_URL)
        .overrides(TemplateOverrides::new().attributes(["onlyField"]))
        .build()
        .unwrap();

    for data in [article("1"), bare_article("2")] {
        let encoded = mapper.map_default(&data, "articles", &Capture).unwrap();
        assert_eq!(encoded.attributes(), ["onlyField"]);
    }
}

#[test]
fn per_call_overrides_beat_defaults() {
    init_logging();
    let mapper = Mapper::builder(BASE_URL)
        .overrides(
            TemplateOverrides::new()
                .attributes(["fromDefaults"])
                .meta(json!({"source": "defaults"})),
        )
        .build()
        .unwrap();

    let encoded = mapper
        .map_with(
            &article("1"),
            "articles",
            &MappingOptions::new(),
            &TemplateOverrides::new().attributes(["fromCall"]),
            &Capture,
        )
        .unwrap();

    assert_eq!(encoded.attributes(), ["fromCall"]);
    assert_eq!(encoded.template.meta, Some(json!({"source": "defaults"})));
}

#[test]
fn relation_template_override() {
    let mut author = RelationTemplate::new(vec!["email".to_string()]);
    author.included = false;

    let encoded = mapper()
        .map_with(
            &article("1"),
            "articles",
            &MappingOptions::new(),
            &TemplateOverrides::new().relation("author", author.clone()),
            &Capture,
        )
        .unwrap();

    assert_eq!(encoded.template.relation("author"), Some(&author));
    assert_eq!(
        encoded.template.relation("comments").unwrap().attributes,
        ["body"]
    );
}

#[test]
fn overrides_are_not_mutated_across_calls() {
    let mapper = mapper();
    let overrides = TemplateOverrides::new().meta(json!({"page": 1}));
    let options = MappingOptions::new().relations(RelationFilter::only(["author"]));

    let first = mapper
        .map_with(&article("1"), "articles", &options, &overrides, &Capture)
        .unwrap();
    let second = mapper
        .map_with(&article("1"), "articles", &options, &overrides, &Capture)
        .unwrap();

    assert_eq!(first.template, second.template);
    assert_eq!(overrides, TemplateOverrides::new().meta(json!({"page": 1})));
}

#[test]
fn mapper_from_config() {
    init_logging();
    let config = MapperConfig::from_json(
        r#"{
            "baseUrl": "https://api.example.com/v2/",
            "pluralizeType": true,
            "meta": {"copyright": "ACME"}
        }"#,
    )
    .unwrap();

    let mapper = Mapper::from_config(&config).unwrap();
    assert_eq!(mapper.base_url(), "https://api.example.com/v2");

    let encoded = mapper.map_default(&bare_article("1"), "article", &Capture).unwrap();
    assert_eq!(encoded.template.meta, Some(json!({"copyright": "ACME"})));
    assert_eq!(
        encoded.template.data_links.resolve("1"),
        "https://api.example.com/v2/articles/1"
    );
}

#[test]
fn config_rejects_unknown_keys() {
    let err = MapperConfig::from_json(r#"{"baseUrl": "https://x.io", "baseURL": "nope"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn config_with_invalid_base_url() {
    let config = MapperConfig::new("not a url");
    let err = Mapper::from_config(&config).unwrap_err();
    assert!(err.is_invalid_base_url());
}

#[test]
fn concurrent_calls_share_one_mapper() {
    let mapper = mapper();
    let options = MappingOptions::new().relations(RelationFilter::only(["comments"]));

    std::thread::scope(|scope| {
        let handles = (0..8)
            .map(|i| {
                let mapper = &mapper;
                let options = &options;
                scope.spawn(move || {
                    let id = i.to_string();
                    mapper
                        .map(&article(&id), "articles", options, &Capture)
                        .unwrap()
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            let encoded = handle.join().unwrap();
            assert_eq!(encoded.attributes(), ["title", "body", "comments"]);
        }
    });
}
