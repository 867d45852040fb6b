#![expect(dead_code, reason = "test types are described, never read")]

use std::collections::HashMap;

use openapi_schema_rs::{
    Describe, Format, GenerateSettings, OpenApiSchemaError, Schema, schema_for,
};
use pretty_assertions::assert_eq;

#[derive(Describe, Default)]
struct Profile {
    #[serde(rename = "nickname")]
    nickname: String,
    #[serde(rename = "age")]
    age: u8,
}

#[derive(Describe, Default)]
struct User {
    #[serde(rename = "id")]
    id: i64,
    #[serde(rename = "profile")]
    profile: Option<Profile>,
    #[serde(rename = "friends")]
    friends: Vec<String>,
    #[serde(rename = "settings")]
    settings: HashMap<String, bool>,
}

fn populated_user() -> User {
    User {
        id: 42,
        profile: Some(Profile {
            nickname: "ferris".to_string(),
            age: 9,
        }),
        friends: vec!["corro".to_string(), "gopher".to_string()],
        settings: HashMap::from([("dark_mode".to_string(), true)]),
    }
}

#[test]
fn output_depends_on_type_not_data() {
    let zero: String = openapi_schema_rs::generate(&User::default()).unwrap();
    let populated: String = openapi_schema_rs::generate(&populated_user()).unwrap();
    let again: String = openapi_schema_rs::generate(&populated_user()).unwrap();
    assert_eq!(zero, populated);
    assert_eq!(populated, again);
}

#[test]
fn null_field_describes_like_present_field() {
    let Some(user) = schema_for::<User>() else {
        panic!("expected a schema for User");
    };
    let actual: &Schema = &user.properties["profile"];
    let expected: Schema = Schema::object()
        .with_property("nickname", Schema::string())
        .with_property("age", Schema::integer());
    assert_eq!(&expected, actual);
    assert_eq!(schema_for::<Profile>().as_ref(), Some(actual));
}

#[test]
fn null_root_describes_like_present_root() {
    let none: String = openapi_schema_rs::generate(&None::<User>).unwrap();
    let some: String = openapi_schema_rs::generate(&Some(populated_user())).unwrap();
    assert_eq!(none, some);
}

#[test]
fn sequence_and_map_describe_element_and_value() {
    let Some(user) = schema_for::<User>() else {
        panic!("expected a schema for User");
    };
    assert_eq!(Schema::array(Schema::string()), user.properties["friends"]);
    assert_eq!(Schema::map(Some(Schema::boolean())), user.properties["settings"]);
}

#[derive(Describe)]
struct Mixed {
    #[serde(rename = "kept")]
    kept: String,
    untagged: String,
    #[serde(rename = "-")]
    dashed: String,
    #[serde(rename = "")]
    blank: String,
    #[serde(rename = "skipped", skip)]
    skipped: String,
    #[serde(rename = "secret")]
    #[openapi(skip)]
    secret: String,
    #[serde(rename = "internal_name")]
    #[openapi(rename = "publicName")]
    renamed: i32,
    #[serde(rename(serialize = "out", deserialize = "in"))]
    directional: bool,
}

#[test]
fn only_fields_with_wire_names_are_documented() {
    let Some(mixed) = schema_for::<Mixed>() else {
        panic!("expected a schema for Mixed");
    };
    let actual: Vec<&str> = mixed.properties.keys().map(String::as_str).collect();
    let expected: Vec<&str> = vec!["kept", "publicName", "out"];
    assert_eq!(expected, actual);
}

#[derive(Describe)]
struct Event {
    #[serde(rename = "at")]
    at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "local")]
    local: chrono::NaiveDateTime,
}

#[test]
fn timestamps_are_strings_and_only_offset_ones_are_date_time() {
    let expected: Schema = Schema::object()
        .with_property("at", Schema::string().with_format(Format::DateTime))
        .with_property("local", Schema::string());
    assert_eq!(Some(expected), schema_for::<Event>());
}

#[derive(Describe)]
struct Page<T> {
    #[serde(rename = "items")]
    items: Vec<T>,
    #[serde(rename = "total")]
    total: u32,
}

#[test]
fn generic_struct_describes_its_argument() {
    let expected: Schema = Schema::object()
        .with_property("items", Schema::array(Schema::number().with_format(Format::Float)))
        .with_property("total", Schema::integer().with_format(Format::Int64));
    assert_eq!(Some(expected), schema_for::<Page<f64>>());
}

#[derive(Describe)]
struct UserId(u64);

#[derive(Describe)]
#[serde(transparent)]
struct Email {
    address: String,
}

#[derive(Describe)]
struct Point(f32, f32);

#[derive(Describe)]
struct Marker;

#[test]
fn newtype_and_transparent_describe_inner_type() {
    assert_eq!(Some(Schema::integer()), schema_for::<UserId>());
    assert_eq!(Some(Schema::string()), schema_for::<Email>());
}

#[test]
fn tuple_and_unit_structs_are_unsupported() {
    assert_eq!(None, schema_for::<Point>());
    assert_eq!(None, schema_for::<Marker>());
}

#[derive(Describe)]
enum Status {
    Active,
    Suspended,
}

#[derive(Describe)]
enum Shape {
    Circle { radius: f64 },
    Square(f64),
}

#[test]
fn unit_enum_is_string_data_enum_is_unsupported() {
    assert_eq!(Some(Schema::string()), schema_for::<Status>());
    assert_eq!(None, schema_for::<Shape>());
}

#[derive(Describe)]
struct Subscription {
    #[serde(rename = "topic")]
    topic: String,
    #[serde(rename = "handler")]
    handler: fn(String) -> bool,
    #[serde(rename = "outbox")]
    outbox: std::sync::mpsc::Sender<String>,
    #[serde(rename = "payload")]
    payload: serde_json::Value,
    #[serde(rename = "shape")]
    shape: Shape,
}

#[test]
fn unsupported_fields_are_silently_omitted() {
    let expected: Schema = Schema::object().with_property("topic", Schema::string());
    assert_eq!(Some(expected), schema_for::<Subscription>());
}

#[test]
fn strict_mode_reports_unsupported_fields() {
    let settings = GenerateSettings {
        deny_unsupported_types: true,
    };
    let result = openapi_schema_rs::schema_document::<Subscription>(&settings);
    let Err(OpenApiSchemaError::UnsupportedTypes(error)) = result else {
        panic!("expected unsupported types error");
    };
    let actual: Vec<&str> = error.issues.iter().map(|i| i.path.as_str()).collect();
    let expected: Vec<&str> = vec![
        "/schema/properties/handler",
        "/schema/properties/outbox",
        "/schema/properties/payload",
        "/schema/properties/shape",
    ];
    assert_eq!(expected, actual);
}

#[derive(Describe)]
struct Attachments {
    #[serde(rename = "tags")]
    tags: Vec<serde_json::Value>,
    #[serde(rename = "meta")]
    meta: HashMap<String, serde_json::Value>,
}

#[test]
fn collections_of_unsupported_values_keep_their_container() {
    let actual: String = openapi_schema_rs::generate(&Attachments {
        tags: Vec::new(),
        meta: HashMap::new(),
    })
    .unwrap();
    let expected: &str = "\
schema:
  type: object
  properties:
    tags:
      type: array
    meta:
      type: object
      additionalProperties: true
";
    assert_eq!(expected, actual);
}

#[test]
fn strict_mode_reports_unsupported_collection_values() {
    let settings = GenerateSettings {
        deny_unsupported_types: true,
    };
    let result = openapi_schema_rs::schema_document::<Attachments>(&settings);
    let Err(OpenApiSchemaError::UnsupportedTypes(error)) = result else {
        panic!("expected unsupported types error");
    };
    let actual: Vec<&str> = error.issues.iter().map(|i| i.path.as_str()).collect();
    let expected: Vec<&str> = vec![
        "/schema/properties/tags/items",
        "/schema/properties/meta/properties/example",
    ];
    assert_eq!(expected, actual);
}

#[derive(Describe)]
#[serde(rename_all = "camelCase")]
struct CamelCased {
    #[serde(rename = "userId")]
    user_id: i32,
    display_name: String,
}

#[test]
fn container_rename_all_does_not_name_fields() {
    let expected: Schema = Schema::object()
        .with_property("userId", Schema::integer().with_format(Format::Int32));
    assert_eq!(Some(expected), schema_for::<CamelCased>());
}

#[test]
fn json_output_matches_yaml_document() {
    let json: String =
        openapi_schema_rs::generate_json(&Profile::default(), &GenerateSettings::default())
            .unwrap();
    let from_json: serde_json::Value = serde_json::from_str(&json).unwrap();
    let expected: serde_json::Value = serde_json::json!({
        "schema": {
            "type": "object",
            "properties": {
                "nickname": { "type": "string" },
                "age": { "type": "integer" }
            }
        }
    });
    assert_eq!(expected, from_json);
}
