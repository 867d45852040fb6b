//! Full example matching the README: a data-transfer type with every
//! supported kind, its generated schema, and one serialized instance.
//!
//! Schema and instance are written to stdout.

use std::collections::HashMap;
use std::io;

use chrono::{DateTime, Utc};
use openapi_schema_rs::{Describe, GenerateSettings};
use serde::Serialize;

#[derive(Describe, Serialize)]
struct Tag {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "active")]
    active: bool,
}

#[derive(Describe, Serialize)]
struct Record {
    #[serde(rename = "id")]
    id: String,
    #[serde(rename = "email")]
    email: String,
    #[serde(rename = "score")]
    score: f64,
    #[serde(rename = "visits")]
    visits: i64,
    #[serde(rename = "created_at")]
    created_at: DateTime<Utc>,
    #[serde(rename = "manager")]
    manager: Option<Box<Tag>>,
    #[serde(rename = "tags")]
    tags: Vec<Tag>,
    #[serde(rename = "props")]
    properties: HashMap<String, String>,
    #[serde(skip)]
    cache_key: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let record = Record {
        id: "42".to_string(),
        email: "ferris@example.com".to_string(),
        score: 0.5,
        visits: 7,
        created_at: DateTime::<Utc>::default(),
        manager: None,
        tags: vec![Tag {
            name: "beta".to_string(),
            active: true,
        }],
        properties: HashMap::from([("team".to_string(), "core".to_string())]),
        cache_key: 0,
    };

    let mut stdout: io::Stdout = io::stdout();
    openapi_schema_rs::generate_to_writer(&record, &mut stdout, &GenerateSettings::default())?;

    println!("---");
    println!("{}", serde_json::to_string_pretty(&record)?);
    println!("cache key: {}", record.cache_key);
    Ok(())
}
