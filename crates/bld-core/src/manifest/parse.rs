//! Nest-style manifest structures (info.json).
//!
//! The manifest is a JSON object mapping a category name to a list of
//! commands; the only datum used downstream is the nested `zipURL`.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Top-level manifest: ordered `(category, commands)` pairs.
///
/// A JSON object deserializes here into an explicitly ordered list instead of
/// a hash map so that URL processing order is deterministic and follows the
/// document.
#[derive(Debug)]
pub struct NestManifest {
    pub categories: Vec<(String, Vec<Command>)>,
}

/// One installable command; carries the nested bundle source.
#[derive(Debug, Deserialize)]
pub struct Command {
    pub manufacturer: Manufacturer,
}

#[derive(Debug, Deserialize)]
pub struct Manufacturer {
    #[serde(rename = "artifactBundle")]
    pub artifact_bundle: ArtifactBundle,
}

#[derive(Debug, Deserialize)]
pub struct ArtifactBundle {
    #[serde(rename = "sourceInfo")]
    pub source_info: SourceInfo,
}

#[derive(Debug, Deserialize)]
pub struct SourceInfo {
    #[serde(rename = "zipURL")]
    pub zip_url: String,
}

impl<'de> Deserialize<'de> for NestManifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, Vec<Command>)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to command list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, commands)) = map.next_entry::<String, Vec<Command>>()? {
                    pairs.push((category, commands));
                }
                Ok(pairs)
            }
        }

        deserializer
            .deserialize_map(PairsVisitor)
            .map(|categories| NestManifest { categories })
    }
}
