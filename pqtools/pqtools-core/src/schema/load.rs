use std::{fs, io, path::Path};

use serde::Deserialize;

use super::types::{FieldSpec, SchemaDescriptor, TypeTag};
use crate::error::SchemaError;

/// Document formats accepted by [`load_schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

impl SchemaFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(SchemaError::UnsupportedFormat { extension }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    fields: Option<Vec<RawField>>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
}

/// Load a [`SchemaDescriptor`] from a YAML or JSON file.
///
/// The document must hold a top-level `fields` sequence of `{name, type}`
/// entries; `type` defaults to `string`.
pub fn load_schema(path: &Path) -> Result<SchemaDescriptor, SchemaError> {
    let format = SchemaFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SchemaError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SchemaError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_schema(&text, format).map_err(|err| match err {
        ParseFailure::Syntax(detail) => SchemaError::Parse {
            path: path.to_path_buf(),
            detail,
        },
        ParseFailure::Invalid(err) => err,
    })
}

enum ParseFailure {
    Syntax(String),
    Invalid(SchemaError),
}

fn parse_schema(text: &str, format: SchemaFormat) -> Result<SchemaDescriptor, ParseFailure> {
    if text.trim().is_empty() {
        return Err(ParseFailure::Invalid(SchemaError::MissingFieldsKey));
    }

    let document: RawDocument = match format {
        SchemaFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| ParseFailure::Syntax(e.to_string()))?
        }
        SchemaFormat::Json => {
            serde_json::from_str(text).map_err(|e| ParseFailure::Syntax(e.to_string()))?
        }
    };

    let raw_fields = document
        .fields
        .ok_or(ParseFailure::Invalid(SchemaError::MissingFieldsKey))?;

    let mut fields = Vec::with_capacity(raw_fields.len());
    for (index, raw) in raw_fields.into_iter().enumerate() {
        let name = raw
            .name
            .ok_or(ParseFailure::Invalid(SchemaError::MissingFieldName { index }))?;
        let type_tag = match raw.type_name {
            None => TypeTag::String,
            Some(type_name) => type_name.parse::<TypeTag>().map_err(|()| {
                ParseFailure::Invalid(SchemaError::UnknownType {
                    name: name.clone(),
                    type_name,
                })
            })?,
        };
        fields.push(FieldSpec::new(name, type_tag));
    }

    SchemaDescriptor::new(fields).map_err(ParseFailure::Invalid)
}
