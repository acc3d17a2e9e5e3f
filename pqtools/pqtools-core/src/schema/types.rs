use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
    ops::Deref,
    str::FromStr,
};

use crate::error::SchemaError;

/// Target type of a declared column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeTag {
    #[default]
    String,
    Int64,
    Float64,
    Boolean,
    /// Naive timestamp with microsecond resolution.
    Timestamp,
    /// Calendar date without a time-of-day component.
    Date,
}

impl TypeTag {
    pub const ALL: [TypeTag; 6] = [
        TypeTag::String,
        TypeTag::Int64,
        TypeTag::Float64,
        TypeTag::Boolean,
        TypeTag::Timestamp,
        TypeTag::Date,
    ];

    pub fn type_name(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Int64 => "int64",
            TypeTag::Float64 => "float64",
            TypeTag::Boolean => "boolean",
            TypeTag::Timestamp => "timestamp",
            TypeTag::Date => "date",
        }
    }
}

impl FromStr for TypeTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.type_name() == s)
            .ok_or(())
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One declared column: a name and the type its cells are cast to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub type_tag: TypeTag,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}

/// Ordered, name-unique collection of [`FieldSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaDescriptor(Vec<FieldSpec>);

impl SchemaDescriptor {
    /// Build a descriptor, rejecting duplicate field names.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self(fields))
    }

    pub fn as_slice(&self) -> &[FieldSpec] {
        &self.0
    }

    /// Look up the declared type of `name`.
    pub fn type_of(&self, name: &str) -> Option<TypeTag> {
        self.0
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.type_tag)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|field| field.name.as_str())
    }
}

impl Deref for SchemaDescriptor {
    type Target = [FieldSpec];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[FieldSpec]> for SchemaDescriptor {
    fn as_ref(&self) -> &[FieldSpec] {
        self.as_slice()
    }
}

impl TryFrom<Vec<FieldSpec>> for SchemaDescriptor {
    type Error = SchemaError;

    fn try_from(value: Vec<FieldSpec>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for SchemaDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for field in self.iter() {
            writeln!(f, "{}: {}", field.name, field.type_tag)?;
        }
        Ok(())
    }
}
