//! Structural descriptors for generated payload types.
//!
//! Every concrete payload in the generated catalog carries a static
//! [`MessageDescriptor`] describing its fields: names, wire types and
//! cardinality, plus nested message and enum descriptors. The codec and
//! schema extractor walk these descriptors instead of reflecting over the
//! Rust types themselves.
//!
//! Descriptors are plain `static` data. Message fields refer to other
//! descriptors by `&'static` reference, so a message can point back at
//! itself without any runtime construction.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Wire type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Bytes,
    Bool,
    Int32,
    Sint32,
    Sfixed32,
    Int64,
    Sint64,
    Sfixed64,
    Uint32,
    Fixed32,
    Uint64,
    Fixed64,
    Float,
    Double,
}

impl ScalarType {
    /// Canonical type tag reported in schema trees.
    ///
    /// Signed/fixed encodings collapse onto the plain integer tag of the
    /// same width and signedness.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
            ScalarType::Bool => "bool",
            ScalarType::Int32 | ScalarType::Sint32 | ScalarType::Sfixed32 => "int32",
            ScalarType::Int64 | ScalarType::Sint64 | ScalarType::Sfixed64 => "int64",
            ScalarType::Uint32 | ScalarType::Fixed32 => "uint32",
            ScalarType::Uint64 | ScalarType::Fixed64 => "uint64",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
        }
    }
}

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Plain field without presence tracking.
    Singular,
    /// Field declared with the explicit `optional` keyword.
    Optional,
    /// List field. Map fields are also repeated on the wire.
    Repeated,
}

/// Value side of a map field.
#[derive(Clone, Copy)]
pub enum MapValue {
    Scalar(ScalarType),
    Enum(&'static EnumDescriptor),
    Message(&'static MessageDescriptor),
}

impl MapValue {
    pub fn type_tag(&self) -> &'static str {
        match self {
            MapValue::Scalar(scalar) => scalar.type_tag(),
            MapValue::Enum(descriptor) => descriptor.name,
            MapValue::Message(descriptor) => descriptor.name,
        }
    }
}

// Referenced descriptors print by name only: a self-referencing message
// would otherwise format forever.
impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapValue::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            MapValue::Enum(descriptor) => f.debug_tuple("Enum").field(&descriptor.name).finish(),
            MapValue::Message(descriptor) => {
                f.debug_tuple("Message").field(&descriptor.name).finish()
            }
        }
    }
}

/// Type of a single field.
#[derive(Clone, Copy)]
pub enum FieldType {
    Scalar(ScalarType),
    Enum(&'static EnumDescriptor),
    Message(&'static MessageDescriptor),
    Map { key: ScalarType, value: MapValue },
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            FieldType::Enum(descriptor) => f.debug_tuple("Enum").field(&descriptor.name).finish(),
            FieldType::Message(descriptor) => {
                f.debug_tuple("Message").field(&descriptor.name).finish()
            }
            FieldType::Map { key, value } => f
                .debug_struct("Map")
                .field("key", key)
                .field("value", value)
                .finish(),
        }
    }
}

impl FieldType {
    /// Type of one element: the field itself for singular fields, one item
    /// for lists. `None` for maps.
    pub fn element(&self) -> Option<MapValue> {
        match *self {
            FieldType::Scalar(scalar) => Some(MapValue::Scalar(scalar)),
            FieldType::Enum(descriptor) => Some(MapValue::Enum(descriptor)),
            FieldType::Message(descriptor) => Some(MapValue::Message(descriptor)),
            FieldType::Map { .. } => None,
        }
    }
}

impl EnumDescriptor {
    /// Find a value by its declared number.
    pub fn by_number(&self, number: i64) -> Option<&'static EnumValueDescriptor> {
        self.values
            .iter()
            .find(|value| i64::from(value.number) == number)
    }
}

/// A single field of a message.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// snake_case field name, identical to the JSON key.
    pub name: &'static str,
    pub number: u32,
    pub field_type: FieldType,
    pub cardinality: Cardinality,
}

impl FieldDescriptor {
    pub const fn scalar(name: &'static str, number: u32, scalar: ScalarType) -> Self {
        Self {
            name,
            number,
            field_type: FieldType::Scalar(scalar),
            cardinality: Cardinality::Singular,
        }
    }

    pub const fn enumeration(
        name: &'static str,
        number: u32,
        descriptor: &'static EnumDescriptor,
    ) -> Self {
        Self {
            name,
            number,
            field_type: FieldType::Enum(descriptor),
            cardinality: Cardinality::Singular,
        }
    }

    pub const fn message(
        name: &'static str,
        number: u32,
        descriptor: &'static MessageDescriptor,
    ) -> Self {
        Self {
            name,
            number,
            field_type: FieldType::Message(descriptor),
            cardinality: Cardinality::Singular,
        }
    }

    pub const fn map(name: &'static str, number: u32, key: ScalarType, value: MapValue) -> Self {
        Self {
            name,
            number,
            field_type: FieldType::Map { key, value },
            cardinality: Cardinality::Repeated,
        }
    }

    /// Mark the field as a list.
    pub const fn repeated(self) -> Self {
        Self {
            cardinality: Cardinality::Repeated,
            ..self
        }
    }

    /// Mark the field with the explicit `optional` keyword.
    pub const fn optional(self) -> Self {
        Self {
            cardinality: Cardinality::Optional,
            ..self
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self.field_type, FieldType::Map { .. })
    }

    /// True for list fields. Maps are not reported as repeated.
    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated && !self.is_map()
    }

    pub fn has_optional_keyword(&self) -> bool {
        self.cardinality == Cardinality::Optional
    }

    /// Type tag as reported in schema trees.
    pub fn type_tag(&self) -> &'static str {
        match self.field_type {
            FieldType::Scalar(scalar) => scalar.type_tag(),
            FieldType::Enum(descriptor) => descriptor.name,
            FieldType::Message(descriptor) => descriptor.name,
            FieldType::Map { .. } => "map",
        }
    }
}

/// A message type: an ordered list of fields.
#[derive(Debug)]
pub struct MessageDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A single named enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValueDescriptor {
    pub name: &'static str,
    pub number: i32,
}

/// An enum type: its value names in declaration order.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: &'static [EnumValueDescriptor],
}

impl EnumDescriptor {
    /// Value names, dropping the `*unspecified` zero sentinel.
    pub fn specified_values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values
            .iter()
            .map(|value| value.name)
            .filter(|name| !name.ends_with("unspecified"))
    }
}

/// A concrete payload type from the generated catalog.
///
/// Implementors serialize with snake_case keys and omit default-valued
/// fields, so a decoded payload re-encodes to exactly its populated fields.
pub trait Payload:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    fn descriptor() -> &'static MessageDescriptor;
}
