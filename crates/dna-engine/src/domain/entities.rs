//! # Domain Entities
//!
//! Trait schemas, resolved attribute maps and the records handed to minting
//! glue.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::PackedEncoder;
use shared_types::{parse_uint256, Dna, Hash, ItemId, SchemaHash, Word, U256};
use std::fmt;

use super::errors::DnaError;
use super::invariants::invariant_valid_schema;

/// One named trait and the number of discrete values it can take.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDefinition {
    /// Trait name, unique within a schema.
    pub name: String,
    /// Number of values; resolved values lie in `[0, cardinality)`.
    pub cardinality: U256,
}

impl TraitDefinition {
    /// Create a trait definition. Validation happens at resolution time.
    pub fn new(name: impl Into<String>, cardinality: impl Into<U256>) -> Self {
        Self {
            name: name.into(),
            cardinality: cardinality.into(),
        }
    }

    /// Build from a textual cardinality (decimal or `0x` hex).
    ///
    /// Negative or zero counts are `InvalidSchema`; anything else that does
    /// not parse as a uint256 is `MalformedInput`.
    pub fn from_text(name: impl Into<String>, cardinality: &str) -> Result<Self, DnaError> {
        let name = name.into();
        let text = cardinality.trim();

        if let Some(magnitude) = text.strip_prefix('-') {
            if !magnitude.is_empty() && magnitude.chars().all(|c| c.is_ascii_digit()) {
                return Err(DnaError::invalid_schema(
                    &name,
                    format!("has non-positive cardinality {text}"),
                ));
            }
        }

        let cardinality = parse_uint256(text)?;
        if cardinality.is_zero() {
            return Err(DnaError::invalid_schema(&name, "has cardinality 0"));
        }
        Ok(Self { name, cardinality })
    }
}

/// An ordered, validated set of trait definitions.
///
/// Order does not affect resolved values (each trait is hashed on its own)
/// but fixes the key order of the JSON attribute map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TraitDefinition>", into = "Vec<TraitDefinition>")]
pub struct TraitSchema {
    traits: Vec<TraitDefinition>,
}

impl TryFrom<Vec<TraitDefinition>> for TraitSchema {
    type Error = DnaError;

    fn try_from(traits: Vec<TraitDefinition>) -> Result<Self, Self::Error> {
        Self::new(traits)
    }
}

impl From<TraitSchema> for Vec<TraitDefinition> {
    fn from(schema: TraitSchema) -> Self {
        schema.traits
    }
}

impl TraitSchema {
    /// Create a schema, rejecting zero cardinalities and empty or repeated
    /// names.
    pub fn new(traits: Vec<TraitDefinition>) -> Result<Self, DnaError> {
        invariant_valid_schema(&traits)?;
        Ok(Self { traits })
    }

    /// Trait definitions in schema order.
    pub fn traits(&self) -> &[TraitDefinition] {
        &self.traits
    }

    /// Number of traits.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Whether the schema has no traits.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Identity of this schema.
    ///
    /// `keccak256(abi.encodePacked(uint256 n, [uint256 len(name_i), string
    /// name_i, uint256 cardinality_i]...))`. The length words make the
    /// encoding injective, so renaming a trait, changing a cardinality or
    /// reordering traits always yields a different hash.
    pub fn schema_hash(&self) -> SchemaHash {
        let mut encoder = PackedEncoder::with_capacity(32 + self.traits.len() * 96);
        encoder.uint256(U256::from(self.traits.len() as u64));
        for def in &self.traits {
            encoder
                .uint256(U256::from(def.name.len() as u64))
                .string(&def.name)
                .uint256(def.cardinality);
        }
        SchemaHash::new(encoder.keccak256())
    }
}

/// Resolved trait values: trait name → decimal string, in schema order.
///
/// Serializes to a JSON object whose keys keep schema order, so two
/// resolutions of the same inputs are byte-identical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: U256) {
        self.entries.push((name, value.to_string()));
    }

    /// Decimal value of a trait.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Numeric value of a trait.
    pub fn value_of(&self, name: &str) -> Option<U256> {
        self.get(name).and_then(|v| U256::from_dec_str(v).ok())
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trait names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of traits.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON object, keys in schema order.
    pub fn to_json(&self) -> Result<String, DnaError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON object produced by [`AttributeMap::to_json`] (or by any
    /// other implementation of the same resolver).
    pub fn from_json(json: &str) -> Result<Self, DnaError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributeMapVisitor;

        impl<'de> Visitor<'de> for AttributeMapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of trait name to decimal string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AttributeMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    if map.get(&name).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate trait {name:?}"
                        )));
                    }
                    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                        return Err(serde::de::Error::custom(format!(
                            "trait {name:?} has non-decimal value {value:?}"
                        )));
                    }
                    map.entries.push((name, value));
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

/// Block-derived entropy supplied by a chain context provider.
///
/// The engine treats these as opaque words and makes no freshness or
/// monotonicity assumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntropy {
    /// Block number.
    pub number: u64,
    /// Block hash.
    pub hash: Hash,
    /// Block timestamp (unix seconds).
    pub timestamp: u64,
}

impl BlockEntropy {
    /// `[number, uint256(hash), timestamp]`, ready to append to a word vector.
    pub fn to_words(&self) -> Vec<Word> {
        vec![
            U256::from(self.number),
            U256::from_big_endian(&self.hash),
            U256::from(self.timestamp),
        ]
    }
}

/// An item whose DNA has been accepted and expanded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedItem {
    /// Item identifier.
    pub item_id: ItemId,
    /// Registered DNA.
    pub dna: Dna,
    /// Resolved traits.
    pub attributes: AttributeMap,
}
