//! Records and their named, typed fields.
//!
//! A record is an ordered, growable collection of fields. Field names are
//! unique by convention only: setters always append, and getters return
//! the first exact name match, so a re-set shadows on lookup without
//! updating in place. Callers must not rely on update-in-place semantics
//! for duplicate names.
//!
//! The type tag of a field is carried only by the accessor used. A typed
//! numeric get requires the payload to be exactly 8 bytes, and a string
//! get requires valid UTF-8; anything else is NotFound for that accessor.

use engram_core::payload;
use engram_core::{EngramError, EngramResult};
use serde::{Deserialize, Serialize};

/// One named byte payload inside a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    payload: Vec<u8>,
}

impl Field {
    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw stored bytes, exactly as set.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// An ordered collection of fields.
///
/// Fields are appended only, never removed individually; the record is
/// dropped as a whole with its owning table (or result set).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Create an empty record with zero fields.
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Number of fields, counting duplicates.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// True if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Append a u64 field encoded as 8 little-endian bytes.
    pub fn set_field_u64(&mut self, name: &str, value: u64) -> EngramResult<()> {
        self.append_field(name, payload::encode_u64(value).to_vec())
    }

    /// Append an i64 field encoded as 8 little-endian bytes.
    pub fn set_field_i64(&mut self, name: &str, value: i64) -> EngramResult<()> {
        self.append_field(name, payload::encode_i64(value).to_vec())
    }

    /// Append a string field stored as its UTF-8 bytes.
    pub fn set_field_string(&mut self, name: &str, value: &str) -> EngramResult<()> {
        self.append_field(name, value.as_bytes().to_vec())
    }

    /// Append a binary field stored verbatim.
    pub fn set_field_binary(&mut self, name: &str, data: &[u8]) -> EngramResult<()> {
        self.append_field(name, data.to_vec())
    }

    /// Get the first field named `name` as a u64.
    ///
    /// NotFound if no field matches or the matched payload is not exactly
    /// 8 bytes wide.
    pub fn get_field_u64(&self, name: &str) -> EngramResult<u64> {
        let field = self.find(name)?;
        payload::decode_u64(&field.payload)
            .ok_or_else(|| EngramError::not_found(format!("u64 field '{}'", name)))
    }

    /// Get the first field named `name` as an i64.
    ///
    /// NotFound if no field matches or the matched payload is not exactly
    /// 8 bytes wide.
    pub fn get_field_i64(&self, name: &str) -> EngramResult<i64> {
        let field = self.find(name)?;
        payload::decode_i64(&field.payload)
            .ok_or_else(|| EngramError::not_found(format!("i64 field '{}'", name)))
    }

    /// Get the first field named `name` as a string slice.
    ///
    /// The slice borrows the field's own buffer. NotFound if no field
    /// matches or the matched payload is not valid UTF-8.
    pub fn get_field_string(&self, name: &str) -> EngramResult<&str> {
        let field = self.find(name)?;
        payload::decode_str(&field.payload)
            .ok_or_else(|| EngramError::not_found(format!("string field '{}'", name)))
    }

    /// Get the first field named `name` as raw bytes with exact stored
    /// length. NotFound only if no field matches.
    pub fn get_field_binary(&self, name: &str) -> EngramResult<&[u8]> {
        let field = self.find(name)?;
        Ok(&field.payload)
    }

    fn append_field(&mut self, name: &str, payload: Vec<u8>) -> EngramResult<()> {
        if name.is_empty() {
            return Err(EngramError::invalid_argument(
                "field name must not be empty",
            ));
        }
        self.fields.push(Field {
            name: name.to_string(),
            payload,
        });
        Ok(())
    }

    // First exact name match; width/encoding gates are applied by the
    // typed accessor afterwards, never during the scan.
    fn find(&self, name: &str) -> EngramResult<&Field> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| EngramError::not_found(format!("field '{}'", name)))
    }
}
