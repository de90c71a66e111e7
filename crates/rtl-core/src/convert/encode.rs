//! Whole-value binary encoding.
//!
//! Uses `bincode`'s default layout: fields in declaration order, integers
//! little-endian at their natural width, no padding.  A struct of
//! fixed-width integers therefore encodes to the packed little-endian bytes
//! of its fields.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ConvertError;

/// Encodes `value` as packed little-endian bytes.
///
/// # Errors
///
/// Returns [`ConvertError::Encoding`] if `bincode` cannot serialize the value.
///
/// # Examples
///
/// ```rust
/// use rtl_core::convert::struct_to_bytes;
///
/// #[derive(serde::Serialize)]
/// struct Header {
///     kind: u16,
///     len: u32,
/// }
///
/// let bytes = struct_to_bytes(&Header { kind: 1, len: 0x0102 }).unwrap();
/// assert_eq!(bytes, [0x01, 0x00, 0x02, 0x01, 0x00, 0x00]);
/// ```
pub fn struct_to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ConvertError> {
    bincode::serialize(value).map_err(|e| ConvertError::Encoding(e.to_string()))
}

/// Decodes a value produced by [`struct_to_bytes`].
///
/// # Errors
///
/// Returns [`ConvertError::Encoding`] if the bytes are truncated or invalid.
pub fn bytes_to_struct<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ConvertError> {
    bincode::deserialize(bytes).map_err(|e| ConvertError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u32,
        flags: u8,
        offset: i16,
    }

    #[test]
    fn test_struct_to_bytes_packs_fields_little_endian() {
        // Arrange
        let record = Record {
            id: 0x0A0B_0C0D,
            flags: 0x7F,
            offset: -2,
        };

        // Act
        let bytes = struct_to_bytes(&record).expect("encode");

        // Assert
        assert_eq!(bytes, [0x0D, 0x0C, 0x0B, 0x0A, 0x7F, 0xFE, 0xFF]);
    }

    #[test]
    fn test_bytes_to_struct_restores_value() {
        let record = Record {
            id: 7,
            flags: 1,
            offset: 300,
        };
        let bytes = struct_to_bytes(&record).expect("encode");

        let decoded: Record = bytes_to_struct(&bytes).expect("decode");

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_bytes_to_struct_rejects_truncated_input() {
        let result: Result<Record, _> = bytes_to_struct(&[0x01, 0x02]);

        assert!(matches!(result, Err(ConvertError::Encoding(_))));
    }
}
