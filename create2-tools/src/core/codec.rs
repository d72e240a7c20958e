// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/create2-tools/blob/main/licenses/COPYRIGHT.md

//! Constructor-argument pre-encoding.
//!
//! User input arrives as plain strings. This step only shapes the input
//! for ABI encoding: array types are split on commas and the bytes
//! family is converted from ASCII to hex. Final type coercion (decimal
//! string to integer, hex string to address, ...) happens later in the
//! payload builder.
//!
//! Dispatch is by substring match on the declared type, so any type name
//! containing `bytes` gets the hex treatment. This is intentional and
//! matches the wire behavior the factory expects, but it is a known
//! sharp edge for hypothetical future type names.

use super::artifact::AbiParameter;

/// A pre-encoded value: a single string or, for array types, one string
/// per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodableValue {
    Single(String),
    Many(Vec<String>),
}

impl EncodableValue {
    fn map(self, f: impl Fn(&str) -> String) -> Self {
        match self {
            Self::Single(value) => Self::Single(f(&value)),
            Self::Many(values) => Self::Many(values.iter().map(|v| f(v)).collect()),
        }
    }
}

/// A constructor argument ready for ABI encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArgument {
    pub ty: String,
    pub value: EncodableValue,
}

/// Pre-encodes one user-supplied value against its declared parameter.
///
/// Performs no presence validation; callers gate on readiness before
/// reaching this stage, so an empty required argument never arrives here.
pub fn encode(declared: &AbiParameter, raw: &str) -> EncodedArgument {
    let value = if declared.ty.contains("[]") {
        EncodableValue::Many(arrayify(raw))
    } else {
        EncodableValue::Single(raw.to_owned())
    };
    let value = if declared.ty.contains("bytes") {
        value.map(ascii_to_hex)
    } else {
        value
    };
    EncodedArgument {
        ty: declared.ty.clone(),
        value,
    }
}

/// Splits a comma-separated list, trimming surrounding whitespace. An
/// empty input yields an empty sequence, not a single empty element.
fn arrayify(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|part| part.trim().to_owned()).collect()
}

fn ascii_to_hex(value: &str) -> String {
    format!("0x{}", hex::encode(value.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(ty: &str) -> AbiParameter {
        AbiParameter {
            name: "arg".to_owned(),
            ty: ty.to_owned(),
            internal_type: ty.to_owned(),
        }
    }

    #[test]
    fn plain_types_pass_through_unchanged() {
        for ty in ["uint256", "address", "bool", "string"] {
            let encoded = encode(&param(ty), "some value");
            assert_eq!(encoded.ty, ty);
            assert_eq!(
                encoded.value,
                EncodableValue::Single("some value".to_owned())
            );
        }
    }

    #[test]
    fn array_types_split_on_commas_and_trim() {
        let encoded = encode(&param("uint256[]"), "a, b ,c");
        assert_eq!(
            encoded.value,
            EncodableValue::Many(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
        );
    }

    #[test]
    fn empty_array_input_becomes_empty_sequence() {
        let encoded = encode(&param("uint256[]"), "");
        assert_eq!(encoded.value, EncodableValue::Many(Vec::new()));
    }

    #[test]
    fn bytes_values_are_hexified() {
        let encoded = encode(&param("bytes32"), "ab");
        assert_eq!(encoded.value, EncodableValue::Single("0x6162".to_owned()));
    }

    #[test]
    fn bytes_array_hexifies_every_element() {
        let encoded = encode(&param("bytes[]"), "ab, cd");
        assert_eq!(
            encoded.value,
            EncodableValue::Many(vec!["0x6162".to_owned(), "0x6364".to_owned()])
        );
    }

    #[test]
    fn fixed_size_arrays_are_not_split() {
        // `uint8[3]` carries no `[]` marker, so it is forwarded whole
        // for the underlying coercion to handle.
        let encoded = encode(&param("uint8[3]"), "[1, 2, 3]");
        assert_eq!(
            encoded.value,
            EncodableValue::Single("[1, 2, 3]".to_owned())
        );
    }
}
