use crate::prelude::*;

/// Helper trait for objects that travel as canonical byte strings.
pub trait OpalFromToBytes: Sized {
    /// Convert to the canonical byte representation.
    fn opal_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from the canonical byte representation.
    fn opal_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Serde helpers for byte-string objects.
pub mod opal_obj_serde {
    use serde::de::{SeqAccess, Visitor};

    /// A visitor that collects raw bytes from either a byte string or a
    /// sequence of integers (the encoding some formats fall back to).
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            formatter.write_str("a valid binary encoding of an algebraic object")
        }

        fn visit_seq<V>(self, mut seq: V) -> Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = vec![];
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            let mut vec: Vec<u8> = vec![];
            vec.extend_from_slice(v);
            Ok(vec)
        }
    }
}

/// Implement serde traits through [`OpalFromToBytes`].
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_bytes(&$crate::serialization::OpalFromToBytes::opal_to_bytes(
                    self,
                ))
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = deserializer
                    .deserialize_bytes($crate::serialization::opal_obj_serde::BytesVisitor)?;
                $crate::serialization::OpalFromToBytes::opal_from_bytes(bytes.as_slice())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}
