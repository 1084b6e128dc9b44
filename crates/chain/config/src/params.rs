//! Parameter tables attached to hardfork and EIP definitions.

use std::collections::BTreeMap;

/// A single parameter entry.
///
/// Only the value is meaningful to resolution; metadata fields in the wire
/// form are dropped on deserialization. The value accepts a JSON number or a
/// decimal string (large wei amounts are conventionally spelled as strings).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParamEntry {
    /// The parameter value.
    pub v: u64,
}

impl<'de> serde::Deserialize<'de> for ParamEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawValue {
            Number(u64),
            Text(String),
        }

        #[derive(serde::Deserialize)]
        struct RawEntry {
            v: RawValue,
        }

        let entry = RawEntry::deserialize(deserializer)?;
        let v = match entry.v {
            RawValue::Number(v) => v,
            RawValue::Text(text) => text.parse().map_err(serde::de::Error::custom)?,
        };

        Ok(Self { v })
    }
}

/// Parameters of a single topic, by name.
pub type TopicParams = BTreeMap<String, ParamEntry>;

/// Full parameter surface: topic → name → entry.
pub type ParamTable = BTreeMap<String, TopicParams>;

/// Parameter surface of a hardfork definition.
///
/// A definition either inlines its parameter tables or references a list of
/// EIPs that carry them; the two styles are mutually exclusive within a
/// dataset entry.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum HardforkParams {
    /// EIP-referencing style: parameters come from the listed EIPs, applied
    /// in list order.
    Eips {
        /// Referenced EIP numbers.
        eips: Vec<u64>,
    },
    /// Parameter-inlining style.
    Inline(ParamTable),
}

/// Definition of an independently activatable EIP.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EipDef {
    /// Earliest hardfork the EIP may be activated on, in timeline order.
    pub minimum_hardfork: String,
    /// Parameter overrides, topic → name → entry.
    #[serde(flatten)]
    pub params: ParamTable,
}

impl EipDef {
    /// Parameters of `topic`, if the EIP defines the topic.
    pub fn topic(&self, topic: &str) -> Option<&TopicParams> {
        self.params.get(topic)
    }

    /// Value of `(topic, name)`, if the EIP defines it.
    pub fn param(&self, topic: &str, name: &str) -> Option<u64> {
        self.topic(topic)
            .and_then(|topic_params| topic_params.get(name))
            .map(|entry| entry.v)
    }
}
