use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

/// Declares the closed set of text-block field tags with their wire text.
///
/// Expands to the [`Tag`] enum plus `parse`/`as_str` with one match arm per
/// tag, so the wire text and the variant can never drift apart.
macro_rules! tags {
    ($($variant:ident => $text:literal),+ $(,)?) => {
        /// A text-block field tag: two digits with an optional trailing
        /// option letter.
        ///
        /// The named variants cover every tag used by the registered message
        /// types; anything else decodes to [`Tag::Other`], which carries the
        /// raw tag string so unknown-field warnings stay type-safe.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Tag {
            $(
                #[doc = concat!("Field `", $text, "`.")]
                $variant,
            )+
            /// A tag not used by any registered message type.
            Other(String),
        }

        impl Tag {
            /// Resolve a raw tag string to its variant.
            pub fn parse(s: &str) -> Self {
                match s {
                    $($text => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }

            /// The wire text of this tag (e.g., `"32A"`).
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(s) => s.as_str(),
                }
            }
        }
    };
}

tags! {
    T13C => "13C",
    T20 => "20",
    T21 => "21",
    T23B => "23B",
    T23E => "23E",
    T25 => "25",
    T26T => "26T",
    T28C => "28C",
    T32A => "32A",
    T33B => "33B",
    T36 => "36",
    T50A => "50A",
    T50F => "50F",
    T50K => "50K",
    T52A => "52A",
    T52D => "52D",
    T53A => "53A",
    T53B => "53B",
    T53D => "53D",
    T54A => "54A",
    T54B => "54B",
    T54D => "54D",
    T56A => "56A",
    T56C => "56C",
    T56D => "56D",
    T57A => "57A",
    T57B => "57B",
    T57C => "57C",
    T57D => "57D",
    T58A => "58A",
    T58D => "58D",
    T59 => "59",
    T59A => "59A",
    T59F => "59F",
    T60F => "60F",
    T60M => "60M",
    T61 => "61",
    T62F => "62F",
    T62M => "62M",
    T64 => "64",
    T65 => "65",
    T70 => "70",
    T71A => "71A",
    T71F => "71F",
    T71G => "71G",
    T72 => "72",
    T77B => "77B",
    T86 => "86",
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Tag::parse(&s))
    }
}

/// The value of a text-block field.
///
/// A field spanning a single physical line is a [`FieldValue::Single`]
/// scalar; one spanning two or more lines (continuation) is a
/// [`FieldValue::Lines`] sequence. The distinction is preserved exactly on
/// round-trip: re-joining a `Lines` value with line breaks reproduces the
/// original content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single-line value.
    Single(String),
    /// An ordered sequence of physical lines.
    Lines(Vec<String>),
}

impl FieldValue {
    /// The value with continuation lines joined by a single `\n`.
    ///
    /// This is the form length limits are measured on; the CRLF of the wire
    /// format is framing, not field content.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Single(s) => Cow::Borrowed(s),
            FieldValue::Lines(lines) => Cow::Owned(lines.join("\n")),
        }
    }

    /// The first physical line of the value (empty for an empty value).
    pub fn first_line(&self) -> &str {
        match self {
            FieldValue::Single(s) => s,
            FieldValue::Lines(lines) => lines.first().map_or("", String::as_str),
        }
    }

    /// Number of physical lines.
    pub fn line_count(&self) -> usize {
        match self {
            FieldValue::Single(_) => 1,
            FieldValue::Lines(lines) => lines.len(),
        }
    }

    /// Whether the value carries no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(s) => s.is_empty(),
            FieldValue::Lines(lines) => lines.iter().all(String::is_empty),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Single(s.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(lines: Vec<String>) -> Self {
        FieldValue::Lines(lines)
    }
}

/// Insertion-ordered mapping from field tag to value.
///
/// Within one text block a tag occurs at most once, so inserting an existing
/// tag replaces its value. Iteration yields fields in wire appearance order,
/// which the validator and generator both rely on for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(Tag, FieldValue)>,
}

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any existing value for the same tag.
    pub fn insert(&mut self, tag: Tag, value: FieldValue) {
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, v)) => *v = value,
            None => self.entries.push((tag, value)),
        }
    }

    /// Look up a field by tag.
    pub fn get(&self, tag: &Tag) -> Option<&FieldValue> {
        self.entries.iter().find(|(t, _)| t == tag).map(|(_, v)| v)
    }

    /// Look up a field by its wire tag text (e.g., `"32A"`).
    pub fn get_str(&self, tag: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(t, _)| t.as_str() == tag)
            .map(|(_, v)| v)
    }

    /// Whether a tag is present (regardless of value emptiness).
    pub fn contains(&self, tag: &str) -> bool {
        self.get_str(tag).is_some()
    }

    /// Iterate fields in appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &FieldValue)> {
        self.entries.iter().map(|(t, v)| (t, v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// FieldMap serializes as a JSON map so decoded records read naturally
// (`"20": "REF1"`); entry order is the wire appearance order on both paths.

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tag, value) in &self.entries {
            map.serialize_entry(tag.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from field tag to value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldMap, A::Error> {
                let mut map = FieldMap::new();
                while let Some((tag, value)) = access.next_entry::<String, FieldValue>()? {
                    map.insert(Tag::parse(&tag), value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

/// Insertion-ordered key/value pairs of a user header or trailer block.
///
/// Keys are the fixed 3-character sub-field identifiers (e.g., `"108"`,
/// `"MAC"`). Order is preserved for re-encoding fidelity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubFields {
    entries: Vec<(String, String)>,
}

impl SubFields {
    /// Create an empty sub-field list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sub-field, replacing any existing value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value.into(),
            None => self.entries.push((key, value.into())),
        }
    }

    /// Look up a sub-field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate sub-fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of sub-fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no sub-fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SubFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SubFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SubFieldsVisitor;

        impl<'de> Visitor<'de> for SubFieldsVisitor {
            type Value = SubFields;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from sub-field key to value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SubFields, A::Error> {
                let mut subs = SubFields::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    subs.insert(key, value);
                }
                Ok(subs)
            }
        }

        deserializer.deserialize_map(SubFieldsVisitor)
    }
}

impl FromIterator<(String, String)> for SubFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut subs = SubFields::new();
        for (k, v) in iter {
            subs.insert(k, v);
        }
        subs
    }
}

/// Decoded basic header (block 1).
///
/// All components are fixed-width slices of the block content; a truncated
/// header decodes to shortened or empty components, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicHeader {
    /// 1-character application identifier (`F` for FIN).
    pub application_id: String,
    /// 2-character service identifier.
    pub service_id: String,
    /// 12-character logical terminal address.
    pub address: String,
    /// 4-character session number.
    pub session_number: String,
    /// 6-character sequence number.
    pub sequence_number: String,
}

/// Decoded application header (block 2).
///
/// The first character of the block selects the variant: `I` for a message
/// input to the network, `O` for one output from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum AppHeader {
    /// Input (sender → network) variant.
    Input {
        /// 3-digit message type (e.g., `"103"`).
        type_digits: String,
        /// 12-character receiver address.
        receiver: String,
        /// 1-character priority code.
        priority: String,
        /// 1-character delivery monitoring code.
        delivery_monitor: String,
        /// 3-character obsolescence period.
        obsolescence_period: String,
    },
    /// Output (network → receiver) variant.
    Output {
        /// 3-digit message type (e.g., `"103"`).
        type_digits: String,
        /// 4-character input time.
        input_time: String,
        /// 6-character input date.
        input_date: String,
        /// 28-character message input reference.
        message_input_reference: String,
        /// 6-character output date.
        output_date: String,
        /// 4-character output time.
        output_time: String,
        /// 1-character priority code.
        priority: String,
    },
}

impl AppHeader {
    /// The 3-digit message type carried by either variant.
    pub fn type_digits(&self) -> &str {
        match self {
            AppHeader::Input { type_digits, .. } | AppHeader::Output { type_digits, .. } => {
                type_digits
            }
        }
    }
}

/// A fully decoded MT message.
///
/// Every component is owned by the record; decoding the same input twice
/// yields structurally equal records, and no state is shared across decode
/// calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    /// Message type reconstructed from the application header (`"MT"` + the
    /// 3 type digits), or empty when block 2 is absent.
    pub message_type: String,
    /// Decoded basic header; empty components when block 1 is absent.
    pub basic_header: BasicHeader,
    /// Decoded application header, absent when block 2 is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_header: Option<AppHeader>,
    /// User header sub-fields (block 3), empty when absent.
    pub user_header: SubFields,
    /// Ordered text-block fields (block 4).
    pub fields: FieldMap,
    /// Trailer sub-fields (block 5), empty when absent.
    pub trailers: SubFields,
    /// The raw input text this record was decoded from.
    pub raw: String,
}
