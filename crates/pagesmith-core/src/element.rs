//! Element definitions for the page canvas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a placed element.
pub type ElementId = u64;

/// Default content for a freshly dropped text element.
pub const DEFAULT_TEXT_CONTENT: &str = "Edit me";
/// Default source for a freshly dropped image element.
pub const DEFAULT_IMAGE_SRC: &str = "https://imagelink.com/150";
/// Default label for a freshly dropped button element.
pub const DEFAULT_BUTTON_LABEL: &str = "Click me";

/// Errors from parsing element kinds and field names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown element kind: {0:?}")]
    UnknownKind(String),
    #[error("Unknown field: {0:?}")]
    UnknownField(String),
}

/// The closed set of placeable component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Button,
}

impl ElementKind {
    /// All kinds, in palette order.
    pub const ALL: [ElementKind; 3] = [ElementKind::Text, ElementKind::Image, ElementKind::Button];

    /// Name used in drag payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
        }
    }

    /// The payload a new element of this kind starts with.
    pub fn default_payload(self) -> Payload {
        match self {
            ElementKind::Text => Payload::Text {
                content: DEFAULT_TEXT_CONTENT.to_string(),
            },
            ElementKind::Image => Payload::Image {
                src: DEFAULT_IMAGE_SRC.to_string(),
            },
            ElementKind::Button => Payload::Button {
                label: DEFAULT_BUTTON_LABEL.to_string(),
            },
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ElementKind::Text),
            "image" => Ok(ElementKind::Image),
            "button" => Ok(ElementKind::Button),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// Name of an editable payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Text body.
    Content,
    /// Image URL.
    Src,
    /// Button caption.
    Label,
}

impl Field {
    /// The single field that is meaningful for `kind`.
    pub fn for_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Field::Content,
            ElementKind::Image => Field::Src,
            ElementKind::Button => Field::Label,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Content => "content",
            Field::Src => "src",
            Field::Label => "label",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Field::Content),
            "src" => Ok(Field::Src),
            "label" => Ok(Field::Label),
            other => Err(ParseError::UnknownField(other.to_string())),
        }
    }
}

/// Kind-specific content of an element.
///
/// Each variant carries only the field its kind uses, so the kind of an
/// element can always be read back from its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    Text { content: String },
    Image { src: String },
    Button { label: String },
}

impl Payload {
    /// Get the kind this payload belongs to.
    pub fn kind(&self) -> ElementKind {
        match self {
            Payload::Text { .. } => ElementKind::Text,
            Payload::Image { .. } => ElementKind::Image,
            Payload::Button { .. } => ElementKind::Button,
        }
    }

    /// Get the active field name.
    pub fn field(&self) -> Field {
        Field::for_kind(self.kind())
    }

    /// Get the active field value.
    pub fn value(&self) -> &str {
        match self {
            Payload::Text { content } => content,
            Payload::Image { src } => src,
            Payload::Button { label } => label,
        }
    }

    /// Apply the part of `patch` that targets this payload's field.
    /// Returns true if the stored value changed.
    pub fn apply(&mut self, patch: &ElementPatch) -> bool {
        let (slot, incoming) = match self {
            Payload::Text { content } => (content, patch.content.as_ref()),
            Payload::Image { src } => (src, patch.src.as_ref()),
            Payload::Button { label } => (label, patch.label.as_ref()),
        };
        match incoming {
            Some(value) if *value != *slot => {
                slot.clone_from(value);
                true
            }
            _ => false,
        }
    }
}

/// A partial set of payload field changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ElementPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a patch that sets a single field.
    pub fn field(field: Field, value: impl Into<String>) -> Self {
        Self::new().with(field, value)
    }

    /// Set `field` to `value`.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            Field::Content => self.content = value,
            Field::Src => self.src = value,
            Field::Label => self.label = value,
        }
        self
    }

    /// Set the text content.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        self.with(Field::Content, content)
    }

    /// Set the image source.
    pub fn with_src(self, src: impl Into<String>) -> Self {
        self.with(Field::Src, src)
    }

    /// Set the button label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.with(Field::Label, label)
    }
}

/// One placed instance on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identifier, unique within a session.
    id: ElementId,
    /// Kind-specific content. The variant never changes after creation.
    payload: Payload,
}

impl Element {
    /// Create an element of `kind` with its default payload.
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            payload: kind.default_payload(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Merge a patch into the payload. Returns true if anything changed.
    pub(crate) fn apply(&mut self, patch: &ElementPatch) -> bool {
        self.payload.apply(patch)
    }

    /// Value of the active field (content, src or label).
    pub fn value(&self) -> &str {
        self.payload.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("text".parse::<ElementKind>(), Ok(ElementKind::Text));
        assert_eq!("image".parse::<ElementKind>(), Ok(ElementKind::Image));
        assert_eq!("button".parse::<ElementKind>(), Ok(ElementKind::Button));
        assert_eq!(
            "video".parse::<ElementKind>(),
            Err(ParseError::UnknownKind("video".to_string()))
        );
        assert!("".parse::<ElementKind>().is_err());
        assert!("Text".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_default_payloads() {
        assert_eq!(Element::new(1, ElementKind::Text).value(), "Edit me");
        assert_eq!(
            Element::new(2, ElementKind::Image).value(),
            "https://imagelink.com/150"
        );
        assert_eq!(Element::new(3, ElementKind::Button).value(), "Click me");
    }

    #[test]
    fn test_field_for_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.default_payload().field(), Field::for_kind(kind));
        }
        assert_eq!("src".parse::<Field>(), Ok(Field::Src));
        assert!("href".parse::<Field>().is_err());
    }

    #[test]
    fn test_apply_patch_only_touches_active_field() {
        let mut payload = ElementKind::Button.default_payload();
        let patch = ElementPatch::new().with_content("ignored").with_label("Buy");
        assert!(payload.apply(&patch));
        assert_eq!(payload, Payload::Button { label: "Buy".to_string() });

        // Nothing for the button's field
        assert!(!payload.apply(&ElementPatch::new().with_src("x.png")));
        assert_eq!(payload.kind(), ElementKind::Button);

        // Same value is not a change
        assert!(!payload.apply(&ElementPatch::field(Field::Label, "Buy")));
    }

    #[test]
    fn test_payload_serde_shape() {
        let payload = Payload::Image { src: "a.png".to_string() };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"kind":"image","src":"a.png"}"#);
    }
}
