//! Drag payloads carried from a drag source to the canvas drop zone.

use crate::element::{ElementKind, ParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding a drag payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Empty drag payload")]
    Empty,
    #[error("Invalid drag payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// What is being dragged.
///
/// The variant decides whether a drop inserts a new element or reorders an
/// existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DragPayload {
    /// A new element from the palette.
    Palette { kind: ElementKind },
    /// An element already on the canvas, at `index`.
    #[serde(rename = "canvas")]
    CanvasItem { index: usize },
}

impl DragPayload {
    /// Encode to the JSON wire form.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from the JSON wire form.
    ///
    /// A bare kind name such as `text` is accepted as a palette payload.
    pub fn decode(data: &str) -> Result<Self, PayloadError> {
        let data = data.trim();
        if data.is_empty() {
            return Err(PayloadError::Empty);
        }
        if data.starts_with('{') {
            return Ok(serde_json::from_str(data)?);
        }
        let kind = data.parse::<ElementKind>()?;
        Ok(DragPayload::Palette { kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form() {
        let palette = DragPayload::Palette { kind: ElementKind::Image };
        assert_eq!(palette.encode().unwrap(), r#"{"source":"palette","kind":"image"}"#);

        let item = DragPayload::CanvasItem { index: 2 };
        assert_eq!(item.encode().unwrap(), r#"{"source":"canvas","index":2}"#);
        assert_eq!(DragPayload::decode(&item.encode().unwrap()).unwrap(), item);
    }

    #[test]
    fn test_decode_bare_kind() {
        assert_eq!(
            DragPayload::decode(" button ").unwrap(),
            DragPayload::Palette { kind: ElementKind::Button }
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(DragPayload::decode(""), Err(PayloadError::Empty)));
        assert!(matches!(DragPayload::decode("video"), Err(PayloadError::Parse(_))));
        assert!(matches!(DragPayload::decode("{not json"), Err(PayloadError::Json(_))));
        assert!(matches!(
            DragPayload::decode(r#"{"source":"palette","kind":"video"}"#),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"source":"canvas","index":-1}"#),
            Err(PayloadError::Json(_))
        ));
    }
}
