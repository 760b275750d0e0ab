//! Pagesmith Core Library
//!
//! Platform-agnostic element model and canvas state for the Pagesmith page builder.

pub mod builder;
pub mod element;
pub mod events;
pub mod palette;
pub mod payload;

pub use builder::{Action, BuilderState, IgnoreReason, Transition};
pub use element::{Element, ElementId, ElementKind, ElementPatch, Field, ParseError, Payload};
pub use events::BuilderEvent;
pub use palette::{PaletteEntry, PALETTE};
pub use payload::{DragPayload, PayloadError};
