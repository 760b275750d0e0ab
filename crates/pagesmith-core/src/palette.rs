//! Palette of draggable component templates.

use crate::element::ElementKind;

/// A draggable template shown in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub kind: ElementKind,
    pub label: &'static str,
}

/// Palette entries in display order.
pub const PALETTE: [PaletteEntry; 3] = [
    PaletteEntry { kind: ElementKind::Text, label: "Text" },
    PaletteEntry { kind: ElementKind::Image, label: "Image" },
    PaletteEntry { kind: ElementKind::Button, label: "Button" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_kind() {
        let kinds: Vec<_> = PALETTE.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, ElementKind::ALL.to_vec());
        for entry in PALETTE {
            assert_eq!(entry.label.to_lowercase(), entry.kind.as_str());
        }
    }
}
