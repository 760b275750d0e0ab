//! UI components using egui.

use std::cmp::Ordering;

use egui::{Context, Frame, Id, Margin, Sense};
use pagesmith_core::{
    BuilderEvent, BuilderState, DragPayload, Element, ElementId, Field, Payload, PALETTE,
};
use pagesmith_widgets::{
    canvas_frame, drop_marker, heading, hint, panel_frame, section_label, theme, ActionButton,
    CardContent, DropEdge, ElementCard, PaletteTile,
};

/// Column widths for the builder layout.
#[derive(Debug, Clone, Copy)]
pub struct UiLayout {
    pub palette_width: f32,
    pub panel_width: f32,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            palette_width: 220.0,
            panel_width: 280.0,
        }
    }
}

/// Render the builder UI. Returns the events produced by this frame in the
/// order they should be applied.
///
/// The UI only reads `state`; the caller applies the returned events before
/// the next frame.
pub fn render_ui(ctx: &Context, state: &BuilderState, layout: &UiLayout) -> Vec<BuilderEvent> {
    let mut events = Vec::new();
    render_footer(ctx);
    render_palette(ctx, state, layout, &mut events);
    render_edit_panel(ctx, state, layout, &mut events);
    render_canvas(ctx, state, &mut events);

    // A drop ends the drag, so a cancel from the same frame is redundant.
    if events.iter().any(|e| matches!(e, BuilderEvent::CanvasDrop { .. })) {
        events.retain(|e| *e != BuilderEvent::DragCancelled);
    }
    events
}

fn palette_drag_id(entry_index: usize) -> Id {
    Id::new(("palette_drag", entry_index))
}

fn card_id(id: ElementId) -> Id {
    Id::new(("element_card", id))
}

fn field_edit_id(id: ElementId) -> Id {
    Id::new(("field_edit", id))
}

/// Left column: draggable component templates.
fn render_palette(
    ctx: &Context,
    state: &BuilderState,
    layout: &UiLayout,
    events: &mut Vec<BuilderEvent>,
) {
    egui::SidePanel::left("palette")
        .exact_width(layout.palette_width)
        .resizable(false)
        .show_separator_line(false)
        .frame(panel_frame(theme::PALETTE_BG))
        .show(ctx, |ui| {
            heading(ui, "Elements");

            let mut started = None;
            let mut any_dragging = false;
            for (i, entry) in PALETTE.iter().enumerate() {
                let drag_id = palette_drag_id(i);
                let dragging = ctx.is_being_dragged(drag_id);
                any_dragging |= dragging;

                ui.dnd_drag_source(drag_id, DragPayload::Palette { kind: entry.kind }, |ui| {
                    PaletteTile::new(entry.label).active(dragging).show(ui)
                });
                ui.add_space(8.0);

                if dragging && state.drag_in_progress() != Some(entry.kind) {
                    started = Some(entry.kind);
                }
            }

            if let Some(kind) = started {
                events.push(BuilderEvent::PaletteDragStart(kind));
            } else if !any_dragging && state.drag_in_progress().is_some() {
                events.push(BuilderEvent::DragCancelled);
            }
        });
}

/// Right column: edit the selected element.
fn render_edit_panel(
    ctx: &Context,
    state: &BuilderState,
    layout: &UiLayout,
    events: &mut Vec<BuilderEvent>,
) {
    egui::SidePanel::right("edit_panel")
        .exact_width(layout.panel_width)
        .resizable(false)
        .show_separator_line(false)
        .frame(panel_frame(theme::PANEL_BG))
        .show(ctx, |ui| {
            heading(ui, "Edit element");

            let Some(element) = state.selected() else {
                hint(ui, "Click on an element to edit it");
                return;
            };

            let id = element.id();
            let field = element.payload().field();

            section_label(ui, field_label(field));
            let mut value = element.value().to_owned();
            let edit = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .id(field_edit_id(id))
                    .desired_width(f32::INFINITY)
                    .margin(Margin::same(8)),
            );
            if edit.changed() {
                events.push(BuilderEvent::FieldChange { id, field, value });
            }

            ui.add_space(16.0);
            if ActionButton::new("Delete").danger().full_width().show(ui) {
                events.push(BuilderEvent::DeleteClick(id));
            }
        });
}

/// Centre column: the drop zone holding the placed elements.
fn render_canvas(ctx: &Context, state: &BuilderState, events: &mut Vec<BuilderEvent>) {
    egui::CentralPanel::default()
        .frame(Frame::new().inner_margin(Margin::same(8)))
        .show(ctx, |ui| {
            let highlight = egui::DragAndDrop::has_payload_of_type::<DragPayload>(ctx);

            let (_, dropped) = ui.dnd_drop_zone::<DragPayload, _>(canvas_frame(highlight), |ui| {
                ui.set_min_size(ui.available_size());
                // Registered before the cards so that cards sit on top of it.
                let background = ui.interact(
                    ui.available_rect_before_wrap(),
                    Id::new("canvas_background"),
                    Sense::click(),
                );

                let before = events.len();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| hint(ui, "Drop your elements here"));
                        ui.add_space(8.0);

                        for (index, element) in state.elements().iter().enumerate() {
                            render_element(ui, state, index, element, events);
                        }
                    });

                if events.len() == before && background.clicked() {
                    events.push(BuilderEvent::CanvasBackgroundClick);
                }
            });

            // Released over empty canvas space.
            if let Some(payload) = dropped {
                events.push(BuilderEvent::CanvasDrop {
                    payload: *payload,
                    target: None,
                });
            }
        });
}

/// Render one element card as both a drag source and a drop target.
fn render_element(
    ui: &mut egui::Ui,
    state: &BuilderState,
    index: usize,
    element: &Element,
    events: &mut Vec<BuilderEvent>,
) {
    let id = element.id();
    let selected = state.selected_id() == Some(id);

    let response = ElementCard::new(card_id(id), card_content(element))
        .selected(selected)
        .show(ui);
    response.dnd_set_drag_payload(DragPayload::CanvasItem { index });

    if let Some(payload) = response.dnd_hover_payload::<DragPayload>() {
        if let Some(edge) = drop_edge(&payload, index) {
            drop_marker(ui, response.rect, edge);
        }
    }
    if let Some(payload) = response.dnd_release_payload::<DragPayload>() {
        events.push(BuilderEvent::CanvasDrop {
            payload: *payload,
            target: Some(index),
        });
    } else if response.clicked() {
        events.push(BuilderEvent::ElementClick(id));
    }
}

/// Where a drag hovering the card at `index` would land.
///
/// Reorder targets count the list with the source removed, so moving down
/// lands after the hovered card. Palette drops always append and get no
/// per-card marker.
fn drop_edge(payload: &DragPayload, index: usize) -> Option<DropEdge> {
    match *payload {
        DragPayload::Palette { .. } => None,
        DragPayload::CanvasItem { index: from } => match from.cmp(&index) {
            Ordering::Less => Some(DropEdge::Below),
            Ordering::Greater => Some(DropEdge::Above),
            Ordering::Equal => None,
        },
    }
}

fn card_content(element: &Element) -> CardContent<'_> {
    match element.payload() {
        Payload::Text { content } => CardContent::Paragraph(content),
        Payload::Image { src } => CardContent::Image(src),
        Payload::Button { label } => CardContent::Button(label),
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Content => "Text",
        Field::Src => "Image URL",
        Field::Label => "Button label",
    }
}

/// Bottom strip with the page credit.
fn render_footer(ctx: &Context) {
    egui::TopBottomPanel::bottom("footer")
        .show_separator_line(false)
        .frame(Frame::new().inner_margin(Margin::symmetric(24, 8)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Made with").italics().color(theme::TEXT));
                ui.label(egui::RichText::new("\u{2665}").color(theme::HEART));
            });
        });
}
