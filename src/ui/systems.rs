// src/ui/systems.rs
use bevy::prelude::*;

use crate::tables::events::TableOperationFeedback;
use crate::ui::UiFeedbackState;

/// Mirrors the latest operation feedback into the banner resource.
/// Prefers the first success over trailing errors within one batch.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<TableOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}
