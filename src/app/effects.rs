use crate::app::{App, Message, Model, ToastLevel};

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::Save) {
            Self::save_buffer(model);
        }
    }

    /// Save failures are reported and the session keeps the in-memory
    /// buffer, still marked modified, so the save can be retried.
    fn save_buffer(model: &mut Model) {
        let _save_scope = crate::perf::scope("editor.save");
        match model.save() {
            Ok(lines) => {
                tracing::info!(path = %model.file_path.display(), lines, "buffer saved");
                crate::perf::log_event(
                    "save.ok",
                    format!("path={} lines={lines}", model.file_path.display()),
                );
                let name = model.display_name();
                model.show_toast(ToastLevel::Info, format!("Wrote {lines} lines to {name}"));
            }
            Err(err) => {
                tracing::warn!(path = %model.file_path.display(), "save failed: {err:#}");
                crate::perf::log_event(
                    "save.error",
                    format!("path={} err={err:#}", model.file_path.display()),
                );
                model.show_toast(ToastLevel::Error, format!("Save failed: {err:#}"));
            }
        }
    }
}
