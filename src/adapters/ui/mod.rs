pub mod banner;
pub mod progress;
pub mod render;
pub mod tui;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(api: &str) {
    banner::print_welcome(api);
    tui::apply_theme();
}
