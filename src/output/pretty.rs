use colored::Colorize;

use crate::config::ColorSetting;

/// Apply the color setting process-wide.
///
/// `Auto` leaves the decision to `colored`, which honours `NO_COLOR`,
/// `CLICOLOR` and whether stdout is a terminal.
pub fn apply_color_setting(setting: ColorSetting) {
    match setting {
        ColorSetting::Auto => colored::control::unset_override(),
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
    }
}

/// Format a user-facing error line
pub fn format_error_pretty(message: &str) -> String {
    message.red().to_string()
}

/// Format a banner (welcome / farewell)
pub fn format_banner_pretty(banner: &str) -> String {
    banner.bold().to_string()
}

