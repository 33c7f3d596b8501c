//! SynthBrute theme and status colors.

use crate::notifications::NotificationLevel;
use koala_core::{AgentStatus, WarehouseStatus};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct SynthBruteTheme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SynthBruteTheme {
    pub fn synthbrute() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            bg_secondary: Color::Rgb(26, 26, 26),
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            tertiary: Color::Rgb(255, 255, 0),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            text_muted: Color::Rgb(68, 68, 68),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }
}

/// Completed is green, failures red, in-flight yellow, anything else dim.
pub fn warehouse_status_color(status: &WarehouseStatus, theme: &SynthBruteTheme) -> Color {
    match status {
        WarehouseStatus::Completed | WarehouseStatus::Ready => theme.success,
        WarehouseStatus::Processing => theme.warning,
        WarehouseStatus::Pending => theme.primary_dim,
        WarehouseStatus::Error | WarehouseStatus::Failed | WarehouseStatus::Unauthorized => {
            theme.error
        }
        WarehouseStatus::Canceled | WarehouseStatus::Other(_) => theme.text_dim,
    }
}

pub fn agent_status_color(status: &AgentStatus, theme: &SynthBruteTheme) -> Color {
    match status {
        AgentStatus::Active => theme.success,
        AgentStatus::Inactive => theme.text_dim,
        AgentStatus::Other(_) => theme.warning,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &SynthBruteTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
