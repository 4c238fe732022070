//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── hero ───────────────────────────────────────────────────
    pub fn section_title_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_body_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn section_marker_style(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn path_drawn_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn path_pending_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn thumbnail_style() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn prompt_style() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── content ────────────────────────────────────────────────
    pub fn headline_style(pinned: bool) -> Style {
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        if pinned {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn block_title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn damping_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }


    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn nav_style(compact: bool) -> Style {
        if compact {
            Style::default().bg(Color::Black).fg(Color::Gray)
        } else {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
