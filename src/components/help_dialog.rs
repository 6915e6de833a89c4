//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ModalDown => self.scroll_offset = self.scroll_offset.saturating_add(1),
            Action::ModalUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height))
                .position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_key = |lines: &mut Vec<Line<'static>>, keys: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {:<12}", keys),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(description.to_string()),
        ]));
    };

    add_section(&mut lines, "Analytics Range");
    add_key(&mut lines, "1", "1 month");
    add_key(&mut lines, "3", "3 months");
    add_key(&mut lines, "y", "1 year");
    add_key(&mut lines, "c", "custom range");

    add_section(&mut lines, "Invoice List");
    add_key(&mut lines, "j / ↓", "next invoice");
    add_key(&mut lines, "k / ↑", "previous invoice");
    add_key(&mut lines, "g / Home", "first invoice");
    add_key(&mut lines, "G / End", "last invoice");
    add_key(&mut lines, "Enter", "open the highlighted invoice");
    add_key(&mut lines, "Space", "collapse / expand the list");

    add_section(&mut lines, "Invoice Flows");
    add_key(&mut lines, "n", "create a new invoice");
    add_key(&mut lines, "u", "upload an existing invoice");

    add_section(&mut lines, "Chart");
    add_key(&mut lines, "x", "export the chart as SVG");

    add_section(&mut lines, "General");
    add_key(&mut lines, "?", "toggle this help");
    add_key(&mut lines, "q / Esc", "quit");
    add_key(&mut lines, "Ctrl-C", "quit immediately");

    lines
}
