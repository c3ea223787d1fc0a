//! # ContentView Component
//!
//! Scrollable viewport over the body text of the current screen.
//!
//! ## Architecture
//!
//! `ContentView` is a transient component (created each frame) that wraps
//! `&'a mut ContentViewState` (persistent state) and the frame's lines (props).
//! The content is replaced wholesale every frame; the scroll offset survives
//! replacement and is only reset when the screen changes.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::ScrollDirection;
use crate::tui::component::Component;

/// Viewport dimensions and scroll position. Persisted in `TuiState`.
#[derive(Default)]
pub struct ContentViewState {
    pub scroll_state: ScrollViewState,
    /// Viewport width from the last resize
    pub width: u16,
    /// Viewport height from the last resize
    pub height: u16,
    /// Line count of the content rendered last frame
    pub content_height: u16,
}

impl ContentViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_scroll();
    }

    pub fn set_content_height(&mut self, content_height: u16) {
        self.content_height = content_height;
        self.clamp_scroll();
    }

    /// Advance or retreat one line, stopping at the start and end of the content.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Up => self.scroll_state.scroll_up(),
            ScrollDirection::Down => self.scroll_state.scroll_down(),
        }
        self.clamp_scroll();
    }

    /// Scroll the minimum distance that brings `row` into the viewport.
    ///
    /// Not clamped here: the content height may still describe the previous
    /// screen. The next render clamps against the new content.
    pub fn ensure_visible(&mut self, row: u16) {
        let offset = self.offset();
        let target = if row < offset {
            row
        } else if self.height > 0 && row >= offset + self.height {
            row + 1 - self.height
        } else {
            return;
        };
        self.scroll_state.set_offset(Position { x: 0, y: target });
    }

    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

pub struct ContentView<'a> {
    pub state: &'a mut ContentViewState,
    pub lines: Vec<Line<'a>>,
}

impl<'a> ContentView<'a> {
    pub fn new(state: &'a mut ContentViewState, lines: Vec<Line<'a>>) -> Self {
        Self { state, lines }
    }
}

impl<'a> Component for ContentView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        self.state.set_content_height(content_height);

        // -1 for the scrollbar when the content overflows
        let content_width = if content_height > area.height {
            area.width.saturating_sub(1)
        } else {
            area.width
        };

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let paragraph = Paragraph::new(std::mem::take(&mut self.lines));
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
