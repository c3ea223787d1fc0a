//! # Renderer
//!
//! Rebuilds the whole frame from current state on every call.
//!
//! [`screen_content`] is a pure function from state to header, legend and
//! body lines. [`draw_ui`] wraps that in the centred window (header, legend,
//! scrollable body, footer) and hands the body to the `ContentView`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::profile::{self, ABOUT, CAKE_ART, EASTER_EGG_ART, OWNER_NAME, SKILLS};
use crate::core::screen::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ContentView, EmailInput};
use crate::tui::theme::Theme;

/// Width of the content box. Below the smallest supported terminal width.
pub const BOX_WIDTH: u16 = 70;
/// Blank columns on each side of the body text.
const CONTENT_PADDING: u16 = 2;
/// Border (1 + 1) plus window padding (2 + 2).
const WINDOW_H_OVERHEAD: u16 = 6;
/// Border (1 + 1), window padding (1 + 1), header, legend, two spacers, footer.
const WINDOW_V_OVERHEAD: u16 = 9;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const TECH_LABEL: &str = "Technologies: ";

const LEGEND_MENU: &str = "(a) About   (p) Projects   (s) Skills   (c) Contact   (q) Quit";
const LEGEND_LIST: &str = "(↑/↓) Navigate   (enter) Select   (esc) Back";
const LEGEND_DETAIL: &str = "(↑/↓) Scroll   (esc) Back";
const LEGEND_BACK: &str = "(esc) Back";
const LEGEND_CONTACT: &str = "(enter) Send   (esc) Back";
const LEGEND_SENDING: &str = "Processing...";

/// Everything a screen shows, before layout.
pub struct ScreenContent {
    pub header: String,
    pub legend: &'static str,
    pub body: Vec<Line<'static>>,
}

pub fn spinner_symbol(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Wrap text to `width` columns, keeping explicit line breaks and blank lines.
fn wrap_text(text: &str, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    text.split('\n')
        .flat_map(|paragraph| {
            if paragraph.trim().is_empty() {
                vec![Line::default()]
            } else {
                textwrap::wrap(paragraph, width)
                    .into_iter()
                    .map(|l| Line::raw(l.into_owned()))
                    .collect()
            }
        })
        .collect()
}

fn centered_art(art: &str) -> Vec<Line<'static>> {
    // Pad every row to the widest one so the block stays aligned when centred
    let width = art
        .lines()
        .map(unicode_width::UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);
    art.lines()
        .map(|l| {
            let pad = width - unicode_width::UnicodeWidthStr::width(l);
            Line::raw(format!("{l}{}", " ".repeat(pad))).centered()
        })
        .collect()
}

fn list_rows<'a, I>(names: I, selected: usize, theme: &Theme) -> Vec<Line<'static>>
where
    I: Iterator<Item = &'a str>,
{
    names
        .enumerate()
        .map(|(i, name)| {
            if i == selected {
                Line::styled(format!("> {name}"), theme.cursor_row)
            } else {
                Line::raw(format!("  {name}"))
            }
        })
        .collect()
}

fn technologies_lines(technologies: &[String], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let text = format!("{TECH_LABEL}{}", technologies.join(", "));
    let mut lines = wrap_text(&text, width);
    if let Some(first) = lines.first_mut() {
        let raw: String = first.spans.iter().map(|s| s.content.as_ref()).collect();
        if let Some(rest) = raw.strip_prefix(TECH_LABEL.trim_end()) {
            *first = Line::from(vec![
                Span::styled(TECH_LABEL.trim_end().to_string(), theme.technologies_label),
                Span::raw(rest.to_string()),
            ]);
        }
    }
    lines
}

/// Header, legend and body for the current screen. Pure.
pub fn screen_content(
    app: &App,
    theme: &Theme,
    spinner_frame: usize,
    wrap_width: usize,
) -> ScreenContent {
    let catalog = app.catalog();
    match app.screen {
        Screen::Loading => ScreenContent {
            header: OWNER_NAME.to_string(),
            legend: "",
            body: vec![
                Line::default(),
                Line::default(),
                Line::styled(
                    format!("{} Loading Experience...", spinner_symbol(spinner_frame)),
                    theme.accent,
                )
                .centered(),
            ],
        },
        Screen::Menu => ScreenContent {
            header: OWNER_NAME.to_string(),
            legend: LEGEND_MENU,
            body: centered_art(CAKE_ART),
        },
        Screen::EasterEgg => ScreenContent {
            header: "The Cake is a lie".to_string(),
            legend: LEGEND_BACK,
            body: centered_art(EASTER_EGG_ART),
        },
        Screen::About => ScreenContent {
            header: "About".to_string(),
            legend: LEGEND_BACK,
            body: wrap_text(ABOUT, wrap_width),
        },
        Screen::Skills => ScreenContent {
            header: "Skills".to_string(),
            legend: LEGEND_BACK,
            body: wrap_text(SKILLS, wrap_width),
        },
        Screen::EmployerSelect => ScreenContent {
            header: "Select Employer".to_string(),
            legend: LEGEND_LIST,
            body: list_rows(
                catalog.employers.iter().map(|e| e.name.as_str()),
                app.employer_cursor.index(),
                theme,
            ),
        },
        Screen::Projects => {
            let employer = catalog.employer(app.employer_cursor.index());
            ScreenContent {
                header: employer.map_or_else(|| "Projects".to_string(), |e| e.name.clone()),
                legend: LEGEND_LIST,
                body: employer.map_or_else(Vec::new, |e| {
                    list_rows(
                        e.projects.iter().map(|p| p.name.as_str()),
                        app.project_cursor.index(),
                        theme,
                    )
                }),
            }
        }
        Screen::ProjectDetail => match app.selected_project() {
            Some(project) => {
                let mut body = wrap_text(&project.period, wrap_width);
                body.push(Line::default());
                body.extend(wrap_text(&project.description, wrap_width));
                body.push(Line::default());
                body.extend(technologies_lines(&project.technologies, wrap_width, theme));
                ScreenContent {
                    header: project.name.clone(),
                    legend: LEGEND_DETAIL,
                    body,
                }
            }
            None => ScreenContent {
                header: "Project".to_string(),
                legend: LEGEND_BACK,
                body: Vec::new(),
            },
        },
        Screen::Contact => ScreenContent {
            header: "Contact".to_string(),
            legend: LEGEND_CONTACT,
            body: vec![
                Line::default(),
                Line::raw("Reach out to me:"),
                Line::default(),
                EmailInput::new(&app.email, theme).to_line(),
            ],
        },
        Screen::Sending => ScreenContent {
            header: "OpenClaw Assistant".to_string(),
            legend: LEGEND_SENDING,
            body: vec![
                Line::default(),
                Line::default(),
                Line::styled("OpenClaw is now connecting us via email.", theme.accent),
                Line::styled(
                    format!("{} One moment please...", spinner_symbol(spinner_frame)),
                    theme.accent,
                ),
            ],
        },
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();
    if !app.ready {
        frame.render_widget(Paragraph::new("Initializing..."), area);
        return;
    }

    let TuiState {
        theme,
        content_view,
    } = tui;

    let body_width = BOX_WIDTH.min(content_view.width);
    // One column is kept free for the scrollbar
    let wrap_width = body_width.saturating_sub(CONTENT_PADDING * 2 + 1) as usize;
    let content = screen_content(app, theme, spinner_frame, wrap_width);

    let content_lines = u16::try_from(content.body.len()).unwrap_or(u16::MAX);
    let body_height = content_lines.min(content_view.height);

    use Constraint::Length;
    let [window] = Layout::vertical([Length(body_height + WINDOW_V_OVERHEAD)])
        .flex(Flex::Center)
        .areas(area);
    let [window] = Layout::horizontal([Length(body_width + WINDOW_H_OVERHEAD)])
        .flex(Flex::Center)
        .areas(window);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
        .padding(Padding::symmetric(2, 1));
    let inner = block.inner(window);
    frame.render_widget(block, window);

    let [header_area, legend_area, _, body_area, _, footer_area] = Layout::vertical([
        Length(1),
        Length(1),
        Length(1),
        Length(body_height),
        Length(1),
        Length(1),
    ])
    .areas(inner);

    let centered = |text: String, style: Style| {
        Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center)
    };
    frame.render_widget(centered(content.header, theme.header), header_area);
    frame.render_widget(centered(content.legend.to_string(), theme.legend), legend_area);
    frame.render_widget(centered(profile::footer(), theme.footer), footer_area);

    let body_area = Rect {
        x: body_area.x + CONTENT_PADDING.min(body_area.width / 2),
        width: body_area.width.saturating_sub(CONTENT_PADDING * 2),
        ..body_area
    };
    if body_area.is_empty() {
        content_view.set_content_height(content_lines);
        return;
    }
    ContentView::new(content_view, content.body).render(frame, body_area);
}
