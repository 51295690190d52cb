//! Interactive category bar chart for the terminal.
//!
//! Renders the ranked category counts as a [`ratatui::widgets::BarChart`]
//! inside the alternate screen and blocks until the user dismisses it.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};

use scout_core::formatting;

use crate::themes::Theme;

/// Width of one bar (and its label) in terminal columns.
const BAR_WIDTH: u16 = 12;

// ── ChartData ─────────────────────────────────────────────────────────────────

/// Ranked category counts plus the label shown in the chart title.
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Title suffix, e.g. the search keyword or `"Loaded Data"`.
    pub label: String,
    /// `(category, count)` pairs, largest first.
    pub bars: Vec<(String, u64)>,
}

impl ChartData {
    pub fn new(label: impl Into<String>, bars: Vec<(String, u64)>) -> Self {
        Self {
            label: label.into(),
            bars,
        }
    }
}

// ── Event loop ────────────────────────────────────────────────────────────────

/// Display the chart full-screen until `q` / `Q` / `Ctrl+C` is pressed.
pub fn run_chart(data: &ChartData, theme: &Theme) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);

    let result = loop {
        terminal.draw(|frame| render_chart(frame, frame.area(), data, theme))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break Ok(());
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                    _ => {}
                }
            }
        }
    };

    // Restore terminal state unconditionally.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the bar chart plus a one-line dismiss hint into `area`.
pub fn render_chart(frame: &mut Frame, area: Rect, data: &ChartData, theme: &Theme) {
    let [chart_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if data.bars.is_empty() {
        render_no_data(frame, chart_area, theme);
    } else {
        let bars: Vec<Bar> = data
            .bars
            .iter()
            .map(|(category, count)| {
                let label = formatting::truncate_pad(category, BAR_WIDTH as usize)
                    .trim_end()
                    .to_string();
                Bar::default()
                    .value(*count)
                    .text_value(count.to_string())
                    .label(Line::from(label))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border)
                    .title(format!(" Job Distribution - {} ", data.label))
                    .title_style(theme.header),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_WIDTH)
            .bar_gap(1)
            .bar_style(theme.bar)
            .value_style(theme.bar_value)
            .label_style(theme.bar_label);

        frame.render_widget(chart, chart_area);
    }

    let hint = Paragraph::new(Line::from(" press q to close the chart ")).style(theme.dim);
    frame.render_widget(hint, hint_area);
}

/// Placeholder shown when there are no categories to chart.
fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from("No category data to display"),
    ];
    let paragraph = Paragraph::new(text)
        .style(theme.warning)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        );
    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
