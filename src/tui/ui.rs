//! Dashboard rendering
//!
//! Lays out the header, the income/expenses/surplus summary, and a
//! per-category bar chart of the expense list.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

use super::app::App;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_summary(frame, app, chunks[1]);
    render_chart(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Quantum Budget",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(&app.email, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let income = app.budget.income;
    let expenses = app.budget.total_expenses();
    let surplus = app.budget.surplus();

    let surplus_color = if surplus.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Income:   "),
            Span::styled(income.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Expenses: "),
            Span::styled(expenses.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Surplus:  "),
            Span::styled(surplus.to_string(), Style::default().fg(surplus_color)),
        ]),
    ];

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("This Month"));

    frame.render_widget(summary, area);
}

fn render_chart(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    // Bar heights are whole rupees; negative lines would panic the u64 cast
    // and are clamped to zero instead
    let data: Vec<(&str, u64)> = app
        .budget
        .expenses
        .iter()
        .map(|item| {
            (
                item.category.as_str(),
                item.amount.rupees().max(0) as u64,
            )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Expenses by Category"),
        )
        .data(&data)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        " q: quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
