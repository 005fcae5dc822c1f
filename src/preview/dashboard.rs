//! Admin dashboard mock: sidebar, header, stat cards and a bar chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::{fill, RoleStyles};

const NAV_ITEMS: [&str; 4] = ["Overview", "Analytics", "Customers", "Settings"];

const STATS: [(&str, &str, &str); 3] = [
    ("Total Revenue", "$45,231", "+20.1%"),
    ("Active Users", "2,345", "+15.2%"),
    ("Bounce Rate", "12.5%", "-4.3%"),
];

const CHART_VALUES: [u64; 12] = [40, 65, 45, 80, 55, 90, 70, 85, 60, 75, 50, 65];

/// Sidebar is hidden below this width.
const SIDEBAR_MIN_WIDTH: u16 = 48;

/// Paints the dashboard into `area`.
pub fn render(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    fill(f, area, styles.background);

    let main = if area.width >= SIDEBAR_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(18), Constraint::Min(0)])
            .split(area);
        render_sidebar(f, columns[0], styles);
        columns[1]
    } else {
        area
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(main);

    render_header(f, rows[0], styles);
    render_stats(f, rows[1], styles);
    render_chart(f, rows[2], styles);
}

fn render_sidebar(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("▇▇", Style::default().fg(styles.primary.to_ratatui_color())),
            Span::styled(
                " Dash.",
                Style::default()
                    .fg(styles.text_main.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let line = if index == 0 {
            // Active item: primary text on a faint primary wash
            let wash = RoleStyles::tint(styles.primary, styles.surface);
            Line::from(Span::styled(
                format!(" ● {item:<13}"),
                RoleStyles::style(styles.primary, wash).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!(" ○ {item}"),
                Style::default().fg(styles.text_muted.to_ratatui_color()),
            ))
        };
        lines.push(line);
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(styles.border_on(styles.surface).to_ratatui_color()))
        .style(Style::default().bg(styles.surface.to_ratatui_color()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_header(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let line = Line::from(vec![
        Span::styled(
            " Overview",
            Style::default()
                .fg(styles.text_main.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(usize::from(area.width.saturating_sub(14)))),
        Span::styled("(◯)", Style::default().fg(styles.accent.to_ratatui_color())),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(styles.border_on(styles.surface).to_ratatui_color()))
        .style(Style::default().bg(styles.surface.to_ratatui_color()));
    f.render_widget(Paragraph::new(vec![Line::from(""), line]).block(block), area);
}

fn render_stats(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .margin(1)
        .spacing(1)
        .split(area);

    let trend_bg = RoleStyles::tint(styles.secondary, styles.surface);
    for ((label, value, trend), card) in STATS.iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                *label,
                Style::default().fg(styles.text_muted.to_ratatui_color()),
            )),
            Line::from(Span::styled(
                *value,
                Style::default()
                    .fg(styles.text_main.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {trend} "),
                RoleStyles::style(styles.secondary, trend_bg),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles.border_on(styles.surface).to_ratatui_color()))
            .style(Style::default().bg(styles.surface.to_ratatui_color()));
        f.render_widget(Paragraph::new(lines).block(block), *card);
    }
}

fn render_chart(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let area = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    };

    let bars: Vec<Bar> = CHART_VALUES
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let color = if index % 2 == 0 {
                styles.primary
            } else {
                styles.secondary
            };
            Bar::default()
                .value(*value)
                .text_value(String::new())
                .style(Style::default().fg(color.to_ratatui_color()))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / 12).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Revenue Overview ",
                    Style::default()
                        .fg(styles.text_main.to_ratatui_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default().fg(styles.border_on(styles.surface).to_ratatui_color()),
                )
                .style(Style::default().bg(styles.surface.to_ratatui_color())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{draw, full_styles, text};
    use super::super::PreviewKind;

    #[test]
    fn test_dashboard_shows_template_text() {
        let buffer = draw(PreviewKind::Dashboard, &full_styles(), 100, 30);
        let screen = text(&buffer);
        for needle in ["Dash.", "Analytics", "Total Revenue", "$45,231", "Revenue Overview"] {
            assert!(screen.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_narrow_dashboard_hides_sidebar() {
        let buffer = draw(PreviewKind::Dashboard, &full_styles(), 40, 30);
        let screen = text(&buffer);
        assert!(!screen.contains("Customers"));
        assert!(screen.contains("Overview"));
    }
}
