//! Marketing landing page mock.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{fill, RoleStyles};

const NAV_LINKS: [&str; 3] = ["Product", "Features", "Company"];

/// Paints the landing page into `area`.
pub fn render(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    fill(f, area, styles.background);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(6),
        ])
        .split(area);

    render_nav(f, rows[0], styles);
    render_hero(f, rows[1], styles);
    render_features(f, rows[2], styles);
}

fn render_nav(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(0),
            Constraint::Length(15),
        ])
        .split(area);

    let border = Style::default().fg(styles.border_on(styles.background).to_ratatui_color());
    let block = || {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border)
            .style(Style::default().bg(styles.background.to_ratatui_color()))
    };

    let brand = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Brand.",
            Style::default()
                .fg(styles.primary.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(block());
    f.render_widget(brand, columns[0]);

    let links = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            NAV_LINKS.join("   "),
            Style::default().fg(styles.text_main.to_ratatui_color()),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block());
    f.render_widget(links, columns[1]);

    let cta = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Get Started ",
            RoleStyles::style(styles.background, styles.primary).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block());
    f.render_widget(cta, columns[2]);
}

fn render_hero(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let badge_bg = RoleStyles::tint(styles.secondary, styles.background);
    let text_main = Style::default()
        .fg(styles.text_main.to_ratatui_color())
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " NEW RELEASE V2.0 ",
            RoleStyles::style(styles.secondary, badge_bg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Build faster with ", text_main),
            Span::styled(
                "Intelligent",
                Style::default()
                    .fg(styles.secondary.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" colors.", text_main),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Our platform provides the best tools for creators to generate assets on the fly. \
             Start your journey today.",
            Style::default().fg(styles.text_muted.to_ratatui_color()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Start Free Trial ",
                RoleStyles::style(styles.background, styles.primary).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                "[ View Demo ]",
                Style::default().fg(styles.text_main.to_ratatui_color()),
            ),
        ]),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(styles.background.to_ratatui_color()));
    f.render_widget(hero, area);
}

fn render_features(f: &mut Frame, area: Rect, styles: &RoleStyles) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .horizontal_margin(2)
        .spacing(2)
        .split(area);

    let icon_bg = RoleStyles::tint(styles.accent, styles.surface);
    let heading = styles.text_main.blend_over(styles.surface, 80);
    let body = styles.text_muted.blend_over(styles.surface, 40);

    for card in cards.iter() {
        let bar = |color: ratatui::style::Color, width: u16| {
            Span::styled(
                " ".repeat(usize::from(width)),
                Style::default().bg(color),
            )
        };
        let inner = card.width.saturating_sub(2);
        let lines = vec![
            Line::from(Span::styled(
                " ● ",
                RoleStyles::style(styles.accent, icon_bg),
            )),
            Line::from(bar(heading.to_ratatui_color(), inner.min(12))),
            Line::from(bar(body.to_ratatui_color(), inner)),
            Line::from(bar(body.to_ratatui_color(), inner * 2 / 3)),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles.border_on(styles.surface).to_ratatui_color()))
            .style(Style::default().bg(styles.surface.to_ratatui_color()));
        f.render_widget(Paragraph::new(lines).block(block), *card);
    }
}
