use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::render_view_chrome_with_header;

const GUIDE_CARDS: [(&str, &str); 4] = [
    (
        "Get Wallet",
        "Install a Stellar-compatible wallet like Freighter or xBull.",
    ),
    (
        "Connect",
        "Run `connect` and paste the public key your wallet approved.",
    ),
    (
        "Fund Testnet",
        "Use Friendbot to get free Testnet XLM to cover transaction fees.",
    ),
    (
        "Manage Projects",
        "View your owned Project Tokens (Assets) and transfer them instantly.",
    ),
];

pub(super) fn draw(frame: &mut ratatui::Frame, area: Rect) {
    let header = Line::from(Span::styled(
        "Welcome",
        Style::default().fg(Color::Yellow),
    ));
    let inner = render_view_chrome_with_header(frame, header, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Tokenized Code Ownership",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(
                "Connect your wallet to manage your tokenized projects, transfer ownership (sell/license), and track history on the Stellar Testnet.",
            ),
        ])
        .wrap(Wrap { trim: true }),
        parts[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(parts[1]);
    for (i, (title, body)) in GUIDE_CARDS.iter().enumerate() {
        let card = Paragraph::new(*body).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!("{}. {}", i + 1, title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
        );
        frame.render_widget(card, cols[i]);
    }
}
