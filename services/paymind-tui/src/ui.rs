// services/paymind-tui/src/ui.rs
//
// Rendering. Pure functions of TuiState; nothing here mutates.

use paykit::format::{format_number, format_usdc};
use paykit::pages::chat::EXAMPLE_PROMPTS;
use paykit::pages::dashboard::{stat_cards, StatCard, Trend};
use paykit::pages::transactions::EMPTY_MESSAGE;
use paykit::router::Route;
use paykit::storage::KeyValueStore;
use paykit::types::{Sender, Transaction, TransactionStatus};
use ratatui::{prelude::*, widgets::*};

use crate::state::{DraftField, TuiState};

// Color palette: USDC blue on slate
mod colors {
    use ratatui::style::Color;

    pub const BLUE: Color = Color::Rgb(39, 117, 202);
    pub const DARK_BLUE: Color = Color::Rgb(18, 52, 100);
    pub const WHITE: Color = Color::Rgb(230, 233, 242);
    pub const SILVER: Color = Color::Rgb(138, 147, 173);
    pub const GOLD: Color = Color::Rgb(242, 178, 51);
    pub const BG_DARK: Color = Color::Rgb(11, 16, 32);
    pub const BG_PANEL: Color = Color::Rgb(19, 26, 46);
    pub const SUCCESS: Color = Color::Rgb(47, 191, 113);
    pub const ERROR: Color = Color::Rgb(229, 72, 77);
}

pub fn draw_ui<S: KeyValueStore>(frame: &mut Frame, state: &TuiState<S>, mode: &str) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + tabs
            Constraint::Min(10),   // Page
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let screen = state.screen();
    draw_header(frame, chunks[0], state, screen, mode);

    match screen {
        Route::Dashboard => draw_dashboard(frame, chunks[1], state),
        Route::Chat => draw_chat(frame, chunks[1], state),
        Route::Transactions => draw_transactions(frame, chunks[1], state),
        Route::Profile => draw_profile(frame, chunks[1], state),
        Route::Login | Route::Landing => draw_login(frame, chunks[1], state),
    }

    draw_footer(frame, chunks[2], screen, state.payment.open);

    if screen == Route::Dashboard && state.payment.open {
        draw_payment_modal(frame, area, state);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL))
}

fn draw_header<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>, screen: Route, mode: &str) {
    let mode_color = if mode == "DEMO" { colors::GOLD } else { colors::SUCCESS };

    let mut spans = vec![
        Span::styled(
            " PAYMIND ",
            Style::default().fg(colors::WHITE).bg(colors::DARK_BLUE).bold(),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", mode), Style::default().fg(mode_color).bold()),
        Span::raw("  "),
    ];

    if screen.is_protected() {
        for (i, route) in Route::SIDEBAR.iter().enumerate() {
            let style = if *route == screen {
                Style::default().fg(colors::BG_DARK).bg(colors::BLUE).bold()
            } else {
                Style::default().fg(colors::SILVER)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, route.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            state.profile().wallet,
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::DARK_BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(header, area);
}

fn draw_login<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let area = centered(area, 60, 9);
    let mut lines = vec![
        Line::from(Span::styled(
            "AI-Powered USDC Payments",
            Style::default().fg(colors::SILVER),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email: ", Style::default().fg(colors::SILVER)),
            Span::styled(
                format!("{}_", state.login.email),
                Style::default().fg(colors::WHITE).bold(),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(err) = &state.login.error {
        lines.push(Line::from(Span::styled(err.as_str(), Style::default().fg(colors::ERROR))));
    }

    frame.render_widget(Paragraph::new(lines).block(panel("SIGN IN")), area);
}

fn draw_dashboard<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(8)])
        .split(area);

    match &state.stats {
        Some(loaded) => {
            let cards = stat_cards(&loaded.value);
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
                .split(chunks[0]);
            for (card, col) in cards.iter().zip(cols.iter()) {
                draw_stat_box(frame, *col, card, loaded.is_fallback());
            }
        }
        None => frame.render_widget(
            Paragraph::new("Loading stats...")
                .alignment(Alignment::Center)
                .block(panel("OVERVIEW")),
            chunks[0],
        ),
    }

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    match &state.recent {
        Some(loaded) => draw_transaction_table(frame, lower[0], "RECENT TRANSACTIONS", &loaded.value, None),
        None => frame.render_widget(
            Paragraph::new("Loading...").block(panel("RECENT TRANSACTIONS")),
            lower[0],
        ),
    }

    draw_activity_panel(frame, lower[1], state);
}

fn draw_stat_box(frame: &mut Frame, area: Rect, card: &StatCard, fallback: bool) {
    let title = if fallback { format!("{} (offline)", card.title) } else { card.title.to_string() };
    let note_color = match card.trend {
        Trend::Positive => colors::SUCCESS,
        Trend::Neutral => colors::SILVER,
        Trend::Negative => colors::ERROR,
    };

    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            card.value.as_str(),
            Style::default().fg(colors::WHITE).bold(),
        )),
        Line::from(Span::styled(card.note.as_str(), Style::default().fg(note_color))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center).block(block), area);
}

fn status_style(status: TransactionStatus) -> Style {
    match status {
        TransactionStatus::Completed => Style::default().fg(colors::SUCCESS),
        TransactionStatus::Pending => Style::default().fg(colors::GOLD),
        TransactionStatus::Failed => Style::default().fg(colors::ERROR),
    }
}

fn draw_transaction_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[Transaction],
    empty_message: Option<&str>,
) {
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(empty_message.unwrap_or("No transactions yet"))
                .alignment(Alignment::Center)
                .block(panel(title)),
            area,
        );
        return;
    }

    let header_style = Style::default().fg(colors::GOLD).bold();
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|tx| {
            Row::new(vec![
                Cell::from(Span::styled(tx.id.as_str(), Style::default().fg(colors::SILVER))),
                Cell::from(tx.date.as_str()),
                Cell::from(tx.kind.as_str()),
                Cell::from(tx.recipient.as_str()),
                Cell::from(Line::from(format_usdc(tx.amount)).alignment(Alignment::Right)),
                Cell::from(Span::styled(tx.status.as_str(), status_style(tx.status))),
            ])
            .style(Style::default().fg(colors::WHITE))
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["ID", "DATE", "TYPE", "RECIPIENT", "AMOUNT", "STATUS"])
            .style(header_style)
            .bottom_margin(1),
    )
    .block(panel(title))
    .row_highlight_style(Style::default().bg(colors::BG_DARK));

    frame.render_widget(table, area);
}

fn draw_activity_panel<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let logs: Vec<Line> = state
        .activity_log
        .iter()
        .rev()
        .take(20)
        .map(|entry| {
            let (prefix, color) = match entry.level.as_str() {
                "ERROR" => ("[ERR]", colors::ERROR),
                "WARN" => ("[WRN]", colors::GOLD),
                "INFO" => ("[INF]", colors::SUCCESS),
                _ => ("[---]", colors::SILVER),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{} ", prefix), Style::default().fg(color)),
                Span::styled(entry.message.as_str(), Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(logs).block(panel("ACTIVITY")).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_transactions<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let model = &state.transactions;
    let filter = model.filter();
    let describe = |label: String, all: &str| if label == "all" { all.to_string() } else { label };

    let bar = Line::from(vec![
        Span::styled("Status: ", Style::default().fg(colors::SILVER)),
        Span::styled(
            describe(filter.status.to_string(), "All Statuses"),
            Style::default().fg(colors::WHITE).bold(),
        ),
        Span::raw("   "),
        Span::styled("Type: ", Style::default().fg(colors::SILVER)),
        Span::styled(
            describe(filter.kind.to_string(), "All Types"),
            Style::default().fg(colors::WHITE).bold(),
        ),
        Span::raw("   "),
        Span::styled(model.summary(), Style::default().fg(colors::SILVER)),
    ]);
    frame.render_widget(Paragraph::new(bar).block(panel("FILTERS")), chunks[0]);

    draw_transaction_table(frame, chunks[1], "TRANSACTIONS", model.visible(), Some(EMPTY_MESSAGE));

    let counts = model.counts();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[2]);
    for (status, col) in TransactionStatus::ALL.into_iter().zip(cols.iter()) {
        let text = vec![
            Line::from(Span::styled(status.as_str(), status_style(status))),
            Line::from(Span::styled(
                format_number(counts.get(status) as u64),
                Style::default().fg(colors::WHITE).bold(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(panel("")),
            *col,
        );
    }
}

fn draw_chat<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(cols[0]);

    let mut lines: Vec<Line> = Vec::new();
    for msg in state.chat.messages() {
        let (who, color) = match msg.sender {
            Sender::User => ("You", colors::BLUE),
            Sender::Assistant => ("PayMind", colors::GOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", msg.timestamp.with_timezone(&chrono::Local).format("%H:%M")),
                Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
            ),
            Span::styled(format!("{}: ", who), Style::default().fg(color).bold()),
            Span::styled(msg.content.as_str(), Style::default().fg(colors::WHITE)),
        ]));
        lines.push(Line::from(""));
    }
    if state.chat.is_pending() {
        lines.push(Line::from(Span::styled("PayMind is typing...", Style::default().fg(colors::SILVER))));
    }

    // Keep the newest lines in view
    let height = rows[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(height) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("AI ASSISTANT"))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(format!("> {}_", state.chat_input))
            .style(Style::default().fg(colors::WHITE))
            .block(panel("MESSAGE")),
        rows[1],
    );

    let mut examples: Vec<Line> = Vec::new();
    for (heading, prompts) in EXAMPLE_PROMPTS {
        examples.push(Line::from(Span::styled(*heading, Style::default().fg(colors::GOLD).bold())));
        for prompt in prompts.iter() {
            examples.push(Line::from(Span::styled(
                format!("  {}", prompt),
                Style::default().fg(colors::SILVER),
            )));
        }
        examples.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(examples).block(panel("TRY")).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn draw_profile<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let profile = state.profile();
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<15}", label), Style::default().fg(colors::SILVER)),
            Span::styled(value, Style::default().fg(colors::WHITE).bold()),
        ])
    };

    let lines = vec![
        field("Name", profile.name.clone()),
        field("Email", profile.email.clone()),
        field("Wallet", profile.wallet.clone()),
        field("Balance", format_usdc(profile.balance)),
        Line::from(""),
        field("Notifications", if profile.notifications { "On".into() } else { "Off".into() }),
        field("Language", profile.language.clone()),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel("PROFILE")), area);
}

fn draw_payment_modal<S: KeyValueStore>(frame: &mut Frame, area: Rect, state: &TuiState<S>) {
    let area = centered(area, 64, 13);
    frame.render_widget(Clear, area);

    if state.payment.succeeded {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("Payment sent", Style::default().fg(colors::SUCCESS).bold())),
            Line::from(""),
            Line::from(Span::styled("[ENTER] Done", Style::default().fg(colors::SILVER))),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(panel("SEND USDC")),
            area,
        );
        return;
    }

    let input = |label: &'static str, value: &str, which: DraftField| {
        let focused = state.field == which && !state.payment.submitting;
        let style = if focused {
            Style::default().fg(colors::BG_DARK).bg(colors::BLUE)
        } else {
            Style::default().fg(colors::WHITE)
        };
        Line::from(vec![
            Span::styled(format!("{:<11}", label), Style::default().fg(colors::SILVER)),
            Span::styled(format!("{}{}", value, if focused { "_" } else { "" }), style),
        ])
    };

    let mut lines = vec![
        input("Recipient", &state.draft.recipient, DraftField::Recipient),
        Line::from(""),
        input("Amount", &state.draft.amount, DraftField::Amount),
        Line::from(""),
        input("Note", &state.draft.note, DraftField::Note),
        Line::from(""),
    ];
    if let Some(err) = &state.payment.error {
        lines.push(Line::from(Span::styled(err.as_str(), Style::default().fg(colors::ERROR))));
    }
    if state.payment.submitting {
        lines.push(Line::from(Span::styled("Sending...", Style::default().fg(colors::GOLD))));
    }

    frame.render_widget(Paragraph::new(lines).block(panel("SEND USDC")), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, screen: Route, modal_open: bool) {
    let keys: &[(&str, &str)] = match screen {
        Route::Login | Route::Landing => &[("ENTER", "Sign in"), ("CTRL+W", "Connect wallet"), ("ESC", "Quit")],
        Route::Dashboard if modal_open => &[("TAB", "Next field"), ("ENTER", "Send"), ("ESC", "Cancel")],
        Route::Dashboard => &[("P", "Send payment"), ("R", "Reload"), ("TAB", "Next tab"), ("X", "Logout"), ("Q", "Quit")],
        Route::Chat => &[("ENTER", "Send"), ("TAB", "Next tab"), ("ESC", "Quit")],
        Route::Transactions => &[("S", "Status filter"), ("T", "Type filter"), ("TAB", "Next tab"), ("Q", "Quit")],
        Route::Profile => &[("N", "Notifications"), ("L", "Language"), ("D", "Disconnect"), ("Q", "Quit")],
    };

    let mut spans = Vec::new();
    for (key, label) in keys {
        spans.push(Span::styled(
            format!(" [{}] ", key),
            Style::default().fg(colors::BG_DARK).bg(colors::SILVER),
        ));
        spans.push(Span::styled(format!(" {} ", label), Style::default().fg(colors::SILVER)));
        spans.push(Span::raw("  "));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::DARK_BLUE))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(footer, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
