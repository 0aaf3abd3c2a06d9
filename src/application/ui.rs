use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Button;
use crate::domain::models::Event;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::MatchCards;

const TITLE: &str = "Food-Friend";

fn error_banner(error: &str) -> Paragraph<'_> {
    return Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::new(1, 1, 0, 0)),
        );
}

fn render_login<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &AppState,
    textarea: &tui_textarea::TextArea,
) {
    let mut error_height = 0;
    if app_state.error.is_some() {
        error_height = 4;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.size());

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Find your foodie matches!"),
        ])
        .alignment(Alignment::Center),
        layout[0],
    );

    if let Some(error) = &app_state.error {
        frame.render_widget(error_banner(error), layout[1]);
    }

    if app_state.is_logging_in() {
        frame.render_widget(Button::widget("Logging in...", false), layout[2]);
    } else {
        frame.render_widget(textarea.widget(), layout[2]);
    }

    frame.render_widget(
        Paragraph::new("Enter to continue, CTRL+C to exit.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout[3],
    );
}

fn render_foods<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, rect: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Your Food Preferences")
        .padding(Padding::new(1, 1, 0, 0));

    if app_state.foods.is_empty() {
        frame.render_widget(
            Paragraph::new("No food preferences yet. Add some!")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            rect,
        );
        return;
    }

    let items = app_state
        .foods
        .iter()
        .map(|food| {
            return ListItem::new(food.to_string());
        })
        .collect::<Vec<ListItem>>();

    let mut list_state = ListState::default();
    list_state.select(Some(app_state.selected_food));

    frame.render_stateful_widget(
        List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> "),
        rect,
        &mut list_state,
    );
}

fn render_matches<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState, rect: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Your Matches")
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(rect);

    if app_state.matches.is_empty() {
        frame.render_widget(
            Paragraph::new(MatchCards::placeholder(app_state.is_calculating()))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );
        return;
    }

    let lines = MatchCards::as_lines(&app_state.matches, inner.width as usize);
    app_state
        .scroll
        .set_state(lines.len().try_into().unwrap_or(u16::MAX), inner.height);

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app_state.scroll.position, 0)),
        rect,
    );
}

fn render_main<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea,
) {
    let mut error_height = 0;
    if app_state.error.is_some() {
        error_height = 4;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(2),
            Constraint::Length(error_height),
            Constraint::Min(6),
        ])
        .split(frame.size());

    let mut welcome = format!("Welcome, {}!", app_state.session.user_name());
    if app_state.session.is_new() {
        welcome = format!("{welcome} Your profile has been created.");
    }
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::raw(welcome),
            ]),
            Line::from(Span::styled(
                "CTRL+L to switch user, CTRL+C to exit.",
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        layout[0],
    );

    if let Some(error) = &app_state.error {
        frame.render_widget(error_banner(error), layout[1]);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    if app_state.is_extracting() {
        frame.render_widget(Button::widget("Reading your tastes...", false), left[0]);
    } else {
        frame.render_widget(textarea.widget(), left[0]);
    }

    render_foods(frame, app_state, left[1]);

    let mut calculate_label = "CTRL+F: Calculate Matches";
    if app_state.is_calculating() {
        calculate_label = "Calculating with LLM...";
    }
    frame.render_widget(
        Button::widget(calculate_label, app_state.can_calculate()),
        left[2],
    );

    render_matches(frame, app_state, columns[1]);
}

fn send(tx: &mpsc::UnboundedSender<Action>, action: Option<Action>) -> Result<()> {
    if let Some(action) = action {
        tx.send(action)?;
    }

    return Ok(());
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::login(&Config::get(ConfigKey::Name));

    if Config::get_bool(ConfigKey::AutoLogin) {
        send(&tx, app_state.login(&Config::get(ConfigKey::Name)))?;
    }

    let mut was_logged_in = app_state.session.is_logged_in();
    loop {
        if was_logged_in != app_state.session.is_logged_in() {
            was_logged_in = app_state.session.is_logged_in();
            if was_logged_in {
                textarea = TextArea::food();
            } else {
                textarea = TextArea::login("");
            }
        }

        terminal.draw(|frame| {
            if app_state.session.is_logged_in() {
                render_main(frame, app_state, &textarea);
            } else {
                render_login(frame, app_state, &textarea);
            }
        })?;

        match events.next().await? {
            Event::LoginResponse(request_id, outcome) => {
                app_state.handle_login_response(request_id, outcome);
            }
            Event::MatchesResponse(request_id, outcome) => {
                app_state.handle_matches_response(request_id, outcome);
            }
            Event::ExtractResponse(request_id, outcome) => {
                send(&tx, app_state.handle_extract_response(request_id, outcome))?;
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLF() => {
                send(&tx, app_state.calculate_matches())?;
            }
            Event::KeyboardCTRLL() => {
                app_state.logout();
            }
            Event::KeyboardCTRLX() => {
                send(&tx, app_state.remove_selected_food())?;
            }
            Event::KeyboardDelete(input) => {
                if app_state.session.is_logged_in() && TextArea::is_blank(&textarea) {
                    send(&tx, app_state.remove_selected_food())?;
                } else {
                    textarea.input(input);
                }
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join(" ");

                if !app_state.session.is_logged_in() {
                    send(&tx, app_state.login(&input_str))?;
                    continue;
                }

                if let Some(command) = SlashCommand::parse(&input_str) {
                    if !command.is_complete() {
                        continue;
                    }
                    textarea = TextArea::food();
                    if command.is_quit() {
                        break;
                    }
                    if command.is_logout() {
                        app_state.logout();
                    }
                    if command.is_calculate() {
                        send(&tx, app_state.calculate_matches())?;
                    }
                    if command.is_describe() {
                        send(&tx, app_state.extract_foods(&command.text()))?;
                    }
                    continue;
                }

                let action = app_state.add_food(&input_str);
                if action.is_some() {
                    textarea = TextArea::food();
                }
                send(&tx, action)?;
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text.replace(['\r', '\n'], " "));
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
            }
            Event::UIScrollUp() => {
                app_state.select_previous_food();
            }
            Event::UIScrollDown() => {
                app_state.select_next_food();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UITick() => {}
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    mut app_state: AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
