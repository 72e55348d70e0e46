mod render;

pub use render::{render_card, render_screen, status_color, status_label};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

use crate::services::orders::OrderClient;
use crate::services::state::{BoardEvent, BoardState};

use render::redraw_screen;

enum Command {
    Refresh,
    SetDate(NaiveDate),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "r" => Some(Command::Refresh),
        "q" => Some(Command::Quit),
        _ => line.strip_prefix('d').and_then(|rest| {
            NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d")
                .ok()
                .map(Command::SetDate)
        }),
    }
}

/// Kicks off one fetch on its own task. Completions come back through the
/// event channel stamped with the sequence number issued here; fetches are
/// never cancelled, stale ones are discarded by `BoardState::apply`.
fn spawn_fetch(
    client: &OrderClient,
    state: &mut BoardState,
    events: &mpsc::UnboundedSender<BoardEvent>,
) {
    let seq = state.begin_fetch();
    let client = client.clone();
    let events = events.clone();
    tokio::spawn(async move {
        let event = match client.fetch_orders().await {
            Ok(orders) => BoardEvent::FetchSucceeded { seq, orders },
            Err(err) => {
                warn!(%err, "order fetch failed");
                BoardEvent::FetchFailed {
                    seq,
                    message: err.to_string(),
                }
            }
        };
        let _ = events.send(event);
    });
}

/// Runs the dashboard until the user quits or stdin closes. One automatic
/// fetch at startup, then stdin commands and fetch completions are
/// multiplexed; every handled event repaints the screen.
pub async fn run(client: OrderClient) -> Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut state = BoardState::new(Local::now().date_naive());

    spawn_fetch(&client, &mut state, &events_tx);
    redraw_screen(&state);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            event = events_rx.recv() => {
                match event {
                    Some(event) => {
                        state.apply(event);
                        redraw_screen(&state);
                    }
                    None => break,
                }
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    _ => break,
                };
                match parse_command(&line) {
                    Some(Command::Refresh) => {
                        spawn_fetch(&client, &mut state, &events_tx);
                        redraw_screen(&state);
                    }
                    Some(Command::SetDate(date)) => {
                        state.apply(BoardEvent::DateChanged { date });
                        redraw_screen(&state);
                    }
                    Some(Command::Quit) => break,
                    // Unknown input: repaint so the hint line is visible.
                    None => redraw_screen(&state),
                }
            }
        }
    }

    Ok(())
}
