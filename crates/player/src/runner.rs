//! Terminal event loop.
//!
//! One `tokio::select!` loop feeds stdin lines and socket events into the
//! `GameClient`, one at a time, and redraws after each.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::GameClient;
use crate::config::PlayerConfig;
use crate::infrastructure::websocket::SocketConnector;
use crate::infrastructure::SocketEvent;
use crate::ui::{self, TerminalCommand};

/// How long to wait for the close handshake on exit
const CLOSE_GRACE: Duration = Duration::from_secs(2);

pub struct RunnerDeps {
    pub client: GameClient,
    pub config: PlayerConfig,
}

/// What the loop should do after handling a line.
enum Flow {
    Continue,
    Exit,
}

pub async fn run(deps: RunnerDeps) -> Result<()> {
    let RunnerDeps { mut client, config } = deps;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut events: Option<mpsc::Receiver<SocketEvent>> = None;

    draw(&mut client, None)?;

    loop {
        let extra = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Input closed");
                    break;
                };
                match handle_line(&line, &mut client, &config, &mut events).await {
                    (Flow::Exit, _) => break,
                    (Flow::Continue, extra) => extra,
                }
            }
            event = next_event(&mut events) => {
                match event {
                    SocketEvent::Message(text) => client.on_message(&text),
                    SocketEvent::Closed => {
                        events = None;
                        client.on_closed();
                    }
                }
                None
            }
        };

        draw(&mut client, extra.as_deref())?;
    }

    shutdown(&mut client, events).await;
    Ok(())
}

/// Close the live socket and give the close handshake a moment to finish.
async fn shutdown(client: &mut GameClient, events: Option<mpsc::Receiver<SocketEvent>>) {
    let was_connected = client.is_connected();
    client.quit();

    if let (true, Some(events)) = (was_connected, events) {
        if drain_until_closed(events, CLOSE_GRACE).await {
            client.on_closed();
        } else {
            tracing::warn!("Server did not acknowledge close within {:?}", CLOSE_GRACE);
        }
    }
}

/// Discard events until `Closed`. Returns `false` if `grace` runs out first.
async fn drain_until_closed(mut events: mpsc::Receiver<SocketEvent>, grace: Duration) -> bool {
    let drained = tokio::time::timeout(grace, async {
        while let Some(event) = events.recv().await {
            if event == SocketEvent::Closed {
                return;
            }
        }
    })
    .await;
    drained.is_ok()
}

/// Handle one typed line, returning text to print under the view.
async fn handle_line(
    line: &str,
    client: &mut GameClient,
    config: &PlayerConfig,
    events: &mut Option<mpsc::Receiver<SocketEvent>>,
) -> (Flow, Option<String>) {
    let Some(command) = ui::parse_line(line) else {
        return (Flow::Continue, None);
    };

    let extra = match command {
        TerminalCommand::ListCharacters => Some(ui::render::render_characters(
            client.catalogs(),
            client.selected_character().map(|def| def.id.as_str()),
        )),
        TerminalCommand::ListItems => Some(ui::render::render_items(client.catalogs())),
        TerminalCommand::Pick(id) => client.select_character(&id).err().map(|e| e.to_string()),
        TerminalCommand::Connect(name) => {
            let name = name.or_else(|| config.player_name.clone()).unwrap_or_default();
            // Validation failures surface as alerts
            if let Ok(join) = client.begin_connect(&name) {
                *events = None;
                let connector = SocketConnector::new();
                tracing::info!(
                    state = ?connector.observer().state(),
                    url = %config.ws_url,
                    "Opening game socket"
                );
                match connector.connect(config.ws_url.as_str()).await {
                    Ok(connection) => {
                        *events = Some(connection.events);
                        client.on_open(Box::new(connection.transport), join);
                    }
                    Err(e) => client.on_connect_failed(&e.to_string()),
                }
            }
            None
        }
        TerminalCommand::Intent(intent) => {
            client.perform(intent);
            None
        }
        TerminalCommand::Quit => {
            client.quit();
            None
        }
        TerminalCommand::Exit => return (Flow::Exit, None),
        TerminalCommand::Help => Some(ui::HELP.to_string()),
        TerminalCommand::Unknown(text) => Some(format!("Unknown command: {} (try help)", text)),
    };

    (Flow::Continue, extra)
}

/// Next event of the live socket; pends forever when there is none.
async fn next_event(events: &mut Option<mpsc::Receiver<SocketEvent>>) -> SocketEvent {
    match events {
        Some(rx) => rx.recv().await.unwrap_or(SocketEvent::Closed),
        None => std::future::pending().await,
    }
}

fn draw(client: &mut GameClient, extra: Option<&str>) -> Result<()> {
    let screen = ui::render(
        client.view(),
        client.catalogs(),
        client.selected_character().map(|def| def.id.as_str()),
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "\n{}", screen)?;
    if let Some(extra) = extra {
        writeln!(stdout, "{}", extra.trim_end())?;
    }
    for alert in client.take_alerts() {
        writeln!(stdout, "!! {}", alert)?;
    }
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
