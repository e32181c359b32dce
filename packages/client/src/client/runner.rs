//! Client execution: the interactive command loop.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use super::domain::{InputAction, classify_input};
use super::error::ClientError;
use super::session::{Connection, Reply};
use super::ui::display_response;

const PROMPT: &str = "> ";

/// Run the interactive client against `host:port`.
///
/// Connects once (no retry), then loops: read a line, classify it,
/// forward non-empty commands and display each response. Returns `Ok(())`
/// on every graceful shutdown path ("exit" command, end of input, clean
/// peer close, or interrupt) and an error on connection or I/O failure.
/// The connection is shut down before returning on all paths.
pub async fn run_client(host: &str, port: u16) -> Result<(), ClientError> {
    let mut connection = Connection::connect(host, port).await?;
    tracing::info!("Connected to {}:{}", host, port);
    println!("Type commands and press Enter to send. Type \"exit\" or press Ctrl+C to quit.");

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // rustyline is synchronous, so it gets a dedicated thread feeding the
    // async loop through a channel. The thread ends on Ctrl+C, Ctrl+D, or
    // when the receiving side goes away.
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.trim()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("End of input");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    let result = command_loop(&mut connection, &mut input_rx).await;
    connection.shutdown().await;
    result
}

/// Drive the sequential command/reply cycle until a terminal condition.
///
/// One command is in flight at a time: the next prompt line is not acted
/// on until the reply to the previous command has arrived.
async fn command_loop(
    connection: &mut Connection,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    loop {
        let line = tokio::select! {
            maybe_line = input_rx.recv() => match maybe_line {
                Some(line) => line,
                // Readline thread ended (Ctrl+C, Ctrl+D, or an error).
                None => return Ok(()),
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, closing connection");
                return Ok(());
            }
        };

        match classify_input(&line) {
            InputAction::Skip => continue,
            InputAction::Exit => {
                println!("Leaving...");
                return Ok(());
            }
            InputAction::Send(command) => {
                let reply = tokio::select! {
                    reply = connection.send_command(&command) => reply?,
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Interrupted while waiting for a response");
                        return Ok(());
                    }
                };

                match reply {
                    Reply::Payload(payload) => display_response(&payload),
                    Reply::PeerClosed => {
                        tracing::info!("Server closed the connection");
                        println!("Server closed the connection.");
                        return Ok(());
                    }
                }
            }
        }
    }
}
