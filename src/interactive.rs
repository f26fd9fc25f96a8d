//! Interactive session loop
//!
//! Reads commands from stdin while waiting on the single notification
//! deadline. A new duplicate-add rejection moves the deadline, so the
//! `sleep_until` branch is rebuilt on every iteration rather than kept
//! as an independent timer. The live notification is printed after each
//! command's output until it expires.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::command::{Command, Flow};
use crate::session::SpotSession;
use crate::terminal;
use crate::views::{ViewportTracker, list_view, map_view, plan_view};

/// Run the loop on stdin/stdout until `quit` or end of input
pub async fn run(session: &mut SpotSession, rating_step: f64) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_with(session, rating_step, stdin, &mut stdout).await
}

/// Current time on the runtime clock, so paused test time drives expiry too
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

pub async fn run_with<R, W>(
    session: &mut SpotSession,
    rating_step: f64,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut viewport = ViewportTracker::new();
    let mut lines = input.lines();

    terminal::render_filters(out, session)?;
    terminal::render_list(out, &list_view(session))?;
    if let Some(bounds) = viewport.update(&map_view(session)) {
        terminal::render_bounds(out, &bounds)?;
    }
    terminal::render_plan(out, &plan_view(session))?;
    writeln!(out, "Type 'help' for commands.")?;
    out.flush()?;

    loop {
        let deadline = session.notification_deadline();
        let sleep_target = tokio::time::Instant::from_std(deadline.unwrap_or_else(now));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("End of input");
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(command)) => {
                        match command.execute(session, &mut viewport, rating_step, now(), out) {
                            Ok(Flow::Quit) => break,
                            Ok(Flow::Continue) => {}
                            Err(e) => {
                                warn!("Command failed: {e}");
                                writeln!(out, "Error: {e}")?;
                            }
                        }
                        if let Some(message) = session.notification(now()) {
                            terminal::render_notification(out, message)?;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => writeln!(out, "{}", e.user_message())?,
                }
                out.flush()?;
            }
            () = tokio::time::sleep_until(sleep_target), if deadline.is_some() => {
                if session.dismiss_expired_notification(now()) {
                    debug!("Notification dismissed");
                }
            }
        }
    }

    info!("Session ended with {} spots in the plan", session.plan().len());
    Ok(())
}
