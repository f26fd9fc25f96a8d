//! Line commands accepted by the interactive session

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::models::SpotId;
use crate::session::{AddOutcome, SpotSession};
use crate::views::{SpotPopup, ViewportTracker, finalization_view, list_view, map_view, plan_view};
use crate::{SpotsError, terminal};

pub const HELP: &str = "\
Commands:
  accessible on|off   only show spots with wheelchair access and accessible restroom
  rating <value>      minimum accessibility rating (0-5)
  rating up|down      nudge the minimum rating by one step
  reset               reset both filters
  list                show the filtered spots
  show <id>           show details of one spot
  map                 show map markers
  add <id>            add a spot to the travel plan
  remove <id>         remove a spot from the travel plan
  clear               empty the travel plan
  plan                show the travel plan
  done                finalise the travel plan
  close               close the finalisation view
  help                show this text
  quit                leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AccessibleOnly(bool),
    MinRating(String),
    NudgeRating(i8),
    Reset,
    List,
    Show(SpotId),
    Map,
    Add(SpotId),
    Remove(SpotId),
    Clear,
    Plan,
    Done,
    Close,
    Help,
    Quit,
}

/// Whether the loop keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn parse_id(arg: Option<&str>) -> crate::Result<SpotId> {
    let arg = arg.ok_or_else(|| SpotsError::validation("a spot id is required"))?;
    arg.parse::<u32>()
        .map(SpotId)
        .map_err(|_| SpotsError::validation(format!("'{arg}' is not a spot id")))
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> crate::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match verb.to_ascii_lowercase().as_str() {
            "accessible" => match arg {
                Some("on") => Command::AccessibleOnly(true),
                Some("off") => Command::AccessibleOnly(false),
                _ => return Err(SpotsError::validation("use 'accessible on' or 'accessible off'")),
            },
            "rating" => match arg {
                Some("up") => Command::NudgeRating(1),
                Some("down") => Command::NudgeRating(-1),
                Some(value) => Command::MinRating(value.to_string()),
                None => Command::MinRating(String::new()),
            },
            "reset" => Command::Reset,
            "list" | "ls" => Command::List,
            "show" => Command::Show(parse_id(arg)?),
            "map" => Command::Map,
            "add" => Command::Add(parse_id(arg)?),
            "remove" | "rm" => Command::Remove(parse_id(arg)?),
            "clear" => Command::Clear,
            "plan" => Command::Plan,
            "done" => Command::Done,
            "close" => Command::Close,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(SpotsError::validation(format!(
                    "unknown command '{other}', type 'help'"
                )));
            }
        };
        Ok(Some(command))
    }

    /// Apply the command to the session and print whatever changed
    pub fn execute(
        &self,
        session: &mut SpotSession,
        viewport: &mut ViewportTracker,
        rating_step: f64,
        now: Instant,
        out: &mut impl Write,
    ) -> Result<Flow> {
        debug!(command = ?self, "Executing command");
        let filters_changed = match self {
            Command::AccessibleOnly(on) => session.set_accessible_only(*on),
            Command::MinRating(input) => session.set_min_rating_input(input)?,
            Command::NudgeRating(direction) => {
                session.nudge_min_rating(f64::from(*direction) * rating_step)
            }
            Command::Reset => session.reset_filters(),
            _ => false,
        };

        match self {
            Command::AccessibleOnly(_)
            | Command::MinRating(_)
            | Command::NudgeRating(_)
            | Command::Reset => {
                terminal::render_filters(out, session)?;
                if filters_changed {
                    terminal::render_list(out, &list_view(session))?;
                    if let Some(bounds) = viewport.update(&map_view(session)) {
                        terminal::render_bounds(out, &bounds)?;
                    }
                }
            }
            Command::List => {
                terminal::render_filters(out, session)?;
                terminal::render_list(out, &list_view(session))?;
            }
            Command::Show(id) => {
                let spot = session
                    .catalog()
                    .get(*id)
                    .ok_or_else(|| SpotsError::validation(format!("no spot with id {id}")))?;
                terminal::render_popup(out, &SpotPopup::from(spot))?;
            }
            Command::Map => {
                let view = map_view(session);
                viewport.update(&view);
                terminal::render_map(out, &view)?;
            }
            Command::Add(id) => match session.add_id_to_plan(*id, now)? {
                AddOutcome::Added => terminal::render_plan(out, &plan_view(session))?,
                // plan unchanged; the live notification is shown by the caller
                AddOutcome::AlreadyInPlan => {}
            },
            Command::Remove(id) => {
                if session.remove_from_plan(*id) {
                    terminal::render_plan(out, &plan_view(session))?;
                }
            }
            Command::Clear => {
                session.clear_plan();
                terminal::render_plan(out, &plan_view(session))?;
            }
            Command::Plan => terminal::render_plan(out, &plan_view(session))?,
            Command::Done => {
                session.request_finalization();
                match finalization_view(session) {
                    Some(view) => terminal::render_finalization(out, &view)?,
                    None => writeln!(out, "Add at least one spot before finalising.")?,
                }
            }
            Command::Close => {
                if session.close_finalization() {
                    terminal::render_plan(out, &plan_view(session))?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpotCatalog;
    use crate::models::spot::fixtures::spot;
    use rstest::rstest;

    #[rstest]
    #[case("accessible on", Command::AccessibleOnly(true))]
    #[case("accessible off", Command::AccessibleOnly(false))]
    #[case("rating 3.5", Command::MinRating("3.5".to_string()))]
    #[case("rating up", Command::NudgeRating(1))]
    #[case("rating", Command::MinRating(String::new()))]
    #[case("ADD 4", Command::Add(SpotId(4)))]
    #[case("rm 2", Command::Remove(SpotId(2)))]
    #[case("show 1", Command::Show(SpotId(1)))]
    #[case("  done  ", Command::Done)]
    #[case("q", Command::Quit)]
    fn test_parse(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line).unwrap(), Some(expected));
    }

    #[rstest]
    #[case("add")]
    #[case("add x")]
    #[case("accessible maybe")]
    #[case("fly 3")]
    fn test_parse_errors(#[case] line: &str) {
        assert!(matches!(
            Command::parse(line),
            Err(SpotsError::Validation { .. })
        ));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    fn one_spot_session() -> SpotSession {
        SpotSession::new(SpotCatalog::new(vec![spot(1, 4.0, true, true)]).unwrap())
    }

    fn run(session: &mut SpotSession, lines: &[&str], now: Instant) -> String {
        let mut viewport = ViewportTracker::new();
        let mut out = Vec::new();
        for line in lines {
            if let Some(command) = Command::parse(line).unwrap() {
                command
                    .execute(session, &mut viewport, 0.1, now, &mut out)
                    .unwrap();
            }
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_duplicate_add_raises_notification() {
        let mut session = one_spot_session();
        let now = Instant::now();
        let text = run(&mut session, &["add 1", "add 1"], now);
        assert_eq!(
            session.notification(now),
            Some("Spot 1 is already in your travel plan.")
        );
        assert_eq!(text.matches("My Travel Plan").count(), 1);
        assert_eq!(session.plan().len(), 1);
    }

    #[test]
    fn test_done_on_empty_plan() {
        let mut session = one_spot_session();
        let text = run(&mut session, &["done"], Instant::now());
        assert!(text.contains("Add at least one spot"));
        assert!(!session.finalization().is_open());

        let text = run(&mut session, &["add 1", "done"], Instant::now());
        assert!(text.contains("Travel Plan Finalisation"));
        assert!(session.finalization().is_open());
    }

    #[test]
    fn test_done_after_clear_shows_no_overlay() {
        let mut session = one_spot_session();
        let text = run(&mut session, &["add 1", "done", "clear", "done"], Instant::now());

        assert!(!session.finalization().is_open());
        assert!(session.plan().is_empty());
        assert_eq!(text.matches("Travel Plan Finalisation").count(), 1);
        assert!(text.ends_with("Add at least one spot before finalising.\n"));
    }

    #[test]
    fn test_filter_commands_refit_viewport() {
        let mut session = SpotSession::new(
            SpotCatalog::new(vec![spot(1, 4.0, true, true), spot(2, 2.0, false, true)]).unwrap(),
        );
        let text = run(&mut session, &["accessible on", "rating 3"], Instant::now());
        assert!(text.contains("accessible-only=on"));
        assert!(text.contains("Fit map to"));
        assert_eq!(session.criteria().min_rating(), 3.0);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut session = one_spot_session();
        let mut viewport = ViewportTracker::new();
        let mut out = Vec::new();
        let flow = Command::Quit
            .execute(&mut session, &mut viewport, 0.1, Instant::now(), &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Quit);
    }
}
