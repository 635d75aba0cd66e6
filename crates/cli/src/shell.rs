//! Interactive session: owns the current board and forwards commands to
//! the engine.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, Utc};
use lifeboard_core::{Achievements, BoardState, DomainId, GoalId, NewGoal, Time};
use lifeboard_progress::{
    apply_delta, derive_achievements, derive_focus_scored, derive_overview, derive_timeline,
    newly_unlocked, summarize_domains, FocusConfig,
};
use tracing::debug;

use crate::render;

/// Parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a goal
    Add {
        domain: DomainId,
        cadence: String,
        target: String,
        unit: String,
        deadline: Option<String>,
        title: String,
    },
    /// Change a goal's progress
    Delta {
        domain: DomainId,
        goal: GoalId,
        delta: f64,
    },
    /// Goals of one domain
    Show(DomainId),
    /// Move the session clock
    Today(NaiveDate),
    /// Board totals
    Overview,
    /// Domain cards
    Domains,
    /// Today's focus list
    Focus,
    /// Goals by cadence
    Timeline,
    /// Achievement list
    Achievements,
    /// Command reference
    Help,
    /// End the session
    Quit,
}

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  add <domain> <type> <target> <unit> <deadline|-> <title...>
  inc <domain> <goal>            +1 progress
  dec <domain> <goal>            -1 progress
  bump <domain> <goal> <delta>   arbitrary delta
  show <domain>                  list a domain's goals
  today <YYYY-MM-DD>             set the session date
  overview | domains | focus | timeline | achievements
  help | quit";

fn arg<'a>(parts: &[&'a str], i: usize, name: &str) -> Result<&'a str> {
    parts
        .get(i)
        .copied()
        .ok_or_else(|| anyhow!("missing <{}>", name))
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, _)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "add" => {
            if parts.len() < 7 {
                bail!("usage: add <domain> <type> <target> <unit> <deadline|-> <title...>");
            }
            let deadline = match parts[5] {
                "-" => None,
                d => Some(d.to_string()),
            };
            Command::Add {
                domain: DomainId::from(parts[1]),
                cadence: parts[2].to_string(),
                target: parts[3].to_string(),
                unit: parts[4].to_string(),
                deadline,
                title: parts[6..].join(" "),
            }
        }
        "inc" | "dec" => Command::Delta {
            domain: DomainId::from(arg(&parts, 1, "domain")?),
            goal: GoalId::from(arg(&parts, 2, "goal")?),
            delta: if head.eq_ignore_ascii_case("inc") { 1.0 } else { -1.0 },
        },
        "bump" => {
            let raw = arg(&parts, 3, "delta")?;
            Command::Delta {
                domain: DomainId::from(arg(&parts, 1, "domain")?),
                goal: GoalId::from(arg(&parts, 2, "goal")?),
                delta: raw
                    .parse()
                    .map_err(|_| anyhow!("delta is not a number: {}", raw))?,
            }
        }
        "show" => Command::Show(DomainId::from(arg(&parts, 1, "domain")?)),
        "today" => {
            let raw = arg(&parts, 1, "date")?;
            Command::Today(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| anyhow!("invalid date {}, expected YYYY-MM-DD", raw))?,
            )
        }
        "overview" => Command::Overview,
        "domains" => Command::Domains,
        "focus" => Command::Focus,
        "timeline" => Command::Timeline,
        "achievements" => Command::Achievements,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command: {} (try `help`)", other),
    };
    Ok(Some(command))
}

/// Session settings from the command line.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Fixed session date; wall clock when absent
    pub today: Option<NaiveDate>,
    /// Focus ranking config
    pub focus: FocusConfig,
    /// Emit JSON instead of text
    pub json: bool,
}

/// The single owner of the mutable "current state".
pub struct Session {
    state: BoardState,
    achievements: Achievements,
    config: SessionConfig,
}

impl Session {
    /// Start from the seeded board.
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            state: BoardState::seeded(),
            achievements: Achievements::catalog(),
            config,
        };
        // Seed data may already satisfy some rules
        session.achievements =
            derive_achievements(&session.state, &session.achievements, session.now());
        session
    }

    /// Current board snapshot.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Current achievements.
    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    /// Session date.
    pub fn today(&self) -> NaiveDate {
        self.config.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Timestamp for achievement unlocks.
    pub fn now(&self) -> Time {
        match self.config.today {
            Some(day) => day.and_hms_opt(12, 0, 0).map(|dt| dt.and_utc()).unwrap_or_else(Utc::now),
            None => Utc::now(),
        }
    }

    /// Render one of the read-only views.
    pub fn view(&self, command: &Command) -> Result<String> {
        let json = self.config.json;
        Ok(match command {
            Command::Overview => {
                let view = derive_overview(&self.state);
                if json { render::json(&view)? } else { render::overview(&view) }
            }
            Command::Domains => {
                let view = summarize_domains(&self.state);
                if json { render::json(&view)? } else { render::domains(&view) }
            }
            Command::Focus => {
                let view = derive_focus_scored(&self.state, self.today(), &self.config.focus);
                if json { render::json(&view)? } else { render::focus(&view) }
            }
            Command::Timeline => {
                let view = derive_timeline(&self.state);
                if json { render::json(&view)? } else { render::timeline(&view) }
            }
            Command::Achievements => {
                if json { render::json(&self.achievements)? } else { render::achievements(&self.achievements) }
            }
            Command::Show(id) => {
                let domain = self
                    .state
                    .domain(id)
                    .ok_or_else(|| anyhow!("unknown domain: {}", id))?;
                if json { render::json(domain)? } else { render::domain(domain) }
            }
            Command::Help => HELP.to_string(),
            other => bail!("not a view: {:?}", other),
        })
    }

    /// Swap in a new state and re-derive achievements. Returns announcement
    /// lines for anything newly unlocked.
    fn commit(&mut self, next: BoardState) -> Vec<String> {
        debug!("State version {} -> {}", self.state.version, next.version);
        self.state = next;

        let previous = std::mem::take(&mut self.achievements);
        self.achievements = derive_achievements(&self.state, &previous, self.now());
        newly_unlocked(&previous, &self.achievements)
            .into_iter()
            .filter_map(|id| self.achievements.get(id))
            .map(|a| format!("{} Achievement unlocked: {} - {}", a.icon, a.title, a.description))
            .collect()
    }

    /// Execute a command, returning the lines to print.
    ///
    /// Validation problems come back as `Err` and leave the state untouched.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        match command {
            Command::Add {
                domain,
                cadence,
                target,
                unit,
                deadline,
                title,
            } => {
                let spec = NewGoal::from_form(&title, &target, &unit, &cadence, deadline.as_deref())?;
                let next = self.state.add_goal(&domain, spec)?;
                let added = next
                    .domain(&domain)
                    .and_then(|d| d.goals.last())
                    .map(|g| format!("Added goal {} to {}: {}", g.id, domain, g.title))
                    .unwrap_or_default();
                let mut lines = vec![added];
                lines.extend(self.commit(next));
                Ok(lines)
            }
            Command::Delta { domain, goal, delta } => {
                self.state.goal(&domain, &goal)?;
                let update = apply_delta(&self.state, &domain, &goal, delta, self.today());

                let mut lines = Vec::new();
                if let Ok(g) = update.state.goal(&domain, &goal) {
                    lines.push(format!("{}: {} / {} {}", g.title, g.progress, g.target, g.unit));
                }
                if let Some(signal) = &update.completion {
                    lines.push(render::celebration(signal));
                }
                if update.state.version != self.state.version {
                    lines.extend(self.commit(update.state));
                }
                Ok(lines)
            }
            Command::Today(day) => {
                self.config.today = Some(day);
                Ok(vec![format!("Session date set to {}", day)])
            }
            Command::Quit => Ok(Vec::new()),
            view => Ok(vec![self.view(&view)?]),
        }
    }

    /// Read commands until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "Lifeboard - type `help` for commands")?;
        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            match self.execute(command) {
                Ok(lines) => {
                    for l in lines {
                        writeln!(output, "{}", l)?;
                    }
                }
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboard_core::AchievementId;

    fn session() -> Session {
        Session::new(SessionConfig {
            today: NaiveDate::from_ymd_opt(2026, 1, 5),
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(
            parse_command("inc gym g1").unwrap(),
            Some(Command::Delta {
                domain: "gym".into(),
                goal: "g1".into(),
                delta: 1.0
            })
        );
        assert_eq!(
            parse_command("add travel yearly 2 trips 2026-12-31 Visit Japan and Peru").unwrap(),
            Some(Command::Add {
                domain: "travel".into(),
                cadence: "yearly".into(),
                target: "2".into(),
                unit: "trips".into(),
                deadline: Some("2026-12-31".into()),
                title: "Visit Japan and Peru".into(),
            })
        );
        assert!(parse_command("bump gym g1 lots").is_err());
        assert!(parse_command("dance").is_err());
        assert!(parse_command("inc gym").is_err());
    }

    #[test]
    fn test_add_and_complete_goal() {
        let mut s = session();
        let lines = s.execute(parse_command("add gym daily 1 session - Stretch").unwrap().unwrap()).unwrap();
        assert!(lines[0].starts_with("Added goal"));

        let id = s.state().domain(&"gym".into()).unwrap().goals.last().unwrap().id.clone();
        let lines = s
            .execute(Command::Delta {
                domain: "gym".into(),
                goal: id,
                delta: 1.0,
            })
            .unwrap();
        assert!(lines.iter().any(|l| l.starts_with("🎉")));
    }

    #[test]
    fn test_invalid_add_keeps_state() {
        let mut s = session();
        let before = s.state().clone();
        let err = s
            .execute(parse_command("add gym weekly many reps - Pushups").unwrap().unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("not a number"));
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn test_help_views_parse() {
        let views = HELP.lines().find(|l| l.contains("overview")).unwrap();
        for word in views.split('|').map(str::trim) {
            let command = parse_command(word).unwrap().unwrap();
            assert!(session().view(&command).is_ok(), "{word}");
        }
        assert_eq!(parse_command("help").unwrap(), Some(Command::Help));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_seed_unlocks_first_goal() {
        let s = session();
        assert!(s.achievements().is_unlocked(AchievementId::FirstGoal));
    }

    #[test]
    fn test_run_script() {
        let mut s = session();
        let script = "overview\nbogus\ninc cycling c2\nquit\noverview\n";
        let mut out = Vec::new();
        s.run(script.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Goals: 22 total, 1 completed"));
        assert!(text.contains("error: unknown command: bogus"));
        assert!(text.contains("🎉 Completed \"Cycle 3 times this week\""));
        // Nothing after quit runs
        assert_eq!(text.matches("Goals: 22 total").count(), 1);
    }
}
