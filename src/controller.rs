//! Reentrancy and debounce controller
//!
//! Decides when a highlight pass may run for one document:
//!
//! ```text
//! Idle ──change──▶ Scheduled ──deadline──▶ Running ──finish──▶ Idle
//!                   │    ▲
//!                   └────┘ newer change restarts the delay
//! ```
//!
//! Notifications tagged [`ChangeOrigin::Highlighter`] are the echo of a
//! rendered result being applied and are always discarded. Time is passed
//! in by the caller, so the controller never sleeps.

use std::time::{Duration, Instant};

use crate::language::LanguageId;
use crate::syntax::Selection;

/// What caused a buffer change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Initial content of a newly opened document
    Opened,
    /// User typing
    User,
    /// Content replaced from outside the editor view
    External,
    /// Write-back of a highlight result
    Highlighter,
}

/// Debounce delays per change origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    pub typing: Duration,
    pub external: Duration,
}

impl Debounce {
    pub fn delay_for(&self, origin: ChangeOrigin) -> Duration {
        match origin {
            ChangeOrigin::Opened | ChangeOrigin::Highlighter => Duration::ZERO,
            ChangeOrigin::User => self.typing,
            ChangeOrigin::External => self.external,
        }
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(300),
            external: Duration::from_millis(100),
        }
    }
}

/// Buffer contents captured at notification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub selection: Selection,
}

/// Identifies one highlight pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassId(pub u64);

/// A pass the caller must now run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    pub id: PassId,
    pub language: LanguageId,
    pub snapshot: Snapshot,
}

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Scheduled,
    Running,
}

/// Outcome of a change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A pass is due at the deadline
    Scheduled { deadline: Instant },
    /// Self-originated change; dropped
    Discarded,
    /// A pass is running; the change is held until it finishes
    Deferred,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Scheduled {
        snapshot: Snapshot,
        deadline: Instant,
    },
    Running {
        id: PassId,
        /// Latest change received while running, with its delay
        deferred: Option<(Snapshot, Duration)>,
    },
}

/// Per-document highlight scheduling state machine
#[derive(Debug)]
pub struct Controller {
    phase: Phase,
    language: LanguageId,
    debounce: Debounce,
    next_id: u64,
}

impl Controller {
    pub fn new(language: LanguageId, debounce: Debounce) -> Self {
        Self {
            phase: Phase::Idle,
            language,
            debounce,
            next_id: 1,
        }
    }

    pub fn state(&self) -> ControllerState {
        match self.phase {
            Phase::Idle => ControllerState::Idle,
            Phase::Scheduled { .. } => ControllerState::Scheduled,
            Phase::Running { .. } => ControllerState::Running,
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Re-declare the active language without touching the schedule
    pub fn set_language(&mut self, language: LanguageId) {
        self.language = language;
    }

    /// When the scheduled pass is due, if one is scheduled
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Scheduled { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// Handle a buffer change notification
    pub fn notify(
        &mut self,
        snapshot: Snapshot,
        language: LanguageId,
        origin: ChangeOrigin,
        now: Instant,
    ) -> Notice {
        if origin == ChangeOrigin::Highlighter {
            tracing::trace!(state = ?self.state(), "discarding self-originated change");
            return Notice::Discarded;
        }

        self.language = language;
        let delay = self.debounce.delay_for(origin);

        match &mut self.phase {
            Phase::Running { deferred, .. } => {
                *deferred = Some((snapshot, delay));
                Notice::Deferred
            }
            phase => {
                let deadline = now + delay;
                if matches!(phase, Phase::Scheduled { .. }) {
                    tracing::trace!("superseding scheduled pass");
                }
                *phase = Phase::Scheduled { snapshot, deadline };
                Notice::Scheduled { deadline }
            }
        }
    }

    /// Start the scheduled pass if its deadline has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<Pass> {
        if !matches!(self.phase, Phase::Scheduled { deadline, .. } if deadline <= now) {
            return None;
        }

        let id = PassId(self.next_id);
        match std::mem::replace(&mut self.phase, Phase::Running { id, deferred: None }) {
            Phase::Scheduled { snapshot, .. } => {
                self.next_id += 1;
                Some(Pass {
                    id,
                    language: self.language,
                    snapshot,
                })
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// End a running pass, successful or not
    ///
    /// A change deferred during the pass is scheduled afresh.
    pub fn finish(&mut self, pass: PassId, now: Instant) {
        let deferred = match &mut self.phase {
            Phase::Running { id, deferred } if *id == pass => deferred.take(),
            _ => {
                tracing::warn!(pass = pass.0, "finish for a pass that is not running");
                return;
            }
        };

        self.phase = match deferred {
            Some((snapshot, delay)) => Phase::Scheduled {
                snapshot,
                deadline: now + delay,
            },
            None => Phase::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str) -> Snapshot {
        Snapshot {
            text: text.to_string(),
            selection: Selection::caret(text.chars().count()),
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> Controller {
        Controller::new(LanguageId::Python, Debounce::default())
    }

    #[test]
    fn test_change_schedules_with_typing_delay() {
        let mut c = controller();
        let t0 = Instant::now();
        assert_eq!(c.state(), ControllerState::Idle);

        let notice = c.notify(snap("a"), LanguageId::Python, ChangeOrigin::User, t0);
        assert_eq!(notice, Notice::Scheduled { deadline: t0 + ms(300) });
        assert_eq!(c.state(), ControllerState::Scheduled);
        assert!(c.poll(t0 + ms(299)).is_none());
        assert!(c.poll(t0 + ms(300)).is_some());
        assert_eq!(c.state(), ControllerState::Running);
    }

    #[test]
    fn test_external_and_opened_delays() {
        let mut c = controller();
        let t0 = Instant::now();
        c.notify(snap("a"), LanguageId::Python, ChangeOrigin::External, t0);
        assert_eq!(c.deadline(), Some(t0 + ms(100)));

        c.notify(snap("a"), LanguageId::Python, ChangeOrigin::Opened, t0);
        assert_eq!(c.deadline(), Some(t0));
    }

    #[test]
    fn test_burst_runs_once_on_last_snapshot() {
        let mut c = controller();
        let t0 = Instant::now();
        c.notify(snap("d"), LanguageId::Python, ChangeOrigin::User, t0);
        c.notify(snap("de"), LanguageId::Python, ChangeOrigin::User, t0 + ms(100));
        c.notify(snap("def"), LanguageId::Python, ChangeOrigin::User, t0 + ms(200));

        // The first deadline has passed but was superseded
        assert!(c.poll(t0 + ms(300)).is_none());
        let pass = c.poll(t0 + ms(500)).unwrap();
        assert_eq!(pass.snapshot.text, "def");

        c.finish(pass.id, t0 + ms(501));
        assert_eq!(c.state(), ControllerState::Idle);
        assert!(c.poll(t0 + ms(10_000)).is_none());
    }

    #[test]
    fn test_self_originated_change_while_running_is_discarded() {
        let mut c = controller();
        let t0 = Instant::now();
        c.notify(snap("x"), LanguageId::Python, ChangeOrigin::Opened, t0);
        let pass = c.poll(t0).unwrap();

        let notice = c.notify(snap("x"), LanguageId::Python, ChangeOrigin::Highlighter, t0);
        assert_eq!(notice, Notice::Discarded);
        assert_eq!(c.state(), ControllerState::Running);

        c.finish(pass.id, t0);
        assert_eq!(c.state(), ControllerState::Idle);
        assert!(c.deadline().is_none());
    }

    #[test]
    fn test_self_originated_change_while_idle_is_discarded() {
        let mut c = controller();
        let notice = c.notify(snap("x"), LanguageId::Python, ChangeOrigin::Highlighter, Instant::now());
        assert_eq!(notice, Notice::Discarded);
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn test_running_rejects_overlapping_pass() {
        let mut c = controller();
        let t0 = Instant::now();
        c.notify(snap("a"), LanguageId::Python, ChangeOrigin::Opened, t0);
        let pass = c.poll(t0).unwrap();

        let notice = c.notify(snap("ab"), LanguageId::Python, ChangeOrigin::User, t0);
        assert_eq!(notice, Notice::Deferred);
        assert!(c.poll(t0 + ms(1_000)).is_none());

        c.finish(pass.id, t0 + ms(10));
        assert_eq!(c.state(), ControllerState::Scheduled);
        assert_eq!(c.deadline(), Some(t0 + ms(310)));
        let next = c.poll(t0 + ms(310)).unwrap();
        assert_eq!(next.snapshot.text, "ab");
        assert!(next.id > pass.id);
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut c = controller();
        let t0 = Instant::now();
        c.notify(snap("a"), LanguageId::Python, ChangeOrigin::Opened, t0);
        let pass = c.poll(t0).unwrap();
        c.finish(PassId(pass.id.0 + 7), t0);
        assert_eq!(c.state(), ControllerState::Running);
    }

    #[test]
    fn test_set_language_keeps_schedule() {
        let mut c = controller();
        let t0 = Instant::now();
        c.notify(snap("a"), LanguageId::Python, ChangeOrigin::User, t0);
        c.set_language(LanguageId::Java);
        assert_eq!(c.state(), ControllerState::Scheduled);
        assert_eq!(c.deadline(), Some(t0 + ms(300)));
        assert_eq!(c.poll(t0 + ms(300)).unwrap().language, LanguageId::Java);
    }
}
