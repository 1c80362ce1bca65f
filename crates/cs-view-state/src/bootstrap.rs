//! Failure-isolating startup sequence.

use std::fmt::Display;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    NotStarted,
    Initializing,
    Ready,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("bootstrap cannot start from state {0:?}")]
    AlreadyStarted(BootState),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BootReport {
    pub completed: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl BootReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

type StepFn<E> = Box<dyn FnOnce() -> Result<(), E>>;

/// Ordered list of named setup steps, run once.
pub struct Bootstrap<E> {
    state: BootState,
    steps: Vec<(&'static str, StepFn<E>)>,
}

impl<E: Display> Default for Bootstrap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Display> Bootstrap<E> {
    pub fn new() -> Self {
        Self {
            state: BootState::NotStarted,
            steps: Vec::new(),
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn step<F>(&mut self, name: &'static str, run: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), E> + 'static,
    {
        self.steps.push((name, Box::new(run)));
        self
    }

    /// Runs every registered step in order. A failing step is logged and
    /// recorded; the rest still run.
    pub fn initialize(&mut self) -> Result<BootReport, BootstrapError> {
        if self.state != BootState::NotStarted {
            return Err(BootstrapError::AlreadyStarted(self.state));
        }
        self.state = BootState::Initializing;

        let mut report = BootReport::default();
        for (name, run) in self.steps.drain(..) {
            match run() {
                Ok(()) => report.completed.push(name),
                Err(err) => {
                    warn!(step = name, "setup step failed: {}", err);
                    report.failed.push((name, err.to_string()));
                }
            }
        }

        self.state = BootState::Ready;
        info!(
            completed = report.completed.len(),
            failed = report.failed.len(),
            "page initialised"
        );
        Ok(report)
    }
}

/// `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentReadiness {
    Loading,
    Interactive,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Immediate,
    OnEvent(&'static str),
}

impl DocumentReadiness {
    pub fn from_ready_state(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    pub fn dom_ready_trigger(self) -> Trigger {
        match self {
            Self::Loading => Trigger::OnEvent("DOMContentLoaded"),
            _ => Trigger::Immediate,
        }
    }

    /// The wasm module is instantiated asynchronously and often arrives after
    /// `load` has already fired; waiting for it then would never return.
    pub fn load_trigger(self) -> Trigger {
        match self {
            Self::Complete => Trigger::Immediate,
            _ => Trigger::OnEvent("load"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Step = Box<dyn FnOnce() -> Result<(), String>>;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Step) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log2 = log.clone();
        let make = move |name: &'static str| {
            let log = log2.clone();
            Box::new(move || {
                log.borrow_mut().push(name);
                Ok(())
            }) as Step
        };
        (log, make)
    }

    #[test]
    fn failing_step_does_not_block_the_rest() {
        let (log, make) = recorder();
        let mut boot: Bootstrap<String> = Bootstrap::new();
        boot.step("observer", make("observer"))
            .step("hover", || Err("no cards".to_owned()))
            .step("form", make("form"))
            .step("icons", make("icons"));

        let report = boot.initialize().expect("first run");

        assert_eq!(*log.borrow(), vec!["observer", "form", "icons"]);
        assert_eq!(report.completed, vec!["observer", "form", "icons"]);
        assert_eq!(report.failed, vec![("hover", "no cards".to_owned())]);
        assert!(!report.is_clean());
        assert_eq!(boot.state(), BootState::Ready);
    }

    #[test]
    fn ready_is_terminal() {
        let mut boot: Bootstrap<String> = Bootstrap::new();
        assert_eq!(boot.state(), BootState::NotStarted);
        assert!(boot.initialize().expect("first run").is_clean());

        assert_eq!(
            boot.initialize(),
            Err(BootstrapError::AlreadyStarted(BootState::Ready))
        );
    }

    #[test]
    fn triggers_follow_ready_state() {
        let loading = DocumentReadiness::from_ready_state("loading");
        assert_eq!(loading.dom_ready_trigger(), Trigger::OnEvent("DOMContentLoaded"));
        assert_eq!(loading.load_trigger(), Trigger::OnEvent("load"));

        let interactive = DocumentReadiness::from_ready_state("interactive");
        assert_eq!(interactive.dom_ready_trigger(), Trigger::Immediate);
        assert_eq!(interactive.load_trigger(), Trigger::OnEvent("load"));

        let complete = DocumentReadiness::from_ready_state("complete");
        assert_eq!(complete.dom_ready_trigger(), Trigger::Immediate);
        assert_eq!(complete.load_trigger(), Trigger::Immediate);
    }
}
