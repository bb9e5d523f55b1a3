use std::cell::RefCell;
use std::rc::Rc;

use attendance_charts::api::{InstanceRegistry, InstanceState, RegistrationOutcome};
use attendance_charts::render::InstanceHandle;
use attendance_charts::{ChartError, ChartResult};

#[derive(Debug)]
struct RecordingHandle {
    label: String,
    events: Rc<RefCell<Vec<String>>>,
    fail_dispose: bool,
    disposed: bool,
}

impl RecordingHandle {
    fn new(label: &str, events: &Rc<RefCell<Vec<String>>>) -> Self {
        events.borrow_mut().push(format!("create:{label}"));
        Self {
            label: label.to_owned(),
            events: Rc::clone(events),
            fail_dispose: false,
            disposed: false,
        }
    }

    fn failing(mut self) -> Self {
        self.fail_dispose = true;
        self
    }
}

impl InstanceHandle for RecordingHandle {
    fn dispose(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;
        self.events
            .borrow_mut()
            .push(format!("dispose:{}", self.label));
        if self.fail_dispose {
            return Err(ChartError::EngineRejected {
                definition_id: self.label.clone(),
                reason: "engine already torn down".to_owned(),
            });
        }
        Ok(())
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

fn events() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn first_registration_moves_entry_from_absent_to_live() {
    let log = events();
    let mut registry = InstanceRegistry::new();
    assert_eq!(registry.state("bar"), InstanceState::Absent);

    let registration =
        registry.register_or_replace("bar", || Ok(Some(RecordingHandle::new("a", &log))));

    assert_eq!(registration.outcome, RegistrationOutcome::Created);
    assert_eq!(registration.disposal_error, None);
    assert_eq!(registry.state("bar"), InstanceState::Live);
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn replacement_disposes_stale_handle_before_factory_runs() {
    let log = events();
    let mut registry = InstanceRegistry::new();
    registry.register_or_replace("bar", || Ok(Some(RecordingHandle::new("a", &log))));
    registry.register_or_replace("bar", || Ok(Some(RecordingHandle::new("b", &log))));

    assert_eq!(
        *log.borrow(),
        vec!["create:a", "dispose:a", "create:b"]
    );
    assert_eq!(registry.live_count(), 1);
    assert_eq!(registry.get("bar").map(|handle| handle.label.as_str()), Some("b"));
}

#[test]
fn factory_without_surface_leaves_entry_absent() {
    let log = events();
    let mut registry = InstanceRegistry::new();
    registry.register_or_replace("bar", || Ok(Some(RecordingHandle::new("a", &log))));

    let registration = registry.register_or_replace("bar", || Ok(None));

    assert_eq!(registration.outcome, RegistrationOutcome::Skipped);
    assert_eq!(registration.state(), InstanceState::Absent);
    assert_eq!(registry.state("bar"), InstanceState::Absent);
    assert_eq!(*log.borrow(), vec!["create:a", "dispose:a"]);
}

#[test]
fn factory_failure_is_reported_and_entry_stays_absent() {
    let mut registry = InstanceRegistry::<RecordingHandle>::new();

    let registration = registry.register_or_replace("heatmap", || {
        Err(ChartError::MissingEngineExtension {
            definition_id: "heatmap".to_owned(),
            extension: "matrix".to_owned(),
        })
    });

    assert!(matches!(
        registration.outcome,
        RegistrationOutcome::Failed(ChartError::MissingEngineExtension { .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn disposal_failure_does_not_block_replacement() {
    let log = events();
    let mut registry = InstanceRegistry::new();
    registry.register_or_replace("bar", || {
        Ok(Some(RecordingHandle::new("a", &log).failing()))
    });

    let registration =
        registry.register_or_replace("bar", || Ok(Some(RecordingHandle::new("b", &log))));

    assert_eq!(registration.outcome, RegistrationOutcome::Created);
    assert!(matches!(
        registration.disposal_error,
        Some(ChartError::DisposalFailed { ref definition_id, .. }) if definition_id == "bar"
    ));
    assert_eq!(registry.get("bar").map(|handle| handle.label.as_str()), Some("b"));
}

#[test]
fn explicit_dispose_is_idempotent_and_isolated() {
    let log = events();
    let mut registry = InstanceRegistry::new();
    registry.register_or_replace("bar", || Ok(Some(RecordingHandle::new("a", &log))));
    registry.register_or_replace("line", || Ok(Some(RecordingHandle::new("b", &log))));

    assert_eq!(registry.dispose("bar"), Ok(true));
    assert_eq!(registry.dispose("bar"), Ok(false));

    assert_eq!(registry.state("bar"), InstanceState::Absent);
    assert_eq!(registry.state("line"), InstanceState::Live);
    assert_eq!(*log.borrow(), vec!["create:a", "create:b", "dispose:a"]);
}

#[test]
fn dispose_all_clears_every_entry_and_collects_failures() {
    let log = events();
    let mut registry = InstanceRegistry::new();
    registry.register_or_replace("bar", || {
        Ok(Some(RecordingHandle::new("a", &log).failing()))
    });
    registry.register_or_replace("line", || Ok(Some(RecordingHandle::new("b", &log))));

    let failures = registry.dispose_all();

    assert_eq!(failures.len(), 1);
    assert!(registry.is_empty());
    assert!(registry.dispose_all().is_empty());
    assert_eq!(
        *log.borrow(),
        vec!["create:a", "create:b", "dispose:a", "dispose:b"]
    );
}

#[test]
fn handle_dispose_twice_is_a_no_op() {
    let log = events();
    let mut handle = RecordingHandle::new("a", &log);

    handle.dispose().expect("first dispose");
    handle.dispose().expect("second dispose");

    assert!(handle.is_disposed());
    assert_eq!(*log.borrow(), vec!["create:a", "dispose:a"]);
}
