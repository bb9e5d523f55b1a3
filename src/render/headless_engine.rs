use std::cell::RefCell;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use crate::core::ChartKind;
use crate::error::{ChartError, ChartResult};
use crate::host::Surface;
use crate::render::{EngineExtension, InstanceHandle, RenderEngine, RenderPayload, RenderRequest};

/// Counters exposed by `HeadlessEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadlessEngineStats {
    pub created: usize,
    pub disposed: usize,
    pub live: usize,
}

#[derive(Debug, Default)]
struct HeadlessEngineState {
    next_instance_id: u64,
    stats: HeadlessEngineStats,
    /// Surface id -> live instance id.
    occupied_surfaces: IndexMap<String, u64>,
    last_requests: IndexMap<String, RenderRequest>,
}

/// Recording engine used by tests and headless hosts.
///
/// It keeps no pixels but enforces the same surface ownership rule as a real
/// engine: a surface that already hosts a live instance rejects a second one.
#[derive(Debug, Clone)]
pub struct HeadlessEngine {
    state: Rc<RefCell<HeadlessEngineState>>,
    extensions: IndexSet<EngineExtension>,
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessEngine {
    /// Creates an engine with every known extension installed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessEngineState::default())),
            extensions: IndexSet::from([EngineExtension::Matrix]),
        }
    }

    #[must_use]
    pub fn without_extension(mut self, extension: EngineExtension) -> Self {
        self.extensions.shift_remove(&extension);
        self
    }

    #[must_use]
    pub fn stats(&self) -> HeadlessEngineStats {
        self.state.borrow().stats
    }

    /// Last request accepted for `definition_id`, if any.
    #[must_use]
    pub fn last_request(&self, definition_id: &str) -> Option<RenderRequest> {
        self.state
            .borrow()
            .last_requests
            .get(definition_id)
            .cloned()
    }

    #[must_use]
    pub fn is_surface_occupied(&self, surface_id: &str) -> bool {
        self.state
            .borrow()
            .occupied_surfaces
            .contains_key(surface_id)
    }
}

fn payload_kind(payload: &RenderPayload) -> ChartKind {
    match payload {
        RenderPayload::Bar(_) => ChartKind::Bar,
        RenderPayload::Line(_) => ChartKind::Line,
        RenderPayload::Matrix(_) => ChartKind::Matrix,
    }
}

impl RenderEngine for HeadlessEngine {
    type Handle = HeadlessInstance;

    fn has_extension(&self, extension: EngineExtension) -> bool {
        self.extensions.contains(&extension)
    }

    fn create_instance(
        &mut self,
        surface: &Surface,
        request: RenderRequest,
    ) -> ChartResult<Self::Handle> {
        if payload_kind(&request.payload) != request.kind {
            return Err(ChartError::EngineRejected {
                definition_id: request.definition_id,
                reason: "payload does not match requested chart kind".to_owned(),
            });
        }
        if request.kind == ChartKind::Matrix && !self.has_extension(EngineExtension::Matrix) {
            return Err(ChartError::MissingEngineExtension {
                definition_id: request.definition_id,
                extension: EngineExtension::Matrix.name().to_owned(),
            });
        }

        let mut state = self.state.borrow_mut();
        if state.occupied_surfaces.contains_key(surface.id()) {
            return Err(ChartError::EngineRejected {
                definition_id: request.definition_id,
                reason: format!("surface `{}` is already in use", surface.id()),
            });
        }

        state.next_instance_id += 1;
        let instance_id = state.next_instance_id;
        state
            .occupied_surfaces
            .insert(surface.id().to_owned(), instance_id);
        state.stats.created += 1;
        state.stats.live += 1;

        let definition_id = request.definition_id.clone();
        state.last_requests.insert(definition_id.clone(), request);

        Ok(HeadlessInstance {
            instance_id,
            definition_id,
            surface_id: surface.id().to_owned(),
            disposed: false,
            state: Rc::clone(&self.state),
        })
    }
}

/// Handle to an instance created by `HeadlessEngine`.
#[derive(Debug)]
pub struct HeadlessInstance {
    instance_id: u64,
    definition_id: String,
    surface_id: String,
    disposed: bool,
    state: Rc<RefCell<HeadlessEngineState>>,
}

impl HeadlessInstance {
    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    #[must_use]
    pub fn definition_id(&self) -> &str {
        &self.definition_id
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }
}

impl InstanceHandle for HeadlessInstance {
    fn dispose(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;

        let mut state = self.state.borrow_mut();
        if state.occupied_surfaces.get(&self.surface_id) == Some(&self.instance_id) {
            state.occupied_surfaces.shift_remove(&self.surface_id);
        }
        state.stats.disposed += 1;
        state.stats.live -= 1;
        Ok(())
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}
