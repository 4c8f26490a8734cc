//! Editor facade
//!
//! One engine object owning the live path, its history, the viewport and the
//! interaction state. Front ends feed it [`EditorEvent`]s and read back the
//! path, viewport and derived SVG.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::history::HistoryManager;
use crate::interaction::{
    HitTarget, HitTester, InteractionState, Key, Modifiers, PendingClick, Selection,
};
use crate::model::{Path, PointRole};
use crate::svg_export;
use crate::viewport::{snap_to_grid, Viewport};
use curvekit_core::{PathError, Point};
use curvekit_settings::EditorSettings;

/// Display language of the front end. The engine only tracks the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// Commands issued from toolbars, menus and shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorCommand {
    Undo,
    Redo,
    ToggleClosePath,
    ToggleSnap,
    DeleteSelected,
    Clear,
    Export,
    ToggleApplySymmetry,
    ToggleLanguage,
}

/// Raw input, in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditorEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    PointerLeave,
    Wheel {
        x: f64,
        y: f64,
        delta_y: f64,
    },
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
    Command {
        command: EditorCommand,
    },
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    /// Nothing visible changed.
    Unchanged,
    /// Live state changed without a history entry (drag, pan, zoom, mode).
    Updated,
    /// A history entry was committed.
    Committed,
    /// The exported SVG document.
    Exported(String),
    /// The edit was refused; state is unchanged.
    Rejected(PathError),
}

impl EditorOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, EditorOutcome::Committed)
    }
}

/// The path-editing engine.
#[derive(Debug, Clone)]
pub struct Editor {
    path: Path,
    history: HistoryManager,
    viewport: Viewport,
    hit_tester: HitTester,
    settings: EditorSettings,
    snap_enabled: bool,
    state: InteractionState,
    pending: Option<PendingClick>,
    space_held: bool,
    selection: Option<Selection>,
    language: Language,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_settings(&EditorSettings::default())
    }

    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            path: Path::new(),
            history: HistoryManager::with_depth(settings.history_depth),
            viewport: Viewport::with_settings(settings),
            hit_tester: HitTester::from_settings(settings),
            settings: settings.clone(),
            snap_enabled: settings.snap_enabled,
            state: InteractionState::Idle,
            pending: None,
            space_held: false,
            selection: None,
            language: Language::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn pending_click(&self) -> Option<PendingClick> {
        self.pending
    }

    pub fn is_space_held(&self) -> bool {
        self.space_held
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Whether the symmetry command can currently succeed on some edge.
    pub fn can_apply_symmetry(&self) -> bool {
        self.path.is_closed()
    }

    pub fn path_description(&self) -> String {
        svg_export::path_description(&self.path)
    }

    pub fn export_svg(&self) -> String {
        svg_export::export_document(&self.path_description(), self.path.is_closed())
    }

    /// Dispatches one input event.
    pub fn handle_event(&mut self, event: EditorEvent) -> EditorOutcome {
        match event {
            EditorEvent::PointerDown { x, y, modifiers } => {
                self.pointer_down(Point::new(x, y), modifiers)
            }
            EditorEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            EditorEvent::PointerUp { x, y } => self.pointer_up(Some(Point::new(x, y))),
            EditorEvent::PointerLeave => self.pointer_up(None),
            EditorEvent::Wheel { x, y, delta_y } => {
                if delta_y == 0.0 {
                    return EditorOutcome::Unchanged;
                }
                self.viewport.wheel(Point::new(x, y), delta_y);
                debug!("Wheel zoom: {}", self.viewport);
                EditorOutcome::Updated
            }
            EditorEvent::KeyDown { key } => self.key_down(key),
            EditorEvent::KeyUp { key } => self.key_up(key),
            EditorEvent::Command { command } => self.execute(command),
        }
    }

    /// Runs a command from the command surface.
    ///
    /// A drag in progress is released first, so its edit lands in history
    /// before the command touches the path or the interaction mode.
    pub fn execute(&mut self, command: EditorCommand) -> EditorOutcome {
        debug!("Command: {:?}", command);
        let settled = match command {
            EditorCommand::ToggleSnap | EditorCommand::ToggleLanguage | EditorCommand::Export => {
                false
            }
            _ => self.settle_drag(),
        };
        match self.run_command(command) {
            EditorOutcome::Unchanged if settled => EditorOutcome::Committed,
            outcome => outcome,
        }
    }

    fn run_command(&mut self, command: EditorCommand) -> EditorOutcome {
        match command {
            EditorCommand::Undo => {
                if self.history.undo() {
                    self.restore_current();
                    EditorOutcome::Updated
                } else {
                    EditorOutcome::Unchanged
                }
            }
            EditorCommand::Redo => {
                if self.history.redo() {
                    self.restore_current();
                    EditorOutcome::Updated
                } else {
                    EditorOutcome::Unchanged
                }
            }
            EditorCommand::ToggleClosePath => self.toggle_close(),
            EditorCommand::ToggleSnap => {
                self.snap_enabled = !self.snap_enabled;
                EditorOutcome::Updated
            }
            EditorCommand::DeleteSelected => self.delete_selected(),
            EditorCommand::Clear => {
                self.cancel_gesture();
                self.selection = None;
                if self.path.is_empty() {
                    return EditorOutcome::Unchanged;
                }
                self.commit(Path::new())
            }
            EditorCommand::Export => {
                let document = self.export_svg();
                info!(
                    "Exported path with {} nodes ({} bytes)",
                    self.path.len(),
                    document.len()
                );
                EditorOutcome::Exported(document)
            }
            EditorCommand::ToggleApplySymmetry => {
                self.pending = None;
                self.state = match self.state {
                    InteractionState::PickingSymmetryEdge => InteractionState::Idle,
                    _ => InteractionState::PickingSymmetryEdge,
                };
                EditorOutcome::Updated
            }
            EditorCommand::ToggleLanguage => {
                self.language = self.language.toggled();
                EditorOutcome::Updated
            }
        }
    }

    fn pointer_down(&mut self, device: Point, modifiers: Modifiers) -> EditorOutcome {
        let world = self.viewport.device_to_world(device);

        if self.state == InteractionState::PickingSymmetryEdge {
            self.state = InteractionState::Idle;
            return self.apply_symmetry(world);
        }

        if self.space_held {
            self.pending = None;
            self.state = InteractionState::Panning { last: device };
            return EditorOutcome::Updated;
        }

        match self
            .hit_tester
            .hit_test(&self.path, world, self.viewport.zoom())
        {
            Some(HitTarget::Point { index, role }) => {
                self.begin_drag(index, role);
                EditorOutcome::Updated
            }
            Some(HitTarget::Segment { segment, t }) => {
                match self.path.insert_on_segment(segment, t) {
                    Ok((path, index)) => {
                        debug!("Inserted node {} on segment {} at t={:.3}", index, segment, t);
                        self.path = path;
                        self.begin_drag(index, PointRole::Anchor);
                        EditorOutcome::Updated
                    }
                    Err(e) => EditorOutcome::Rejected(e),
                }
            }
            None if modifiers.suppresses_append() => EditorOutcome::Unchanged,
            None => {
                self.pending = Some(PendingClick {
                    world,
                    kind: modifiers.node_kind(),
                });
                EditorOutcome::Unchanged
            }
        }
    }

    fn pointer_move(&mut self, device: Point) -> EditorOutcome {
        match self.state {
            InteractionState::Panning { last } => {
                self.viewport.pan_by(device - last);
                self.state = InteractionState::Panning { last: device };
                EditorOutcome::Updated
            }
            InteractionState::Dragging { index, role } => {
                let target = self.snapped(self.viewport.device_to_world(device));
                let moved = match role {
                    PointRole::Anchor => self.path.move_anchor(index, target),
                    _ => self.path.move_handle(index, role, target),
                };
                match moved {
                    Ok(()) => EditorOutcome::Updated,
                    Err(e) => {
                        warn!("Drag target vanished: {}", e);
                        self.state = InteractionState::Idle;
                        EditorOutcome::Rejected(e)
                    }
                }
            }
            InteractionState::Idle => {
                let Some(pending) = self.pending else {
                    return EditorOutcome::Unchanged;
                };
                if self.exceeds_drag_threshold(pending.world, device) {
                    debug!("Pending click cancelled by pointer travel");
                    self.pending = None;
                }
                EditorOutcome::Unchanged
            }
            InteractionState::PickingSymmetryEdge => EditorOutcome::Unchanged,
        }
    }

    /// Pointer release. `None` means the pointer left the canvas.
    fn pointer_up(&mut self, device: Option<Point>) -> EditorOutcome {
        match self.state {
            InteractionState::Panning { .. } => {
                self.state = InteractionState::Idle;
                EditorOutcome::Updated
            }
            InteractionState::Dragging { .. } => {
                if self.settle_drag() {
                    EditorOutcome::Committed
                } else {
                    EditorOutcome::Unchanged
                }
            }
            InteractionState::Idle => {
                let Some(pending) = self.pending.take() else {
                    return EditorOutcome::Unchanged;
                };
                match device {
                    Some(device) if !self.exceeds_drag_threshold(pending.world, device) => {
                        let anchor = self.snapped(pending.world);
                        let path = self.path.append(anchor, pending.kind);
                        self.selection = None;
                        self.commit(path)
                    }
                    _ => EditorOutcome::Unchanged,
                }
            }
            InteractionState::PickingSymmetryEdge => EditorOutcome::Unchanged,
        }
    }

    fn key_down(&mut self, key: Key) -> EditorOutcome {
        match key {
            Key::Space => {
                self.space_held = true;
                EditorOutcome::Unchanged
            }
            Key::Delete | Key::Backspace => self.execute(EditorCommand::DeleteSelected),
            Key::Escape => {
                let changed = self.cancel_gesture();
                if changed {
                    EditorOutcome::Updated
                } else {
                    EditorOutcome::Unchanged
                }
            }
            Key::Other => EditorOutcome::Unchanged,
        }
    }

    fn key_up(&mut self, key: Key) -> EditorOutcome {
        if key != Key::Space {
            return EditorOutcome::Unchanged;
        }
        self.space_held = false;
        if matches!(self.state, InteractionState::Panning { .. }) {
            self.state = InteractionState::Idle;
            return EditorOutcome::Updated;
        }
        EditorOutcome::Unchanged
    }

    fn toggle_close(&mut self) -> EditorOutcome {
        self.cancel_gesture();
        if self.path.is_closed() {
            return self.commit(self.path.open());
        }
        match self.path.close() {
            Ok(path) => self.commit(path),
            Err(e) => {
                debug!("Close refused: {}", e);
                EditorOutcome::Rejected(e)
            }
        }
    }

    fn delete_selected(&mut self) -> EditorOutcome {
        let Some(selection) = self.selection.take() else {
            return EditorOutcome::Unchanged;
        };
        self.cancel_gesture();
        match self.path.delete_node(selection.index) {
            Ok(path) => self.commit(path),
            Err(e) => EditorOutcome::Rejected(e),
        }
    }

    fn apply_symmetry(&mut self, world: Point) -> EditorOutcome {
        match self
            .path
            .reflect_and_merge(world, self.settings.nearest_samples)
        {
            Ok(path) => {
                info!(
                    "Symmetry applied: {} nodes -> {} nodes",
                    self.path.len(),
                    path.len()
                );
                self.selection = None;
                self.commit(path)
            }
            Err(e) => {
                if e.is_user_facing() {
                    warn!("Symmetry rejected: {}", e);
                } else {
                    debug!("Symmetry unavailable: {}", e);
                }
                EditorOutcome::Rejected(e)
            }
        }
    }

    fn begin_drag(&mut self, index: usize, role: PointRole) {
        self.pending = None;
        self.selection = Some(Selection { index, role });
        self.state = InteractionState::Dragging { index, role };
        debug!("Dragging {:?} of node {}", role, index);
    }

    /// Ends an active drag, committing the dragged path if it differs from
    /// the current history entry. Returns whether a commit happened.
    fn settle_drag(&mut self) -> bool {
        if !matches!(self.state, InteractionState::Dragging { .. }) {
            return false;
        }
        self.state = InteractionState::Idle;
        if self.path == self.history.current().path {
            return false;
        }
        self.commit(self.path.clone());
        true
    }

    /// Drops any pending click, symmetry pick or pan. Returns whether anything
    /// was cancelled.
    fn cancel_gesture(&mut self) -> bool {
        let had_pending = self.pending.take().is_some();
        let had_mode = matches!(
            self.state,
            InteractionState::PickingSymmetryEdge | InteractionState::Panning { .. }
        );
        if had_mode {
            self.state = InteractionState::Idle;
        }
        had_pending || had_mode
    }

    fn commit(&mut self, path: Path) -> EditorOutcome {
        self.path = path;
        self.history.commit(self.path.clone());
        debug!(
            "Committed path: {} nodes, closed: {}",
            self.path.len(),
            self.path.is_closed()
        );
        EditorOutcome::Committed
    }

    fn restore_current(&mut self) {
        self.path = self.history.current().path.clone();
        self.selection = None;
        self.pending = None;
        self.state = InteractionState::Idle;
    }

    fn snapped(&self, world: Point) -> Point {
        if self.snap_enabled {
            snap_to_grid(world, self.settings.grid_size)
        } else {
            world
        }
    }

    fn exceeds_drag_threshold(&self, start_world: Point, device: Point) -> bool {
        let world = self.viewport.device_to_world(device);
        start_world.distance_to(&world)
            > self
                .viewport
                .device_length_to_world(self.settings.drag_threshold)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
