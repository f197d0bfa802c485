// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use eventline::{debug, info};
use image::RgbaImage;
use image::imageops::{self, FilterType};

use marq_core::fields::FIELD_KEYS;
use marq_core::{Extent, FieldKey, FieldValues, Rect};

use crate::drag::{DragController, DragState};
use crate::error::RenderError;
use crate::hit::{Hit, classify};
use crate::host::{Background, HostNode};
use crate::model::GeometryModel;
use crate::render::{Frame, redraw};
use crate::sync;

/// Images wider than this are scaled down for display.
pub const MAX_DISPLAY_WIDTH: i32 = 1400;

/// The display surface never collapses below this edge length.
const MIN_DISPLAY_EDGE: i32 = 64;

/// Minimum synthetic canvas when no image resolves.
const FALLBACK_MIN_EDGE: i32 = 1024;

pub const NO_BACKGROUND_HINT: &str =
    "No file-backed background image detected; editing over a neutral canvas.";

#[derive(Debug, Clone, Copy)]
pub struct EditorOptions {
    pub max_display_width: i32,
    pub guide_argb: u32,
    pub handle_argb: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_display_width: MAX_DISPLAY_WIDTH,
            guide_argb: 0xFF66_CCFF,
            handle_argb: 0xFFFF_D60A,
        }
    }
}

/// One editing session over one host node.
///
/// Owns the rectangle, drag state, scale factor, and background; everything
/// a host feeds in (pointer events in display-space, raw field text) is
/// converted and coerced here, and everything it reads back (field values,
/// rendered frames, the hover affordance) is derived from the model. Apply
/// and Cancel go through the owning [`SessionManager`], which is what makes
/// teardown final.
pub struct EditSession<N: HostNode> {
    node: N,
    opts: EditorOptions,
    model: GeometryModel,
    drag: DragController,
    background: Background,
    scale: f64,
    display: Extent,
    fields: FieldValues,
}

impl<N: HostNode> EditSession<N> {
    fn open(node: N, opts: EditorOptions) -> Self {
        let mut vals = FieldValues::default();
        for key in FIELD_KEYS {
            if let Some(v) = node.field(key) {
                if v.is_finite() {
                    vals.set(key, (v.round() as i64).clamp(0, i32::MAX as i64) as i32);
                }
            }
        }

        let model = GeometryModel::new(Rect::from(vals));
        let display = fallback_extent(model.rect());
        let fields = sync::to_fields(model.rect());
        debug!("session opened for node {} with {:?}", node.id(), model.rect());

        Self {
            node,
            opts,
            model,
            drag: DragController::new(),
            background: Background::Pending,
            scale: 1.0,
            display,
            fields,
        }
    }

    /// Settle background resolution. Called exactly once per session by the
    /// host collaborator; repeated calls are ignored. `None` (or an empty
    /// bitmap) selects fallback mode.
    pub fn set_background(&mut self, image: Option<RgbaImage>) {
        if !self.background.is_pending() {
            return;
        }

        match image {
            Some(img) if img.width() > 0 && img.height() > 0 => {
                let bounds = Extent::new(img.width() as i32, img.height() as i32);
                let max_w = self.opts.max_display_width.max(MIN_DISPLAY_EDGE);
                let ratio = if bounds.width > max_w {
                    max_w as f64 / bounds.width as f64
                } else {
                    1.0
                };
                let dw = (((bounds.width as f64) * ratio).round() as i32).max(MIN_DISPLAY_EDGE);
                let dh = (((bounds.height as f64) * ratio).round() as i32).max(MIN_DISPLAY_EDGE);

                self.scale = dw as f64 / bounds.width as f64;
                self.display = Extent::new(dw, dh);

                let scaled = if (dw as u32, dh as u32) == (img.width(), img.height()) {
                    img
                } else {
                    imageops::resize(&img, dw as u32, dh as u32, FilterType::Triangle)
                };

                self.model.set_bounds(bounds);
                self.fields = sync::to_fields(self.model.rect());
                info!(
                    "node {}: background {}x{}, display {}x{}, scale {:.3}",
                    self.node.id(),
                    bounds.width,
                    bounds.height,
                    dw,
                    dh,
                    self.scale
                );
                self.background = Background::Ready(scaled);
            }
            _ => {
                self.scale = 1.0;
                self.display = fallback_extent(self.model.rect());
                info!(
                    "node {}: no background, fallback canvas {}x{}",
                    self.node.id(),
                    self.display.width,
                    self.display.height
                );
                self.background = Background::Unavailable;
            }
        }
    }

    /// Hint for the host to surface when resolution settled without an
    /// image. `None` while pending or when a background is showing.
    pub fn hint(&self) -> Option<&'static str> {
        match self.background {
            Background::Unavailable => Some(NO_BACKGROUND_HINT),
            _ => None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.model.rect()
    }

    pub fn bounds(&self) -> Option<Extent> {
        self.model.bounds()
    }

    /// Current contents of the four numeric fields.
    pub fn fields(&self) -> FieldValues {
        self.fields
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn display(&self) -> Extent {
        self.display
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Pointer-down in display-space. Returns whether a drag began.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let (bx, by) = self.to_bounds(x, y);
        self.drag.pointer_down(&self.model, bx, by)
    }

    /// Pointer-move in display-space. Returns whether the rectangle changed
    /// (the host redraws and re-reads the fields on `true`).
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let (bx, by) = self.to_bounds(x, y);
        let changed = self.drag.pointer_move(&mut self.model, bx, by);
        if changed {
            self.fields = sync::to_fields(self.model.rect());
        }
        changed
    }

    /// Pointer-up, anywhere, button state irrelevant: the drag ends.
    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    /// What the cursor should suggest at an idle hover position.
    pub fn hover(&self, x: f64, y: f64) -> Hit {
        let (bx, by) = self.to_bounds(x, y);
        classify(self.model.rect(), bx, by)
    }

    /// One edited field, raw text as typed.
    pub fn field_edited(&mut self, key: FieldKey, raw: &str) -> FieldValues {
        let mut vals = self.fields;
        vals.set(key, sync::parse_field(raw, key));
        self.model.set_from_fields(vals.x, vals.y, vals.width, vals.height);
        self.fields = sync::to_fields(self.model.rect());
        self.fields
    }

    /// All four fields at once (x, y, width, height), raw text as typed.
    pub fn fields_edited(&mut self, raw: [&str; 4]) -> FieldValues {
        self.fields = sync::from_raw(&mut self.model, raw);
        self.fields
    }

    /// Cover the image exactly, or the fallback canvas when there is none.
    pub fn fit_to_bounds(&mut self) {
        match self.model.bounds() {
            Some(b) => self.model.fit_to(b),
            None => self.model.fit_to(self.display),
        }
        self.fields = sync::to_fields(self.model.rect());
    }

    /// Render the current state into a display-sized 0xAARRGGBB buffer.
    pub fn render(&self, buf: &mut [u8]) -> Result<(), RenderError> {
        let background = match &self.background {
            Background::Ready(img) => Some(img),
            _ => None,
        };
        redraw(
            &Frame {
                rect: self.model.rect(),
                scale: self.scale,
                display: self.display,
                background,
                guide_argb: self.opts.guide_argb,
                handle_argb: self.opts.handle_argb,
            },
            buf,
        )
    }

    fn apply(mut self) -> FieldValues {
        let vals = sync::to_fields(self.model.rect());
        for key in FIELD_KEYS {
            self.node.set_field(key, vals.get(key));
        }
        self.node.mark_dirty();
        info!("node {}: applied {:?}", self.node.id(), vals);
        vals
    }

    fn to_bounds(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x / self.scale).round() as i32,
            (y / self.scale).round() as i32,
        )
    }
}

fn fallback_extent(rect: Rect) -> Extent {
    Extent::new(
        rect.right().max(FALLBACK_MIN_EDGE),
        rect.bottom().max(FALLBACK_MIN_EDGE),
    )
}

/// Owns every live session, one per host node id.
///
/// Opening is idempotent: a second trigger while a node's session is live
/// returns the existing one. Apply and Cancel both remove the session before
/// anything else happens, so no event routed afterwards can reach a disposed
/// model and a host-side failure cannot keep a session alive.
pub struct SessionManager<N: HostNode> {
    opts: EditorOptions,
    sessions: HashMap<u64, EditSession<N>>,
}

impl<N: HostNode> Default for SessionManager<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: HostNode> SessionManager<N> {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(opts: EditorOptions) -> Self {
        Self { opts, sessions: HashMap::new() }
    }

    pub fn open_session(&mut self, node: N) -> &mut EditSession<N> {
        let id = node.id();
        match self.sessions.entry(id) {
            Entry::Occupied(e) => {
                debug!("node {id}: session already open, reusing");
                e.into_mut()
            }
            Entry::Vacant(v) => v.insert(EditSession::open(node, self.opts)),
        }
    }

    pub fn is_open(&self, id: u64) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn session(&mut self, id: u64) -> Option<&mut EditSession<N>> {
        self.sessions.get_mut(&id)
    }

    /// Commit the session's rectangle to its host node and tear down.
    /// Returns the committed values, or `None` if no session was open.
    pub fn apply(&mut self, id: u64) -> Option<FieldValues> {
        self.sessions.remove(&id).map(EditSession::apply)
    }

    /// Tear down with no writes. Returns whether a session was open.
    pub fn cancel(&mut self, id: u64) -> bool {
        let had = self.sessions.remove(&id).is_some();
        if had {
            info!("node {id}: session cancelled");
        }
        had
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct NodeState {
        fields: Vec<(FieldKey, f64)>,
        writes: Vec<(FieldKey, i32)>,
        dirty: u32,
    }

    #[derive(Clone)]
    struct TestNode {
        id: u64,
        state: Rc<RefCell<NodeState>>,
    }

    impl TestNode {
        fn new(id: u64) -> (Self, Rc<RefCell<NodeState>>) {
            let state = Rc::new(RefCell::new(NodeState::default()));
            (Self { id, state: state.clone() }, state)
        }
    }

    impl HostNode for TestNode {
        fn id(&self) -> u64 {
            self.id
        }

        fn field(&self, key: FieldKey) -> Option<f64> {
            self.state
                .borrow()
                .fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
        }

        fn set_field(&mut self, key: FieldKey, value: i32) {
            self.state.borrow_mut().writes.push((key, value));
        }

        fn mark_dirty(&mut self) {
            self.state.borrow_mut().dirty += 1;
        }
    }

    fn white_image(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn open_uses_node_fields_with_defaults_for_absent_ones() {
        let (node, _state) = TestNode::new(1);
        node.state
            .borrow_mut()
            .fields
            .extend([(FieldKey::X, 10.4), (FieldKey::Y, 20.0)]);

        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        assert_eq!(session.rect(), Rect::new(10, 20, 512, 512));
        assert_eq!(session.scale(), 1.0);
        // fallback canvas is visible before resolution settles
        assert_eq!(session.display(), Extent::new(1024, 1024));
        assert!(session.hint().is_none());
    }

    #[test]
    fn open_session_is_idempotent_per_node() {
        let (node, _) = TestNode::new(7);
        let mut mgr = SessionManager::new();

        mgr.open_session(node.clone()).fields_edited(["40", "50", "60", "70"]);
        // second trigger while open: same session, state intact
        let again = mgr.open_session(node);
        assert_eq!(again.rect(), Rect::new(40, 50, 60, 70));
    }

    #[test]
    fn background_sets_bounds_scale_and_clamps() {
        let (node, _) = TestNode::new(1);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);

        session.set_background(Some(white_image(2800, 1400)));
        assert_eq!(session.scale(), 0.5);
        assert_eq!(session.display(), Extent::new(1400, 700));
        assert_eq!(session.bounds(), Some(Extent::new(2800, 1400)));
        assert!(session.hint().is_none());

        // settles once: a late second call changes nothing
        session.set_background(None);
        assert_eq!(session.bounds(), Some(Extent::new(2800, 1400)));
    }

    #[test]
    fn small_images_display_at_native_size() {
        let (node, _) = TestNode::new(1);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        session.set_background(Some(white_image(800, 600)));
        assert_eq!(session.scale(), 1.0);
        assert_eq!(session.display(), Extent::new(800, 600));
    }

    #[test]
    fn unresolved_background_degrades_with_a_hint() {
        let (node, _) = TestNode::new(1);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        session.set_background(None);

        assert_eq!(session.hint(), Some(NO_BACKGROUND_HINT));
        assert!(session.bounds().is_none());
        // fields still editable, unconstrained except the floors
        let vals = session.fields_edited(["-5", "0", "0", "100"]);
        assert_eq!(vals, FieldValues { x: 0, y: 0, width: 1, height: 100 });
    }

    #[test]
    fn pointer_events_unscale_into_bounds_space() {
        let (node, _) = TestNode::new(1);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        session.set_background(Some(white_image(2800, 1400)));
        session.fields_edited(["0", "0", "512", "512"]);

        // display (256, 100) is bounds (512, 200): the right guide
        assert_eq!(session.hover(256.0, 100.0), Hit::Right);
        assert!(session.pointer_down(256.0, 100.0));
        assert!(session.pointer_move(375.0, 100.0)); // bounds x = 750
        assert_eq!(session.rect(), Rect::new(0, 0, 750, 512));
        assert_eq!(session.fields().width, 750);

        session.pointer_up();
        assert_eq!(session.drag_state(), DragState::Idle);
    }

    #[test]
    fn fit_to_bounds_covers_image_or_fallback_canvas() {
        let (node, _) = TestNode::new(1);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        session.set_background(Some(white_image(800, 600)));
        session.fit_to_bounds();
        assert_eq!(session.rect(), Rect::new(0, 0, 800, 600));

        let (node2, _) = TestNode::new(2);
        let session = mgr.open_session(node2);
        session.set_background(None);
        session.fit_to_bounds();
        assert_eq!(session.rect(), Rect::new(0, 0, 1024, 1024));
    }

    #[test]
    fn apply_commits_and_tears_down() {
        let (node, state) = TestNode::new(9);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        session.set_background(Some(white_image(800, 600)));
        session.fields_edited(["10", "20", "300", "400"]);

        let vals = mgr.apply(9).unwrap();
        assert_eq!(vals, FieldValues { x: 10, y: 20, width: 300, height: 400 });

        let st = state.borrow();
        assert_eq!(
            st.writes,
            vec![
                (FieldKey::X, 10),
                (FieldKey::Y, 20),
                (FieldKey::Width, 300),
                (FieldKey::Height, 400),
            ]
        );
        assert_eq!(st.dirty, 1);
        drop(st);

        // torn down: no session left, late events have nowhere to go
        assert!(!mgr.is_open(9));
        assert!(mgr.session(9).is_none());
        assert!(mgr.apply(9).is_none());
        assert_eq!(state.borrow().writes.len(), 4);
    }

    #[test]
    fn cancel_tears_down_without_writes() {
        let (node, state) = TestNode::new(3);
        let mut mgr = SessionManager::new();
        mgr.open_session(node).fields_edited(["1", "2", "3", "4"]);

        assert!(mgr.cancel(3));
        assert!(!mgr.is_open(3));
        assert!(!mgr.cancel(3));
        assert!(state.borrow().writes.is_empty());
        assert_eq!(state.borrow().dirty, 0);
    }

    #[test]
    fn concurrent_sessions_do_not_share_state() {
        let (a, _) = TestNode::new(1);
        let (b, _) = TestNode::new(2);
        let mut mgr = SessionManager::new();
        mgr.open_session(a).fields_edited(["11", "11", "11", "11"]);
        mgr.open_session(b).fields_edited(["22", "22", "22", "22"]);

        assert_eq!(mgr.session(1).unwrap().rect(), Rect::new(11, 11, 11, 11));
        assert_eq!(mgr.session(2).unwrap().rect(), Rect::new(22, 22, 22, 22));
    }

    #[test]
    fn render_matches_the_display_surface() {
        let (node, _) = TestNode::new(1);
        let mut mgr = SessionManager::new();
        let session = mgr.open_session(node);
        session.set_background(Some(white_image(128, 96)));

        let d = session.display();
        let mut buf = vec![0u8; d.width as usize * d.height as usize * 4];
        session.render(&mut buf).unwrap();

        let mut wrong = vec![0u8; 16];
        assert!(session.render(&mut wrong).is_err());
    }
}
