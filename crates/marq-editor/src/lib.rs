// Author: Dustin Pilgrim
// License: MIT
//
// Interactive crop-rectangle editing engine: a host feeds pointer and field
// events into an EditSession and presents the frames it renders. The host
// side (node graph, dialog chrome, image fetching) stays out of this crate.

pub mod drag;
pub mod error;
pub mod hit;
pub mod host;
pub mod model;
pub mod pixels;
pub mod render;
pub mod session;
pub mod sync;

pub use drag::{DragController, DragState, EdgeKind};
pub use error::RenderError;
pub use hit::{EDGE_TOLERANCE, Hit, classify};
pub use host::{Background, HostNode};
pub use model::GeometryModel;
pub use session::{EditSession, EditorOptions, NO_BACKGROUND_HINT, SessionManager};
