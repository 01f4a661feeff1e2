pub mod anchor;
pub mod collect;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod guides;
pub mod labels;
pub mod lock;
pub mod snap;

pub use anchor::{Anchor, AnchorKind, AnchorSource, Anchors, FixedEdge, Lock, ResizeDirection};
pub use collect::collect_anchors;
pub use config::SnapConfig;
pub use engine::{ResizeSnapParams, SnapResult, compute_resize_snap};
pub use geometry::{Axis, Line, Rect, Viewport};
pub use guides::{GuideLine, GuideLines};
pub use labels::{DistanceLabel, DistanceLabelParams, LabelKind, compute_distance_labels};
pub use snap::{apply_axis_snap, find_best_axis_snap};
