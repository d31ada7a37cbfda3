pub mod color;
pub mod constants;
pub mod geometry;
pub mod hit;
pub mod id;
pub mod model;
pub mod split;
pub mod store;

pub use color::{ColorConfig, pick_distinct_color};
pub use geometry::{point_in_rect, rect_from_drag};
pub use hit::find_topmost_at;
pub use id::TabletId;
pub use model::*;
pub use split::{intersects, split_rect, split_tablet};
pub use store::TabletStore;
