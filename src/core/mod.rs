pub mod axes;
pub mod color;
pub mod domain;
pub mod geometry;
pub mod polygon;
pub mod projection;
pub mod scale;
pub mod types;

pub use axes::{Axis, AxisSet, extract_axes};
pub use color::{CategoryColor, ColorMap, build_color_map};
pub use domain::{DomainTicks, compute_domain_ticks, min_max};
pub use geometry::{CIRCLE_RADIANS, PolarProjector, RADIANS_TO_ROTATE};
pub use polygon::{Polygon, group_polygons};
pub use projection::{ProjectedPoint, project_rows};
pub use scale::{LinearRadialScale, RadialScale, nice_ticks};
pub use types::{ChartMargins, ChartSize, Color, ColumnBindings, PixelPoint, Row};
