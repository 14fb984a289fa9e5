use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisSet, ChartSize, Color, ColorMap, ColumnBindings, DomainTicks, PixelPoint, PolarProjector,
    RadialScale, Row,
};
use crate::error::{RadarError, RadarResult};
use crate::render::Surface;

mod engine_snapshot;
mod render_pass;
mod retained_state;

pub use engine_snapshot::EngineSnapshot;

pub(crate) use retained_state::RetainedState;

/// Row predicate applied before the exclusion filter on every render.
pub type FilterPredicate = Box<dyn Fn(&Row) -> bool + Send + Sync>;

/// Immutable engine configuration, accumulated through chainable setters and
/// frozen when the engine is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarEngineConfig {
    pub size: ChartSize,
    pub columns: ColumnBindings,
    pub tick_count: usize,
    pub palette: Vec<Color>,
    pub transition_duration_ms: u64,
    pub axis_label_margin: f64,
    pub legend_enabled: bool,
    pub legend_position: PixelPoint,
}

impl RadarEngineConfig {
    #[must_use]
    pub fn new(
        size: ChartSize,
        axis_column: impl Into<String>,
        value_column: impl Into<String>,
        polygon_column: impl Into<String>,
    ) -> Self {
        Self {
            size,
            columns: ColumnBindings {
                axis_column: axis_column.into(),
                value_column: value_column.into(),
                polygon_column: polygon_column.into(),
            },
            tick_count: 10,
            palette: Vec::new(),
            transition_duration_ms: 400,
            axis_label_margin: 24.0,
            legend_enabled: true,
            legend_position: PixelPoint::new(20.0, 20.0),
        }
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_axis_label_margin(mut self, margin: f64) -> Self {
        self.axis_label_margin = margin;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: PixelPoint) -> Self {
        self.legend_enabled = true;
        self.legend_position = position;
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.legend_enabled = false;
        self
    }

    fn validate(&self) -> RadarResult<()> {
        self.size.validate()?;

        for (name, column) in [
            ("axis", &self.columns.axis_column),
            ("value", &self.columns.value_column),
            ("polygon", &self.columns.polygon_column),
        ] {
            if column.is_empty() {
                return Err(RadarError::Configuration(format!(
                    "{name} column binding must not be empty"
                )));
            }
        }

        if self.palette.is_empty() {
            return Err(RadarError::Configuration(
                "color palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }

        if !self.axis_label_margin.is_finite() || self.axis_label_margin < 0.0 {
            return Err(RadarError::Configuration(
                "axis label margin must be finite and >= 0".to_owned(),
            ));
        }

        if self.legend_enabled && !self.legend_position.is_finite() {
            return Err(RadarError::Configuration(
                "legend position must be finite".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Radar layout engine: owns bound data, filters, the radial scale, and the
/// retained keyed view-model used for enter/update/exit reconciliation.
///
/// Renders are synchronous and serialized by `&mut self`; a new render before
/// a prior pass's animations finish is legal because the diff depends only on
/// keyed identity.
pub struct RadarEngine<S: Surface> {
    surface: S,
    config: RadarEngineConfig,
    projector: PolarProjector,
    radius: f64,
    scale: Box<dyn RadialScale>,
    rows: Vec<Row>,
    filter: Option<FilterPredicate>,
    excluded: IndexSet<String>,
    retained: RetainedState,
    last_domain: DomainTicks,
    last_axes: AxisSet,
    last_colors: ColorMap,
}

impl<S: Surface> RadarEngine<S> {
    pub fn new(
        surface: S,
        config: RadarEngineConfig,
        mut scale: Box<dyn RadialScale>,
    ) -> RadarResult<Self> {
        config.validate()?;

        let radius = config.size.radius();
        scale.set_range(0.0, radius);
        debug!(
            width = config.size.width,
            height = config.size.height,
            radius,
            "radar engine initialized"
        );

        Ok(Self {
            surface,
            projector: PolarProjector::from_size(config.size),
            radius,
            config,
            scale,
            rows: Vec::new(),
            filter: None,
            excluded: IndexSet::new(),
            retained: RetainedState::default(),
            last_domain: DomainTicks::default(),
            last_axes: AxisSet::default(),
            last_colors: ColorMap::default(),
        })
    }

    /// Replaces the bound dataset. Axis, color, and domain state are derived
    /// from it on the next render.
    pub fn bind_data(&mut self, rows: Vec<Row>) {
        debug!(count = rows.len(), "bind data rows");
        self.rows = rows;
    }

    /// Replaces the radial scale, re-ranging it to `[0, radius]`.
    pub fn bind_scale(&mut self, mut scale: Box<dyn RadialScale>) {
        scale.set_range(0.0, self.radius);
        self.scale = scale;
    }

    /// Installs a row predicate applied before the exclusion filter.
    pub fn set_filter_predicate(
        &mut self,
        predicate: impl Fn(&Row) -> bool + Send + Sync + 'static,
    ) {
        self.filter = Some(Box::new(predicate));
    }

    pub fn clear_filter_predicate(&mut self) {
        self.filter = None;
    }

    #[must_use]
    pub fn excluded_categories(&self) -> &IndexSet<String> {
        &self.excluded
    }

    #[must_use]
    pub fn last_domain(&self) -> &DomainTicks {
        &self.last_domain
    }

    #[must_use]
    pub fn last_axes(&self) -> &AxisSet {
        &self.last_axes
    }

    #[must_use]
    pub fn last_color_map(&self) -> &ColorMap {
        &self.last_colors
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
