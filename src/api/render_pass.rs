use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::{
    Row, build_color_map, compute_domain_ticks, extract_axes, group_polygons, project_rows,
};
use crate::error::RadarResult;
use crate::reconcile::{VertexKey, diff_keyed};
use crate::render::{LegendEntry, RenderContext, RenderPass, Surface, TickRing};

use super::{RadarEngine, RetainedState};

impl<S: Surface> RadarEngine<S> {
    /// Runs the full layout pipeline and hands the reconciled pass to the
    /// surface.
    ///
    /// Ordering contract, fixed: color map over the full unfiltered dataset;
    /// then the user predicate; then the exclusion filter; then domain/ticks
    /// and axis extraction over what remains. Axis set and value domain
    /// shrink under filtering, color assignment does not.
    ///
    /// The retained keyed state is committed only after the surface accepts
    /// the pass, so a failed surface leaves the previous reconciliation
    /// baseline intact.
    pub fn render(&mut self) -> RadarResult<()> {
        let colors = build_color_map(
            &self.rows,
            &self.config.columns.polygon_column,
            &self.config.palette,
        )?;

        let mut visible: Vec<Row> = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            if let Some(predicate) = &self.filter {
                if !predicate(row) {
                    continue;
                }
            }
            // Category keys were validated by the color-map scan above.
            let category = row.key_of(&self.config.columns.polygon_column)?;
            if self.excluded.contains(&category) {
                continue;
            }
            visible.push(row.clone());
        }

        let domain = compute_domain_ticks(
            &visible,
            &self.config.columns.value_column,
            self.scale.as_mut(),
            self.config.tick_count,
        )?;
        let axes = extract_axes(&visible, &self.config.columns.axis_column)?;

        let points = project_rows(
            &visible,
            &self.config.columns,
            &axes,
            &colors,
            self.scale.as_ref(),
            self.projector,
        )?;

        let mut next = RetainedState::default();
        for tick in &domain.ticks {
            next.ticks.insert(
                OrderedFloat(*tick),
                TickRing {
                    value: *tick,
                    radius_px: self.scale.scale(*tick),
                },
            );
        }
        next.axes = axes.as_map().clone();
        for point in &points {
            next.vertices.insert(
                VertexKey::new(point.category.clone(), point.axis.clone()),
                point.clone(),
            );
        }
        for polygon in group_polygons(points) {
            next.polygons.insert(polygon.category.clone(), polygon);
        }
        if self.config.legend_enabled {
            for entry in colors.iter() {
                let excluded = self.excluded.contains(&entry.category);
                next.legend.insert(
                    entry.category.clone(),
                    LegendEntry {
                        category: entry.category,
                        color: entry.color,
                        excluded,
                    },
                );
            }
        }

        debug!(
            rows = self.rows.len(),
            visible = visible.len(),
            axes = next.axes.len(),
            polygons = next.polygons.len(),
            ticks = next.ticks.len(),
            "render pass computed"
        );

        let pass = RenderPass {
            context: RenderContext {
                center: self.projector.center(),
                radius: self.radius,
                transition_duration_ms: self.config.transition_duration_ms,
                axis_label_margin: self.config.axis_label_margin,
                legend_position: self
                    .config
                    .legend_enabled
                    .then_some(self.config.legend_position),
            },
            ticks: diff_keyed(&self.retained.ticks, &next.ticks),
            axes: diff_keyed(&self.retained.axes, &next.axes),
            polygons: diff_keyed(&self.retained.polygons, &next.polygons),
            vertices: diff_keyed(&self.retained.vertices, &next.vertices),
            legend: diff_keyed(&self.retained.legend, &next.legend),
        };

        self.surface.apply(&pass)?;

        self.retained = next;
        self.last_domain = domain;
        self.last_axes = axes;
        self.last_colors = colors;
        Ok(())
    }

    /// Flips a category's exclusion membership and triggers a full render.
    ///
    /// This is the legend-click entry point: excluding a category hides its
    /// rows from axes, domain, polygons, and vertices, while its color
    /// assignment stays untouched.
    pub fn toggle_category(&mut self, category: impl Into<String>) -> RadarResult<()> {
        let category = category.into();
        if self.excluded.shift_remove(&category) {
            trace!(category = %category, "category re-included");
        } else {
            trace!(category = %category, "category excluded");
            self.excluded.insert(category);
        }
        self.render()
    }
}
