use crate::core::format_tick_label;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::ChartEngine;

const GUIDELINE_DASHES: LineStrokeStyle = LineStrokeStyle::Dashed {
    on_px: 5.0,
    off_px: 5.0,
};
const GUIDELINE_WIDTH: f64 = 1.0;
const TICK_LABEL_SCALE: f64 = 0.7;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// Geometry is computed deterministically and in a fixed order: title,
    /// vertical guidelines, autoscale, labeled tick rows, zero line, then
    /// series polylines with highlight markers. Point screen positions are
    /// written back as a side effect for the hit resolver.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let viewport = self.model.viewport;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let style = self.model.style;
        let behavior = self.model.behavior;
        let text_color = style.background.darken(0.8);
        let guideline_color = style.background.darken(0.9);

        let mut frame = RenderFrame::new(viewport, style.background);

        // Title, upper-right corner.
        if !self.model.title.is_empty() {
            frame = frame.with_text(TextPrimitive::new(
                self.model.title.clone(),
                width - 2.0,
                style.title_size,
                style.title_size,
                text_color,
                TextHAlign::Right,
            ));
        }

        // Vertical guidelines between category slots.
        let spacing = self.model.axis.spacing(viewport.width);
        if behavior.show_vertical_guidelines {
            for slot in 1..self.model.axis.len() {
                let x = slot as f64 * spacing;
                frame = frame.with_line(LinePrimitive::new(
                    x,
                    height,
                    x,
                    0.0,
                    GUIDELINE_WIDTH,
                    GUIDELINE_DASHES,
                    guideline_color,
                ));
            }
        }

        // Autoscale before anything that depends on the fresh scale: the tick
        // labels below and every point placement read it.
        self.model
            .value_scale
            .autoscale(self.model.series.values(), viewport);
        let scale = self.model.value_scale;
        let zero_row = scale.zero_row(viewport);

        // Labeled horizontal tick rows.
        let label_size = style.title_size * TICK_LABEL_SCALE;
        for tick in 1..=behavior.tick_count {
            let fraction = f64::from(tick) / f64::from(behavior.tick_count + 1);
            let row = height - height * fraction;
            frame = frame.with_line(LinePrimitive::new(
                0.0,
                row,
                width,
                row,
                GUIDELINE_WIDTH,
                GUIDELINE_DASHES,
                guideline_color,
            ));
            frame = frame.with_text(TextPrimitive::new(
                format_tick_label(scale.row_to_value(row, viewport)),
                2.0,
                row,
                label_size,
                text_color,
                TextHAlign::Left,
            ));
        }

        // Zero line, solid to stand out from the dashed guidelines.
        if behavior.show_zero_line {
            frame = frame.with_line(LinePrimitive::new(
                0.0,
                zero_row,
                width,
                zero_row,
                GUIDELINE_WIDTH,
                LineStrokeStyle::Solid,
                guideline_color,
            ));
        }

        // Series polylines in registration order, anchored on the zero row.
        for series in self.model.series.values_mut() {
            let stroke_width = series.stroke_width();
            let stroke_color = series.stroke_color();
            let mut path: Vec<(f64, f64)> = Vec::with_capacity(series.point_count() + 1);
            path.push((0.0, zero_row));
            for (index, point) in series.points_mut().iter_mut().enumerate() {
                point.screen_x = (index as f64 + 1.0) * spacing;
                point.screen_y = scale.value_to_row(point.value, viewport);
                path.push((point.screen_x, point.screen_y));
                if point.highlighted {
                    frame = frame.with_circle(CirclePrimitive::new(
                        point.screen_x,
                        point.screen_y,
                        stroke_width * 2.0,
                        stroke_color,
                    ));
                }
            }
            if path.len() >= 2 {
                frame = frame.with_polyline(PolylinePrimitive::new(
                    path,
                    stroke_width,
                    stroke_color,
                ));
            }
        }

        Ok(frame)
    }
}
