//! Line charts drawn on an Iced canvas.
//!
//! Charts are redrawn from scratch every frame straight from the rolling
//! windows; nothing is cached between ticks.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size};
use pibench_core::RollingWindow;

/// Vertical extent of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// `0..=max`, regardless of data.
    Fixed(f32),
    /// `0..=` the largest visible sample plus headroom.
    Auto,
}

/// One plotted line.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    pub window: &'a RollingWindow,
    pub color:  Color,
}

/// Canvas program plotting one or more series on a shared axis.
#[derive(Debug)]
pub struct SeriesChart<'a> {
    pub series:     Vec<Series<'a>>,
    pub scale:      Scale,
    pub background: Color,
    pub grid:       Color,
}

impl SeriesChart<'_> {
    fn y_max(&self) -> f32 {
        match self.scale {
            Scale::Fixed(max) => max,
            Scale::Auto => auto_max(self.series.iter().map(|s| s.window.max())),
        }
    }
}

impl<Message> canvas::Program<Message> for SeriesChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.background);

        // quarter grid lines
        for i in 1..4 {
            let y = bounds.height * i as f32 / 4.0;
            let line = Path::line(Point::new(0.0, y), Point::new(bounds.width, y));
            frame.stroke(&line, Stroke::default().with_color(self.grid).with_width(1.0));
        }

        let y_max = self.y_max();
        for series in &self.series {
            let points = plot_points(series.window, bounds.size(), y_max);
            if points.len() < 2 {
                continue;
            }
            let path = Path::new(|b| {
                b.move_to(points[0]);
                for p in &points[1..] {
                    b.line_to(*p);
                }
            });
            frame.stroke(&path, Stroke::default().with_color(series.color).with_width(2.0));
        }

        frame.fill_text(canvas::Text {
            content: axis_label(y_max),
            position: Point::new(4.0, 2.0),
            color: self.grid,
            size: 12.0.into(),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Map a window onto canvas coordinates.
///
/// The x step is fixed by the window's capacity, so a filling window grows
/// from the left and a full one spans the whole width. Values are clamped
/// into `0..=y_max`.
pub fn plot_points(window: &RollingWindow, size: Size, y_max: f32) -> Vec<Point> {
    let slots = window.capacity().saturating_sub(1).max(1) as f32;
    let step = size.width / slots;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    window
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let frac = (v / y_max).clamp(0.0, 1.0);
            Point::new(i as f32 * step, size.height - frac * size.height)
        })
        .collect()
}

/// Upper bound for an auto-scaled axis: 10 % headroom, `1.0` when flat.
pub fn auto_max(maxima: impl Iterator<Item = f32>) -> f32 {
    let peak = maxima.fold(0.0, f32::max);
    if peak <= f32::EPSILON {
        1.0
    } else {
        peak * 1.1
    }
}

fn axis_label(y_max: f32) -> String {
    if y_max >= 10.0 {
        format!("{y_max:.0}")
    } else {
        format!("{y_max:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_width_when_full() {
        let mut window = RollingWindow::new(5);
        for v in [0.0, 25.0, 50.0, 75.0, 100.0] {
            window.push(v);
        }

        let pts = plot_points(&window, Size::new(400.0, 100.0), 100.0);

        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Point::new(0.0, 100.0));
        assert_eq!(pts[2], Point::new(200.0, 50.0));
        assert_eq!(pts[4], Point::new(400.0, 0.0));
    }

    #[test]
    fn partial_window_grows_from_left() {
        let mut window = RollingWindow::new(5);
        window.push(10.0);
        window.push(20.0);

        let pts = plot_points(&window, Size::new(400.0, 100.0), 100.0);

        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1].x, 100.0);
    }

    #[test]
    fn values_are_clamped() {
        let mut window = RollingWindow::new(2);
        window.push(-5.0);
        window.push(250.0);

        let pts = plot_points(&window, Size::new(10.0, 100.0), 100.0);

        assert_eq!(pts[0].y, 100.0);
        assert_eq!(pts[1].y, 0.0);
    }

    #[test]
    fn auto_scale_adds_headroom() {
        assert_eq!(auto_max([0.0, 0.0].into_iter()), 1.0);
        assert!((auto_max([2.0, 5.0].into_iter()) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn axis_label_precision() {
        assert_eq!(axis_label(100.0), "100");
        assert_eq!(axis_label(1.0), "1.00");
    }
}
