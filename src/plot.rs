use crate::data_frame::V;
use crate::error::{AdalineError, Result};
use crate::utils::numeric;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Size of one panel in the figure, panels sit side by side
pub const PANEL_SIZE: (u32, u32) = (480, 400);

/// log10 of the cost per epoch for one training run
#[derive(Clone, Debug)]
pub struct ConvergencePlot {
    pub title: String,
    /// Number of epochs on the x axis
    pub epochs: usize,
    /// `(epoch, log10(cost))`, epochs start at 1
    points: Vec<(usize, V)>,
}

impl ConvergencePlot {
    /// Epochs whose log cost is not finite (zero cost, overflow) are left out
    pub fn new(title: impl Into<String>, cost: &[V]) -> Self {
        let points = numeric::log10_series(cost)
            .into_iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| (i + 1, v))
            .collect();
        Self {
            title: title.into(),
            epochs: cost.len(),
            points,
        }
    }

    pub fn points(&self) -> &[(usize, V)] {
        &self.points
    }

    fn y_range(&self) -> Range<V> {
        let (low, high) = self
            .points
            .iter()
            .fold((V::INFINITY, V::NEG_INFINITY), |(low, high), (_, v)| {
                (low.min(*v), high.max(*v))
            });
        if self.points.is_empty() {
            0.0..1.0
        } else if high - low < 1e-9 {
            (low - 0.5)..(high + 0.5)
        } else {
            let margin = (high - low) * 0.05;
            (low - margin)..(high + margin)
        }
    }

    pub fn draw_on<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .caption(&self.title, ("sans-serif", 20))
            .build_cartesian_2d(1..self.epochs.max(2), self.y_range())
            .map_err(AdalineError::plot)?;

        chart
            .configure_mesh()
            .x_desc("Epochs")
            .y_desc("log(Sum-squared-error)")
            .draw()
            .map_err(AdalineError::plot)?;

        chart
            .draw_series(LineSeries::new(self.points.iter().copied(), &BLUE))
            .map_err(AdalineError::plot)?;
        chart
            .draw_series(
                self.points
                    .iter()
                    .map(|point| Circle::new(*point, 3, BLUE.filled())),
            )
            .map_err(AdalineError::plot)?;
        Ok(())
    }
}

/// One row of panels, one per plot
pub fn render_svg(plots: &[ConvergencePlot]) -> Result<String> {
    let panels = plots.len().max(1);
    let mut svg = String::new();
    {
        let size = (PANEL_SIZE.0 * panels as u32, PANEL_SIZE.1);
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(AdalineError::plot)?;
        for (plot, area) in plots.iter().zip(root.split_evenly((1, panels)).iter()) {
            plot.draw_on(area)?;
        }
        root.present().map_err(AdalineError::plot)?;
    }
    Ok(svg)
}

pub fn save_svg<P: AsRef<Path>>(plots: &[ConvergencePlot], path: P) -> Result<()> {
    let svg = render_svg(plots)?;
    fs::write(path, svg)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::plot::*;

    #[test]
    fn captions_and_axes_are_rendered() {
        let plots = vec![
            ConvergencePlot::new("Adaline learning rate 0.1", &[100.0, 10.0, 1.0]),
            ConvergencePlot::new("Adaline learning rate 0.0001", &[50.0, 40.0, 30.0]),
        ];
        let svg = render_svg(&plots).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Adaline learning rate 0.1<"));
        assert!(svg.contains("Adaline learning rate 0.0001<"));
        assert!(svg.contains("Epochs"));
        assert!(svg.contains("log(Sum-squared-error)"));
    }

    #[test]
    fn one_marker_per_finite_epoch() {
        let plot = ConvergencePlot::new("t", &[4.0, 0.0, 1.0]);
        assert_eq!(&[(1, 4.0f64.log10()), (3, 0.0)], plot.points());
        assert_eq!(3, plot.epochs);
        let svg = render_svg(&[plot]).unwrap();
        assert_eq!(2, svg.matches("<circle").count());
    }

    #[test]
    fn flat_and_empty_costs_render() {
        let flat = ConvergencePlot::new("flat", &[10.0, 10.0]);
        let empty = ConvergencePlot::new("empty", &[]);
        assert!(empty.points().is_empty());
        let svg = render_svg(&[flat, empty]).unwrap();
        assert!(svg.contains("flat<"));
        assert!(svg.contains("empty<"));
    }

    #[test]
    fn save_writes_file() {
        let path = std::env::temp_dir().join("adaline_plot_save.svg");
        save_svg(&[ConvergencePlot::new("saved", &[2.0, 1.0])], &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("saved<"));
        std::fs::remove_file(&path).unwrap();
    }
}
