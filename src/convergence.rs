use crate::adaline::Adaline;
use crate::config::{RunConfig, TrainConfig};
use crate::data_frame::{self, V};
use crate::dataset::{self, Dataset};
use crate::error::Result;
use crate::learner::Learner;
use crate::plot::{self, ConvergencePlot};
use log::*;
use serde::Serialize;
use std::fmt;

/// Outcome of fitting one Adaline on the whole dataset
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub eta: V,
    pub n_iter: usize,
    pub cost: Vec<V>,
    pub weights: Vec<V>,
    /// Training accuracy
    pub accuracy: V,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.cost.last() {
            Some(cost) => write!(f, "eta {}: final cost {}", self.eta, cost)?,
            None => write!(f, "eta {}: final cost n/a", self.eta)?,
        }
        write!(f, ", training accuracy {}", self.accuracy)
    }
}

#[derive(Serialize)]
struct CostRow {
    epoch: usize,
    eta: V,
    cost: V,
    log10_cost: V,
}

pub fn train_run(run: &RunConfig, dataset: &Dataset) -> Result<RunReport> {
    let mut ada = Adaline::from(run);
    ada.fit(&dataset.x, &dataset.y)?;
    let accuracy = ada.score(&dataset.x, &dataset.y)?;
    info!("eta {}: training accuracy {}", run.eta, accuracy);
    Ok(RunReport {
        eta: run.eta,
        n_iter: run.n_iter,
        cost: ada.cost_history()?.to_vec(),
        weights: ada.weights()?.to_vec(),
        accuracy,
    })
}

fn cost_rows(reports: &[RunReport]) -> Vec<CostRow> {
    reports
        .iter()
        .flat_map(|report| {
            report.cost.iter().enumerate().map(move |(i, cost)| CostRow {
                epoch: i + 1,
                eta: report.eta,
                cost: *cost,
                log10_cost: cost.log10(),
            })
        })
        .collect()
}

/// Fits one model per configured run and saves their convergence curves to `config.plot`
pub fn train_and_plot(config: &TrainConfig, dataset: &Dataset) -> Result<Vec<RunReport>> {
    let mut reports = Vec::with_capacity(config.runs.len());
    let mut plots = Vec::with_capacity(config.runs.len());
    for run in &config.runs {
        let report = train_run(run, dataset)?;
        plots.push(ConvergencePlot::new(
            format!("Adaline learning rate {}", run.eta),
            &report.cost,
        ));
        reports.push(report);
    }

    plot::save_svg(&plots, &config.plot)?;
    info!("Convergence plot written to {}", config.plot.display());

    if let Some(path) = &config.output {
        data_frame::save_csv(&cost_rows(&reports), path)?;
        info!("Cost histories written to {}", path.display());
    }
    Ok(reports)
}

/// Loads the configured dataset, then trains and plots every run
pub fn run(config: &TrainConfig) -> Result<Vec<RunReport>> {
    let dataset = dataset::load_dataset(&config.dataset)?;
    train_and_plot(config, &dataset)
}
