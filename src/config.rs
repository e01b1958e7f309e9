use crate::data_frame::V;
use crate::error::Result;
use log::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

pub static IRIS_URL: &str = "https://archive.ics.uci.edu/ml/machine-learning-databases/iris/iris.data";

/// Path of a json file holding a whole `TrainConfig`
pub static CONFIG_ENV: &str = "ADALINE_CONFIG";
/// Overrides the dataset url or local path
pub static DATASET_ENV: &str = "ADALINE_DATASET";
pub static LOG_ENV: &str = "ADALINE_LOG";

/// Hyperparameters of one training run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub eta: V,
    pub n_iter: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// http(s) url or a local file path
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_runs")]
    pub runs: Vec<RunConfig>,
    /// svg file holding one convergence panel per run
    #[serde(default = "default_plot")]
    pub plot: PathBuf,
    /// Where to write the cost histories as csv, if anywhere
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_dataset() -> String {
    IRIS_URL.to_owned()
}

fn default_plot() -> PathBuf {
    PathBuf::from("adaline_convergence.svg")
}

fn default_runs() -> Vec<RunConfig> {
    vec![
        RunConfig {
            eta: 0.1,
            n_iter: 30,
        },
        RunConfig {
            eta: 0.0001,
            n_iter: 30,
        },
    ]
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            runs: default_runs(),
            plot: default_plot(),
            output: None,
        }
    }
}

impl TrainConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Defaults, then the json file named by `ADALINE_CONFIG`, then `ADALINE_DATASET`
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!("Reading config from {:?}", path);
                Self::from_file(Path::new(&path))?
            }
            None => Self::default(),
        };
        if let Ok(dataset) = env::var(DATASET_ENV) {
            debug!("Dataset overridden by {}: {}", DATASET_ENV, dataset);
            config.dataset = dataset;
        }
        Ok(config)
    }
}
