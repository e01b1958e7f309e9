use adaline_rs::config::{TrainConfig, LOG_ENV};
use adaline_rs::convergence;

use log::*;

use pretty_env_logger;

use std::process;
use std::time;

fn main() {
    if let Err(e) = pretty_env_logger::try_init_timed_custom_env(LOG_ENV) {
        eprintln!("logger already initialized: {}", e);
    }

    let start = time::Instant::now();
    let config = match TrainConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };
    debug!("{:?}", config);

    match convergence::run(&config) {
        Ok(reports) => {
            for report in &reports {
                println!("{}", report);
            }
            println!("Convergence plot: {}", config.plot.display());
            info!("Done in {}ms", start.elapsed().as_millis());
        }
        Err(e) => {
            error!("Training failed: {}", e);
            process::exit(1);
        }
    }
}
