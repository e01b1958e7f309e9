use crate::config::RunConfig;
use crate::data_frame::*;
use crate::error::{AdalineError, Result};
use crate::learner::*;
use crate::utils::numeric;
use log::*;
use ndarray::{s, Array1};

#[derive(Clone, Debug)]
enum AdalineState {
    Unfitted,
    Fitted {
        /// `weights[0]` is the bias, the rest line up with the feature columns
        weights: Array1<V>,
        /// Half the sum of squared errors, one entry per epoch
        cost: Vec<V>,
    },
}

/// Adaptive linear neuron trained with full batch gradient descent
#[derive(Clone, Debug)]
pub struct Adaline {
    /// Learning rate, meant to be in (0.0, 1.0]
    pub eta: V,
    /// Passes over the training set
    pub n_iter: usize,
    state: AdalineState,
}

impl Default for Adaline {
    fn default() -> Self {
        Self::new(0.01, 50)
    }
}

impl From<&RunConfig> for Adaline {
    fn from(config: &RunConfig) -> Self {
        Self::new(config.eta, config.n_iter)
    }
}

impl Adaline {
    pub fn new(eta: V, n_iter: usize) -> Self {
        Self {
            eta,
            n_iter,
            state: AdalineState::Unfitted,
        }
    }

    pub fn weights(&self) -> Result<&Array1<V>> {
        match &self.state {
            AdalineState::Fitted { weights, .. } => Ok(weights),
            AdalineState::Unfitted => Err(AdalineError::NotFitted),
        }
    }

    pub fn cost_history(&self) -> Result<&[V]> {
        match &self.state {
            AdalineState::Fitted { cost, .. } => Ok(cost),
            AdalineState::Unfitted => Err(AdalineError::NotFitted),
        }
    }

    /// Accuracy of `predict(x)` against `y`
    pub fn score(&self, x: &DataFrame, y: &Labels) -> Result<V> {
        let pred = self.predict(x)?;
        numeric::accuracy_score(y, &pred)
    }
}

fn linear(x: &DataFrame, weights: &Array1<V>) -> Labels {
    x.dot(&weights.slice(s![1..])) + weights[0]
}

impl Learner for Adaline {
    fn fit(&mut self, x: &DataFrame, y: &Labels) -> Result<&mut Self> {
        if x.nrows() != y.len() {
            return Err(AdalineError::shape(
                format!("{} labels", x.nrows()),
                format!("{} labels", y.len()),
            ));
        }

        let mut weights = Array1::<V>::zeros(x.ncols() + 1);
        let mut cost = Vec::with_capacity(self.n_iter);

        debug!(
            "Fitting {} samples, {} features, eta {}, {} epochs",
            x.nrows(),
            x.ncols(),
            self.eta,
            self.n_iter
        );

        for epoch in 0..self.n_iter {
            let output = linear(x, &weights);
            let errors = y - &output;
            // weights first, then bias, then cost
            weights
                .slice_mut(s![1..])
                .scaled_add(self.eta, &x.t().dot(&errors));
            weights[0] += self.eta * errors.sum();
            let epoch_cost = numeric::sum_squared_error(&errors) / 2.0;
            debug!("epoch {}: cost {}", epoch + 1, epoch_cost);
            cost.push(epoch_cost);
        }

        match cost.last() {
            Some(last) => info!("Final cost after {} epochs: {}", cost.len(), last),
            None => warn!("No epochs configured, weights stay at zero"),
        }

        self.state = AdalineState::Fitted { weights, cost };
        Ok(self)
    }

    fn net_input(&self, x: &DataFrame) -> Result<Labels> {
        let weights = self.weights()?;
        if x.ncols() + 1 != weights.len() {
            return Err(AdalineError::shape(
                format!("{} features", weights.len() - 1),
                format!("{} features", x.ncols()),
            ));
        }
        Ok(linear(x, weights))
    }

    fn activation(&self, x: &DataFrame) -> Result<Labels> {
        self.net_input(x)
    }

    fn predict(&self, x: &DataFrame) -> Result<Labels> {
        Ok(self
            .net_input(x)?
            .mapv(|v| if v >= 0.0 { 1.0 } else { -1.0 }))
    }
}
