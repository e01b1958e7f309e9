use crate::data_frame::*;
use crate::error::Result;

pub trait Learner {
    /// x: `[n_samples, n_features]`, y: `[n_samples]`
    fn fit(&mut self, x: &DataFrame, y: &Labels) -> Result<&mut Self>;

    /// Linear combination of the features plus bias
    fn net_input(&self, x: &DataFrame) -> Result<Labels>;

    fn activation(&self, x: &DataFrame) -> Result<Labels>;

    /// Class labels in `{-1, 1}`
    fn predict(&self, x: &DataFrame) -> Result<Labels>;
}
