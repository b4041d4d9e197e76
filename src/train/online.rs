use tracing::trace;

use crate::cost::Cost;
use crate::error::Result;
use crate::network::{Example, Network};
use crate::optim::sgd::Sgd;

impl Network {
    /// One online gradient step on a single example under the quadratic cost:
    /// `W_l -= η·∂W_l`, `b_l -= η·∂b_l`.
    ///
    /// Fails with `ShapeMismatch` before touching any parameter if the
    /// example does not fit the network.
    pub fn learn_incrementally(&mut self, eta: f64, example: &Example) -> Result<()> {
        let sgd = Sgd::new(eta)?;
        let gradient = self.example_gradient(Cost::Quadratic, example)?;
        trace!(eta, "incremental step");
        sgd.step(self, &gradient, 1)
    }
}
