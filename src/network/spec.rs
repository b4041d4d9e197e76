use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::Network;

/// Serializable network architecture: the ordered layer widths, input first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub sizes: Vec<usize>,
}

impl NetworkSpec {
    pub fn new(sizes: Vec<usize>) -> NetworkSpec {
        NetworkSpec { sizes }
    }

    /// Builds a freshly initialized network with this architecture.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::new(&self.sizes, rng)
    }
}
