pub mod example;
pub mod gradient;
pub mod network;
pub mod spec;

pub use example::Example;
pub use gradient::Gradient;
pub use network::Network;
pub use spec::NetworkSpec;
