
pub mod error;
pub mod moves;
pub mod history;
pub mod predictor;
pub mod opponent;
pub mod sim;

pub use error::Error;
pub use moves::*;
pub use history::*;
pub use predictor::*;
pub use sim::*;
