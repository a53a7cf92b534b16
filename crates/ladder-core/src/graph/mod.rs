pub mod algos;
pub mod heuristic;
pub mod neighbors;
pub mod types;

pub use algos::{find_path, find_path_named, solve};
pub use heuristic::hamming_distance;
pub use neighbors::neighbors;
pub use types::{Algorithm, LadderResult};
