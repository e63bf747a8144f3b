pub mod algorithms;
pub mod dither;

pub use algorithms::{algorithm_list, handle_algorithms, AlgorithmInfo, __path_handle_algorithms};
pub use dither::{handle_dither, DitherQuery, ErrorResponse, __path_handle_dither};
