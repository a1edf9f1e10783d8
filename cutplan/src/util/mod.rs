/// Set of functions used throughout to assure the correctness of strategy output.
pub mod assertions;
