mod pairwise;
mod theta_sort;

pub use pairwise::{pair_count, pairwise_elts, vector_pairs, Pairwise, VectorPair};
pub use theta_sort::{sorted_angle_pairs, theta_sort, AngleResult, ThetaSort};
