pub mod normalize;
pub mod serve;
