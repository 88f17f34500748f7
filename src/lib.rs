pub mod activation;
pub mod dataset;
pub mod experiment;
pub mod normalize;
pub mod parse;
pub mod perceptron;
pub mod plot;
