#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Linear,
    Step,
    Sigmoid,
    Relu,
    Tanh,
    Softmax,
}

impl Activation {
    /// Experiment order used by the driver.
    pub const ALL: [Self; 6] = [
        Self::Step,
        Self::Sigmoid,
        Self::Relu,
        Self::Tanh,
        Self::Linear,
        Self::Softmax,
    ];

    /// Unrecognized names fall back to the identity transform.
    pub fn from_name(name: &str) -> Self {
        match name {
            "step" => Self::Step,
            "sigmoid" => Self::Sigmoid,
            "relu" => Self::Relu,
            "tanh" => Self::Tanh,
            "softmax" => Self::Softmax,
            _ => Self::Linear,
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Step => {
                if x >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Sigmoid => sigmoid(x),
            Self::Relu => x.max(0.0),
            Self::Tanh => x.tanh(),
            // with a single output unit, softmax reduces to the logistic
            // function over the lone logit
            Self::Softmax => sigmoid(x),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    // saturate instead of overflowing the exponential
    if x < -500.0 {
        return 0.0;
    }
    if x > 500.0 {
        return 1.0;
    }

    1.0 / (1.0 + (-x).exp())
}
