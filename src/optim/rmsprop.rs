//! RMSProp optimizer

use super::optimizer::{coupled_weight_decay, ensure_slots, trainable_grad};
use super::{Optimizer, OptimizerKind};
use crate::Tensor;
use ndarray::Array1;

/// RMSProp: scales each step by a running average of squared gradients
///
/// s_t = α * s_{t-1} + (1 - α) * g²
/// θ_t = θ_{t-1} - lr * g / (√s_t + ε)
pub struct RMSProp {
    lr: f32,
    alpha: f32,
    epsilon: f32,
    weight_decay: f32,
    square_avg: Vec<Option<Array1<f32>>>,
}

impl RMSProp {
    pub fn new(lr: f32, alpha: f32, epsilon: f32, weight_decay: f32) -> Self {
        Self { lr, alpha, epsilon, weight_decay, square_avg: Vec::new() }
    }

    /// α = 0.99, ε = 1e-8
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 0.99, 1e-8, 0.0)
    }

    #[must_use]
    pub fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }
}

impl Optimizer for RMSProp {
    fn step(&mut self, params: &mut [Tensor]) {
        ensure_slots(&mut self.square_avg, params.len());

        for (i, param) in params.iter_mut().enumerate() {
            let Some(grad) = trainable_grad(param) else { continue };
            let grad = coupled_weight_decay(grad, param, self.weight_decay);

            let grad_sq = &grad * &grad;
            let avg = match self.square_avg[i].take() {
                Some(s) => s * self.alpha + &(&grad_sq * (1.0 - self.alpha)),
                None => &grad_sq * (1.0 - self.alpha),
            };

            let update = &grad / &(avg.mapv(f32::sqrt) + self.epsilon);
            param.data_mut().scaled_add(-self.lr, &update);

            self.square_avg[i] = Some(avg);
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::RmsProp
    }
}
