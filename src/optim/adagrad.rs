//! Adagrad optimizer

use super::optimizer::{coupled_weight_decay, ensure_slots, trainable_grad};
use super::{Optimizer, OptimizerKind};
use crate::Tensor;
use ndarray::Array1;

/// Adagrad: per-coordinate step sizes from the sum of all past squared gradients
pub struct Adagrad {
    lr: f32,
    epsilon: f32,
    weight_decay: f32,
    sum_sq: Vec<Option<Array1<f32>>>,
}

impl Adagrad {
    pub fn new(lr: f32, epsilon: f32, weight_decay: f32) -> Self {
        Self { lr, epsilon, weight_decay, sum_sq: Vec::new() }
    }

    /// ε = 1e-10
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 1e-10, 0.0)
    }

    #[must_use]
    pub fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }
}

impl Optimizer for Adagrad {
    fn step(&mut self, params: &mut [Tensor]) {
        ensure_slots(&mut self.sum_sq, params.len());

        for (i, param) in params.iter_mut().enumerate() {
            let Some(grad) = trainable_grad(param) else { continue };
            let grad = coupled_weight_decay(grad, param, self.weight_decay);

            let grad_sq = &grad * &grad;
            let sum = match self.sum_sq[i].take() {
                Some(s) => s + &grad_sq,
                None => grad_sq,
            };

            let update = &grad / &(sum.mapv(f32::sqrt) + self.epsilon);
            param.data_mut().scaled_add(-self.lr, &update);

            self.sum_sq[i] = Some(sum);
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Adagrad
    }
}
