//! Adam optimizer

use super::optimizer::{coupled_weight_decay, ensure_slots, trainable_grad};
use super::{Optimizer, OptimizerKind};
use crate::Tensor;
use ndarray::Array1;

/// Adam optimizer with optional L2 weight decay
///
/// Weight decay is added to the gradient before the moment updates, so it is
/// rescaled by the adaptive denominator. See [`super::AdamW`] for the
/// decoupled variant.
pub struct Adam {
    lr: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    weight_decay: f32,
    t: u64,
    m: Vec<Option<Array1<f32>>>, // First moment
    v: Vec<Option<Array1<f32>>>, // Second moment
}

impl Adam {
    /// Create a new Adam optimizer
    pub fn new(lr: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self { lr, beta1, beta2, epsilon, weight_decay: 0.0, t: 0, m: Vec::new(), v: Vec::new() }
    }

    /// Create Adam with default parameters
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 0.9, 0.999, 1e-8)
    }

    /// Set the L2 weight decay coefficient
    #[must_use]
    pub fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// Number of steps taken so far
    pub fn step_count(&self) -> u64 {
        self.t
    }

    pub fn weight_decay(&self) -> f32 {
        self.weight_decay
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: &mut [Tensor]) {
        ensure_slots(&mut self.m, params.len());
        ensure_slots(&mut self.v, params.len());
        self.t += 1;

        let bias1 = 1.0 - self.beta1.powi(self.t as i32);
        let bias2 = 1.0 - self.beta2.powi(self.t as i32);

        for (i, param) in params.iter_mut().enumerate() {
            let Some(grad) = trainable_grad(param) else { continue };
            let grad = coupled_weight_decay(grad, param, self.weight_decay);

            // m_t = β1 * m_{t-1} + (1 - β1) * g
            let m_t = match self.m[i].take() {
                Some(m) => m * self.beta1 + &(&grad * (1.0 - self.beta1)),
                None => &grad * (1.0 - self.beta1),
            };

            // v_t = β2 * v_{t-1} + (1 - β2) * g²
            let grad_sq = &grad * &grad;
            let v_t = match self.v[i].take() {
                Some(v) => v * self.beta2 + &(&grad_sq * (1.0 - self.beta2)),
                None => &grad_sq * (1.0 - self.beta2),
            };

            // θ_t = θ_{t-1} - lr * m̂_t / (√v̂_t + ε)
            let epsilon = self.epsilon;
            let denom = v_t.mapv(|v| (v / bias2).sqrt() + epsilon);
            let update = &m_t / &denom;
            param.data_mut().scaled_add(-self.lr / bias1, &update);

            self.m[i] = Some(m_t);
            self.v[i] = Some(v_t);
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Adam
    }
}
