//! Stochastic Gradient Descent optimizer

use super::optimizer::{coupled_weight_decay, ensure_slots, trainable_grad};
use super::{Optimizer, OptimizerKind};
use crate::Tensor;
use ndarray::Array1;

/// SGD optimizer with optional (Nesterov) momentum and L2 weight decay
///
/// With momentum μ the velocity buffer is `b = μ·b + g` (initialised to `g`
/// on the first step) and the update direction is `b`, or `g + μ·b` with
/// Nesterov momentum. Weight decay is folded into `g` before either.
pub struct SGD {
    lr: f32,
    momentum: f32,
    nesterov: bool,
    weight_decay: f32,
    velocities: Vec<Option<Array1<f32>>>,
}

impl SGD {
    /// Create a new SGD optimizer
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self::with_options(lr, momentum, false, 0.0)
    }

    /// Create SGD with every hyperparameter spelled out
    pub fn with_options(lr: f32, momentum: f32, nesterov: bool, weight_decay: f32) -> Self {
        Self { lr, momentum, nesterov, weight_decay, velocities: Vec::new() }
    }

    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    pub fn nesterov(&self) -> bool {
        self.nesterov
    }

    pub fn weight_decay(&self) -> f32 {
        self.weight_decay
    }
}

impl Optimizer for SGD {
    fn step(&mut self, params: &mut [Tensor]) {
        ensure_slots(&mut self.velocities, params.len());

        for (i, param) in params.iter_mut().enumerate() {
            let Some(grad) = trainable_grad(param) else { continue };
            let grad = coupled_weight_decay(grad, param, self.weight_decay);

            let direction = if self.momentum > 0.0 {
                let velocity = match self.velocities[i].take() {
                    Some(v) => v * self.momentum + &grad,
                    None => grad.clone(),
                };
                let direction =
                    if self.nesterov { &grad + &(&velocity * self.momentum) } else { velocity.clone() };
                self.velocities[i] = Some(velocity);
                direction
            } else {
                grad
            };

            param.data_mut().scaled_add(-self.lr, &direction);
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Sgd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn test_sgd_plain_step() {
        let mut opt = SGD::new(0.1, 0.0);
        let mut params = vec![Tensor::from_vec(vec![1.0, 2.0], true)];
        params[0].set_grad(arr1(&[1.0, -2.0]));

        opt.step(&mut params);

        assert_abs_diff_eq!(params[0].data()[0], 0.9, epsilon = 1e-6);
        assert_abs_diff_eq!(params[0].data()[1], 2.2, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_momentum_accumulates() {
        let mut opt = SGD::new(0.1, 0.9);
        let mut params = vec![Tensor::from_vec(vec![0.0], true)];
        params[0].set_grad(arr1(&[1.0]));

        opt.step(&mut params);
        // b = g = 1 → θ = -0.1
        assert_abs_diff_eq!(params[0].data()[0], -0.1, epsilon = 1e-6);

        opt.step(&mut params);
        // b = 0.9 + 1 = 1.9 → θ = -0.1 - 0.19
        assert_abs_diff_eq!(params[0].data()[0], -0.29, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_nesterov_looks_ahead() {
        let mut opt = SGD::with_options(0.1, 0.9, true, 0.0);
        let mut params = vec![Tensor::from_vec(vec![0.0], true)];
        params[0].set_grad(arr1(&[1.0]));

        opt.step(&mut params);
        // b = 1, direction = 1 + 0.9 * 1
        assert_abs_diff_eq!(params[0].data()[0], -0.19, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_weight_decay() {
        let mut opt = SGD::with_options(0.1, 0.0, false, 0.5);
        let mut params = vec![Tensor::from_vec(vec![2.0], true)];
        params[0].set_grad(arr1(&[0.0]));

        opt.step(&mut params);
        // g = 0 + 0.5 * 2 = 1
        assert_abs_diff_eq!(params[0].data()[0], 1.9, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_skips_params_without_grad() {
        let mut opt = SGD::new(0.1, 0.9);
        let mut params = vec![Tensor::from_vec(vec![1.0], true), Tensor::from_vec(vec![1.0], true)];
        params[1].set_grad(arr1(&[1.0]));

        opt.step(&mut params);

        assert_eq!(params[0].data()[0], 1.0);
        assert_abs_diff_eq!(params[1].data()[0], 0.9, epsilon = 1e-6);
    }

    #[test]
    fn test_sgd_kind_and_lr() {
        let mut opt = SGD::new(0.01, 0.9);
        assert_eq!(opt.kind(), OptimizerKind::Sgd);
        opt.set_lr(0.5);
        assert_eq!(opt.lr(), 0.5);
    }
}
