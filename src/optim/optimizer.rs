//! Optimizer trait

use super::OptimizerKind;
use crate::Tensor;
use ndarray::Array1;

/// Trait for optimization algorithms
///
/// The learning rate is the only field a schedule writes; everything else is
/// fixed at construction.
pub trait Optimizer: Send {
    /// Apply the accumulated gradients and update the parameters
    ///
    /// Parameters without a gradient, or with `requires_grad` off, are left
    /// untouched.
    fn step(&mut self, params: &mut [Tensor]);

    /// Clear the accumulated gradients
    fn zero_grad(&mut self, params: &mut [Tensor]) {
        for param in params {
            param.zero_grad();
        }
    }

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);

    /// Registry entry this optimizer was built from
    fn kind(&self) -> OptimizerKind;
}

/// Fold L2 regularization into the gradient: g + λθ
pub(crate) fn coupled_weight_decay(
    grad: Array1<f32>,
    param: &Tensor,
    weight_decay: f32,
) -> Array1<f32> {
    if weight_decay == 0.0 {
        grad
    } else {
        grad + &(param.data() * weight_decay)
    }
}

/// Gradient of a trainable parameter; frozen parameters yield `None`
pub(crate) fn trainable_grad(param: &Tensor) -> Option<Array1<f32>> {
    if param.requires_grad() {
        param.grad()
    } else {
        None
    }
}

/// Grow per-parameter state so that `params` can be indexed into it
pub(crate) fn ensure_slots(state: &mut Vec<Option<Array1<f32>>>, len: usize) {
    if state.len() < len {
        state.resize(len, None);
    }
}
