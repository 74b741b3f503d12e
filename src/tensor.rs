//! Trainable parameter tensor
//!
//! Gradients are produced outside this crate; optimizers only read them and
//! update `data` in place.

use ndarray::Array1;

/// A flat parameter buffer with an optional accumulated gradient
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array1<f32>,
    grad: Option<Array1<f32>>,
    requires_grad: bool,
}

impl Tensor {
    /// Wrap an existing array
    pub fn new(data: Array1<f32>, requires_grad: bool) -> Self {
        Self { data, grad: None, requires_grad }
    }

    /// Create a tensor from a vector of values
    pub fn from_vec(values: Vec<f32>, requires_grad: bool) -> Self {
        Self::new(Array1::from(values), requires_grad)
    }

    /// Create a zero-filled tensor
    pub fn zeros(len: usize, requires_grad: bool) -> Self {
        Self::new(Array1::zeros(len), requires_grad)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &Array1<f32> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Array1<f32> {
        &mut self.data
    }

    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    pub fn set_requires_grad(&mut self, requires_grad: bool) {
        self.requires_grad = requires_grad;
    }

    /// Accumulated gradient (cloned), `None` if nothing was accumulated
    pub fn grad(&self) -> Option<Array1<f32>> {
        self.grad.clone()
    }

    /// Replace the accumulated gradient
    pub fn set_grad(&mut self, grad: Array1<f32>) {
        self.grad = Some(grad);
    }

    /// Add `grad` to the accumulated gradient
    pub fn accumulate_grad(&mut self, grad: &Array1<f32>) {
        match self.grad.as_mut() {
            Some(existing) => *existing += grad,
            None => self.grad = Some(grad.clone()),
        }
    }

    /// Drop the accumulated gradient
    pub fn zero_grad(&mut self) {
        self.grad = None;
    }
}
