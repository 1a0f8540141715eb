use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use approx::AbsDiffEq;
use ndarray::Zip;
use std::cmp::PartialEq;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl AbsDiffEq for Tensor {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    /// 形状严格一致且逐元素之差均不超过`epsilon`
    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.is_same_shape(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl Tensor {
    /// 逐元素开平方根
    pub fn sqrt(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f32::sqrt),
        }
    }

    /// 两个张量的逐元素运算，形状须严格一致，或其中之一为标量（此时将其广播到另一方的每个元素上）。
    /// 否则panic。
    pub(in crate::tensor) fn elementwise(
        &self,
        other: &Tensor,
        operator: Operator,
        f: impl Fn(f32, f32) -> f32,
    ) -> Tensor {
        let data = if self.is_same_shape(other) {
            Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| f(a, b))
        } else if let Some(b) = other.number() {
            self.data.mapv(|a| f(a, b))
        } else if let Some(a) = self.number() {
            other.data.mapv(|b| f(a, b))
        } else {
            panic!(
                "{}",
                TensorError::OperatorError {
                    operator,
                    tensor1_shape: self.shape().to_vec(),
                    tensor2_shape: other.shape().to_vec(),
                }
            )
        };
        Tensor { data }
    }

    /// 原地逐元素运算，`other`须与`self`形状严格一致或为标量，否则panic。
    pub(in crate::tensor) fn elementwise_assign(
        &mut self,
        other: &Tensor,
        operator: Operator,
        f: impl Fn(&mut f32, f32),
    ) {
        if self.is_same_shape(other) {
            self.data.zip_mut_with(&other.data, |a, &b| f(a, b));
        } else if let Some(b) = other.number() {
            self.data.map_inplace(|a| f(a, b));
        } else {
            panic!(
                "{}",
                TensorError::OperatorError {
                    operator,
                    tensor1_shape: self.shape().to_vec(),
                    tensor2_shape: other.shape().to_vec(),
                }
            )
        }
    }
}
