/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 张量的原地运算（+=、-=、*=），优化器用其直接改写参数和累积状态，避免多余的分配
 */

use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::{AddAssign, MulAssign, SubAssign};

impl<'a> AddAssign<&'a Tensor> for Tensor {
    fn add_assign(&mut self, other: &'a Tensor) {
        self.elementwise_assign(other, Operator::AddAssign, |a, b| *a += b);
    }
}

impl AddAssign<f32> for Tensor {
    fn add_assign(&mut self, scalar: f32) {
        self.data += scalar;
    }
}

impl<'a> SubAssign<&'a Tensor> for Tensor {
    fn sub_assign(&mut self, other: &'a Tensor) {
        self.elementwise_assign(other, Operator::SubAssign, |a, b| *a -= b);
    }
}

impl SubAssign<f32> for Tensor {
    fn sub_assign(&mut self, scalar: f32) {
        self.data -= scalar;
    }
}

impl<'a> MulAssign<&'a Tensor> for Tensor {
    fn mul_assign(&mut self, other: &'a Tensor) {
        self.elementwise_assign(other, Operator::MulAssign, |a, b| *a *= b);
    }
}

impl MulAssign<f32> for Tensor {
    fn mul_assign(&mut self, scalar: f32) {
        self.data *= scalar;
    }
}
