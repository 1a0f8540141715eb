/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量的逐元素除法。除数中的零元素按IEEE 754规则得到inf或NaN，不做额外检查。
 */

use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::Div;

impl_elementwise_op!(Div, div, Operator::Div, |a: f32, b: f32| a / b);
