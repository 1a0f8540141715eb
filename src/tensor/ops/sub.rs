/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量的减法，规则同加法：形状严格一致时逐元素相减，其中一方为标量或纯数时广播，其余情况panic。
 */

use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::Sub;

impl_elementwise_op!(Sub, sub, Operator::Sub, |a: f32, b: f32| a - b);
