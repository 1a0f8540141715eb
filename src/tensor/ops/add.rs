/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量的加法，实现了两个张量“逐元素”（或张量与纯数）相加的运算，并返回一个新的张量。
 *                 该运算支持以下情况：
 *                 1. 若两个张量的形状严格一致, 则相加后的张量形状不变；
 *                 2. 若其中一个操作数为标量或纯数，则将其广播到另一个张量的每个元素上；
 *                 其余情况会panic。
 */

use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::Add;

impl_elementwise_op!(Add, add, Operator::Add, |a: f32, b: f32| a + b);
