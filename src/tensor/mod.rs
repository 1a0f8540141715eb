/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量，作为层参数、梯度以及优化器累积状态的统一载体
 */

use ndarray::{Array, ArrayD, IxDyn};

use crate::errors::TensorError;

/// 为（不）带引用的张量与（不）带引用的张量、张量与f32、f32与张量实现同一个二元运算符。
/// `$f`为逐元素的运算闭包，`f32`在左侧时同样按`$f(左, 右)`的顺序计算。
macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $operator:expr, $f:expr) => {
        /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 与（不）带引用的张量↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
        impl<'b> $trait<&'b Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: &'b Tensor) -> Tensor {
                self.elementwise(other, $operator, $f)
            }
        }
        impl $trait for Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                self.elementwise(&other, $operator, $f)
            }
        }
        impl<'a> $trait<&'a Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, other: &'a Tensor) -> Tensor {
                self.elementwise(other, $operator, $f)
            }
        }
        impl<'a> $trait<Tensor> for &'a Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                self.elementwise(&other, $operator, $f)
            }
        }
        /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 与（不）带引用的张量↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

        /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的张量 与 f32↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
        impl $trait<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                let f = $f;
                Tensor {
                    data: self.data.mapv(|a| f(a, scalar)),
                }
            }
        }
        impl $trait<f32> for Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                $trait::$method(&self, scalar)
            }
        }
        /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的张量 与 f32↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

        /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓f32 与（不）带引用的张量↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
        impl $trait<&Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: &Tensor) -> Tensor {
                let f = $f;
                Tensor {
                    data: tensor.data.mapv(|b| f(self, b)),
                }
            }
        }
        impl $trait<Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: Tensor) -> Tensor {
                $trait::$method(self, &tensor)
            }
        }
        /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑f32 与（不）带引用的张量↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
    };
}

mod ops {
    pub mod add;
    pub mod assign;
    pub mod div;
    pub mod mul;
    pub mod others;
    pub mod sub;
}

mod property;


/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、i32、f64等）就只是纯数（number），在这里不被认为是张量。
#[derive(Debug, Clone)]
pub struct Tensor {
    data: ArrayD<f32>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap_or_else(|_| {
            panic!(
                "{}",
                TensorError::IncompatibleShape {
                    data_len: data.len(),
                    shape: shape.to_vec(),
                }
            )
        });
        Tensor { data }
    }

    /// 创建一个所有元素均为0的张量
    pub fn zeros(shape: &[usize]) -> Tensor {
        Tensor {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    /// 创建一个与`self`形状相同、元素均为0的张量（优化器累积状态的初值）
    pub fn zeros_like(&self) -> Tensor {
        Tensor::zeros(self.shape())
    }

    /// 按行优先顺序导出所有元素
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }
}
