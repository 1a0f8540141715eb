/*
 * @Author       : 老董
 * @Date         : 2025-12-20
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - sgd: SGD 优化器测试
 * - momentum: 带动量SGD测试
 * - rms_prop: RMSProp 优化器测试
 * - adam: Adam 优化器测试
 * - trait_tests: Optimizer trait 通用行为测试（多层、缺失梯度、同名参数等）
 * - config: 超参数配置测试
 */

use std::cell::RefCell;
use std::rc::Rc;

use crate::nn::{ParamLayer, Sequential};
use crate::tensor::Tensor;

mod config;
mod momentum;

type TestModel = Rc<RefCell<Sequential>>;

/// 只含一层、一个参数（及其梯度）的模型
fn single_param_model(name: &str, value: Tensor, grad: Tensor) -> TestModel {
    let mut layer = ParamLayer::new().with_param(name, value);
    layer.set_grad(name, grad);
    Rc::new(RefCell::new(Sequential::new().with_layer(layer)))
}

/// 标量参数`w`，形状为[1, 1]
fn scalar_model(value: f32, grad: f32) -> TestModel {
    single_param_model(
        "w",
        Tensor::new(&[value], &[1, 1]),
        Tensor::new(&[grad], &[1, 1]),
    )
}

fn set_grad(model: &TestModel, layer: usize, name: &str, grad: Tensor) {
    model
        .borrow_mut()
        .layer_mut(layer)
        .unwrap()
        .set_grad(name, grad);
}

fn param(model: &TestModel, layer: usize, name: &str) -> Tensor {
    model
        .borrow()
        .layer(layer)
        .unwrap()
        .param(name)
        .unwrap()
        .clone()
}

fn scalar_param(model: &TestModel) -> f32 {
    param(model, 0, "w").number().unwrap()
}
