/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 带动量SGD测试
 */

use approx::assert_abs_diff_eq;

use super::{param, scalar_model, scalar_param, set_grad, single_param_model};
use crate::nn::optimizer::{Optimizer, SGD, SGDMomentum};
use crate::tensor::Tensor;

#[test]
fn test_momentum_velocity_accumulates() {
    // lr=0.1, m=0.9, p=1.0, g=1.0
    // 第1步：v = -0.1，p = 0.9
    // 第2步：v = 0.9 * (-0.1) - 0.1 = -0.19，p = 0.71
    let model = scalar_model(1.0, 1.0);
    let mut optimizer = SGDMomentum::new(&model, 0.1, 0.9);

    optimizer.step().unwrap();
    let v = optimizer.velocity("w").unwrap().number().unwrap();
    assert_abs_diff_eq!(v, -0.1, epsilon = 1e-6);
    assert_abs_diff_eq!(scalar_param(&model), 0.9, epsilon = 1e-6);

    optimizer.step().unwrap();
    let v = optimizer.velocity("w").unwrap().number().unwrap();
    assert_abs_diff_eq!(v, -0.19, epsilon = 1e-6);
    assert_abs_diff_eq!(scalar_param(&model), 0.71, epsilon = 1e-6);
}

#[test]
fn test_zero_momentum_is_identical_to_sgd() {
    let start = Tensor::new(&[0.3, -1.7, 2.9], &[3]);
    let grads = [
        Tensor::new(&[0.1, 0.2, -0.3], &[3]),
        Tensor::new(&[-1.5, 0.7, 0.05], &[3]),
        Tensor::new(&[3.3, -0.01, 1.0], &[3]),
    ];
    let sgd_model = single_param_model("w", start.clone(), grads[0].clone());
    let momentum_model = single_param_model("w", start, grads[0].clone());

    let mut sgd = SGD::new(&sgd_model, 0.05);
    let mut momentum = SGDMomentum::new(&momentum_model, 0.05, 0.0);
    for grad in &grads {
        set_grad(&sgd_model, 0, "w", grad.clone());
        set_grad(&momentum_model, 0, "w", grad.clone());
        sgd.step().unwrap();
        momentum.step().unwrap();

        // 逐位一致
        assert_eq!(param(&sgd_model, 0, "w"), param(&momentum_model, 0, "w"));
    }
    // m == 0 时不创建速度状态
    assert!(momentum.velocity("w").is_none());
}

#[test]
fn test_momentum_second_delta_differs() {
    let model = scalar_model(1.0, 0.5);
    let mut optimizer = SGDMomentum::new(&model, 0.1, 0.5);

    let p0 = scalar_param(&model);
    optimizer.step().unwrap();
    let p1 = scalar_param(&model);
    optimizer.step().unwrap();
    let p2 = scalar_param(&model);

    // 第1步 delta = -0.05，第2步 delta = 0.5 * (-0.05) - 0.05 = -0.075
    assert_abs_diff_eq!(p1 - p0, -0.05, epsilon = 1e-6);
    assert_abs_diff_eq!(p2 - p1, -0.075, epsilon = 1e-6);
}

#[test]
fn test_momentum_velocity_matches_param_shape() {
    let model = single_param_model(
        "w",
        Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]),
        Tensor::new(&[1.; 6], &[2, 3]),
    );
    let mut optimizer = SGDMomentum::new(&model, 0.1, 0.9);
    assert!(optimizer.velocity("w").is_none());

    optimizer.step().unwrap();
    let velocity = optimizer.velocity("w").unwrap();
    assert_eq!(velocity.shape(), &[2, 3]);
    assert_abs_diff_eq!(
        velocity.clone(),
        Tensor::new(&[-0.1; 6], &[2, 3]),
        epsilon = 1e-6
    );
}
