/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @Description  : 优化器超参数配置测试（JSON读取、校验、构建）
 */

use approx::assert_abs_diff_eq;

use super::{scalar_model, scalar_param};
use crate::assert_err;
use crate::errors::OptimizerError;
use crate::nn::optimizer::{
    AdamConfig, MomentumConfig, Optimizer, OptimizerConfig, RmsPropConfig, SGDMomentum,
    SgdConfig,
};

#[test]
fn test_config_from_json_fills_defaults() {
    assert_eq!(
        OptimizerConfig::from_json(r#"{"kind": "sgd"}"#).unwrap(),
        OptimizerConfig::Sgd(SgdConfig { lr: 1e-4 })
    );
    assert_eq!(
        OptimizerConfig::from_json(r#"{"kind": "momentum", "lr": 0.05}"#).unwrap(),
        OptimizerConfig::Momentum(MomentumConfig {
            lr: 0.05,
            momentum: 0.0
        })
    );
    assert_eq!(
        OptimizerConfig::from_json(r#"{"kind": "rmsprop", "decay": 0.9}"#).unwrap(),
        OptimizerConfig::RmsProp(RmsPropConfig {
            lr: 1e-2,
            decay: 0.9,
            eps: 1e-8
        })
    );
    assert_eq!(
        OptimizerConfig::from_json(r#"{"kind": "adam", "beta2": 0.99, "initial_step": 10}"#)
            .unwrap(),
        OptimizerConfig::Adam(AdamConfig {
            beta2: 0.99,
            initial_step: 10,
            ..AdamConfig::default()
        })
    );
}

#[test]
fn test_config_from_invalid_json() {
    assert_err!(
        OptimizerConfig::from_json(r#"{"kind": "adagrad"}"#),
        OptimizerError::InvalidConfig(msg) if msg.contains("adagrad")
    );
    assert_err!(
        OptimizerConfig::from_json(r#"{"lr": 0.1}"#),
        OptimizerError::InvalidConfig(_)
    );
    assert_err!(
        OptimizerConfig::from_json("not json"),
        OptimizerError::InvalidConfig(_)
    );
}

#[test]
fn test_config_rejects_unknown_fields() {
    // 拼错的键不能被悄悄忽略，否则会以默认学习率训练
    assert_err!(
        OptimizerConfig::from_json(r#"{"kind": "adam", "learning_rate": 0.5}"#),
        OptimizerError::InvalidConfig(msg) if msg.contains("learning_rate")
    );
    assert_err!(
        OptimizerConfig::from_json(r#"{"kind": "sgd", "lr": 0.1, "momentum": 0.9}"#),
        OptimizerError::InvalidConfig(msg) if msg.contains("momentum")
    );
    assert_err!(
        OptimizerConfig::from_json(r#"{"kind": "rmsprop", "beta1": 0.9}"#),
        OptimizerError::InvalidConfig(msg) if msg.contains("beta1")
    );
    assert_err!(
        OptimizerConfig::from_json(r#"{"kind": "momentum", "decay": 0.9}"#),
        OptimizerError::InvalidConfig(msg) if msg.contains("decay")
    );
}

#[test]
fn test_config_json_round_trip() {
    let config = OptimizerConfig::RmsProp(RmsPropConfig {
        lr: 0.5,
        decay: 0.5,
        eps: 0.25,
    });
    let json = config.to_json().unwrap();
    assert!(json.contains(r#""kind":"rmsprop""#), "{json}");
    assert_eq!(OptimizerConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_config_validate() {
    assert!(OptimizerConfig::default().validate().is_ok());
    assert!(AdamConfig::default().validate().is_ok());
    assert!(RmsPropConfig::default().validate().is_ok());
    // 边界值
    assert!(
        RmsPropConfig {
            decay: 1.0,
            eps: 0.0,
            ..RmsPropConfig::default()
        }
        .validate()
        .is_ok()
    );

    assert_err!(
        MomentumConfig {
            lr: 0.1,
            momentum: 1.0
        }
        .validate(),
        OptimizerError::InvalidHyperparameter { name: "momentum", .. }
    );
    assert_err!(
        RmsPropConfig {
            decay: -0.1,
            ..RmsPropConfig::default()
        }
        .validate(),
        OptimizerError::InvalidHyperparameter { name: "decay", .. }
    );
    assert_err!(
        RmsPropConfig {
            eps: -1e-8,
            ..RmsPropConfig::default()
        }
        .validate(),
        OptimizerError::InvalidHyperparameter { name: "eps", .. }
    );
    assert_err!(
        AdamConfig {
            beta1: 1.0,
            ..AdamConfig::default()
        }
        .validate(),
        OptimizerError::InvalidHyperparameter { name: "beta1", .. }
    );
    assert_err!(
        SgdConfig { lr: f32::NAN }.validate(),
        OptimizerError::InvalidHyperparameter { name: "lr", value, .. } if value.is_nan()
    );
}

#[test]
fn test_invalid_hyperparameter_message() {
    let err = MomentumConfig {
        lr: 0.1,
        momentum: 1.5,
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.to_string(), "超参数`momentum`的值1.5不合法：须位于[0, 1)");
}

#[test]
fn test_config_build() {
    let model = scalar_model(1.0, 1.0);

    let cases = [
        (r#"{"kind": "sgd", "lr": 0.1}"#, "SGD", 0.1),
        (r#"{"kind": "momentum", "momentum": 0.9}"#, "SGDMomentum", 1e-4),
        (r#"{"kind": "rmsprop"}"#, "RMSProp", 1e-2),
        (r#"{"kind": "adam"}"#, "Adam", 1e-3),
    ];
    for (json, name, lr) in cases {
        let optimizer = OptimizerConfig::from_json(json)
            .unwrap()
            .build(&model)
            .unwrap();
        assert_eq!(optimizer.name(), name);
        assert_eq!(optimizer.learning_rate(), lr);
    }

    // 未通过校验的配置不会构建出优化器
    let result = OptimizerConfig::Adam(AdamConfig {
        beta2: 1.0,
        ..AdamConfig::default()
    })
    .build(&model);
    assert!(matches!(
        result,
        Err(OptimizerError::InvalidHyperparameter { name: "beta2", .. })
    ));
}

#[test]
fn test_unvalidated_construction_is_allowed() {
    // 直接构造不做校验，越界超参数照常参与计算
    let model = scalar_model(1.0, 1.0);
    let mut optimizer = SGDMomentum::with_config(
        &model,
        MomentumConfig {
            lr: 0.1,
            momentum: 1.0,
        },
    );
    optimizer.step().unwrap();
    optimizer.step().unwrap();
    // v1 = -0.1, v2 = 1.0 * (-0.1) - 0.1 = -0.2, p = 1 - 0.3
    assert_abs_diff_eq!(scalar_param(&model), 0.7, epsilon = 1e-6);
}
