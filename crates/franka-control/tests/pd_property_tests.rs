//! PD 控制律的属性测试
//!
//! 使用 proptest 验证反馈律的数学属性。

use franka_control::pd::{GainProfile, JointPdController};
use franka_control::types::{JOINT_COUNT, JointArray, Rad};
use proptest::prelude::*;

fn joint_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0..10.0f64, JOINT_COUNT)
}

fn gain_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..400.0f64, JOINT_COUNT)
}

proptest! {
    /// 纯函数性：相同状态和输入下重复调用结果一致
    #[test]
    fn compute_torque_is_deterministic(
        q in joint_vec(),
        qd in joint_vec(),
        kq in gain_vec(),
        kqd in gain_vec(),
    ) {
        let gains = GainProfile::from_slices(&kq, &kqd).unwrap();
        let pd = JointPdController::new(JointArray::splat(Rad(0.0)), gains);

        let first = pd.compute_torque(&q, &qd).unwrap();
        let second = pd.compute_torque(&q, &qd).unwrap();
        prop_assert_eq!(first, second);
    }

    /// 设定点处零速度 ⇒ 零力矩
    #[test]
    fn zero_error_yields_zero_torque(
        target in joint_vec(),
        kq in gain_vec(),
        kqd in gain_vec(),
    ) {
        let gains = GainProfile::from_slices(&kq, &kqd).unwrap();
        let mut pd = JointPdController::new(JointArray::splat(Rad(0.0)), gains);
        pd.set_desired(&target).unwrap();

        let torque = pd.compute_torque(&target, &[0.0; JOINT_COUNT]).unwrap();
        for i in 0..JOINT_COUNT {
            prop_assert!(torque[i].value().abs() < 1e-12);
        }
    }

    /// 逐关节独立：只扰动一个关节，其余输出不变
    #[test]
    fn joints_are_independent(
        q in joint_vec(),
        qd in joint_vec(),
        perturbation in -5.0..5.0f64,
        joint in 0..JOINT_COUNT,
    ) {
        let gains = GainProfile::uniform(26.7, 3.3);
        let pd = JointPdController::new(JointArray::splat(Rad(0.0)), gains);

        let baseline = pd.compute_torque(&q, &qd).unwrap();

        let mut q_perturbed = q.clone();
        q_perturbed[joint] += perturbation;
        let perturbed = pd.compute_torque(&q_perturbed, &qd).unwrap();

        for i in 0..JOINT_COUNT {
            if i != joint {
                prop_assert_eq!(baseline[i], perturbed[i]);
            }
        }
    }

    /// 比例项符号：位置超出设定点时力矩指向回拉方向
    #[test]
    fn proportional_term_pulls_back(
        offset in 0.001..10.0f64,
        joint in 0..JOINT_COUNT,
    ) {
        let gains = GainProfile::uniform(1.0, 0.0);
        let pd = JointPdController::new(JointArray::splat(Rad(0.0)), gains);

        let mut q = [0.0; JOINT_COUNT];
        q[joint] = offset;
        let torque = pd.compute_torque(&q, &[0.0; JOINT_COUNT]).unwrap();

        prop_assert!(torque[joint].value() < 0.0);
    }

    /// 大幅值输入不会产生非有限输出
    #[test]
    fn large_inputs_stay_finite(
        scale in 1.0..1e9f64,
        sign in prop::bool::ANY,
    ) {
        let gains = GainProfile::uniform(240.0, 30.0);
        let pd = JointPdController::new(JointArray::splat(Rad(0.0)), gains);

        let v = if sign { scale } else { -scale };
        let q = [v; JOINT_COUNT];
        let qd = [-v; JOINT_COUNT];

        let torque = pd.compute_torque(&q, &qd).unwrap();
        for i in 0..JOINT_COUNT {
            prop_assert!(torque[i].value().is_finite());
        }
    }
}
