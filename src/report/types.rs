use std::fmt;

/// 单个测试的三个执行阶段，每个阶段独立上报
///
/// setup/teardown 可以独立于测试体失败，分开报
/// 远端才能区分 fixture 挂了还是断言挂了
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Call,
    Teardown,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Call => "call",
            Phase::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 阶段失败信息: 异常类型名 + 异常消息
#[derive(Debug, Clone)]
pub struct PhaseFailure {
    pub kind: String,
    pub message: String,
}

/// 宿主框架为一个阶段生成的报告事件
///
/// 瞬态数据，钩子同步消费后即丢弃
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub phase: Phase,
    /// 阶段开始时刻，秒
    pub start: f64,
    /// 阶段结束时刻，秒
    pub stop: f64,
    pub failure: Option<PhaseFailure>,
}

impl PhaseReport {
    pub fn passed(phase: Phase, start: f64, stop: f64) -> Self {
        Self {
            phase,
            start,
            stop,
            failure: None,
        }
    }

    pub fn failed(
        phase: Phase,
        start: f64,
        stop: f64,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            start,
            stop,
            failure: Some(PhaseFailure {
                kind: kind.into(),
                message: message.into(),
            }),
        }
    }

    /// 阶段耗时，秒
    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }

    /// 成功时为空串，失败时 "<类型名>: <消息>"
    pub fn error_message(&self) -> String {
        match &self.failure {
            Some(failure) => format!("{}: {}", failure.kind, failure.message),
            None => String::new(),
        }
    }

    /// PASS / FAIL，跟着 error_message 是否为空走
    pub fn result_label(&self) -> &'static str {
        if self.error_message().is_empty() {
            "PASS"
        } else {
            "FAIL"
        }
    }
}
