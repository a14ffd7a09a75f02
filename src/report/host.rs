use std::process::Command;

/// 随收集报告上送的主机元数据
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub sys_name: String,
    pub hostname: String,
    pub sys_release: String,
    pub sys_version: String,
    pub sys_machine: String,
}

impl HostInfo {
    /// 采集当前主机信息，拿不到的字段降级为 "unknown" 或空串
    pub fn collect() -> Self {
        Self {
            sys_name: std::env::consts::OS.to_string(),
            hostname: resolve_hostname(),
            sys_release: uname_output("-r"),
            sys_version: uname_output("-v"),
            sys_machine: std::env::consts::ARCH.to_string(),
        }
    }
}

/// 机器主机名，失败时退回 "unknown"
fn resolve_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// 内核 release/version 走 uname，非 Unix 或失败时为空串
fn uname_output(flag: &str) -> String {
    Command::new("uname")
        .arg(flag)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default()
}
