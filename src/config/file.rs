use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Result, RunnaError};

/// runna.toml 的顶层结构
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub report: ReportSection,
}

/// [report] 表，字段与命令行选项一一对应
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReportSection {
    pub collection_output: Option<PathBuf>,
    pub report_url_api_collection: Option<String>,
    pub report_url_api_test: Option<String>,
    pub report_url_api_finalizer: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub test_run_id: Option<String>,
}

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "runna.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| RunnaError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| RunnaError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及父目录递归查找
    /// 2. 用户配置目录 ~/.config/runna/
    ///
    /// 找不到或者读不动都返回 None，缺配置不是错误
    pub fn find_and_load() -> Option<FileConfig> {
        if let Some(config) = Self::try_load_from_current_dir() {
            return Some(config);
        }

        Self::try_load_from_user_dir()
    }

    /// 尝试从当前目录及其父目录加载
    fn try_load_from_current_dir() -> Option<FileConfig> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Self::load_from_path(&config_path).ok();
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// 尝试从用户配置目录加载
    fn try_load_from_user_dir() -> Option<FileConfig> {
        let config_path = dirs::config_dir()?.join("runna").join(Self::CONFIG_FILE);

        if config_path.exists() {
            Self::load_from_path(&config_path).ok()
        } else {
            None
        }
    }
}
