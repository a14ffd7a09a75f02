use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::collection::types::TestItem;

/// 目标路径是已存在目录时使用的文件名
const DEFAULT_FILE_NAME: &str = "tests.txt";

/// 把收集到的测试清单写成纯文本，一行一个测试
///
/// 格式: "<path> <name>\n"
///
/// 没配置路径或者清单为空时什么都不做，也不报错。
/// 路径指向已存在的目录时，实际写到 <dir>/tests.txt。
/// 文件整体覆盖，不追加。
pub fn write_collection(path: Option<&Path>, items: &[TestItem]) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if items.is_empty() {
        return Ok(());
    }

    let target: PathBuf = if path.is_dir() {
        path.join(DEFAULT_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    let mut contents = String::new();
    for item in items {
        let location = item.location();
        // 位置的行号不进收集文件
        contents.push_str(&format!("{} {}\n", location.path.display(), location.name));
    }

    fs::write(&target, contents)?;
    Ok(())
}
