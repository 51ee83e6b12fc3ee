//! Translations of user facing messages.
//!
//! Messages are looked up by their English text. Anything without a translation, including
//! every message of an unknown language, is returned unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static ZH_CN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
  HashMap::from([
    ("ftp port is required", "FTP 端口为必填项"),
    ("directory path is required", "目录路径为必填项"),
    (
      "local and remote file paths are required",
      "本地和远程文件路径为必填项",
    ),
    ("file path is required", "文件路径为必填项"),
    (
      "not supported for performance reasons",
      "出于性能原因不支持此操作",
    ),
    ("ftp server returned no entries", "FTP 服务器未返回任何条目"),
  ])
});

#[derive(Clone, Debug, Default)]
pub(crate) struct Locale {
  catalog: Option<&'static HashMap<&'static str, &'static str>>,
}

impl Locale {
  /// Accepts `zh_CN`, `zh-CN`, `zh`, case insensitive. Everything else is English.
  pub(crate) fn new(language: &str) -> Self {
    let normalized = language.trim().replace('-', "_").to_ascii_lowercase();
    let catalog = match normalized.as_str() {
      "zh" | "zh_cn" | "zh_hans" => Some(&*ZH_CN),
      _ => None,
    };
    Locale { catalog }
  }

  pub(crate) fn get(&self, message: &str) -> String {
    self
      .catalog
      .and_then(|c| c.get(message))
      .map(|m| m.to_string())
      .unwrap_or_else(|| message.to_string())
  }
}
