use crate::Result;

/// 上报用的 HTTP 客户端
///
/// 同步阻塞，不设超时，用传输层默认值。
/// 发出去就完事: 不看响应体，不重试，网络错误直接向上抛。
#[derive(Clone, Debug)]
pub struct ReportClient {
    inner: reqwest::blocking::Client,
}

impl Default for ReportClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportClient {
    pub fn new() -> Self {
        Self {
            inner: reqwest::blocking::Client::new(),
        }
    }

    /// 带 basic auth 的表单 POST
    pub fn post_form(
        &self,
        url: &str,
        credentials: (&str, &str),
        form: &[(&str, String)],
    ) -> Result<()> {
        let (username, token) = credentials;
        self.inner
            .post(url)
            .basic_auth(username, Some(token))
            .form(form)
            .send()?;
        Ok(())
    }
}
