//! Job evaluation — wraps the upstream call and guarantees callers a
//! complete report.
//!
//! Flow: credential check → prompt build → chat call → fence strip → parse →
//! radar normalize. Every failure resolves to a deterministic fallback
//! report, so this module never errors to its caller and downstream code
//! handles exactly one output shape.

use tracing::{info, warn};

use crate::config::Config;
use crate::evaluation::prompts::{build_user_prompt, EVALUATION_SYSTEM};
use crate::evaluation::radar::{normalize_radar, zero_radar};
use crate::llm_client::{strip_json_fences, ChatCompletion, LlmError};
use crate::models::form::FormInput;
use crate::models::report::AnalysisReport;

/// Shown when no credential is configured; no upstream call is attempted.
const MSG_MISSING_KEY: &str =
    "系统未检测到 API Key。请在 .env 文件中配置 API_KEY (推荐使用 Kimi API)。";

/// Shown when the upstream call or response parsing fails.
const MSG_UPSTREAM_FAILURE: &str = "AI 连接失败或解析错误。请检查 API Key 额度或网络设置。";

/// Evaluates one form submission. Exactly one outbound call per invocation,
/// or zero when the credential is missing.
pub async fn evaluate(
    config: &Config,
    chat: &dyn ChatCompletion,
    input: &FormInput,
) -> AnalysisReport {
    if config.api_key.is_none() {
        warn!("evaluation degraded: no API key configured");
        return fallback_report(MSG_MISSING_KEY);
    }

    match try_evaluate(chat, input).await {
        Ok(report) => {
            info!(
                "evaluation succeeded: score={} tier={}",
                report.score, report.tier
            );
            report
        }
        Err(e) => {
            warn!("evaluation failed, returning fallback report: {e}");
            fallback_report(MSG_UPSTREAM_FAILURE)
        }
    }
}

async fn try_evaluate(
    chat: &dyn ChatCompletion,
    input: &FormInput,
) -> Result<AnalysisReport, LlmError> {
    let user_prompt = build_user_prompt(input);
    let content = chat.complete(EVALUATION_SYSTEM, &user_prompt).await?;
    let mut report: AnalysisReport = serde_json::from_str(strip_json_fences(&content))?;
    report.radar_data = normalize_radar(report.radar_data)?;
    Ok(report)
}

/// The degraded-but-complete report every failure path resolves to.
pub fn fallback_report(message: &str) -> AnalysisReport {
    AnalysisReport {
        score: 0,
        tier: "系统故障".to_string(),
        rank_title: "暂停营业".to_string(),
        percentile: 0,
        analysis: message.to_string(),
        sharp_analysis: "AI 罢工了，可能是被你的工作吓到了（其实是网络问题）。".to_string(),
        pros: vec![],
        cons: vec![],
        radar_data: zero_radar(),
        suggestions: vec!["检查 API 配置".to_string(), "刷新页面重试".to_string()],
    }
}
