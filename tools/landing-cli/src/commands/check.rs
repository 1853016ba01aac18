//! Content health check.

use anyhow::{bail, Result};
use landing_content::QueryResult;
use serde::Serialize;

use super::CheckArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Outcome of one section query.
#[derive(Debug, Serialize)]
struct SectionStatus {
    section: &'static str,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SectionStatus {
    fn from_result<T>(section: &'static str, result: &QueryResult<T>) -> Self {
        Self {
            section,
            success: result.is_success(),
            error: result.error().map(str::to_string),
        }
    }
}

/// Run the check command.
pub async fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let client = ctx.content_client();
    ctx.output
        .info(&format!("Checking {}", client.config().endpoint));

    let spinner = ctx.output.spinner("Querying sections...");
    let (header, footer, home) = tokio::join!(
        client.get_header_data(),
        client.get_footer_data(),
        client.get_home_data()
    );
    spinner.finish_and_clear();

    let statuses = [
        SectionStatus::from_result("header", &header),
        SectionStatus::from_result("footer", &footer),
        SectionStatus::from_result("home", &home),
    ];

    if ctx.output.is_json() {
        ctx.output.json(&statuses);
    } else {
        for status in &statuses {
            ctx.output.kv(status.section, &status_badge(status.success));
            if let Some(error) = &status.error {
                ctx.output.warn(error);
            }
        }
    }

    let failed = statuses.iter().filter(|s| !s.success).count();
    if failed > 0 && !args.allow_failures {
        bail!("{} of {} sections failed", failed, statuses.len());
    }

    if failed == 0 {
        ctx.output.success("All sections available");
    }
    Ok(())
}
