//! Module dispatch and the caller contract.
//!
//! `mist-modules <module> <params-file>` reads one desired-state document
//! (JSON or YAML, `-` for JSON on stdin), runs the matching reconciler and
//! prints the result record to stdout. Failures are printed as
//! `{"failed": true, "msg": …}` with a non-zero exit.

use crate::error::ModuleError;
use crate::params::{self, SiteGroupParams, SiteParams, WiredParams, WlanParams};
use crate::reconciler::{ModuleResult, Reconciler};
use mist_client::{MistClient, DEFAULT_BASE_URL};
use std::io::Read;
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

/// Module names accepted on the command line
const MODULES: [&str; 4] = ["site", "site_group", "wlan", "wired"];

/// Run one module invocation and return the process exit code.
pub async fn run(args: &[String]) -> i32 {
    match execute(args).await {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                emit_failure(&format!("failed to serialize result: {}", e));
                1
            }
        },
        Err(e) => {
            error!("{}", e);
            emit_failure(&e.to_string());
            1
        }
    }
}

fn emit_failure(msg: &str) {
    let failure = serde_json::json!({
        "failed": true,
        "msg": msg,
    });
    println!("{}", failure);
}

async fn execute(args: &[String]) -> Result<ModuleResult, ModuleError> {
    let [module, source] = args else {
        return Err(ModuleError::Usage(format!(
            "expected <module> <params-file>, where <module> is one of {:?}",
            MODULES
        )));
    };

    let raw = load_document(source)?;

    match module.as_str() {
        "site" => {
            let p: SiteParams = serde_json::from_value(raw)?;
            p.validate()?;
            let (reconciler, org_id) =
                connect(p.api_token.as_deref(), p.org_id, p.base_url.as_deref(), p.timeout).await?;
            reconciler.reconcile_site(&p, org_id).await
        }
        "site_group" => {
            let p: SiteGroupParams = serde_json::from_value(raw)?;
            p.validate()?;
            let (reconciler, org_id) =
                connect(p.api_token.as_deref(), p.org_id, p.base_url.as_deref(), p.timeout).await?;
            reconciler.reconcile_site_group(&p, org_id).await
        }
        "wlan" => {
            let p: WlanParams = serde_json::from_value(raw)?;
            p.validate()?;
            let (reconciler, org_id) =
                connect(p.api_token.as_deref(), p.org_id, p.base_url.as_deref(), p.timeout).await?;
            reconciler.reconcile_wlan(&p, org_id).await
        }
        "wired" => {
            let p: WiredParams = serde_json::from_value(raw)?;
            p.validate()?;
            let (reconciler, org_id) =
                connect(p.api_token.as_deref(), p.org_id, p.base_url.as_deref(), p.timeout).await?;
            reconciler.reconcile_wired(&p, org_id).await
        }
        other => Err(ModuleError::Usage(format!(
            "unknown module '{}', expected one of {:?}",
            other, MODULES
        ))),
    }
}

/// Resolve credentials, build the client and verify the token.
///
/// The `GET /self` probe fails fast on a bad token before any resource call
/// is made.
async fn connect(
    api_token: Option<&str>,
    org_id: Option<Uuid>,
    base_url: Option<&str>,
    timeout: Option<u64>,
) -> Result<(Reconciler, Uuid), ModuleError> {
    let token = params::resolve_api_token(api_token)?;
    let org_id = params::resolve_org_id(org_id)?;
    let base_url = base_url.unwrap_or(DEFAULT_BASE_URL).to_string();

    let client = MistClient::new(base_url, token, timeout.map(Duration::from_secs))?;
    let me = client.whoami().await?;
    info!(
        "Authenticated against {} as {}",
        client.base_url(),
        me.email.as_deref().unwrap_or("<unknown>")
    );

    Ok((Reconciler::new(client), org_id))
}

/// Read the params document from a file or stdin.
fn load_document(source: &str) -> Result<serde_json::Value, ModuleError> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return parse_document(&text, false);
    }
    let yaml = source.ends_with(".yml") || source.ends_with(".yaml");
    let text = std::fs::read_to_string(source)?;
    parse_document(&text, yaml)
}

fn parse_document(text: &str, yaml: bool) -> Result<serde_json::Value, ModuleError> {
    if yaml {
        Ok(serde_yaml::from_str(text)?)
    } else {
        Ok(serde_json::from_str(text)?)
    }
}
