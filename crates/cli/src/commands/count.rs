use anyhow::Result;

use super::build_service;

pub(crate) async fn run() -> Result<()> {
    let service = build_service().await?;
    let total = service.count_questions().await?;
    println!("{}", serde_json::json!({ "total_questions": total }));
    Ok(())
}
