use anyhow::Result;

use super::build_service;

pub(crate) async fn run() -> Result<()> {
    let service = build_service().await?;
    let deleted = service.collapse_duplicates().await?;
    println!("{}", serde_json::json!({ "deleted": deleted }));
    Ok(())
}
