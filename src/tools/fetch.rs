use crate::cli::FetchArgs;
use crate::models::VehicleRecord;

pub async fn exec(args: &FetchArgs) -> anyhow::Result<()> {
    let records: Vec<VehicleRecord> = reqwest::get(format!("{}/getData", args.url))
        .await?
        .error_for_status()?
        .json()
        .await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
