use super::types::RawMedicineRecord;
use anyhow::Result;

/// Published location of the raw Indian Medicine Dataset.
pub const DATASET_URL: &str = "https://raw.githubusercontent.com/junioralive/Indian-Medicine-Dataset/main/DATA/indian_medicine_data.json";

/// Downloads and parses the full raw dataset.
///
/// Redirects are followed by the client's default policy. A non-2xx final
/// status or a body that is not a JSON array of records is fatal; the caller
/// must not have written any output yet.
pub async fn fetch_dataset(url: &str) -> Result<Vec<RawMedicineRecord>> {
    let response = reqwest::get(url).await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Dataset request failed: HTTP {}",
            response.status()
        ));
    }

    let records: Vec<RawMedicineRecord> = response.json().await?;
    Ok(records)
}
