//! Inventory operations for MockMistClient

use super::MockMistClient;
use crate::error::MistError;
use crate::models::*;
use uuid::Uuid;

pub async fn list_inventory(
    client: &MockMistClient,
    _org_id: Uuid,
) -> Result<Vec<InventoryDevice>, MistError> {
    let inventory = client.inventory.lock().unwrap();
    Ok(inventory.clone())
}

pub async fn update_device_config(
    client: &MockMistClient,
    _site_id: Uuid,
    device_id: Uuid,
    config: &SwitchConfig,
) -> Result<serde_json::Value, MistError> {
    let known = client
        .inventory
        .lock()
        .unwrap()
        .iter()
        .any(|d| d.id == Some(device_id));
    if !known {
        return Err(MistError::NotFound(format!(
            "Device {} not found",
            device_id
        )));
    }

    client
        .device_configs
        .lock()
        .unwrap()
        .insert(device_id, config.clone());
    serde_json::to_value(config).map_err(MistError::Serialization)
}
