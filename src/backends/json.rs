use crate::errors::ConversionError;
use crate::publist::PublicationList;

/// Pretty-printed JSON of the grouped, cleaned records
pub fn render_json(list: &PublicationList) -> Result<String, ConversionError> {
    Ok(serde_json::to_string_pretty(list)?)
}
