use crate::error::{RegisterError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// `command-{name}-{id}.json` for a successful registration response.
pub fn record_file_name(response: &Value) -> Result<String> {
    let name = file_name_part(response, "name")?;
    let id = file_name_part(response, "id")?;

    Ok(format!("command-{name}-{id}.json"))
}

fn file_name_part<'a>(response: &'a Value, field: &str) -> Result<&'a str> {
    let Some(value) = response.get(field) else {
        return Err(RegisterError::ResponseShape(format!("missing `{field}`")));
    };

    let Some(value) = value.as_str() else {
        return Err(RegisterError::ResponseShape(format!(
            "`{field}` is not a string: {value}"
        )));
    };

    if value.is_empty() {
        return Err(RegisterError::ResponseShape(format!("`{field}` is empty")));
    }

    if value.contains(['/', '\\', '\0']) {
        return Err(RegisterError::ResponseShape(format!(
            "`{field}` can't be used in a file name: {value:?}"
        )));
    }

    Ok(value)
}

/// Writes the raw response body into `output_dir`, replacing any previous
/// record of the same command. The directory itself is never created.
pub fn write_record(output_dir: &Path, response: &Value, body: &[u8]) -> Result<PathBuf> {
    let path = output_dir.join(record_file_name(response)?);

    std::fs::write(&path, body).map_err(|source| RegisterError::Persist {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Wrote {}", path.display());

    Ok(path)
}
