use std::fs::File;
use std::path::Path;

use crate::error::AppError;
use crate::models::Product;

pub fn write_json(path: &Path, products: &[Product]) -> Result<(), AppError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, products)?;
    Ok(())
}
