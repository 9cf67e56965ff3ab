use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::AppError;
use crate::models::Product;

const COLUMNS: [&str; 3] = ["name", "price", "discount"];

pub fn write_csv(path: &Path, products: &[Product]) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(COLUMNS)?;
    for product in products {
        writer.write_record([
            product.name.as_str(),
            product.price.as_str(),
            product.discount.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
