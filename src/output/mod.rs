pub mod csv_writer;
pub mod json_writer;

pub use csv_writer::write_csv;
pub use json_writer::write_json;

use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::error::AppError;
use crate::models::Product;

pub struct OutputPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Writes the collected records once, at the end of the run, as
/// `<basename>.csv` and `<basename>.json`.
pub struct DataStore {
    basename: String,
}

impl DataStore {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            basename: config.basename,
        }
    }

    /// Both files get the same records; prior output is truncated.
    pub fn write(&self, products: &[Product]) -> Result<OutputPaths, AppError> {
        let paths = OutputPaths {
            csv: PathBuf::from(format!("{}.csv", self.basename)),
            json: PathBuf::from(format!("{}.json", self.basename)),
        };

        write_csv(&paths.csv, products)?;
        write_json(&paths.json, products)?;

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> DataStore {
        DataStore::new(OutputConfig {
            basename: dir.join("deals").to_string_lossy().into_owned(),
        })
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::new("Headphones".into(), "$39.99".into(), "60% off".into()),
            Product::new("Blender, 1.5L".into(), "$24.00".into(), "72% off".into()),
            Product::new("Desk \"Pro\"".into(), "$89.50".into(), "55% off".into()),
        ]
    }

    #[test]
    fn csv_and_json_contain_the_same_records() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let products = sample();

        let paths = store.write(&products).unwrap();

        let from_json: Vec<Product> =
            serde_json::from_reader(File::open(&paths.json).unwrap()).unwrap();
        assert_eq!(from_json, products);

        let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["name", "price", "discount"])
        );
        let from_csv: Vec<Product> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(from_csv, products);
    }

    #[test]
    fn rerun_replaces_previous_output() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.write(&sample()).unwrap();
        let second = vec![Product::new("Lamp".into(), "$12.99".into(), "80% off".into())];
        let paths = store.write(&second).unwrap();

        let from_json: Vec<Product> =
            serde_json::from_reader(File::open(&paths.json).unwrap()).unwrap();
        assert_eq!(from_json, second);

        let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
        let from_csv: Vec<Product> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(from_csv, second);
    }

    #[test]
    fn empty_run_still_writes_both_files() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let paths = store.write(&[]).unwrap();
        assert!(paths.csv.exists());
        assert!(paths.json.exists());

        let from_json: Vec<Product> =
            serde_json::from_reader(File::open(&paths.json).unwrap()).unwrap();
        assert!(from_json.is_empty());
    }
}
