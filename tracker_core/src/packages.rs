//! Sensor packages: the built-in samples and package files.
//!
//! Package files are picked by extension:
//! - `.json`: an array of `{"tag": "RUN", "values": [15000, 1, 75]}`
//! - `.toml`: `[[package]]` tables with `tag` and `values`
//! - `.csv`: one package per row, `tag,v1,v2,...`, no header

use crate::{Error, Package, Result};
use serde::Deserialize;
use std::path::Path;

/// The fixed packages processed when no input file is given
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// TOML package file layout
#[derive(Debug, Deserialize)]
struct PackageFile {
    #[serde(default)]
    package: Vec<Package>,
}

/// Load packages from a file, keeping file order
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let packages = match extension.as_deref() {
        Some("json") => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        }
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            let file: PackageFile = toml::from_str(&contents)?;
            file.package
        }
        Some("csv") => read_csv_packages(path)?,
        _ => {
            return Err(Error::Config(format!(
                "Unsupported package file {:?} (expected .json, .toml or .csv)",
                path
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

fn read_csv_packages(path: &Path) -> Result<Vec<Package>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut packages = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let mut fields = record.iter();

        let Some(tag) = fields.next().filter(|t| !t.is_empty()) else {
            tracing::debug!("Skipping empty CSV row {}", row + 1);
            continue;
        };

        let values = fields
            .map(|field| {
                field.parse::<f64>().map_err(|e| {
                    Error::InvalidInput(format!(
                        "row {}: value {:?} is not a number: {}",
                        row + 1,
                        field,
                        e
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(Package::new(tag, values));
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_order() {
        let tags: Vec<_> = sample_packages().into_iter().map(|p| p.tag).collect();
        assert_eq!(tags, ["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn test_load_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.json");
        std::fs::write(
            &path,
            r#"[{"tag": "RUN", "values": [15000, 1, 75]}, {"tag": "WLK", "values": [9000, 1, 75, 180]}]"#,
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], Package::new("RUN", [15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_load_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.toml");
        std::fs::write(
            &path,
            r#"
[[package]]
tag = "SWM"
values = [720, 1, 80, 25, 40]

[[package]]
tag = "RUN"
values = [15000, 1.5, 75]
"#,
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].tag, "SWM");
        assert_eq!(packages[1].values, vec![15000.0, 1.5, 75.0]);
    }

    #[test]
    fn test_load_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.csv");
        std::fs::write(
            &path,
            "# tag, values...\nSWM, 720, 1, 80, 25, 40\nRUN,15000,1,75\n\nWLK,9000,1,75,180\n",
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();
        let tags: Vec<_> = packages.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, ["SWM", "RUN", "WLK"]);
        assert_eq!(packages[0].values.len(), 5);
    }

    #[test]
    fn test_csv_bad_number() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.csv");
        std::fs::write(&path, "RUN,lots,1,75\n").unwrap();

        assert!(matches!(
            load_packages(&path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.yaml");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(load_packages(&path), Err(Error::Config(_))));
    }
}
