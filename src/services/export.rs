//! Chart SVG export

use crate::chart::{render_svg, ChartLayout};
use crate::model::{RangeDataset, RangeKey};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the current chart and write it to a timestamped file
///
/// Returns the path of the written file.
pub fn export_chart_svg(
    export_dir: &Path,
    range: RangeKey,
    dataset: &RangeDataset,
) -> Result<PathBuf> {
    let svg = render_svg(&ChartLayout::default(), dataset, "Income Trend");
    let path = export_path(export_dir, range, Local::now().format("%Y%m%d-%H%M%S"));

    if !export_dir.exists() {
        fs::create_dir_all(export_dir)
            .with_context(|| format!("creating export directory {}", export_dir.display()))?;
    }
    fs::write(&path, svg).with_context(|| format!("writing chart to {}", path.display()))?;

    Ok(path)
}

fn export_path(export_dir: &Path, range: RangeKey, stamp: impl std::fmt::Display) -> PathBuf {
    export_dir.join(format!("income-chart-{}-{}.svg", range.key(), stamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset_for;
    use std::env;

    #[test]
    fn test_export_filename_carries_range_key() {
        let path = export_path(Path::new("/tmp"), RangeKey::OneYear, "20250901-120000");
        assert_eq!(
            path,
            PathBuf::from("/tmp/income-chart-1y-20250901-120000.svg")
        );
    }

    #[test]
    fn test_export_writes_svg_file() {
        let dir = env::temp_dir().join("invoice-tui-export-test");
        let _ = fs::remove_dir_all(&dir);

        let dataset = dataset_for(RangeKey::ThreeMonths);
        let path = export_chart_svg(&dir, RangeKey::ThreeMonths, &dataset).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<svg"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("income-chart-3m-"));

        let _ = fs::remove_dir_all(&dir);
    }
}
