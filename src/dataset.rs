use crate::data_frame::{self, *};
use crate::error::{AdalineError, Result};
use log::*;
use ndarray::{Array1, Array2};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;

/// Only the first two classes (setosa and versicolor) are kept
pub const SAMPLE_ROWS: usize = 100;
pub const NEGATIVE_CLASS: &str = "Iris-setosa";

/// One line of `iris.data`, columns in file order
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IrisRecord {
    pub sepal_length: V,
    pub sepal_width: V,
    pub petal_length: V,
    pub petal_width: V,
    pub class: String,
}

#[derive(Clone, Debug)]
pub struct Dataset {
    /// Sepal length and petal length
    pub x: DataFrame,
    pub y: Labels,
}

pub fn encode_label(class: &str) -> V {
    if class == NEGATIVE_CLASS {
        -1.0
    } else {
        1.0
    }
}

impl Dataset {
    pub fn from_records(records: &[IrisRecord]) -> Result<Self> {
        let rows = records.len().min(SAMPLE_ROWS);
        if rows == 0 {
            return Err(AdalineError::empty("no iris records"));
        }
        let mut buffer = Vec::with_capacity(rows * 2);
        for record in &records[..rows] {
            buffer.push(record.sepal_length);
            buffer.push(record.petal_length);
        }
        let x = Array2::from_shape_vec((rows, 2), buffer)
            .map_err(|e| AdalineError::shape(format!("({}, 2)", rows), e))?;
        let y: Array1<V> = records[..rows]
            .iter()
            .map(|record| encode_label(&record.class))
            .collect();
        Ok(Self { x, y })
    }

    pub fn samples(&self) -> usize {
        self.x.nrows()
    }
}

pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let records: Vec<IrisRecord> = data_frame::read_rows(reader)?;
    for record in records.iter().take(5) {
        debug!("{:?}", record);
    }
    let dataset = Dataset::from_records(&records)?;
    info!(
        "Read {} records, using {} samples of shape {:?}",
        records.len(),
        dataset.samples(),
        dataset.x.shape()
    );
    Ok(dataset)
}

fn fetch(url: &str) -> Result<String> {
    info!("Downloading {}", url);
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    debug!("Downloaded {} bytes", body.len());
    Ok(body)
}

/// `source` is either an http(s) url or a local file path
pub fn load_dataset(source: &str) -> Result<Dataset> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let body = fetch(source)?;
        read_dataset(body.as_bytes())
    } else {
        info!("Reading {}", source);
        read_dataset(File::open(source)?)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use crate::dataset::*;
    use std::fs;
    use std::path::PathBuf;

    const SETOSA: &str = "5.1,3.5,1.4,0.2,Iris-setosa\n4.9,3.0,1.4,0.2,Iris-setosa\n";
    const VERSICOLOR: &str = "7.0,3.2,4.7,1.4,Iris-versicolor\n6.4,3.2,4.5,1.5,Iris-versicolor\n";
    const VIRGINICA: &str = "6.3,3.3,6.0,2.5,Iris-virginica\n";

    /// 50 setosa, 50 versicolor, 10 virginica like the head of iris.data
    pub(crate) fn iris_text() -> String {
        let mut text = String::new();
        for _ in 0..25 {
            text.push_str(SETOSA);
        }
        for _ in 0..25 {
            text.push_str(VERSICOLOR);
        }
        for _ in 0..10 {
            text.push_str(VIRGINICA);
        }
        text.push('\n');
        text
    }

    pub(crate) fn iris_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, iris_text()).unwrap();
        path
    }

    #[test]
    fn encode_label_test() {
        assert_eq!(-1.0, encode_label("Iris-setosa"));
        assert_eq!(1.0, encode_label("Iris-versicolor"));
        assert_eq!(1.0, encode_label("Iris-virginica"));
        assert_eq!(1.0, encode_label(""));
    }

    #[test]
    fn read_first_hundred_rows() {
        let dataset = read_dataset(iris_text().as_bytes()).unwrap();
        assert_eq!(&[100, 2], dataset.x.shape());
        assert_eq!(100, dataset.y.len());
        assert_eq!(ndarray::array![5.1, 1.4], dataset.x.row(0));
        assert_eq!(ndarray::array![7.0, 4.7], dataset.x.row(50));
        assert!(dataset.y.iter().take(50).all(|l| *l == -1.0));
        assert!(dataset.y.iter().skip(50).all(|l| *l == 1.0));
    }

    #[test]
    fn short_file_uses_every_row() {
        let text = format!("{}{}", SETOSA, VERSICOLOR);
        let dataset = read_dataset(text.as_bytes()).unwrap();
        assert_eq!(4, dataset.samples());
        assert_eq!(ndarray::array![-1.0, -1.0, 1.0, 1.0], dataset.y);
    }

    #[test]
    fn empty_file_fails() {
        let res = read_dataset("\n\n".as_bytes());
        assert!(matches!(res, Err(AdalineError::EmptyDataset(_))));
    }

    #[test]
    fn malformed_row_fails() {
        let text = "5.1,3.5,oops,0.2,Iris-setosa\n";
        assert!(matches!(
            read_dataset(text.as_bytes()),
            Err(AdalineError::Csv(_))
        ));
        let text = "5.1,3.5,1.4,Iris-setosa\n";
        assert!(matches!(
            read_dataset(text.as_bytes()),
            Err(AdalineError::Csv(_))
        ));
    }

    #[test]
    fn load_from_local_path() {
        let path = iris_file("adaline_dataset_load.data");
        let dataset = load_dataset(path.to_str().unwrap()).unwrap();
        assert_eq!(100, dataset.samples());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_local_path_is_io_error() {
        let path = std::env::temp_dir().join("adaline_dataset_missing.data");
        let res = load_dataset(path.to_str().unwrap());
        assert!(matches!(res, Err(AdalineError::Io(_))));
    }
}
