use std::path::Path;

use crate::{Error, Result};
use super::data_set::DataSet;


/// A struct that returns [`DataSet`].
/// Using this struct, one can read a data set file.
/// See [`DataSet::from_reader`] for the file format.
///
/// # Example
/// ```no_run
/// use clusterboost::DataSetReader;
/// let filename = "/path/to/data/file.txt";
/// let data = DataSetReader::default()
///     .file(filename)
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct DataSetReader<P> {
    file: Option<P>,
}


impl<P> DataSetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and returns [`DataSet`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<DataSet> {
        let file = self.file
            .ok_or_else(|| Error::invalid("the file name is not set"))?;
        DataSet::from_file(file)
    }
}
