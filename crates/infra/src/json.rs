use std::io;
use std::path::PathBuf;

use blog_stats_ports::source::{BlogRecordDto, BlogSource};
use blog_stats_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Where the export document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogInput {
    File(PathBuf),
    Stdin,
}

/// Decodes a JSON array of blog records from a file or standard input.
pub struct JsonBlogSource {
    input: BlogInput,
}

impl JsonBlogSource {
    pub fn new(input: BlogInput) -> Self {
        Self { input }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(BlogInput::File(path.into()))
    }

    pub fn stdin() -> Self {
        Self::new(BlogInput::Stdin)
    }
}

impl BlogSource for JsonBlogSource {
    fn fetch(&self) -> Result<Vec<BlogRecordDto>> {
        let records: Vec<BlogRecordDto> = match &self.input {
            BlogInput::File(path) => {
                let reader = FileReader::open_buffered(path).map_err(|source| {
                    InfrastructureError::FileRead { path: path.clone(), source }
                })?;
                serde_json::from_reader(reader)?
            }
            BlogInput::Stdin => serde_json::from_reader(io::stdin().lock())?,
        };
        log::debug!("decoded {} blog records from {:?}", records.len(), self.input);
        Ok(records)
    }
}
