use blog_stats_domain::model::BlogRecord;
use blog_stats_ports::source::{BlogRecordDto, BlogSource};
use blog_stats_shared_kernel::{DomainError, ErrorContext, LikeCount, Result};

use crate::dto::BlogReport;

pub struct AnalyzeBlogs<'a> {
    source: &'a dyn BlogSource,
}

impl<'a> AnalyzeBlogs<'a> {
    pub fn new(source: &'a dyn BlogSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<BlogReport> {
        let records = self.collect()?;
        log::debug!("analyzing {} blog records", records.len());
        Ok(BlogReport::from_records(&records))
    }

    fn collect(&self) -> Result<Vec<BlogRecord>> {
        let dtos = self.source.fetch().context("collecting blog records")?;
        dtos.into_iter()
            .enumerate()
            .map(|(index, dto)| dto_to_domain_record(dto, index))
            .collect()
    }
}

/// The aggregator assumes well-formed records; exports that break the
/// upstream guarantees (empty title or author) are rejected here.
fn dto_to_domain_record(dto: BlogRecordDto, index: usize) -> Result<BlogRecord> {
    if dto.title.trim().is_empty() {
        return Err(DomainError::InvalidRecord { index, reason: "title is empty".into() }.into());
    }
    if dto.author.trim().is_empty() {
        return Err(DomainError::InvalidRecord { index, reason: "author is empty".into() }.into());
    }
    Ok(BlogRecord {
        title: dto.title,
        author: dto.author,
        url: dto.url,
        likes: LikeCount::new(dto.likes),
    })
}
