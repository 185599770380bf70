//! Query parameter types for list endpoints.

use cinelog_core::filters::Filters;
use cinelog_db::store::VideoQuery;
use serde::Deserialize;

/// `GET /videos?title=&genres=a,b&page=&page_size=&sort=`
#[derive(Debug, Default, Deserialize)]
pub struct ListVideosParams {
    pub title: Option<String>,
    /// Comma-separated genre list.
    pub genres: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
}

impl ListVideosParams {
    /// Fill unset parameters from [`Filters::default`].
    pub fn into_query(self) -> VideoQuery {
        let defaults = Filters::default();
        let genres = self
            .genres
            .map(|raw| {
                raw.split(',')
                    .map(|g| g.trim().to_string())
                    .filter(|g| !g.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        VideoQuery {
            title: self.title.unwrap_or_default(),
            genres,
            filters: Filters {
                page: self.page.unwrap_or(defaults.page),
                page_size: self.page_size.unwrap_or(defaults.page_size),
                sort: self.sort.unwrap_or(defaults.sort),
                sort_safelist: defaults.sort_safelist,
            },
        }
    }
}
