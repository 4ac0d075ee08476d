use super::prelude::*;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// 1-based page number
    pub page: Option<u64>,
    /// Number of posts per page
    pub count: Option<u64>,
    pub enabled: Option<bool>,
    pub tag: Option<String>,
}

impl PostQuery {
    pub fn pagination(&self) -> Result<Pagination> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(Error::InvalidPage);
        }
        let count = self.count.unwrap_or(DEFAULT_PAGE_SIZE);
        if count < 1 {
            return Err(Error::InvalidLimit);
        }
        let limit = if count > MAX_PAGE_SIZE {
            log::debug!("Requested page size {count} exceeds the maximum of {MAX_PAGE_SIZE}");
            MAX_PAGE_SIZE
        } else {
            count
        };
        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or(Error::InvalidPage)?;
        Ok(Pagination {
            offset: Some(offset),
            limit: Some(limit),
        })
    }
}

/// Fetch a single page of posts.
pub fn list_posts<R: PostRepo>(repo: &R, query: &PostQuery) -> Result<Vec<Post>> {
    let pagination = query.pagination()?;
    let filter = PostFilter {
        enabled: query.enabled,
        tag: query
            .tag
            .as_deref()
            .map(normalize_tag)
            .filter(|t| !t.is_empty()),
    };
    Ok(repo.list_posts(&filter, &pagination)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use super::*;

    fn create_posts(db: &MockDb, n: usize) {
        let start = Timestamp::from_secs(1_000);
        for i in 0..n {
            db.create_post(
                Post::build()
                    .id(&i.to_string())
                    .publication_date_start(Some(start.add_secs(i as i64)))
                    .finish(),
            )
            .unwrap();
        }
    }

    #[test]
    fn default_pagination() {
        let pagination = PostQuery::default().pagination().unwrap();
        assert_eq!(pagination.offset, Some(0));
        assert_eq!(pagination.limit, Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn reject_zero_page_or_count() {
        let query = PostQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(matches!(query.pagination(), Err(Error::InvalidPage)));
        let query = PostQuery {
            count: Some(0),
            ..Default::default()
        };
        assert!(matches!(query.pagination(), Err(Error::InvalidLimit)));
    }

    #[test]
    fn cap_page_size() {
        let query = PostQuery {
            page: Some(2),
            count: Some(MAX_PAGE_SIZE + 1),
            ..Default::default()
        };
        let pagination = query.pagination().unwrap();
        assert_eq!(pagination.limit, Some(MAX_PAGE_SIZE));
        assert_eq!(pagination.offset, Some(MAX_PAGE_SIZE));
    }

    #[test]
    fn never_more_than_count() {
        let db = MockDb::default();
        create_posts(&db, 25);
        let query = PostQuery {
            page: Some(2),
            count: Some(10),
            ..Default::default()
        };
        let posts = list_posts(&db, &query).unwrap();
        assert_eq!(posts.len(), 10);
        // newest first
        assert_eq!(posts[0].id.as_str(), "14");
        assert_eq!(posts[9].id.as_str(), "5");

        let query = PostQuery {
            page: Some(3),
            count: Some(10),
            ..Default::default()
        };
        let posts = list_posts(&db, &query).unwrap();
        assert_eq!(posts.len(), 5);

        let query = PostQuery {
            page: Some(4),
            count: Some(10),
            ..Default::default()
        };
        assert!(list_posts(&db, &query).unwrap().is_empty());
    }

    #[test]
    fn filter_by_tag_and_enabled() {
        let db = MockDb::default();
        db.create_post(Post::build().id("a").tags(vec!["Rust"]).finish())
            .unwrap();
        db.create_post(
            Post::build()
                .id("b")
                .tags(vec!["rust"])
                .enabled(false)
                .finish(),
        )
        .unwrap();
        db.create_post(Post::build().id("c").tags(vec!["php"]).finish())
            .unwrap();

        let query = PostQuery {
            tag: Some(" Rust ".into()),
            ..Default::default()
        };
        let mut ids: Vec<_> = list_posts(&db, &query)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![Id::from("a"), Id::from("b")]);

        let query = PostQuery {
            tag: Some("rust".into()),
            enabled: Some(true),
            ..Default::default()
        };
        let posts = list_posts(&db, &query).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id.as_str(), "a");
    }
}
