use super::prelude::*;

/// Look up a post by its exact id.
///
/// Fails with `NotFound` if no post exists, there is no
/// silent fallback.
pub fn get_post<R: PostRepo>(repo: &R, id: &str) -> Result<Post> {
    Ok(repo.get_post(id)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn get_existing_post() {
        let db = MockDb::default();
        db.create_post(Post::build().id("42").title("foo").finish())
            .unwrap();
        let post = usecases::get_post(&db, "42").unwrap();
        assert_eq!(post.title, "foo");
    }

    #[test]
    fn get_missing_post() {
        let db = MockDb::default();
        db.create_post(Post::build().id("42").finish()).unwrap();
        assert!(matches!(
            usecases::get_post(&db, "43"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
