use super::*;

#[get("/posts?<page>&<count>&<enabled>&<tag>")]
pub fn get_posts(
    db: &State<Connections>,
    page: Option<u64>,
    count: Option<u64>,
    enabled: Option<bool>,
    tag: Option<String>,
) -> Result<Vec<json::Post>> {
    let query = usecases::PostQuery {
        page,
        count,
        enabled,
        tag,
    };
    let posts = usecases::list_posts(&db.shared()?, &query)?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[get("/posts/<id>")]
pub fn get_post(db: &State<Connections>, id: &str) -> Result<json::Post> {
    let post = usecases::get_post(&db.shared()?, id)?;
    Ok(Json(post.into()))
}
