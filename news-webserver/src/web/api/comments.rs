use rocket::form::{Form, FromForm};

use super::*;

/// Response of a submission.
///
/// Rejected submissions are answered with the
/// collected field errors.
#[derive(rocket::Responder)]
pub enum CommentSubmission {
    Accepted(Json<json::Comment>),
    #[response(status = 422)]
    Rejected(Json<json::ValidationErrors>),
}

impl From<Submission<Comment>> for CommentSubmission {
    fn from(from: Submission<Comment>) -> Self {
        match from {
            Submission::Accepted(comment) => Self::Accepted(Json(comment.into())),
            Submission::Rejected(errors) => Self::Rejected(Json(json::ValidationErrors {
                http_status: Status::UnprocessableEntity.code,
                message: "The submitted comment is invalid".into(),
                errors: errors
                    .into_iter()
                    .map(|err| json::FieldError {
                        field: err.field.to_owned(),
                        message: err.message,
                    })
                    .collect(),
            })),
        }
    }
}

type SubmissionResult = result::Result<CommentSubmission, ApiError>;

fn new_comment_from_json(from: json::NewComment) -> usecases::NewComment {
    let json::NewComment {
        name,
        email,
        url,
        content,
    } = from;
    usecases::NewComment {
        name,
        email,
        url,
        content,
    }
}

#[derive(Debug, FromForm)]
pub struct NewCommentForm {
    name: Option<String>,
    email: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

impl From<NewCommentForm> for usecases::NewComment {
    fn from(from: NewCommentForm) -> Self {
        let NewCommentForm {
            name,
            email,
            url,
            content,
        } = from;
        Self {
            name,
            email,
            url,
            content,
        }
    }
}

#[get("/posts/<id>/comments?<status>")]
pub fn get_comments_of_post(
    db: &State<Connections>,
    id: &str,
    status: Option<&str>,
) -> Result<Vec<json::Comment>> {
    let status = status
        .map(str::parse::<CommentStatus>)
        .transpose()
        .map_err(|_| usecases::Error::InvalidCommentStatus)?;
    let comments = usecases::load_comments_of_post(&db.shared()?, id, status)?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

#[post("/posts/<id>/comments", format = "application/json", data = "<comment>")]
pub fn post_comment(
    db: &State<Connections>,
    notify: &State<Notify>,
    id: &str,
    comment: JsonResult<json::NewComment>,
) -> SubmissionResult {
    let new_comment = new_comment_from_json(comment?.into_inner());
    let submission = flows::create_comment(db, &*notify.0, id, new_comment)?;
    Ok(submission.into())
}

#[post("/posts/<id>/comments", format = "form", data = "<comment>", rank = 2)]
pub fn post_comment_form(
    db: &State<Connections>,
    notify: &State<Notify>,
    id: &str,
    comment: Form<NewCommentForm>,
) -> SubmissionResult {
    let submission = flows::create_comment(db, &*notify.0, id, comment.into_inner().into())?;
    Ok(submission.into())
}

#[put(
    "/posts/<id>/comments/<comment_id>",
    format = "application/json",
    data = "<comment>"
)]
pub fn put_comment(
    db: &State<Connections>,
    auth: Auth,
    cfg: &State<Cfg>,
    id: &str,
    comment_id: &str,
    comment: JsonResult<json::CommentUpdate>,
) -> SubmissionResult {
    auth.moderator(cfg)?;
    let json::CommentUpdate {
        name,
        email,
        url,
        content,
        status,
    } = comment?.into_inner();
    let update = usecases::CommentUpdate {
        fields: usecases::NewComment {
            name,
            email,
            url,
            content,
        },
        status: status.map(Into::into),
    };
    let submission = flows::update_comment(db, id, comment_id, update)?;
    Ok(submission.into())
}
