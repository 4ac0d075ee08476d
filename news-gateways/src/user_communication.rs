use askama::Template;
use news_entities::{comment::*, email::*, post::*};

#[derive(Template)]
#[template(path = "email_comment_created/subject_EN.txt")]
struct EmailCommentCreatedSubjectTemplate<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(path = "email_comment_created/body_EN.txt")]
struct EmailCommentCreatedBodyTemplate<'a> {
    title: &'a str,
    post_id: &'a str,
    comment_id: &'a str,
    status: &'a str,
    author: &'a str,
    url: Option<&'a str>,
    created_at: String,
    content: &'a str,
    pending: bool,
}

fn post_title(post: &Post) -> &str {
    if post.title.trim().is_empty() {
        post.id.as_str()
    } else {
        &post.title
    }
}

pub fn comment_created_email(post: &Post, comment: &Comment) -> EmailContent {
    let title = post_title(post);
    let author = comment.name.as_deref().unwrap_or("anonymous");
    let subject = EmailCommentCreatedSubjectTemplate { title }
        .render()
        .unwrap_or_else(|err| {
            log::warn!("Failed to render e-mail subject: {err}");
            format!("New comment on \"{title}\"")
        });
    let body = EmailCommentCreatedBodyTemplate {
        title,
        post_id: post.id.as_str(),
        comment_id: comment.id.as_str(),
        status: comment.status.as_ref(),
        author,
        url: comment.url.as_ref().map(|url| url.as_str()),
        created_at: comment.created_at.to_string(),
        content: &comment.content,
        pending: comment.status == CommentStatus::Pending,
    }
    .render()
    .unwrap_or_else(|err| {
        log::warn!("Failed to render e-mail body: {err}");
        comment.content.clone()
    });
    EmailContent {
        subject: subject.trim().to_owned(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_entities::builders::*;

    #[test]
    fn comment_created_email_contains_comment() {
        let post = Post::build().id("42").title("Hello world").finish();
        let comment = Comment::build()
            .post_id("42")
            .name("Jane")
            .url("https://example.com/jane")
            .status(CommentStatus::Pending)
            .content("Nice post!")
            .finish();
        let EmailContent { subject, body } = comment_created_email(&post, &comment);
        assert_eq!(subject, "New comment on \"Hello world\"");
        assert!(body.contains("Nice post!"));
        assert!(body.contains("Author:  Jane"));
        assert!(body.contains("Website: https://example.com/jane"));
        assert!(body.contains("Status:  pending"));
        assert!(body.contains("awaiting moderation"));
    }

    #[test]
    fn fall_back_to_post_id_and_anonymous_author() {
        let post = Post::build().id("42").finish();
        let comment = Comment::build().post_id("42").content("hi").finish();
        let EmailContent { subject, body } = comment_created_email(&post, &comment);
        assert_eq!(subject, "New comment on \"42\"");
        assert!(body.contains("Author:  anonymous"));
        assert!(!body.contains("Website:"));
        assert!(!body.contains("awaiting moderation"));
    }
}
