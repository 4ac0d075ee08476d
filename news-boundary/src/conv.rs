use super::*;
use news_entities as e;

impl From<e::comment::CommentStatus> for CommentStatus {
    fn from(from: e::comment::CommentStatus) -> Self {
        use e::comment::CommentStatus as E;
        match from {
            E::Invalid => Self::Invalid,
            E::Valid => Self::Valid,
            E::Pending => Self::Pending,
        }
    }
}

impl From<CommentStatus> for e::comment::CommentStatus {
    fn from(from: CommentStatus) -> Self {
        use CommentStatus as C;
        match from {
            C::Invalid => Self::Invalid,
            C::Valid => Self::Valid,
            C::Pending => Self::Pending,
        }
    }
}

impl From<e::post::Post> for Post {
    fn from(from: e::post::Post) -> Self {
        let e::post::Post {
            id,
            slug,
            title,
            abstract_text,
            content,
            tags,
            enabled,
            publication_date_start,
            comments_enabled,
            comments_close_at,
            comments_default_status,
            comments_count,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            slug,
            title,
            abstract_text,
            content,
            tags,
            enabled,
            publication_date_start: publication_date_start.map(e::time::Timestamp::as_millis),
            comments_enabled,
            comments_close_at: comments_close_at.map(e::time::Timestamp::as_millis),
            comments_default_status: comments_default_status.into(),
            comments_count,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            post_id,
            status,
            name,
            email: _,
            url,
            content,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            post_id: post_id.into(),
            status: status.into(),
            name,
            url: url.map(String::from),
            content,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}
