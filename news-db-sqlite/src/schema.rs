table! {
    post (rowid) {
        rowid -> BigInt,
        id -> Text,
        slug -> Text,
        title -> Text,
        abstract_text -> Text,
        content -> Text,
        enabled -> Bool,
        publication_date_start -> Nullable<BigInt>,
        comments_enabled -> Bool,
        comments_close_at -> Nullable<BigInt>,
        comments_default_status -> SmallInt,
        comments_count -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    post_tag (parent_rowid, tag) {
        parent_rowid -> BigInt,
        tag -> Text,
    }
}

joinable!(post_tag -> post (parent_rowid));

table! {
    comment (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        status -> SmallInt,
        name -> Nullable<Text>,
        email -> Nullable<Text>,
        url -> Nullable<Text>,
        content -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(comment -> post (parent_rowid));

allow_tables_to_appear_in_same_query!(comment, post, post_tag);
