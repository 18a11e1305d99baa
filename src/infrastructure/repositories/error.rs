use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_STATUS: &str = "posts_status_chk";
const CNT_POST_PUBLISHED_CHECK: &str = "posts_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::not_found("post not found"),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::conflict("unique constraint violated"),
                    "23514" => return DomainError::validation("check constraint violated"),
                    _ => {}
                }
            }

            DomainError::persistence(db_err.message())
        }
        _ => DomainError::persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_POST_SLUG => DomainError::conflict("slug already exists"),
        CNT_POST_STATUS => DomainError::validation("unknown post status"),
        CNT_POST_PUBLISHED_CHECK => {
            DomainError::validation("published posts require published_at")
        }
        other => DomainError::persistence(format!("database constraint violation: {other}")),
    }
}
