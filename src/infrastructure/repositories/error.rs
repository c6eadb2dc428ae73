use crate::domain::errors::DomainError;

// SQLite extended result codes as reported by sqlx.
const SQLITE_CONSTRAINT_NOT_NULL: &str = "1299";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_FOREIGN_KEY: &str = "787";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLITE_CONSTRAINT_FOREIGN_KEY => {
                        return DomainError::Validation(
                            "referenced article does not exist".into(),
                        );
                    }
                    SQLITE_CONSTRAINT_UNIQUE => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    SQLITE_CONSTRAINT_NOT_NULL => {
                        return DomainError::Validation("required column missing".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
