use derive_more::Display;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Display)]
pub struct UnknownError(BoxedError);

impl std::error::Error for UnknownError {}

impl UnknownError {
    pub fn new(err: BoxedError) -> Self {
        Self(err)
    }

    pub fn inner(self) -> BoxedError {
        self.0
    }
}

impl From<BoxedError> for UnknownError {
    fn from(err: BoxedError) -> Self {
        Self::new(err)
    }
}

impl From<sqlx::error::Error> for UnknownError {
    fn from(err: sqlx::error::Error) -> Self {
        Self::new(err.into())
    }
}

pub mod app {
    use derive_more::Display;
    use salvo::{prelude::StatusError, writer::Json, Piece};
    use serde::Serialize;

    use super::{
        http::ErrorResponse,
        persistence::PersistenceError,
        resource::{NotFoundError, ValidationError},
    };

    /// Every failure a use case can surface, mapped onto an HTTP status
    /// when rendered.
    #[derive(Debug, Display, Serialize)]
    pub enum ApplicationError {
        Validation(ValidationError),
        NotFound(NotFoundError),
        Persistence(PersistenceError),
    }

    impl std::error::Error for ApplicationError {}

    impl From<ValidationError> for ApplicationError {
        fn from(err: ValidationError) -> Self {
            Self::Validation(err)
        }
    }

    impl From<NotFoundError> for ApplicationError {
        fn from(err: NotFoundError) -> Self {
            Self::NotFound(err)
        }
    }

    impl From<PersistenceError> for ApplicationError {
        fn from(err: PersistenceError) -> Self {
            Self::Persistence(err)
        }
    }

    impl Piece for ApplicationError {
        fn render(self, res: &mut salvo::Response) {
            let status = match &self {
                ApplicationError::Validation(_) => StatusError::bad_request(),
                ApplicationError::NotFound(_) => StatusError::not_found(),
                ApplicationError::Persistence(_) => StatusError::service_unavailable(),
            };
            res.render(Json(ErrorResponse::from_status_error(&status, self)));
            res.set_status_error(status);
        }
    }
}

pub mod persistence {
    use std::io;

    use derive_more::Display;
    use serde::Serialize;

    use super::UnknownError;

    pub type SqlState = String;

    /// Storage failures. Never retried; the caller sees them directly.
    #[derive(Debug, Display)]
    pub enum PersistenceError {
        #[display(fmt = "database persistence error: SQLSTATE {_0:?}")]
        Database(Option<SqlState>),
        #[display(fmt = "persistence layer connection error: {_0}")]
        Connection(io::Error),
        #[display(fmt = "PersistenceError decoding row data")]
        DecodeData,
        #[display(fmt = "unknown persistence error: {_0}")]
        Unknown(UnknownError),
    }

    impl std::error::Error for PersistenceError {}

    impl Serialize for PersistenceError {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_none()
        }
    }

    type SqlxError = sqlx::error::Error;

    impl From<SqlxError> for PersistenceError {
        fn from(err: SqlxError) -> Self {
            match err {
                SqlxError::Database(db) => Self::Database(db.code().map(|code| code.into())),
                SqlxError::Io(io) => Self::Connection(io),
                SqlxError::Configuration(_) => {
                    Self::Connection(io::ErrorKind::InvalidInput.into())
                }
                SqlxError::Tls(_) => Self::Connection(io::ErrorKind::ConnectionRefused.into()),
                SqlxError::Protocol(msg) => {
                    Self::Connection(io::Error::new(io::ErrorKind::InvalidData, msg))
                }
                SqlxError::PoolTimedOut => Self::Connection(io::ErrorKind::TimedOut.into()),
                SqlxError::PoolClosed => Self::Connection(io::ErrorKind::NotConnected.into()),
                SqlxError::TypeNotFound { .. }
                | SqlxError::ColumnIndexOutOfBounds { .. }
                | SqlxError::ColumnNotFound(_)
                | SqlxError::ColumnDecode { .. }
                | SqlxError::Decode(_) => Self::DecodeData,
                SqlxError::WorkerCrashed => {
                    tracing::error!("FATAL: sqlx background worker error, {err}");
                    panic!("sqlx background worker error: {err}");
                }
                _ => Self::Unknown(err.into()),
            }
        }
    }
}

pub mod resource {
    use derive_more::Display;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum ValidationErrorKind {
        /// A required value is blank or missing.
        Required,
        /// Maximum inclusive string length exceeded.
        MaxLength(u64),
        /// Minimum inclusive string length not reached.
        MinLength(u64),
        /// The input doesn't match a pattern.
        #[display(fmt = "Validation error kind: pattern {_0}")]
        Pattern(String),
    }

    impl std::error::Error for ValidationErrorKind {}

    /// A single violated field constraint on an incoming request.
    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[display(fmt = "{path}: {message}")]
    pub struct ValidationFieldError {
        /// Resource field path with the invalid value
        pub path: String,
        /// Human-readable description of the violation
        pub message: String,
        /// Kind of validation error
        pub kind: ValidationErrorKind,
    }

    impl ValidationFieldError {
        pub fn new(path: &str, message: &str, kind: ValidationErrorKind) -> Self {
            Self {
                path: path.into(),
                message: message.into(),
                kind,
            }
        }
    }

    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
    #[display(fmt = "Invalid resource {resource_type}, fields {fields:?}")]
    pub struct ValidationError {
        /// Name of the resource
        pub resource_type: &'static str,
        /// Invalid resource fields, one entry per violated field
        pub fields: Vec<ValidationFieldError>,
    }

    impl ValidationError {
        pub fn new(resource_type: &'static str, fields: Vec<ValidationFieldError>) -> Self {
            Self {
                resource_type,
                fields,
            }
        }

        pub fn messages(&self) -> Vec<&str> {
            self.fields.iter().map(|f| f.message.as_str()).collect()
        }
    }

    impl std::error::Error for ValidationError {}

    /// An operation referenced an id absent from the store.
    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
    #[display(fmt = "{message}")]
    pub struct NotFoundError {
        /// Name of the resource
        pub resource_type: &'static str,
        pub message: String,
    }

    impl NotFoundError {
        pub fn user(id: i64) -> Self {
            Self {
                resource_type: "user::User",
                message: format!("User not found with id: {id}"),
            }
        }
    }

    impl std::error::Error for NotFoundError {}
}

pub mod http {
    use derive_more::{Display, Error};
    use salvo::{http::ParseError, prelude::StatusError, writer::Json, Piece, Response};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Display, Clone, Error, Serialize, Deserialize)]
    pub enum BadRequest {
        InvalidContent,
        InvalidPath,
    }

    #[derive(Debug, Display, Clone, Error, Serialize, Deserialize)]
    #[display(fmt = "Response error: {title}, {message}")]
    pub struct ErrorResponse<T> {
        pub title: String,
        pub message: String,
        pub error: T,
    }

    impl<T> ErrorResponse<T> {
        pub fn from_status_error(status: &StatusError, err: T) -> Self {
            Self {
                title: status.name.clone(),
                message: status
                    .summary
                    .clone()
                    .unwrap_or_else(|| status.name.clone()),
                error: err,
            }
        }
    }

    impl From<ParseError> for BadRequest {
        fn from(_: ParseError) -> Self {
            BadRequest::InvalidContent
        }
    }

    impl Piece for BadRequest {
        fn render(self, res: &mut Response) {
            let status = StatusError::bad_request();
            res.render(Json(ErrorResponse::from_status_error(&status, self)));
            res.set_status_error(status);
        }
    }
}
