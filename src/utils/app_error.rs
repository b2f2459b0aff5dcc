use std::fmt;

use axum::response::{IntoResponse, Response};
use hyper::StatusCode;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::structs::register_form::Field;

pub enum AppError {
    //Render errors
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::InternalServerError => "",
        };

        let status_code = match self {
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if body.is_empty() {
            return status_code.into_response();
        }

        (status_code, body).into_response()
    }
}

/// One failing rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Every rule violation of a submission, in the order they were found.
///
/// Serializes as a `field -> [message]` map holding only the failing fields,
/// which is the shape the register view expects for `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldValidationError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldValidationError { field, message });
    }

    pub fn single(field: Field, message: &'static str) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages attached to `field`, in rule order.
    pub fn get(&self, field: Field) -> Vec<&'static str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Failing fields, in form order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields().into_iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", self.get(field).join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in fields {
            map.serialize_entry(field.as_str(), &self.get(field))?;
        }
        map.end()
    }
}
