use crate::error::DatabaseError;

pub trait BaseRepo {
    fn get_table_name() -> &'static str;

    fn map_error(error: sqlx::Error, action: &str) -> DatabaseError {
        DatabaseError::from_sqlx_error(error, &format!("{} {}", action, Self::get_table_name()))
    }

    fn create_not_found_error(resource: impl Into<String>) -> DatabaseError {
        DatabaseError::NotFound(format!("{} not found: {}", resource.into(), Self::get_table_name()))
    }
}
