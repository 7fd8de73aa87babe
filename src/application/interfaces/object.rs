use crate::error::AppError;
use crate::model::requests::{ObjCode, Params};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for object operations on the Stream API
///
/// `fields` restricts the attributes returned by the server; an empty slice
/// leaves the selection to the server.
#[async_trait]
pub trait ObjectService: Send + Sync {
    /// Searches objects of a type matching `query`
    ///
    /// # Arguments
    /// * `obj_code` - Object type, e.g. [`ObjCode::TASK`]
    /// * `query` - Search filters, e.g. `projectID` or `extRefID`
    /// * `fields` - Attributes to include in each result
    async fn search(
        &self,
        obj_code: &ObjCode,
        query: &Params,
        fields: &[&str],
    ) -> Result<Vec<Value>, AppError>;

    /// Gets several objects of one type by identifier
    async fn list_by_id(
        &self,
        obj_code: &ObjCode,
        ids: &[&str],
        fields: &[&str],
    ) -> Result<Vec<Value>, AppError>;

    /// Creates an object and returns it as stored by the server
    async fn create(
        &self,
        obj_code: &ObjCode,
        attributes: &Params,
        fields: &[&str],
    ) -> Result<Value, AppError>;

    /// Updates an object and returns its new state
    async fn update(
        &self,
        obj_code: &ObjCode,
        id: &str,
        attributes: &Params,
        fields: &[&str],
    ) -> Result<Value, AppError>;

    /// Gets a single object
    async fn retrieve(
        &self,
        obj_code: &ObjCode,
        id: &str,
        fields: &[&str],
    ) -> Result<Value, AppError>;

    /// Deletes an object
    ///
    /// # Arguments
    /// * `force` - Also delete dependent objects; some types (tasks) refuse it
    async fn delete(&self, obj_code: &ObjCode, id: &str, force: bool) -> Result<Value, AppError>;
}
