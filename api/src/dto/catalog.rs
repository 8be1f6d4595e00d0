use serde::{Deserialize, Serialize};

/// `?email=` scoping a listing to one owner
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
