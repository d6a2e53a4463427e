use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub key: String,
}
