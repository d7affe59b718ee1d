//! Bodies the API answers with besides entities

/// Answer to a successful create
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

impl Created {
    pub fn new(message: &str, id: i32) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}

/// Answer to any failed request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorMessage {
    pub error: String,
}
