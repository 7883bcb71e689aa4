use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}
