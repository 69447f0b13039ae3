use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
    ];
}

/// One authorization question: may `user` perform `method` on `path`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SyntheticInput {
    pub method: Method,
    pub path: Vec<String>,
    pub user: String,
}

/// Request body wrapper, serialized as `{"input": {...}}`.
#[derive(Debug, Serialize)]
pub struct DecisionRequest<'input> {
    pub input: &'input SyntheticInput,
}
