use serde::Deserialize;
use validator::Validate;

/// `content` is required; a form without it is rejected by the extractor.
#[derive(Deserialize, Validate)]
pub struct TodoReqForm {
    #[validate(length(max = 200))]
    content: String,
}

impl TodoReqForm {
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Deserialize)]
pub struct TodoReqPath {
    id: i64,
}

impl TodoReqPath {
    pub fn id(&self) -> &i64 {
        &self.id
    }
}
