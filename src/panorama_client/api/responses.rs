use crate::panorama_client::xml::XmlNode;
use crate::types::PanoramaError;

const SUCCESS_STATUS: &str = "success";

/// A parsed `<response status="...">` envelope plus the raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub root: XmlNode,
    pub body: String,
}

impl ApiResponse {
    pub fn parse(body: String) -> Result<Self, PanoramaError> {
        match XmlNode::parse(&body) {
            Ok(root) => Ok(Self { root, body }),
            Err(err) => Err(PanoramaError::protocol(
                format!("response is not well-formed XML: {err}"),
                body,
            )),
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.root.attr("status")
    }

    pub fn is_success(&self) -> bool {
        self.status() == Some(SUCCESS_STATUS)
    }
}
