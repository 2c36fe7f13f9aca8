/// Characters browsers leave alone in a URI component that `urlencoding` escapes.
const URI_MARKS: [(&str, &str); 5] = [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    /// Image stored under `/images`; the filename is encoded as a URI component,
    /// so spaces become `%20` while parentheses stay literal.
    pub fn from_file(file: &str, position: usize) -> Self {
        Self {
            src: format!("/images/{}", encode_uri_component(file)),
            alt: format!("Gallery Image {}", position + 1),
        }
    }
}

pub fn encode_uri_component(value: &str) -> String {
    URI_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}
