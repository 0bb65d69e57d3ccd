use serde::Deserialize;

/// One product record as served by a catalog endpoint.
///
/// Two shapes are seen in practice: `category` as a bare label or as an
/// object with a `name`, and the image as a single `image` URL or an
/// `images` array. Unknown fields (ratings, slugs, timestamps) are ignored.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct WireProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<WireImages>,
    #[serde(default)]
    pub images: Option<WireImages>,
    pub category: WireCategory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum WireCategory {
    Label(String),
    Named { name: String },
}

impl WireCategory {
    pub fn into_label(self) -> String {
        match self {
            WireCategory::Label(label) => label,
            WireCategory::Named { name } => name,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum WireImages {
    One(String),
    Many(Vec<String>),
}

impl WireImages {
    pub fn into_urls(self) -> Vec<String> {
        match self {
            WireImages::One(url) => vec![url],
            WireImages::Many(urls) => urls,
        }
    }
}
